//! AVX2 backend implementation
//!
//! Provides AVX2-optimized f64 reduction loops. The generic scalar paths stay
//! available for every other element type through `ScalarBackend`.

mod ops;

use crate::primitives::ComputePrimitives;

/// AVX2 backend for x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend;

impl Avx2Backend {
    /// Create a new AVX2 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support AVX2 instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        if !is_x86_feature_detected!("avx2") {
            panic!("AVX2 backend requested but CPU doesn't support AVX2 instructions");
        }
        Self
    }

    /// Check if AVX2 is available on this CPU
    pub fn is_available() -> bool {
        is_x86_feature_detected!("avx2")
    }
}

impl ComputePrimitives<f64> for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2"
    }

    fn simd_width(&self) -> usize {
        4
    }

    fn sum(&self, data: &[f64]) -> f64 {
        // Safety: We checked CPU support in new()
        unsafe { ops::sum_f64(data) }
    }

    fn sum_of_squares(&self, data: &[f64]) -> f64 {
        // Safety: We checked CPU support in new()
        unsafe { ops::sum_of_squares_f64(data) }
    }
}
