//! Computational primitives with compile-time dispatch
//!
//! This module provides the optimized reduction loops underneath the kernel
//! API.
//!
//! # Architecture
//!
//! - Single unified `ComputePrimitives<T>` trait for all operations
//! - Concrete backend types: `ScalarBackend`, `Avx2Backend`
//! - Compile-time backend selection with runtime validation
//! - No heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use sqsum_core::{ComputePrimitives, ScalarBackend};
//!
//! let backend = ScalarBackend::new();
//! let data = vec![3.0, 4.0];
//! assert_eq!(backend.sum_of_squares(&data), 25.0);
//! ```

pub mod backends;
pub mod traits;

pub use backends::{best_backend_name, ScalarBackend};
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use backends::Avx2Backend;
pub use traits::ComputePrimitives;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Create an AVX2 backend (panics if not supported)
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub fn avx2_backend() -> Avx2Backend {
    Avx2Backend::new()
}
