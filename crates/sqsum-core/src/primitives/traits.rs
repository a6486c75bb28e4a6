//! Unified generic compute primitives trait

use crate::numeric::Numeric;
use num_traits::Zero;

/// Unified trait for computational primitives with generic numeric support
///
/// This trait provides the low-level reduction loops optimized for different
/// backends (scalar, AVX2) with compile-time dispatch. Default
/// implementations are strictly index-ordered single-accumulator folds, so a
/// backend that does not override an operation is bit-reproducible across
/// calls.
pub trait ComputePrimitives<T: Numeric = f64>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of elements processed per lane step)
    fn simd_width(&self) -> usize {
        1
    }

    /// Sum all elements in a slice
    fn sum(&self, data: &[T]) -> T::Accum {
        data.iter()
            .map(|&x| <T::Accum as From<T>>::from(x))
            .fold(<T::Accum as Zero>::zero(), |acc, x| acc + x)
    }

    /// Compute sum of squares
    ///
    /// Bounds derive from the slice itself; there is no independent length
    /// parameter to get wrong.
    fn sum_of_squares(&self, data: &[T]) -> T::Accum {
        data.iter()
            .map(|&x| {
                let f = <T::Accum as From<T>>::from(x);
                f * f
            })
            .fold(<T::Accum as Zero>::zero(), |acc, x| acc + x)
    }
}
