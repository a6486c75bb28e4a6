//! Numeric types accepted by the reduction kernels
//!
//! This module defines the type constraints for buffer elements without
//! imposing any computational infrastructure. All computation happens through
//! `ComputePrimitives`.

use bytemuck::Pod;
use num_traits::Float;
use std::fmt::Debug;
use std::ops::AddAssign;

/// Base trait for numeric types that can flow through a reduction kernel
///
/// The `Pod` bound is what lets a buffer of these elements cross a
/// marshalling boundary as a plain byte image.
pub trait Numeric: Pod + Copy + PartialOrd + Debug + Send + Sync {
    /// Type used to accumulate reductions over this element type.
    ///
    /// `f32` accumulates in `f64` so that long buffers do not collapse to
    /// single-precision rounding.
    type Accum: Float + From<Self> + Into<f64> + AddAssign + Send + Sync;
}

impl Numeric for f64 {
    type Accum = f64;
}

impl Numeric for f32 {
    type Accum = f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    fn accumulate<T: Numeric>(data: &[T]) -> T::Accum {
        data.iter()
            .map(|&x| <T::Accum as From<T>>::from(x))
            .fold(<T::Accum as Zero>::zero(), |acc, x| acc + x)
    }

    #[test]
    fn test_f64_accumulates_in_f64() {
        let total: f64 = accumulate(&[1.0f64, 2.0, 3.0]);
        assert_eq!(total, 6.0);
    }

    #[test]
    fn test_f32_accumulates_in_f64() {
        // 2^24 + 1 is not representable in f32, so a single-precision
        // accumulator would lose the trailing increments.
        let big = 16_777_216.0f32;
        let data = vec![big, 1.0, 1.0, 1.0];
        let total: f64 = accumulate(&data);
        assert_eq!(total, 16_777_219.0);
    }
}
