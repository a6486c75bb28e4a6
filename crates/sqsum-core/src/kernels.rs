//! Base trait for reduction kernels
//!
//! Kernel crates implement their computational patterns on top of the
//! primitive operations. This module only defines the trait, not
//! implementations.

use crate::{primitives::ComputePrimitives, Numeric};

/// Base trait for all reduction kernels
///
/// A kernel is a pure function from buffer contents to a scalar; it holds
/// primitives for the inner loops but no state between calls.
pub trait ReductionKernel<T: Numeric = f64>: Clone + Send + Sync {
    /// The type of primitives used by this kernel
    type Primitives: ComputePrimitives<T>;

    /// Get the primitives used by this kernel
    fn primitives(&self) -> &Self::Primitives;

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
