//! Sum-of-squares reduction kernels with owned, borrowed, and marshalled
//! buffer entry points
//!
//! This crate re-exports the sqsum workspace:
//!
//! - [`sqsum_core`] - compute primitives, backends, and execution engines
//! - [`sqsum_reduce`] - the reduction kernels and buffer types
//!
//! # Example
//!
//! ```rust
//! use sqsum::{sum_of_squares_borrowed, sum_of_squares_copied, encode_f64_le};
//!
//! let data = vec![3.0, 4.0];
//! assert_eq!(sum_of_squares_borrowed(&data), 25.0);
//!
//! let image = encode_f64_le(&data);
//! assert_eq!(sum_of_squares_copied(&image).unwrap(), 25.0);
//! ```

pub use sqsum_core;
pub use sqsum_reduce;

pub use sqsum_core::{
    auto_engine, scalar_sequential, simd_sequential, ComputePrimitives, Error, ExecutionEngine,
    ExecutionStrategy, Numeric, ReductionKernel, Result, ScalarBackend,
};

#[cfg(target_arch = "x86_64")]
pub use sqsum_core::Avx2Backend;

pub use sqsum_core::{scalar_parallel, simd_parallel, ParallelEngine};

pub use sqsum_reduce::{
    decode_f64_le, encode_f64_le, sum_of_squares_borrowed, sum_of_squares_copied,
    sum_of_squares_owned_parallel, sum_of_squares_owned_sequential, SampleBuffer, SumOfSquares,
};
