//! Core traits and types for cross-boundary reduction kernels
//!
//! This crate provides the infrastructure underneath the `sqsum-reduce`
//! kernels.
//!
//! # Architecture Overview
//!
//! The library is organized into three layers:
//!
//! 1. **Primitives** - Type-safe reduction loops with zero-cost backend dispatch
//! 2. **Execution Engines** - Unified parallelism and SIMD control
//! 3. **Kernels** - The reduction operations built on the first two layers
//!    (implemented by downstream crates)
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: All optimizations resolved at compile time
//! - **Structural Safety**: Iteration bounds always derive from the buffer's
//!   own length; there is no separately supplied count to get wrong
//! - **Composable**: Small, focused components that combine efficiently
//!
//! # Example
//!
//! ```rust
//! use sqsum_core::{
//!     execution::{scalar_sequential, ExecutionEngine},
//!     ComputePrimitives,
//! };
//!
//! // Create an execution engine
//! let engine = scalar_sequential();
//!
//! // Basic operations with the engine's primitives
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! let total = engine.primitives().sum_of_squares(&data);
//!
//! assert_eq!(total, 30.0);
//! ```

// Re-export submodules
pub mod error;
pub mod execution;
pub mod kernels;
pub mod numeric;
pub mod primitives;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{
    auto_engine, scalar_sequential, simd_sequential, ExecutionEngine, ExecutionMode,
    ExecutionStrategy, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{scalar_parallel, simd_parallel, ParallelEngine};

pub use primitives::{best_backend_name, scalar_backend, ComputePrimitives, ScalarBackend};

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use primitives::{avx2_backend, Avx2Backend};

pub use kernels::ReductionKernel;

pub use numeric::Numeric;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ComputePrimitives,
        ExecutionEngine,
        Numeric,
        ReductionKernel,
        Result,
        ScalarBackend,
    };

    pub use crate::error::Error;

    // Common engine configurations
    #[cfg(feature = "parallel")]
    pub use crate::execution::scalar_parallel;
    pub use crate::execution::{scalar_sequential, simd_sequential, ExecutionStrategy};
}
