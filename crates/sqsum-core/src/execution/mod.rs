//! Execution engines for controlling computation strategy
//!
//! This module provides the execution engine abstraction that unifies
//! primitive selection (SIMD vs scalar) with execution strategy
//! (sequential vs parallel).
//!
//! # Design Philosophy
//!
//! - **Unified Control**: Single type parameter controls both SIMD and parallelism
//! - **Zero-Cost**: All decisions made at compile time
//! - **Ephemeral Parallelism**: Workers are spawned and joined within one call;
//!   no long-lived state outlives `map_chunks`
//! - **Composable**: Engines can be mixed and matched with kernels

use crate::numeric::Numeric;
use crate::primitives::ComputePrimitives;
#[cfg(feature = "parallel")]
use crate::Result;
#[cfg(feature = "parallel")]
use log::debug;

/// Execution strategy for reduction operations
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExecutionStrategy {
    /// Process chunks sequentially
    Sequential,
    /// Process chunks in parallel
    Parallel,
}

/// Marker trait for execution engine mode properties
///
/// This trait provides compile-time constants that enable zero-cost
/// specialization for different execution patterns.
pub trait ExecutionMode {
    /// Whether this engine executes tasks sequentially
    const IS_SEQUENTIAL: bool;

    /// Optimal chunk size for this execution mode
    fn chunk_size(n_items: usize, n_threads: usize) -> usize;
}

/// Trait for execution engines that control how computations are performed
///
/// An execution engine combines:
/// - Primitive operations (scalar vs SIMD)
/// - Execution strategy (sequential vs parallel)
/// - Thread pool selection (global Rayon pool vs dedicated pool)
pub trait ExecutionEngine<T: Numeric>: Clone + Send + Sync + ExecutionMode {
    /// The type of primitives used by this engine
    type Primitives: ComputePrimitives<T>;

    /// Get the primitives for low-level operations
    fn primitives(&self) -> &Self::Primitives;

    /// Execute a function in the engine's execution context
    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send;

    /// Map a function over contiguous chunks of data
    ///
    /// Results are returned in ascending chunk order regardless of which
    /// worker produced them; the caller's combine step can rely on that
    /// order for reproducibility.
    fn map_chunks<'a, U, F, R>(&self, data: &'a [U], chunk_size: usize, f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&'a [U]) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        matches!(self.strategy(), ExecutionStrategy::Parallel)
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations sequentially in the current thread.
#[derive(Clone, Debug)]
pub struct SequentialEngine<T: Numeric, P: ComputePrimitives<T>> {
    primitives: P,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Numeric, P: ComputePrimitives<T>> SequentialEngine<T, P> {
    /// Create a new sequential engine with the given primitives
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> ExecutionMode for SequentialEngine<T, P> {
    const IS_SEQUENTIAL: bool = true;

    fn chunk_size(_n_items: usize, _n_threads: usize) -> usize {
        // Process all items in one "chunk" for sequential
        usize::MAX
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> ExecutionEngine<T> for SequentialEngine<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        f()
    }

    fn map_chunks<'a, U, F, R>(&self, data: &'a [U], chunk_size: usize, f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&'a [U]) -> R + Sync + Send,
        R: Send,
    {
        data.chunks(chunk_size).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Executes operations in parallel using Rayon's thread pool. Workers touch
/// disjoint chunks only; the join happens inside `map_chunks`, so no partial
/// result is observable before the call returns.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug)]
pub struct ParallelEngine<T: Numeric, P: ComputePrimitives<T>> {
    primitives: P,
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
    _phantom: std::marker::PhantomData<T>,
}

#[cfg(feature = "parallel")]
impl<T: Numeric, P: ComputePrimitives<T>> ParallelEngine<T, P> {
    /// Create a new parallel engine with the global thread pool
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            thread_pool: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(primitives: P, pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            primitives,
            thread_pool: Some(pool),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Create with a dedicated pool of the given size
    pub fn with_num_threads(primitives: P, num_threads: usize) -> Result<Self> {
        debug!("building dedicated rayon pool with {num_threads} threads");
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            primitives,
            thread_pool: Some(std::sync::Arc::new(pool)),
            _phantom: std::marker::PhantomData,
        })
    }
}

#[cfg(feature = "parallel")]
impl<T: Numeric, P: ComputePrimitives<T>> ExecutionMode for ParallelEngine<T, P> {
    const IS_SEQUENTIAL: bool = false;

    fn chunk_size(n_items: usize, n_threads: usize) -> usize {
        // A few chunks per thread keeps the tail balanced without shrinking
        // chunks below what a worker can amortize
        let target_chunks = n_threads.max(1) * 6;
        let chunk_size = n_items.div_ceil(target_chunks);
        chunk_size.max(4).min(n_items.max(1))
    }
}

#[cfg(feature = "parallel")]
impl<T: Numeric, P: ComputePrimitives<T>> ExecutionEngine<T> for ParallelEngine<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if let Some(pool) = &self.thread_pool {
            pool.install(f)
        } else {
            rayon::scope(|_| f())
        }
    }

    fn map_chunks<'a, U, F, R>(&self, data: &'a [U], chunk_size: usize, f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&'a [U]) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        if let Some(pool) = &self.thread_pool {
            pool.install(|| data.par_chunks(chunk_size).map(f).collect())
        } else {
            data.par_chunks(chunk_size).map(f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Create a sequential scalar engine for f64
pub fn scalar_sequential() -> SequentialEngine<f64, crate::primitives::ScalarBackend> {
    SequentialEngine::new(crate::primitives::ScalarBackend)
}

/// Create a sequential SIMD engine for f64
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub fn simd_sequential() -> SequentialEngine<f64, crate::primitives::Avx2Backend> {
    SequentialEngine::new(crate::primitives::Avx2Backend::new())
}

/// Create a sequential SIMD engine for f64 (fallback to scalar if AVX2 not available)
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
pub fn simd_sequential() -> SequentialEngine<f64, crate::primitives::ScalarBackend> {
    SequentialEngine::new(crate::primitives::ScalarBackend)
}

/// Create a parallel scalar engine for f64
#[cfg(feature = "parallel")]
pub fn scalar_parallel() -> ParallelEngine<f64, crate::primitives::ScalarBackend> {
    ParallelEngine::new(crate::primitives::ScalarBackend)
}

/// Create a parallel SIMD engine for f64
#[cfg(all(feature = "parallel", target_arch = "x86_64", feature = "avx2"))]
pub fn simd_parallel() -> ParallelEngine<f64, crate::primitives::Avx2Backend> {
    ParallelEngine::new(crate::primitives::Avx2Backend::new())
}

/// Create a parallel SIMD engine for f64 (fallback to scalar if AVX2 not available)
#[cfg(all(feature = "parallel", not(all(target_arch = "x86_64", feature = "avx2"))))]
pub fn simd_parallel() -> ParallelEngine<f64, crate::primitives::ScalarBackend> {
    ParallelEngine::new(crate::primitives::ScalarBackend)
}

/// Create an auto-selected engine based on available features
///
/// Prefers parallel execution when compiled in; the backend stays scalar so
/// the choice never panics on CPUs without SIMD support. Callers that want
/// SIMD opt in through `simd_sequential`/`simd_parallel`.
pub fn auto_engine() -> impl ExecutionEngine<f64> {
    #[cfg(feature = "parallel")]
    {
        scalar_parallel()
    }
    #[cfg(not(feature = "parallel"))]
    {
        scalar_sequential()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_engine() {
        let engine = scalar_sequential();

        // Test execute
        let result = engine.execute(|| 42);
        assert_eq!(result, 42);

        // Test map_chunks
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let sums = engine.map_chunks(&data, 2, |chunk| chunk.iter().sum::<f64>());
        assert_eq!(sums, vec![3.0, 7.0, 11.0]);

        assert_eq!(engine.strategy(), ExecutionStrategy::Sequential);
        assert!(!engine.is_parallel());
        assert_eq!(engine.num_threads(), 1);
    }

    #[test]
    fn test_sequential_chunk_size_covers_input() {
        type Engine = SequentialEngine<f64, crate::primitives::ScalarBackend>;
        assert_eq!(Engine::chunk_size(1_000_000, 8), usize::MAX);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine() {
        let engine = scalar_parallel();

        // Test parallel execution
        let data: Vec<i32> = (0..1000).collect();
        let sum = engine.execute(|| {
            use rayon::prelude::*;
            data.par_iter().sum::<i32>()
        });
        assert_eq!(sum, 499500);

        // Chunk order must be ascending even when workers race
        let data = vec![1.0; 100];
        let sums = engine.map_chunks(&data, 25, |chunk| chunk.iter().sum::<f64>());
        assert_eq!(sums, vec![25.0, 25.0, 25.0, 25.0]);

        assert_eq!(engine.strategy(), ExecutionStrategy::Parallel);
        assert!(engine.num_threads() > 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_chunk_size_bounds() {
        type Engine = ParallelEngine<f64, crate::primitives::ScalarBackend>;
        // Never zero, never larger than the input
        assert_eq!(Engine::chunk_size(0, 8), 1);
        assert_eq!(Engine::chunk_size(3, 8), 3);
        let size = Engine::chunk_size(1_000_000, 8);
        assert!(size >= 4 && size <= 1_000_000);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_dedicated_pool() {
        let engine = ParallelEngine::<f64, _>::with_num_threads(
            crate::primitives::ScalarBackend,
            2,
        )
        .unwrap();
        assert_eq!(engine.num_threads(), 2);

        let data = vec![2.0; 64];
        let sums = engine.map_chunks(&data, 16, |chunk| chunk.iter().sum::<f64>());
        assert_eq!(sums, vec![32.0, 32.0, 32.0, 32.0]);
    }

    #[test]
    fn test_auto_engine() {
        let engine = auto_engine();
        assert!(engine.num_threads() > 0);
    }

    #[test]
    fn test_simd_sequential_fallback_shape() {
        // Constructing is only safe when the CPU supports the backend
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        if !crate::primitives::Avx2Backend::is_available() {
            return;
        }
        let engine = simd_sequential();
        assert_eq!(engine.strategy(), ExecutionStrategy::Sequential);
        let data = [1.0, 2.0, 3.0, 4.0];
        let result = engine.execute(|| data.iter().sum::<f64>());
        assert_eq!(result, 10.0);
    }
}
