//! The sum-of-squares reduction kernel
//!
//! Computes `sum(x_i^2)` over a numeric buffer. Each call is a pure function
//! from buffer contents to a scalar: no state survives the call, and the
//! parallel path joins all workers before returning.

use crate::buffer::SampleBuffer;
use crate::marshal;
use num_traits::Zero;
use sqsum_core::{
    ComputePrimitives, ExecutionEngine, Numeric, ReductionKernel, Result, ScalarBackend,
};
use std::marker::PhantomData;

/// Sum-of-squares kernel over any backend
///
/// The sequential path is a strictly index-ordered single-accumulator fold,
/// so repeated calls on the same data are bit-identical. The chunked path
/// combines per-chunk partials left-to-right in ascending chunk order, so it
/// is bit-identical across runs with the same chunking, and agrees with the
/// sequential path up to floating-point reassociation.
#[derive(Clone, Debug)]
pub struct SumOfSquares<T: Numeric = f64, P: ComputePrimitives<T> = ScalarBackend> {
    primitives: P,
    _phantom: PhantomData<T>,
}

impl<T: Numeric, P: ComputePrimitives<T>> SumOfSquares<T, P> {
    /// Create a new kernel with the given primitives
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            _phantom: PhantomData,
        }
    }

    /// Sequential sum of squares over a borrowed view
    ///
    /// The view is read for the duration of this call only; nothing is
    /// retained past return, and nothing is written through it.
    pub fn compute(&self, data: &[T]) -> T::Accum {
        self.primitives.sum_of_squares(data)
    }

    /// Sum of squares with chunking chosen by the engine
    pub fn compute_with_engine<E: ExecutionEngine<T>>(&self, engine: &E, data: &[T]) -> T::Accum {
        let chunk_size = E::chunk_size(data.len(), engine.num_threads());
        self.compute_chunked(engine, data, chunk_size)
    }

    /// Sum of squares with explicit chunking
    ///
    /// Partition-map-combine: disjoint contiguous chunks are reduced
    /// independently (in parallel if the engine is parallel), then the
    /// partials are folded in ascending chunk order by this thread. A chunk
    /// size of `data.len()` or more degenerates to exactly the sequential
    /// summation order.
    pub fn compute_chunked<E: ExecutionEngine<T>>(
        &self,
        engine: &E,
        data: &[T],
        chunk_size: usize,
    ) -> T::Accum {
        if data.is_empty() {
            return <T::Accum as Zero>::zero();
        }
        let chunk_size = chunk_size.clamp(1, data.len());
        let partials =
            engine.map_chunks(data, chunk_size, |chunk| self.primitives.sum_of_squares(chunk));
        partials
            .into_iter()
            .fold(<T::Accum as Zero>::zero(), |acc, x| acc + x)
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> ReductionKernel<T> for SumOfSquares<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn name(&self) -> &'static str {
        "sum_of_squares"
    }
}

/// Sequential sum of squares over an owned buffer
///
/// The kernel owns the data for the duration of the call; there are no
/// aliasing concerns and the source the buffer was copied from may change
/// freely.
pub fn sum_of_squares_owned_sequential(buffer: SampleBuffer<f64>) -> f64 {
    SumOfSquares::new(ScalarBackend).compute(&buffer)
}

/// Parallel sum of squares over an owned buffer
///
/// Partition-map-combine on the global rayon pool: contiguous chunks sized
/// from the pool's thread count, one partial per chunk, combined in
/// ascending chunk order after all workers have joined. Agrees with
/// [`sum_of_squares_owned_sequential`] up to floating-point reassociation.
#[cfg(feature = "parallel")]
pub fn sum_of_squares_owned_parallel(buffer: SampleBuffer<f64>) -> f64 {
    let engine = sqsum_core::scalar_parallel();
    SumOfSquares::new(ScalarBackend).compute_with_engine(&engine, &buffer)
}

/// Sequential sum of squares over a borrowed view
///
/// Zero-copy: reads directly from caller-managed memory. The shared borrow
/// guarantees the view outlives the call and cannot be mutated while it is
/// outstanding, so the original convention-only contract holds by
/// construction here.
pub fn sum_of_squares_borrowed(view: &[f64]) -> f64 {
    SumOfSquares::new(ScalarBackend).compute(view)
}

/// Sum of squares over a marshalled foreign buffer
///
/// Materializes the little-endian byte image into kernel-owned storage, then
/// delegates to the sequential owned path. Safe even if the foreign side
/// mutates or frees the image immediately after this returns; the only
/// fallible step is marshalling validation.
pub fn sum_of_squares_copied(bytes: &[u8]) -> Result<f64> {
    let buffer = marshal::decode_f64_le(bytes)?;
    Ok(sum_of_squares_owned_sequential(buffer))
}
