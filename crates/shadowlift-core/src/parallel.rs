//! Parallelization helpers for per-pixel and per-row passes
//!
//! Every helper dispatches to rayon when the slice holds at least
//! [`PARALLEL_THRESHOLD`] elements and runs the identical closure sequentially
//! otherwise. Closures only see disjoint output chunks plus shared read-only
//! inputs, so both paths produce the same bytes.

use rayon::prelude::*;

/// Minimum number of slice elements to trigger parallel processing
pub const PARALLEL_THRESHOLD: usize = 65_536;

/// Parallel fold/reduce over chunks with automatic threshold-based dispatch.
///
/// # Arguments
/// * `data` - The slice to process
/// * `chunk_size` - Size of each chunk (1 for planes, 4 for RGBA pixels)
/// * `init` - Function that creates a new accumulator
/// * `fold_fn` - Function that folds a chunk into the accumulator
/// * `reduce_fn` - Function that combines two accumulators
///
/// Only use with accumulators whose reduction is exact (integer counts);
/// floating-point sums would depend on the split.
pub fn parallel_fold_reduce<T, A, I, F, R>(
    data: &[T],
    chunk_size: usize,
    init: I,
    fold_fn: F,
    reduce_fn: R,
) -> A
where
    T: Sync,
    A: Send + Clone,
    I: Fn() -> A + Sync,
    F: Fn(A, &[T]) -> A + Sync,
    R: Fn(A, A) -> A + Sync,
{
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_chunks_exact(chunk_size)
            .fold(&init, &fold_fn)
            .reduce(&init, &reduce_fn)
    } else {
        let mut acc = init();
        for chunk in data.chunks_exact(chunk_size) {
            acc = fold_fn(acc, chunk);
        }
        acc
    }
}

/// Parallel for-each over mutable chunks, passing each chunk's index.
///
/// # Example
/// ```ignore
/// parallel_for_each_chunk_mut(&mut rgba, 4, |pixel_index, pixel| {
///     pixel[3] = alpha[pixel_index];
/// });
/// ```
pub fn parallel_for_each_chunk_mut<T, F>(data: &mut [T], chunk_size: usize, f: F)
where
    T: Send + Sync,
    F: Fn(usize, &mut [T]) + Sync,
{
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_chunks_exact_mut(chunk_size)
            .enumerate()
            .for_each(|(index, chunk)| f(index, chunk));
    } else {
        for (index, chunk) in data.chunks_exact_mut(chunk_size).enumerate() {
            f(index, chunk);
        }
    }
}

/// Parallel for-each over paired input/output chunks of equal size.
///
/// Used for row-wise passes where each output row depends only on the
/// matching input row.
pub fn parallel_zip_chunks_mut<T, U, F>(src: &[T], dst: &mut [U], chunk_size: usize, f: F)
where
    T: Sync,
    U: Send + Sync,
    F: Fn(&[T], &mut [U]) + Sync,
{
    debug_assert_eq!(src.len(), dst.len());

    if dst.len() >= PARALLEL_THRESHOLD {
        src.par_chunks_exact(chunk_size)
            .zip(dst.par_chunks_exact_mut(chunk_size))
            .for_each(|(input, output)| f(input, output));
    } else {
        for (input, output) in src
            .chunks_exact(chunk_size)
            .zip(dst.chunks_exact_mut(chunk_size))
        {
            f(input, output);
        }
    }
}
