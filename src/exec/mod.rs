// SPDX-License-Identifier: MIT

//! # Execution module
//!
//! The parallel substrate the partition driver is built on: a lazily
//! initialized, process-wide `rayon_core` thread pool, a fork-join
//! `parallel_for` over a mutable slice, and two flavors of `parallel_reduce`
//! — one whose split tree depends on how many threads the pool currently
//! reports (mirroring a work-stealing scheduler's freedom to shape the
//! reduction around available parallelism) and one whose split tree is a
//! fixed function of length and grain size alone, for the deterministic
//! drivers.
//!
//! This generalizes the teacher's `exec::global_thread_pool` /
//! `exec::exec_par` pair (which spawn one-shot task lists on
//! `std::thread::scope`) into the recursive divide-and-conquer shape this
//! crate's partition needs; the underlying idea — one shared, lazily-built
//! `rayon_core::ThreadPool`, tasks dispatched through it rather than raw
//! `std::thread::spawn` — is unchanged.
//!
//! `leaf` and `combine` always see positions local to whatever sub-slice
//! they were handed, never positions absolute to the original top-level
//! call: `combine` additionally receives the length of its left piece, so a
//! caller whose `Result` carries positions (e.g. [`crate::algo::PartitionRange`])
//! can shift the right piece's positions by that length before merging.
//! This avoids threading a running offset through the whole recursion.

use std::sync::LazyLock;

/// Returns the global thread pool to execute tasks on.
fn global_thread_pool() -> &'static rayon_core::ThreadPool {
    static POOL: LazyLock<rayon_core::ThreadPool> = LazyLock::new(|| {
        rayon_core::ThreadPoolBuilder::new()
            .build()
            .expect("failed to get global threadpool")
    });
    &POOL
}

/// Runs `body` over every element of `slice`, in grain-sized chunks,
/// concurrently on the global thread pool.
///
/// # Postcondition
///   - `body` is called some number of times, each with a disjoint,
///     non-overlapping sub-slice of `slice`, together covering all of
///     `slice` exactly once.
///   - Returns once every chunk has been processed.
///
/// A general-purpose building block alongside `parallel_reduce` below;
/// splitting a chunked mutation into different-sized pieces never changes
/// the outcome, only how the work is scheduled, so a single
/// non-deterministic splitting strategy is correct regardless of caller.
/// `algo::merge`'s cross-boundary swap needs to pair up two disjoint,
/// non-adjacent blocks rather than mutate one contiguous slice, so it
/// recurses directly on `rayon_core::join` instead of going through this
/// function; see `algo::merge::swap_cross`.
pub fn parallel_for<T, Body>(slice: &mut [T], grain_size: usize, body: &Body)
where
    T: Send,
    Body: Fn(&mut [T]) + Sync,
{
    let grain_size = grain_size.max(1);
    global_thread_pool()
        .install(|| parallel_for_rec(slice, grain_size, body));
}

fn parallel_for_rec<T, Body>(slice: &mut [T], grain_size: usize, body: &Body)
where
    T: Send,
    Body: Fn(&mut [T]) + Sync,
{
    if slice.len() <= grain_size {
        body(slice);
        return;
    }
    let mid = slice.len() / 2;
    let (left, right) = slice.split_at_mut(mid);
    rayon_core::join(
        || parallel_for_rec(left, grain_size, body),
        || parallel_for_rec(right, grain_size, body),
    );
}

/// Targets roughly `current_num_threads() * OVERCOMMIT` leaves, so the shape
/// of the reduction tree depends on the thread pool's size, not only on the
/// input.
const OVERCOMMIT: usize = 4;

fn ideal_leaf_len(len: usize, grain_size: usize) -> usize {
    let grain_size = grain_size.max(1);
    let threads = global_thread_pool().current_num_threads().max(1);
    let target_leaves = (threads * OVERCOMMIT).max(1);
    (len / target_leaves).max(grain_size)
}

/// Recursively reduces `slice` to a single `Result`, combining adjacent
/// pieces with `combine`, using a split tree whose shape depends on the
/// thread pool's current size (see [`ideal_leaf_len`]).
///
/// # Precondition
///   - `combine` is associative in the sense that, for three adjacent
///     pieces `A, B, C`: `combine(combine(leaf(A), leaf(B)), leaf(C))` and
///     `combine(leaf(A), combine(leaf(B), leaf(C)))` must agree on the
///     shape of the result (here: the same pivot count and, for the stable
///     caller, the same arrangement) even though the two expressions group
///     the leaves differently.
///
/// # Postcondition
///   - Returns `identity()` if `slice` is empty.
///   - Otherwise partitions `slice` into leaves left to right, applies
///     `leaf` to each, and folds the results pairwise with `combine` (which
///     also receives the length of its left operand's piece, to re-anchor
///     positions) in some tree shape determined by `len`, `grain_size` and
///     the pool's thread count — not reproducible across differently sized
///     pools.
pub fn parallel_reduce<T, Result, Identity, Leaf, Combine>(
    slice: &mut [T],
    grain_size: usize,
    identity: &Identity,
    leaf: &Leaf,
    combine: &Combine,
) -> Result
where
    T: Send,
    Result: Send,
    Identity: Fn() -> Result + Sync,
    Leaf: Fn(&mut [T]) -> Result + Sync,
    Combine: Fn(&mut [T], Result, Result, usize) -> Result + Sync,
{
    if slice.is_empty() {
        return identity();
    }
    global_thread_pool()
        .install(|| reduce_adaptive(slice, grain_size.max(1), leaf, combine))
}

fn reduce_adaptive<T, Result, Leaf, Combine>(
    slice: &mut [T],
    grain_size: usize,
    leaf: &Leaf,
    combine: &Combine,
) -> Result
where
    T: Send,
    Result: Send,
    Leaf: Fn(&mut [T]) -> Result + Sync,
    Combine: Fn(&mut [T], Result, Result, usize) -> Result + Sync,
{
    let leaf_len = ideal_leaf_len(slice.len(), grain_size);
    if slice.len() <= leaf_len {
        return leaf(slice);
    }
    let mid = slice.len() / 2;
    let (l, r) = {
        let (left, right) = slice.split_at_mut(mid);
        rayon_core::join(
            || reduce_adaptive(left, grain_size, leaf, combine),
            || reduce_adaptive(right, grain_size, leaf, combine),
        )
    };
    combine(slice, l, r, mid)
}

/// Recursively reduces `slice` to a single `Result` using a split tree that
/// is a fixed function of `slice.len()` and `grain_size` alone — a balanced
/// binary tree over leaves of (approximately) `grain_size`, independent of
/// the thread pool's size.
///
/// # Precondition / Postcondition
///   Same as [`parallel_reduce`], except the combine tree is reproducible:
///   for a fixed `slice.len()`, `grain_size` and `combine`, two calls
///   (against pools of any size) visit the same leaves in the same order
///   and combine them in the same pairing.
pub fn parallel_reduce_deterministic<T, Result, Identity, Leaf, Combine>(
    slice: &mut [T],
    grain_size: usize,
    identity: &Identity,
    leaf: &Leaf,
    combine: &Combine,
) -> Result
where
    T: Send,
    Result: Send,
    Identity: Fn() -> Result + Sync,
    Leaf: Fn(&mut [T]) -> Result + Sync,
    Combine: Fn(&mut [T], Result, Result, usize) -> Result + Sync,
{
    if slice.is_empty() {
        return identity();
    }
    global_thread_pool()
        .install(|| reduce_fixed(slice, grain_size.max(1), leaf, combine))
}

fn reduce_fixed<T, Result, Leaf, Combine>(
    slice: &mut [T],
    grain_size: usize,
    leaf: &Leaf,
    combine: &Combine,
) -> Result
where
    T: Send,
    Result: Send,
    Leaf: Fn(&mut [T]) -> Result + Sync,
    Combine: Fn(&mut [T], Result, Result, usize) -> Result + Sync,
{
    if slice.len() <= grain_size {
        return leaf(slice);
    }
    let mid = slice.len() / 2;
    let (l, r) = {
        let (left, right) = slice.split_at_mut(mid);
        rayon_core::join(
            || reduce_fixed(left, grain_size, leaf, combine),
            || reduce_fixed(right, grain_size, leaf, combine),
        )
    };
    combine(slice, l, r, mid)
}

#[cfg(test)]
mod tests {
    use super::{parallel_for, parallel_reduce, parallel_reduce_deterministic};

    #[test]
    fn parallel_for_touches_every_element_once() {
        let mut v = vec![0; 10_000];
        parallel_for(&mut v, 37, &|chunk: &mut [i32]| {
            for x in chunk.iter_mut() {
                *x += 1;
            }
        });
        assert!(v.iter().all(|&x| x == 1));
    }

    #[test]
    fn parallel_reduce_sums_match_sequential() {
        let mut v: Vec<i32> = (0..10_000).collect();
        let expected: i32 = v.iter().sum();
        let sum = parallel_reduce(
            &mut v,
            64,
            &|| 0i32,
            &|chunk: &mut [i32]| chunk.iter().sum(),
            &|_slice: &mut [i32], a, b, _mid| a + b,
        );
        assert_eq!(sum, expected);

        let sum_det = parallel_reduce_deterministic(
            &mut v,
            64,
            &|| 0i32,
            &|chunk: &mut [i32]| chunk.iter().sum(),
            &|_slice: &mut [i32], a, b, _mid| a + b,
        );
        assert_eq!(sum_det, expected);
    }

    #[test]
    fn empty_slice_returns_identity() {
        let mut v: Vec<i32> = vec![];
        let sum = parallel_reduce(
            &mut v,
            64,
            &|| -1,
            &|chunk: &mut [i32]| chunk.iter().sum(),
            &|_slice: &mut [i32], a, b, _mid| a + b,
        );
        assert_eq!(sum, -1);
    }
}
