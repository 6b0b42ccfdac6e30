// SPDX-License-Identifier: MIT

use crate::algo::{self, PartitionRange};
use crate::exec;

/// Default grain size: the approximate chunk length below which a leaf is
/// partitioned sequentially rather than split further. Matches the default
/// `grain_size` TBB's `simple_partitioner` is typically tuned to for this
/// kind of workload.
pub const DEFAULT_GRAIN_SIZE: usize = 1000;

fn shift(r: PartitionRange<usize>, by: usize) -> PartitionRange<usize> {
    PartitionRange::new(r.begin + by, r.pivot + by, r.end + by)
}

/// Unstable in-place partition: rearranges `slice` so every element
/// satisfying `pred` precedes every element that doesn't, without
/// preserving relative order, parallelizing across the global thread pool
/// with [`DEFAULT_GRAIN_SIZE`].
///
/// # Postcondition
///   - Returns `i` such that `slice[..i]` all satisfy `pred` and
///     `slice[i..]` all don't.
///   - Split and combine order are shaped by the thread pool's size, so the
///     exact arrangement of elements within each side is not reproducible
///     across pools of different sizes (the pivot count and the set of
///     elements on each side are, since `pred` is deterministic and
///     `algo::merge` is a correctness-preserving reduction regardless of
///     tree shape). See [`partition_deterministic`] for a reproducible
///     arrangement.
pub fn partition<T, Predicate>(slice: &mut [T], pred: Predicate) -> usize
where
    T: Send,
    Predicate: Fn(&T) -> bool + Sync,
{
    partition_with_grain_size(slice, DEFAULT_GRAIN_SIZE, pred)
}

/// As [`partition`], but with an explicit grain size instead of
/// [`DEFAULT_GRAIN_SIZE`].
pub fn partition_with_grain_size<T, Predicate>(
    slice: &mut [T],
    grain_size: usize,
    pred: Predicate,
) -> usize
where
    T: Send,
    Predicate: Fn(&T) -> bool + Sync,
{
    let result = exec::parallel_reduce(
        slice,
        grain_size,
        &|| PartitionRange::identity(0),
        &|chunk: &mut [T]| {
            let n = chunk.len();
            let split = algo::partition(chunk, 0, n, &pred);
            PartitionRange::new(0, split, n)
        },
        &|chunk: &mut [T], l, r, mid| {
            algo::merge(chunk, l, shift(r, mid), grain_size)
        },
    );
    result.pivot
}

/// As [`partition`], but the split and combine tree is a fixed function of
/// `slice.len()` and the grain size alone, independent of the thread
/// pool's size: running this twice against the same input (with any number
/// of threads) produces byte-for-byte identical output.
pub fn partition_deterministic<T, Predicate>(
    slice: &mut [T],
    pred: Predicate,
) -> usize
where
    T: Send,
    Predicate: Fn(&T) -> bool + Sync,
{
    partition_deterministic_with_grain_size(slice, DEFAULT_GRAIN_SIZE, pred)
}

/// As [`partition_deterministic`], but with an explicit grain size.
pub fn partition_deterministic_with_grain_size<T, Predicate>(
    slice: &mut [T],
    grain_size: usize,
    pred: Predicate,
) -> usize
where
    T: Send,
    Predicate: Fn(&T) -> bool + Sync,
{
    let result = exec::parallel_reduce_deterministic(
        slice,
        grain_size,
        &|| PartitionRange::identity(0),
        &|chunk: &mut [T]| {
            let n = chunk.len();
            let split = algo::partition(chunk, 0, n, &pred);
            PartitionRange::new(0, split, n)
        },
        &|chunk: &mut [T], l, r, mid| {
            algo::merge(chunk, l, shift(r, mid), grain_size)
        },
    );
    result.pivot
}

/// Stable in-place partition: as [`partition`], but preserves relative
/// order within each side.
pub fn stable_partition<T, Predicate>(slice: &mut [T], pred: Predicate) -> usize
where
    T: Send,
    Predicate: Fn(&T) -> bool + Sync + Clone,
{
    stable_partition_with_grain_size(slice, DEFAULT_GRAIN_SIZE, pred)
}

/// As [`stable_partition`], but with an explicit grain size.
pub fn stable_partition_with_grain_size<T, Predicate>(
    slice: &mut [T],
    grain_size: usize,
    pred: Predicate,
) -> usize
where
    T: Send,
    Predicate: Fn(&T) -> bool + Sync + Clone,
{
    let result = exec::parallel_reduce(
        slice,
        grain_size,
        &|| PartitionRange::identity(0),
        &|chunk: &mut [T]| {
            let n = chunk.len();
            let split = algo::stable_partition(chunk, 0, n, pred.clone());
            PartitionRange::new(0, split, n)
        },
        &|chunk: &mut [T], l, r, mid| {
            algo::stable_merge(chunk, l, shift(r, mid))
        },
    );
    result.pivot
}

/// As [`stable_partition`], but the split and combine tree is a fixed
/// function of `slice.len()` and the grain size alone, independent of the
/// thread pool's size: for a fixed input and grain size, produces
/// byte-for-byte identical output regardless of thread count.
pub fn stable_partition_deterministic<T, Predicate>(
    slice: &mut [T],
    pred: Predicate,
) -> usize
where
    T: Send,
    Predicate: Fn(&T) -> bool + Sync + Clone,
{
    stable_partition_deterministic_with_grain_size(
        slice,
        DEFAULT_GRAIN_SIZE,
        pred,
    )
}

/// As [`stable_partition_deterministic`], but with an explicit grain size.
pub fn stable_partition_deterministic_with_grain_size<T, Predicate>(
    slice: &mut [T],
    grain_size: usize,
    pred: Predicate,
) -> usize
where
    T: Send,
    Predicate: Fn(&T) -> bool + Sync + Clone,
{
    let result = exec::parallel_reduce_deterministic(
        slice,
        grain_size,
        &|| PartitionRange::identity(0),
        &|chunk: &mut [T]| {
            let n = chunk.len();
            let split = algo::stable_partition(chunk, 0, n, pred.clone());
            PartitionRange::new(0, split, n)
        },
        &|chunk: &mut [T], l, r, mid| {
            algo::stable_merge(chunk, l, shift(r, mid))
        },
    );
    result.pivot
}

/// Method-call syntax over this module's free functions, so callers can
/// write `slice.partition(pred)` instead of `rng::partition(slice, pred)`.
/// Mirrors the teacher's `STL*PartitionExt` traits, collapsed onto `[T]`
/// directly since this crate only ever partitions slices.
pub mod infix {
    use super::{
        partition, partition_deterministic,
        partition_deterministic_with_grain_size, partition_with_grain_size,
        stable_partition, stable_partition_deterministic,
        stable_partition_deterministic_with_grain_size,
        stable_partition_with_grain_size,
    };

    pub trait ParPartitionExt<T> {
        fn par_partition<Predicate>(&mut self, pred: Predicate) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync;

        fn par_partition_with_grain_size<Predicate>(
            &mut self,
            grain_size: usize,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync;

        fn par_partition_deterministic<Predicate>(
            &mut self,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync;

        fn par_partition_deterministic_with_grain_size<Predicate>(
            &mut self,
            grain_size: usize,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync;

        fn par_stable_partition<Predicate>(&mut self, pred: Predicate) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync + Clone;

        fn par_stable_partition_with_grain_size<Predicate>(
            &mut self,
            grain_size: usize,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync + Clone;

        fn par_stable_partition_deterministic<Predicate>(
            &mut self,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync + Clone;

        fn par_stable_partition_deterministic_with_grain_size<Predicate>(
            &mut self,
            grain_size: usize,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync + Clone;
    }

    impl<T> ParPartitionExt<T> for [T] {
        fn par_partition<Predicate>(&mut self, pred: Predicate) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync,
        {
            partition(self, pred)
        }

        fn par_partition_with_grain_size<Predicate>(
            &mut self,
            grain_size: usize,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync,
        {
            partition_with_grain_size(self, grain_size, pred)
        }

        fn par_partition_deterministic<Predicate>(
            &mut self,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync,
        {
            partition_deterministic(self, pred)
        }

        fn par_partition_deterministic_with_grain_size<Predicate>(
            &mut self,
            grain_size: usize,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync,
        {
            partition_deterministic_with_grain_size(self, grain_size, pred)
        }

        fn par_stable_partition<Predicate>(&mut self, pred: Predicate) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync + Clone,
        {
            stable_partition(self, pred)
        }

        fn par_stable_partition_with_grain_size<Predicate>(
            &mut self,
            grain_size: usize,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync + Clone,
        {
            stable_partition_with_grain_size(self, grain_size, pred)
        }

        fn par_stable_partition_deterministic<Predicate>(
            &mut self,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync + Clone,
        {
            stable_partition_deterministic(self, pred)
        }

        fn par_stable_partition_deterministic_with_grain_size<Predicate>(
            &mut self,
            grain_size: usize,
            pred: Predicate,
        ) -> usize
        where
            T: Send,
            Predicate: Fn(&T) -> bool + Sync + Clone,
        {
            stable_partition_deterministic_with_grain_size(
                self, grain_size, pred,
            )
        }
    }
}
