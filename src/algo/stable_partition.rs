// SPDX-License-Identifier: MIT

use crate::algo::rotate;
use crate::{OutputRange, RandomAccessRange};

/// Partitions `[start, end)` wrt pred, in place, preserving relative order
/// within each group. This is the sequential leaf primitive the parallel
/// stable driver runs over each grain-sized chunk.
///
/// # Precondition
///   - `[start, end)` represents a valid position range in rng.
///
/// # Postcondition
///   - Reorders elements of `[start, end)` such that all elements
///     satisfying pred precede elements not satisfying pred, with the
///     relative order within each group preserved.
///   - Returns the position of the first element in the reordered range
///     that does not satisfy pred. If all elements satisfy pred, returns
///     `end`.
///   - Complexity: O(n log n). Exactly n applications of pred, O(n log n)
///     swaps, O(1) auxiliary storage (no allocation).
///
/// Where n is number of elements in `[start, end)`.
///
/// Divides the range in half, recursively stable-partitions each half, then
/// uses a single `rotate` to merge the two partitioned halves into one —
/// the same "no extra buffer" trade as the teacher's
/// `reorderable_collection_ext::stable_partition`, just phrased over
/// explicit positions instead of collection slices.
pub fn stable_partition<Range, Predicate>(
    rng: &mut Range,
    start: Range::Position,
    end: Range::Position,
    pred: Predicate,
) -> Range::Position
where
    Range: OutputRange + RandomAccessRange + ?Sized,
    Predicate: Fn(&Range::Element) -> bool + Clone,
{
    let n = rng.distance(start.clone(), end.clone());
    if n == 0 {
        return start;
    }
    if n == 1 {
        return if pred(rng.at(&start)) {
            rng.after(start)
        } else {
            start
        };
    }

    let h = n / 2;
    let mid = rng.after_n(start.clone(), h);
    let j = stable_partition(rng, start, mid.clone(), pred.clone());
    let k = stable_partition(rng, mid.clone(), end, pred);
    rotate(rng, j, mid, k)
}

#[cfg(test)]
mod tests {
    use super::stable_partition;
    use crate::{BoundedRange, InputRange};

    #[test]
    fn preserves_relative_order_within_groups() {
        let mut arr = [1, 3, 2, 5, 4];
        let start = arr.start();
        let end = arr.end();
        let i =
            stable_partition(arr.as_mut_slice(), start, end, |x: &i32| {
                x % 2 == 1
            });
        assert_eq!(i, 3);
        assert_eq!(&arr[..i], &[1, 3, 5]);
        assert_eq!(&arr[i..], &[2, 4]);
    }

    #[test]
    fn empty_range() {
        let mut arr: [i32; 0] = [];
        let start = arr.start();
        let end = arr.end();
        let i = stable_partition(arr.as_mut_slice(), start, end, |x: &i32| {
            x % 2 == 1
        });
        assert_eq!(i, 0);
    }

    #[test]
    fn single_element_both_ways() {
        let mut arr = [99];
        let i = stable_partition(arr.as_mut_slice(), 0, 1, |x: &i32| *x < 50);
        assert_eq!(i, 0);
        assert_eq!(arr, [99]);

        let mut arr = [10];
        let i = stable_partition(arr.as_mut_slice(), 0, 1, |x: &i32| *x < 50);
        assert_eq!(i, 1);
        assert_eq!(arr, [10]);
    }

    #[test]
    fn duplicates_keep_original_relative_order() {
        let mut arr = [60, 10, 60, 10, 60, 10, 60, 10];
        let start = arr.start();
        let end = arr.end();
        let i =
            stable_partition(arr.as_mut_slice(), start, end, |x: &i32| {
                *x < 50
            });
        assert_eq!(i, 4);
        assert_eq!(&arr[..i], &[10, 10, 10, 10]);
        assert_eq!(&arr[i..], &[60, 60, 60, 60]);
    }
}
