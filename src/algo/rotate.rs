// SPDX-License-Identifier: MIT

use crate::algo::swap_blocks;
use crate::{OutputRange, RandomAccessRange};

/// Rotates `[first, last)` around `middle`, in place, using repeated block
/// swaps (the Gries-Mills / "juggling-free" pattern).
///
/// # Precondition
///   - `[first, middle)` and `[middle, last)` represent valid positions in rng.
///
/// # Postcondition
///   - Rearranges `[first, last)` so that `[middle, last)` precedes
///     `[first, middle)`, preserving relative order within each of the two
///     sub-ranges.
///   - Returns the position of the element originally at `first`, i.e.
///     `first + (last - middle)`.
///   - Complexity: O(n) swaps, O(1) auxiliary storage, where
///     `n == rng.distance(first, last)`.
///
/// Unlike a recursive three-reversal or cyclic-move rotate, this algorithm
/// never reads or writes outside `[first, last)` and touches no storage
/// proportional to `n`, which is what lets the parallel stable merge use it
/// as its sole primitive without an auxiliary buffer.
pub fn rotate<Range>(
    rng: &mut Range,
    first: Range::Position,
    middle: Range::Position,
    last: Range::Position,
) -> Range::Position
where
    Range: OutputRange + RandomAccessRange + ?Sized,
{
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }

    let result =
        rng.after_n(first.clone(), rng.distance(middle.clone(), last.clone()));

    let mut n = rng.distance(first.clone(), last.clone());
    let mut m = rng.distance(first.clone(), middle.clone());
    let mut is_left = m <= n - m;
    if !is_left {
        m = n - m;
    }

    let mut first = first;
    let mut last = last;

    while n > 1 && m > 0 {
        let m2 = m * 2;
        if is_left {
            while rng.distance(first.clone(), last.clone()) >= m2 {
                let next_first = rng.after_n(first.clone(), m);
                swap_blocks(rng, first.clone(), m, next_first.clone());
                first = next_first;
            }
        } else {
            while rng.distance(first.clone(), last.clone()) >= m2 {
                let new_last = rng.before_n(last.clone(), m);
                let swap_src = rng.before_n(new_last.clone(), m);
                swap_blocks(rng, swap_src, m, new_last.clone());
                last = new_last;
            }
        }
        is_left = !is_left;
        m = n % m;
        n = rng.distance(first.clone(), last.clone());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::rotate;

    #[test]
    fn rotates_left_heavy() {
        let mut arr = [0, 1, 2, 3, 4];
        let i = rotate(arr.as_mut_slice(), 0, 2, 5);
        assert_eq!(i, 3);
        assert_eq!(arr, [2, 3, 4, 0, 1]);
    }

    #[test]
    fn rotates_right_heavy() {
        let mut arr = [0, 1, 2, 3, 4, 5, 6];
        let i = rotate(arr.as_mut_slice(), 0, 5, 7);
        assert_eq!(i, 2);
        assert_eq!(arr, [5, 6, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn middle_equals_first_is_noop() {
        let mut arr = [1, 2, 3];
        let i = rotate(arr.as_mut_slice(), 0, 0, 3);
        assert_eq!(i, 3);
        assert_eq!(arr, [1, 2, 3]);
    }

    #[test]
    fn middle_equals_last_is_noop() {
        let mut arr = [1, 2, 3];
        let i = rotate(arr.as_mut_slice(), 0, 3, 3);
        assert_eq!(i, 0);
        assert_eq!(arr, [1, 2, 3]);
    }

    #[test]
    fn single_element_sides() {
        let mut arr = [1, 2, 3, 4];
        let i = rotate(arr.as_mut_slice(), 0, 1, 4);
        assert_eq!(i, 3);
        assert_eq!(arr, [2, 3, 4, 1]);

        let mut arr = [1, 2, 3, 4];
        let i = rotate(arr.as_mut_slice(), 0, 3, 4);
        assert_eq!(i, 1);
        assert_eq!(arr, [4, 1, 2, 3]);
    }
}
