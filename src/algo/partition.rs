// SPDX-License-Identifier: MIT

use crate::{InputRange, SemiOutputRange};

/// Returns true if `[start, end)` is partitioned wrt pred, otherwise false.
///
/// # Precondition
///   - `[start, end)` represents a valid position range in rng.
///
/// # Postcondition
///   - Returns true if there is NO position `i` and `j` in `[start, end)`
///     such that `i` comes before `j` and
///     `pred(rng.at(&i)) == false && pred(rng.at(&j)) == true`.
///   - Otherwise, returns false.
///   - Complexity: O(n). At most n applications of pred.
///
/// Where n is number of elements in `[start, end)`.
pub fn is_partitioned<Range, Predicate>(
    rng: &Range,
    mut start: Range::Position,
    end: Range::Position,
    pred: Predicate,
) -> bool
where
    Range: InputRange + ?Sized,
    Predicate: Fn(&Range::Element) -> bool,
{
    while start != end {
        if !pred(rng.at(&start)) {
            break;
        }
        start = rng.after(start);
    }

    while start != end {
        if pred(rng.at(&start)) {
            return false;
        }
        start = rng.after(start);
    }

    true
}

/// Partitions `[start, end)` wrt pred, in place, without preserving
/// relative order. This is the sequential leaf primitive the parallel
/// driver runs over each grain-sized chunk.
///
/// # Precondition
///   - `[start, end)` represents a valid position range in rng.
///
/// # Postcondition
///   - Reorders elements of `[start, end)` such that all elements
///     satisfying pred precede elements not satisfying pred.
///   - Relative order of elements is NOT preserved.
///   - Returns the position of the first element in the reordered range
///     that does not satisfy pred. If all elements satisfy pred, returns
///     `end`.
///   - Complexity: O(n). Exactly n applications of pred. At most n swaps.
///
/// Where n is number of elements in `[start, end)`.
pub fn partition<Range, Predicate>(
    rng: &mut Range,
    mut start: Range::Position,
    end: Range::Position,
    pred: Predicate,
) -> Range::Position
where
    Range: SemiOutputRange + ?Sized,
    Predicate: Fn(&Range::Element) -> bool,
{
    while start != end {
        if !pred(rng.at(&start)) {
            break;
        }
        start = rng.after(start);
    }

    if start == end {
        return start;
    }

    let mut i = rng.after(start.clone());
    while i != end {
        if pred(rng.at(&i)) {
            rng.swap_at(&i, &start);
            start = rng.after(start);
        }
        i = rng.after(i);
    }

    start
}
