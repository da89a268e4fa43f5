//! Search in a sorted sequence whose length is not known up front.

use std::cmp::Ordering;
use tracing::trace;

/// Find `target` in a sorted slice by exponential window growth followed by
/// binary search. Returns the index of an equal element.
pub fn search_unbounded<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    search_unbounded_by(|index| items.get(index), target)
}

/// Find `target` in a sorted sequence read through `element_at`.
///
/// `element_at(i)` returns the element at index `i`, or `None` past the end. Only
/// indexes inside the current window are read, so the sequence may be
/// arbitrarily long.
pub fn search_unbounded_by<'a, T, F>(mut element_at: F, target: &T) -> Option<usize>
where
    T: Ord + 'a,
    F: FnMut(usize) -> Option<&'a T>,
{
    let (start, end) = find_window(&mut element_at, target)?;
    trace!(start, end, "searching window");
    binary_search(&mut element_at, target, start, end)
}

/// Grow `[start, end]` until `target <= element_at(end)` or `end` runs past the
/// sequence. Returns `None` when the target lies beyond every element.
fn find_window<'a, T, F>(element_at: &mut F, target: &T) -> Option<(usize, usize)>
where
    T: Ord + 'a,
    F: FnMut(usize) -> Option<&'a T>,
{
    let mut start = 0;
    let mut end = 1;

    loop {
        match element_at(end) {
            Some(value) if target > value => {
                let width = end - start + 1;
                start = end + 1;
                end = start + width * 2 - 1;
            }
            Some(_) | None => return Some((start, end)),
        }

        // A read past the end with an empty window means nothing is left.
        if element_at(start).is_none() {
            return None;
        }
    }
}

fn binary_search<'a, T, F>(element_at: &mut F, target: &T, start: usize, end: usize) -> Option<usize>
where
    T: Ord + 'a,
    F: FnMut(usize) -> Option<&'a T>,
{
    let (mut low, mut high) = (start, end + 1);

    while low < high {
        let mid = low + (high - low) / 2;
        match element_at(mid) {
            // Past the end: everything from `mid` on is out of the sequence.
            None => high = mid,
            Some(value) => match target.cmp(value) {
                Ordering::Less => high = mid,
                Ordering::Greater => low = mid + 1,
                Ordering::Equal => return Some(mid),
            },
        }
    }

    None
}
