//! The sort engine.
//!
//! Sorting never touches the caller's records: the result is a new vector of references
//! in display order, so several grids can view the same slice with independent sort states.

use std::cmp::Ordering;

use crate::context::GridContext;
use crate::ordering::SortState;
use crate::project::resolve_field;
use crate::record::FieldSource;

/// Orders records by the sort state, or keeps source order when unset.
///
/// Equal keys keep their relative source order in both directions. Keys that cannot be
/// compared (missing, NaN, or of different kinds) count as equal.
///
/// ```
/// use enerji_grid::{sort, GridContext, Language, Record, SortState};
///
/// let records = vec![
///     Record::new().with("name", "Elektrik").with("value", 5052),
///     Record::new().with("name", "LPG").with("value", 168941),
/// ];
/// let ctx = GridContext::new(Language::Tr).unwrap();
/// let sorted = sort(&records, Some(&SortState::desc("value")), &ctx);
/// assert_eq!(sorted[0], &records[1]);
/// ```
pub fn sort<'a, T: FieldSource>(
    records: &'a [T],
    state: Option<&SortState>,
    ctx: &GridContext,
) -> Vec<&'a T> {
    let view: Vec<&T> = records.iter().collect();
    let Some(state) = state else {
        return view;
    };

    log::debug!(
        "sorting {} records by {} {} ({})",
        records.len(),
        state.key,
        state.dir,
        ctx.language()
    );

    let language = ctx.language();
    let collation = ctx.collation();
    merge_sort_by(view, &mut |a: &&T, b: &&T| {
        let left = resolve_field(*a, &state.key, language);
        let right = resolve_field(*b, &state.key, language);
        state.compare(&left, &right, collation)
    })
}

/// Stable top-down merge sort.
///
/// The grid comparator is not a total order once kinds mix (mismatches compare equal),
/// and `slice::sort_by` may panic on such comparators. Merging only ever asks "is the
/// right element strictly smaller", which is well defined for any comparator.
fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }
    merged
}
