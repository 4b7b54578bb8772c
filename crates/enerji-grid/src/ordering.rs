//! Sort state and value comparison.
//!
//! Provides [`Dir`] for sort direction, [`SortState`] for the single active sort column,
//! and [`compare_values`] for the comparison policy the sort engine applies.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::context::Collation;
use crate::value::Value;

/// Key of the conventional measure column that is sorted by default.
pub const DEFAULT_SORT_KEY: &str = "value";

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The active sort column and direction. A grid has at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Column key to sort by.
    pub key: String,
    /// Sort direction.
    pub dir: Dir,
}

impl SortState {
    /// Creates a new sort state with the given direction.
    pub fn new(key: impl Into<String>, dir: Dir) -> Self {
        SortState {
            key: key.into(),
            dir,
        }
    }

    /// Creates an ascending sort state for the given key.
    pub fn asc(key: impl Into<String>) -> Self {
        SortState::new(key, Dir::Asc)
    }

    /// Creates a descending sort state for the given key.
    pub fn desc(key: impl Into<String>) -> Self {
        SortState::new(key, Dir::Desc)
    }

    /// Sort state a fresh grid starts with: [`DEFAULT_SORT_KEY`] descending.
    ///
    /// The key is read from the records whether or not a column shows it. Records without
    /// the field compare equal and keep their source order.
    pub fn initial() -> SortState {
        SortState::desc(DEFAULT_SORT_KEY)
    }

    /// Result of clicking the header of `key`.
    ///
    /// Clicking the active column flips its direction; any other column starts ascending.
    pub fn toggled(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(state) if state.key == key => SortState::new(key, state.dir.reverse()),
            _ => SortState::asc(key),
        }
    }

    /// Compares two projected values according to this state's direction.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>, collation: &Collation) -> Ordering {
        compare_values(a, b, collation)
            .map(|ordering| self.dir.apply(ordering))
            .unwrap_or(Ordering::Equal)
    }
}

/// Compares two values of the same kind.
///
/// Strings use the collation, numbers compare numerically, booleans `false < true`.
/// Returns `None` when the kinds differ, either side is missing or a number is NaN;
/// the sort engine treats that as equal.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>, collation: &Collation) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(collation.compare(a, b)),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::value::Number;

    fn tr() -> Collation {
        Collation::new(Language::Tr).unwrap()
    }

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display_and_reverse() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert_eq!(Dir::Asc.reverse(), Dir::Desc);
        assert_eq!(Dir::Desc.reverse(), Dir::Asc);
    }

    #[test]
    fn initial_state_is_value_descending() {
        assert_eq!(SortState::initial(), SortState::desc("value"));
        assert_eq!(SortState::initial().key, DEFAULT_SORT_KEY);
    }

    #[test]
    fn toggling_the_active_column_flips_direction() {
        let desc = SortState::desc("value");
        let asc = SortState::toggled(Some(&desc), "value");
        assert_eq!(asc, SortState::asc("value"));
        assert_eq!(SortState::toggled(Some(&asc), "value"), SortState::desc("value"));
    }

    #[test]
    fn selecting_another_column_resets_to_ascending() {
        let desc = SortState::desc("value");
        assert_eq!(SortState::toggled(Some(&desc), "name"), SortState::asc("name"));
        assert_eq!(SortState::toggled(None, "code"), SortState::asc("code"));
    }

    #[test]
    fn compare_strings_uses_collation() {
        let collation = tr();
        let a = Value::String("Çelik");
        let b = Value::String("Demir");
        assert_eq!(compare_values(&a, &b, &collation), Some(Ordering::Less));
    }

    #[test]
    fn compare_numbers() {
        let collation = tr();
        let a = Value::Number(Number::I64(10));
        let b = Value::Number(Number::F64(20.5));
        assert_eq!(compare_values(&a, &b, &collation), Some(Ordering::Less));
        assert_eq!(compare_values(&b, &a, &collation), Some(Ordering::Greater));
    }

    #[test]
    fn mismatched_and_missing_values_do_not_compare() {
        let collation = tr();
        let s = Value::String("test");
        let n = Value::Number(Number::I64(42));

        assert_eq!(compare_values(&s, &n, &collation), None);
        assert_eq!(compare_values(&Value::None, &Value::None, &collation), None);
        assert_eq!(compare_values(&Value::None, &n, &collation), None);
    }

    #[test]
    fn sort_state_compare_treats_mismatch_as_equal() {
        let collation = tr();
        let desc = SortState::desc("value");
        let a = Value::Number(Number::I64(1));
        let b = Value::Number(Number::I64(2));

        assert_eq!(desc.compare(&a, &b, &collation), Ordering::Greater);
        assert_eq!(
            desc.compare(&a, &Value::String("x"), &collation),
            Ordering::Equal
        );
    }
}
