//! Property-based tests for the grid using proptest.

use proptest::prelude::*;
use enerji_grid::{
    serialize, sort, Column, ColumnSpec, GridContext, Language, Record, SortState,
};

// ============================================================================
// Test helpers
// ============================================================================

fn row(id: usize, group: i64, name: &str) -> Record {
    Record::new()
        .with("id", id as u64)
        .with("group", group)
        .with("name", name)
}

fn rows_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0i64..4, "[a-zçğıöşü ]{0,6}"), 0..40).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(id, (group, name))| row(id, group, &name))
            .collect()
    })
}

fn id(record: &Record) -> u64 {
    record.get("id").and_then(|v| v.as_u64()).unwrap()
}

fn ids(records: &[&Record]) -> Vec<u64> {
    records.iter().map(|r| id(r)).collect()
}

fn ctx() -> GridContext {
    GridContext::new(Language::Tr).unwrap()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Records with equal keys keep their source order, whichever the direction.
    #[test]
    fn sort_is_stable(records in rows_strategy(), descending in any::<bool>()) {
        let state = if descending { SortState::desc("group") } else { SortState::asc("group") };
        let sorted = sort(&records, Some(&state), &ctx());

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.get("group") == b.get("group") {
                prop_assert!(id(a) < id(b));
            }
        }
    }

    /// Sorted output is a permutation of the input.
    #[test]
    fn sort_is_a_permutation(records in rows_strategy()) {
        let sorted = sort(&records, Some(&SortState::asc("name")), &ctx());
        let mut seen = ids(&sorted);
        seen.sort_unstable();
        let expected: Vec<u64> = (0..records.len() as u64).collect();
        prop_assert_eq!(seen, expected);
    }

    /// Sorting leaves the caller's sequence untouched.
    #[test]
    fn sort_does_not_mutate_input(records in rows_strategy()) {
        let before = records.clone();
        let _ = sort(&records, Some(&SortState::desc("name")), &ctx());
        prop_assert_eq!(records, before);
    }

    /// Numeric keys come out in order.
    #[test]
    fn numeric_sort_is_ordered(records in rows_strategy()) {
        let sorted = sort(&records, Some(&SortState::desc("group")), &ctx());
        let groups: Vec<i64> = sorted
            .iter()
            .map(|r| r.get("group").and_then(|v| v.as_i64()).unwrap())
            .collect();
        prop_assert!(groups.windows(2).all(|w| w[0] >= w[1]));
    }

    /// A compliant CSV reader recovers every cell.
    #[test]
    fn csv_reads_back(cells in prop::collection::vec(("[^\r]{0,12}", any::<i32>()), 0..20)) {
        let records: Vec<Record> = cells
            .iter()
            .map(|(name, value)| Record::new().with("name", name.as_str()).with("value", *value))
            .collect();
        let columns = ColumnSpec::builder()
            .column(Column::new("name", "Ad, \"isim\""))
            .column(Column::new("value", "Değer"))
            .build();

        let text = serialize(&records, &columns, Language::Tr).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(text.as_bytes());
        let parsed: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();

        prop_assert_eq!(parsed.len(), cells.len() + 1);
        prop_assert_eq!(&parsed[0][0], "Ad, \"isim\"");
        for (record, (name, value)) in parsed[1..].iter().zip(&cells) {
            prop_assert_eq!(&record[0], name.as_str());
            prop_assert_eq!(record[1].to_string(), value.to_string());
        }
    }
}
