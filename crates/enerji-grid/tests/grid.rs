//! Behavioral tests for sorting, name aliasing and export.

use enerji_grid::{
    serialize, sort, Column, ColumnSpec, DataGrid, Dir, GridContext, Language, Record, Render,
    SortState, Value,
};
use insta::assert_snapshot;

fn ctx(language: Language) -> GridContext {
    GridContext::new(language).unwrap()
}

fn names(records: &[&Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string())
        .collect()
}

fn name_value_columns() -> ColumnSpec {
    ColumnSpec::builder()
        .column(Column::new("name", "Name"))
        .column(Column::new("value", "Value"))
        .build()
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn equal_keys_keep_source_order_in_both_directions() {
    let records = vec![
        Record::new().with("name", "first").with("value", 5),
        Record::new().with("name", "low").with("value", 1),
        Record::new().with("name", "second").with("value", 5),
        Record::new().with("name", "high").with("value", 9),
        Record::new().with("name", "third").with("value", 5),
    ];
    let ctx = ctx(Language::Tr);

    let asc = sort(&records, Some(&SortState::asc("value")), &ctx);
    assert_eq!(names(&asc), vec!["low", "first", "second", "third", "high"]);

    let desc = sort(&records, Some(&SortState::desc("value")), &ctx);
    assert_eq!(names(&desc), vec!["high", "first", "second", "third", "low"]);
}

#[test]
fn toggling_back_to_ascending_reproduces_the_first_sort() {
    let columns = ColumnSpec::builder()
        .column(Column::new("name", "Sektör"))
        .column(Column::new("value", "Tüketim (TJ)").render(Render::Number))
        .build();
    let records = vec![
        Record::new().with("name", "Sanayi").with("value", 1717368),
        Record::new().with("name", "Hizmet").with("value", 501104),
        Record::new().with("name", "Ulaştırma").with("value", 1355090),
        Record::new().with("name", "Hanehalkı").with("value", 1287738),
    ];
    let ctx = ctx(Language::Tr);
    let mut grid = DataGrid::new("Özet", columns);

    grid.request_sort("name");
    let first: Vec<&Record> = grid.view(&records, &ctx);
    assert_eq!(grid.sort_state().map(|s| s.dir), Some(Dir::Asc));

    grid.request_sort("name");
    assert_eq!(grid.sort_state().map(|s| s.dir), Some(Dir::Desc));
    let reversed = grid.view(&records, &ctx);
    assert_eq!(
        names(&reversed),
        names(&first).into_iter().rev().collect::<Vec<_>>()
    );

    grid.request_sort("name");
    let again = grid.view(&records, &ctx);
    assert_eq!(again, first);
}

#[test]
fn turkish_collation_is_not_codepoint_order() {
    let records: Vec<Record> = ["Elektrik", "Çelik", "Demir"]
        .into_iter()
        .map(|name| Record::new().with("name", name))
        .collect();

    let mut codepoint: Vec<&str> = vec!["Elektrik", "Çelik", "Demir"];
    codepoint.sort_unstable();
    assert_eq!(codepoint, vec!["Demir", "Elektrik", "Çelik"]);

    let sorted = sort(&records, Some(&SortState::asc("name")), &ctx(Language::Tr));
    assert_eq!(names(&sorted), vec!["Çelik", "Demir", "Elektrik"]);
}

#[test]
fn text_among_numbers_compares_equal() {
    let records = vec![
        Record::new().with("name", "n/a").with("value", "yok"),
        Record::new().with("name", "p").with("value", 5),
        Record::new().with("name", "q").with("value", 2),
    ];
    let ctx = ctx(Language::Tr);

    let desc = sort(&records, Some(&SortState::desc("value")), &ctx);
    assert_eq!(names(&desc), vec!["n/a", "p", "q"]);

    let asc = sort(&records, Some(&SortState::asc("value")), &ctx);
    assert_eq!(names(&asc), vec!["n/a", "q", "p"]);

    let grid = DataGrid::new("Karışık", name_value_columns());
    assert_eq!(
        grid.export(&records, &ctx).unwrap().content,
        "\"Name\",\"Value\"\n\"n/a\",\"yok\"\n\"p\",\"5\"\n\"q\",\"2\""
    );
}

#[test]
fn sorting_leaves_the_input_untouched() {
    let records = vec![
        Record::new().with("name", "b").with("value", 2),
        Record::new().with("name", "a").with("value", 1),
    ];
    let before = records.clone();

    let sorted = sort(&records, Some(&SortState::asc("value")), &ctx(Language::En));

    assert_eq!(names(&sorted), vec!["a", "b"]);
    assert_eq!(records, before);
}

// ============================================================================
// Name aliasing
// ============================================================================

#[test]
fn english_mode_falls_back_to_primary_name() {
    let columns = ColumnSpec::builder()
        .column(Column::new("nameEN", "Fuel"))
        .column(Column::new("value", "Share (%)").render(Render::Percent))
        .build();
    let records = vec![
        Record::new().with("name", "Elektrik").with("nameEN", "Electricity").with("value", 22.2),
        Record::new().with("name", "Isı").with("value", 5.1),
        Record::new().with("name", "LPG").with("nameEN", "").with("value", 1.0),
    ];
    let grid = DataGrid::new("Fuels", columns);
    let ctx = ctx(Language::En);

    let rows = grid.rows(&records, &ctx);
    assert_eq!(
        rows,
        vec![
            vec!["Electricity", "22.2%"],
            vec!["Isı", "5.1%"],
            vec!["LPG", "1%"],
        ]
    );

    let csv = grid.export(&records, &ctx).unwrap().content;
    assert_snapshot!(csv, @r#"
    "Fuel","Share (%)"
    "Electricity","22.2"
    "Isı","5.1"
    "LPG","1"
    "#);
}

#[test]
fn name_alias_resolves_identically_for_sort_and_export() {
    let records = vec![
        Record::new().with("name", "Kömür").with("nameEN", "Coal"),
        Record::new().with("name", "Ahşap"),
    ];
    let columns = ColumnSpec::builder().column(Column::new("name", "Name")).build();
    let mut grid = DataGrid::new("Names", columns);
    grid.request_sort("name");
    let ctx = ctx(Language::En);

    assert_eq!(grid.rows(&records, &ctx), vec![vec!["Ahşap"], vec!["Coal"]]);
    assert_eq!(
        grid.export(&records, &ctx).unwrap().content,
        "\"Name\"\n\"Ahşap\"\n\"Coal\""
    );
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn export_matches_reference_text() {
    let records = vec![
        Record::new().with("name", "A").with("value", 10),
        Record::new().with("name", "B, C").with("value", 5),
    ];

    let csv = serialize(&records, &name_value_columns(), Language::Tr).unwrap();
    assert_snapshot!(csv, @r#"
    "Name","Value"
    "A","10"
    "B, C","5"
    "#);
    assert_eq!(csv, "\"Name\",\"Value\"\n\"A\",\"10\"\n\"B, C\",\"5\"");
}

#[test]
fn exported_text_reads_back() {
    let records = vec![
        Record::new().with("name", "A").with("value", 10),
        Record::new().with("name", "B, C").with("value", 5),
    ];
    let csv = serialize(&records, &name_value_columns(), Language::Tr).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, vec!["Name", "Value"]);
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    assert_eq!(rows, vec![vec!["A", "10"], vec!["B, C", "5"]]);
}

#[test]
fn rendered_badges_export_as_raw_values() {
    let columns = ColumnSpec::builder()
        .column(Column::new("name", "Name"))
        .column(
            Column::new("value", "Share").render(Render::custom(|value, _, _| {
                format!("<span class=\"badge\">{}%</span>", value.to_text())
            })),
        )
        .build();
    let records = vec![Record::new().with("name", "A").with("value", 42)];
    let grid = DataGrid::new("Badges", columns);
    let ctx = ctx(Language::En);

    assert_eq!(
        grid.rows(&records, &ctx)[0][1],
        "<span class=\"badge\">42%</span>"
    );
    assert_eq!(
        grid.export(&records, &ctx).unwrap().content,
        "\"Name\",\"Share\"\n\"A\",\"42\""
    );
}

#[test]
fn missing_fields_are_blank_and_unordered() {
    let records = vec![
        Record::new().with("name", "x"),
        Record::new().with("name", "y").with("value", 1),
    ];
    let ctx = ctx(Language::En);

    let sorted = sort(&records, Some(&SortState::desc("value")), &ctx);
    assert_eq!(names(&sorted), vec!["x", "y"]);

    let csv = serialize(&records, &name_value_columns(), Language::En).unwrap();
    assert_eq!(csv, "\"Name\",\"Value\"\n\"x\",\"\"\n\"y\",\"1\"");

    assert_eq!(Column::new("value", "V").raw(&records[0], Language::En), Value::None);
}
