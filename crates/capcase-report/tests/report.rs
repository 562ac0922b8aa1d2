//! Tests for diagnostics reports.

use capcase_model::{CellValue, PipelineConfig, RecordTable, Row};
use capcase_report::{Stage, WhitespaceFinding, build_report};

const COLUMNS: [&str; 4] = ["State", "Sex", "Race", "Execution Date"];

fn config() -> PipelineConfig {
    PipelineConfig::default()
        .with_target_columns(COLUMNS.iter().map(|c| (*c).to_string()).collect())
}

fn table(rows: &[[&str; 4]]) -> RecordTable {
    let mut table = RecordTable::new(COLUMNS.iter().map(|c| (*c).to_string()).collect());
    for (idx, values) in rows.iter().enumerate() {
        let mut row = Row::new(idx);
        for (column, value) in COLUMNS.iter().zip(values) {
            row.set(*column, CellValue::parse(value));
        }
        table.push_row(row);
    }
    table
}

fn raw_table() -> RecordTable {
    table(&[
        ["Oklahoma ", "Male", "White", "02/02/05"],
        ["Texas", " Male", "White ", "01/01/87"],
    ])
}

fn clean_table() -> RecordTable {
    table(&[
        ["Oklahoma", "Male", "White", "2005"],
        ["Texas", "Male", "White", "1987"],
    ])
}

#[test]
fn pre_report_text() {
    let report = build_report(&raw_table(), &config(), Stage::Pre).expect("build report");

    insta::assert_snapshot!(report.to_string(), @r"
    Number of columns:
    4

    All the column are:
    ['State', 'Sex', 'Race', 'Execution Date']

    Unique states count:
    2

    Unique states:
    ['Oklahoma ', 'Texas']

    Unique sex count:
    2

    Unique sex:
    [' Male', 'Male']

    Unique race count:
    2

    Unique race:
    ['White', 'White ']

    Date ranges:
    01/01/87
    02/02/05

    Values with surrounding whitespace:
    State: 'Oklahoma '
    Sex: ' Male'
    Race: 'White '

    -----------------------------------------------------
    ");
}

#[test]
fn post_report_text() {
    let report = build_report(&clean_table(), &config(), Stage::Post).expect("build report");

    insta::assert_snapshot!(report.to_string(), @r"
    Unique states count:
    2

    Unique states:
    ['Oklahoma', 'Texas']

    Unique sex count:
    1

    Unique sex:
    ['Male']

    Unique race count:
    1

    Unique race:
    ['White']

    Years:
    [2005, 1987]

    State:
    ['Oklahoma', 'Texas']

    Sex:
    ['Male']

    Race:
    ['White']

    Execution Date:
    [1987, 2005]
    ");
}

#[test]
fn pre_and_post_differ_only_where_normalization_acted() {
    let pre = build_report(&raw_table(), &config(), Stage::Pre).expect("pre");
    let post = build_report(&clean_table(), &config(), Stage::Post).expect("post");

    assert_eq!(pre.categories[0].count, 2);
    assert_eq!(post.categories[0].count, 2);
    assert_eq!(pre.categories[1].count, 2);
    assert_eq!(post.categories[1].count, 1);
    assert_eq!(pre.whitespace.len(), 3);
    assert!(post.whitespace.is_empty());
}

#[test]
fn post_report_flags_unlisted_whitespace_defects() {
    let table = table(&[["Texas ", "Male", "White", "1987"]]);

    let report = build_report(&table, &config(), Stage::Post).expect("build report");

    assert_eq!(
        report.whitespace,
        vec![WhitespaceFinding {
            column: "State".to_string(),
            value: "Texas ".to_string(),
        }]
    );
}

#[test]
fn missing_values_show_in_distinct_lists() {
    let table = table(&[["Texas", "", "White", ""], ["Texas", "Male", "White", "1987"]]);

    let report = build_report(&table, &config(), Stage::Post).expect("build report");

    assert_eq!(
        report.categories[1].values,
        vec![CellValue::Text("Male".to_string()), CellValue::Missing]
    );
    assert!(report.to_string().contains("['Male', nan]"));
}

#[test]
fn report_fails_on_absent_categorical_column() {
    let table = RecordTable::new(vec!["Execution Date".to_string()]);
    assert!(build_report(&table, &config(), Stage::Pre).is_err());
}

#[test]
fn json_report_omits_sections_of_the_other_stage() {
    let report = build_report(&raw_table(), &config(), Stage::Pre).expect("build report");
    let json: serde_json::Value =
        serde_json::from_str(&report.to_json().expect("serialize")).expect("parse");

    assert_eq!(json["stage"], "pre");
    assert_eq!(json["column_count"], 4);
    assert_eq!(json["date_range"]["min"], "01/01/87");
    assert!(json.get("years").is_none());
    assert!(json.get("column_values").is_none());
}
