//! Cleaning and typing behavior over hand-built raw frames.

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

use ppr_core::{clean_registry, election_dates};
use ppr_model::RegistryError;

fn raw_frame(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

/// Raw frame with the full required schema, one tuple per row.
fn registry(rows: &[(&str, &str, &str, &str, &str)]) -> DataFrame {
    raw_frame(vec![
        ("polling_place_id", rows.iter().map(|r| r.0).collect()),
        ("polling_place_name", rows.iter().map(|r| r.1).collect()),
        ("county_name", rows.iter().map(|r| r.2).collect()),
        ("zip", rows.iter().map(|r| r.3).collect()),
        ("election_dt", rows.iter().map(|r| r.4).collect()),
    ])
}

#[test]
fn valid_rows_survive_with_typed_columns() {
    let raw = registry(&[
        ("1", "LIBRARY", "WAKE", "27601", "05/14/2024"),
        ("2", "TOWN HALL", "DURHAM", "27701", "05/14/2024"),
    ]);

    let clean = clean_registry(raw).unwrap();
    assert_eq!(clean.height(), 2);
    assert_eq!(
        clean.column("polling_place_id").unwrap().dtype(),
        &DataType::Int32
    );
    assert_eq!(clean.column("zip").unwrap().dtype(), &DataType::Int32);
    assert_eq!(
        clean.column("election_dt").unwrap().dtype(),
        &DataType::Date
    );
}

#[test]
fn empty_id_is_dropped_regardless_of_other_fields() {
    let raw = registry(&[
        ("", "PERFECTLY VALID OTHERWISE", "WAKE", "27601", "05/14/2024"),
        ("2", "TOWN HALL", "DURHAM", "27701", "05/14/2024"),
    ]);

    let clean = clean_registry(raw).unwrap();
    assert_eq!(clean.height(), 1);
}

#[test]
fn empty_name_is_dropped() {
    let raw = registry(&[("1", "", "WAKE", "27601", "05/14/2024")]);
    let clean = clean_registry(raw).unwrap();
    assert_eq!(clean.height(), 0);
}

#[test]
fn failed_required_casts_drop_the_row() {
    let raw = registry(&[
        ("abc", "BAD ID", "WAKE", "27601", "05/14/2024"),
        ("2", "BAD ZIP", "WAKE", "ncsbe", "05/14/2024"),
        ("3", "BAD DATE", "WAKE", "27601", "14/05/2024"),
        ("4", "GOOD", "WAKE", "27601", "05/14/2024"),
    ]);

    let clean = clean_registry(raw).unwrap();
    assert_eq!(clean.height(), 1);
}

#[test]
fn all_rows_dropped_yields_empty_clean_frame() {
    let raw = registry(&[("", "", "WAKE", "27601", "05/14/2024")]);
    let clean = clean_registry(raw).unwrap();
    assert_eq!(clean.height(), 0);
}

#[test]
fn missing_required_column_is_a_schema_error() {
    let raw = raw_frame(vec![
        ("polling_place_id", vec!["1"]),
        ("polling_place_name", vec!["LIBRARY"]),
        ("county_name", vec!["WAKE"]),
        ("zip", vec!["27601"]),
    ]);

    let error = clean_registry(raw).unwrap_err();
    match error.downcast_ref::<RegistryError>() {
        Some(RegistryError::Schema(column)) => assert_eq!(column, "election_dt"),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn election_dates_are_distinct_and_sorted() {
    let raw = registry(&[
        ("1", "LIBRARY", "WAKE", "27601", "11/05/2024"),
        ("2", "TOWN HALL", "DURHAM", "27701", "05/14/2024"),
        ("3", "GYM", "WAKE", "27601", "05/14/2024"),
    ]);

    let clean = clean_registry(raw).unwrap();
    let dates = election_dates(&clean).unwrap();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
        ]
    );
}
