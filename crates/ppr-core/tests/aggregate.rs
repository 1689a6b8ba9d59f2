//! County aggregation over cleaned frames.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use ppr_core::{clean_registry, count_by_county};

fn registry(rows: &[(&str, &str, &str, &str, &str)]) -> DataFrame {
    let columns = vec![
        ("polling_place_id", rows.iter().map(|r| r.0).collect()),
        ("polling_place_name", rows.iter().map(|r| r.1).collect()),
        ("county_name", rows.iter().map(|r| r.2).collect()),
        ("zip", rows.iter().map(|r| r.3).collect()),
        ("election_dt", rows.iter().map(|r| r.4).collect()),
    ];
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values): (&str, Vec<&str>)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

#[test]
fn counts_group_by_county_sorted_by_name() {
    let raw = registry(&[
        ("1", "LIBRARY", "WAKE", "27601", "05/14/2024"),
        ("2", "TOWN HALL", "DURHAM", "27701", "05/14/2024"),
        ("3", "GYM", "WAKE", "27603", "05/14/2024"),
        ("4", "CHURCH", "WAKE", "27604", "05/14/2024"),
    ]);
    let clean = clean_registry(raw).unwrap();

    let counts = count_by_county(&clean).unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.rows[0].county, "DURHAM");
    assert_eq!(counts.rows[0].polling_places, 1);
    assert_eq!(counts.rows[1].county, "WAKE");
    assert_eq!(counts.rows[1].polling_places, 3);
}

#[test]
fn aggregation_loses_no_rows() {
    let raw = registry(&[
        ("1", "A", "ALAMANCE", "27215", "05/14/2024"),
        ("x", "BAD ID", "ALAMANCE", "27215", "05/14/2024"),
        ("3", "C", "BERTIE", "27805", "05/14/2024"),
        ("4", "D", "CAMDEN", "27921", "05/14/2024"),
    ]);
    let clean = clean_registry(raw).unwrap();

    let counts = count_by_county(&clean).unwrap();
    // Every cleaned row carries a non-null id, so the counts must account
    // for each of them exactly once.
    assert_eq!(counts.total(), clean.height() as u64);
}

#[test]
fn county_names_are_not_normalized() {
    let raw = registry(&[
        ("1", "A", "Erie", "14201", "05/14/2024"),
        ("2", "B", "erie ", "14202", "05/14/2024"),
    ]);
    let clean = clean_registry(raw).unwrap();

    let counts = count_by_county(&clean).unwrap();
    assert_eq!(counts.len(), 2);
}

#[test]
fn empty_clean_frame_yields_empty_counts() {
    let raw = registry(&[("", "", "WAKE", "27601", "05/14/2024")]);
    let clean = clean_registry(raw).unwrap();

    let counts = count_by_county(&clean).unwrap();
    assert!(counts.is_empty());
}
