//! Row cleaning and typing.
//!
//! The raw frame arrives with every column as text. This stage drops rows
//! missing the mandatory identifying fields, then casts the typed columns:
//! `polling_place_id` and `zip` to 32-bit integers, `election_dt` from
//! `MM/DD/YYYY` text to a calendar date. A row whose required cast fails is
//! excluded the same way a null-drop excludes it; cast failures never
//! produce partial values and never abort the pipeline.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use polars::prelude::*;
use tracing::debug;

use ppr_model::{
    COL_ELECTION_DT, COL_POLLING_PLACE_ID, COL_POLLING_PLACE_NAME, COL_ZIP, REQUIRED_COLUMNS,
    RegistryError,
};

/// Clean and type the raw registry frame.
///
/// # Errors
///
/// Returns [`RegistryError::Schema`] when a required column is absent from
/// the header. Per-row data problems are handled by exclusion, not errors.
pub fn clean_registry(raw: DataFrame) -> Result<DataFrame> {
    ensure_required_columns(&raw)?;
    let raw_rows = raw.height();
    let cleaned = raw
        .lazy()
        .filter(
            col(COL_POLLING_PLACE_ID)
                .neq(lit(""))
                .and(col(COL_POLLING_PLACE_NAME).neq(lit(""))),
        )
        .with_columns([
            col(COL_POLLING_PLACE_ID).cast(DataType::Int32),
            col(COL_ZIP).cast(DataType::Int32),
            col(COL_ELECTION_DT).str().to_date(election_dt_options()),
        ])
        // Non-strict casts turn failures into nulls; dropping them here
        // makes a failed cast indistinguishable from a null-drop.
        .filter(
            col(COL_POLLING_PLACE_ID)
                .is_not_null()
                .and(col(COL_ZIP).is_not_null())
                .and(col(COL_ELECTION_DT).is_not_null()),
        )
        .collect()
        .context("clean and type registry rows")?;
    debug!(
        raw_rows,
        clean_rows = cleaned.height(),
        dropped_rows = raw_rows - cleaned.height(),
        "registry cleaned"
    );
    Ok(cleaned)
}

/// Distinct election dates present in the cleaned frame, sorted.
pub fn election_dates(clean: &DataFrame) -> Result<Vec<NaiveDate>> {
    let column = clean
        .column(COL_ELECTION_DT)
        .context("election_dt column")?;
    let mut dates = BTreeSet::new();
    for idx in 0..clean.height() {
        if let Ok(AnyValue::Date(days)) = column.get(idx) {
            if let Some(date) = date_from_epoch_days(days) {
                dates.insert(date);
            }
        }
    }
    Ok(dates.into_iter().collect())
}

fn ensure_required_columns(frame: &DataFrame) -> Result<()> {
    let names: BTreeSet<&str> = frame
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    for required in REQUIRED_COLUMNS {
        if !names.contains(required) {
            return Err(RegistryError::Schema(required.to_string()).into());
        }
    }
    Ok(())
}

fn election_dt_options() -> StrptimeOptions {
    StrptimeOptions {
        format: Some("%m/%d/%Y".into()),
        strict: false,
        exact: true,
        cache: true,
    }
}

/// Polars stores dates as days since the Unix epoch.
fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1970, 1, 1)
        .and_then(|epoch| epoch.checked_add_signed(Duration::days(i64::from(days))))
}
