//! Per-county aggregation.

use anyhow::{Context, Result};
use polars::prelude::*;

use ppr_ingest::{any_to_i64, any_to_string};
use ppr_model::{COL_COUNTY_NAME, COL_NUM_POLLING_PLACES, COL_POLLING_PLACE_ID};
use ppr_model::{CountyCount, CountyCounts};

/// Count polling places per county over the cleaned frame.
///
/// Groups by `county_name` under exact string equality; `"Erie"` and
/// `"erie "` are distinct groups (known, intentional limitation). The count
/// is the number of non-null `polling_place_id` values in the group, and
/// the result is sorted by county name so downstream output is
/// reproducible run to run.
pub fn count_by_county(clean: &DataFrame) -> Result<CountyCounts> {
    let counted = clean
        .clone()
        .lazy()
        .group_by([col(COL_COUNTY_NAME)])
        .agg([col(COL_POLLING_PLACE_ID)
            .count()
            .alias(COL_NUM_POLLING_PLACES)])
        .sort([COL_COUNTY_NAME], SortMultipleOptions::default())
        .collect()
        .context("count polling places per county")?;

    let county_column = counted.column(COL_COUNTY_NAME).context("county column")?;
    let count_column = counted
        .column(COL_NUM_POLLING_PLACES)
        .context("count column")?;

    let mut rows = Vec::with_capacity(counted.height());
    for idx in 0..counted.height() {
        let county = any_to_string(county_column.get(idx).unwrap_or(AnyValue::Null));
        let polling_places = any_to_i64(count_column.get(idx).unwrap_or(AnyValue::Null))
            .and_then(|value| u32::try_from(value).ok())
            .unwrap_or(0);
        rows.push(CountyCount {
            county,
            polling_places,
        });
    }
    Ok(CountyCounts::new(rows))
}
