//! Data model for the polling-place registry analysis pipeline.
//!
//! This crate defines the typed tables that flow between pipeline stages
//! and the error taxonomy shared by all of them. It deliberately has no
//! dependency on the data layer; frame-level types live with the stages
//! that produce them.

pub mod columns;
pub mod error;
pub mod table;

pub use columns::{
    CHART_FILENAME, COL_COUNTY_NAME, COL_ELECTION_DT, COL_NUM_POLLING_PLACES,
    COL_POLLING_PLACE_ID, COL_POLLING_PLACE_NAME, COL_ZIP, DEFAULT_REGISTRY_FILENAME,
    REPORT_FILENAME, REQUIRED_COLUMNS,
};
pub use error::{RegistryError, Result};
pub use table::{CountyCount, CountyCounts, SummaryStats};
