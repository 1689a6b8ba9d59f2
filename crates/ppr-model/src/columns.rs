//! Column names and artifact filenames shared across the pipeline.

/// Unique polling place identifier; must cast to a 32-bit integer.
pub const COL_POLLING_PLACE_ID: &str = "polling_place_id";
/// Human-readable polling place name; must be non-empty.
pub const COL_POLLING_PLACE_NAME: &str = "polling_place_name";
/// Grouping key for the per-county aggregation.
pub const COL_COUNTY_NAME: &str = "county_name";
/// Postal code; must cast to a 32-bit integer.
pub const COL_ZIP: &str = "zip";
/// Election date in `MM/DD/YYYY` source text.
pub const COL_ELECTION_DT: &str = "election_dt";

/// Derived column holding the per-county polling place count.
pub const COL_NUM_POLLING_PLACES: &str = "num_polling_places";

/// Columns that must be present in the source header.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_POLLING_PLACE_ID,
    COL_POLLING_PLACE_NAME,
    COL_COUNTY_NAME,
    COL_ZIP,
    COL_ELECTION_DT,
];

/// Registry export filename used when no input path is given.
pub const DEFAULT_REGISTRY_FILENAME: &str = "polling_place_20240514.csv";

/// Bar chart artifact filename, overwritten on each run.
pub const CHART_FILENAME: &str = "polling_places_per_county.png";

/// Markdown report artifact filename, overwritten on each run.
pub const REPORT_FILENAME: &str = "polling_places_analysis_report.md";
