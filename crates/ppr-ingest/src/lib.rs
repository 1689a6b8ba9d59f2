pub mod loader;
pub mod polars_utils;

pub use loader::{LoadedRegistry, default_registry_path, read_registry};
pub use polars_utils::{any_to_i64, any_to_string, format_numeric, parse_i64};
