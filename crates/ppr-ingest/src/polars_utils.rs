//! Polars `AnyValue` utility functions.
//!
//! Helpers for pulling display text and integers out of frame cells when
//! converting aggregation results into typed tables.

use polars::prelude::*;

/// Converts a polars `AnyValue` to a display string.
/// Null becomes the empty string; floats drop trailing zeros.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float64(v) => format_numeric(v),
        other => other.to_string(),
    }
}

/// Converts an `AnyValue` to i64, returning None for non-integer or null values.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_conversion_covers_pipeline_dtypes() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::String("WAKE")), "WAKE");
        assert_eq!(any_to_string(AnyValue::Int32(27601)), "27601");
        assert_eq!(any_to_string(AnyValue::UInt32(5)), "5");
        assert_eq!(any_to_string(AnyValue::Float64(5.0)), "5");
        assert_eq!(any_to_string(AnyValue::Float64(5.5)), "5.5");
    }

    #[test]
    fn integer_conversion_parses_strings() {
        assert_eq!(any_to_i64(AnyValue::String(" 42 ")), Some(42));
        assert_eq!(any_to_i64(AnyValue::String("abc")), None);
        assert_eq!(any_to_i64(AnyValue::UInt32(7)), Some(7));
        assert_eq!(any_to_i64(AnyValue::Null), None);
    }

    #[test]
    fn numeric_formatting_trims_trailing_zeros() {
        assert_eq!(format_numeric(462.0), "462");
        assert_eq!(format_numeric(4.50), "4.5");
        assert_eq!(format_numeric(0.25), "0.25");
    }
}
