//! Typed result tables produced by the aggregation and statistics stages.

use serde::{Deserialize, Serialize};

/// Polling place count for a single county.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyCount {
    /// County name exactly as it appears in the source (no case or
    /// whitespace normalization).
    pub county: String,
    /// Number of polling places with a non-null identifier in the county.
    pub polling_places: u32,
}

/// Per-county polling place counts, ordered by county name.
///
/// Counties with no surviving rows after cleaning do not appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyCounts {
    pub rows: Vec<CountyCount>,
}

impl CountyCounts {
    pub fn new(rows: Vec<CountyCount>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count column as floats, in table order.
    pub fn counts(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| f64::from(row.polling_places))
            .collect()
    }

    /// Sum of all counts; equals the number of cleaned rows that carried
    /// a non-null polling place id.
    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .map(|row| u64::from(row.polling_places))
            .sum()
    }

    /// Largest per-county count, 0 for an empty table.
    pub fn max_count(&self) -> u32 {
        self.rows
            .iter()
            .map(|row| row.polling_places)
            .max()
            .unwrap_or(0)
    }
}

/// Descriptive statistics over the county count column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Arithmetic mean of polling places per county.
    pub mean: f64,
    /// Median; for an even number of counties, the average of the two
    /// middle counts.
    pub median: f64,
    /// Sample standard deviation (n-1 denominator). `None` when fewer
    /// than two counties are present; rendered as `NaN`, never `0.00`.
    pub std_dev: Option<f64>,
}

impl SummaryStats {
    /// Mean formatted to two decimals.
    pub fn mean_text(&self) -> String {
        format!("{:.2}", self.mean)
    }

    /// Median as-is: whole medians print without a decimal part.
    pub fn median_text(&self) -> String {
        format!("{}", self.median)
    }

    /// Sample standard deviation to two decimals, `NaN` when undefined.
    pub fn std_dev_text(&self) -> String {
        match self.std_dev {
            Some(value) => format!("{value:.2}"),
            None => "NaN".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u32)]) -> CountyCounts {
        CountyCounts::new(
            pairs
                .iter()
                .map(|(county, polling_places)| CountyCount {
                    county: (*county).to_string(),
                    polling_places: *polling_places,
                })
                .collect(),
        )
    }

    #[test]
    fn total_sums_all_counts() {
        let table = counts(&[("ALAMANCE", 3), ("WAKE", 5), ("DURHAM", 7)]);
        assert_eq!(table.total(), 15);
        assert_eq!(table.max_count(), 7);
        assert_eq!(table.counts(), vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn empty_table_has_zero_max() {
        let table = CountyCounts::default();
        assert!(table.is_empty());
        assert_eq!(table.max_count(), 0);
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn stats_text_formatting() {
        let stats = SummaryStats {
            mean: 5.0,
            median: 5.0,
            std_dev: Some(2.0),
        };
        assert_eq!(stats.mean_text(), "5.00");
        assert_eq!(stats.median_text(), "5");
        assert_eq!(stats.std_dev_text(), "2.00");

        let undefined = SummaryStats {
            mean: 4.0,
            median: 2.5,
            std_dev: None,
        };
        assert_eq!(undefined.median_text(), "2.5");
        assert_eq!(undefined.std_dev_text(), "NaN");
    }

    #[test]
    fn county_counts_round_trip_json() {
        let table = counts(&[("WAKE", 5)]);
        let json = serde_json::to_string(&table).unwrap();
        let back: CountyCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
