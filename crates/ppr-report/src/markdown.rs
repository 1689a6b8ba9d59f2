//! Markdown report templating and writing.
//!
//! The document body is fixed boilerplate interleaved with the computed
//! statistics. Rendering is a pure function so the template can be tested
//! without touching the filesystem; the chart is referenced by relative
//! filename so the report stays portable alongside its image.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use ppr_model::{CHART_FILENAME, SummaryStats};

use crate::chart::CHART_TITLE;

/// Render the full report body for the given statistics.
pub fn render_markdown(stats: &SummaryStats) -> String {
    let mut doc = String::new();
    doc.push_str("# Polling Places Analysis Report\n\n");

    doc.push_str("## Descriptive Statistics\n\n");
    doc.push_str(&format!(
        "**Mean Number of Polling Places per County:** {}\n\n",
        stats.mean_text()
    ));
    doc.push_str(&format!(
        "**Median Number of Polling Places per County:** {}\n\n",
        stats.median_text()
    ));
    doc.push_str(&format!(
        "**Standard Deviation of Polling Places per County:** {}\n\n",
        stats.std_dev_text()
    ));
    doc.push_str(
        "This section provides the summary statistics of polling places across \
         different counties. The mean, median, and standard deviation help in \
         understanding the distribution of polling places.\n\n",
    );

    doc.push_str("## Visualizations\n\n");
    doc.push_str("### Polling Places per County\n\n");
    doc.push_str(&format!("![{CHART_TITLE}]({CHART_FILENAME})\n\n"));

    doc.push_str("## Conclusion\n\n");
    doc.push_str(
        "From the analysis, we observe the distribution of polling places across \
         counties. Further analysis could include comparing these numbers with \
         voter population data to ensure accessibility.\n",
    );
    doc
}

/// Write the report to `path`, overwriting any existing file.
pub fn write_markdown(path: &Path, stats: &SummaryStats) -> Result<()> {
    fs::write(path, render_markdown(stats))
        .with_context(|| format!("write report {}", path.display()))
}
