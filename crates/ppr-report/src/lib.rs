//! Report artifact generation for the polling-place analysis.
//!
//! Two artifacts per run, both written into a caller-supplied directory
//! and overwritten if already present:
//!
//! - **Chart**: vertical bar chart of polling places per county, PNG
//! - **Markdown**: descriptive statistics and the embedded chart

pub mod chart;
pub mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ppr_model::{CHART_FILENAME, CountyCounts, REPORT_FILENAME, SummaryStats};

pub use chart::{CHART_HEIGHT, CHART_TITLE, CHART_WIDTH, chart_svg, render_chart};
pub use markdown::{render_markdown, write_markdown};

/// Paths of the artifacts written by a report run.
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub chart: PathBuf,
    pub markdown: PathBuf,
}

/// Write the chart and markdown report into `dir`, creating the directory
/// if absent. Artifact names are fixed; a rerun replaces prior output
/// rather than accumulating versions.
pub fn write_report_artifacts(
    dir: &Path,
    counts: &CountyCounts,
    stats: &SummaryStats,
) -> Result<ReportArtifacts> {
    fs::create_dir_all(dir)
        .with_context(|| format!("create output directory {}", dir.display()))?;

    let chart_path = dir.join(CHART_FILENAME);
    chart::render_chart(&chart_path, counts)?;

    let markdown_path = dir.join(REPORT_FILENAME);
    markdown::write_markdown(&markdown_path, stats)?;

    Ok(ReportArtifacts {
        chart: chart_path,
        markdown: markdown_path,
    })
}
