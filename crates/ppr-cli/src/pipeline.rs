//! Report pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: read the UTF-16 registry export into a raw string frame
//! 2. **Clean**: drop incomplete rows, cast the typed columns
//! 3. **Aggregate**: count polling places per county
//! 4. **Summarize**: mean, median, sample standard deviation
//! 5. **Report**: bar chart PNG and markdown document
//!
//! Each stage fully consumes its predecessor's output before the next one
//! starts. The county table and statistics are printed to the console
//! after the summarize stage, before any artifact is written, so an
//! insufficient-data failure never leaves an empty chart behind.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use ppr_core::{clean_registry, count_by_county, election_dates, summarize};
use ppr_ingest::{LoadedRegistry, read_registry};
use ppr_model::{CountyCounts, SummaryStats};
use ppr_report::{ReportArtifacts, write_report_artifacts};

use crate::summary::print_counts;

/// Inputs for a report run.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    /// Registry export path; defaults to the standard export filename in
    /// the current working directory.
    pub input: Option<PathBuf>,
    /// Artifact directory; defaults to the current directory.
    pub output_dir: Option<PathBuf>,
}

/// Everything a run produced, for the console summary.
#[derive(Debug)]
pub struct ReportResult {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub raw_rows: usize,
    pub skipped_rows: usize,
    pub clean_rows: usize,
    pub election_dates: Vec<NaiveDate>,
    pub counties: CountyCounts,
    pub stats: SummaryStats,
    pub artifacts: ReportArtifacts,
}

/// Run the full pipeline for one registry export.
///
/// Fatal errors carry the failing stage in their context and abort the
/// run; no partial-artifact cleanup is attempted since every artifact is
/// overwritten on the next run anyway.
pub fn run_report(request: &ReportRequest) -> Result<ReportResult> {
    let load_start = Instant::now();
    let LoadedRegistry {
        frame: raw,
        path: input_path,
        skipped_rows,
    } = info_span!("load")
        .in_scope(|| read_registry(request.input.as_deref()))
        .context("load stage")?;
    let raw_rows = raw.height();
    info!(
        path = %input_path.display(),
        raw_rows,
        skipped_rows,
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    let clean_start = Instant::now();
    let clean = info_span!("clean")
        .in_scope(|| clean_registry(raw))
        .context("clean stage")?;
    let dates = election_dates(&clean).context("clean stage")?;
    let clean_rows = clean.height();
    info!(
        clean_rows,
        dropped_rows = raw_rows - clean_rows,
        duration_ms = clean_start.elapsed().as_millis(),
        "clean complete"
    );

    let aggregate_start = Instant::now();
    let counties = info_span!("aggregate")
        .in_scope(|| count_by_county(&clean))
        .context("aggregate stage")?;
    info!(
        county_count = counties.len(),
        duration_ms = aggregate_start.elapsed().as_millis(),
        "aggregate complete"
    );

    let stats = info_span!("summarize")
        .in_scope(|| summarize(&counties))
        .context("summarize stage")?;

    // Console output ahead of artifact generation.
    print_counts(&counties, &stats);

    let output_dir = request
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let report_start = Instant::now();
    let artifacts = info_span!("report")
        .in_scope(|| write_report_artifacts(&output_dir, &counties, &stats))
        .context("report stage")?;
    info!(
        chart = %artifacts.chart.display(),
        markdown = %artifacts.markdown.display(),
        duration_ms = report_start.elapsed().as_millis(),
        "report complete"
    );

    Ok(ReportResult {
        input_path,
        output_dir,
        raw_rows,
        skipped_rows,
        clean_rows,
        election_dates: dates,
        counties,
        stats,
        artifacts,
    })
}
