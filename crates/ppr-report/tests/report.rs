//! Report artifact generation tests.

use std::fs;

use ppr_model::{CountyCount, CountyCounts, SummaryStats};
use ppr_report::{chart_svg, render_markdown, write_report_artifacts};

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

fn stats() -> SummaryStats {
    SummaryStats {
        mean: 5.0,
        median: 5.0,
        std_dev: Some(2.0),
    }
}

#[test]
fn markdown_contains_all_sections() {
    let doc = render_markdown(&stats());
    assert!(doc.starts_with("# Polling Places Analysis Report\n"));
    assert!(doc.contains("## Descriptive Statistics"));
    assert!(doc.contains("**Mean Number of Polling Places per County:** 5.00"));
    assert!(doc.contains("**Median Number of Polling Places per County:** 5\n"));
    assert!(doc.contains("**Standard Deviation of Polling Places per County:** 2.00"));
    assert!(doc.contains("## Visualizations"));
    assert!(doc.contains(
        "![Number of Polling Places per County](polling_places_per_county.png)"
    ));
    assert!(doc.contains("## Conclusion"));
}

#[test]
fn undefined_std_dev_renders_as_nan() {
    let doc = render_markdown(&SummaryStats {
        mean: 4.0,
        median: 4.0,
        std_dev: None,
    });
    assert!(doc.contains("**Standard Deviation of Polling Places per County:** NaN"));
    assert!(!doc.contains("0.00"));
}

#[test]
fn markdown_rendering_is_deterministic() {
    assert_eq!(render_markdown(&stats()), render_markdown(&stats()));
}

#[test]
fn chart_svg_draws_one_bar_per_county() {
    let svg = chart_svg(&counts(&[("ALAMANCE", 3), ("WAKE", 5), ("DURHAM", 7)])).unwrap();
    assert!(svg.contains("Number of Polling Places per County"));
    // One background rect plus three bars.
    assert_eq!(svg.matches("<rect").count(), 4);
    assert!(svg.contains("ALAMANCE"));
    assert!(svg.contains("rotate(-45"));
}

#[test]
fn chart_svg_escapes_county_names() {
    let svg = chart_svg(&counts(&[("LEWIS & CLARK", 2)])).unwrap();
    assert!(svg.contains("LEWIS &amp; CLARK"));
}

#[test]
fn artifacts_are_written_and_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report");

    let table = counts(&[("ALAMANCE", 3), ("WAKE", 5), ("DURHAM", 7)]);
    let artifacts = write_report_artifacts(&out, &table, &stats()).unwrap();
    assert!(artifacts.chart.exists());
    assert!(artifacts.markdown.exists());
    assert_eq!(
        image::image_dimensions(&artifacts.chart).unwrap(),
        (ppr_report::CHART_WIDTH, ppr_report::CHART_HEIGHT)
    );

    let first = fs::read(&artifacts.markdown).unwrap();
    let again = write_report_artifacts(&out, &table, &stats()).unwrap();
    let second = fs::read(&again.markdown).unwrap();
    // Reruns overwrite in place and produce byte-identical markdown.
    assert_eq!(first, second);
    assert_eq!(fs::read_dir(&out).unwrap().count(), 2);
}
