//! Bar chart rendering.
//!
//! The chart is composed as an SVG document, rasterized with resvg, and
//! saved as a PNG through the image crate. Text layout relies on the
//! system font database; counties render one vertical bar each with the
//! x-axis labels rotated for readability.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use image::{ImageBuffer, RgbaImage};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use resvg::tiny_skia::{self, Pixmap};
use resvg::usvg::{Options, Tree};

use ppr_model::CountyCounts;

/// Rendered raster width in pixels.
pub const CHART_WIDTH: u32 = 1200;
/// Rendered raster height in pixels.
pub const CHART_HEIGHT: u32 = 600;

/// Chart title; doubles as the image alt text in the markdown report.
pub const CHART_TITLE: &str = "Number of Polling Places per County";

const X_AXIS_LABEL: &str = "County Name";
const Y_AXIS_LABEL: &str = "Number of Polling Places";

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 140.0;

const FONT_FAMILY: &str = "sans-serif";
const BACKGROUND: &str = "#ffffff";
const AXIS_COLOR: &str = "#333333";
const GRID_COLOR: &str = "#dddddd";
const TEXT_COLOR: &str = "#222222";

/// Bar fill colors, cycled per county.
const PALETTE: [&str; 4] = ["#4285f4", "#ea4335", "#fbbc05", "#0f9d8f"];

/// Render the county bar chart to a PNG at `path`, overwriting any
/// existing file.
pub fn render_chart(path: &Path, counts: &CountyCounts) -> Result<()> {
    let svg = chart_svg(counts)?;
    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = Tree::from_data(svg.as_bytes(), &options).context("parse chart svg")?;

    let mut pixmap = Pixmap::new(CHART_WIDTH, CHART_HEIGHT)
        .ok_or_else(|| anyhow!("failed to allocate {CHART_WIDTH}x{CHART_HEIGHT} pixmap"))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let image: RgbaImage = ImageBuffer::from_raw(CHART_WIDTH, CHART_HEIGHT, pixmap.take())
        .ok_or_else(|| anyhow!("failed to build image buffer from pixmap"))?;
    image
        .save(path)
        .with_context(|| format!("write chart {}", path.display()))?;
    Ok(())
}

/// Compose the chart as an SVG document.
pub fn chart_svg(counts: &CountyCounts) -> Result<String> {
    let width = f64::from(CHART_WIDTH);
    let height = f64::from(CHART_HEIGHT);
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let step = tick_step(counts.max_count());
    let y_max = counts.max_count().div_ceil(step).max(1) * step;
    let scale = plot_height / f64::from(y_max);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
    svg.push_attribute(("width", CHART_WIDTH.to_string().as_str()));
    svg.push_attribute(("height", CHART_HEIGHT.to_string().as_str()));
    svg.push_attribute(("viewBox", format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}").as_str()));
    writer.write_event(Event::Start(svg))?;

    rect(
        &mut writer,
        0.0,
        0.0,
        width,
        height,
        BACKGROUND,
    )?;

    // Title and axis captions.
    text(
        &mut writer,
        CHART_TITLE,
        width / 2.0,
        MARGIN_TOP - 24.0,
        22.0,
        "middle",
        None,
    )?;
    text(
        &mut writer,
        X_AXIS_LABEL,
        MARGIN_LEFT + plot_width / 2.0,
        height - 12.0,
        16.0,
        "middle",
        None,
    )?;
    let y_label_y = MARGIN_TOP + plot_height / 2.0;
    text(
        &mut writer,
        Y_AXIS_LABEL,
        22.0,
        y_label_y,
        16.0,
        "middle",
        Some(format!("rotate(-90 22 {y_label_y})")),
    )?;

    // Horizontal gridlines with tick labels.
    let mut value = 0u32;
    while value <= y_max {
        let y = MARGIN_TOP + plot_height - f64::from(value) * scale;
        if value > 0 {
            line(
                &mut writer,
                MARGIN_LEFT,
                y,
                MARGIN_LEFT + plot_width,
                y,
                GRID_COLOR,
                1.0,
            )?;
        }
        line(&mut writer, MARGIN_LEFT - 6.0, y, MARGIN_LEFT, y, AXIS_COLOR, 1.0)?;
        text(
            &mut writer,
            &value.to_string(),
            MARGIN_LEFT - 10.0,
            y + 4.0,
            12.0,
            "end",
            None,
        )?;
        value += step;
    }

    // Bars and rotated county labels.
    if !counts.is_empty() {
        let slot = plot_width / counts.len() as f64;
        let bar_width = slot * 0.8;
        for (idx, row) in counts.rows.iter().enumerate() {
            let x = MARGIN_LEFT + idx as f64 * slot + slot * 0.1;
            let bar_height = f64::from(row.polling_places) * scale;
            let y = MARGIN_TOP + plot_height - bar_height;
            rect(
                &mut writer,
                x,
                y,
                bar_width,
                bar_height,
                PALETTE[idx % PALETTE.len()],
            )?;

            let label_x = x + bar_width / 2.0;
            let label_y = MARGIN_TOP + plot_height + 16.0;
            text(
                &mut writer,
                &row.county,
                label_x,
                label_y,
                12.0,
                "end",
                Some(format!("rotate(-45 {label_x} {label_y})")),
            )?;
        }
    }

    // Axis lines sit on top of the bars.
    line(
        &mut writer,
        MARGIN_LEFT,
        MARGIN_TOP + plot_height,
        MARGIN_LEFT + plot_width,
        MARGIN_TOP + plot_height,
        AXIS_COLOR,
        1.5,
    )?;
    line(
        &mut writer,
        MARGIN_LEFT,
        MARGIN_TOP,
        MARGIN_LEFT,
        MARGIN_TOP + plot_height,
        AXIS_COLOR,
        1.5,
    )?;

    writer.write_event(Event::End(BytesEnd::new("svg")))?;
    let bytes = writer.into_inner();
    String::from_utf8(bytes).context("chart svg is not valid utf-8")
}

/// Pick a 1/2/5-scaled tick step that keeps the axis at five ticks or
/// fewer.
fn tick_step(max: u32) -> u32 {
    if max == 0 {
        return 1;
    }
    let target = (f64::from(max) / 5.0).max(1.0);
    let magnitude = 10f64.powf(target.log10().floor());
    for multiplier in [1.0, 2.0, 5.0, 10.0] {
        let step = magnitude * multiplier;
        if f64::from(max) / step <= 5.0 {
            return step as u32;
        }
    }
    (magnitude * 10.0) as u32
}

fn rect<W: std::io::Write>(
    writer: &mut Writer<W>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: &str,
) -> Result<()> {
    let mut element = BytesStart::new("rect");
    element.push_attribute(("x", fmt(x).as_str()));
    element.push_attribute(("y", fmt(y).as_str()));
    element.push_attribute(("width", fmt(width).as_str()));
    element.push_attribute(("height", fmt(height).as_str()));
    element.push_attribute(("fill", fill));
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

fn line<W: std::io::Write>(
    writer: &mut Writer<W>,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    stroke: &str,
    stroke_width: f64,
) -> Result<()> {
    let mut element = BytesStart::new("line");
    element.push_attribute(("x1", fmt(x1).as_str()));
    element.push_attribute(("y1", fmt(y1).as_str()));
    element.push_attribute(("x2", fmt(x2).as_str()));
    element.push_attribute(("y2", fmt(y2).as_str()));
    element.push_attribute(("stroke", stroke));
    element.push_attribute(("stroke-width", fmt(stroke_width).as_str()));
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

fn text<W: std::io::Write>(
    writer: &mut Writer<W>,
    content: &str,
    x: f64,
    y: f64,
    font_size: f64,
    anchor: &str,
    transform: Option<String>,
) -> Result<()> {
    let mut element = BytesStart::new("text");
    element.push_attribute(("x", fmt(x).as_str()));
    element.push_attribute(("y", fmt(y).as_str()));
    element.push_attribute(("font-family", FONT_FAMILY));
    element.push_attribute(("font-size", fmt(font_size).as_str()));
    element.push_attribute(("fill", TEXT_COLOR));
    element.push_attribute(("text-anchor", anchor));
    if let Some(transform) = transform {
        element.push_attribute(("transform", transform.as_str()));
    }
    writer.write_event(Event::Start(element))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new("text")))?;
    Ok(())
}

fn fmt(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_step_scales_with_the_maximum() {
        assert_eq!(tick_step(0), 1);
        assert_eq!(tick_step(4), 1);
        assert_eq!(tick_step(7), 2);
        assert_eq!(tick_step(23), 5);
        assert_eq!(tick_step(462), 100);
    }
}
