//! Chart rendering: a fixed 2x2 grid of weekly line charts.
//!
//! Extracts point series from the aggregated weekly DataFrame and draws one
//! subplot per metric (markers at each week, straight lines between points),
//! all subplots sharing the same week axis. Output is a single PNG.

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use polars::prelude::*;

use crate::error::ProjectionError;
use crate::schema;

// ── Config ──────────────────────────────────────────────────────────────────

/// Pixel dimensions of the rendered grid.
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

// ── Intermediate data structures ────────────────────────────────────────────

struct MetricSeries {
    title: &'static str,
    points: Vec<(i64, f64)>,
}

// ── Data extraction ─────────────────────────────────────────────────────────

fn extract_series(weekly: &DataFrame) -> Result<Vec<MetricSeries>, ProjectionError> {
    let week_col = weekly.column(schema::WEEK)?.cast(&DataType::Int64)?;
    let weeks = week_col.as_materialized_series().i64()?;

    let mut series = Vec::with_capacity(schema::METRICS.len());
    for (metric, title) in schema::METRICS.into_iter().zip(schema::TITLES) {
        let value_col = weekly.column(metric)?.cast(&DataType::Float64)?;
        let values = value_col.as_materialized_series().f64()?;

        let mut points = Vec::with_capacity(weekly.height());
        for i in 0..weekly.height() {
            // Null weeks cannot be placed on the axis; skip them.
            let Some(week) = weeks.get(i) else { continue };
            points.push((week, values.get(i).unwrap_or(0.0)));
        }
        series.push(MetricSeries { title, points });
    }
    Ok(series)
}

/// Week range shared by all four subplots. Degenerate ranges (a single week,
/// or no data at all) are padded so the axis can still be built.
fn shared_x_range(series: &[MetricSeries]) -> Range<i64> {
    let weeks = series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
    let min = weeks.clone().min().unwrap_or(0);
    let max = weeks.max().unwrap_or(1);
    if min == max {
        min - 1..max + 1
    } else {
        min..max
    }
}

fn y_range(points: &[(i64, f64)]) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(_, v) in points {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad)..(max + pad)
}

// ── Rendering ───────────────────────────────────────────────────────────────

/// Render the aggregated weekly table as a 2x2 grid of line charts.
///
/// Creates any missing parent directories of `output`, then writes (or
/// overwrites) the PNG. The drawing area is presented before returning so the
/// file is fully flushed on the success path.
pub fn render_weekly_charts(
    weekly: &DataFrame,
    output: &Path,
    config: &ChartConfig,
) -> Result<(), ProjectionError> {
    let series = extract_series(weekly)?;
    let x_range = shared_x_range(&series);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ProjectionError::Write(format!("{}: {}", parent.display(), e)))?;
        }
    }

    let root = BitMapBackend::new(output, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(write_err)?;

    let areas = root.split_evenly((2, 2));
    for (area, metric) in areas.iter().zip(&series) {
        let mut chart = ChartBuilder::on(area)
            .caption(metric.title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(55)
            .build_cartesian_2d(x_range.clone(), y_range(&metric.points))
            .map_err(write_err)?;

        chart
            .configure_mesh()
            .x_desc(schema::X_LABEL)
            .y_desc(schema::Y_LABEL)
            .draw()
            .map_err(write_err)?;

        chart
            .draw_series(LineSeries::new(metric.points.iter().copied(), &BLUE))
            .map_err(write_err)?;
        chart
            .draw_series(
                metric
                    .points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
            )
            .map_err(write_err)?;
    }

    root.present().map_err(write_err)?;
    tracing::info!(path = %output.display(), "chart grid written");
    Ok(())
}

fn write_err<E: std::fmt::Display>(e: E) -> ProjectionError {
    ProjectionError::Write(e.to_string())
}

// ── Tests ───────────────────────────────────────────────────────────────────
