//! Weekly projection charts: load a sales-projection dataset, aggregate the
//! metric columns by week and render a 2x2 grid of line charts to a PNG.

use std::path::{Path, PathBuf};

pub mod aggregation;
pub mod chart;
pub mod error;
pub mod loader;
pub mod schema;

pub use chart::ChartConfig;
pub use error::ProjectionError;

/// Run the full pipeline: load → aggregate by week → render → write.
///
/// Returns the absolute path of the written image. Nothing is written when
/// loading or validation fails.
pub fn plot_projections(
    input: &Path,
    output: &Path,
    config: &ChartConfig,
) -> Result<PathBuf, ProjectionError> {
    let df = loader::load_dataset(input)?;
    tracing::info!(rows = df.height(), path = %input.display(), "dataset loaded");

    let weekly = aggregation::aggregate_weekly(&df)?;
    tracing::info!(weeks = weekly.height(), "aggregated by week");

    chart::render_weekly_charts(&weekly, output, config)?;

    Ok(std::path::absolute(output)?)
}

// ── Tests ───────────────────────────────────────────────────────────────────
