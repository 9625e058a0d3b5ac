use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use projection_plot::{plot_projections, ChartConfig};

#[derive(Debug, Parser)]
#[command(name = "projection-plot", version)]
#[command(
    about = "Aggregates a weekly projection dataset and renders sales, target, \
             replenishment and stock line charts to a single PNG"
)]
struct Args {
    /// CSV or XLSX file containing the FILIAL, SKU, Semana, Venda, Alvo,
    /// Reposicao and Estoque columns
    input_file: PathBuf,

    /// Output PNG path
    #[arg(long, default_value = "outputs/projecoes.png")]
    output: PathBuf,
}

/// Initialise the global `tracing` subscriber.
/// `RUST_LOG` overrides the default `info` filter.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() -> Result<()> {
    setup_logging();
    let args = Args::parse();

    tracing::info!("projection-plot v{} starting", env!("CARGO_PKG_VERSION"));

    let resolved = plot_projections(&args.input_file, &args.output, &ChartConfig::default())?;
    println!("Chart saved to: {}", resolved.display());
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────
