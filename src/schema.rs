//! Column-name constants for the projection dataset.
//! Single source of truth — the names are the data producer's localized
//! originals and must match the input file exactly (case-sensitive).

// ── Identifier columns (summed away during aggregation) ─────────────────────
pub const BRANCH: &str = "FILIAL";
pub const SKU: &str = "SKU";

// ── Week identifier ─────────────────────────────────────────────────────────
pub const WEEK: &str = "Semana";

// ── Metric columns ──────────────────────────────────────────────────────────
pub const SALES: &str = "Venda";
pub const TARGET: &str = "Alvo";
pub const REPLENISHMENT: &str = "Reposicao";
pub const STOCK: &str = "Estoque";

pub const METRICS: [&str; 4] = [SALES, TARGET, REPLENISHMENT, STOCK];

/// Subplot titles, in the same order as [`METRICS`].
pub const TITLES: [&str; 4] = ["Venda proj", "Alvo proj", "Reposição proj", "Estoque proj"];

// ── Chart axis labels ───────────────────────────────────────────────────────
pub const X_LABEL: &str = "Semana";
pub const Y_LABEL: &str = "Quantidade";
