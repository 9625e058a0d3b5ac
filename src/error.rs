use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Loading error: {0}")]
    Loading(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("InvalidData: {0}")]
    InvalidData(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
