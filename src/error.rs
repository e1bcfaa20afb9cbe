use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while loading the catalog tables.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Unsupported table format: {0} (expected .csv or .parquet)")]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
