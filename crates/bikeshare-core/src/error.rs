use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::model::City;

#[derive(Debug, Error)]
pub enum BikeshareError {
    #[error("data file for {city} not found at {}", .path.display())]
    FileNotFound { city: City, path: PathBuf },

    #[error("missing '{column}' column in the dataset")]
    MissingColumn { column: &'static str },

    #[error("data row {line_index} invalid: {message}")]
    DataRow { line_index: usize, message: String },

    #[error("no trips available to summarize")]
    EmptyTable,

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
