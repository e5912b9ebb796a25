//! Defines the error type shared by every fallible operation of this crate.
use polars::prelude::PolarsError;
use thiserror::Error;

use std::io;
use std::time::Duration;


/// Result type returned by the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, TreeError>;


/// Unified error type for dataset loading and tree growth.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The data source does not contain a single row,
    /// so the number of features cannot be determined.
    #[error("Empty or malformed source: no row to read the schema from")]
    EmptySource,

    /// Reading a file failed.
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),

    /// Converting a `polars::DataFrame` failed.
    #[error("DataFrame conversion failed: {0}")]
    Polars(#[from] PolarsError),

    /// A row does not have as many cells as the header.
    #[error("Row {row} has {found} cells (expected: {expected})")]
    RaggedRow {
        /// 0-based index of the offending row.
        row: usize,
        /// Number of columns in the header.
        expected: usize,
        /// Number of cells in the row.
        found: usize,
    },

    /// A cell has no value.
    #[error("Missing value at column `{column}`, row {row}")]
    MissingValue {
        /// Name of the column.
        column: String,
        /// 0-based index of the row.
        row: usize,
    },

    /// The worker pool could not be constructed.
    #[error("Failed to build a worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    /// A submitted unit panicked or was dropped before producing a result.
    #[error("A submitted unit was abandoned before completing")]
    Abandoned,

    /// A bounded wait expired before the unit completed.
    #[error("A submitted unit did not complete within {0:?}")]
    Stalled(Duration),
}
