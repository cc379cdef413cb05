/// Data layer: core types, loading, and the load error.
///
/// Architecture:
/// ```text
///  bin.csv / left_channel.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table | Samples
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ Table/Samples │  named f64 columns, or one flat f64 sequence
///   └──────────────┘
/// ```

pub mod loader;
pub mod model;

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// LoadError – the only failure the viewers know about
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    NotNumeric {
        row: usize,
        column: String,
        value: String,
    },
    #[error("expected a single row or a single column, got {rows} rows with up to {columns} values")]
    Shape { rows: usize, columns: usize },
    #[error("no data to plot")]
    Empty,
}
