//! Error type shared by every render stage.

use thiserror::Error;

/// Boxed error reported by a record source.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid geometry: {width}x{height}")]
    InvalidGeometry { width: u32, height: u32 },

    #[error("record source failed: {0}")]
    RecordSource(#[source] SourceError),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
