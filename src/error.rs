//! Error type shared by waveform synthesis, figure composition and export.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building or exporting one figure.
///
/// All variants are fatal to the figure being built. Callers decide whether to
/// abort the whole run or skip to the next figure.
#[derive(Debug, Error)]
pub enum FigureError {
    /// Malformed time range, negative frequency, or a non-finite parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operation addressed a hidden or out-of-range panel slot.
    #[error("layout error: {0}")]
    Layout(String),

    /// The export target could not be written.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Rasterization or PNG encoding failed.
    #[error("render error: {0}")]
    Render(String),

    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl FigureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FigureError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FigureError>;
