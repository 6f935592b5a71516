//! Error types for zonegen-writer.

use std::path::PathBuf;

use thiserror::Error;

use zonegen_core::ZoneError;
use zonegen_renderer::RenderError;

/// All errors that can arise from a generator run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Input could not be located or decoded.
    #[error("zone input error: {0}")]
    Zone(#[from] ZoneError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`GenerateError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.into(),
        source,
    }
}
