//! Error types for zonegen-renderer.

use std::path::PathBuf;

use thiserror::Error;

use zonegen_core::ZoneError;

/// All errors that can arise from template loading and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (template syntax or render-time failure).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// The zone dictionary could not be turned into a template context.
    #[error("context error: {0}")]
    Context(#[from] ZoneError),

    /// The template file does not exist in the template directory.
    #[error("template not found at {path}")]
    TemplateNotFound { path: PathBuf },

    /// Filesystem error while loading the template.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
