//! Error types for zonegen-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while locating and decoding zone data.
#[derive(Debug, Error)]
pub enum ZoneError {
    /// Underlying I/O failure, annotated with the path being read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML decode error — includes file path and line context from serde_yaml.
    #[error("failed to parse zone yaml at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The input YAML file did not exist at the resolved path.
    #[error("can not find input yaml file {path}")]
    InputNotFound { path: PathBuf },

    /// A mapping key that has no string form (a sequence or mapping used as a key).
    #[error("unsupported zone dictionary key: {key}")]
    UnsupportedKey { key: String },

    /// The directory holding the generator executable could not be determined.
    #[error("cannot determine the generator base directory: {0}")]
    BaseDirNotFound(#[source] std::io::Error),
}

/// Convenience constructor for [`ZoneError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ZoneError {
    ZoneError::Io {
        path: path.into(),
        source,
    }
}
