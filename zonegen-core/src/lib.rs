//! zone-gen core library — zone dictionary, YAML loading, configuration, errors.
//!
//! Public API surface:
//! - [`types`] — [`ZoneDict`] and its template-facing JSON form
//! - [`loader`] — decode a zone YAML file into a [`ZoneDict`]
//! - [`config`] — [`GenerateConfig`], the explicit path configuration
//! - [`error`] — [`ZoneError`]

pub mod config;
pub mod error;
pub mod loader;
pub mod types;

pub use config::GenerateConfig;
pub use error::ZoneError;
pub use types::ZoneDict;
