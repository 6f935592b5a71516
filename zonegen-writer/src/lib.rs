//! # zonegen-writer
//!
//! Hash-gated atomic writer and the generation pipeline.
//!
//! Call [`generate`] to load, render and write one generated source, or
//! [`diff_output`] to see what `generate` would change without writing.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use diff::{diff_output, FileDiff};
pub use error::GenerateError;
pub use pipeline::{generate, render_output};
pub use writer::WriteResult;
