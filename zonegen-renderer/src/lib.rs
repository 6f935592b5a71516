//! # zonegen-renderer
//!
//! Tera-based template engine that renders generated C++ sources from a
//! decoded [`ZoneDict`](zonegen_core::ZoneDict).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use zonegen_core::ZoneDict;
//! use zonegen_renderer::{GeneratorKind, TemplateContext, TemplateEngine};
//!
//! fn render(template_dir: &Path, dict: &ZoneDict) {
//!     let kind = GeneratorKind::ZoneInfo;
//!     if let Ok(engine) = TemplateEngine::new(template_dir, kind) {
//!         if let Ok(ctx) = TemplateContext::new(kind, dict) {
//!             if let Ok((path, content)) = engine.render(&ctx, Path::new("out")) {
//!                 println!("{}: {} bytes", path.display(), content.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{GeneratorKind, TemplateEngine};
pub use error::RenderError;
