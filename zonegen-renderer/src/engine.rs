//! Tera rendering engine — [`GeneratorKind`] enum and [`TemplateEngine`].
//!
//! # Generators
//!
//! | Kind       | Template             | Binding    | Output             |
//! |------------|----------------------|------------|--------------------|
//! | `ZoneInfo` | `writezone.cpp.tera` | `ZoneDict` | `zoneinfo-gen.cpp` |
//!
//! Templates are read from a template directory at construction time and
//! never from the working directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::TemplateContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// GeneratorKind
// ---------------------------------------------------------------------------

/// All supported code generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// Zone table (`zoneDetailsConfig`) from the zone YAML.
    ZoneInfo,
}

impl GeneratorKind {
    /// File name of the template, looked up in the template directory.
    pub fn template_name(&self) -> &'static str {
        match self {
            GeneratorKind::ZoneInfo => "writezone.cpp.tera",
        }
    }

    /// Name the decoded dictionary is bound to inside the template.
    pub fn binding(&self) -> &'static str {
        match self {
            GeneratorKind::ZoneInfo => "ZoneDict",
        }
    }

    /// File name of the generated source.
    pub fn output_file_name(&self) -> &'static str {
        match self {
            GeneratorKind::ZoneInfo => "zoneinfo-gen.cpp",
        }
    }

    /// `<output_dir>/<output_file_name>` — pure, no I/O.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.output_file_name())
    }
}

// ---------------------------------------------------------------------------
// Template loading
// ---------------------------------------------------------------------------

fn load_template(path: &Path) -> Result<String, RenderError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(RenderError::TemplateNotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(RenderError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera engine holding the single template for one [`GeneratorKind`].
///
/// Template syntax errors surface from [`TemplateEngine::new`]; errors raised
/// while expanding (missing fields, bad filters) surface from `render`.
pub struct TemplateEngine {
    tera: Tera,
    kind: GeneratorKind,
}

impl TemplateEngine {
    /// Load `kind`'s template from `template_dir`.
    pub fn new(template_dir: &Path, kind: GeneratorKind) -> Result<Self, RenderError> {
        let path = template_dir.join(kind.template_name());
        let source = load_template(&path)?;
        tracing::debug!(template = %path.display(), "loaded template");
        Self::from_source(kind, &source)
    }

    /// Build an engine from template source text already in memory.
    pub fn from_source(kind: GeneratorKind, source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        // Generated C++ must never be HTML-escaped.
        tera.autoescape_on(vec![]);
        tera.add_raw_template(kind.template_name(), source)?;
        Ok(TemplateEngine { tera, kind })
    }

    /// Render the template to a string.
    pub fn render_to_string(&self, ctx: &TemplateContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context();
        Ok(self.tera.render(self.kind.template_name(), &tera_ctx)?)
    }

    /// Render the output file for `output_dir`.
    ///
    /// Returns `(output_path, rendered_content)`; nothing is written.
    pub fn render(
        &self,
        ctx: &TemplateContext,
        output_dir: &Path,
    ) -> Result<(PathBuf, String), RenderError> {
        let content = self.render_to_string(ctx)?;
        Ok((self.kind.output_path(output_dir), content))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
