//! Template context — the named binding a template sees.

use serde_json::Value as JsonValue;

use zonegen_core::ZoneDict;

use crate::engine::GeneratorKind;
use crate::error::RenderError;

/// Rendering payload: one dictionary under one binding name.
///
/// For [`GeneratorKind::ZoneInfo`] templates see `{ ZoneDict: <mapping> }`
/// and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateContext {
    binding: &'static str,
    value: JsonValue,
}

impl TemplateContext {
    /// Build the context for `kind` from a decoded zone dictionary.
    pub fn new(kind: GeneratorKind, dict: &ZoneDict) -> Result<Self, RenderError> {
        Ok(TemplateContext {
            binding: kind.binding(),
            value: dict.to_json()?,
        })
    }

    /// Name the dictionary is bound to inside the template.
    pub fn binding(&self) -> &'static str {
        self.binding
    }

    /// The dictionary in template-facing form.
    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> tera::Context {
        let mut ctx = tera::Context::new();
        ctx.insert(self.binding, &self.value);
        ctx
    }
}
