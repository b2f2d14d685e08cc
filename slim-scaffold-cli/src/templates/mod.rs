//! Template registry
//!
//! Holds the Handlebars templates used to render scaffold files. Templates are
//! registered once and rendered in strict mode, so a template referring to a
//! variable that the context does not provide fails instead of rendering an
//! empty string.

use anyhow::{ensure, Context, Result};
use handlebars::Handlebars;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::scaffold::Artifact;

pub mod files;
pub use files::*;

mod helpers {
    use handlebars::handlebars_helper;

    handlebars_helper!(lower: |s: str| s.to_lowercase());
}

/// Registry of scaffold templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Create a registry with the built-in templates
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars.register_helper("lower", Box::new(helpers::lower));

        let mut registry = Self { handlebars };
        for artifact in Artifact::ALL {
            registry.register(artifact.template_name(), artifact.builtin_template())?;
        }

        Ok(registry)
    }

    /// Create a registry whose templates may be overridden from a directory
    ///
    /// Any file in `dir` named after an artifact template (for example
    /// `model.php.hbs`) replaces the built-in template. Templates without a
    /// file in `dir` fall back to the built-ins.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is not a directory, or if an override cannot
    /// be read or fails to parse.
    pub fn with_overrides(dir: &Path) -> Result<Self> {
        ensure!(dir.is_dir(), "Template directory not found: {}", dir.display());

        let mut registry = Self::new()?;

        for artifact in Artifact::ALL {
            let path = dir.join(artifact.template_name());
            if !path.is_file() {
                continue;
            }

            let source = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?;
            registry.register(artifact.template_name(), &source)?;
            tracing::debug!(template = artifact.template_name(), path = %path.display(), "Template overridden");
        }

        Ok(registry)
    }

    /// Register (or replace) a named template
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to parse.
    pub fn register(&mut self, name: &str, source: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, source)
            .with_context(|| format!("Failed to parse template: {name}"))
    }

    /// Whether a template with this name is registered
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a registered template
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or refers to a variable
    /// missing from `data`.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .with_context(|| format!("Failed to render template: {name}"))
    }

    /// Render an ad-hoc template string with the registry's settings
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to parse or refers to a
    /// variable missing from `data`.
    pub fn render_template<T: Serialize>(&self, source: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(source, data)
            .context("Failed to render inline template")
    }
}
