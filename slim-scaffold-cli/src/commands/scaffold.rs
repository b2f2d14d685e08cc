//! Scaffold command
//!
//! Generates the model, controller, repository interface, database repository
//! and routes of every entity given on the command line.
//!
//! # Example
//!
//! ```bash
//! slim-scaffold book category
//! ```
//!
//! Entities are processed one after another. An error stops the run; files
//! already written for earlier entities stay on disk.

use crate::scaffold::{emitter, ScaffoldGenerator};
use crate::templates::TemplateRegistry;
use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;

/// Scaffold one or more entities into a project directory
pub struct ScaffoldCommand {
    entities: Vec<String>,
    output_dir: PathBuf,
    templates_dir: Option<PathBuf>,
}

impl ScaffoldCommand {
    /// Create a scaffold command
    ///
    /// # Arguments
    ///
    /// * `entities` - Entity names (e.g., `["book", "category"]`)
    /// * `output_dir` - Project root the `app/` tree is written into
    /// * `templates_dir` - Optional directory with template overrides
    #[must_use]
    pub const fn new(
        entities: Vec<String>,
        output_dir: PathBuf,
        templates_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            entities,
            output_dir,
            templates_dir,
        }
    }

    /// Execute the scaffold command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The template override directory does not exist or an override
    ///   cannot be loaded
    /// - Template rendering fails
    /// - Directory creation or file writing fails
    pub fn execute(&self) -> Result<()> {
        let templates = match &self.templates_dir {
            Some(dir) => TemplateRegistry::with_overrides(dir).with_context(|| {
                format!("Failed to load templates from {}", dir.display())
            })?,
            None => TemplateRegistry::new()?,
        };

        for entity in &self.entities {
            self.scaffold_entity(entity, &templates)?;
        }

        Ok(())
    }

    fn scaffold_entity(&self, entity: &str, templates: &TemplateRegistry) -> Result<()> {
        let generator = ScaffoldGenerator::new(entity, templates);
        let name = &generator.entity().capitalized;

        println!(
            "\n{} {} {}",
            style("Scaffolding").cyan().bold(),
            style(name).green().bold(),
            style("...").cyan().bold()
        );

        let files = generator
            .generate()
            .with_context(|| format!("Failed to generate files for '{entity}'"))?;

        for file in &files {
            emitter::write_file(&self.output_dir, file)?;

            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(file.path.display()).dim(),
                style(&file.description).dim()
            );
        }

        tracing::info!(entity = %name, files = files.len(), "Entity scaffolded");
        println!(
            "{} All files generated for {}",
            style("✨").green().bold(),
            style(name).green().bold()
        );

        Ok(())
    }
}
