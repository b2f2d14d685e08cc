//! Entity name variations
//!
//! Every generated file refers to its entity in one of four forms: lowercase
//! or capitalized, singular or plural. They are derived once per entity.

use super::helpers::TemplateHelpers;
use serde::Serialize;

/// The four name forms of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityName {
    /// Lowercase singular (e.g. `book`)
    pub lowercase: String,
    /// Capitalized singular (e.g. `Book`)
    pub capitalized: String,
    /// Lowercase plural (e.g. `books`)
    pub lowercase_plural: String,
    /// Capitalized plural (e.g. `Books`)
    pub capitalized_plural: String,
}

impl EntityName {
    /// Derive the name variations of a raw entity name
    ///
    /// No validation is performed; unusual input yields unusual names.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slim_scaffold_cli_lib::EntityName;
    /// let name = EntityName::new("category");
    /// assert_eq!(name.capitalized, "Category");
    /// assert_eq!(name.lowercase_plural, "categories");
    /// assert_eq!(name.capitalized_plural, "Categories");
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let lowercase = raw.to_lowercase();
        let capitalized = TemplateHelpers::capitalize(raw);
        let lowercase_plural = TemplateHelpers::pluralize(&lowercase);
        let capitalized_plural = TemplateHelpers::capitalize(&lowercase_plural);

        Self {
            lowercase,
            capitalized,
            lowercase_plural,
            capitalized_plural,
        }
    }
}
