//! Naming helpers for code generation
//!
//! Capitalization and pluralization used to derive entity name variants.
//! Pluralization checks a short table of irregular nouns and delegates
//! everything else to the inflector library.

use inflector::Inflector;

/// Irregular nouns the inflector library pluralizes incorrectly
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("human", "humans"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
    ("mouse", "mice"),
];

/// Template helpers for entity naming
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Uppercase the first character and lowercase the rest
    ///
    /// # Examples
    ///
    /// ```
    /// # use slim_scaffold_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::capitalize("book"), "Book");
    /// assert_eq!(TemplateHelpers::capitalize("bOOK"), "Book");
    /// ```
    #[must_use]
    pub fn capitalize(input: &str) -> String {
        let mut chars = input.chars();
        chars.next().map_or_else(String::new, |first| {
            first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect()
        })
    }

    /// Pluralize a word
    ///
    /// # Examples
    ///
    /// ```
    /// # use slim_scaffold_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("book"), "books");
    /// assert_eq!(TemplateHelpers::pluralize("category"), "categories");
    /// assert_eq!(TemplateHelpers::pluralize("person"), "people");
    /// ```
    ///
    /// Irregular nouns keep the capitalization of their first letter
    /// (`Person` becomes `People`).
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        let lowercase = input.to_lowercase();
        let irregular = IRREGULAR_PLURALS
            .iter()
            .find(|(singular, _)| *singular == lowercase);

        match irregular {
            Some((_, plural)) if input.starts_with(char::is_uppercase) => Self::capitalize(plural),
            Some((_, plural)) => (*plural).to_string(),
            None => input.to_plural(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(TemplateHelpers::capitalize("book"), "Book");
        assert_eq!(TemplateHelpers::capitalize("BOOK"), "Book");
        assert_eq!(TemplateHelpers::capitalize("b"), "B");
        assert_eq!(TemplateHelpers::capitalize(""), "");
    }

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(TemplateHelpers::capitalize("éLAN"), "Élan");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(TemplateHelpers::pluralize("book"), "books");
        assert_eq!(TemplateHelpers::pluralize("category"), "categories");
        assert_eq!(TemplateHelpers::pluralize("user"), "users");
    }

    #[test]
    fn test_pluralize_irregular() {
        assert_eq!(TemplateHelpers::pluralize("person"), "people");
        assert_eq!(TemplateHelpers::pluralize("mouse"), "mice");
        assert_eq!(TemplateHelpers::pluralize("child"), "children");
        assert_eq!(TemplateHelpers::pluralize("Person"), "People");
        assert_eq!(TemplateHelpers::pluralize("MOUSE"), "Mice");
    }
}
