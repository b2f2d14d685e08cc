//! Artifact types
//!
//! One entity produces one file per artifact. Each artifact knows its
//! template, its output location and which method table drives it.

use super::methods::{self, MethodTable};
use super::names::EntityName;
use crate::templates::{
    CONTROLLER_TEMPLATE, MODEL_TEMPLATE, REPOSITORY_INTERFACE_TEMPLATE, REPOSITORY_TEMPLATE,
    ROUTES_TEMPLATE,
};
use std::fmt;
use std::path::PathBuf;

/// Extension of every generated file
pub const FILE_EXTENSION: &str = "php";

/// Kind of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// `app/Models/{Cap}Model.php`
    Model,
    /// `app/Controllers/{Cap}Controller.php`
    Controller,
    /// `app/Repositories/{Cap}RepositoryInterface.php`
    RepositoryInterface,
    /// `app/Repositories/Db{Cap}Repository.php`
    Repository,
    /// `app/Routes/{low}Routes.php`
    Routes,
}

impl Artifact {
    /// All artifacts in generation order
    pub const ALL: [Self; 5] = [
        Self::Model,
        Self::Controller,
        Self::RepositoryInterface,
        Self::Repository,
        Self::Routes,
    ];

    /// Name under which the artifact's template is registered
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Model => "model.php.hbs",
            Self::Controller => "controller.php.hbs",
            Self::RepositoryInterface => "repository_interface.php.hbs",
            Self::Repository => "repository.php.hbs",
            Self::Routes => "routes.php.hbs",
        }
    }

    /// Built-in template source
    #[must_use]
    pub const fn builtin_template(self) -> &'static str {
        match self {
            Self::Model => MODEL_TEMPLATE,
            Self::Controller => CONTROLLER_TEMPLATE,
            Self::RepositoryInterface => REPOSITORY_INTERFACE_TEMPLATE,
            Self::Repository => REPOSITORY_TEMPLATE,
            Self::Routes => ROUTES_TEMPLATE,
        }
    }

    /// Output path relative to the project root
    #[must_use]
    pub fn output_path(self, name: &EntityName) -> PathBuf {
        let cap = &name.capitalized;
        let file = match self {
            Self::Model => format!("app/Models/{cap}Model"),
            Self::Controller => format!("app/Controllers/{cap}Controller"),
            Self::RepositoryInterface => format!("app/Repositories/{cap}RepositoryInterface"),
            Self::Repository => format!("app/Repositories/Db{cap}Repository"),
            Self::Routes => format!("app/Routes/{}Routes", name.lowercase),
        };
        PathBuf::from(format!("{file}.{FILE_EXTENSION}"))
    }

    /// Method table that drives the artifact's template
    #[must_use]
    pub fn methods(self, name: &EntityName) -> MethodTable {
        match self {
            Self::Model => methods::model_methods(name),
            Self::Controller => methods::controller_methods(name),
            Self::RepositoryInterface => methods::repository_interface_methods(name),
            Self::Repository => methods::repository_methods(name),
            Self::Routes => methods::routes_methods(name),
        }
    }

    /// Human-readable description for console feedback
    #[must_use]
    pub fn description(self, name: &EntityName) -> String {
        let cap = &name.capitalized;
        match self {
            Self::Model => format!("{cap} model"),
            Self::Controller => format!("{cap} controller"),
            Self::RepositoryInterface => format!("{cap} repository interface"),
            Self::Repository => format!("{cap} database repository"),
            Self::Routes => format!("routes for {}", name.lowercase_plural),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Model => "model",
            Self::Controller => "controller",
            Self::RepositoryInterface => "repository-interface",
            Self::Repository => "repository",
            Self::Routes => "routes",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        let name = EntityName::new("book");
        let paths: Vec<_> = Artifact::ALL
            .iter()
            .map(|a| a.output_path(&name))
            .collect();

        assert_eq!(
            paths,
            [
                PathBuf::from("app/Models/BookModel.php"),
                PathBuf::from("app/Controllers/BookController.php"),
                PathBuf::from("app/Repositories/BookRepositoryInterface.php"),
                PathBuf::from("app/Repositories/DbBookRepository.php"),
                PathBuf::from("app/Routes/bookRoutes.php"),
            ]
        );
    }

    #[test]
    fn test_interface_paired_with_interface_methods() {
        let name = EntityName::new("book");
        let interface = Artifact::RepositoryInterface.methods(&name);
        let repository = Artifact::Repository.methods(&name);

        assert!(interface.iter().all(|d| d.body.is_none()));
        assert!(repository.iter().all(|d| d.body.is_some()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Artifact::RepositoryInterface.to_string(), "repository-interface");
        assert_eq!(Artifact::Routes.to_string(), "routes");
    }
}
