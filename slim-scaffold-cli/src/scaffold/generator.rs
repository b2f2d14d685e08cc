//! Scaffold generator orchestrator
//!
//! This module coordinates the generation of all files for one entity:
//! - Model
//! - Controller
//! - Repository interface
//! - Database repository
//! - Routes

use super::artifact::Artifact;
use super::methods::MethodTable;
use super::names::EntityName;
use crate::templates::TemplateRegistry;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Scaffold generator for a single entity
pub struct ScaffoldGenerator<'a> {
    /// Name variations of the entity
    entity: EntityName,
    /// Template registry
    templates: &'a TemplateRegistry,
}

impl<'a> ScaffoldGenerator<'a> {
    /// Create a new scaffold generator
    ///
    /// # Arguments
    ///
    /// * `entity` - Raw entity name (e.g., "book")
    /// * `templates` - Registry holding the artifact templates
    #[must_use]
    pub fn new(entity: &str, templates: &'a TemplateRegistry) -> Self {
        Self {
            entity: EntityName::new(entity),
            templates,
        }
    }

    /// Name variations of the entity being generated
    #[must_use]
    pub const fn entity(&self) -> &EntityName {
        &self.entity
    }

    /// Generate all files for the entity
    ///
    /// Files are returned in the order of [`Artifact::ALL`].
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails for any file
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> {
        Artifact::ALL
            .into_iter()
            .map(|artifact| self.generate_artifact(artifact))
            .collect()
    }

    /// Generate the file of a single artifact
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact's template fails to render
    pub fn generate_artifact(&self, artifact: Artifact) -> Result<GeneratedFile> {
        let methods = artifact.methods(&self.entity);
        let context = self.template_context(&methods);

        let content = self
            .templates
            .render(artifact.template_name(), &context)
            .with_context(|| {
                format!(
                    "Failed to generate {artifact} for '{}'",
                    self.entity.capitalized
                )
            })?;

        let path = artifact.output_path(&self.entity);
        tracing::debug!(%artifact, path = %path.display(), methods = methods.len(), "Rendered artifact");

        Ok(GeneratedFile {
            path,
            content,
            description: artifact.description(&self.entity),
        })
    }

    /// Template variables shared by every artifact
    fn template_context(&self, methods: &MethodTable) -> serde_json::Value {
        let cap = &self.entity.capitalized;

        serde_json::json!({
            "entity_name": cap,
            "entities_name": self.entity.capitalized_plural,
            "model_class": format!("App\\Models\\{cap}Model"),
            "interface_class": format!("App\\Repositories\\{cap}RepositoryInterface"),
            "controller_class": format!("App\\Controllers\\{cap}Controller"),
            "methods": methods,
        })
    }
}

/// Represents a generated file
#[derive(Debug)]
pub struct GeneratedFile {
    /// Relative path from project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TemplateRegistry {
        TemplateRegistry::new().unwrap()
    }

    /// Positions of each method declaration, asserting they appear in order
    fn assert_methods_in_order(content: &str, names: &[&str]) {
        let mut last = 0;
        for name in names {
            let needle = format!("public function {name}(");
            let offset = content[last..]
                .find(&needle)
                .unwrap_or_else(|| panic!("{name} missing or out of order"));
            last += offset + needle.len();
        }
    }

    #[test]
    fn test_generate_all_artifacts() {
        let templates = registry();
        let generator = ScaffoldGenerator::new("book", &templates);

        let files = generator.generate().unwrap();
        assert_eq!(files.len(), 5);
        assert!(files[0].path.to_string_lossy().ends_with("BookModel.php"));
        assert!(files[4].path.to_string_lossy().ends_with("bookRoutes.php"));
    }

    #[test]
    fn test_generate_model() {
        let templates = registry();
        let generator = ScaffoldGenerator::new("book", &templates);

        let generated = generator.generate_artifact(Artifact::Model).unwrap();
        assert!(generated.content.contains("class BookModel"));
        assert!(generated.content.contains("public function getBookById(int $id)"));
        assert!(generated
            .content
            .contains("public function updateBook(int $id, array $data)"));
        assert!(generated.content.contains("// Logic for retrieve all books."));
        assert_methods_in_order(
            &generated.content,
            &["getBooks", "getBookById", "addBook", "updateBook", "deleteBook"],
        );
        assert_eq!(generated.content.matches("public function ").count(), 5);
    }

    #[test]
    fn test_generate_controller() {
        let templates = registry();
        let generator = ScaffoldGenerator::new("book", &templates);

        let generated = generator.generate_artifact(Artifact::Controller).unwrap();
        let content = &generated.content;
        assert!(content.contains("use App\\Repositories\\BookRepositoryInterface;"));
        assert!(content.contains("class BookController"));
        assert!(content.contains("protected $bookRepository;"));
        assert!(content.contains(
            "public function getBookById(Request $request, Response $response, array $args)"
        ));
        assert!(content.contains("$books = $this->bookRepository->getAll();"));
        assert_methods_in_order(
            content,
            &["getAllBooks", "getBookById", "createBook", "updateBook", "deleteBook"],
        );
    }

    #[test]
    fn test_generate_repository_pair() {
        let templates = registry();
        let generator = ScaffoldGenerator::new("book", &templates);

        let interface = generator
            .generate_artifact(Artifact::RepositoryInterface)
            .unwrap();
        assert_eq!(
            interface.path,
            PathBuf::from("app/Repositories/BookRepositoryInterface.php")
        );
        assert!(interface.content.contains("interface BookRepositoryInterface"));
        assert!(interface.content.contains("public function getAll();"));
        assert!(interface.content.contains("public function create(array $data);"));

        let repository = generator.generate_artifact(Artifact::Repository).unwrap();
        assert_eq!(
            repository.path,
            PathBuf::from("app/Repositories/DbBookRepository.php")
        );
        assert!(repository.content.contains("use App\\Models\\BookModel;"));
        assert!(repository
            .content
            .contains("class DbBookRepository implements BookRepositoryInterface"));
        assert!(repository
            .content
            .contains("return $this->bookModel->deleteBook($id);"));
    }

    #[test]
    fn test_generate_routes() {
        let templates = registry();
        let generator = ScaffoldGenerator::new("book", &templates);

        let generated = generator.generate_artifact(Artifact::Routes).unwrap();
        let content = &generated.content;
        assert!(content.contains("$app->group('/api/books'"));
        assert!(content.contains("$group->get('', BookController::class . ':getAllBooks');"));
        assert!(content.contains("$group->put('/{id}', BookController::class . ':updateBook');"));
        assert!(content.contains("@method DELETE"));
        assert!(content.contains("@endpoint /api/books/{id}"));
    }

    #[test]
    fn test_category_plural_everywhere() {
        let templates = registry();
        let generator = ScaffoldGenerator::new("category", &templates);

        for file in generator.generate().unwrap() {
            assert!(
                !file.content.contains("categorys") && !file.content.contains("Categorys"),
                "naive plural in {}",
                file.path.display()
            );
        }

        let routes = generator.generate_artifact(Artifact::Routes).unwrap();
        assert!(routes.content.contains("/api/categories"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let templates = registry();
        let first = ScaffoldGenerator::new("book", &templates).generate().unwrap();
        let second = ScaffoldGenerator::new("book", &templates).generate().unwrap();

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.path, b.path);
            assert_eq!(a.content, b.content);
        }
    }

    #[test]
    fn test_broken_override_fails_generation() {
        let mut templates = registry();
        templates
            .register("model.php.hbs", "{{entity_name}} {{table_name}}")
            .unwrap();

        let generator = ScaffoldGenerator::new("book", &templates);
        assert!(generator.generate().is_err());
    }
}
