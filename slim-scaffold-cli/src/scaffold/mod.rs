//! Scaffold generator implementation
//!
//! Turns an entity name into the PHP sources of a Slim CRUD resource:
//! name variations feed the method tables, the tables feed the templates and
//! the rendered files are written below the project root.

pub mod artifact;
pub mod emitter;
pub mod generator;
pub mod helpers;
pub mod methods;
pub mod names;

pub use artifact::Artifact;
pub use generator::{GeneratedFile, ScaffoldGenerator};
pub use helpers::TemplateHelpers;
pub use methods::{HttpMethod, MethodDescriptor, MethodTable, Param, Route};
pub use names::EntityName;
