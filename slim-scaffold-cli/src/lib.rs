//! slim-scaffold library
//!
//! Generates the boilerplate of a Slim API resource (model, controller,
//! repository interface, database repository and routes) from an entity name.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod logging;
pub mod scaffold;
pub mod templates;

pub use commands::ScaffoldCommand;
pub use scaffold::{Artifact, EntityName, GeneratedFile, ScaffoldGenerator, TemplateHelpers};
pub use templates::TemplateRegistry;
