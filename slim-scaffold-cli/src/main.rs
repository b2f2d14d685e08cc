//! slim-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use slim_scaffold_cli_lib::{logging, ScaffoldCommand};
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Generates a basic directory and code file structure to kickstart the
development of a Slim API, following the repository pattern in conjunction
with MVC design principles.

For every entity the following files are written (existing files are
overwritten):

  app/Models/{Entity}Model.php
  app/Controllers/{Entity}Controller.php
  app/Repositories/{Entity}RepositoryInterface.php
  app/Repositories/Db{Entity}Repository.php
  app/Routes/{entity}Routes.php";

#[derive(Parser)]
#[command(name = "slim-scaffold")]
#[command(version)]
#[command(about = "Scaffold Slim API entities", long_about = LONG_ABOUT)]
struct Cli {
    /// One or more English entity names, separated by spaces
    #[arg(required = true, value_name = "ENTITIES")]
    entities: Vec<String>,

    /// Project root to write the `app/` tree into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Directory with template overrides (e.g. `model.php.hbs`)
    #[arg(short, long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let cmd = ScaffoldCommand::new(cli.entities, cli.output_dir, cli.templates);
    cmd.execute()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_multiple_entities() {
        let cli = Cli::try_parse_from(["slim-scaffold", "book", "category"]).unwrap();
        assert_eq!(cli.entities, ["book", "category"]);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(cli.templates.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_requires_an_entity() {
        assert!(Cli::try_parse_from(["slim-scaffold"]).is_err());
    }
}
