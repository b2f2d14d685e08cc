//! Writing generated files to disk
//!
//! Existing files are overwritten without a backup or prompt.

use super::generator::GeneratedFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write one generated file below `root`, creating parent directories
///
/// Returns the full path that was written.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_file(root: &Path, file: &GeneratedFile) -> Result<PathBuf> {
    let full_path = root.join(&file.path);

    // Create parent directories if they don't exist
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&full_path, &file.content)
        .with_context(|| format!("Failed to write file: {}", full_path.display()))?;

    tracing::debug!(path = %full_path.display(), bytes = file.content.len(), "Wrote file");
    Ok(full_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn file(path: &str, content: &str) -> GeneratedFile {
        GeneratedFile {
            path: PathBuf::from(path),
            content: content.to_string(),
            description: "test".to_string(),
        }
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp_dir = tempdir().unwrap();
        let written = write_file(temp_dir.path(), &file("app/Models/BookModel.php", "<?php")).unwrap();

        assert_eq!(written, temp_dir.path().join("app/Models/BookModel.php"));
        assert_eq!(fs::read_to_string(written).unwrap(), "<?php");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = tempdir().unwrap();
        write_file(temp_dir.path(), &file("app/Routes/bookRoutes.php", "old")).unwrap();
        let written = write_file(temp_dir.path(), &file("app/Routes/bookRoutes.php", "new")).unwrap();

        assert_eq!(fs::read_to_string(written).unwrap(), "new");
    }

    #[test]
    fn test_write_over_directory_fails() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("app/Models/BookModel.php")).unwrap();

        let result = write_file(temp_dir.path(), &file("app/Models/BookModel.php", "<?php"));
        assert!(result.is_err());
    }
}
