//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::{split_requirements, Requirement};

/// Reads requirement files, one requirement per line
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read the requirements listed in a file
    pub fn read_requirements(path: &Path) -> Result<Vec<Requirement>> {
        let content = Self::read_text(path)?;
        Ok(split_requirements(&path.display().to_string(), &content))
    }

    /// Read the requirements piped on standard input
    pub fn read_stdin() -> Result<Vec<Requirement>> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(split_requirements("stdin", &content))
    }
}
