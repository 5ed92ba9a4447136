use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent one generated file.
///
/// Rendering is separated from writing so callers can preview output
/// without touching disk. A render failure (e.g. a builder indentation
/// underflow) aborts the write before anything is persisted.
pub trait GeneratedFile {
    /// File path relative to the base directory.
    fn path(&self, base: &Path) -> PathBuf;

    /// Rules for writing this file.
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content.
    fn render(&self) -> Result<String>;

    /// Write the file to disk, creating parent directories as needed.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let rules = self.rules();

        if rules.overwrite == Overwrite::IfMissing && path.exists() {
            return Ok(WriteResult::Skipped);
        }

        let mut content = self.render()?;
        if let Some(header) = rules.header {
            content = format!("{header}\n\n{content}");
        }
        write_file(&path, &content)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written,
    /// File was skipped (already exists).
    Skipped,
}

/// A file with already-rendered content.
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules:
    /// always overwrite, no header).
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules.
    pub fn write(&self) -> Result<WriteResult> {
        if self.rules.overwrite == Overwrite::IfMissing && self.exists() {
            return Ok(WriteResult::Skipped);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// Rules that determine how a file is written.
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    pub fn always_overwrite() -> Self {
        Self::default()
    }

    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }

    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}

/// How to handle existing files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code).
    #[default]
    Always,
    /// Only create if the file doesn't exist.
    IfMissing,
}
