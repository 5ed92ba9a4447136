//! Application description: the naming and placement context threaded
//! through every generator. It carries no behavior of its own.

use std::path::{Path, PathBuf};

/// Naming and placement context for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDescription {
    /// Base name every generated type and file derives from, e.g. `Widget`.
    pub base_name: String,
    /// Root directory generated files are written under.
    pub base_file_path: PathBuf,
    /// Human-readable description, used in generated documentation comments.
    pub description: String,
    /// Suffix appended to the package/target name, e.g. `Client`.
    pub application_suffix: String,
}

impl ApplicationDescription {
    pub fn new(base_name: impl Into<String>, base_file_path: impl Into<PathBuf>) -> Self {
        Self {
            base_name: base_name.into(),
            base_file_path: base_file_path.into(),
            description: String::new(),
            application_suffix: "Client".to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.application_suffix = suffix.into();
        self
    }

    pub fn base_file_path(&self) -> &Path {
        &self.base_file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let app = ApplicationDescription::new("Widget", "/tmp/out");
        assert_eq!(app.base_name, "Widget");
        assert_eq!(app.application_suffix, "Client");
        assert!(app.description.is_empty());
    }
}
