//! Run configuration for a documentation build

use std::path::PathBuf;

/// Output format of the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// What to do when a single source file cannot be documented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ErrorPolicy {
    /// Stop the run; no output is written
    #[default]
    Abort,
    /// Report the file and leave it out of the document
    Skip,
}

/// Settings for one documentation build
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory scanned for Python sources
    pub source_dir: PathBuf,
    /// Destination of the generated document
    pub doc_file: PathBuf,
    /// Title prefix for the document
    pub project_name: String,
    /// Emit a link to each source file
    pub code_links: bool,
    pub format: OutputFormat,
    pub on_error: ErrorPolicy,
}

impl GeneratorConfig {
    /// Create a configuration with default options.
    ///
    /// The project name defaults to the source directory as given.
    pub fn new(source_dir: impl Into<PathBuf>, doc_file: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let project_name = source_dir.to_string_lossy().to_string();

        Self {
            source_dir,
            doc_file: doc_file.into(),
            project_name,
            code_links: false,
            format: OutputFormat::default(),
            on_error: ErrorPolicy::default(),
        }
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::new("lib/pkg", "docs/ref.md");

        assert_eq!(config.project_name, "lib/pkg");
        assert!(!config.code_links);
        assert_eq!(config.format, OutputFormat::Markdown);
        assert_eq!(config.on_error, ErrorPolicy::Abort);
    }

    #[test]
    fn test_project_name_override() {
        let config = GeneratorConfig::new("lib/pkg", "ref.md").with_project_name("Pkg");
        assert_eq!(config.project_name, "Pkg");
    }
}
