//! CLI interface using clap
//!
//! Provides the command-line interface for py2md

mod commands;

pub use commands::*;

use crate::config::{ErrorPolicy, GeneratorConfig, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// py2md - Markdown reference generator for Python modules
#[derive(Parser, Debug)]
#[command(name = "py2md")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source folder containing python files
    #[arg(short = 's', long = "sourcedir")]
    pub source_dir: PathBuf,

    /// Name of markdown file to write output to
    #[arg(short = 'o', long = "docfile")]
    pub doc_file: PathBuf,

    /// Project name (optional, otherwise sourcedir will be used)
    #[arg(short = 'n', long = "projectname")]
    pub project_name: Option<String>,

    /// Include links to source files
    #[arg(short = 'c', long = "codelinks")]
    pub code_links: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "markdown")]
    pub format: OutputFormat,

    /// What to do when a source file cannot be documented
    #[arg(long, value_enum, default_value = "abort")]
    pub on_error: ErrorPolicy,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build the run configuration from the parsed arguments
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(&self.source_dir, &self.doc_file);
        if let Some(ref name) = self.project_name {
            config = config.with_project_name(name);
        }
        config.code_links = self.code_links;
        config.format = self.format;
        config.on_error = self.on_error;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["py2md", "--sourcedir", "lib", "--docfile", "ref.md"]);

        assert_eq!(cli.source_dir, PathBuf::from("lib"));
        assert_eq!(cli.doc_file, PathBuf::from("ref.md"));
        assert!(cli.project_name.is_none());
        assert!(!cli.code_links);
        assert_eq!(cli.format, OutputFormat::Markdown);
        assert_eq!(cli.on_error, ErrorPolicy::Abort);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["py2md", "-s", "lib", "-o", "ref.md", "-n", "Lib", "-c"]);
        let config = cli.config();

        assert_eq!(config.project_name, "Lib");
        assert!(config.code_links);
    }

    #[test]
    fn test_project_name_defaults_to_sourcedir() {
        let cli = Cli::parse_from(["py2md", "-s", "src/pkg", "-o", "ref.md"]);
        assert_eq!(cli.config().project_name, "src/pkg");
    }

    #[test]
    fn test_extended_options() {
        let cli = Cli::parse_from([
            "py2md", "-s", "lib", "-o", "ref.json", "-f", "json", "--on-error", "skip", "-v",
        ]);

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.on_error, ErrorPolicy::Skip);
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_required_arguments() {
        assert!(Cli::try_parse_from(["py2md", "-s", "lib"]).is_err());
        assert!(Cli::try_parse_from(["py2md", "-o", "ref.md"]).is_err());
    }
}
