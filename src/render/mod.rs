//! Document rendering
//!
//! Turns the aggregated per-file records into the final reference document.

pub mod json;
pub mod markdown;
pub mod toc;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::extract::SourceFileRecord;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Suffix appended to the project name to form the document title
pub const TITLE_SUFFIX: &str = "Technical Reference Guide";

/// Everything needed to render one reference document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentModel {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub files: Vec<SourceFileRecord>,
}

impl DocumentModel {
    /// Create a model titled after `project_name`, stamped with the current time
    pub fn new(project_name: &str, files: Vec<SourceFileRecord>) -> Self {
        Self {
            title: format!("{} {}", project_name, TITLE_SUFFIX),
            generated_at: Local::now(),
            files,
        }
    }

    /// Total number of functions across all files
    pub fn function_count(&self) -> usize {
        self.files.iter().map(|f| f.functions.len()).sum()
    }
}

/// Renders a DocumentModel into a specific output format
pub trait Renderer {
    fn render(&self, doc: &DocumentModel) -> Result<String>;
}

/// Create a renderer for the given output format
pub fn create_renderer(format: OutputFormat, code_links: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownRenderer { code_links }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::FunctionRecord;

    #[test]
    fn test_model_title_and_counts() {
        let files = vec![SourceFileRecord {
            source_path: "src/a.py".to_string(),
            summary: "A".to_string(),
            functions: vec![FunctionRecord {
                name: "f".to_string(),
                signature: "f()".to_string(),
                docstring: None,
            }],
        }];
        let doc = DocumentModel::new("myproj", files);

        assert_eq!(doc.title, "myproj Technical Reference Guide");
        assert_eq!(doc.function_count(), 1);
    }
}
