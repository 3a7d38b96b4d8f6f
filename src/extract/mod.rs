//! Source extraction module
//!
//! This module turns Python source files into fixed-shape records:
//! - Delimiter-spanning text extraction (`delimited`)
//! - Module summary and function signature/docstring scanning (`python`)

pub mod delimited;
pub mod python;

pub use delimited::{extract_until, Extracted, Unterminated};
pub use python::{scan_file, scan_source};

use serde::{Deserialize, Serialize};

/// Documentation metadata for one scanned source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFileRecord {
    /// Path of the file, with forward slashes
    pub source_path: String,
    /// Summary comment, or the source path when the file has none
    pub summary: String,
    /// Functions in order of appearance
    pub functions: Vec<FunctionRecord>,
}

/// A top-level function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    /// Name plus parameter list, without the terminating colon
    pub signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,
}

impl SourceFileRecord {
    /// Number of functions that carry a docstring
    pub fn documented_count(&self) -> usize {
        self.functions
            .iter()
            .filter(|f| f.docstring.is_some())
            .count()
    }
}
