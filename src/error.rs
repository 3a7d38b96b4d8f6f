//! Error types for the documentation pipeline

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while scanning sources and producing the reference document
#[derive(Debug, Error)]
pub enum Error {
    /// The source directory could not be listed
    #[error("failed to read source directory {}", .path.display())]
    SourceDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source path exists but is not a directory
    #[error("source path {} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// A source file could not be opened or decoded
    #[error("failed to read source file {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A signature or docstring runs off the end of the file
    #[error("malformed source {path}: {construct} starting at line {line} is never closed by `{marker}`")]
    MalformedSource {
        path: String,
        construct: Construct,
        line: usize,
        marker: String,
    },

    /// The output document could not be written
    #[error("failed to write output file {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document model could not be serialized
    #[error("failed to serialize document")]
    Serialize(#[from] serde_json::Error),
}

/// The delimited construct that was being extracted when input ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    ModuleSummary,
    Signature,
    Docstring,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::ModuleSummary => write!(f, "module docstring"),
            Construct::Signature => write!(f, "function signature"),
            Construct::Docstring => write!(f, "docstring"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_source_message() {
        let err = Error::MalformedSource {
            path: "pkg/util.py".to_string(),
            construct: Construct::Docstring,
            line: 12,
            marker: "'''".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "malformed source pkg/util.py: docstring starting at line 12 is never closed by `'''`"
        );
    }
}
