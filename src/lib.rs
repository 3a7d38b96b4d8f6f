//! py2md - Markdown reference generator for Python modules
//!
//! This library scans a directory of Python sources, extracts each module's
//! summary docstring and every top-level function's signature and docstring,
//! and renders them into a single reference document.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod render;
pub mod source_dir;

/// Re-export commonly used types
pub use config::{ErrorPolicy, GeneratorConfig, OutputFormat};
pub use error::{Error, Result};
pub use extract::{FunctionRecord, SourceFileRecord};
pub use render::{DocumentModel, Renderer};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "py2md";
