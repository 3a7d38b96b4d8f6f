//! Command implementations

use crate::config::{ErrorPolicy, GeneratorConfig};
use crate::error::Error;
use crate::extract::{scan_file, SourceFileRecord};
use crate::render::{create_renderer, DocumentModel};
use crate::source_dir::{Selection, SourceDir};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Outcome of a documentation build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub documented: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Files left out because they could not be scanned (skip policy only)
    pub failed: Vec<PathBuf>,
}

/// Scan the source directory and write the reference document
pub fn generate(config: &GeneratorConfig) -> Result<GenerateReport> {
    let source_dir = SourceDir::open(&config.source_dir)?;
    let files = source_dir.list_files()?;

    tracing::debug!(
        "Found {} source file(s) in {}",
        files.len(),
        source_dir.root().display()
    );

    let mut records: Vec<SourceFileRecord> = Vec::new();
    let mut report = GenerateReport {
        output: config.doc_file.clone(),
        documented: Vec::new(),
        skipped: Vec::new(),
        failed: Vec::new(),
    };

    for file in files {
        if file.selection == Selection::Skip {
            println!("Skipping: {}", file.path.display());
            report.skipped.push(file.path);
            continue;
        }

        println!("Processing file: {}", file.path.display());
        match scan_file(&file.path) {
            Ok(record) => {
                records.push(record);
                report.documented.push(file.path);
            }
            Err(e) if config.on_error == ErrorPolicy::Skip && is_per_file(&e) => {
                eprintln!("Warning: Skipping {}: {}", file.path.display(), error_chain(&e));
                report.failed.push(file.path);
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to document {}", file.path.display())
                });
            }
        }
    }

    let doc = DocumentModel::new(&config.project_name, records);
    tracing::debug!(
        "Rendering {} file(s), {} function(s)",
        doc.files.len(),
        doc.function_count()
    );

    let renderer = create_renderer(config.format, config.code_links);
    let output = renderer.render(&doc)?;

    println!("Writing file: {}", config.doc_file.display());
    std::fs::write(&config.doc_file, output).map_err(|source| Error::OutputWrite {
        path: config.doc_file.clone(),
        source,
    })?;

    Ok(report)
}

/// Errors confined to a single source file
fn is_per_file(err: &Error) -> bool {
    matches!(err, Error::FileRead { .. } | Error::MalformedSource { .. })
}

/// Render an error with its sources, `a: b: c`
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    message
}
