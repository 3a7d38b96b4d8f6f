//! Python source scanning
//!
//! Extracts from a Python module:
//! - The summary line of the leading module docstring
//! - Every top-level `def`, with its full signature
//! - The docstring immediately following each signature
//!
//! This is line-oriented text scanning, not a Python parser. Nested
//! definitions, decorators and class methods are not recognized.

use super::delimited::{extract_until, Unterminated};
use super::{FunctionRecord, SourceFileRecord};
use crate::error::{Construct, Error, Result};
use std::path::Path;

/// Keyword that opens a top-level function definition
const DEF_KEYWORD: &str = "def ";

/// Terminator of a function signature
const SIGNATURE_END: &str = ":";

/// Recognized docstring quotes; a docstring closes with the quote it opened with
const DOCSTRING_QUOTES: [&str; 2] = ["'''", "\"\"\""];

/// Read and scan a Python source file
pub fn scan_file(path: &Path) -> Result<SourceFileRecord> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let source_path = path.to_string_lossy().replace('\\', "/");
    let record = scan_source(&source_path, &content)?;

    tracing::debug!(
        "Scanned {}: {} function(s), {} documented",
        record.source_path,
        record.functions.len(),
        record.documented_count()
    );

    Ok(record)
}

/// Scan already-loaded source text.
///
/// `source_path` labels the record and is the summary fallback.
pub fn scan_source(source_path: &str, content: &str) -> Result<SourceFileRecord> {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let scanner = Scanner {
        source_path,
        lines: &lines,
    };

    Ok(SourceFileRecord {
        source_path: source_path.to_string(),
        summary: scanner.summary()?,
        functions: scanner.functions()?,
    })
}

struct Scanner<'a> {
    source_path: &'a str,
    lines: &'a [&'a str],
}

impl Scanner<'_> {
    /// Summary from a module docstring on the first line, else the path
    fn summary(&self) -> Result<String> {
        let Some(first) = self.lines.first() else {
            return Ok(self.source_path.to_string());
        };

        let Some((quote, rest)) = strip_quote(first) else {
            return Ok(self.source_path.to_string());
        };

        let inline = rest.split(quote).next().unwrap_or_default().trim();
        if !inline.is_empty() {
            return Ok(inline.to_string());
        }

        // Opener on a line of its own: take the first line of the body
        let body = extract_until(quote, rest, self.lines, 0)
            .map_err(|e| self.malformed(Construct::ModuleSummary, e))?;

        Ok(body
            .text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.source_path.to_string()))
    }

    /// All top-level functions, in order of appearance
    fn functions(&self) -> Result<Vec<FunctionRecord>> {
        let mut functions = Vec::new();
        let mut cursor = 0;

        while cursor < self.lines.len() {
            let Some(definition) = self.lines[cursor].strip_prefix(DEF_KEYWORD) else {
                cursor += 1;
                continue;
            };

            let name = definition
                .split(['(', ':'])
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();

            let signature = extract_until(SIGNATURE_END, definition, self.lines, cursor)
                .map_err(|e| self.malformed(Construct::Signature, e))?;
            cursor = signature.end_line + 1;

            let mut docstring = None;
            if let Some((quote, rest)) = self.lines.get(cursor).and_then(|l| docstring_opener(l)) {
                let body = extract_until(quote, rest, self.lines, cursor)
                    .map_err(|e| self.malformed(Construct::Docstring, e))?;
                cursor = body.end_line + 1;
                docstring = Some(body.text.trim_end().to_string());
            }

            tracing::trace!("{}: found function {}", self.source_path, name);

            functions.push(FunctionRecord {
                name,
                signature: signature.text,
                docstring,
            });
        }

        Ok(functions)
    }

    fn malformed(&self, construct: Construct, err: Unterminated) -> Error {
        Error::MalformedSource {
            path: self.source_path.to_string(),
            construct,
            line: err.start_line + 1,
            marker: err.marker,
        }
    }
}

/// Split a leading triple quote off `text`
fn strip_quote(text: &str) -> Option<(&'static str, &str)> {
    DOCSTRING_QUOTES
        .iter()
        .find_map(|quote| text.strip_prefix(quote).map(|rest| (*quote, rest)))
}

/// An indented line opening a docstring
fn docstring_opener(line: &str) -> Option<(&'static str, &str)> {
    let trimmed = line.trim_start();
    if trimmed.len() == line.len() {
        return None;
    }
    strip_quote(trimmed)
}
