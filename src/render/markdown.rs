//! Markdown renderer.

use super::{toc, DocumentModel, Renderer};
use crate::error::Result;
use crate::extract::{FunctionRecord, SourceFileRecord};

/// Timestamp format of the "Generated by" line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct MarkdownRenderer {
    /// Emit a `[source file](...)` link under each file heading
    pub code_links: bool,
}

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &DocumentModel) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# {}\n", doc.title));
        output.push_str(&format!(
            "Generated by {} on {}\n\n",
            crate::APP_NAME,
            doc.generated_at.format(TIMESTAMP_FORMAT)
        ));

        // Only worth a contents list with more than one module
        if doc.files.len() > 1 {
            output.push_str("## Contents\n");
            for (index, file) in doc.files.iter().enumerate() {
                output.push_str(&toc::render_toc_item(index + 1, &file.summary));
                output.push('\n');
            }
            output.push('\n');
        }

        for file in &doc.files {
            output.push_str(&self.render_file(file));
        }

        Ok(output)
    }
}

impl MarkdownRenderer {
    fn render_file(&self, file: &SourceFileRecord) -> String {
        let mut output = format!("## {}\n", file.summary);

        if self.code_links {
            output.push_str(&format!("[source file]({})\n", file.source_path));
        }
        output.push('\n');

        for function in &file.functions {
            output.push_str(&render_function(function));
        }

        output
    }
}

/// Render one function: heading, signature block, optional docstring block
fn render_function(function: &FunctionRecord) -> String {
    let mut output = format!("### {}\n", function.name);
    output.push_str(&code_block("python", &function.signature));

    if let Some(ref docstring) = function.docstring {
        output.push_str(&code_block("", docstring));
    }

    output
}

/// Fenced code block whose fence outruns any backtick run inside `text`
fn code_block(info: &str, text: &str) -> String {
    let longest_run = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run.max(2) + 1);

    format!("{fence}{info}\n{text}\n{fence}\n\n")
}
