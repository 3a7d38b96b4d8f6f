//! JSON renderer.

use super::{DocumentModel, Renderer};
use crate::error::Result;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &DocumentModel) -> Result<String> {
        let mut output = serde_json::to_string_pretty(doc)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{FunctionRecord, SourceFileRecord};

    #[test]
    fn test_json_shape() {
        let doc = DocumentModel::new(
            "demo",
            vec![SourceFileRecord {
                source_path: "util.py".to_string(),
                summary: "Utility helpers.".to_string(),
                functions: vec![
                    FunctionRecord {
                        name: "add".to_string(),
                        signature: "add(a, b)".to_string(),
                        docstring: Some("Returns a + b.".to_string()),
                    },
                    FunctionRecord {
                        name: "sub".to_string(),
                        signature: "sub(a, b)".to_string(),
                        docstring: None,
                    },
                ],
            }],
        );

        let output = JsonRenderer.render(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["title"], "demo Technical Reference Guide");
        assert!(value["generated_at"].is_string());
        assert_eq!(value["files"][0]["summary"], "Utility helpers.");
        assert_eq!(value["files"][0]["functions"][0]["docstring"], "Returns a + b.");
        assert!(value["files"][0]["functions"][1].get("docstring").is_none());
    }
}
