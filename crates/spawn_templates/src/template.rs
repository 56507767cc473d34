//! Template document definitions.
//!
//! One document per physical template file: an arbitrary `servers` JSON tree
//! plus the ordered list of inputs the template exposes. Documents are
//! immutable once loaded; compilation always produces a new tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named configuration slot a template exposes for the caller to fill in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateInput {
    /// Input kind hint (e.g. "promptString").
    #[serde(rename = "type", default)]
    pub input_type: String,
    /// Identifier referenced by `${input:ID}` placeholders.
    pub id: String,
    /// Human-readable prompt shown when collecting the value.
    #[serde(default)]
    pub description: Option<String>,
    /// Secret inputs never surface their value in compiled output.
    #[serde(default)]
    pub password: bool,
    /// Default value, substituted verbatim for non-secret inputs.
    #[serde(default)]
    pub default: Option<String>,
}

/// Parsed contents of one MCP server template file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpTemplate {
    /// Arbitrary JSON tree, typically mapping a server key to connection
    /// parameters containing `${input:ID}` placeholders.
    #[serde(default)]
    pub servers: Value,
    /// Declared inputs, in authored order.
    #[serde(default)]
    pub inputs: Vec<TemplateInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let template: McpTemplate = serde_json::from_str(
            r#"{
                "servers": {
                    "github": { "type": "http", "url": "${input:github_host}" }
                },
                "inputs": [
                    {
                        "type": "promptString",
                        "id": "github_host",
                        "description": "GitHub API base URL",
                        "default": "https://api.github.com/"
                    },
                    { "type": "promptString", "id": "pat", "password": true }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(template.inputs.len(), 2);
        assert_eq!(template.inputs[0].id, "github_host");
        assert!(!template.inputs[0].password);
        assert_eq!(
            template.inputs[0].default.as_deref(),
            Some("https://api.github.com/")
        );
        assert!(template.inputs[1].password);
        assert!(template.inputs[1].description.is_none());
        assert!(template.servers.get("github").is_some());
    }

    #[test]
    fn test_parse_minimal_document() {
        let template: McpTemplate = serde_json::from_str(r#"{ "servers": {} }"#).unwrap();
        assert!(template.inputs.is_empty());
    }
}
