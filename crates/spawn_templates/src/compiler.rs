//! Placeholder substitution and template compilation.

use std::collections::HashMap;

use regex::Regex;
use serde_json::{json, Value};
use tracing::error;

use crate::error::TemplateResult;
use crate::resolver::{resolve_inputs, unresolved_hint};
use crate::template::McpTemplate;

/// Compiles templates into human-reviewable configuration snippets.
pub struct TemplateCompiler {
    placeholder: Regex,
}

impl Default for TemplateCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCompiler {
    pub fn new() -> Self {
        Self {
            // Match ${input:ID} pattern
            placeholder: Regex::new(r"\$\{input:([^}]+)\}").unwrap(),
        }
    }

    /// Compile a template into a pretty-printed configuration snippet.
    ///
    /// Resolves the declared inputs, rewrites every placeholder in the
    /// `servers` tree and wraps the result under a top-level `servers` key.
    /// Never fails: an unexpected internal error is logged and degrades to an
    /// empty document, compilation being advisory preview functionality.
    pub fn compile(&self, template: &McpTemplate) -> String {
        match self.try_compile(template) {
            Ok(compiled) => compiled,
            Err(e) => {
                error!("Failed to compile template: {}", e);
                "{}".to_string()
            }
        }
    }

    fn try_compile(&self, template: &McpTemplate) -> TemplateResult<String> {
        let resolved = resolve_inputs(&template.inputs);
        let servers = self.substitute(&template.servers, &resolved);
        let document = json!({ "servers": servers });
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Rewrite `${input:ID}` placeholders throughout a JSON tree.
    ///
    /// String leaves are scanned for placeholders; objects and arrays are
    /// rebuilt with every child substituted recursively, preserving key order
    /// and length; numbers, booleans and null pass through unchanged. The
    /// input tree is never mutated.
    pub fn substitute(&self, node: &Value, resolved: &HashMap<String, String>) -> Value {
        match node {
            Value::String(s) => Value::String(self.replace_placeholders(s, resolved)),
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), self.substitute(value, resolved)))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(
                items.iter().map(|item| self.substitute(item, resolved)).collect(),
            ),
            other => other.clone(),
        }
    }

    /// Replace every placeholder in one string leaf, left to right.
    ///
    /// An id absent from the resolved map degrades to the visible `<id>`
    /// hint; the raw placeholder never survives into output.
    fn replace_placeholders(&self, text: &str, resolved: &HashMap<String, String>) -> String {
        self.placeholder
            .replace_all(text, |caps: &regex::Captures| {
                let id = &caps[1];
                resolved
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| unresolved_hint(id))
            })
            .to_string()
    }
}
