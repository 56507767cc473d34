//! Multi-key template index.
//!
//! Built once at startup and read-only afterwards. Each parsed document is
//! reachable under up to three keys: its exact file base name, the lowercase
//! form and the normalized form from [`normalize_name`]. Lookup probes the
//! same three tiers in order.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::template::McpTemplate;

/// Canonical lookup key for a server name.
///
/// Lowercases, trims, collapses runs of whitespace to a single hyphen and
/// strips every character outside `[a-z0-9-_]`. Total and idempotent. Used
/// only as a last-resort lookup key, never as a display name.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_hyphen = false;
    for c in raw.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            pending_hyphen = true;
            continue;
        }
        if pending_hyphen {
            out.push('-');
            pending_hyphen = false;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
            out.push(c);
        }
    }
    out
}

/// One indexed template: the parsed document plus the file it came from.
#[derive(Debug)]
pub struct TemplateEntry {
    /// Physical filename the document was authored in (e.g. `GitHub.json`).
    pub filename: String,
    /// The parsed document.
    pub template: McpTemplate,
}

/// Immutable mapping from lookup key to template entry.
///
/// Several keys may alias one entry; a key, once bound, is never rebound.
#[derive(Debug, Default)]
pub struct TemplateIndex {
    entries: HashMap<String, Arc<TemplateEntry>>,
}

impl TemplateIndex {
    /// Build an index from (filename, raw JSON text) pairs.
    ///
    /// Sources are sorted by filename first so key precedence does not depend
    /// on the caller's enumeration order. A file that fails to parse is
    /// logged and skipped; the index is best-effort over all parseable files.
    pub fn from_sources(mut sources: Vec<(String, String)>) -> Self {
        sources.sort_by(|a, b| a.0.cmp(&b.0));

        let mut parsed = Vec::new();
        for (filename, text) in sources {
            match serde_json::from_str::<McpTemplate>(&text) {
                Ok(template) => {
                    debug!("Loaded template: {}", filename);
                    parsed.push(Arc::new(TemplateEntry { filename, template }));
                }
                Err(e) => warn!("Failed to parse template file {}: {}", filename, e),
            }
        }

        let mut entries: HashMap<String, Arc<TemplateEntry>> = HashMap::new();

        // Exact base names bind ahead of any derived alias, so a file is
        // always reachable under its own name even when an earlier file's
        // alias collides with it.
        for entry in &parsed {
            entries
                .entry(base_name(&entry.filename).to_string())
                .or_insert_with(|| Arc::clone(entry));
        }

        for entry in &parsed {
            let base = base_name(&entry.filename);
            let lower = base.to_lowercase();
            if lower != base {
                entries.entry(lower.clone()).or_insert_with(|| Arc::clone(entry));
            }
            let normalized = normalize_name(base);
            if normalized != base && normalized != lower {
                entries.entry(normalized).or_insert_with(|| Arc::clone(entry));
            }
        }

        info!("Indexed {} template file(s)", parsed.len());
        Self { entries }
    }

    /// Look up a template entry by caller-supplied server name.
    ///
    /// Probes exact, then case-insensitive, then normalized, mirroring the
    /// registration precedence.
    pub fn lookup(&self, name: &str) -> Option<&TemplateEntry> {
        if let Some(entry) = self.entries.get(name) {
            return Some(entry.as_ref());
        }
        if let Some(entry) = self.entries.get(&name.to_lowercase()) {
            return Some(entry.as_ref());
        }
        self.entries.get(&normalize_name(name)).map(Arc::as_ref)
    }

    /// Parsed document for a server name, if any.
    pub fn get(&self, name: &str) -> Option<&McpTemplate> {
        self.lookup(name).map(|entry| &entry.template)
    }

    /// Backing filename for a server name, for display alongside a match.
    pub fn filename_for(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|entry| entry.filename.as_str())
    }

    /// All distinct loaded documents, one per backing file, sorted by filename.
    pub fn templates(&self) -> Vec<&TemplateEntry> {
        let mut seen = HashSet::new();
        let mut result: Vec<&TemplateEntry> = self
            .entries
            .values()
            .filter(|entry| seen.insert(entry.filename.as_str()))
            .map(Arc::as_ref)
            .collect();
        result.sort_by(|a, b| a.filename.cmp(&b.filename));
        result
    }

    /// Number of distinct loaded documents.
    pub fn len(&self) -> usize {
        self.templates().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Base name of a template file: the filename minus the fixed extension.
fn base_name(filename: &str) -> &str {
    filename.strip_suffix(".json").unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(filename: &str, server_key: &str) -> (String, String) {
        (
            filename.to_string(),
            format!(r#"{{ "servers": {{ "{server_key}": {{ "type": "http" }} }}, "inputs": [] }}"#),
        )
    }

    fn server_key(entry: &TemplateEntry) -> &str {
        entry
            .template
            .servers
            .as_object()
            .and_then(|map| map.keys().next())
            .map(String::as_str)
            .unwrap()
    }

    #[test]
    fn test_normalize_lowercases_and_hyphenates() {
        assert_eq!(normalize_name("Azure MCP Server"), "azure-mcp-server");
        assert_eq!(normalize_name("  GitHub  "), "github");
        assert_eq!(normalize_name("a   b"), "a-b");
    }

    #[test]
    fn test_normalize_strips_disallowed_characters() {
        assert_eq!(normalize_name("My Server (v2)!"), "my-server-v2");
        assert_eq!(normalize_name("under_score-kept"), "under_score-kept");
    }

    #[test]
    fn test_normalize_is_total_and_idempotent() {
        for raw in ["", "   ", "GitHub", "Azure MCP Server", "a @ b", "ümlaut"] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_lookup_three_tiers() {
        let index = TemplateIndex::from_sources(vec![source("GitHub.json", "github")]);

        assert!(index.lookup("GitHub").is_some(), "exact");
        assert!(index.lookup("github").is_some(), "case-insensitive");
        assert!(index.lookup("GITHUB").is_some(), "lowercased probe");
        assert!(index.lookup("  GitHub  ").is_some(), "normalized probe");
        assert!(index.lookup("gitlab").is_none());
    }

    #[test]
    fn test_lookup_normalized_multiword_name() {
        let index = TemplateIndex::from_sources(vec![source("azure-mcp-server.json", "azure")]);

        assert!(index.lookup("Azure MCP Server").is_some());
        assert!(index.lookup("azure-mcp-server").is_some());
    }

    #[test]
    fn test_exact_keys_beat_derived_aliases() {
        let index = TemplateIndex::from_sources(vec![
            source("Foo.json", "capitalized"),
            source("foo.json", "lowercase"),
        ]);

        // Each file is reachable under its own exact base name even though
        // Foo.json's lowercase alias collides with foo.json's exact key.
        assert_eq!(server_key(index.lookup("Foo").unwrap()), "capitalized");
        assert_eq!(server_key(index.lookup("foo").unwrap()), "lowercase");
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_shared_derived_key_first_write_wins() {
        // Both base names normalize to "my-server"; sorted order puts
        // "My Server.json" first, so it owns the shared normalized key.
        let index = TemplateIndex::from_sources(vec![
            source("My-Server!.json", "second"),
            source("My Server.json", "first"),
        ]);

        assert_eq!(server_key(index.lookup("my-server").unwrap()), "first");
        assert_eq!(server_key(index.lookup("My Server").unwrap()), "first");
        assert_eq!(server_key(index.lookup("My-Server!").unwrap()), "second");
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let index = TemplateIndex::from_sources(vec![
            ("broken.json".to_string(), "{ not json".to_string()),
            source("GitHub.json", "github"),
        ]);

        assert_eq!(index.len(), 1);
        assert!(index.lookup("GitHub").is_some());
        assert!(index.lookup("broken").is_none());
    }

    #[test]
    fn test_filename_for() {
        let index = TemplateIndex::from_sources(vec![source("GitHub.json", "github")]);

        assert_eq!(index.filename_for("github"), Some("GitHub.json"));
        assert_eq!(index.filename_for("missing"), None);
    }

    #[test]
    fn test_templates_deduplicates_aliases() {
        let index = TemplateIndex::from_sources(vec![
            source("GitHub.json", "github"),
            source("azure-mcp-server.json", "azure"),
        ]);

        let filenames: Vec<&str> = index.templates().iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(filenames, vec!["GitHub.json", "azure-mcp-server.json"]);
    }

    #[test]
    fn test_empty_index() {
        let index = TemplateIndex::from_sources(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.lookup("anything").is_none());
    }
}
