//! Template discovery from a directory of JSON files.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::TemplateResult;
use crate::index::TemplateIndex;

/// Loads every `*.json` template file from a directory into an index.
pub struct TemplateLoader {
    templates_path: PathBuf,
}

impl TemplateLoader {
    /// Create a new template loader.
    pub fn new(templates_path: impl Into<PathBuf>) -> Self {
        Self {
            templates_path: templates_path.into(),
        }
    }

    /// Read all template files and build the index.
    ///
    /// A missing directory or an unreadable file is logged and skipped; the
    /// engine serves whatever loaded.
    pub fn load_all(&self) -> TemplateResult<TemplateIndex> {
        if !self.templates_path.exists() {
            warn!("Templates directory does not exist: {:?}", self.templates_path);
            return Ok(TemplateIndex::default());
        }

        let mut sources = Vec::new();
        for entry in WalkDir::new(&self.templates_path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match fs::read_to_string(path) {
                Ok(text) => sources.push((filename.to_string(), text)),
                Err(e) => warn!("Failed to read template file {:?}: {}", path, e),
            }
        }

        info!(
            "Found {} template file(s) in {:?}",
            sources.len(),
            self.templates_path
        );
        Ok(TemplateIndex::from_sources(sources))
    }
}
