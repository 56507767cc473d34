//! Engine facade tying index, resolver and substitution together.

use tracing::debug;

use crate::compiler::TemplateCompiler;
use crate::index::{TemplateEntry, TemplateIndex};
use crate::template::McpTemplate;

/// Read-only template engine: look up a server's template and compile it.
///
/// Construct one instance at startup and share it; every method takes
/// `&self`, so concurrent readers need no synchronization. The engine is
/// explicitly constructed and passed around rather than held in a global, so
/// tests can build isolated instances from fixture directories.
pub struct TemplateEngine {
    index: TemplateIndex,
    compiler: TemplateCompiler,
}

impl TemplateEngine {
    pub fn new(index: TemplateIndex) -> Self {
        Self {
            index,
            compiler: TemplateCompiler::new(),
        }
    }

    /// Compile the template matching `server_name` into a pretty-printed
    /// configuration snippet.
    ///
    /// Returns `None` on a lookup miss; the caller decides whether that is a
    /// user error or a data gap. Compilation itself never fails.
    pub fn compile(&self, server_name: &str) -> Option<String> {
        let entry = self.index.lookup(server_name)?;
        debug!(
            "Compiling template {} for server {}",
            entry.filename, server_name
        );
        Some(self.compiler.compile(&entry.template))
    }

    /// Parsed template document matching `server_name`, if any.
    pub fn template_for(&self, server_name: &str) -> Option<&McpTemplate> {
        self.index.get(server_name)
    }

    /// Physical file backing the match for `server_name`, if any.
    pub fn filename_for(&self, server_name: &str) -> Option<&str> {
        self.index.filename_for(server_name)
    }

    /// All distinct loaded templates, sorted by filename.
    pub fn templates(&self) -> Vec<&TemplateEntry> {
        self.index.templates()
    }
}
