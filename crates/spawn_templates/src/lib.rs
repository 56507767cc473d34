//! # spawn_templates
//!
//! MCP server configuration template engine for Spawn.
//!
//! Loads externally authored template documents (one JSON file per server
//! type), indexes them under several spellings of the server's name and
//! compiles each into a human-reviewable configuration snippet: declared
//! inputs are resolved (secrets masked, defaults substituted) and every
//! `${input:ID}` placeholder in the tree is rewritten.
//!
//! The engine is load-once, read-many: build a [`TemplateIndex`] at startup,
//! wrap it in a [`TemplateEngine`] and share it across request handlers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use spawn_templates::{TemplateEngine, TemplateLoader};
//!
//! let loader = TemplateLoader::new("templates");
//! let engine = TemplateEngine::new(loader.load_all().unwrap());
//!
//! if let Some(snippet) = engine.compile("GitHub") {
//!     println!("{snippet}");
//! }
//! ```

pub mod compiler;
pub mod engine;
pub mod error;
pub mod index;
pub mod loader;
pub mod resolver;
pub mod template;

pub use compiler::TemplateCompiler;
pub use engine::TemplateEngine;
pub use error::{TemplateError, TemplateResult};
pub use index::{normalize_name, TemplateEntry, TemplateIndex};
pub use loader::TemplateLoader;
pub use resolver::{resolve_inputs, SECRET_MASK};
pub use template::{McpTemplate, TemplateInput};
