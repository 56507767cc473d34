//! CLI command definitions.
//!
//! Each subcommand maps to one boundary operation of the template engine.

use anyhow::Context;
use clap::{Parser, Subcommand};
use spawn_templates::{TemplateEngine, TemplateLoader};

pub mod compile;
pub mod list;
pub mod which;

/// Spawn - MCP server configuration template console
#[derive(Parser)]
#[command(name = "spawn")]
#[command(version, about = "Compile MCP server configuration templates")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List loaded templates
    List(list::ListArgs),

    /// Compile the template for a server into a configuration snippet
    Compile(compile::CompileArgs),

    /// Show which template file backs a server name
    Which(which::WhichArgs),
}

/// Load the template directory and wire up an engine.
pub(crate) fn load_engine(templates_dir: &str) -> anyhow::Result<TemplateEngine> {
    let loader = TemplateLoader::new(templates_dir);
    let index = loader
        .load_all()
        .with_context(|| format!("failed to load templates from '{templates_dir}'"))?;
    Ok(TemplateEngine::new(index))
}
