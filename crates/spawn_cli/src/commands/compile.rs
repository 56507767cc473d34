//! `compile` command: compile a server's template to a reviewable snippet.

use anyhow::Result;
use clap::Args;
use spawn_templates::TemplateError;

#[derive(Args)]
pub struct CompileArgs {
    /// Server name to compile a template for
    pub server: String,

    /// Directory containing template JSON files
    #[arg(long, default_value = "templates")]
    pub templates_dir: String,
}

pub fn execute(args: CompileArgs) -> Result<()> {
    let engine = crate::commands::load_engine(&args.templates_dir)?;

    match engine.compile(&args.server) {
        Some(snippet) => {
            println!("{snippet}");
            Ok(())
        }
        None => Err(TemplateError::NotFound(args.server).into()),
    }
}
