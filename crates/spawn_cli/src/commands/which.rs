//! `which` command: show the physical file backing a server name.

use anyhow::Result;
use clap::Args;
use spawn_templates::TemplateError;

#[derive(Args)]
pub struct WhichArgs {
    /// Server name to look up
    pub server: String,

    /// Directory containing template JSON files
    #[arg(long, default_value = "templates")]
    pub templates_dir: String,
}

pub fn execute(args: WhichArgs) -> Result<()> {
    let engine = crate::commands::load_engine(&args.templates_dir)?;

    match engine.filename_for(&args.server) {
        Some(filename) => {
            println!("{filename}");
            Ok(())
        }
        None => Err(TemplateError::NotFound(args.server).into()),
    }
}
