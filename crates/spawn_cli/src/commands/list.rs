//! `list` command: show every loaded template.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct ListArgs {
    /// Directory containing template JSON files
    #[arg(long, default_value = "templates")]
    pub templates_dir: String,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let engine = crate::commands::load_engine(&args.templates_dir)?;

    let templates = engine.templates();
    if templates.is_empty() {
        println!("No templates loaded from '{}'", args.templates_dir);
        return Ok(());
    }

    for entry in templates {
        println!(
            "{} ({} input(s))",
            entry.filename,
            entry.template.inputs.len()
        );
    }
    Ok(())
}
