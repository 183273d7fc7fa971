use anyhow::anyhow;
use clap::Parser;
use std::path::PathBuf;

/// Render a filesystem path as a tree diagram with per-entry sizes.
#[derive(Parser)]
#[command(name = "dirtree", version)]
struct Args {
    /// File or directory to render
    path: PathBuf,

    /// Emit the tree as pretty-printed JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dirtree::core::telemetry::logging::init();
    let args = Args::parse();

    let not_found = || anyhow!("no such file or directory: {}", args.path.display());

    let output = if args.json {
        let tree = dirtree::render::snapshot(&args.path).ok_or_else(not_found)?;
        serde_json::to_string_pretty(&tree)?
    } else {
        dirtree::render::render(&args.path).ok_or_else(not_found)?
    };
    println!("{output}");
    Ok(())
}
