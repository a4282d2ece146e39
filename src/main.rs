//! CLI entry point for replaying stroke scripts on a tile grid

use clap::Parser;
use tilecanvas::io::cli::{Cli, ScriptRunner};

fn main() -> tilecanvas::Result<()> {
    let cli = Cli::parse();
    cli.init_tracing();
    let outcome = ScriptRunner::new(cli).run()?;
    tracing::info!(
        placed = outcome.placements.requests.len(),
        failed = outcome.failed_placements,
        "export finished"
    );
    Ok(())
}
