use std::io::stdout;

use clap::Parser;
use collatz_cli::{
    commands::SearchCmd,
    util::{setup_tracing, setup_tracing_with_log_level},
};
use eyre::Result;
use tracing::Level;

fn main() -> Result<()> {
    let cmd = SearchCmd::parse();
    if cmd.verbose {
        setup_tracing();
    } else {
        setup_tracing_with_log_level(Level::WARN);
    }
    let upper_bound = cmd.upper_bound().unwrap_or_else(|e| e.exit());
    cmd.run(upper_bound, &mut stdout().lock())?;
    Ok(())
}
