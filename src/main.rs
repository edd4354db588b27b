use std::io;

use anyhow::Result;
use clap::Parser;
use hex_palette::cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    let cli_opts = cli::Cli::parse();
    let stdout = io::stdout();
    let stderr = io::stderr();
    cli::run(cli_opts, &mut stdout.lock(), &mut stderr.lock())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
