/// CLI argument parsing and palette command handling.
use std::io::Write;

use anyhow::Result;
use clap::Parser;
use rand::RngExt;
use tracing::debug;

use crate::color::RandomColours;
use crate::{display, palette};

#[derive(Parser, Debug)]
#[command(
    name = "hex-palette",
    version,
    about = "hex-palette - Generate unique random hex colour palettes"
)]
pub struct Cli {
    /// Number of unique colours to generate
    #[arg(value_name = "COUNT", default_value = "5", allow_negative_numbers = true)]
    pub count: String,
}

/// Generate and print a palette using the thread-local generator.
pub fn run(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    run_with_rng(&cli.count, rand::rng(), out, err)
}

/// Generate and print a palette drawing from `rng`.
///
/// An invalid count is reported on `err` as `Error: <message>` and is not
/// treated as a failure of the run.
pub fn run_with_rng<R: RngExt>(
    count_text: &str,
    rng: R,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let mut source = RandomColours::new(rng);
    let result = palette::parse_count(count_text)
        .and_then(|count| palette::generate_unique_palette(count, &mut source));
    match result {
        Ok(colours) => display::display_palette(&colours, out)?,
        Err(e) => {
            debug!(count = count_text, "rejected colour count");
            writeln!(err, "Error: {e}")?;
        }
    }
    Ok(())
}
