/// Palette presentation.
use std::io::{self, Write};

use crate::types::ColourCode;

pub const HEADER: &str = "Unique colour palette:";

/// Header plus one `<index>: <code>` line per colour, 1-based.
pub fn render_palette<'a, I>(colours: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ColourCode>,
{
    std::iter::once(HEADER.to_string())
        .chain(
            colours
                .into_iter()
                .enumerate()
                .map(|(index, colour)| format!("{}: {colour}", index + 1)),
        )
        .collect()
}

/// Write the rendered palette to `sink`, one line at a time.
pub fn display_palette<'a, I, W>(colours: I, sink: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a ColourCode>,
    W: Write + ?Sized,
{
    for line in render_palette(colours) {
        writeln!(sink, "{line}")?;
    }
    Ok(())
}
