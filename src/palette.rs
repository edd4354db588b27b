/// Unique palette generation.
use thiserror::Error;
use tracing::debug;

use crate::color::ColourSource;
use crate::types::Palette;

pub const POSITIVE_COUNT_MESSAGE: &str = "Count must be a positive integer.";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The requested colour count cannot be satisfied.
    #[error("{0}")]
    InvalidArgument(String),
}

impl PaletteError {
    fn not_positive() -> Self {
        Self::InvalidArgument(POSITIVE_COUNT_MESSAGE.to_string())
    }
}

/// Parse a textual colour count. Only whole numbers are accepted.
pub fn parse_count(text: &str) -> Result<i64, PaletteError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| PaletteError::not_positive())
}

/// Build a palette of exactly `count` distinct colours drawn from `source`.
///
/// Duplicates are discarded and re-drawn until the palette is full. `count`
/// must be between 1 and the number of colours `source` can produce.
pub fn generate_unique_palette<S: ColourSource + ?Sized>(
    count: i64,
    source: &mut S,
) -> Result<Palette, PaletteError> {
    if count <= 0 {
        return Err(PaletteError::not_positive());
    }
    let space = source.space();
    if count > i64::from(space) {
        return Err(PaletteError::InvalidArgument(format!(
            "Count must not exceed {space}, the number of distinct colours."
        )));
    }
    let target = usize::try_from(count).map_err(|_| PaletteError::not_positive())?;

    let mut palette = Palette::with_capacity(target);
    let mut draws: u64 = 0;
    while palette.len() < target {
        draws += 1;
        palette.insert(source.next_colour());
    }
    debug!(count, draws, collisions = draws - count as u64, "generated palette");
    Ok(palette)
}
