/// Colour sampling and hex helpers.
use rand::RngExt;

use crate::types::{COLOUR_SPACE, ColourCode, MAX_HEX_VALUE};

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Format a 24-bit value as `#RRGGBB`, zero padded and uppercase.
pub fn format_hex(value: u32) -> String {
    format!("#{value:06X}")
}

/// Draw one uniformly random colour from `rng`.
pub fn random_color_with<R: RngExt>(rng: &mut R) -> ColourCode {
    ColourCode::from_value(rng.random_range(0..=MAX_HEX_VALUE))
}

/// Draw one uniformly random colour from the thread-local generator.
pub fn random_color() -> ColourCode {
    let mut rng = rand::rng();
    random_color_with(&mut rng)
}

/// Supplies candidate colours to the palette builder.
pub trait ColourSource {
    fn next_colour(&mut self) -> ColourCode;

    /// How many distinct colours this source can ever produce.
    fn space(&self) -> u32 {
        COLOUR_SPACE
    }
}

/// Uniform colours from a `rand` generator, optionally limited to `0..space`.
pub struct RandomColours<R> {
    rng: R,
    space: u32,
}

impl<R: RngExt> RandomColours<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            space: COLOUR_SPACE,
        }
    }

    /// Only draw values below `space` (clamped to `1..=COLOUR_SPACE`).
    pub fn within(rng: R, space: u32) -> Self {
        Self {
            rng,
            space: space.clamp(1, COLOUR_SPACE),
        }
    }
}

impl<R: RngExt> ColourSource for RandomColours<R> {
    fn next_colour(&mut self) -> ColourCode {
        if self.space == COLOUR_SPACE {
            return random_color_with(&mut self.rng);
        }
        ColourCode::from_value(self.rng.random_range(0..self.space))
    }

    fn space(&self) -> u32 {
        self.space
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn is_upper_hex_code(s: &str) -> bool {
        is_valid_hex(s) && !s.chars().any(|c| c.is_ascii_lowercase())
    }

    #[test]
    fn format_hex_boundaries() {
        assert_eq!(format_hex(0), "#000000");
        assert_eq!(format_hex(0x00_0F0A), "#000F0A");
        assert_eq!(format_hex(MAX_HEX_VALUE), "#FFFFFF");
    }

    #[test]
    fn is_valid_hex_accepts_both_cases() {
        assert!(is_valid_hex("#FF5733"));
        assert!(is_valid_hex("#ff5733"));
        assert!(!is_valid_hex("FF5733"));
        assert!(!is_valid_hex("#FF573"));
        assert!(!is_valid_hex("#FF573Z"));
        assert!(!is_valid_hex("#ÿÿÿ"));
    }

    #[test]
    fn sampled_codes_are_seven_uppercase_chars() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let code = random_color_with(&mut rng);
            assert_eq!(code.as_str().len(), 7);
            assert!(is_upper_hex_code(code.as_str()), "bad code {code}");
        }
    }

    #[test]
    fn thread_rng_sampler_produces_valid_codes() {
        for _ in 0..100 {
            assert!(is_upper_hex_code(random_color().as_str()));
        }
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| random_color_with(&mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| random_color_with(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn restricted_source_stays_in_range() {
        let mut source = RandomColours::within(StdRng::seed_from_u64(1), 16);
        assert_eq!(source.space(), 16);
        for _ in 0..500 {
            assert!(source.next_colour().value() < 16);
        }
    }

    #[test]
    fn restricted_space_is_clamped() {
        assert_eq!(RandomColours::within(StdRng::seed_from_u64(1), 0).space(), 1);
        assert_eq!(
            RandomColours::within(StdRng::seed_from_u64(1), u32::MAX).space(),
            COLOUR_SPACE
        );
        assert_eq!(RandomColours::new(StdRng::seed_from_u64(1)).space(), COLOUR_SPACE);
    }
}
