use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use thiserror::Error;

use crate::color;

/// Largest value representable as `#RRGGBB`.
pub const MAX_HEX_VALUE: u32 = 0xFF_FFFF;

/// Number of distinct colour codes.
pub const COLOUR_SPACE: u32 = MAX_HEX_VALUE + 1;

/// A single `#RRGGBB` colour, always stored uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColourCode(String);

impl ColourCode {
    /// Build a code from a 24-bit value. Higher bits are dropped.
    pub fn from_value(value: u32) -> Self {
        Self(color::format_hex(value & MAX_HEX_VALUE))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> u32 {
        // Validated on construction, so the digits always parse.
        u32::from_str_radix(&self.0[1..], 16).unwrap_or_default()
    }
}

impl fmt::Display for ColourCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("'{0}' is not a hex colour like #RRGGBB")]
pub struct InvalidColourCode(pub String);

impl FromStr for ColourCode {
    type Err = InvalidColourCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !color::is_valid_hex(s) {
            return Err(InvalidColourCode(s.to_string()));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }
}

/// Insertion-ordered set of distinct colours.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colours: IndexSet<ColourCode>,
}

impl Palette {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            colours: IndexSet::with_capacity(capacity),
        }
    }

    /// Returns `false` when the colour was already present.
    pub(crate) fn insert(&mut self, colour: ColourCode) -> bool {
        self.colours.insert(colour)
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColourCode> {
        self.colours.iter()
    }

    pub fn into_vec(self) -> Vec<ColourCode> {
        self.colours.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColourCode;
    type IntoIter = indexmap::set::Iter<'a, ColourCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.colours.iter()
    }
}
