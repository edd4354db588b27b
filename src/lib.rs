//! Unique random hex colour palettes.
pub mod cli;
pub mod color;
pub mod display;
pub mod palette;
pub mod types;

pub use color::{ColourSource, RandomColours, random_color, random_color_with};
pub use palette::{PaletteError, generate_unique_palette};
pub use types::{ColourCode, Palette};
