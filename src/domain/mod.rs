//! Color model and palette engine. Pure functions, no I/O.

pub mod color;
pub mod palette;

use thiserror::Error;

pub use color::{Hsl, Rgb};
pub use palette::{generate_palette, Scheme};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?} (use #RRGGBB or #RGB)")]
    InvalidFormat(String),
    #[error("unsupported mode: {0:?}")]
    UnsupportedScheme(String),
}
