//! Color-harmony palettes: rotate the base hue by fixed offsets, keep
//! saturation and lightness.

use std::fmt;
use std::str::FromStr;

use super::color::{hex_to_hsl, hsl_to_hex, shift_hue, Hsl};
use super::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Tetradic,
}

impl Scheme {
    pub const ALL: [Scheme; 5] = [
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::Triadic,
        Scheme::SplitComplementary,
        Scheme::Tetradic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::Triadic => "triadic",
            Scheme::SplitComplementary => "split_complementary",
            Scheme::Tetradic => "tetradic",
        }
    }

    /// Hue offsets in degrees relative to the base hue, in output order.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Scheme::Complementary => &[0.0, 180.0],
            Scheme::Analogous => &[-30.0, 0.0, 30.0],
            Scheme::Triadic => &[0.0, 120.0, 240.0],
            Scheme::SplitComplementary => &[0.0, 150.0, 210.0],
            Scheme::Tetradic => &[0.0, 90.0, 180.0, 270.0],
        }
    }

    pub fn palette(self, base: Hsl) -> Vec<String> {
        self.offsets()
            .iter()
            .map(|&offset| hsl_to_hex(Hsl { h: shift_hue(base.h, offset), ..base }))
            .collect()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = ColorError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == tag)
            .ok_or_else(|| ColorError::UnsupportedScheme(s.to_owned()))
    }
}

/// Builds the palette for `base_hex` under the scheme named `mode`.
///
/// The base color is validated first, so a request that is wrong on both
/// counts reports `InvalidFormat`.
pub fn generate_palette(base_hex: &str, mode: &str) -> Result<Vec<String>, ColorError> {
    let base = hex_to_hsl(base_hex)?;
    let scheme: Scheme = mode.parse()?;
    Ok(scheme.palette(base))
}
