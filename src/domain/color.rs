//! Conversions between hex strings, RGB and HSL.
//!
//! Hex input is `RGB` or `RRGGBB`, optionally prefixed with `#`, any case.
//! Hex output is always uppercase `#RRGGBB`.

use serde::{Deserialize, Serialize};

use super::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from float channels: each is rounded to the nearest
    /// integer (half away from zero) and clamped to [0, 255].
    pub fn from_channels_f64(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_from_f64(r),
            g: channel_from_f64(g),
            b: channel_from_f64(b),
        }
    }
}

/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

fn channel_from_f64(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// True when `s` is 3 or 6 hex digits with an optional leading `#`.
pub fn is_hex_color(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    if !is_hex_color(hex) {
        return Err(ColorError::InvalidFormat(hex.to_owned()));
    }
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let full: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_owned()
    };

    let channel = |i: usize| {
        u8::from_str_radix(&full[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidFormat(hex.to_owned()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let l = (max + min) / 2.0;

    // achromatic: hue is undefined, pin it to 0
    if d == 0.0 {
        return Hsl::new(0.0, 0.0, l);
    }

    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let h_prime = if max == r {
        ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(wrap_hue(60.0 * h_prime), s, l)
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = wrap_hue(hsl.h);
    let (s, l) = (hsl.s, hsl.l);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (rp, gp, bp) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::from_channels_f64((rp + m) * 255.0, (gp + m) * 255.0, (bp + m) * 255.0)
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// Rotates `h` by `delta` degrees, result in [0, 360).
pub fn shift_hue(h: f64, delta: f64) -> f64 {
    wrap_hue(h + delta)
}

fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
