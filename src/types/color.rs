//! RGBA colour values used for the window border and drop shadow.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::errors::ColorError;

/// An 8-bit-per-channel colour with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha_fraction(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Renders the colour in CSS functional notation.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_fraction(self.alpha_fraction())
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();

        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::Unrecognized(s.to_string()));
        }
        if let Some(args) = functional_args(&input, "rgba") {
            return parse_functional(args, true);
        }
        if let Some(args) = functional_args(&input, "rgb") {
            return parse_functional(args, false);
        }

        named_color(&input).ok_or_else(|| ColorError::Unrecognized(s.to_string()))
    }
}

/// Formats a fraction with at most three decimals and no trailing zeros.
fn format_fraction(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn functional_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_functional(args: &str, with_alpha: bool) -> Result<Rgba, ColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorError::ComponentCount {
            expected,
            found: parts.len(),
        });
    }

    let r = parse_channel(parts[0])?;
    let g = parse_channel(parts[1])?;
    let b = parse_channel(parts[2])?;
    let a = if with_alpha {
        parse_alpha(parts[3])?
    } else {
        255
    };
    Ok(Rgba::new(r, g, b, a))
}

fn parse_channel(part: &str) -> Result<u8, ColorError> {
    let value: f64 = part
        .parse()
        .map_err(|_| ColorError::InvalidChannel(part.to_string()))?;
    if !value.is_finite() || !(0.0..=255.0).contains(&value) {
        return Err(ColorError::InvalidChannel(part.to_string()));
    }
    Ok(value.round() as u8)
}

fn parse_alpha(part: &str) -> Result<u8, ColorError> {
    let value: f64 = part
        .parse()
        .map_err(|_| ColorError::InvalidChannel(part.to_string()))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ColorError::InvalidChannel(part.to_string()));
    }
    Ok((value * 255.0).round() as u8)
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);

    match hex.len() {
        3 => Some(Rgba::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Rgba> {
    let color = match name {
        "black" => Rgba::opaque(0, 0, 0),
        "white" => Rgba::opaque(255, 255, 255),
        "red" => Rgba::opaque(255, 0, 0),
        "green" => Rgba::opaque(0, 128, 0),
        "blue" => Rgba::opaque(0, 0, 255),
        "yellow" => Rgba::opaque(255, 255, 0),
        "cyan" => Rgba::opaque(0, 255, 255),
        "magenta" => Rgba::opaque(255, 0, 255),
        "gray" | "grey" => Rgba::opaque(128, 128, 128),
        "transparent" => Rgba::TRANSPARENT,
        _ => return None,
    };
    Some(color)
}
