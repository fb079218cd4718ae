//! Color values used in plot styles.
//!
//! Colors are stored as 8-bit RGBA and can be parsed from hex strings
//! (`#rgb`, `#rrggbb`, `#rrggbbaa`) and the usual single-letter and named
//! colors renderers understand (`"r"`, `"tab:blue"`, `"black"`, ...).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 128, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Hex representation, `#rrggbb` when opaque and `#rrggbbaa` otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize, width: usize| -> Option<u8> {
            let v = u8::from_str_radix(hex.get(i * width..(i + 1) * width)?, 16).ok()?;
            // #rgb expands each nibble: f -> ff
            Some(if width == 1 { v * 17 } else { v })
        };
        match hex.len() {
            3 => Some(Self::rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Some(Self::rgb(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
            8 => Some(Self::new(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?, channel(3, 2)?)),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "b" | "blue" => Self::BLUE,
            "g" | "green" => Self::GREEN,
            "r" | "red" => Self::RED,
            "c" | "cyan" => Self::rgb(0, 191, 191),
            "m" | "magenta" => Self::rgb(191, 0, 191),
            "y" | "yellow" => Self::rgb(191, 191, 0),
            "k" | "black" => Self::BLACK,
            "w" | "white" => Self::WHITE,
            "none" | "transparent" => Self::TRANSPARENT,
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(128, 0, 128),
            "tab:blue" => Self::rgb(31, 119, 180),
            "tab:orange" => Self::rgb(255, 127, 14),
            "tab:green" => Self::rgb(44, 160, 44),
            "tab:red" => Self::rgb(214, 39, 40),
            "tab:purple" => Self::rgb(148, 103, 189),
            "tab:brown" => Self::rgb(140, 86, 75),
            "tab:pink" => Self::rgb(227, 119, 194),
            "tab:gray" | "tab:grey" => Self::rgb(127, 127, 127),
            "tab:olive" => Self::rgb(188, 189, 34),
            "tab:cyan" => Self::rgb(23, 190, 207),
            _ => return None,
        };
        Some(color)
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parsed = match s.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => Self::from_name(&s.to_ascii_lowercase()),
        };
        parsed.ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::new(0, 0, 0, 255));
        assert_eq!(Rgba::WHITE, Rgba::new(255, 255, 255, 255));
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff8000".parse::<Rgba>().unwrap(), Rgba::rgb(255, 128, 0));
        assert_eq!("#f80".parse::<Rgba>().unwrap(), Rgba::rgb(255, 136, 0));
        assert_eq!("#00000080".parse::<Rgba>().unwrap(), Rgba::new(0, 0, 0, 128));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("r".parse::<Rgba>().unwrap(), Rgba::RED);
        assert_eq!("Black".parse::<Rgba>().unwrap(), Rgba::BLACK);
        assert_eq!("tab:blue".parse::<Rgba>().unwrap(), Rgba::rgb(31, 119, 180));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!("#12345".parse::<Rgba>(), Err(Error::InvalidColor("#12345".into())));
        assert!("#gggggg".parse::<Rgba>().is_err());
        assert!("chartreuse-ish".parse::<Rgba>().is_err());
        assert!("#é12".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgba::rgb(31, 119, 180).to_hex(), "#1f77b4");
        assert_eq!(Rgba::new(255, 0, 0, 16).to_string(), "#ff000010");
    }

    #[test]
    fn test_rgba_with_alpha() {
        let c = Rgba::RED.with_alpha(128);
        assert_eq!(c.a, 128);
        assert_eq!(c.r, 255);
    }
}
