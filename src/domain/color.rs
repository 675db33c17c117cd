use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("color must start with '#': {0}")]
    MissingHash(String),
    #[error("expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digits: {0}")]
    InvalidDigit(String),
}

/// An immutable RGB color with a floating point alpha in `[0, 1]`.
///
/// Per-capsule colors are derived with [`Rgba::with_alpha`], which copies
/// the channels and substitutes alpha instead of mutating a shared value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Composites this color onto an opaque background, returning the
    /// resulting opaque channels.
    pub fn over(self, background: Self) -> (u8, u8, u8) {
        let mix = |fg: u8, bg: u8| -> u8 {
            let value = f64::from(fg) * self.a + f64::from(bg) * (1.0 - self.a);
            value.round().clamp(0.0, 255.0) as u8
        };
        (
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a < 1.0 {
            write!(f, "{:02x}", (self.a * 255.0).round() as u8)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(trimmed.to_string()))?;

        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseColorError::InvalidLength(hex.len()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(hex.to_string()));
        }

        let channel = |start: usize| {
            u8::from_str_radix(&hex[start..start + 2], 16)
                .map_err(|_| ParseColorError::InvalidDigit(hex.to_string()))
        };

        let color = Self::rgb(channel(0)?, channel(2)?, channel(4)?);
        if hex.len() == 8 {
            Ok(color.with_alpha(f64::from(channel(6)?) / 255.0))
        } else {
            Ok(color)
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}
