use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Root font size used to resolve `rem`/`em` lengths.
pub const ROOT_FONT_SIZE: f32 = 16.0;

/// Viewport height configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    /// Measure the container's rendered height.
    #[default]
    Auto,
    /// A fixed height in pixels.
    Px(f32),
}

impl Length {
    /// Builds a length from a pixel count; `0` means [`Length::Auto`].
    pub fn px(value: f32) -> Result<Self, Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidLength(value.to_string()));
        }
        if value == 0.0 {
            return Ok(Self::Auto);
        }
        Ok(Self::Px(value))
    }

    pub fn fixed(self) -> Option<f32> {
        match self {
            Self::Auto => None,
            Self::Px(v) => Some(v),
        }
    }
}

impl FromStr for Length {
    type Err = Error;

    /// Parses a bare number or a CSS length (`px`, `rem`, `em`). `auto` and `0` mean
    /// [`Length::Auto`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }

        let split = input
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(input.len());
        let (number, unit) = input.split_at(split);
        let value: f32 = number
            .parse()
            .map_err(|_| Error::InvalidLength(String::from(input)))?;

        let scale = match unit.trim().to_ascii_lowercase().as_str() {
            "" | "px" => 1.0,
            "rem" | "em" => ROOT_FONT_SIZE,
            other => {
                return Err(Error::UnsupportedUnit {
                    input: String::from(input),
                    unit: String::from(other),
                });
            }
        };

        Self::px(value * scale).map_err(|_| Error::InvalidLength(String::from(input)))
    }
}

impl From<u32> for Length {
    fn from(px: u32) -> Self {
        if px == 0 {
            Self::Auto
        } else {
            Self::Px(px as f32)
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}
