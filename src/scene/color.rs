use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB colour, serialised as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color(u32);

impl Color {
    pub const WHITE: Self = Self(0x00FF_FFFF);
    pub const BLUE: Self = Self(0x0058_C4DD);
    pub const BLUE_B: Self = Self(0x009C_DCEB);
    pub const GREEN: Self = Self(0x0083_C167);
    pub const GREEN_B: Self = Self(0x00C9_E2AE);
    pub const ORANGE: Self = Self(0x00FF_862F);
    pub const YELLOW: Self = Self(0x00FF_FF00);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| format!("expected #RRGGBB, got {value:?}"))?;
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|e| format!("invalid colour {value:?}: {e}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        assert_eq!(Color::ORANGE.to_string(), "#FF862F");
        assert_eq!(Color::try_from("#FF862F".to_owned()).unwrap(), Color::ORANGE);
        assert_eq!(Color::rgb(0x58, 0xC4, 0xDD), Color::BLUE);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Color::try_from("FF862F".to_owned()).is_err());
        assert!(Color::try_from("#GG0000".to_owned()).is_err());
        assert!(Color::try_from("#+FFFFF".to_owned()).is_err());
        assert!(Color::try_from("#-00001".to_owned()).is_err());
    }
}
