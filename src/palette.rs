//! Named color palettes and HSL color strings

use crate::error::{ArtError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const GRAY: &[&str] = &[
    "#1a1a1a", "#2d2d2d", "#404040", "#525252", "#666666", "#7a7a7a", "#8d8d8d", "#a0a0a0",
    "#b4b4b4", "#c7c7c7", "#dadada", "#ededed", "#ffffff",
];

pub const RETRO: &[&str] = &[
    "#0f0f0f", "#1f1f2e", "#38384e", "#554e5a", "#766b85", "#a392a4", "#e13b37", "#f0a14a",
    "#f67e2b", "#fce877", "#94e044", "#4ca4d8", "#4f5eb7", "#8d4496", "#ffffff",
];

pub const NATURE: &[&str] = &[
    "#1a3a1a", "#2d5a2d", "#408040", "#5aa85a", "#78c878", "#96e896",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    Gray,
    #[default]
    Retro,
    Nature,
}

impl PaletteName {
    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            PaletteName::Gray => GRAY,
            PaletteName::Retro => RETRO,
            PaletteName::Nature => NATURE,
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.colors().iter().map(|c| c.to_string()).collect()
    }
}

impl FromStr for PaletteName {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gray" => Ok(PaletteName::Gray),
            "retro" => Ok(PaletteName::Retro),
            "nature" => Ok(PaletteName::Nature),
            other => Err(ArtError::unknown_style("palette", other)),
        }
    }
}

/// Hue/saturation/lightness color, rendered as a CSS `hsl(...)` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u32,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    /// Hue is reduced modulo 360.
    pub const fn new(hue: u32, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_wraps_hue() {
        assert_eq!(Hsl::new(450, 60, 45).to_string(), "hsl(90, 60%, 45%)");
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!("nature".parse::<PaletteName>().unwrap().colors().len(), 6);
        assert_eq!(PaletteName::default(), PaletteName::Retro);
        assert!("neon".parse::<PaletteName>().is_err());
    }
}
