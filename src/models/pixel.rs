use crate::error::{ArtError, Result};
use crate::palette::PaletteName;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelStyle {
    Noise,
    Checker,
    Stripes,
}

impl FromStr for PixelStyle {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "noise" => Ok(PixelStyle::Noise),
            "checker" => Ok(PixelStyle::Checker),
            "stripes" => Ok(PixelStyle::Stripes),
            other => Err(ArtError::unknown_style("pixel", other)),
        }
    }
}

/// Parameters for a procedural grid. Unset sizes come from the engine config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    pub style: PixelStyle,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub palette: PaletteName,
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub scale: Option<u32>,
}

impl GridParams {
    /// Explicit `colors` win over the named palette.
    pub fn resolved_colors(&self) -> Vec<String> {
        match &self.colors {
            Some(colors) => colors.clone(),
            None => self.palette.to_vec(),
        }
    }
}

/// Row-major grid of color values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<String>,
}

impl PixelGrid {
    pub(crate) fn from_fn<F>(width: usize, height: usize, mut cell: F) -> Self
    where
        F: FnMut(usize, usize) -> String,
    {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(cell(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&str> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(self.width.max(1))
    }
}
