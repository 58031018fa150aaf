use crate::error::{ArtError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_MOSAIC_SEPARATOR: &str = "✦";
pub const DEFAULT_SHAPE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Simple,
    #[default]
    Double,
    Fancy,
}

impl FromStr for BorderStyle {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "simple" => Ok(BorderStyle::Simple),
            "double" => Ok(BorderStyle::Double),
            "fancy" => Ok(BorderStyle::Fancy),
            other => Err(ArtError::unknown_style("border", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Diamond,
    Cross,
}

impl FromStr for ShapeKind {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "box" => Ok(ShapeKind::Box),
            "diamond" => Ok(ShapeKind::Diamond),
            "cross" => Ok(ShapeKind::Cross),
            other => Err(ArtError::unknown_style("shape", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderParams {
    pub text: String,
    #[serde(default)]
    pub border_style: BorderStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextArtParams {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    pub shape: ShapeKind,
    #[serde(default = "default_shape_size")]
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosaicParams {
    pub grid: Vec<Vec<String>>,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_shape_size() -> usize {
    DEFAULT_SHAPE_SIZE
}

fn default_separator() -> String {
    DEFAULT_MOSAIC_SEPARATOR.to_string()
}
