use crate::error::{ArtError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 300;
pub const DEFAULT_MOUNTAINS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientParams {
    pub colors: Vec<String>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SunPosition {
    Left,
    Center,
    #[default]
    Right,
}

impl SunPosition {
    /// Horizontal anchor on the 400-wide canvas
    pub fn x(&self) -> u32 {
        match self {
            SunPosition::Left => 50,
            SunPosition::Center => 200,
            SunPosition::Right => 350,
        }
    }
}

impl FromStr for SunPosition {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(SunPosition::Left),
            "center" => Ok(SunPosition::Center),
            "right" => Ok(SunPosition::Right),
            other => Err(ArtError::unknown_style("sun position", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandscapeColors {
    pub sky: String,
    pub ground: String,
    pub sun: String,
}

impl Default for LandscapeColors {
    fn default() -> Self {
        LandscapeColors {
            sky: "#87CEEB".to_string(),
            ground: "#228B22".to_string(),
            sun: "#FFD700".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandscapeParams {
    #[serde(default = "default_mountains")]
    pub mountains: usize,
    #[serde(default)]
    pub sun_position: SunPosition,
    #[serde(default)]
    pub colors: LandscapeColors,
}

impl Default for LandscapeParams {
    fn default() -> Self {
        LandscapeParams {
            mountains: DEFAULT_MOUNTAINS,
            sun_position: SunPosition::default(),
            colors: LandscapeColors::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Grid,
    Dots,
    Waves,
}

impl PatternKind {
    pub const ALL: [PatternKind; 3] = [PatternKind::Grid, PatternKind::Dots, PatternKind::Waves];
}

impl FromStr for PatternKind {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grid" => Ok(PatternKind::Grid),
            "dots" => Ok(PatternKind::Dots),
            "waves" => Ok(PatternKind::Waves),
            other => Err(ArtError::unknown_style("pattern", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternParams {
    pub pattern: PatternKind,
    #[serde(default = "default_pattern_colors")]
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarParams {
    #[serde(alias = "agentName")]
    pub name: String,
}

fn default_width() -> u32 {
    CANVAS_WIDTH
}

fn default_height() -> u32 {
    CANVAS_HEIGHT
}

fn default_mountains() -> usize {
    DEFAULT_MOUNTAINS
}

pub fn default_pattern_colors() -> Vec<String> {
    vec!["#333".to_string(), "#666".to_string()]
}
