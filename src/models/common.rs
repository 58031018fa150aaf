use crate::error::{ArtError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Ascii,
    Svg,
    Pixel,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Ascii => "ascii",
            ImageKind::Svg => "svg",
            ImageKind::Pixel => "pixel",
        }
    }

    /// Name of the parameter that selects the operation within this kind
    pub fn discriminator_key(&self) -> &'static str {
        match self {
            ImageKind::Ascii => "style",
            ImageKind::Svg | ImageKind::Pixel => "type",
        }
    }

    /// MIME type the payload is stored under. Pixel data is an SVG data URI.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Ascii => "text/plain",
            ImageKind::Svg | ImageKind::Pixel => "image/svg+xml",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageKind {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ascii" => Ok(ImageKind::Ascii),
            "svg" => Ok(ImageKind::Svg),
            "pixel" => Ok(ImageKind::Pixel),
            other => Err(ArtError::UnknownKind(other.to_string())),
        }
    }
}

/// The immutable result of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    kind: ImageKind,
    data: String,
    parameters: serde_json::Value,
    rendered_at: DateTime<Utc>,
}

impl GeneratedImage {
    pub(crate) fn new(kind: ImageKind, data: String, parameters: serde_json::Value) -> Self {
        Self {
            kind,
            data,
            parameters,
            rendered_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    /// Text for ascii, markup for svg, a data URI for pixel
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn parameters(&self) -> &serde_json::Value {
        &self.parameters
    }

    pub fn rendered_at(&self) -> DateTime<Utc> {
        self.rendered_at
    }

    pub fn into_data(self) -> String {
        self.data
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
