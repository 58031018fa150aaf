use super::ascii::{BorderParams, BorderStyle, MosaicParams, ShapeKind, ShapeParams, TextArtParams};
use super::common::ImageKind;
use super::pixel::{GridParams, PixelStyle};
use super::svg::{AvatarParams, GradientParams, LandscapeParams, PatternKind, PatternParams, SunPosition};
use crate::error::{ArtError, Result};
use crate::palette::PaletteName;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Discriminator value and a one-line description of what it renders
pub type StyleInfo = (&'static str, &'static str);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style")]
pub enum AsciiRequest {
    #[serde(rename = "border")]
    Border(BorderParams),
    #[serde(rename = "textArt")]
    TextArt(TextArtParams),
    #[serde(rename = "shape")]
    Shape(ShapeParams),
    #[serde(rename = "mosaic")]
    Mosaic(MosaicParams),
}

impl AsciiRequest {
    pub const STYLES: &'static [StyleInfo] = &[
        ("border", "Text framed in a simple, double or fancy border"),
        ("textArt", "Text in a fixed-size decorative frame"),
        ("shape", "Box, diamond or cross rasterized to block glyphs"),
        ("mosaic", "Grid of glyph cells joined by a separator"),
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SvgRequest {
    Gradient(GradientParams),
    Landscape(LandscapeParams),
    Pattern(PatternParams),
    Avatar(AvatarParams),
}

impl SvgRequest {
    pub const STYLES: &'static [StyleInfo] = &[
        ("gradient", "Linear gradient over evenly spaced color stops"),
        ("landscape", "Sky, sun, randomized mountain range and ground"),
        ("pattern", "Grid, dots or waves motif over a two-color palette"),
        ("avatar", "Deterministic identicon derived from an agent name"),
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PixelRequest {
    #[serde(rename = "16x16")]
    Grid(GridParams),
}

impl PixelRequest {
    pub const STYLES: &'static [StyleInfo] = &[(
        "16x16",
        "Pixel grid (noise, checker or stripes) as a base64 SVG data URI",
    )];
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageRequest {
    Ascii(AsciiRequest),
    Svg(SvgRequest),
    Pixel(PixelRequest),
}

impl ImageRequest {
    pub fn kind(&self) -> ImageKind {
        match self {
            ImageRequest::Ascii(_) => ImageKind::Ascii,
            ImageRequest::Svg(_) => ImageKind::Svg,
            ImageRequest::Pixel(_) => ImageKind::Pixel,
        }
    }

    /// Operations routable within `kind`, by discriminator value
    pub fn styles(kind: ImageKind) -> &'static [StyleInfo] {
        match kind {
            ImageKind::Ascii => AsciiRequest::STYLES,
            ImageKind::Svg => SvgRequest::STYLES,
            ImageKind::Pixel => PixelRequest::STYLES,
        }
    }

    /// Resolve a loosely typed parameter bag into a typed request.
    ///
    /// Returns `Ok(None)` when the kind or its discriminator matches nothing,
    /// and a validation error when the operation is known but its parameters
    /// are missing or malformed.
    pub fn route(kind: &str, params: &serde_json::Value) -> Result<Option<Self>> {
        let kind = match kind.parse::<ImageKind>() {
            Ok(kind) => kind,
            Err(_) => return Ok(None),
        };

        let style = params
            .get(kind.discriminator_key())
            .and_then(|v| v.as_str());
        let style = match style {
            Some(style) if Self::styles(kind).iter().any(|(name, _)| *name == style) => style,
            _ => return Ok(None),
        };
        check_selectors(kind, style, params)?;

        let request = match kind {
            ImageKind::Ascii => ImageRequest::Ascii(parse_params(kind, params)?),
            ImageKind::Svg => ImageRequest::Svg(parse_params(kind, params)?),
            ImageKind::Pixel => ImageRequest::Pixel(parse_params(kind, params)?),
        };
        Ok(Some(request))
    }
}

/// Selector fields inside a known operation, checked before the full parse so
/// an unknown value surfaces as `UnknownStyle` rather than a generic validation error.
fn check_selectors(kind: ImageKind, style: &str, params: &serde_json::Value) -> Result<()> {
    let selector = |field: &str| params.get(field).and_then(|v| v.as_str());

    match (kind, style) {
        (ImageKind::Ascii, "border") => {
            if let Some(value) = selector("borderStyle") {
                BorderStyle::from_str(value)?;
            }
        }
        (ImageKind::Ascii, "shape") => {
            if let Some(value) = selector("shape") {
                ShapeKind::from_str(value)?;
            }
        }
        (ImageKind::Svg, "landscape") => {
            if let Some(value) = selector("sunPosition") {
                SunPosition::from_str(value)?;
            }
        }
        (ImageKind::Svg, "pattern") => {
            if let Some(value) = selector("pattern") {
                PatternKind::from_str(value)?;
            }
        }
        (ImageKind::Pixel, _) => {
            if let Some(value) = selector("style") {
                PixelStyle::from_str(value)?;
            }
            if let Some(value) = selector("palette") {
                PaletteName::from_str(value)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn parse_params<T: DeserializeOwned>(kind: ImageKind, params: &serde_json::Value) -> Result<T> {
    serde_json::from_value(params.clone())
        .map_err(|e| ArtError::validation(format!("invalid {} parameters: {}", kind, e)))
}
