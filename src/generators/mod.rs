pub mod ascii;
pub mod pixel;
pub mod svg;

use crate::{
    config::EngineConfig,
    error::Result,
    logger,
    models::{BorderStyle, GeneratedImage, ImageKind, ImageRequest},
};
use rand::Rng;
use serde_json::Value;
use std::sync::Arc;

pub use ascii::AsciiGenerator;
pub use pixel::PixelGenerator;
pub use svg::{AvatarIdentity, SvgGenerator};

/// Routes image requests to the ascii, svg and pixel generators.
///
/// The engine holds only immutable configuration, so one instance can be
/// cloned or shared across threads freely.
#[derive(Clone)]
pub struct ImageEngine {
    config: Arc<EngineConfig>,
    ascii_generator: AsciiGenerator,
    svg_generator: SvgGenerator,
    pixel_generator: PixelGenerator,
}

impl Default for ImageEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ImageEngine {
    pub fn new(config: EngineConfig) -> Self {
        let config = Arc::new(config);
        Self {
            ascii_generator: AsciiGenerator::new(config.clone()),
            svg_generator: SvgGenerator::new(config.clone()),
            pixel_generator: PixelGenerator::new(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn ascii(&self) -> &AsciiGenerator {
        &self.ascii_generator
    }

    pub fn svg(&self) -> &SvgGenerator {
        &self.svg_generator
    }

    pub fn pixel(&self) -> &PixelGenerator {
        &self.pixel_generator
    }

    /// Every routable `(kind, discriminator, description)` triple
    pub fn supported_styles() -> Vec<(ImageKind, &'static str, &'static str)> {
        [ImageKind::Ascii, ImageKind::Svg, ImageKind::Pixel]
            .into_iter()
            .flat_map(|kind| {
                ImageRequest::styles(kind)
                    .iter()
                    .map(move |(style, description)| (kind, *style, *description))
            })
            .collect()
    }

    /// Generate an artifact from a loosely typed parameter bag.
    ///
    /// Unknown kinds and discriminators yield the fallback artifact; an `Err`
    /// means a recognized operation was given invalid parameters.
    pub fn generate(&self, kind: &str, parameters: Value) -> Result<GeneratedImage> {
        self.generate_with_rng(kind, parameters, &mut rand::rng())
    }

    /// Like [`generate`](Self::generate), drawing randomized content from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        kind: &str,
        parameters: Value,
        rng: &mut R,
    ) -> Result<GeneratedImage> {
        let request = match ImageRequest::route(kind, &parameters) {
            Ok(Some(request)) => request,
            Ok(None) => {
                log::warn!(
                    "No renderer for kind '{}' with parameters {}, using fallback",
                    kind,
                    parameters
                );
                return Ok(self.fallback(parameters));
            }
            Err(e) => {
                log::warn!("Rejected {} request: {}", kind, e);
                return Err(e);
            }
        };

        let data = self.render_data(&request, rng).map_err(|e| {
            log::warn!("Rejected {} request: {}", kind, e);
            e
        })?;
        Ok(GeneratedImage::new(request.kind(), data, parameters))
    }

    /// Render an already typed request. The echoed parameters are its serialized form.
    pub fn render(&self, request: &ImageRequest) -> Result<GeneratedImage> {
        self.render_with_rng(request, &mut rand::rng())
    }

    pub fn render_with_rng<R: Rng + ?Sized>(
        &self,
        request: &ImageRequest,
        rng: &mut R,
    ) -> Result<GeneratedImage> {
        let parameters = match request {
            ImageRequest::Ascii(r) => serde_json::to_value(r)?,
            ImageRequest::Svg(r) => serde_json::to_value(r)?,
            ImageRequest::Pixel(r) => serde_json::to_value(r)?,
        };
        let data = self.render_data(request, rng)?;
        Ok(GeneratedImage::new(request.kind(), data, parameters))
    }

    /// Identicon for a profile page. Always the same markup for the same name.
    pub fn avatar(&self, name: &str) -> Result<GeneratedImage> {
        let data = self.svg_generator.avatar(name)?;
        Ok(GeneratedImage::new(
            ImageKind::Svg,
            data,
            serde_json::json!({ "type": "avatar", "name": name }),
        ))
    }

    /// Double-bordered greeting returned for unroutable requests. Cannot fail.
    pub fn fallback(&self, parameters: Value) -> GeneratedImage {
        let data = self
            .ascii_generator
            .border(&self.config.fallback_text, BorderStyle::Double);
        GeneratedImage::new(ImageKind::Ascii, data, parameters)
    }

    fn render_data<R: Rng + ?Sized>(
        &self,
        request: &ImageRequest,
        rng: &mut R,
    ) -> Result<String> {
        let _timer = logger::timer(&format!("render {}", request.kind()));
        log::debug!("Dispatching {:?}", request);

        match request {
            ImageRequest::Ascii(r) => self.ascii_generator.render(r),
            ImageRequest::Svg(r) => self.svg_generator.render(r, rng),
            ImageRequest::Pixel(r) => self.pixel_generator.render(r, rng),
        }
    }
}
