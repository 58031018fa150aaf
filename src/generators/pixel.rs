use crate::{
    config::EngineConfig,
    error::{ArtError, Result},
    generators::svg::{escape_xml, SVG_NS},
    models::{PixelGrid, PixelRequest, PixelStyle},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::Rng;
use std::fmt::Write as _;
use std::sync::Arc;

pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

#[derive(Clone)]
pub struct PixelGenerator {
    config: Arc<EngineConfig>,
}

impl PixelGenerator {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    pub fn render<R: Rng + ?Sized>(
        &self,
        request: &PixelRequest,
        rng: &mut R,
    ) -> Result<String> {
        match request {
            PixelRequest::Grid(params) => {
                let grid = self.generate_grid(
                    params.width.unwrap_or(self.config.grid_width),
                    params.height.unwrap_or(self.config.grid_height),
                    params.style,
                    &params.resolved_colors(),
                    rng,
                )?;
                self.encode(&grid, params.scale.unwrap_or(self.config.pixel_scale))
            }
        }
    }

    /// Only the `noise` style reads from `rng`.
    pub fn generate_grid<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        style: PixelStyle,
        palette: &[String],
        rng: &mut R,
    ) -> Result<PixelGrid> {
        let max = self.config.max_grid_dimension;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(ArtError::validation(format!(
                "grid dimensions must be between 1 and {}, got {}x{}",
                max, width, height
            )));
        }
        let required = if style == PixelStyle::Checker { 2 } else { 1 };
        if palette.len() < required {
            return Err(ArtError::validation(format!(
                "{:?} fill needs at least {} palette colors, got {}",
                style,
                required,
                palette.len()
            )));
        }

        let grid = match style {
            PixelStyle::Noise => PixelGrid::from_fn(width, height, |_, _| {
                palette[rng.random_range(0..palette.len())].clone()
            }),
            PixelStyle::Checker => PixelGrid::from_fn(width, height, |x, y| {
                palette[(x + y) % 2].clone()
            }),
            PixelStyle::Stripes => PixelGrid::from_fn(width, height, |x, y| {
                palette[(x + y) % palette.len()].clone()
            }),
        };
        Ok(grid)
    }

    /// Serialize the grid as one `<rect>` per cell inside an SVG, then as a base64 data URI.
    pub fn encode(&self, grid: &PixelGrid, scale: u32) -> Result<String> {
        if scale == 0 {
            return Err(ArtError::validation("pixel scale must be at least 1"));
        }
        let scale = scale as usize;

        let mut svg = format!(
            r#"<svg xmlns="{}" width="{}" height="{}">"#,
            SVG_NS,
            grid.width() * scale,
            grid.height() * scale
        );
        for (y, row) in grid.rows().enumerate() {
            for (x, color) in row.iter().enumerate() {
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{s}" height="{s}" fill="{}"/>"#,
                    x * scale,
                    y * scale,
                    escape_xml(color),
                    s = scale
                );
            }
        }
        svg.push_str("</svg>");

        log::trace!(
            "Encoded {}x{} grid into {} bytes of markup",
            grid.width(),
            grid.height(),
            svg.len()
        );
        Ok(format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(svg.as_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> PixelGenerator {
        PixelGenerator::new(Arc::new(EngineConfig::default()))
    }

    fn palette(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    fn decode(uri: &str) -> String {
        let encoded = uri.strip_prefix(DATA_URI_PREFIX).unwrap();
        String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn test_checker_parity() {
        let colors = palette(&["#000", "#fff"]);
        let grid = generator()
            .generate_grid(16, 16, PixelStyle::Checker, &colors, &mut rand::rng())
            .unwrap();
        for y in 0..16 {
            for x in 0..16 {
                let expected = if (x + y) % 2 == 0 { "#000" } else { "#fff" };
                assert_eq!(grid.get(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_stripes_cycle() {
        let colors = palette(&["r", "g", "b"]);
        let grid = generator()
            .generate_grid(4, 2, PixelStyle::Stripes, &colors, &mut rand::rng())
            .unwrap();
        let rows: Vec<Vec<&str>> = grid
            .rows()
            .map(|r| r.iter().map(String::as_str).collect())
            .collect();
        assert_eq!(rows, vec![vec!["r", "g", "b", "r"], vec!["g", "b", "r", "g"]]);
    }

    #[test]
    fn test_noise_seeded() {
        let colors = palette(&["a", "b", "c", "d"]);
        let a = generator()
            .generate_grid(8, 8, PixelStyle::Noise, &colors, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let b = generator()
            .generate_grid(8, 8, PixelStyle::Noise, &colors, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(a, b);
        assert!(a.rows().flatten().all(|c| colors.contains(c)));
    }

    #[test]
    fn test_grid_validation() {
        let one = palette(&["#000"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generator()
            .generate_grid(16, 16, PixelStyle::Checker, &one, &mut rng)
            .is_err());
        assert!(generator()
            .generate_grid(16, 16, PixelStyle::Noise, &[], &mut rng)
            .is_err());
        assert!(generator()
            .generate_grid(0, 16, PixelStyle::Stripes, &one, &mut rng)
            .is_err());
        assert!(generator()
            .generate_grid(129, 1, PixelStyle::Stripes, &one, &mut rng)
            .is_err());
    }

    #[test]
    fn test_encode_data_uri() {
        let colors = palette(&["#000", "#fff"]);
        let grid = generator()
            .generate_grid(3, 2, PixelStyle::Checker, &colors, &mut rand::rng())
            .unwrap();
        let uri = generator().encode(&grid, 10).unwrap();
        assert!(uri.starts_with(DATA_URI_PREFIX));

        let svg = decode(&uri);
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="30" height="20">"#
        ));
        assert_eq!(svg.matches("<rect ").count(), 6);
        assert!(svg.contains(r##"<rect x="20" y="10" width="10" height="10" fill="#fff"/>"##));
        assert!(svg.ends_with("</svg>"));
        assert!(generator().encode(&grid, 0).is_err());
    }
}
