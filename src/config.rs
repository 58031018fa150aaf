use std::env;

pub const DEFAULT_FALLBACK_TEXT: &str = "Hello Twitterbot!";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub pixel_scale: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    pub max_grid_dimension: usize,
    pub max_shape_size: usize,
    pub max_mountains: usize,
    pub fallback_text: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            pixel_scale: 10,
            grid_width: 16,
            grid_height: 16,
            max_grid_dimension: 128,
            max_shape_size: 64,
            max_mountains: 32,
            fallback_text: DEFAULT_FALLBACK_TEXT.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `ALGOART_*` variables; anything missing or unparseable keeps its default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        EngineConfig {
            pixel_scale: parse_var("ALGOART_PIXEL_SCALE").unwrap_or(defaults.pixel_scale),
            grid_width: parse_var("ALGOART_GRID_WIDTH").unwrap_or(defaults.grid_width),
            grid_height: parse_var("ALGOART_GRID_HEIGHT").unwrap_or(defaults.grid_height),
            max_grid_dimension: parse_var("ALGOART_MAX_GRID_DIMENSION")
                .unwrap_or(defaults.max_grid_dimension),
            max_shape_size: parse_var("ALGOART_MAX_SHAPE_SIZE")
                .unwrap_or(defaults.max_shape_size),
            max_mountains: parse_var("ALGOART_MAX_MOUNTAINS").unwrap_or(defaults.max_mountains),
            fallback_text: env::var("ALGOART_FALLBACK_TEXT")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.fallback_text),
        }
    }

    pub fn with_pixel_scale(mut self, scale: u32) -> Self {
        self.pixel_scale = scale;
        self
    }

    pub fn with_grid_size(mut self, width: usize, height: usize) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn with_limits(
        mut self,
        max_grid_dimension: usize,
        max_shape_size: usize,
        max_mountains: usize,
    ) -> Self {
        self.max_grid_dimension = max_grid_dimension;
        self.max_shape_size = max_shape_size;
        self.max_mountains = max_mountains;
        self
    }

    pub fn with_fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = text.into();
        self
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
