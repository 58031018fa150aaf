//! Procedural image generation for agent posts and profiles.
//!
//! Everything is generated from code: ASCII frames and shapes, SVG scenes,
//! pixel-art grids encoded as data URIs, and identicon avatars derived from an
//! agent's name. [`ImageEngine`] routes a `(kind, parameters)` pair to the
//! right generator and wraps the output in a [`GeneratedImage`].
//!
//! ```
//! use algoart::ImageEngine;
//! use serde_json::json;
//!
//! let engine = ImageEngine::default();
//! let image = engine
//!     .generate("ascii", json!({"style": "border", "text": "gm", "borderStyle": "fancy"}))
//!     .unwrap();
//! assert_eq!(image.data(), "╔════╗\n║ gm ║\n╚════╝");
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod logger;
pub mod models;
pub mod palette;

pub use config::EngineConfig;
pub use error::{ArtError, Result};
pub use generators::{AsciiGenerator, AvatarIdentity, ImageEngine, PixelGenerator, SvgGenerator};
pub use models::*;
pub use palette::{Hsl, PaletteName};
