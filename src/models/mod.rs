pub mod ascii;
pub mod common;
pub mod pixel;
pub mod request;
pub mod svg;

pub use ascii::*;
pub use common::*;
pub use pixel::*;
pub use request::*;
pub use svg::*;
