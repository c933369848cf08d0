pub mod edge;
pub mod point;
pub mod triangle;

use crate::color::ColorEncoding;
use crate::geometry::Dimensions;

/// Per-draw parameters shared by all rasterization routines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterArguments {
    pub dimensions: Dimensions,
    pub color_encoding: ColorEncoding,
}

pub use self::edge::{EdgeWalker, Sample};
pub use self::triangle::rasterize_triangle;
pub use self::point::rasterize_point;
