//! Shader geometry structures

pub mod dimension;
pub mod coordinate;
pub mod clipvertex;
pub mod screenvertex;

pub use self::dimension::{Dimensions, HasDimensions};
pub use self::coordinate::Coordinate;
pub use self::clipvertex::ClipVertex;
pub use self::screenvertex::{Axis, ScreenVertex};
