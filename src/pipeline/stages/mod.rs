pub mod rasterization;

pub mod vertex;
pub mod fragment;

pub use self::vertex::{fetch_triangle, DrawRange};
pub use self::fragment::{write_fragment, Fragment};
