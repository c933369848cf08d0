//! Scanline Software Rasterizer in Rust
//!
//! Renders triangles given as homogeneous clip-space positions with per-vertex colors
//! into an RGBA 8-bit framebuffer.
//!
//! ### Example:
//!
//! ```
//! use nalgebra::Vector4;
//! use softraster::{Coordinate, Pipeline};
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.create_framebuffer(4, 4)?;
//!
//! pipeline.attributes_mut().bind_positions(vec![
//!     Vector4::new(-1.0, -1.0, 0.0, 1.0),
//!     Vector4::new(1.0, -1.0, 0.0, 1.0),
//!     Vector4::new(0.0, 1.0, 0.0, 1.0),
//! ]);
//! pipeline.attributes_mut().bind_colors(vec![Vector4::new(1.0, 0.0, 0.0, 1.0); 3]);
//!
//! pipeline.draw_arrays_triangles(0, 3, false)?;
//!
//! let framebuffer = pipeline.framebuffer().unwrap();
//! assert_eq!(framebuffer.pixel(Coordinate::new(1, 1))?, Vector4::new(255, 0, 0, 255));
//! # Ok::<(), softraster::RenderError>(())
//! ```
//!
//! ### Current Features:
//!
//! * Clip-space to screen-space transform with the perspective divide applied to `x` and `y`.
//! * Scanline triangle filling by edge walking, with affine interpolation of depth and color.
//! * Optional depth testing within a draw call, on raw clip-space depth.
//! * Optional sRGB encoding of written colors.
//! * Array and indexed (element) draws.
//! * Line-oriented scene descriptions, see the [`scene`] module.
//! * Built-in compatibility with the `image` crate, using the `image_compat` cargo feature.
//!
//! ### Things it deliberately doesn't do
//!
//! Attributes are not interpolated perspective-correctly, there is no clipping
//! (anything outside of the framebuffer is just not written), no anti-aliasing and no blending.
//! A fragment that passes simply replaces the pixel, whatever its alpha.

pub mod error;
pub mod interpolate;
pub mod geometry;
pub mod color;
pub mod framebuffer;
pub mod pipeline;
pub mod scene;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use error::{RenderError, RenderResult};
pub use geometry::{Axis, ClipVertex, Coordinate, Dimensions, HasDimensions, ScreenVertex};
pub use color::{ColorEncoding, RGBAf64Color, RGBAu8Color};
pub use framebuffer::{DepthBuffer, RenderBuffer};
pub use interpolate::Interpolate;
pub use pipeline::{AttributeStore, DrawRange, Pipeline, RenderState};
pub use pipeline::stages::rasterization::{EdgeWalker, Sample};
pub use scene::{Scene, SceneError};
