//! Conversion of framebuffers to `image` buffers, enabled by the `image_compat` feature

use std::path::Path;

use image::error::{ImageError, ImageResult, ParameterError, ParameterErrorKind};
use image::{ImageFormat, RgbaImage};

use crate::framebuffer::RenderBuffer;
use crate::geometry::HasDimensions;

pub trait ImageFramebuffer {
    /// Copy the framebuffer into a new RGBA image. Row zero of the framebuffer becomes row zero of the image.
    fn copy_to_image(&self) -> Option<RgbaImage>;

    /// Encode the framebuffer as a PNG file at `path`
    fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()>;
}

impl ImageFramebuffer for RenderBuffer {
    fn copy_to_image(&self) -> Option<RgbaImage> {
        let dimensions = self.dimensions();

        RgbaImage::from_raw(dimensions.width, dimensions.height, self.to_rgba_bytes())
    }

    fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        match self.copy_to_image() {
            Some(image) => image.save_with_format(path, ImageFormat::Png),
            None => Err(ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::DimensionMismatch))),
        }
    }
}
