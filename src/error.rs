//! Error types for the rasterization pipeline

use thiserror::Error;

use crate::geometry::{Coordinate, Dimensions};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("draw count {0} is not a multiple of 3")]
    InvalidDrawCount(usize),
    #[error("vertex {vertex} has w = 0 and cannot be projected to screen-space")]
    DivideByZero { vertex: usize },
    #[error("vertex index {index} is out of range for {len} bound vertices")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid framebuffer dimensions {}x{}", .0.width, .0.height)]
    InvalidDimensions(Dimensions),
    #[error("no framebuffer has been created")]
    NoFramebuffer,
    #[error("pixel coordinate ({}, {}) is outside the framebuffer", .0.x, .0.y)]
    InvalidPixelCoordinate(Coordinate),
}

pub type RenderResult<T> = Result<T, RenderError>;
