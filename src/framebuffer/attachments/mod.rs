//! Attachments that live alongside the framebuffer for the duration of a draw call

pub mod depth;

pub use self::depth::DepthBuffer;
