//! Framebuffer and per-draw attachments

pub mod renderbuffer;
pub mod attachments;

pub use self::renderbuffer::{RenderBuffer, RenderBufferIter};
pub use self::attachments::DepthBuffer;
