//! Line-oriented scene descriptions
//!
//! A scene is a text file of commands, one per line, that bind vertex data to a [`Pipeline`],
//! toggle its render state and issue draw calls:
//!
//! ```text
//! png 4 4 triangle.png
//! position 4 -1 -1 0 1   1 -1 0 1   0 1 0 1
//! color 4 1 0 0 1   1 0 0 1   1 0 0 1
//! drawArraysTriangles 0 3
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use nalgebra::Vector4;
use thiserror::Error;

use crate::color::ColorEncoding;
use crate::error::RenderError;
use crate::pipeline::{Pipeline, RenderState};

pub mod command;

pub use self::command::{Command, CommandError};

use self::command::expand_vertices;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: CommandError,
    },
    #[error("line {line}: {source}")]
    Render {
        line: usize,
        #[source]
        source: RenderError,
    },
    #[error("unable to read scene: {0}")]
    Io(#[from] std::io::Error),
}

/// Interprets scene commands against a rendering context.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pipeline: Pipeline,
    output: Option<PathBuf>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    /// Create a scene whose pipeline starts out with the given render state
    pub fn with_state(state: RenderState) -> Scene {
        let mut scene = Scene::new();
        *scene.pipeline.state_mut() = state;
        scene
    }

    /// Read and run the scene file at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
        let source = fs::read_to_string(path)?;

        let mut scene = Scene::new();
        scene.run(&source)?;

        Ok(scene)
    }

    /// Runs every line of the source text in order.
    ///
    /// Stops at the first line that fails. Lines already run keep their effect.
    pub fn run(&mut self, source: &str) -> Result<(), SceneError> {
        for (i, line) in source.lines().enumerate() {
            self.run_line(i + 1, line)?;
        }

        Ok(())
    }

    /// Runs a single line of scene text. `line` is only used for error reporting.
    ///
    /// Some problems are reported with a warning and otherwise ignored, as they would leave the scene
    /// in a consistent state: unknown commands, vertex data that doesn't divide into whole vertices,
    /// and draw counts that are not a multiple of 3.
    pub fn run_line(&mut self, line: usize, text: &str) -> Result<(), SceneError> {
        let command = match Command::parse(text).map_err(|source| SceneError::Parse { line, source })? {
            Some(command) => command,
            None => return Ok(()),
        };

        debug!("line {}: {:?}", line, command);

        let result = match command {
            Command::Png { width, height, path } => {
                self.output = Some(path);
                self.pipeline.create_framebuffer(width, height).map(|_| ())
            }
            Command::Position { size, values } => {
                match expand_vertices(size, &values, Vector4::new(0.0, 0.0, 0.0, 1.0)) {
                    Some(positions) => self.pipeline.attributes_mut().bind_positions(positions),
                    None => warn!("line {}: number of coordinates is not a multiple of {}", line, size),
                }
                Ok(())
            }
            Command::Color { size, values } => {
                match expand_vertices(size, &values, Vector4::new(0.0, 0.0, 0.0, 1.0)) {
                    Some(colors) => self.pipeline.attributes_mut().bind_colors(colors),
                    None => warn!("line {}: number of color values is not a multiple of {}", line, size),
                }
                Ok(())
            }
            Command::Elements(elements) => {
                self.pipeline.attributes_mut().bind_elements(elements);
                Ok(())
            }
            Command::DrawPixels(count) => self.pipeline.draw_pixels(count).map(|_| ()),
            Command::DrawArraysTriangles { first, count } => {
                let depth_test = self.pipeline.state().depth_test;
                self.pipeline.draw_arrays_triangles(first, count, depth_test)
            }
            Command::DrawElementsTriangles { count, offset } => {
                self.pipeline.draw_elements_triangles(count, offset)
            }
            Command::Depth => {
                self.pipeline.state_mut().depth_test = true;
                Ok(())
            }
            Command::Srgb => {
                self.pipeline.state_mut().color_encoding = ColorEncoding::Srgb;
                Ok(())
            }
            Command::Unknown(keyword) => {
                warn!("line {}: `{}` is not a command", line, keyword);
                Ok(())
            }
        };

        match result {
            Err(RenderError::InvalidDrawCount(count)) => {
                warn!("line {}: draw count {} must be divisible by 3, skipping", line, count);
                Ok(())
            }
            Err(source) => Err(SceneError::Render { line, source }),
            Ok(()) => Ok(()),
        }
    }

    /// Output path named by the most recent `png` command
    #[inline]
    pub fn output(&self) -> Option<&Path> { self.output.as_deref() }

    #[inline]
    pub fn pipeline(&self) -> &Pipeline { &self.pipeline }

    #[inline]
    pub fn pipeline_mut(&mut self) -> &mut Pipeline { &mut self.pipeline }
}
