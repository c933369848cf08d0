//! Parsing of individual scene commands

use std::path::PathBuf;
use std::str::FromStr;

use nalgebra::Vector4;
use thiserror::Error;

/// A single parsed line of a scene description.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `png WIDTH HEIGHT FILE`
    Png { width: u32, height: u32, path: PathBuf },
    /// `position SIZE VALUES...`
    Position { size: usize, values: Vec<f64> },
    /// `color SIZE VALUES...`
    Color { size: usize, values: Vec<f64> },
    /// `elements INDICES...`
    Elements(Vec<usize>),
    /// `drawPixels COUNT`
    DrawPixels(usize),
    /// `drawArraysTriangles FIRST COUNT`
    DrawArraysTriangles { first: usize, count: usize },
    /// `drawElementsTriangles COUNT OFFSET`
    DrawElementsTriangles { count: usize, offset: usize },
    /// `depth`
    Depth,
    /// `sRGB`
    Srgb,
    /// Anything else
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("`{command}` is missing its {argument} argument")]
    MissingArgument { command: &'static str, argument: &'static str },
    #[error("`{token}` is not a valid {expected}")]
    InvalidNumber { token: String, expected: &'static str },
    #[error("`{command}` does not support {size} components per vertex")]
    InvalidSize { command: &'static str, size: usize },
}

impl Command {
    /// Parses a line of a scene description.
    ///
    /// Returns `Ok(None)` for blank lines and lines starting with `#`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut args = line.split_whitespace();

        let keyword = match args.next() {
            Some(keyword) => keyword,
            None => return Ok(None),
        };

        let command = match keyword {
            "png" => Command::Png {
                width: number(&mut args, "png", "width")?,
                height: number(&mut args, "png", "height")?,
                path: PathBuf::from(args.next().ok_or(CommandError::MissingArgument { command: "png", argument: "file" })?),
            },
            "position" => {
                let size = number(&mut args, "position", "size")?;

                if !(1..=4).contains(&size) {
                    return Err(CommandError::InvalidSize { command: "position", size });
                }

                Command::Position { size, values: numbers(args)? }
            }
            "color" => {
                let size = number(&mut args, "color", "size")?;

                if !(3..=4).contains(&size) {
                    return Err(CommandError::InvalidSize { command: "color", size });
                }

                Command::Color { size, values: numbers(args)? }
            }
            "elements" => Command::Elements(numbers(args)?),
            "drawPixels" => Command::DrawPixels(number(&mut args, "drawPixels", "count")?),
            "drawArraysTriangles" => Command::DrawArraysTriangles {
                first: number(&mut args, "drawArraysTriangles", "first")?,
                count: number(&mut args, "drawArraysTriangles", "count")?,
            },
            "drawElementsTriangles" => Command::DrawElementsTriangles {
                count: number(&mut args, "drawElementsTriangles", "count")?,
                offset: number(&mut args, "drawElementsTriangles", "offset")?,
            },
            "depth" => Command::Depth,
            "sRGB" => Command::Srgb,
            _ => Command::Unknown(keyword.to_owned()),
        };

        Ok(Some(command))
    }
}

/// Expands packed components of `size` per vertex into full vectors, filling the missing
/// components from `defaults`.
///
/// Returns `None` if the number of values is not a multiple of `size`.
pub fn expand_vertices(size: usize, values: &[f64], defaults: Vector4<f64>) -> Option<Vec<Vector4<f64>>> {
    if size == 0 || size > 4 || values.len() % size != 0 {
        return None;
    }

    Some(values.chunks(size).map(|chunk| {
        let mut vertex = defaults;

        vertex.as_mut_slice()[..size].copy_from_slice(chunk);

        vertex
    }).collect())
}

fn number<'a, T, I>(args: &mut I, command: &'static str, argument: &'static str) -> Result<T, CommandError>
    where T: FromStr, I: Iterator<Item=&'a str> {
    let token = args.next().ok_or(CommandError::MissingArgument { command, argument })?;

    parse_token(token)
}

fn numbers<'a, T, I>(args: I) -> Result<Vec<T>, CommandError>
    where T: FromStr, I: Iterator<Item=&'a str> {
    args.map(parse_token).collect()
}

fn parse_token<T: FromStr>(token: &str) -> Result<T, CommandError> {
    token.parse().map_err(|_| CommandError::InvalidNumber {
        token: token.to_owned(),
        expected: std::any::type_name::<T>(),
    })
}
