use std::{error::Error, fmt, io};

/// Errors that can occur while building or configuring a [`Quadtree`](crate::Quadtree).
#[derive(Debug)]
pub enum QuadtreeError {
    /// The universe half-width is not a finite, strictly positive number.
    InvalidHalfWidth(f64),
    /// A body's mass is not a finite, strictly positive number.
    InvalidMass(f64),
    /// A body has a non-finite coordinate.
    InvalidPosition { x: f64, y: f64 },
    /// A body lies outside the square universe.
    OutOfBounds { x: f64, y: f64, half_width: f64 },
    /// A body is already stored at exactly this position.
    DuplicatePosition { x: f64, y: f64 },
    /// The depth cap is above [`MAX_DEPTH_LIMIT`](crate::MAX_DEPTH_LIMIT).
    InvalidMaxDepth(u32),
    /// Separating the body from its neighbour would exceed the maximum depth.
    DepthExceeded { max_depth: u32 },
    /// A line could not be read as `"x y m"`.
    ParseBody(String),
    /// The configuration file could not be read.
    Io(io::Error),
    /// The configuration file is not valid YAML for [`Config`](crate::Config).
    Config(serde_yaml::Error),
}

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadtreeError::InvalidHalfWidth(s) => write!(f, "Invalid universe half-width: {s}"),
            QuadtreeError::InvalidMaxDepth(d) => write!(
                f,
                "Invalid maximum depth {d}, at most {} is supported",
                crate::MAX_DEPTH_LIMIT
            ),
            QuadtreeError::InvalidMass(m) => write!(f, "Invalid mass value: {m}"),
            QuadtreeError::InvalidPosition { x, y } => {
                write!(f, "Invalid position: ({x}, {y})")
            }
            QuadtreeError::OutOfBounds { x, y, half_width } => write!(
                f,
                "Position ({x}, {y}) lies outside the universe of half-width {half_width}"
            ),
            QuadtreeError::DuplicatePosition { x, y } => {
                write!(f, "A body is already stored at ({x}, {y})")
            }
            QuadtreeError::DepthExceeded { max_depth } => {
                write!(f, "Insertion would exceed the maximum depth of {max_depth}")
            }
            QuadtreeError::ParseBody(line) => write!(f, "Cannot parse body from {line:?}"),
            QuadtreeError::Io(err) => write!(f, "I/O error: {err}"),
            QuadtreeError::Config(err) => write!(f, "Invalid configuration: {err}"),
        }
    }
}

impl Error for QuadtreeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QuadtreeError::Io(err) => Some(err),
            QuadtreeError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for QuadtreeError {
    fn from(err: io::Error) -> Self {
        QuadtreeError::Io(err)
    }
}

impl From<serde_yaml::Error> for QuadtreeError {
    fn from(err: serde_yaml::Error) -> Self {
        QuadtreeError::Config(err)
    }
}
