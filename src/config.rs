use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Notation, Quadtree, QuadtreeError, DEFAULT_MAX_DEPTH};

/// Settings for building and querying a tree, usually read from a YAML file.
///
/// ```yaml
/// half_width: 1000.0
/// theta: 0.7
/// max_depth: 64
/// notation: scientific
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Half-width of the square universe.
    pub half_width: f64,
    /// Opening angle for force calculations.
    pub theta: f64,
    pub max_depth: u32,
    pub notation: Notation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            half_width: 1.,
            theta: 0.5,
            max_depth: DEFAULT_MAX_DEPTH,
            notation: Notation::Fixed,
        }
    }
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self, QuadtreeError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuadtreeError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// An empty tree with this universe and depth limit.
    pub fn build_tree(&self) -> Result<Quadtree, QuadtreeError> {
        Quadtree::new(self.half_width)?.with_max_depth(self.max_depth)
    }
}
