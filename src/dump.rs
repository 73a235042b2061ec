//! Human readable listing of every node of a tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Quadrant, Quadtree};

/// Number format used by [`TreeDump`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Two decimals, e.g. `12.50`.
    #[default]
    Fixed,
    /// Two decimals in scientific notation, e.g. `1.25e1`.
    Scientific,
}

/// Displays a tree one node per line, indented by level.
///
/// Subnodes are listed as NE, NW, SE, SW (see [`Quadrant::LISTING_ORDER`]),
/// which differs from the NE, SE, SW, NW order of [`Quadtree::nodes`].
///
/// ```text
/// [ depth 0 root: (0.33, 0.33) m: 3.00 ]
///   [ depth 1 NE: (1.00, 0.00) m: 1.00 ]
/// ```
pub struct TreeDump<'a> {
    tree: &'a Quadtree,
    notation: Notation,
}

impl<'a> TreeDump<'a> {
    #[must_use]
    pub fn new(tree: &'a Quadtree, notation: Notation) -> Self {
        Self { tree, notation }
    }
}

impl Quadtree {
    #[must_use]
    pub fn dump(&self, notation: Notation) -> TreeDump<'_> {
        TreeDump::new(self, notation)
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tree.is_empty() {
            return writeln!(f, "Empty tree");
        }

        for node in self.tree.nodes_in(Quadrant::LISTING_ORDER) {
            let indent = 2 * node.level as usize;
            let label = node.quadrant.map_or("root", |q| q.label());
            let (x, y, m) = (node.position.x, node.position.y, node.mass);
            write!(f, "{:indent$}[ depth {} {label}: ", "", node.level)?;
            match self.notation {
                Notation::Fixed => writeln!(f, "({x:.2}, {y:.2}) m: {m:.2} ]")?,
                Notation::Scientific => writeln!(f, "({x:.2e}, {y:.2e}) m: {m:.2e} ]")?,
            }
        }

        Ok(())
    }
}
