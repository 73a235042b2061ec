mod force;
mod insert;
mod query;

pub use force::ForceEvaluation;

use nalgebra::Vector2;

use crate::{Body, Geometry, Quadrant, QuadtreeError};

/// Default cap on the level of any node in the tree.
pub const DEFAULT_MAX_DEPTH: u32 = 128;
/// Largest accepted depth cap. Beyond it the quadrant half-width of any
/// finite universe underflows to zero.
pub const MAX_DEPTH_LIMIT: u32 = 1100;

type Subnodes = [Node; 4];

/// A node of the quadtree.
///
/// Without subnodes it is either an empty placeholder (zero mass) or a leaf
/// holding one body. With subnodes it is an inner node and `body` is the
/// aggregate of all leaves beneath it. Subnodes are always created four at a time.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    body: Body,
    subnodes: Option<Box<Subnodes>>,
}

impl Node {
    fn leaf(body: Body) -> Self {
        Self {
            body,
            subnodes: None,
        }
    }

    fn placeholder() -> Self {
        Self::leaf(Body::empty())
    }

    /// Subnodes for a leaf holding `previous`, which moves into `quadrant`.
    fn split(previous: Body, quadrant: Quadrant) -> Box<Subnodes> {
        Box::new(std::array::from_fn(|i| {
            if i == quadrant.index() {
                Node::leaf(previous)
            } else {
                Node::placeholder()
            }
        }))
    }

    fn is_placeholder(&self) -> bool {
        self.subnodes.is_none() && self.body.mass == 0.
    }

    fn kind(&self) -> NodeKind {
        if self.subnodes.is_some() {
            NodeKind::Internal
        } else if self.body.mass == 0. {
            NodeKind::Placeholder
        } else {
            NodeKind::Leaf
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Placeholder,
    Leaf,
    Internal,
}

/// Read-only view of a node, as yielded by [`Quadtree::nodes`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeRef {
    /// Level in the tree, the root is at level 0.
    pub level: u32,
    /// Quadrant of the parent this node sits in, `None` for the root.
    pub quadrant: Option<Quadrant>,
    pub kind: NodeKind,
    pub mass: f64,
    pub position: Vector2<f64>,
}

/// A Barnes-Hut quadtree over a square universe centered at the origin.
#[derive(Clone, Debug)]
pub struct Quadtree {
    root: Option<Node>,
    geometry: Geometry,
    max_depth: u32,
    len: usize,
}

impl Quadtree {
    /// Create an empty tree for bodies with `|x|, |y| <= half_width`.
    ///
    /// The half-width is fixed for the lifetime of the tree.
    pub fn new(half_width: f64) -> Result<Self, QuadtreeError> {
        Ok(Self {
            root: None,
            geometry: Geometry::new(half_width)?,
            max_depth: DEFAULT_MAX_DEPTH,
            len: 0,
        })
    }

    /// Limit the level of the deepest node an insertion may create.
    ///
    /// Fails for caps above [`MAX_DEPTH_LIMIT`].
    pub fn with_max_depth(mut self, max_depth: u32) -> Result<Self, QuadtreeError> {
        if max_depth > MAX_DEPTH_LIMIT {
            return Err(QuadtreeError::InvalidMaxDepth(max_depth));
        }
        self.max_depth = max_depth;
        Ok(self)
    }

    /// Build a tree from `bodies`, stopping at the first rejected body.
    pub fn from_bodies(
        half_width: f64,
        bodies: impl IntoIterator<Item = Body>,
    ) -> Result<Self, QuadtreeError> {
        let mut tree = Self::new(half_width)?;
        for body in bodies {
            tree.insert(body)?;
        }
        Ok(tree)
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Number of stored bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all bodies. The half-width and maximum depth are kept.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    #[must_use]
    pub fn total_mass(&self) -> f64 {
        self.root.as_ref().map_or(0., |root| root.body.mass)
    }

    /// Center of mass of all stored bodies, `None` for an empty tree.
    #[must_use]
    pub fn center_of_mass(&self) -> Option<Vector2<f64>> {
        self.root.as_ref().map(|root| root.body.position)
    }

    /// Level of the deepest node, `None` for an empty tree.
    #[must_use]
    pub fn depth(&self) -> Option<u32> {
        self.nodes().map(|node| node.level).max()
    }

    /// Iterate over all nodes in pre-order, visiting subnodes as NE, SE, SW, NW.
    pub fn nodes(&self) -> Nodes<'_> {
        self.nodes_in(Quadrant::ALL)
    }

    /// Same as [`nodes`](Self::nodes), visiting subnodes in `order`.
    pub fn nodes_in(&self, order: [Quadrant; 4]) -> Nodes<'_> {
        Nodes {
            order,
            stack: self
                .root
                .as_ref()
                .map(|root| (root, 0, None))
                .into_iter()
                .collect(),
        }
    }

    /// Iterate over all stored bodies.
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.nodes()
            .filter(|node| node.kind == NodeKind::Leaf)
            .map(|node| Body::new(node.mass, node.position))
    }
}

/// Pre-order iterator over the nodes of a [`Quadtree`].
pub struct Nodes<'a> {
    order: [Quadrant; 4],
    stack: Vec<(&'a Node, u32, Option<Quadrant>)>,
}

impl Iterator for Nodes<'_> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, level, quadrant) = self.stack.pop()?;

        if let Some(subnodes) = node.subnodes.as_deref() {
            for q in self.order.into_iter().rev() {
                self.stack.push((&subnodes[q.index()], level + 1, Some(q)));
            }
        }

        Some(NodeRef {
            level,
            quadrant,
            kind: node.kind(),
            mass: node.body.mass,
            position: node.body.position,
        })
    }
}
