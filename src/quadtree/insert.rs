use log::{debug, trace};
use nalgebra::Vector2;

use super::{Node, Quadtree};
use crate::{Body, Geometry, Quadrant, QuadtreeError};

impl Quadtree {
    /// Insert a body.
    ///
    /// On error the tree is left unchanged.
    pub fn insert(&mut self, body: Body) -> Result<(), QuadtreeError> {
        if let Err(err) = self.check_insert(&body) {
            debug!("rejected body {body:?}: {err}");
            return Err(err);
        }

        match &mut self.root {
            Some(root) => insert_unchecked(root, body, &self.geometry),
            None => self.root = Some(Node::leaf(body)),
        }
        self.len += 1;

        Ok(())
    }

    /// Walk the path `body` would take without modifying anything.
    fn check_insert(&self, body: &Body) -> Result<(), QuadtreeError> {
        let Body { mass, position } = *body;
        if !mass.is_finite() || mass <= 0. {
            return Err(QuadtreeError::InvalidMass(mass));
        }
        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(QuadtreeError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }
        if !self.geometry.contains(&position) {
            return Err(QuadtreeError::OutOfBounds {
                x: position.x,
                y: position.y,
                half_width: self.geometry.universe(),
            });
        }

        let Some(mut node) = self.root.as_ref() else {
            return Ok(());
        };
        let mut center = Vector2::zeros();
        let mut level = 0;

        loop {
            match node.subnodes.as_deref() {
                Some(subnodes) => {
                    let quadrant = Quadrant::of(&position, &center);
                    center = self.geometry.child_center(&center, level, quadrant);
                    level += 1;
                    node = &subnodes[quadrant.index()];
                }
                None if node.is_placeholder() => return Ok(()),
                None => {
                    return self.check_separation(&node.body.position, &position, center, level)
                }
            }
        }
    }

    /// Make sure the leaf at `existing` can be split until `position` lands in
    /// a different subnode, without exceeding the maximum depth.
    fn check_separation(
        &self,
        existing: &Vector2<f64>,
        position: &Vector2<f64>,
        mut center: Vector2<f64>,
        mut level: u32,
    ) -> Result<(), QuadtreeError> {
        if existing == position {
            return Err(QuadtreeError::DuplicatePosition {
                x: position.x,
                y: position.y,
            });
        }

        loop {
            // splitting the node at `level` creates subnodes at `level + 1`
            if level >= self.max_depth {
                return Err(QuadtreeError::DepthExceeded {
                    max_depth: self.max_depth,
                });
            }

            let quadrant = Quadrant::of(existing, &center);
            if quadrant != Quadrant::of(position, &center) {
                return Ok(());
            }
            center = self.geometry.child_center(&center, level, quadrant);
            level += 1;
        }
    }
}

/// Place `body` below `root`, splitting leaves as needed.
///
/// Every inner node on the way absorbs the body into its aggregate.
fn insert_unchecked(root: &mut Node, body: Body, geometry: &Geometry) {
    let mut node = root;
    let mut center = Vector2::zeros();
    let mut level = 0;

    loop {
        if node.is_placeholder() {
            *node = Node::leaf(body);
            return;
        }

        let previous = node.body;
        let subnodes = node.subnodes.get_or_insert_with(|| {
            trace!("splitting leaf at level {level}");
            Node::split(previous, Quadrant::of(&previous.position, &center))
        });
        node.body.absorb(&body);

        let quadrant = Quadrant::of(&body.position, &center);
        center = geometry.child_center(&center, level, quadrant);
        level += 1;
        node = &mut subnodes[quadrant.index()];
    }
}
