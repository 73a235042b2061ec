use nalgebra::Vector2;

use super::Quadtree;
use crate::Quadrant;

impl Quadtree {
    /// Mass of the body stored at exactly `position`, if any.
    ///
    /// Follows the single path `position` would be inserted along, so no
    /// sibling subtrees are inspected.
    #[must_use]
    pub fn mass_at(&self, position: &Vector2<f64>) -> Option<f64> {
        let mut node = self.root.as_ref()?;
        let mut center = Vector2::zeros();
        let mut level = 0;

        while let Some(subnodes) = node.subnodes.as_deref() {
            let quadrant = Quadrant::of(position, &center);
            center = self.geometry.child_center(&center, level, quadrant);
            level += 1;
            node = &subnodes[quadrant.index()];
        }

        (!node.is_placeholder() && node.body.position == *position).then_some(node.body.mass)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::Body;

    fn scenario() -> Quadtree {
        Quadtree::from_bodies(
            10.,
            [
                Body::at(0., 0., 1.),
                Body::at(1., 0., 1.),
                Body::at(0., 1., 1.),
            ],
        )
        .unwrap()
    }

    #[test]
    fn exact_lookup() {
        let tree = scenario();
        assert_eq!(tree.mass_at(&Vector2::new(1., 0.)), Some(1.));
        assert_eq!(tree.mass_at(&Vector2::new(0., 0.)), Some(1.));
        assert_eq!(tree.mass_at(&Vector2::new(0., 1.)), Some(1.));
        assert_eq!(tree.mass_at(&Vector2::new(5., 5.)), None);
    }

    #[test]
    fn no_tolerance() {
        let tree = scenario();
        assert_eq!(tree.mass_at(&Vector2::new(1. + f64::EPSILON, 0.)), None);
    }

    #[test]
    fn inner_node_centroid_is_not_a_body() {
        let tree = scenario();
        let centroid = tree.center_of_mass().unwrap();
        assert_eq!(tree.mass_at(&centroid), None);
    }

    #[test]
    fn placeholder_is_not_a_body() {
        // the NW and SW placeholders of the root hold mass 0 at (0, 0)
        let tree = Quadtree::from_bodies(10., [Body::at(1., 1., 2.), Body::at(1., -1., 3.)])
            .unwrap();
        assert_eq!(tree.mass_at(&Vector2::zeros()), None);
        assert_eq!(tree.mass_at(&Vector2::new(-1., -1.)), None);
        assert_eq!(tree.mass_at(&Vector2::new(1., -1.)), Some(3.));
    }

    #[test]
    fn empty_tree() {
        let tree = Quadtree::new(10.).unwrap();
        assert_eq!(tree.mass_at(&Vector2::zeros()), None);
    }

    #[test]
    fn random_lookups() {
        let mut rng = StdRng::seed_from_u64(4);
        let bodies: Vec<_> = (0..300)
            .map(|_| {
                Body::at(
                    rng.gen_range(-50.0..50.0),
                    rng.gen_range(-50.0..50.0),
                    rng.gen_range(1.0..10.0),
                )
            })
            .collect();
        let tree = Quadtree::from_bodies(50., bodies.iter().copied()).unwrap();

        for body in &bodies {
            assert_eq!(tree.mass_at(&body.position), Some(body.mass));
            let shifted = body.position + Vector2::new(1e-9, 0.);
            assert_eq!(tree.mass_at(&shifted), None);
        }
    }
}
