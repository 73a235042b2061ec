//! Exact pairwise forces, used as a reference for the tree.

use nalgebra::Vector2;

use crate::{gravity, Body};

/// Force on `bodies[index]` from every other body.
///
/// Bodies at the same position as the probe are skipped.
#[must_use]
pub fn force_on(bodies: &[Body], index: usize) -> Vector2<f64> {
    let probe = &bodies[index];
    let mut force = Vector2::zeros();
    for (j, body) in bodies.iter().enumerate() {
        if j == index || body.position == probe.position {
            continue;
        }
        force += gravity::force(probe, body);
    }
    force
}

/// Forces on all bodies.
#[must_use]
pub fn forces(bodies: &[Body]) -> Vec<Vector2<f64>> {
    (0..bodies.len()).map(|i| force_on(bodies, i)).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_ulps_eq;

    use super::*;

    #[test]
    fn symmetry() {
        let bodies = [Body::at(1., 0., 1e6), Body::at(-1., 0., 1e6)];
        let forces = forces(&bodies);

        assert_ulps_eq!(forces[0], -forces[1]);
        assert!(forces[0].x < 0.);
    }

    #[test]
    fn cancellation() {
        let bodies = [
            Body::at(0., 0., 1.),
            Body::at(2., 0., 3.),
            Body::at(-2., 0., 3.),
            Body::at(0., 2., 3.),
            Body::at(0., -2., 3.),
        ];
        assert_eq!(force_on(&bodies, 0), Vector2::zeros());
    }

    #[test]
    fn empty_and_single() {
        assert!(forces(&[]).is_empty());
        assert_eq!(forces(&[Body::at(1., 1., 1.)]), [Vector2::zeros()]);
    }
}
