use std::str::FromStr;

use nalgebra::Vector2;

use crate::QuadtreeError;

/// A point mass.
///
/// Leaves of the tree store a concrete body, inner nodes store the total mass
/// and the center of mass of everything beneath them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub mass: f64,
    pub position: Vector2<f64>,
}

impl Body {
    #[must_use]
    pub fn new(mass: f64, position: Vector2<f64>) -> Self {
        Self { mass, position }
    }

    #[must_use]
    pub fn at(x: f64, y: f64, mass: f64) -> Self {
        Self::new(mass, Vector2::new(x, y))
    }

    pub(crate) fn empty() -> Self {
        Self::new(0., Vector2::zeros())
    }

    /// Add `other` to this aggregate, updating the total mass and the center of mass.
    ///
    /// The center is updated incrementally as `pos += p * m / M; pos *= M / (M + m)`.
    /// Keep this order, results are compared bit for bit against reference trees.
    pub(crate) fn absorb(&mut self, other: &Body) {
        let mass = self.mass;
        self.position += other.position * other.mass / mass;
        self.position *= mass / (mass + other.mass);
        self.mass += other.mass;
    }
}

impl FromStr for Body {
    type Err = QuadtreeError;

    /// Parse a body from `"x y m"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || QuadtreeError::ParseBody(s.to_owned());

        let values = s
            .split_whitespace()
            .map(|v| v.parse::<f64>().map_err(|_| err()))
            .collect::<Result<Vec<_>, _>>()?;

        match values[..] {
            [x, y, m] => Ok(Body::at(x, y, m)),
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_ulps_eq;

    use super::*;

    #[test]
    fn parse() {
        let body: Body = "400 450 1200".parse().unwrap();
        assert_eq!(body, Body::at(400., 450., 1200.));

        let body: Body = "  -1.5e2\t2.25 3 ".parse().unwrap();
        assert_eq!(body, Body::at(-150., 2.25, 3.));
    }

    #[test]
    fn parse_malformed() {
        assert!("1 2".parse::<Body>().is_err());
        assert!("1 2 3 4".parse::<Body>().is_err());
        assert!("1 two 3".parse::<Body>().is_err());
        assert!("".parse::<Body>().is_err());
    }

    #[test]
    fn absorb() {
        let mut aggregate = Body::at(0., 0., 1.);
        aggregate.absorb(&Body::at(1., 0., 1.));
        aggregate.absorb(&Body::at(0., 1., 1.));

        assert_ulps_eq!(aggregate.mass, 3.);
        assert_ulps_eq!(aggregate.position, Vector2::new(1. / 3., 1. / 3.));
    }

    #[test]
    fn absorb_weighted() {
        let mut aggregate = Body::at(-2., 4., 3.);
        aggregate.absorb(&Body::at(6., 0., 1.));

        assert_ulps_eq!(aggregate.mass, 4.);
        assert_ulps_eq!(aggregate.position, Vector2::new(0., 3.));
    }
}
