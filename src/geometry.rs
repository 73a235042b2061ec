use nalgebra::Vector2;

use crate::QuadtreeError;

/// One of the four sub-quadrants of a square, split at its center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NE,
    SE,
    SW,
    NW,
}

impl Quadrant {
    /// All quadrants in traversal order.
    pub const ALL: [Quadrant; 4] = [Quadrant::NE, Quadrant::SE, Quadrant::SW, Quadrant::NW];
    /// Order in which tree listings visit subnodes.
    pub const LISTING_ORDER: [Quadrant; 4] =
        [Quadrant::NE, Quadrant::NW, Quadrant::SE, Quadrant::SW];

    /// Classify `position` relative to `center`.
    ///
    /// Ties on x go west, ties on y go north. Tree shapes depend on this rule.
    #[must_use]
    pub fn of(position: &Vector2<f64>, center: &Vector2<f64>) -> Self {
        if position.x > center.x {
            if position.y >= center.y {
                Quadrant::NE
            } else {
                Quadrant::SE
            }
        } else if position.y < center.y {
            Quadrant::SW
        } else {
            Quadrant::NW
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Quadrant::NE => 0,
            Quadrant::SE => 1,
            Quadrant::SW => 2,
            Quadrant::NW => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::NE => "NE",
            Quadrant::SE => "SE",
            Quadrant::SW => "SW",
            Quadrant::NW => "NW",
        }
    }

    fn sign(self) -> Vector2<f64> {
        match self {
            Quadrant::NE => Vector2::new(1., 1.),
            Quadrant::SE => Vector2::new(1., -1.),
            Quadrant::SW => Vector2::new(-1., -1.),
            Quadrant::NW => Vector2::new(-1., 1.),
        }
    }
}

/// The square universe centered at the origin.
///
/// Nodes don't store their bounds. Every walk derives a node's center and
/// extent from the half-width, the node's level (root = 0) and the quadrant path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    half_width: f64,
}

impl Geometry {
    pub fn new(half_width: f64) -> Result<Self, QuadtreeError> {
        if !half_width.is_finite() || half_width <= 0. {
            return Err(QuadtreeError::InvalidHalfWidth(half_width));
        }
        Ok(Self { half_width })
    }

    /// Half-width of the universe.
    #[must_use]
    pub fn universe(&self) -> f64 {
        self.half_width
    }

    /// Half-width of a quadrant at `level`.
    #[must_use]
    pub fn half_width(&self, level: u32) -> f64 {
        // powers of two are exact, so all walks agree bit for bit
        self.half_width / 2f64.powi(level as i32)
    }

    /// Center of the `quadrant` child of the node at `level` centered at `center`.
    #[must_use]
    pub fn child_center(
        &self,
        center: &Vector2<f64>,
        level: u32,
        quadrant: Quadrant,
    ) -> Vector2<f64> {
        let offset = self.half_width(level + 1);
        center + quadrant.sign() * offset
    }

    #[must_use]
    pub fn contains(&self, position: &Vector2<f64>) -> bool {
        position.x.abs() <= self.half_width && position.y.abs() <= self.half_width
    }
}
