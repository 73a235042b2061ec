use nalgebra::Vector2;

use crate::Body;

/// Gravitational coupling constant.
pub const G: f64 = 6.67e-11;

/// Gravitational force exerted on `probe` by `source`.
///
/// Positions must differ.
#[must_use]
pub fn force(probe: &Body, source: &Body) -> Vector2<f64> {
    let r = source.position - probe.position;
    let d = r.norm();
    let f = G * probe.mass * source.mass / d.powi(2);
    r * f / d
}
