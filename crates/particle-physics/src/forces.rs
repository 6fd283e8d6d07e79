//! Pairwise gravitational interaction
//!
//! NOTE: No softening is applied. Two particles at the same position produce
//! an infinite or NaN acceleration, and that value is propagated unchanged.

use crate::constants::G;
use glam::DVec2;

/// Acceleration felt by a body at `from` due to a body of `mass` at `to`.
///
/// a = G * m / r², directed from `from` towards `to`. The direction is
/// resolved through its polar angle so the components are `a·cos θ` and
/// `a·sin θ`.
pub fn gravitational_acceleration(from: DVec2, to: DVec2, mass: f64) -> DVec2 {
    let delta = to - from;
    let distance = delta.x.hypot(delta.y);
    let direction = delta.y.atan2(delta.x);
    let magnitude = G * mass / (distance * distance);

    DVec2::new(magnitude * direction.cos(), magnitude * direction.sin())
}

/// Gravitational potential energy of a pair, -G * m1 * m2 / r
pub fn pair_potential(p1: DVec2, m1: f64, p2: DVec2, m2: f64) -> f64 {
    -G * m1 * m2 / p1.distance(p2)
}
