//! Point-mass particle with a per-tick acceleration accumulator

use crate::constants::{ANCHOR_MASS, DEFAULT_MASS};
use crate::forces::gravitational_acceleration;
use glam::DVec2;

/// A point mass in the plane.
///
/// `ax`/`ay` only ever hold contributions accumulated during the current
/// tick: they start at zero, grow through [`Particle::add_force`] and are
/// cleared by [`Particle::integrate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    ax: f64,
    ay: f64,
    mass: f64,
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Particle {
    /// Particle at rest at `(x, y)` with the default mass
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            ax: 0.0,
            ay: 0.0,
            mass: DEFAULT_MASS,
        }
    }

    /// The heavy body sitting at rest at the origin
    pub fn anchor() -> Self {
        Self::new(0.0, 0.0).with_mass(ANCHOR_MASS)
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.vx, self.vy)
    }

    /// Acceleration accumulated so far in this tick
    pub fn acceleration(&self) -> DVec2 {
        DVec2::new(self.ax, self.ay)
    }

    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        self.vx = vx;
        self.vy = vy;
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity().length_squared()
    }

    /// Accumulate the pull of `other` on this particle.
    ///
    /// `other` must not sit at the same position: the kernel is unsoftened
    /// and a zero separation (including `other` being this very particle)
    /// writes non-finite values into the accumulator.
    pub fn add_force(&mut self, other: &Particle) {
        let a = gravitational_acceleration(self.position(), other.position(), other.mass);
        self.ax += a.x;
        self.ay += a.y;
    }

    /// Accumulate the pull of each particle on the other from a single
    /// kernel evaluation (equal and opposite forces).
    ///
    /// Same zero-separation hazard as [`Particle::add_force`].
    pub fn add_mutual_force(&mut self, other: &mut Particle) {
        // acceleration per unit source mass
        let g = gravitational_acceleration(self.position(), other.position(), 1.0);
        self.ax += g.x * other.mass;
        self.ay += g.y * other.mass;
        other.ax -= g.x * self.mass;
        other.ay -= g.y * self.mass;
    }

    /// Semi-implicit Euler step, then clear the accumulator.
    ///
    /// Velocity is advanced first and the new velocity moves the position.
    pub fn integrate(&mut self, dt: f64) {
        self.vx += self.ax * dt;
        self.vy += self.ay * dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.ax = 0.0;
        self.ay = 0.0;
    }
}
