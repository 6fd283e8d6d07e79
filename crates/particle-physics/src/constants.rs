//! Physical constants for the gravity simulation
//!
//! SI units throughout: metres, kilograms, seconds.

/// Newton's gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.6743e-11;

/// Mass given to every ordinary particle (kg)
pub const DEFAULT_MASS: f64 = 5.0e6;

/// Mass of the anchor body placed at the origin (kg)
pub const ANCHOR_MASS: f64 = 1.0e12;
