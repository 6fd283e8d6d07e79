//! # Particle Physics
//!
//! Point masses under Newtonian gravity: the particle state, the pairwise
//! gravity kernel and the physical constants shared by the simulation.

pub mod constants;
pub mod forces;
pub mod particle;

pub use constants::*;
pub use forces::*;
pub use particle::*;
