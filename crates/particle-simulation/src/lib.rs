//! # Particle Simulation Engine
//!
//! All-pairs N-body gravity on the CPU: a fixed population of particles with
//! one heavy anchor, advanced tick by tick.

pub mod diagnostics;
pub mod error;
pub mod params;
pub mod snapshot;
pub mod system;

pub use error::*;
pub use params::*;
pub use snapshot::*;
pub use system::*;
