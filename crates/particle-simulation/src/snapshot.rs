//! Plain-old-data view of the particle population
//!
//! This is everything a renderer or foreign binding needs: position and
//! velocity per particle in stable index order.

use bytemuck::{Pod, Zeroable};
use particle_physics::Particle;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl From<&Particle> for ParticleState {
    fn from(p: &Particle) -> Self {
        Self {
            x: p.x,
            y: p.y,
            vx: p.vx,
            vy: p.vy,
        }
    }
}

/// Reinterpret a snapshot as raw bytes for zero-copy hand-off
pub fn snapshot_bytes(states: &[ParticleState]) -> &[u8] {
    bytemuck::cast_slice(states)
}
