//! Conserved-quantity monitors for a particle population

use glam::DVec2;
use particle_physics::{pair_potential, Particle};

pub fn kinetic_energy(particles: &[Particle]) -> f64 {
    particles.iter().map(Particle::kinetic_energy).sum()
}

/// Sum of -G m1 m2 / r over unordered pairs
pub fn potential_energy(particles: &[Particle]) -> f64 {
    let mut total = 0.0;
    for (i, p1) in particles.iter().enumerate() {
        for p2 in &particles[i + 1..] {
            total += pair_potential(p1.position(), p1.mass(), p2.position(), p2.mass());
        }
    }
    total
}

pub fn total_energy(particles: &[Particle]) -> f64 {
    kinetic_energy(particles) + potential_energy(particles)
}

pub fn total_momentum(particles: &[Particle]) -> DVec2 {
    particles.iter().map(|p| p.velocity() * p.mass()).sum()
}

/// Mass-weighted mean position, `None` for an empty or massless population
pub fn center_of_mass(particles: &[Particle]) -> Option<DVec2> {
    let mass: f64 = particles.iter().map(Particle::mass).sum();
    if mass <= 0.0 {
        return None;
    }
    let weighted: DVec2 = particles.iter().map(|p| p.position() * p.mass()).sum();
    Some(weighted / mass)
}
