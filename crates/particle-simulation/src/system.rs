//! CPU particle system: ownership of the population and the tick loop
//!
//! NOTE: The anchor is identified by position, it is always the last
//! particle. Nothing can append to or remove from the population after
//! construction (only `&mut [Particle]` is ever handed out), so the last
//! index stays the anchor for the lifetime of the system.

use crate::{ParticleState, SystemError, SystemParams};
use particle_physics::Particle;
use rand::distr::{Distribution, Uniform};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use rayon::prelude::*;

/// A fixed population of point masses under mutual gravity
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    ticks: u64,
    elapsed: f64,
    force_evaluations: u64,
}

impl ParticleSystem {
    /// Build a system of `particle_count` particles.
    ///
    /// `particle_count - 1` particles are placed uniformly in
    /// `[-bounds, bounds]²` (x drawn before y, particle by particle) from a
    /// PCG32 generator seeded with `seed`, then the anchor is appended.
    /// A count of zero still yields the anchor alone.
    pub fn new(particle_count: usize, bounds: f64, seed: u64) -> Result<Self, SystemError> {
        if !bounds.is_finite() || bounds < 0.0 {
            return Err(SystemError::InvalidBounds(bounds));
        }
        if particle_count == 0 {
            log::warn!("particle count 0 requested, building an anchor-only system");
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let placement = Uniform::new_inclusive(-bounds, bounds)?;

        let mut particles = Vec::with_capacity(particle_count.max(1));
        for _ in 0..particle_count.saturating_sub(1) {
            let x = placement.sample(&mut rng);
            let y = placement.sample(&mut rng);
            particles.push(Particle::new(x, y));
        }
        particles.push(Particle::anchor());

        log::debug!(
            "Built particle system: {} particles, bounds {}, seed {}",
            particles.len(),
            bounds,
            seed
        );

        Ok(Self {
            particles,
            ticks: 0,
            elapsed: 0.0,
            force_evaluations: 0,
        })
    }

    pub fn from_params(params: &SystemParams) -> Result<Self, SystemError> {
        Self::new(params.particle_count, params.bounds, params.seed)
    }

    /// Advance one tick: accumulate every ordered pair, then integrate.
    ///
    /// Each pair is evaluated twice, once from either side. This is the
    /// reference path the other update variants are measured against.
    pub fn update(&mut self, dt: f64) {
        let n = self.particles.len();
        let mut evaluations = 0;

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let other = self.particles[j];
                self.particles[i].add_force(&other);
                evaluations += 1;
            }
        }

        self.integrate_all(dt, evaluations);
    }

    /// Same tick as [`ParticleSystem::update`] with the force pass split
    /// across the rayon pool.
    ///
    /// Every worker owns a disjoint slice of accumulators and reads a frozen
    /// copy of the population, so each particle sums its contributions in
    /// the same order as the reference and the result is bit-identical.
    pub fn update_parallel(&mut self, dt: f64) {
        let sources = self.particles.clone();

        let evaluations = self
            .particles
            .par_iter_mut()
            .enumerate()
            .map(|(i, p)| {
                let mut count = 0u64;
                for (j, other) in sources.iter().enumerate() {
                    if i != j {
                        p.add_force(other);
                        count += 1;
                    }
                }
                count
            })
            .sum::<u64>();

        // all workers have joined here
        self.integrate_all(dt, evaluations);
    }

    /// Tick evaluating each unordered pair once and applying equal and
    /// opposite forces. Agrees with [`ParticleSystem::update`] to within
    /// floating-point rounding, not bit for bit.
    pub fn update_symmetric(&mut self, dt: f64) {
        let mut evaluations = 0;

        for i in 0..self.particles.len() {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let p1 = &mut head[i];
            for p2 in tail.iter_mut() {
                p1.add_mutual_force(p2);
                evaluations += 1;
            }
        }

        self.integrate_all(dt, evaluations);
    }

    fn integrate_all(&mut self, dt: f64, evaluations: u64) {
        for p in &mut self.particles {
            p.integrate(dt);
        }

        self.ticks += 1;
        self.elapsed += dt;
        self.force_evaluations += evaluations;

        log::trace!(
            "tick {} (dt {}): {} force evaluations",
            self.ticks,
            dt,
            evaluations
        );
    }

    /// Particles in construction order, anchor last
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to particle state; the population size is fixed
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Always false: construction guarantees the anchor
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn anchor_index(&self) -> usize {
        self.particles.len() - 1
    }

    pub fn anchor(&self) -> &Particle {
        &self.particles[self.anchor_index()]
    }

    /// Number of ticks taken so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time advanced so far (s)
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Cumulative number of pairwise kernel evaluations
    pub fn force_evaluations(&self) -> u64 {
        self.force_evaluations
    }

    pub fn snapshot(&self) -> Vec<ParticleState> {
        self.particles.iter().map(ParticleState::from).collect()
    }
}
