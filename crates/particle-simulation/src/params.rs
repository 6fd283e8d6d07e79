//! Construction parameters for a particle system

/// Seed used when none is given
pub const DEFAULT_SEED: u64 = 1337;

/// Step size used by the driver when none is given (s)
pub const DEFAULT_TIME_DELTA: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemParams {
    /// Total population, anchor included
    pub particle_count: usize,
    /// Half-width of the square `[-bounds, bounds]²` particles are placed in
    pub bounds: f64,
    pub seed: u64,
}

impl Default for SystemParams {
    fn default() -> Self {
        Self {
            particle_count: 100,
            bounds: 100.0,
            seed: DEFAULT_SEED,
        }
    }
}

impl SystemParams {
    pub fn new(particle_count: usize, bounds: f64) -> Self {
        Self {
            particle_count,
            bounds,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
