use thiserror::Error;

/// Failures when building a [`crate::ParticleSystem`].
///
/// Only the construction arguments are checked. Non-finite values that
/// arise while stepping (coincident particles, huge time steps) are part of
/// the simulated state and are never reported here.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("placement bounds must be finite and non-negative, got {0}")]
    InvalidBounds(f64),

    #[error("cannot sample placement range: {0}")]
    Sampling(#[from] rand::distr::uniform::Error),
}
