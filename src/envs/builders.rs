//! Environment builder traits
use super::Environment;
use crate::Prng;
use thiserror::Error;

/// Build an [`Environment`].
pub trait BuildEnv {
    /// Type of environment to build
    type Environment: Environment;

    /// Build an environment instance.
    ///
    /// # Args
    /// * `rng` - Random number generator for randomness in the environment structure.
    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError>;
}

/// Error building an environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildEnvError {
    #[error("a bandit must have at least one arm")]
    NoArms,
}
