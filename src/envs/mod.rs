//! Bandit environments
mod bandits;
mod builders;
#[cfg(test)]
pub mod testing;

pub use bandits::{DeterministicBandit, GaussianBandit, GaussianBanditConfig};
pub use builders::{BuildEnv, BuildEnvError};

use crate::Prng;
use serde::{Deserialize, Serialize};

/// The outcome of pulling an arm: the arm that was pulled and the sampled reward.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Index of the pulled arm.
    pub action: usize,
    /// The sampled reward.
    pub reward: f64,
}

impl Observation {
    pub const fn new(action: usize, reward: f64) -> Self {
        Self { action, reward }
    }
}

/// A multi-armed bandit environment.
///
/// All randomness is drawn from the `rng` passed to each call;
/// the environment holds no random state of its own.
pub trait Environment {
    /// Number of arms (actions). Fixed at construction.
    fn num_actions(&self) -> usize;

    /// Pull an arm and sample its reward.
    ///
    /// # Panics
    /// If `action >= self.num_actions()`.
    /// An out-of-range action is a bug in the caller's action selection.
    fn pull(&self, action: usize, rng: &mut Prng) -> Observation;

    /// Start a new bandit problem.
    fn reset(&mut self, rng: &mut Prng);

    /// The action with the highest expected reward. Ties resolve to the lowest index.
    fn optimal_action(&self) -> usize;
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn num_actions(&self) -> usize {
        E::num_actions(self)
    }
    fn pull(&self, action: usize, rng: &mut Prng) -> Observation {
        E::pull(self, action, rng)
    }
    fn reset(&mut self, rng: &mut Prng) {
        E::reset(self, rng)
    }
    fn optimal_action(&self) -> usize {
        E::optimal_action(self)
    }
}
