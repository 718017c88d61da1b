//! Epsilon-greedy agent
use super::{Agent, BuildAgent, BuildAgentError, ValueEstimates};
use crate::envs::Environment;
use crate::Prng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration of an [`EpsilonGreedyAgent`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpsilonGreedyAgentConfig {
    /// Probability of taking a uniformly random action.
    pub exploration_rate: f64,
}

impl EpsilonGreedyAgentConfig {
    pub const fn new(exploration_rate: f64) -> Self {
        Self { exploration_rate }
    }
}

impl Default for EpsilonGreedyAgentConfig {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl BuildAgent for EpsilonGreedyAgentConfig {
    type Agent = EpsilonGreedyAgent;

    fn build_agent<E: Environment + ?Sized>(
        &self,
        env: &E,
        rng: &mut Prng,
    ) -> Result<Self::Agent, BuildAgentError> {
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            return Err(BuildAgentError::InvalidExplorationRate(
                self.exploration_rate,
            ));
        }
        match env.num_actions() {
            0 => Err(BuildAgentError::NoActions),
            num_actions => Ok(EpsilonGreedyAgent::new(
                num_actions,
                self.exploration_rate,
                Prng::seed_from_u64(rng.gen()),
            )),
        }
    }
}

/// A greedy agent that takes a uniformly random action with a fixed probability.
#[derive(Debug, Clone)]
pub struct EpsilonGreedyAgent {
    /// Probability of taking a uniformly random action. Not affected by `reset`.
    pub exploration_rate: f64,
    estimates: ValueEstimates,
    rng: Prng,
}

impl EpsilonGreedyAgent {
    pub fn new(num_actions: usize, exploration_rate: f64, rng: Prng) -> Self {
        Self::from_estimates(
            ValueEstimates::new(num_actions, 0.0),
            exploration_rate,
            rng,
        )
    }

    /// Create an agent from existing estimates.
    pub fn from_estimates(
        estimates: ValueEstimates,
        exploration_rate: f64,
        rng: Prng,
    ) -> Self {
        Self {
            exploration_rate,
            estimates,
            rng,
        }
    }
}

impl fmt::Display for EpsilonGreedyAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Epsilon Greedy, e = {:?}", self.exploration_rate)
    }
}

impl Agent for EpsilonGreedyAgent {
    fn estimates(&self) -> &ValueEstimates {
        &self.estimates
    }

    fn estimates_mut(&mut self) -> &mut ValueEstimates {
        &mut self.estimates
    }

    fn reset(&mut self) {
        self.estimates.reset(0.0);
    }

    fn choose_action(&mut self) -> usize {
        if self.rng.gen::<f64>() < self.exploration_rate {
            self.rng.gen_range(0..self.estimates.num_actions())
        } else {
            self.estimates.greedy_action()
        }
    }
}
