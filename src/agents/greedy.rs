//! Greedy agents
use super::{Agent, BuildAgent, BuildAgentError, ValueEstimates};
use crate::envs::Environment;
use crate::Prng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration of a [`GreedyAgent`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GreedyAgentConfig;

impl BuildAgent for GreedyAgentConfig {
    type Agent = GreedyAgent;

    fn build_agent<E: Environment + ?Sized>(
        &self,
        env: &E,
        _: &mut Prng,
    ) -> Result<Self::Agent, BuildAgentError> {
        match env.num_actions() {
            0 => Err(BuildAgentError::NoActions),
            num_actions => Ok(GreedyAgent::new(num_actions)),
        }
    }
}

/// An agent that always takes the action with the highest sample-mean reward.
///
/// Estimates start at zero so the agent only ever explores through ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreedyAgent {
    estimates: ValueEstimates,
}

impl GreedyAgent {
    pub fn new(num_actions: usize) -> Self {
        Self {
            estimates: ValueEstimates::new(num_actions, 0.0),
        }
    }

    /// Create an agent from existing estimates.
    pub fn from_estimates(estimates: ValueEstimates) -> Self {
        Self { estimates }
    }
}

impl fmt::Display for GreedyAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Greedy Agent")
    }
}

impl Agent for GreedyAgent {
    fn estimates(&self) -> &ValueEstimates {
        &self.estimates
    }

    fn estimates_mut(&mut self) -> &mut ValueEstimates {
        &mut self.estimates
    }

    fn reset(&mut self) {
        self.estimates.reset(0.0);
    }
}

/// Configuration of an [`OptimisticGreedyAgent`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimisticGreedyAgentConfig {
    /// Initial value estimate of every action.
    ///
    /// Should exceed any plausible true mean so that each action is tried before it is judged.
    pub initial_value: f64,
}

impl OptimisticGreedyAgentConfig {
    pub const fn new(initial_value: f64) -> Self {
        Self { initial_value }
    }
}

impl Default for OptimisticGreedyAgentConfig {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl BuildAgent for OptimisticGreedyAgentConfig {
    type Agent = OptimisticGreedyAgent;

    fn build_agent<E: Environment + ?Sized>(
        &self,
        env: &E,
        _: &mut Prng,
    ) -> Result<Self::Agent, BuildAgentError> {
        if !self.initial_value.is_finite() {
            return Err(BuildAgentError::NonFiniteInitialValue(self.initial_value));
        }
        match env.num_actions() {
            0 => Err(BuildAgentError::NoActions),
            num_actions => Ok(OptimisticGreedyAgent::new(num_actions, self.initial_value)),
        }
    }
}

/// A greedy agent with optimistic initial value estimates.
///
/// Every untried action looks better than any tried one, which forces early exploration
/// without any randomness in action selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimisticGreedyAgent {
    pub initial_value: f64,
    estimates: ValueEstimates,
}

impl OptimisticGreedyAgent {
    pub fn new(num_actions: usize, initial_value: f64) -> Self {
        Self {
            initial_value,
            estimates: ValueEstimates::new(num_actions, initial_value),
        }
    }
}

impl fmt::Display for OptimisticGreedyAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Optimistic Greedy Agent")
    }
}

impl Agent for OptimisticGreedyAgent {
    fn estimates(&self) -> &ValueEstimates {
        &self.estimates
    }

    fn estimates_mut(&mut self) -> &mut ValueEstimates {
        &mut self.estimates
    }

    fn reset(&mut self) {
        self.estimates.reset(self.initial_value);
    }
}
