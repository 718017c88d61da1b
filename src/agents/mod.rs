//! Bandit agents
//!
//! Every agent keeps a sample-mean [`ValueEstimates`] per action and differs only in how it
//! initializes the estimates and how it chooses actions from them.
mod builder;
mod epsilon;
mod estimates;
mod greedy;
#[cfg(test)]
pub mod testing;
mod variants;

pub use builder::{BuildAgent, BuildAgentError};
pub use epsilon::{EpsilonGreedyAgent, EpsilonGreedyAgentConfig};
pub use estimates::ValueEstimates;
pub use greedy::{GreedyAgent, GreedyAgentConfig, OptimisticGreedyAgent, OptimisticGreedyAgentConfig};
pub use variants::{BanditAgent, BanditAgentConfig};

use crate::envs::Observation;
use std::fmt;

/// A learning bandit agent.
///
/// The [`Display`](fmt::Display) text is the agent's name, used for labelling results.
pub trait Agent: fmt::Display {
    /// Current value estimates.
    fn estimates(&self) -> &ValueEstimates;

    /// Mutable access to the value estimates.
    fn estimates_mut(&mut self) -> &mut ValueEstimates;

    /// Reset the estimates and counts to their initial values.
    ///
    /// Must be called at the start of each new episode.
    fn reset(&mut self);

    /// Choose an action. Greedy with respect to the current estimates by default.
    fn choose_action(&mut self) -> usize {
        self.estimates().greedy_action()
    }

    /// Update the estimates from the result of the most recent action.
    fn learn(&mut self, observation: Observation) {
        self.estimates_mut()
            .update(observation.action, observation.reward)
    }

    /// Name used to label this agent's results.
    fn display_name(&self) -> String {
        self.to_string()
    }
}

impl<T: Agent + ?Sized> Agent for Box<T> {
    fn estimates(&self) -> &ValueEstimates {
        T::estimates(self)
    }
    fn estimates_mut(&mut self) -> &mut ValueEstimates {
        T::estimates_mut(self)
    }
    fn reset(&mut self) {
        T::reset(self)
    }
    fn choose_action(&mut self) -> usize {
        T::choose_action(self)
    }
    fn learn(&mut self, observation: Observation) {
        T::learn(self, observation)
    }
}
