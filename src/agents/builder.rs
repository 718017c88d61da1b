use super::Agent;
use crate::envs::Environment;
use crate::Prng;
use thiserror::Error;

/// Build an agent instance.
pub trait BuildAgent {
    type Agent: Agent;

    /// Build an agent for the given environment.
    ///
    /// # Args
    /// * `env` - The environment in which the agent is to operate.
    ///           Only its structure (number of actions) is used.
    /// * `rng` - Random number generator used to seed the agent's random state,
    ///           for those agents that use pseudo-random action selection.
    fn build_agent<E: Environment + ?Sized>(
        &self,
        env: &E,
        rng: &mut Prng,
    ) -> Result<Self::Agent, BuildAgentError>;
}

/// Error building an agent
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BuildAgentError {
    #[error("the environment has no actions")]
    NoActions,
    #[error("exploration rate {0} is not in [0, 1]")]
    InvalidExplorationRate(f64),
    #[error("initial value {0} is not finite")]
    NonFiniteInitialValue(f64),
}
