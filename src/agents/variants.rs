//! Agent variants selected at run time
use super::{
    Agent, BuildAgent, BuildAgentError, EpsilonGreedyAgent, EpsilonGreedyAgentConfig,
    GreedyAgent, GreedyAgentConfig, OptimisticGreedyAgent, OptimisticGreedyAgentConfig,
    ValueEstimates,
};
use crate::envs::Environment;
use crate::Prng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration of any of the bandit agents.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum BanditAgentConfig {
    Greedy(GreedyAgentConfig),
    OptimisticGreedy(OptimisticGreedyAgentConfig),
    EpsilonGreedy(EpsilonGreedyAgentConfig),
}

impl Default for BanditAgentConfig {
    fn default() -> Self {
        Self::Greedy(GreedyAgentConfig)
    }
}

impl From<GreedyAgentConfig> for BanditAgentConfig {
    fn from(config: GreedyAgentConfig) -> Self {
        Self::Greedy(config)
    }
}

impl From<OptimisticGreedyAgentConfig> for BanditAgentConfig {
    fn from(config: OptimisticGreedyAgentConfig) -> Self {
        Self::OptimisticGreedy(config)
    }
}

impl From<EpsilonGreedyAgentConfig> for BanditAgentConfig {
    fn from(config: EpsilonGreedyAgentConfig) -> Self {
        Self::EpsilonGreedy(config)
    }
}

impl BuildAgent for BanditAgentConfig {
    type Agent = BanditAgent;

    fn build_agent<E: Environment + ?Sized>(
        &self,
        env: &E,
        rng: &mut Prng,
    ) -> Result<Self::Agent, BuildAgentError> {
        Ok(match self {
            Self::Greedy(config) => BanditAgent::Greedy(config.build_agent(env, rng)?),
            Self::OptimisticGreedy(config) => {
                BanditAgent::OptimisticGreedy(config.build_agent(env, rng)?)
            }
            Self::EpsilonGreedy(config) => {
                BanditAgent::EpsilonGreedy(config.build_agent(env, rng)?)
            }
        })
    }
}

/// Any of the bandit agents.
#[derive(Debug, Clone)]
pub enum BanditAgent {
    Greedy(GreedyAgent),
    OptimisticGreedy(OptimisticGreedyAgent),
    EpsilonGreedy(EpsilonGreedyAgent),
}

impl fmt::Display for BanditAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Greedy(agent) => fmt::Display::fmt(agent, f),
            Self::OptimisticGreedy(agent) => fmt::Display::fmt(agent, f),
            Self::EpsilonGreedy(agent) => fmt::Display::fmt(agent, f),
        }
    }
}

impl Agent for BanditAgent {
    fn estimates(&self) -> &ValueEstimates {
        match self {
            Self::Greedy(agent) => agent.estimates(),
            Self::OptimisticGreedy(agent) => agent.estimates(),
            Self::EpsilonGreedy(agent) => agent.estimates(),
        }
    }

    fn estimates_mut(&mut self) -> &mut ValueEstimates {
        match self {
            Self::Greedy(agent) => agent.estimates_mut(),
            Self::OptimisticGreedy(agent) => agent.estimates_mut(),
            Self::EpsilonGreedy(agent) => agent.estimates_mut(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Greedy(agent) => agent.reset(),
            Self::OptimisticGreedy(agent) => agent.reset(),
            Self::EpsilonGreedy(agent) => agent.reset(),
        }
    }

    fn choose_action(&mut self) -> usize {
        match self {
            Self::Greedy(agent) => agent.choose_action(),
            Self::OptimisticGreedy(agent) => agent.choose_action(),
            Self::EpsilonGreedy(agent) => agent.choose_action(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envs::{DeterministicBandit, Observation};
    use rand::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case(GreedyAgentConfig.into(), "Greedy Agent")]
    #[case(OptimisticGreedyAgentConfig::default().into(), "Optimistic Greedy Agent")]
    #[case(EpsilonGreedyAgentConfig::new(0.01).into(), "Epsilon Greedy, e = 0.01")]
    fn build_display_name(#[case] config: BanditAgentConfig, #[case] expected: &str) {
        let env = DeterministicBandit::from_values([0.0, 1.0, 2.0]);
        let agent = config
            .build_agent(&env, &mut Prng::seed_from_u64(0))
            .unwrap();
        assert_eq!(agent.display_name(), expected);
        assert_eq!(agent.estimates().num_actions(), 3);
    }

    #[test]
    fn build_error_propagates() {
        let env = DeterministicBandit::from_values([0.0, 1.0]);
        let config: BanditAgentConfig = EpsilonGreedyAgentConfig::new(2.0).into();
        assert!(matches!(
            config.build_agent(&env, &mut Prng::seed_from_u64(0)),
            Err(BuildAgentError::InvalidExplorationRate(_))
        ));
    }

    #[test]
    fn dispatch_matches_inner() {
        let mut inner = OptimisticGreedyAgent::new(3, 5.0);
        let mut agent = BanditAgent::OptimisticGreedy(inner.clone());
        for reward in [-1.0, 2.0, 0.5, 7.0, -3.0] {
            let action = agent.choose_action();
            assert_eq!(action, inner.choose_action());
            agent.learn(Observation::new(action, reward));
            inner.learn(Observation::new(action, reward));
        }
        assert_eq!(agent.estimates(), inner.estimates());
        agent.reset();
        assert_eq!(agent.estimates(), &ValueEstimates::new(3, 5.0));
    }

    #[test]
    fn deserialize_config() {
        let configs: Vec<BanditAgentConfig> = serde_json::from_str(
            r#"[
                {"Greedy": null},
                {"OptimisticGreedy": {"initial_value": 5.0}},
                {"EpsilonGreedy": {"exploration_rate": 0.1}}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            configs,
            vec![
                BanditAgentConfig::Greedy(GreedyAgentConfig),
                BanditAgentConfig::OptimisticGreedy(OptimisticGreedyAgentConfig::new(5.0)),
                BanditAgentConfig::EpsilonGreedy(EpsilonGreedyAgentConfig::new(0.1)),
            ]
        );
    }
}
