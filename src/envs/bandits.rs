use super::{BuildEnv, BuildEnvError, Environment, Observation};
use crate::utils::iter::ArgMaxFirst;
use crate::Prng;
use rand::distributions::Distribution;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for a [`GaussianBandit`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GaussianBanditConfig {
    pub num_arms: usize,
}

impl GaussianBanditConfig {
    pub const fn new(num_arms: usize) -> Self {
        Self { num_arms }
    }
}

impl Default for GaussianBanditConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

impl BuildEnv for GaussianBanditConfig {
    type Environment = GaussianBandit;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        if self.num_arms == 0 {
            return Err(BuildEnvError::NoArms);
        }
        Ok(GaussianBandit::new(self.num_arms, rng))
    }
}

/// A multi-armed bandit with unit-variance Gaussian arm rewards.
///
/// Arm means are drawn from a standard normal distribution on construction and
/// redrawn on every [`reset`](Environment::reset), so each episode is a new problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianBandit {
    arm_means: Vec<f64>,
}

impl GaussianBandit {
    pub fn new(num_arms: usize, rng: &mut Prng) -> Self {
        Self {
            arm_means: Distribution::<f64>::sample_iter(StandardNormal, rng)
                .take(num_arms)
                .collect(),
        }
    }

    /// The true mean reward of each arm.
    pub fn arm_means(&self) -> &[f64] {
        &self.arm_means
    }
}

impl fmt::Display for GaussianBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GaussianBandit({})", self.arm_means.len())
    }
}

impl Environment for GaussianBandit {
    fn num_actions(&self) -> usize {
        self.arm_means.len()
    }

    fn pull(&self, action: usize, rng: &mut Prng) -> Observation {
        assert!(
            action < self.arm_means.len(),
            "action {} out of range for a bandit with {} arms",
            action,
            self.arm_means.len()
        );
        let noise: f64 = StandardNormal.sample(rng);
        Observation::new(action, self.arm_means[action] + noise)
    }

    fn reset(&mut self, rng: &mut Prng) {
        for mean in &mut self.arm_means {
            *mean = StandardNormal.sample(rng);
        }
    }

    fn optimal_action(&self) -> usize {
        self.arm_means.iter().argmax_first().unwrap_or(0)
    }
}

/// A multi-armed bandit where each arm always gives the same reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeterministicBandit {
    values: Vec<f64>,
}

impl DeterministicBandit {
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl fmt::Display for DeterministicBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DeterministicBandit({:?})", self.values)
    }
}

impl BuildEnv for DeterministicBandit {
    type Environment = Self;

    fn build_env(&self, _: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        if self.values.is_empty() {
            return Err(BuildEnvError::NoArms);
        }
        Ok(self.clone())
    }
}

impl Environment for DeterministicBandit {
    fn num_actions(&self) -> usize {
        self.values.len()
    }

    fn pull(&self, action: usize, _: &mut Prng) -> Observation {
        assert!(
            action < self.values.len(),
            "action {} out of range for a bandit with {} arms",
            action,
            self.values.len()
        );
        Observation::new(action, self.values[action])
    }

    fn reset(&mut self, _: &mut Prng) {}

    fn optimal_action(&self) -> usize {
        self.values.iter().argmax_first().unwrap_or(0)
    }
}
