use crate::utils::stats::OnlineMeanVariance;
use serde::{Deserialize, Serialize};

/// Per-time-step reward statistics of one agent, averaged across episodes.
///
/// Each time step keeps a running mean over episodes, updated incrementally:
/// after the first episode it is exactly that episode's reward and after episode `j`
/// (zero-based) it is the mean of the `j + 1` rewards seen at that step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardCurve {
    /// Display name of the agent that produced this curve.
    pub name: String,
    rewards: Vec<OnlineMeanVariance<f64>>,
    optimal_counts: Vec<u64>,
    num_episodes: u64,
}

impl RewardCurve {
    pub fn new(name: String, num_steps: usize) -> Self {
        Self {
            name,
            rewards: vec![OnlineMeanVariance::new(); num_steps],
            optimal_counts: vec![0; num_steps],
            num_episodes: 0,
        }
    }

    /// Number of time steps per episode.
    pub fn num_steps(&self) -> usize {
        self.rewards.len()
    }

    /// Number of completed episodes.
    pub const fn num_episodes(&self) -> u64 {
        self.num_episodes
    }

    /// Record the reward received at time step `step` of the current episode.
    ///
    /// # Args
    /// * `step` - Zero-based time step within the episode.
    /// * `reward` - The reward received.
    /// * `optimal` - Whether the action taken was the environment's optimal action.
    pub fn record(&mut self, step: usize, reward: f64, optimal: bool) {
        self.rewards[step].push(reward);
        if optimal {
            self.optimal_counts[step] += 1;
        }
    }

    /// Mark the end of an episode.
    pub fn end_episode(&mut self) {
        self.num_episodes += 1;
    }

    /// Average reward at a time step, if any reward has been recorded for it.
    pub fn average_reward(&self, step: usize) -> Option<f64> {
        self.rewards.get(step).and_then(OnlineMeanVariance::mean)
    }

    /// Fraction of completed episodes in which the optimal action was taken at each time step.
    pub fn optimal_action_fractions(&self) -> Vec<f64> {
        let episodes = self.num_episodes.max(1) as f64;
        self.optimal_counts
            .iter()
            .map(|&count| count as f64 / episodes)
            .collect()
    }

    /// `(time_step, average_reward)` pairs with time steps numbered from 1.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.rewards
            .iter()
            .enumerate()
            .filter_map(|(i, stats)| stats.mean().map(|mean| (i + 1, mean)))
    }

    /// Mean of the average reward over all time steps.
    pub fn overall_average_reward(&self) -> Option<f64> {
        let stats: OnlineMeanVariance<f64> = self.points().map(|(_, reward)| reward).collect();
        stats.mean()
    }
}
