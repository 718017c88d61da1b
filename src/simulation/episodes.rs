//! Serial episode simulation.
use super::RewardCurve;
use crate::agents::Agent;
use crate::envs::Environment;
use crate::logging::{LogError, Loggable, StatsLogger};
use crate::Prng;

/// Basic summary statistics of one episode.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct EpisodeSummary {
    pub num_steps: u64,
    /// Number of steps on which the optimal action was taken.
    pub num_optimal: u64,
    pub total_reward: f64,
}

impl EpisodeSummary {
    pub fn push(&mut self, reward: f64, optimal: bool) {
        self.num_steps += 1;
        self.total_reward += reward;
        if optimal {
            self.num_optimal += 1;
        }
    }

    pub fn mean_reward(&self) -> Option<f64> {
        if self.num_steps == 0 {
            None
        } else {
            Some(self.total_reward / self.num_steps as f64)
        }
    }

    pub fn optimal_fraction(&self) -> Option<f64> {
        if self.num_steps == 0 {
            None
        } else {
            Some(self.num_optimal as f64 / self.num_steps as f64)
        }
    }
}

/// Run one episode of `curve.num_steps()` steps, recording each reward into `curve`.
///
/// Each step the agent chooses an action, the environment samples a reward,
/// the reward is accumulated at that step, and the agent learns from it.
/// The environment and agent are not reset; see [`run_agent`].
///
/// # Panics
/// If the agent chooses an action outside the environment's range.
pub fn run_episode<E, A>(
    env: &E,
    agent: &mut A,
    rng: &mut Prng,
    curve: &mut RewardCurve,
) -> EpisodeSummary
where
    E: Environment + ?Sized,
    A: Agent + ?Sized,
{
    let optimal_action = env.optimal_action();
    let mut summary = EpisodeSummary::default();
    for step in 0..curve.num_steps() {
        let action = agent.choose_action();
        let observation = env.pull(action, rng);
        let optimal = action == optimal_action;
        curve.record(step, observation.reward, optimal);
        summary.push(observation.reward, optimal);
        agent.learn(observation);
    }
    curve.end_episode();
    summary
}

/// Run many independent episodes of an agent and collect its reward curve.
///
/// Both the environment and the agent are reset at the start of every episode,
/// so each episode is a fresh bandit problem solved from scratch.
///
/// # Args
/// * `env` - The environment. Reset with `rng` before each episode.
/// * `agent` - The agent. Its name labels the returned curve.
/// * `num_episodes` - Number of episodes to run.
/// * `num_steps` - Number of steps per episode.
/// * `rng` - Source of environment randomness.
/// * `logger` - Receives one group of episode statistics per episode.
pub fn run_agent<E, A, L>(
    env: &mut E,
    agent: &mut A,
    num_episodes: u64,
    num_steps: usize,
    rng: &mut Prng,
    logger: &mut L,
) -> Result<RewardCurve, LogError>
where
    E: Environment + ?Sized,
    A: Agent + ?Sized,
    L: StatsLogger + ?Sized,
{
    let mut curve = RewardCurve::new(agent.display_name(), num_steps);
    for _ in 0..num_episodes {
        env.reset(rng);
        agent.reset();
        let summary = run_episode(env, agent, rng, &mut curve);

        logger.group_start();
        let result = log_episode(logger, &summary);
        logger.group_end();
        result?;
    }
    Ok(curve)
}

fn log_episode<L: StatsLogger + ?Sized>(
    logger: &mut L,
    summary: &EpisodeSummary,
) -> Result<(), LogError> {
    if let Some(mean) = summary.mean_reward() {
        logger.group_log("episode_reward".into(), mean.into())?;
    }
    if let Some(fraction) = summary.optimal_fraction() {
        logger.group_log("optimal_action".into(), fraction.into())?;
    }
    logger.group_log("episode".into(), Loggable::CounterIncrement(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{GreedyAgent, OptimisticGreedyAgent};
    use crate::envs::{DeterministicBandit, GaussianBandit};
    use crate::logging::{ChunkLogger, ChunkSummary, SummaryWriter};
    use crate::envs::Observation;
    use rand::SeedableRng;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    #[test]
    fn episode_on_deterministic_bandit() {
        let env = DeterministicBandit::from_values([0.0, 1.0]);
        let mut agent = OptimisticGreedyAgent::new(2, 5.0);
        let mut rng = Prng::seed_from_u64(0);
        let mut curve = RewardCurve::new(agent.to_string(), 4);
        let summary = run_episode(&env, &mut agent, &mut rng, &mut curve);

        // Both arms are tried once, then arm 1 is exploited.
        let rewards: Vec<_> = curve.points().map(|(_, r)| r).collect();
        assert_eq!(rewards, vec![0.0, 1.0, 1.0, 1.0]);
        assert_eq!(curve.num_episodes(), 1);
        assert_eq!(
            summary,
            EpisodeSummary {
                num_steps: 4,
                num_optimal: 3,
                total_reward: 3.0
            }
        );
        assert_eq!(curve.optimal_action_fractions(), vec![0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn agent_is_reset_each_episode() {
        let mut env = DeterministicBandit::from_values([0.0, 1.0]);
        let mut agent = OptimisticGreedyAgent::new(2, 5.0);
        let mut rng = Prng::seed_from_u64(0);
        let curve = run_agent(&mut env, &mut agent, 3, 2, &mut rng, &mut ()).unwrap();

        // Without a reset the second episode would start by exploiting arm 1.
        let rewards: Vec<_> = curve.points().map(|(_, r)| r).collect();
        assert_eq!(rewards, vec![0.0, 1.0]);
        assert_eq!(curve.num_episodes(), 3);
        assert_eq!(curve.name, "Optimistic Greedy Agent");
    }

    #[test]
    fn curve_length_matches_steps() {
        let mut rng = Prng::seed_from_u64(1);
        let mut env = GaussianBandit::new(10, &mut rng);
        let mut agent = GreedyAgent::new(10);
        let curve = run_agent(&mut env, &mut agent, 5, 37, &mut rng, &mut ()).unwrap();
        assert_eq!(curve.num_steps(), 37);
        assert_eq!(curve.points().count(), 37);
        assert_eq!(curve.num_episodes(), 5);
    }

    #[test]
    fn zero_episodes() {
        let mut rng = Prng::seed_from_u64(1);
        let mut env = GaussianBandit::new(3, &mut rng);
        let mut agent = GreedyAgent::new(3);
        let curve = run_agent(&mut env, &mut agent, 0, 10, &mut rng, &mut ()).unwrap();
        assert_eq!(curve.num_episodes(), 0);
        assert_eq!(curve.points().count(), 0);
    }

    /// Gaussian bandit that records its resets and the arm means seen by each episode.
    struct ResetRecorder {
        inner: GaussianBandit,
        /// Pulls since the last reset.
        pulls: Cell<usize>,
        pulls_before_reset: Vec<usize>,
        means_after_reset: Vec<Vec<f64>>,
        means_at_first_pull: RefCell<Vec<Vec<f64>>>,
    }

    impl ResetRecorder {
        fn new(inner: GaussianBandit) -> Self {
            Self {
                inner,
                pulls: Cell::new(0),
                pulls_before_reset: Vec::new(),
                means_after_reset: Vec::new(),
                means_at_first_pull: RefCell::new(Vec::new()),
            }
        }
    }

    impl Environment for ResetRecorder {
        fn num_actions(&self) -> usize {
            self.inner.num_actions()
        }

        fn pull(&self, action: usize, rng: &mut Prng) -> Observation {
            if self.pulls.get() == 0 {
                self.means_at_first_pull
                    .borrow_mut()
                    .push(self.inner.arm_means().to_vec());
            }
            self.pulls.set(self.pulls.get() + 1);
            self.inner.pull(action, rng)
        }

        fn reset(&mut self, rng: &mut Prng) {
            self.pulls_before_reset.push(self.pulls.replace(0));
            self.inner.reset(rng);
            self.means_after_reset.push(self.inner.arm_means().to_vec());
        }

        fn optimal_action(&self) -> usize {
            self.inner.optimal_action()
        }
    }

    #[test]
    fn env_is_reset_each_episode() {
        let mut rng = Prng::seed_from_u64(2);
        let bandit = GaussianBandit::new(4, &mut rng);
        let initial_means = bandit.arm_means().to_vec();
        let mut env = ResetRecorder::new(bandit);
        let mut agent = GreedyAgent::new(4);
        run_agent(&mut env, &mut agent, 3, 5, &mut rng, &mut ()).unwrap();

        // One reset per episode, each before any of that episode's pulls
        assert_eq!(env.pulls_before_reset, vec![0, 5, 5]);
        assert_eq!(env.pulls.get(), 5);
        assert_eq!(env.means_after_reset.len(), 3);
        assert_eq!(*env.means_at_first_pull.borrow(), env.means_after_reset);

        // Every episode is a new problem
        assert_ne!(env.means_after_reset[0], initial_means);
        assert_ne!(env.means_after_reset[0], env.means_after_reset[1]);
        assert_ne!(env.means_after_reset[1], env.means_after_reset[2]);
    }

    #[derive(Debug, Default)]
    struct Recorder(Vec<(String, ChunkSummary)>);

    impl SummaryWriter for Recorder {
        fn write_summaries<'a, I>(&mut self, summaries: I, _: Duration)
        where
            I: Iterator<Item = (&'a crate::logging::Id, &'a ChunkSummary)>,
        {
            self.0
                .extend(summaries.map(|(id, s)| (id.to_string(), s.clone())));
        }
    }

    #[test]
    fn logs_each_episode() {
        let mut env = DeterministicBandit::from_values([0.0, 1.0]);
        let mut agent = OptimisticGreedyAgent::new(2, 5.0);
        let mut rng = Prng::seed_from_u64(0);
        let mut logger = ChunkLogger::new((), Recorder::default());
        run_agent(&mut env, &mut agent, 4, 4, &mut rng, &mut logger).unwrap();
        logger.flush();

        let written = &logger.writer().0;
        let ids: Vec<_> = written.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["episode", "episode_reward", "optimal_action"]);
        assert_eq!(
            written[0].1,
            ChunkSummary::Counter {
                increment: 4,
                initial_value: 0
            }
        );
        match &written[1].1 {
            ChunkSummary::Scalar { stats } => {
                assert_eq!(stats.count(), 4);
                assert!((stats.mean().unwrap() - 0.75).abs() < 1e-12);
            }
            summary => panic!("unexpected summary {:?}", summary),
        }
    }
}
