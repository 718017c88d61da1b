//! Multi-agent testbed experiments.
use super::{run_agent, RewardCurve, SimulatorError};
use crate::agents::{
    Agent, BanditAgent, BanditAgentConfig, BuildAgent, EpsilonGreedyAgentConfig,
    GreedyAgentConfig, OptimisticGreedyAgentConfig,
};
use crate::envs::{BuildEnv, GaussianBandit, GaussianBanditConfig};
use crate::logging::{LogError, StatsLogger};
use crate::render::CurveSink;
use crate::Prng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::panic;

/// Configuration of a testbed experiment: which agents to compare and for how long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Environment built anew for each agent.
    pub env: GaussianBanditConfig,
    /// Agents to compare, in presentation order.
    pub agents: Vec<BanditAgentConfig>,
    /// Number of steps per episode.
    pub num_steps: usize,
    /// Number of episodes averaged per agent.
    pub num_episodes: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            env: GaussianBanditConfig::new(10),
            agents: vec![
                GreedyAgentConfig.into(),
                OptimisticGreedyAgentConfig::new(5.0).into(),
                EpsilonGreedyAgentConfig::new(0.1).into(),
                EpsilonGreedyAgentConfig::new(0.01).into(),
            ],
            num_steps: 1000,
            num_episodes: 2000,
        }
    }
}

/// A built agent together with its own environment and environment random state.
#[derive(Debug, Clone)]
struct AgentRun {
    env: GaussianBandit,
    agent: BanditAgent,
    rng: Prng,
}

impl AgentRun {
    /// Derive per-agent seeds from `rng` then build the environment and agent.
    ///
    /// Consumes the same amount of `rng` regardless of how the run is later executed
    /// so that serial and parallel experiments produce the same curves.
    fn prepare(
        config: &ExperimentConfig,
        agent_config: &BanditAgentConfig,
        rng: &mut Prng,
    ) -> Result<Self, SimulatorError> {
        let mut env_rng = Prng::seed_from_u64(rng.gen());
        let mut agent_rng = Prng::seed_from_u64(rng.gen());
        let env = config.env.build_env(&mut env_rng)?;
        let agent = agent_config.build_agent(&env, &mut agent_rng)?;
        Ok(Self {
            env,
            agent,
            rng: env_rng,
        })
    }

    fn run<L: StatsLogger + ?Sized>(
        mut self,
        config: &ExperimentConfig,
        logger: &mut L,
    ) -> Result<RewardCurve, LogError> {
        run_agent(
            &mut self.env,
            &mut self.agent,
            config.num_episodes,
            config.num_steps,
            &mut self.rng,
            logger,
        )
    }
}

/// Run every configured agent in turn and hand the resulting curves to `sink`.
///
/// # Args
/// * `config` - The experiment configuration.
/// * `rng` - Master random state. Per-agent environment and agent seeds are drawn from it.
/// * `sink` - Receives all curves, in agent order, once every agent has finished.
/// * `logger` - Receives per-episode statistics and a summary of each agent.
///
/// # Returns
/// The reward curves, one per agent in configuration order.
pub fn run_experiment<S, L>(
    config: &ExperimentConfig,
    rng: &mut Prng,
    sink: &mut S,
    logger: &mut L,
) -> Result<Vec<RewardCurve>, SimulatorError>
where
    S: CurveSink + ?Sized,
    L: StatsLogger + ?Sized,
{
    if config.agents.is_empty() {
        return Err(SimulatorError::EmptyExperiment);
    }
    let mut curves = Vec::with_capacity(config.agents.len());
    for agent_config in &config.agents {
        let run = AgentRun::prepare(config, agent_config, rng)?;
        logger.log("agent".into(), run.agent.display_name().into())?;
        let curve = run.run(config, logger)?;
        log_curve_summary(logger, &curve)?;
        logger.flush();
        curves.push(curve);
    }
    sink.render(&curves)?;
    Ok(curves)
}

/// Run every configured agent on its own thread and hand the resulting curves to `sink`.
///
/// Produces the same curves as [`run_experiment`] for the same `rng` state.
/// Worker threads do not log; only the per-agent summaries are logged once all have finished.
pub fn run_experiment_parallel<S, L>(
    config: &ExperimentConfig,
    rng: &mut Prng,
    sink: &mut S,
    logger: &mut L,
) -> Result<Vec<RewardCurve>, SimulatorError>
where
    S: CurveSink + ?Sized,
    L: StatsLogger + ?Sized,
{
    if config.agents.is_empty() {
        return Err(SimulatorError::EmptyExperiment);
    }
    let runs = config
        .agents
        .iter()
        .map(|agent_config| AgentRun::prepare(config, agent_config, rng))
        .collect::<Result<Vec<_>, _>>()?;

    let curves = crossbeam::scope(|scope| {
        let threads: Vec<_> = runs
            .into_iter()
            .map(|run| scope.spawn(move |_scope| run.run(config, &mut ())))
            .collect();
        threads
            .into_iter()
            .map(|t| t.join().unwrap_or_else(|err| panic::resume_unwind(err)))
            .collect::<Result<Vec<_>, _>>()
    })
    .unwrap_or_else(|err| panic::resume_unwind(err))?;

    for curve in &curves {
        logger.log("agent".into(), curve.name.clone().into())?;
        log_curve_summary(logger, curve)?;
        logger.flush();
    }
    sink.render(&curves)?;
    Ok(curves)
}

fn log_curve_summary<L: StatsLogger + ?Sized>(
    logger: &mut L,
    curve: &RewardCurve,
) -> Result<(), LogError> {
    logger.group_start();
    let result = log_curve_stats(logger, curve);
    logger.group_end();
    result
}

fn log_curve_stats<L: StatsLogger + ?Sized>(
    logger: &mut L,
    curve: &RewardCurve,
) -> Result<(), LogError> {
    if let Some(mean) = curve.overall_average_reward() {
        logger.group_log("curve_reward_mean".into(), mean.into())?;
    }
    if let Some(last) = curve.num_steps().checked_sub(1) {
        if let Some(reward) = curve.average_reward(last) {
            logger.group_log("curve_final_reward".into(), reward.into())?;
        }
        let fractions = curve.optimal_action_fractions();
        logger.group_log("curve_final_optimal_action".into(), fractions[last].into())?;
    }
    Ok(())
}
