//! Simulating agents on bandit testbeds
mod curve;
mod episodes;
mod experiment;

pub use curve::RewardCurve;
pub use episodes::{run_agent, run_episode, EpisodeSummary};
pub use experiment::{run_experiment, run_experiment_parallel, ExperimentConfig};

use crate::agents::BuildAgentError;
use crate::envs::BuildEnvError;
use crate::logging::LogError;
use crate::render::RenderError;
use thiserror::Error;

/// Error initializing or running an experiment.
#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("error building agent")]
    BuildAgent(#[from] BuildAgentError),
    #[error("error building environment")]
    BuildEnv(#[from] BuildEnvError),
    #[error("error logging statistics")]
    Log(#[from] LogError),
    #[error("error rendering results")]
    Render(#[from] RenderError),
    #[error("the experiment has no agents")]
    EmptyExperiment,
}
