//! Error type
use crate::agents::BuildAgentError;
use crate::envs::BuildEnvError;
use crate::logging::LogError;
use crate::render::RenderError;
use crate::simulation::SimulatorError;
use thiserror::Error;

/// Error from the bandit testbed crate.
#[derive(Error, Debug)]
pub enum TestbedError {
    #[error("error building agent")]
    BuildAgent(#[from] BuildAgentError),
    #[error("error building environment")]
    BuildEnv(#[from] BuildEnvError),
    #[error("error logging statistics")]
    Log(#[from] LogError),
    #[error("error rendering results")]
    Render(#[from] RenderError),
    #[error("error running experiment")]
    Simulation(#[from] SimulatorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_simulator_error() {
        let err: TestbedError = SimulatorError::EmptyExperiment.into();
        assert!(matches!(
            err,
            TestbedError::Simulation(SimulatorError::EmptyExperiment)
        ));
        assert_eq!(err.to_string(), "error running experiment");
    }

    #[test]
    fn from_build_error() {
        let err: TestbedError = BuildAgentError::NoActions.into();
        assert!(matches!(err, TestbedError::BuildAgent(_)));
    }
}
