//! A k-armed bandit testbed.
//!
//! Compares value-estimation agents (greedy, optimistic greedy and epsilon greedy)
//! on randomly drawn Gaussian bandit problems and reports their average reward
//! at each time step.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::for_kv_map)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)] // also triggered by macro expansions
pub mod agents;
pub mod envs;
mod error;
pub mod logging;
pub mod render;
pub mod simulation;
pub mod utils;

pub use agents::{Agent, BuildAgent};
pub use envs::{BuildEnv, Environment, Observation};
pub use error::TestbedError;
pub use render::{CurveSink, TextChart};
pub use simulation::{run_experiment, run_experiment_parallel, ExperimentConfig, RewardCurve};

/// Pseudo-random number generator used throughout the crate.
pub type Prng = rand_chacha::ChaCha8Rng;
