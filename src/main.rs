use bandit_testbed::logging::{ByTime, DisplayLogger};
use bandit_testbed::{run_experiment_parallel, ExperimentConfig, Prng, TestbedError, TextChart};
use rand::SeedableRng;
use std::io;
use std::time::Duration;

const SEED: u64 = 0;

fn main() -> Result<(), TestbedError> {
    let config = ExperimentConfig::default();
    println!("Experiment:\n{:#?}", config);

    let mut rng = Prng::seed_from_u64(SEED);
    let mut logger = DisplayLogger::new(ByTime::new(Duration::from_secs(1)));
    let mut chart = TextChart::new(io::stdout());
    run_experiment_parallel(&config, &mut rng, &mut chart, &mut logger)?;
    Ok(())
}
