//! Agent testing utilities
use super::Agent;
use crate::envs::{DeterministicBandit, Environment, Observation};
use crate::Prng;
use rand::SeedableRng;

/// Check that `learn` keeps each estimate equal to the sample mean of its rewards.
///
/// Action 0 is never updated and must keep its initial value.
pub fn check_learn_sample_mean<A: Agent>(mut agent: A) {
    let num_actions = agent.estimates().num_actions();
    assert!(num_actions >= 2);
    let initial_value = agent.estimates().values()[0];

    let mut history: Vec<Vec<f64>> = vec![Vec::new(); num_actions];
    for i in 0..60_u32 {
        let action = 1 + (i as usize * 7) % (num_actions - 1);
        let reward = f64::from(i).sin() * 3.0 + 0.5;
        agent.learn(Observation::new(action, reward));
        history[action].push(reward);

        let rewards = &history[action];
        let mean = rewards.iter().sum::<f64>() / rewards.len() as f64;
        assert_eq!(agent.estimates().counts()[action], rewards.len() as u64);
        assert!((agent.estimates().values()[action] - mean).abs() < 1e-9);
    }
    assert_eq!(agent.estimates().counts()[0], 0);
    assert_eq!(agent.estimates().values()[0], initial_value);
}

/// Train an agent on a deterministic two-armed bandit then measure how often it picks the better arm.
///
/// The first arm always gives 0 reward and the second 1.
///
/// # Returns
/// The fraction of 1000 evaluation steps (still learning) on which the second arm was chosen.
pub fn train_deterministic_bandit<A: Agent>(mut agent: A, num_train_steps: u64) -> f64 {
    let env = DeterministicBandit::from_values([0.0, 1.0]);
    let mut rng = Prng::seed_from_u64(0);
    agent.reset();

    let mut step = |agent: &mut A| {
        let action = agent.choose_action();
        let observation = env.pull(action, &mut rng);
        agent.learn(observation);
        action
    };

    for _ in 0..num_train_steps {
        step(&mut agent);
    }

    let num_eval_steps = 1000;
    let num_optimal = (0..num_eval_steps)
        .filter(|_| step(&mut agent) == env.optimal_action())
        .count();
    num_optimal as f64 / f64::from(num_eval_steps)
}
