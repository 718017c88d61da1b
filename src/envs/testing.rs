//! Environment testing utilities
use super::Environment;
use crate::Prng;
use rand::{Rng, SeedableRng};

/// Pull random arms of an environment and check that invariants are satisfied.
pub fn check_structure<E: Environment>(mut env: E, num_steps: u64, seed: u64) {
    let mut rng = Prng::seed_from_u64(seed);
    let num_actions = env.num_actions();
    assert!(num_actions > 0);

    for step in 0..num_steps {
        if step % 10 == 0 {
            env.reset(&mut rng);
            assert_eq!(env.num_actions(), num_actions);
        }
        assert!(env.optimal_action() < num_actions);

        let action = rng.gen_range(0..num_actions);
        let observation = env.pull(action, &mut rng);
        assert_eq!(observation.action, action);
        assert!(observation.reward.is_finite());
    }
}
