//! Benchmark `Agent::choose_action` and `Agent::learn` for the bandit agents.
use bandit_testbed::agents::{
    Agent, BanditAgentConfig, BuildAgent, EpsilonGreedyAgentConfig, GreedyAgentConfig,
    OptimisticGreedyAgentConfig,
};
use bandit_testbed::envs::{BuildEnv, Environment, GaussianBanditConfig};
use bandit_testbed::simulation::{run_episode, RewardCurve};
use bandit_testbed::Prng;
use criterion::{
    criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, Criterion,
};
use rand::SeedableRng;

/// Benchmark one choose-pull-learn step of an agent on a 10-armed Gaussian bandit.
fn benchmark_agent_step<M, TC>(group: &mut BenchmarkGroup<M>, name: &str, agent_config: &TC)
where
    M: Measurement,
    TC: BuildAgent,
{
    let mut rng = Prng::seed_from_u64(0);

    let env = GaussianBanditConfig::default().build_env(&mut rng).unwrap();
    let mut agent = agent_config.build_agent(&env, &mut rng).unwrap();
    group.bench_function(name, |b| {
        b.iter(|| {
            let action = agent.choose_action();
            // Pulling is included; it is a single normal sample.
            let observation = env.pull(action, &mut rng);
            agent.learn(observation);
        })
    });
}

fn bench_agents_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("agents_step");
    benchmark_agent_step(&mut group, "greedy", &GreedyAgentConfig);
    benchmark_agent_step(
        &mut group,
        "optimistic_greedy",
        &OptimisticGreedyAgentConfig::default(),
    );
    benchmark_agent_step(
        &mut group,
        "epsilon_greedy",
        &EpsilonGreedyAgentConfig::default(),
    );
    benchmark_agent_step(
        &mut group,
        "bandit_agent_epsilon_greedy",
        &BanditAgentConfig::from(EpsilonGreedyAgentConfig::default()),
    );
}

fn bench_episode(c: &mut Criterion) {
    let mut rng = Prng::seed_from_u64(0);
    let mut env = GaussianBanditConfig::default().build_env(&mut rng).unwrap();
    let mut agent = EpsilonGreedyAgentConfig::default()
        .build_agent(&env, &mut rng)
        .unwrap();
    let mut curve = RewardCurve::new(agent.display_name(), 1000);
    c.bench_function("episode_1000_steps", |b| {
        b.iter(|| {
            env.reset(&mut rng);
            agent.reset();
            run_episode(&env, &mut agent, &mut rng, &mut curve)
        })
    });
}

criterion_group!(benches, bench_agents_step, bench_episode);
criterion_main!(benches);
