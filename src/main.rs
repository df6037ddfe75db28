use arenabot::game::Agent;
use arenabot::planners::heuristic::PolicyConfig;
use arenabot::sim::{DemoArena, LoggingActuator, LoggingSensor};
use dotenv::dotenv;
use std::env;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn get_env_var_i32(key: &str) -> Option<i32> {
    env::var(key).ok().and_then(|val| val.parse::<i32>().ok())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arenabot=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let seed = get_env_var_i32("ARENA_SEED").unwrap_or(7) as u64;
    let targets = get_env_var_i32("ARENA_TARGETS").unwrap_or(4) as usize;
    let ticks = get_env_var_i32("ARENA_TICKS").unwrap_or(6000) as u32;

    tracing::info!(seed, targets, ticks, "starting demo match");

    let mut arena = DemoArena::new(seed, targets, ticks);
    let mut agent = Agent::new(PolicyConfig::default());
    let mut actuator = LoggingActuator::default();
    let mut sensor = LoggingSensor::default();

    while !arena.match_over() {
        let world = arena.snapshot();
        let action = agent.tick(&world, &arena, &mut actuator, &mut sensor);
        arena.step(&action);
    }

    let report = arena.report();
    tracing::info!(
        banked_by_us = report.banked_by_us,
        banked_by_opponent = report.banked_by_opponent,
        loose = report.loose,
        "demo match finished"
    );

    Ok(())
}
