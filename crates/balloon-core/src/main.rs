//! Balloon Arena Inspector
//!
//! Builds the scenario from a seed, resets it for a number of episodes, and
//! records every agent's reward and observation at the start of each episode.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use balloon_core::output::{step_records, world_snapshot, RecordWriter};
use balloon_core::{BalloonScenario, Scenario, ScenarioConfig};
use balloon_events::Record;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "balloon_sim")]
#[command(about = "Inspect rewards and observations of the team balloon scenario")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of episodes to reset and record
    #[arg(long, default_value_t = 1)]
    episodes: u64,

    /// Scenario config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write JSONL records to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Use the fixed-width observation layout
    #[arg(long)]
    padded: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ScenarioConfig::load(path)?,
        None => ScenarioConfig::load_or_default(),
    };

    let mut writer = match &args.output {
        Some(path) => RecordWriter::new(path)?,
        None => RecordWriter::null(),
    };

    let mut scenario = BalloonScenario::new(config, args.seed);
    let population = &scenario.config().population;
    tracing::info!(
        seed = args.seed,
        episodes = args.episodes,
        agents = population.num_agents(),
        landmarks = population.num_landmarks,
        "starting balloon scenario"
    );

    let mut world = scenario.make_world();
    world.validate()?;

    for episode in 0..args.episodes {
        if episode > 0 {
            scenario.reset_world(&mut world);
        }

        writer.log(&Record::World(world_snapshot(&world, episode, args.seed)))?;

        for record in step_records(&world, episode, 0, args.padded)? {
            tracing::info!(
                episode,
                agent = %record.agent,
                reward = record.reward,
                obs_len = record.observation.len(),
                peers = record.info.visible_peer_count(),
                obstacles = record.info.visible_obstacle_count(),
                "agent observation"
            );
            writer.log(&Record::Step(record))?;
        }
    }

    writer.flush()?;
    tracing::info!(records = writer.record_count(), "done");

    Ok(())
}
