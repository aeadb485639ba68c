//! Robot maze quickstart: carve a seeded maze and let a random-retry
//! robot wander to the goal.
//!
//! Demonstrates:
//!   1. Building a MazeConfig
//!   2. Creating a Simulation that shares one RNG between generation
//!      and the strategy
//!   3. Rendering the maze and observing every move
//!
//! Run with:
//!   RUST_LOG=debug cargo run -p robot-maze-engine --example quickstart

use robot_maze_engine::{render, MazeConfig, RandomRetry, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = MazeConfig {
        width: 10,
        height: 10,
        seed: 2024,
        max_steps: Some(1_000_000),
    };
    let mut sim = Simulation::new(config, RandomRetry::new)?;

    println!("{}", render(sim.navigator().grid()));
    if let Some(report) = sim.report() {
        println!(
            "opened {}/{} cells, goal at {}",
            report.opened_count(),
            report.total_cells(),
            report.goal
        );
    }

    let summary = sim.run_observed(|nav| println!("{}", nav.readout()))?;
    println!("Goal! {} moves.", summary.steps);
    Ok(())
}
