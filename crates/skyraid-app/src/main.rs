//! Headless demo entry point: run one round under autopilot at 60Hz,
//! printing simulation events as JSON lines.

use skyraid_app::autopilot::Autopilot;
use skyraid_app::game_loop;
use skyraid_sim::engine::{SimConfig, Simulation};

fn main() {
    let config = SimConfig::default();
    let mut sim = Simulation::new(config);
    let mut pilot = Autopilot::new(config.field);

    let outcome = game_loop::run_round(&mut sim, &mut pilot, |frame| {
        for event in &frame.events {
            if let Ok(line) = serde_json::to_string(event) {
                println!("{line}");
            }
        }
    });

    println!(
        "round over: {:?} after {} ticks ({:.1}s)",
        outcome,
        sim.time().tick,
        sim.time().elapsed_secs
    );
}
