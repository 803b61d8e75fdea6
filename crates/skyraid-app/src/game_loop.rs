//! Fixed-rate round driver.
//!
//! Runs the simulation at the nominal tick rate until the round reaches
//! a terminal state. The schedule is Instant-based with a fall-behind
//! reset so a slow frame never triggers a catch-up spiral.

use std::time::{Duration, Instant};

use skyraid_core::commands::Command;
use skyraid_core::constants::TICK_RATE;
use skyraid_core::enums::RoundState;
use skyraid_core::state::FrameSnapshot;
use skyraid_sim::engine::Simulation;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Produces one command per tick, given the previous frame.
pub trait CommandSource {
    fn poll(&mut self, frame: &FrameSnapshot) -> Command;
}

/// Drive one round to completion at the fixed tick rate, invoking
/// `on_frame` with every snapshot. Returns the terminal round state.
pub fn run_round(
    sim: &mut Simulation,
    source: &mut dyn CommandSource,
    mut on_frame: impl FnMut(&FrameSnapshot),
) -> RoundState {
    let mut next_tick_time = Instant::now();
    let mut frame = sim.tick(Command::idle());
    on_frame(&frame);

    while !frame.round.is_terminal() {
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral.
            next_tick_time = now;
        }

        let command = source.poll(&frame);
        frame = sim.tick(command);
        on_frame(&frame);
    }

    frame.round
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyraid_sim::engine::SimConfig;

    struct Idle;

    impl CommandSource for Idle {
        fn poll(&mut self, _frame: &FrameSnapshot) -> Command {
            Command::idle()
        }
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick.
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_run_round_returns_terminal_state() {
        // An empty reserve clears immediately, so the loop exits on the
        // first tick without real-time delay.
        let mut sim = Simulation::new(SimConfig {
            enemy_reserve: 0,
            ..Default::default()
        });

        let mut frames = 0;
        let outcome = run_round(&mut sim, &mut Idle, |_frame| frames += 1);

        assert_eq!(outcome, RoundState::AllEnemiesCleared);
        assert!(frames >= 1);
    }
}
