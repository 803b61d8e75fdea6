//! Thin frontend collaborator for the SKYRAID simulation.
//!
//! Hosts everything the core deliberately does not: frame pacing, the
//! key-binding to movement-vector mapping, and a scripted command
//! source for headless demo runs. The simulation itself stays in
//! `skyraid-sim`.

pub mod autopilot;
pub mod game_loop;
pub mod input;
