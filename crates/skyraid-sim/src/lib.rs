//! SKYRAID simulation engine.
//!
//! A headless, deterministic, single-threaded tick simulation of a
//! vertical shooter round: one player craft, autonomously moving enemy
//! craft, and the bullets both sides fire. The engine owns a hecs world
//! and advances it one discrete step per `tick` call; frame pacing and
//! presentation belong to the frontend.

pub mod engine;
pub mod systems;
pub mod world_setup;
