//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Footprint;

/// 2D position in field space (pixels). x = right, y = down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// 2D velocity in pixels per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds at the nominal tick rate.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the nominal tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Play field geometry. Supplied by configuration, never hard-coded
/// in the systems that consult it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Toroidal position normalization into `[0, width) x [0, height)`.
    /// Used only by the player craft.
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    /// Boundary predicate, X axis: is a box of the given footprint,
    /// centered at `pos`, outside `[half_w, width - half_w)`?
    pub fn outside_x(&self, pos: Vec2, footprint: &Footprint) -> bool {
        let half = footprint.half_extents().x;
        pos.x < half || pos.x >= self.width - half
    }

    /// Boundary predicate, Y axis. Independent of the X check.
    pub fn outside_y(&self, pos: Vec2, footprint: &Footprint) -> bool {
        let half = footprint.half_extents().y;
        pos.y < half || pos.y >= self.height - half
    }

    /// True if the box is outside the field on either axis.
    pub fn outside(&self, pos: Vec2, footprint: &Footprint) -> bool {
        self.outside_x(pos, footprint) || self.outside_y(pos, footprint)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(
            crate::constants::FIELD_WIDTH,
            crate::constants::FIELD_HEIGHT,
        )
    }
}

/// Axis-aligned bounding-box intersection on centers and half extents.
/// Touching edges do not count as overlap.
pub fn aabb_overlap(pos_a: Vec2, fp_a: &Footprint, pos_b: Vec2, fp_b: &Footprint) -> bool {
    let span = fp_a.half_extents() + fp_b.half_extents();
    let delta = pos_a - pos_b;
    delta.x.abs() < span.x && delta.y.abs() < span.y
}
