//! Simulation constants and tuning parameters.
//!
//! All velocities are in pixels per tick; the core is rate-agnostic and
//! the nominal tick rate only matters to the frame-pacing frontend.

/// Nominal simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Field ---

/// Default play field width in pixels.
pub const FIELD_WIDTH: f32 = 400.0;

/// Default play field height in pixels.
pub const FIELD_HEIGHT: f32 = 300.0;

// --- Player craft ---

pub const PLAYER_HIT_POINTS: i32 = 3;

/// Minimum ticks between player shots.
pub const PLAYER_RELOAD_TICKS: u32 = 8;

/// Magnitude of one directional movement impulse (pixels per tick).
pub const PLAYER_IMPULSE: f32 = 4.0;

pub const PLAYER_WIDTH: f32 = 32.0;
pub const PLAYER_HEIGHT: f32 = 32.0;

/// Player bullet speed, fired straight up (pixels per tick).
pub const PLAYER_BULLET_SPEED: f32 = 8.0;

pub const PLAYER_BULLET_DAMAGE: i32 = 1;

// --- Enemy craft ---

pub const ENEMY_HIT_POINTS: i32 = 2;

/// Minimum ticks between enemy shots.
pub const ENEMY_RELOAD_TICKS: u32 = 45;

/// Per-tick probability that an enemy forms fire intent.
pub const ENEMY_SHOT_CHANCE: f64 = 0.02;

pub const ENEMY_WIDTH: f32 = 32.0;
pub const ENEMY_HEIGHT: f32 = 32.0;

/// Horizontal spawn velocity range (pixels per tick, sign chosen at random).
pub const ENEMY_SPEED_X_MAX: f32 = 2.0;

/// Vertical spawn velocity range (pixels per tick, always downward-capable).
pub const ENEMY_SPEED_Y_MIN: f32 = 0.5;
pub const ENEMY_SPEED_Y_MAX: f32 = 2.0;

/// Enemy bullet speed, fired straight down (pixels per tick).
pub const ENEMY_BULLET_SPEED: f32 = 4.0;

pub const ENEMY_BULLET_DAMAGE: i32 = 1;

// --- Bullets ---

pub const BULLET_WIDTH: f32 = 8.0;
pub const BULLET_HEIGHT: f32 = 8.0;

// --- Spawning ---

/// Total enemies the reserve yields over one round.
pub const ENEMY_RESERVE_TOTAL: u32 = 10;

/// The spawner is resumed only while fewer live enemies than this.
pub const ENEMY_FLOOR: u32 = 3;
