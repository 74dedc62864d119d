//! Neon Striker - an arcade penalty-kick simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, ball flight, keeper AI)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, DOM/UI, and input wiring are host concerns. The host feeds
//! discrete [`sim::TickInput`] events in, calls [`sim::tick`] once per frame,
//! and reads the full [`sim::GameState`] back out to draw.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Fixed field geometry and capacity limits
pub mod consts {
    /// Simulation tick rate (matches a 60 Hz display loop)
    pub const TICK_HZ: u32 = 60;

    /// Field dimensions (screen-space units)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Penalty spot - where the ball sits before every shot
    pub const BALL_SPAWN_X: f32 = 400.0;
    pub const BALL_SPAWN_Y: f32 = 500.0;
    pub const BALL_RADIUS: f32 = 15.0;

    /// Goal mouth rectangle
    pub const GOAL_TOP: f32 = 180.0;
    pub const GOAL_LEFT: f32 = 250.0;
    pub const GOAL_RIGHT: f32 = 550.0;
    pub const GOAL_BOTTOM: f32 = 280.0;

    /// Keeper body
    pub const KEEPER_Y: f32 = 230.0;
    pub const KEEPER_WIDTH: f32 = 60.0;
    pub const KEEPER_HEIGHT: f32 = 90.0;

    /// Maximum trail samples kept during a flight
    pub const TRAIL_LENGTH: usize = 15;
    /// Maximum live particles
    pub const MAX_PARTICLES: usize = 256;
}
