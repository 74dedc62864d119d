//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod control;
pub mod resolve;
pub mod state;
pub mod tick;

pub use control::{Sweep, follow};
pub use resolve::resolve_shot;
pub use state::{
    ARENA_PALETTE, Ball, GamePhase, GameState, GoalMouth, Keeper, Message, Outcome, Particle,
    Rgb, Session, TrailPoint,
};
pub use tick::{TickInput, tick};
