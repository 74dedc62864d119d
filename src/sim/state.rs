//! Game state and core simulation types
//!
//! Everything the presentation adapter reads lives here. The renderer is a
//! pure consumer of these fields; nothing in this module draws or blocks.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::control::Sweep;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title state, waiting on the begin event
    Start,
    /// Aim angle sweeping, awaiting lock-in
    Aiming,
    /// Power meter sweeping, awaiting lock-in
    Powering,
    /// Ball in flight
    Shooting,
    /// Outcome shown, countdown to the next shot running
    Reset,
    /// Run ended after too many scoreless shots in a row
    GameOver,
}

/// An RGB color (arena palette, particles, banner text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Arena color schemes, advanced every few goals
pub const ARENA_PALETTE: [Rgb; 5] = [
    Rgb::new(0, 255, 255),  // cyan
    Rgb::new(255, 0, 255),  // magenta
    Rgb::new(255, 255, 0),  // yellow
    Rgb::new(0, 255, 0),    // green
    Rgb::new(0, 100, 255),  // blue
];

/// Per-run scoreboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub score: u32,
    pub attempts: u32,
    /// Difficulty tier derived from score, starts at 1
    pub level: u32,
    /// Index into [`ARENA_PALETTE`]
    pub arena_color: usize,
    /// Consecutive shots that did not score
    pub miss_streak: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            attempts: 0,
            level: 1,
            arena_color: 0,
            miss_streak: 0,
        }
    }
}

impl Session {
    /// Recompute level and arena color from the current score
    pub fn recalc_progression(&mut self, tuning: &Tuning) {
        self.level = self.score / tuning.goals_per_level + 1;
        self.arena_color = (self.score / tuning.goals_per_arena) as usize % ARENA_PALETTE.len();
    }

    pub fn palette_color(&self) -> Rgb {
        ARENA_PALETTE[self.arena_color]
    }
}

/// The ball: screen-space position/velocity plus a depth scalar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 on the penalty spot, shrinking toward the goal plane in flight
    pub z: f32,
    pub radius: f32,
}

impl Ball {
    /// A fresh ball on the penalty spot
    pub fn at_spot() -> Self {
        Self {
            pos: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            vel: Vec2::ZERO,
            z: 1.0,
            radius: BALL_RADIUS,
        }
    }

    /// Projected radius for rendering; clamped so it never goes negative
    /// past the goal plane
    pub fn apparent_radius(&self) -> f32 {
        (self.radius * self.z).max(0.0)
    }
}

/// The goal mouth (immutable)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalMouth {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for GoalMouth {
    fn default() -> Self {
        Self {
            top: GOAL_TOP,
            left: GOAL_LEFT,
            right: GOAL_RIGHT,
            bottom: GOAL_BOTTOM,
        }
    }
}

impl GoalMouth {
    /// Strict containment - a ball dead on the post is not a goal
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.left && p.x < self.right && p.y > self.top && p.y < self.bottom
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }
}

/// The keeper: persists across shots, chases a predicted intercept point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keeper {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Predicted intercept point, approached via [`super::control::follow`]
    pub target_x: f32,
    /// Base per-tick convergence fraction toward `target_x`
    pub reaction: f32,
}

impl Keeper {
    pub fn new(reaction: f32) -> Self {
        let x = (GOAL_LEFT + GOAL_RIGHT) / 2.0;
        Self {
            x,
            y: KEEPER_Y,
            width: KEEPER_WIDTH,
            height: KEEPER_HEIGHT,
            target_x: x,
            reaction,
        }
    }

    /// Return to the middle of the goal between shots
    pub fn recenter(&mut self) {
        self.x = (GOAL_LEFT + GOAL_RIGHT) / 2.0;
        self.target_x = self.x;
    }

    /// True if a ball center lands within the body plus outstretched arms
    /// (`arm_reach` per side) and vertical reach
    pub fn blocks(&self, p: Vec2, arm_reach: f32, vertical_reach: f32) -> bool {
        p.x > self.x - self.width / 2.0 - arm_reach
            && p.x < self.x + self.width / 2.0 + arm_reach
            && p.y > self.y - self.height / 2.0 - vertical_reach
            && p.y < self.y + self.height / 2.0 + vertical_reach
    }
}

/// One flight sample for trail rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub z: f32,
}

/// A particle for visual effects; never read by gameplay logic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, removed at 0
    pub life: f32,
    pub color: Rgb,
}

/// How a flight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Saved,
    Goal { perfect: bool },
    Wide,
}

/// Transient outcome banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub color: Rgb,
    /// Extra-glow variant for perfect shots
    pub perfect: bool,
    /// Display ticks remaining
    pub ticks_left: u32,
}

fn fallback_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete simulation state (deterministic, serializable)
///
/// The RNG is `serde(skip)`: a deserialized state gets a fresh stream, which
/// only perturbs particle bursts, never gameplay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub session: Session,
    pub ball: Ball,
    /// Aim angle sweep, bounded around straight-up (-pi/2)
    pub aim: Sweep,
    /// Power meter sweep, bounded to [0, 100]
    pub power: Sweep,
    pub keeper: Keeper,
    pub goal: GoalMouth,
    /// Flight history, oldest first (FIFO, capped at [`TRAIL_LENGTH`])
    pub trail: Vec<TrailPoint>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Latest outcome banner, if one is showing
    pub message: Option<Message>,
    /// How the last flight ended
    pub last_outcome: Option<Outcome>,
    /// Screen shake impulse, decays each tick
    pub screen_shake: f32,
    /// Pending reset countdown in ticks; 0 means no transition armed
    pub reset_ticks: u32,
    pub tuning: Tuning,
    #[serde(skip, default = "fallback_rng")]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new state on the title screen with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new state with a custom balance table
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Start,
            session: Session::default(),
            ball: Ball::at_spot(),
            aim: Self::aim_sweep(&tuning),
            power: Self::power_sweep(&tuning),
            keeper: Keeper::new(tuning.keeper_reaction),
            goal: GoalMouth::default(),
            trail: Vec::with_capacity(TRAIL_LENGTH),
            particles: Vec::new(),
            message: None,
            last_outcome: None,
            screen_shake: 0.0,
            reset_ticks: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn aim_sweep(tuning: &Tuning) -> Sweep {
        Sweep::new(
            -FRAC_PI_2,
            -FRAC_PI_2 - tuning.aim_arc,
            -FRAC_PI_2 + tuning.aim_arc,
            tuning.aim_step,
        )
    }

    fn power_sweep(tuning: &Tuning) -> Sweep {
        Sweep::new(0.0, 0.0, 100.0, tuning.power_step)
    }

    /// Begin a fresh run (the begin and restart events)
    ///
    /// Idempotent: any pending countdown or leftover banner is dropped, so a
    /// restart landing mid-reset reapplies the same defaults harmlessly.
    pub fn start_session(&mut self) {
        self.session = Session::default();
        self.last_outcome = None;
        self.screen_shake = 0.0;
        self.reset_ticks = 0;
        self.keeper = Keeper::new(self.tuning.keeper_reaction);
        self.rearm_shot();
        self.phase = GamePhase::Aiming;
    }

    /// Put the ball back on the spot and rewind both meters for the next shot
    pub fn rearm_shot(&mut self) {
        self.ball = Ball::at_spot();
        self.aim = Self::aim_sweep(&self.tuning);
        self.power = Self::power_sweep(&self.tuning);
        self.trail.clear();
        self.keeper.recenter();
        self.message = None;
    }

    /// Append a flight sample, evicting the oldest past the cap
    pub fn record_trail(&mut self) {
        self.trail.push(TrailPoint {
            pos: self.ball.pos,
            z: self.ball.z,
        });
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.remove(0);
        }
    }

    /// Show a transient banner for the configured display time
    pub fn show_message(&mut self, text: &str, color: Rgb, perfect: bool) {
        self.message = Some(Message {
            text: text.to_string(),
            color,
            perfect,
            ticks_left: self.tuning.message_ticks,
        });
    }

    /// Spawn a decorative burst at `pos`, evicting the oldest particles past
    /// the global cap
    pub fn spawn_burst(&mut self, pos: Vec2, color: Rgb, count: usize) {
        let spread = self.tuning.particle_spread;
        for _ in 0..count {
            if self.particles.len() >= MAX_PARTICLES {
                self.particles.remove(0);
            }
            let vx = (self.rng.random::<f32>() - 0.5) * spread;
            let vy = (self.rng.random::<f32>() - 0.5) * spread;
            self.particles.push(Particle {
                pos,
                vel: Vec2::new(vx, vy),
                life: 1.0,
                color,
            });
        }
    }
}
