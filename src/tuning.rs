//! Data-driven game balance
//!
//! Every gameplay scalar lives here so balance passes never touch sim code.
//! `Default` gives the shipped values; a partial table can also be loaded
//! from JSON and any omitted field falls back to its default.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_HZ;

/// Gameplay balance table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Aim sweep ===
    /// Angular step per tick (radians)
    pub aim_step: f32,
    /// Maximum deviation from straight-up (radians)
    pub aim_arc: f32,

    // === Power sweep ===
    /// Meter step per tick (meter runs 0-100)
    pub power_step: f32,

    // === Launch ===
    /// Speed at zero power
    pub base_speed: f32,
    /// Extra speed at full power
    pub power_speed_bonus: f32,
    /// Horizontal velocity multiplier (perspective foreshortening)
    pub lateral_dampen: f32,

    // === Flight ===
    /// Depth lost per tick (z starts at 1.0 on the spot)
    pub depth_decay: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Depth at which the flight resolves
    pub goal_plane_z: f32,

    // === Keeper ===
    /// Base per-tick convergence fraction toward the intercept point
    pub keeper_reaction: f32,
    /// Ticks of linear extrapolation when predicting the landing x
    pub keeper_lookahead: f32,
    /// Extra reaction per level
    pub keeper_level_gain: f32,
    /// Idle sway frequency (radians of phase per tick)
    pub keeper_sway_rate: f32,
    /// Idle sway amplitude per tick
    pub keeper_sway_amplitude: f32,
    /// Extra sway amplitude per level
    pub keeper_sway_level_gain: f32,
    /// Horizontal pad on each side of the body (outstretched arms)
    pub keeper_arm_reach: f32,
    /// Vertical pad above and below the body
    pub keeper_vertical_reach: f32,

    // === Scoring ===
    /// Perfect-shot zone: within this distance of the crossbar
    pub perfect_corner_depth: f32,
    /// Perfect-shot zone: within this distance of either post
    pub perfect_post_margin: f32,
    /// Perfect shots also require the meter above this
    pub perfect_min_power: f32,
    /// Goals per difficulty level
    pub goals_per_level: u32,
    /// Goals per arena color change
    pub goals_per_arena: u32,
    /// Consecutive scoreless shots that end the run (0 disables game over)
    pub miss_streak_limit: u32,

    // === Timers ===
    /// Delay between outcome and the next shot (ticks)
    pub reset_delay_ticks: u32,
    /// Outcome banner display time (ticks)
    pub message_ticks: u32,

    // === Feedback ===
    /// Screen shake impulse on a save
    pub shake_save: f32,
    /// Screen shake impulse on a goal
    pub shake_goal: f32,
    /// Particle burst sizes per outcome
    pub burst_save: usize,
    pub burst_goal: usize,
    pub burst_perfect: usize,
    pub burst_miss: usize,
    /// Burst velocity range (each axis drawn from ±spread/2)
    pub particle_spread: f32,
    /// Particle life lost per tick (life starts at 1.0)
    pub particle_decay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            aim_step: 0.03,
            aim_arc: 0.6,

            power_step: 2.0,

            base_speed: 15.0,
            power_speed_bonus: 15.0,
            lateral_dampen: 0.5,

            depth_decay: 0.015,
            gravity: 0.2,
            goal_plane_z: 0.5,

            keeper_reaction: 0.1,
            keeper_lookahead: 10.0,
            keeper_level_gain: 0.05,
            keeper_sway_rate: 0.055,
            keeper_sway_amplitude: 1.5,
            keeper_sway_level_gain: 0.1,
            keeper_arm_reach: 15.0,
            keeper_vertical_reach: 10.0,

            perfect_corner_depth: 30.0,
            perfect_post_margin: 50.0,
            perfect_min_power: 80.0,
            goals_per_level: 3,
            goals_per_arena: 5,
            miss_streak_limit: 3,

            reset_delay_ticks: 2 * TICK_HZ,
            message_ticks: 3 * TICK_HZ / 2,

            shake_save: 15.0,
            shake_goal: 25.0,
            burst_save: 40,
            burst_goal: 50,
            burst_perfect: 60,
            burst_miss: 20,
            particle_spread: 15.0,
            particle_decay: 0.02,
        }
    }
}

impl Tuning {
    /// Load a (possibly partial) tuning table from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Launch speed for a given power meter value
    #[inline]
    pub fn launch_speed(&self, power: f32) -> f32 {
        self.base_speed + (power / 100.0) * self.power_speed_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_speed_range() {
        let t = Tuning::default();
        assert!((t.launch_speed(0.0) - 15.0).abs() < 1e-6);
        assert!((t.launch_speed(100.0) - 30.0).abs() < 1e-6);
        assert!((t.launch_speed(50.0) - 22.5).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.25, "miss_streak_limit": 5 }"#).unwrap();
        assert!((t.gravity - 0.25).abs() < 1e-6);
        assert_eq!(t.miss_streak_limit, 5);
        // Untouched fields stay at shipped values
        assert!((t.aim_step - 0.03).abs() < 1e-6);
        assert_eq!(t.reset_delay_ticks, 120);
    }

    #[test]
    fn test_json_roundtrip() {
        let t = Tuning::default();
        let json = serde_json::to_string(&t).unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert!((back.keeper_reaction - t.keeper_reaction).abs() < 1e-6);
        assert_eq!(back.burst_perfect, t.burst_perfect);
    }
}
