//! Fixed timestep simulation tick
//!
//! One call advances the whole core by a single frame: the phase machine,
//! the aim/power meters, ball flight, keeper pursuit, the pending-reset
//! countdown, and particle decay. Deterministic for a given seed and input
//! sequence.

use super::control::follow;
use super::resolve::resolve_shot;
use super::state::{GamePhase, GameState};

/// Input events for a single tick
///
/// One-shot flags; the host sets them for the tick an event arrives on and
/// clears them afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start a run from the title state
    pub begin: bool,
    /// Lock in the current meter (aim or power, depending on phase)
    pub advance: bool,
    /// Start over after a game over
    pub restart: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Shake decays in every phase
    state.screen_shake *= 0.9;
    if state.screen_shake < 0.5 {
        state.screen_shake = 0.0;
    }

    // Banner display countdown
    if let Some(msg) = &mut state.message {
        msg.ticks_left = msg.ticks_left.saturating_sub(1);
        if msg.ticks_left == 0 {
            state.message = None;
        }
    }

    match state.phase {
        GamePhase::Start => {
            if input.begin {
                state.start_session();
                log::info!("session started (seed {})", state.seed);
            }
        }

        GamePhase::Aiming => {
            if input.advance {
                // Freeze the aim at its current value
                state.phase = GamePhase::Powering;
            } else {
                state.aim.advance();
                keeper_sway(state);
            }
        }

        GamePhase::Powering => {
            if input.advance {
                launch(state);
            } else {
                state.power.advance();
            }
        }

        GamePhase::Shooting => fly(state),

        GamePhase::Reset => {
            // The single pending transition, counted down deterministically
            if state.reset_ticks > 0 {
                state.reset_ticks -= 1;
                if state.reset_ticks == 0 {
                    finish_reset(state);
                }
            }
        }

        GamePhase::GameOver => {
            if input.restart {
                state.start_session();
                log::info!("session restarted after game over");
            }
        }
    }

    // Particles are cosmetic but animate in every phase
    let decay = state.tuning.particle_decay;
    for p in state.particles.iter_mut() {
        p.pos += p.vel;
        p.life -= decay;
    }
    state.particles.retain(|p| p.life > 0.0);
}

/// Freeze the power meter and put the ball in flight
fn launch(state: &mut GameState) {
    // Re-entering flight mid-flight is a programming error
    debug_assert!(
        state.phase != GamePhase::Shooting,
        "launch while already shooting"
    );

    let angle = state.aim.value;
    let speed = state.tuning.launch_speed(state.power.value);
    // Lateral component is damped for perspective foreshortening
    state.ball.vel.x = angle.cos() * speed * state.tuning.lateral_dampen;
    state.ball.vel.y = angle.sin() * speed;
    state.phase = GamePhase::Shooting;
    log::debug!(
        "shot away: angle {:.3} power {:.0} speed {:.1}",
        angle,
        state.power.value,
        speed
    );
}

/// Nervous idle sway while the shooter aims; amplitude grows with level
fn keeper_sway(state: &mut GameState) {
    let phase = state.time_ticks as f32 * state.tuning.keeper_sway_rate;
    let scale = 1.0 + state.session.level as f32 * state.tuning.keeper_sway_level_gain;
    state.keeper.x += phase.sin() * state.tuning.keeper_sway_amplitude * scale;
}

/// One tick of ball flight plus keeper pursuit
fn fly(state: &mut GameState) {
    state.ball.pos += state.ball.vel;
    state.ball.z -= state.tuning.depth_decay;
    state.ball.vel.y += state.tuning.gravity;
    state.record_trail();

    // Predict the landing x by linear extrapolation, keep the keeper on the
    // goal mouth, and close the remaining gap exponentially
    let predicted = state.ball.pos.x + state.ball.vel.x * state.tuning.keeper_lookahead;
    let half_w = state.keeper.width / 2.0;
    state.keeper.target_x = predicted.clamp(state.goal.left + half_w, state.goal.right - half_w);
    let rate = state.keeper.reaction
        * (1.0 + state.session.level as f32 * state.tuning.keeper_level_gain);
    state.keeper.x = follow(state.keeper.x, state.keeper.target_x, rate);

    if state.ball.z <= state.tuning.goal_plane_z {
        resolve_shot(state);
    }
}

/// The post-outcome countdown expired: next shot, or the end of the run
fn finish_reset(state: &mut GameState) {
    let limit = state.tuning.miss_streak_limit;
    if limit > 0 && state.session.miss_streak >= limit {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over: {} goals in {} attempts",
            state.session.score,
            state.session.attempts
        );
    } else {
        state.rearm_shot();
        state.phase = GamePhase::Aiming;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_SPAWN_X;
    use crate::sim::state::Outcome;
    use std::f32::consts::FRAC_PI_2;

    fn begin() -> TickInput {
        TickInput {
            begin: true,
            ..Default::default()
        }
    }

    fn advance() -> TickInput {
        TickInput {
            advance: true,
            ..Default::default()
        }
    }

    /// Drive a full aim -> power -> launch cycle with the meters pinned
    fn launch_shot(state: &mut GameState, angle: f32, power: f32) {
        assert_eq!(state.phase, GamePhase::Aiming);
        state.aim.value = angle;
        tick(state, &advance());
        assert_eq!(state.phase, GamePhase::Powering);
        state.power.value = power;
        tick(state, &advance());
        assert_eq!(state.phase, GamePhase::Shooting);
    }

    /// Tick until the flight resolves
    fn fly_out(state: &mut GameState) {
        let mut guard = 0;
        while state.phase == GamePhase::Shooting {
            tick(state, &TickInput::default());
            guard += 1;
            assert!(guard < 1000, "flight never resolved");
        }
        assert_eq!(state.phase, GamePhase::Reset);
    }

    /// Run out the reset countdown
    fn wait_reset(state: &mut GameState) {
        let mut guard = 0;
        while state.phase == GamePhase::Reset {
            tick(state, &TickInput::default());
            guard += 1;
            assert!(guard < 10_000, "reset never fired");
        }
    }

    #[test]
    fn test_begin_starts_aiming() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Start);

        tick(&mut state, &begin());
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.level, 1);
    }

    #[test]
    fn test_straight_full_power_launch_velocity() {
        let mut state = GameState::new(1);
        tick(&mut state, &begin());
        launch_shot(&mut state, -FRAC_PI_2, 100.0);

        // speed = 15 + 15, cos(-pi/2) = 0, sin(-pi/2) = -1; gravity has not
        // acted yet on the launch tick
        assert!(state.ball.vel.x.abs() < 1e-5);
        assert!((state.ball.vel.y + 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_depth_decreases_and_resolves_once() {
        let mut state = GameState::new(2);
        tick(&mut state, &begin());
        launch_shot(&mut state, -FRAC_PI_2, 100.0);

        let mut last_z = state.ball.z;
        while state.phase == GamePhase::Shooting {
            tick(&mut state, &TickInput::default());
            assert!(state.ball.z < last_z, "z must fall monotonically");
            last_z = state.ball.z;
        }
        assert_eq!(state.session.attempts, 1);

        // Further ticks in Reset must not re-resolve the same flight
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.session.attempts, 1);
    }

    #[test]
    fn test_advance_is_ignored_mid_flight() {
        let mut state = GameState::new(3);
        tick(&mut state, &begin());
        launch_shot(&mut state, -FRAC_PI_2, 50.0);

        let vel = state.ball.vel;
        tick(&mut state, &advance());
        assert_eq!(state.phase, GamePhase::Shooting);
        // Flight continues untouched apart from gravity
        assert_eq!(state.ball.vel.x, vel.x);
    }

    #[test]
    fn test_reset_restores_shot_defaults() {
        let mut state = GameState::new(4);
        tick(&mut state, &begin());
        launch_shot(&mut state, -FRAC_PI_2 + 0.3, 90.0);
        fly_out(&mut state);
        assert!(!state.trail.is_empty());

        wait_reset(&mut state);
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.ball.pos.x, BALL_SPAWN_X);
        assert_eq!(state.ball.z, 1.0);
        assert_eq!(state.power.value, 0.0);
        assert!(state.trail.is_empty());
        assert!(state.message.is_none());
        assert_eq!(state.keeper.x, state.goal.center_x());
    }

    #[test]
    fn test_aim_stays_in_arc_while_aiming() {
        let mut state = GameState::new(5);
        tick(&mut state, &begin());
        let lo = -FRAC_PI_2 - state.tuning.aim_arc;
        let hi = -FRAC_PI_2 + state.tuning.aim_arc;
        for _ in 0..500 {
            tick(&mut state, &TickInput::default());
            assert!(state.aim.value >= lo && state.aim.value <= hi);
        }
    }

    #[test]
    fn test_power_stays_in_band_while_powering() {
        let mut state = GameState::new(6);
        tick(&mut state, &begin());
        tick(&mut state, &advance());
        for _ in 0..500 {
            tick(&mut state, &TickInput::default());
            assert!(state.power.value >= 0.0 && state.power.value <= 100.0);
        }
    }

    #[test]
    fn test_three_scoreless_shots_end_the_run() {
        let mut state = GameState::new(7);
        tick(&mut state, &begin());

        // Full-power straight shots sail high over the bar
        for shot in 1..=3 {
            launch_shot(&mut state, -FRAC_PI_2, 100.0);
            fly_out(&mut state);
            assert_eq!(state.last_outcome, Some(Outcome::Wide));
            assert_eq!(state.session.miss_streak, shot);
            wait_reset(&mut state);
        }
        assert_eq!(state.phase, GamePhase::GameOver);

        // Restart wipes the run
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.session.attempts, 0);
        assert_eq!(state.session.miss_streak, 0);
    }

    #[test]
    fn test_determinism() {
        let script = |state: &mut GameState| {
            tick(state, &begin());
            for _ in 0..37 {
                tick(state, &TickInput::default());
            }
            tick(state, &advance());
            for _ in 0..21 {
                tick(state, &TickInput::default());
            }
            tick(state, &advance());
            for _ in 0..200 {
                tick(state, &TickInput::default());
            }
        };

        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        script(&mut a);
        script(&mut b);

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.session.score, b.session.score);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.keeper.x, b.keeper.x);
        assert_eq!(a.particles.len(), b.particles.len());
    }
}
