//! Outcome resolution for a finished flight
//!
//! Runs exactly once when the ball reaches the goal plane: classifies
//! save / goal / wide in priority order, updates the scoreboard, fires the
//! feedback side effects, and arms the reset countdown.

use super::state::{GamePhase, GameState, Outcome, Rgb};

/// Outcome banner colors
const SAVE_COLOR: Rgb = Rgb::new(255, 51, 51);
const GOAL_COLOR: Rgb = Rgb::new(51, 255, 51);
const PERFECT_COLOR: Rgb = Rgb::new(255, 255, 255);
const WIDE_COLOR: Rgb = Rgb::new(119, 119, 119);

/// Classify and apply the outcome of the current flight
///
/// Must be entered from `Shooting`; resolving twice is a programming error
/// (fatal in debug builds, a no-op in release).
pub fn resolve_shot(state: &mut GameState) {
    debug_assert!(
        state.phase == GamePhase::Shooting,
        "resolving a flight that is not in progress"
    );
    if state.phase != GamePhase::Shooting {
        return;
    }

    state.phase = GamePhase::Reset;
    state.reset_ticks = state.tuning.reset_delay_ticks;
    state.session.attempts += 1;

    let landing = state.ball.pos;
    let outcome = classify(state);

    match outcome {
        Outcome::Saved => {
            state.session.miss_streak += 1;
            state.screen_shake = state.tuning.shake_save;
            state.show_message("SAVED!", SAVE_COLOR, false);
            let count = state.tuning.burst_save;
            state.spawn_burst(landing, SAVE_COLOR, count);
        }
        Outcome::Goal { perfect } => {
            state.session.score += if perfect { 2 } else { 1 };
            state.session.miss_streak = 0;
            state.session.recalc_progression(&state.tuning);
            state.screen_shake = state.tuning.shake_goal;
            if perfect {
                state.show_message("PERFECT! GOAL!", PERFECT_COLOR, true);
                let count = state.tuning.burst_perfect;
                state.spawn_burst(landing, PERFECT_COLOR, count);
            } else {
                state.show_message("GOAL!", GOAL_COLOR, false);
                let count = state.tuning.burst_goal;
                state.spawn_burst(landing, GOAL_COLOR, count);
            }
            log::info!(
                "goal{}: score {} level {}",
                if perfect { " (perfect)" } else { "" },
                state.session.score,
                state.session.level
            );
        }
        Outcome::Wide => {
            state.session.miss_streak += 1;
            // A harmless miss gets no shake
            state.show_message("WIDE...", WIDE_COLOR, false);
            let count = state.tuning.burst_miss;
            state.spawn_burst(landing, WIDE_COLOR, count);
        }
    }

    state.last_outcome = Some(outcome);
    log::debug!(
        "shot {} resolved: {:?} at ({:.0}, {:.0})",
        state.session.attempts,
        outcome,
        landing.x,
        landing.y
    );
}

/// Save beats goal beats wide
fn classify(state: &GameState) -> Outcome {
    let p = state.ball.pos;
    if state.keeper.blocks(
        p,
        state.tuning.keeper_arm_reach,
        state.tuning.keeper_vertical_reach,
    ) {
        return Outcome::Saved;
    }
    if state.goal.contains(p) {
        return Outcome::Goal {
            perfect: is_perfect(state),
        };
    }
    Outcome::Wide
}

/// Upper-corner landing with a near-full power meter
fn is_perfect(state: &GameState) -> bool {
    let p = state.ball.pos;
    let g = &state.goal;
    let t = &state.tuning;
    let in_corner = p.y < g.top + t.perfect_corner_depth
        && (p.x < g.left + t.perfect_post_margin || p.x > g.right - t.perfect_post_margin);
    in_corner && state.power.value > t.perfect_min_power
}
