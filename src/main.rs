//! Neon Striker entry point
//!
//! Headless demo: a scripted player runs a seeded session and logs every
//! outcome. Real front-ends drive [`neon_striker::sim::tick`] the same way
//! and draw from the public state each frame.

use neon_striker::consts::TICK_HZ;
use neon_striker::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let shots: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    log::info!("Neon Striker demo starting (seed {seed}, {shots} shots)");

    let mut state = GameState::new(seed);
    let mut input = TickInput {
        begin: true,
        ..Default::default()
    };

    // Hard stop: a generous minute of simulated time per shot
    let max_ticks = (shots as u64 + 1) * 60 * TICK_HZ as u64;
    for _ in 0..max_ticks {
        tick(&mut state, &input);
        input = TickInput::default();

        match state.phase {
            GamePhase::Aiming => {
                if state.session.attempts >= shots {
                    break;
                }
                // Alternate corners: lock the aim as the sweep passes a
                // point off to either side
                let target = if state.session.attempts % 2 == 0 {
                    0.15
                } else {
                    0.85
                };
                if (state.aim.fraction() - target).abs() < 0.02 {
                    input.advance = true;
                }
            }
            GamePhase::Powering => {
                // Chase the perfect-shot band on the way up
                if state.power.value >= 85.0 && state.power.dir > 0.0 {
                    input.advance = true;
                }
            }
            GamePhase::GameOver => {
                log::info!("run ended by game over");
                break;
            }
            _ => {}
        }
    }

    println!(
        "final: {} goals / {} attempts (level {}, arena {})",
        state.session.score,
        state.session.attempts,
        state.session.level,
        state.session.arena_color
    );
}
