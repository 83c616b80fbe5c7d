//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Order within a
//! tick: inputs, player flight, scroll speed, spike motion + collision +
//! spawning, scoring and cleanup, then thruster or death camera.

use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Invert the ship's vertical velocity (space)
    pub flip: bool,
    /// Reset for a fresh run (R)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        log::info!("restarting, last score {}", state.score);
        state.reset_run();
        return;
    }

    state.time_ticks += 1;

    if input.flip {
        if state.phase == GamePhase::Ready {
            log::info!("run started (seed {})", state.seed);
            state.phase = GamePhase::Running;
        }
        // The flip lands even on a dead ship; it just has nothing to move
        state.player.flip();
    }

    match state.phase {
        GamePhase::Running => {
            state.player.integrate(dt);
            state.scroll_speed = SCROLL_SPEED;
            if state.player.dead {
                kill_player(state, "rail");
            }
        }
        GamePhase::Ready | GamePhase::GameOver => {
            // Spikes coast to a stop instead of freezing
            state.scroll_speed = (state.scroll_speed - SCROLL_DECEL * dt).max(0.0);
        }
    }

    if state.scroll_speed > 0.0 {
        state.camera.rotation += FIELD_SPIN_RATE * dt;

        let dx = state.scroll_speed * dt;
        for spike in &mut state.spikes {
            spike.translate(-dx);
        }

        if !state.player.dead {
            let corners = state.player.corners();
            let hit = state
                .spikes
                .iter()
                .any(|spike| corners.iter().any(|&corner| spike.contains(corner)));
            if hit {
                kill_player(state, "spike");
            }
        }

        // The spawn clock only counts time the world is actually moving
        state.spawn_clock += dt;
        if state.spawn_clock > SPAWN_INTERVAL {
            state.spawn_spike_pair();
            state.spawn_clock = 0.0;
            log::trace!("spawned spike pair, {} live", state.spikes.len());
        }
    }

    // Score spikes whose apex slipped behind the ship, then drop far-gone ones
    if !state.player.dead {
        let player_x = state.player.pos.x;
        for spike in &mut state.spikes {
            if !spike.passed && spike.apex().x < player_x {
                spike.passed = true;
                state.score += 1;
                log::trace!("score {}", state.score);
            }
        }
    }
    state.spikes.retain(|spike| spike.trailing_x() >= -FIELD_WIDTH);

    if !state.player.dead {
        state.thruster.update(dt, &mut state.rng);
        state.thruster.set_origin(state.player.pos);
    } else {
        state.camera.advance(&mut state.rng);
    }
}

fn kill_player(state: &mut GameState, cause: &str) {
    state.player.dead = true;
    state.phase = GamePhase::GameOver;
    state.camera.start_shake();
    log::info!("run over ({cause}), score {}", state.score);
}
