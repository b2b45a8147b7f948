//! One iteration of the game loop
//!
//! `tick` is display-free: the shell feeds it input events and the loop
//! clock, then renders whatever state comes back.

use super::state::{GamePhase, GameState};
use crate::settings::Difficulty;

/// A discrete input event, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed at a logical-pixel position
    MouseDown { x: f32, y: f32 },
    /// Key pressed; only the character matters
    KeyDown(char),
    /// Window close requested
    Close,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }

    pub fn click(x: f32, y: f32) -> Self {
        Self::new(vec![InputEvent::MouseDown { x, y }])
    }

    pub fn key(key: char) -> Self {
        Self::new(vec![InputEvent::KeyDown(key)])
    }
}

/// Advance the game by one tick at clock time `now` (seconds)
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    if state.phase == GamePhase::Exited {
        return;
    }
    state.time_ticks += 1;

    // Drain input; clicks are resolved after the targets advance
    let mut clicks = Vec::new();
    for event in &input.events {
        match (state.phase, *event) {
            (GamePhase::Exited, _) => return,
            (_, InputEvent::Close) => {
                log::info!("Close requested");
                state.phase = GamePhase::Exited;
                return;
            }
            (GamePhase::Menu, InputEvent::KeyDown(key)) => {
                if let Some(difficulty) = Difficulty::from_key(key) {
                    state.start(difficulty, now);
                }
            }
            (GamePhase::Playing, InputEvent::MouseDown { x, y }) => {
                state.stats.clicks += 1;
                clicks.push((x, y));
            }
            (GamePhase::Ended, InputEvent::KeyDown(_)) => {
                log::info!("Leaving end screen");
                state.phase = GamePhase::Exited;
                return;
            }
            _ => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.stats.update_clock(now);

    // Spawn timer events
    let due = state.spawner.as_mut().map_or(0, |s| s.fire(now));
    for _ in 0..due {
        state.spawn_target();
    }

    // Animate
    let (rate, max_size) = (state.settings.growth_rate, state.settings.max_size);
    for target in &mut state.targets {
        target.advance(rate, max_size);
    }

    // Mark hits: each click credits at most the first live target under it
    let mut hit = vec![false; state.targets.len()];
    for (x, y) in clicks {
        let found = state
            .targets
            .iter()
            .enumerate()
            .position(|(i, t)| !hit[i] && t.size > 0.0 && t.hit_test(x, y));
        if let Some(i) = found {
            hit[i] = true;
        }
    }

    // Compact
    let stats = &mut state.stats;
    let mut index = 0;
    state.targets.retain(|target| {
        let was_hit = hit[index];
        index += 1;
        if was_hit {
            stats.hits += 1;
            log::debug!("Hit target {}", target.id);
            false
        } else if target.is_expired() {
            if stats.misses < stats.lives {
                stats.misses += 1;
            }
            log::debug!("Missed target {}", target.id);
            false
        } else {
            true
        }
    });

    if state.stats.is_out_of_lives() {
        end_session(state);
    }
}

fn end_session(state: &mut GameState) {
    state.phase = GamePhase::Ended;
    state.targets.clear();

    let summary = state.stats.summary(
        state.difficulty.unwrap_or_default(),
        state.seed,
        state.skipped_spawns(),
    );
    match serde_json::to_string(&summary) {
        Ok(json) => log::info!("Session over: {}", json),
        Err(e) => log::warn!("Session over (summary not serializable: {})", e),
    }
}
