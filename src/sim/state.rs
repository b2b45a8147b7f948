//! Game state and phase machine
//!
//! Everything the loop mutates lives in `GameState`; there are no globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn::Spawner;
use super::stats::SessionStats;
use super::target::Target;
use crate::settings::{Difficulty, Settings};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Difficulty selection, waiting for E / M / H
    Menu,
    /// Targets spawning, clock running
    Playing,
    /// Out of lives, summary on screen until a key is pressed
    Ended,
    /// Quit requested; the shell should close the window
    Exited,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub settings: Settings,
    pub phase: GamePhase,
    /// Chosen on the menu; `None` until then
    pub difficulty: Option<Difficulty>,
    /// Live targets, in spawn order
    pub targets: Vec<Target>,
    pub stats: SessionStats,
    /// Armed when play starts
    pub spawner: Option<Spawner>,
    /// Loop iterations since the program started
    pub time_ticks: u64,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        let lives = settings.lives;
        Self {
            seed,
            settings,
            phase: GamePhase::Menu,
            difficulty: None,
            targets: Vec::new(),
            stats: SessionStats::new(lives, 0.0),
            spawner: None,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Leave the menu: start the clock and arm the spawn timer
    pub fn start(&mut self, difficulty: Difficulty, now: f64) {
        log::info!(
            "Starting {} session ({} ms spawn period)",
            difficulty.as_str(),
            difficulty.spawn_interval_ms()
        );
        self.difficulty = Some(difficulty);
        self.stats = SessionStats::new(self.settings.lives, now);
        self.spawner = Some(Spawner::new(difficulty.spawn_interval_secs(), now));
        self.targets.clear();
        self.phase = GamePhase::Playing;
    }

    /// Timer events this session that found no clear position
    pub fn skipped_spawns(&self) -> u32 {
        self.spawner.as_ref().map_or(0, |s| s.skipped)
    }

    /// Place one target, unless the field is too crowded
    ///
    /// Returns the new target's id.
    pub fn spawn_target(&mut self) -> Option<u32> {
        match super::spawn::find_position(&self.targets, &self.settings, &mut self.rng) {
            Some((x, y)) => {
                let id = self.next_entity_id();
                self.targets.push(Target::new(id, x, y));
                log::debug!("Spawned target {} at ({}, {})", id, x, y);
                Some(id)
            }
            None => {
                if let Some(spawner) = self.spawner.as_mut() {
                    spawner.skipped += 1;
                }
                log::warn!(
                    "No clear spawn position after {} attempts; skipping spawn",
                    self.settings.spawn_attempts
                );
                None
            }
        }
    }
}
