//! Session counters and derived scores

use serde::{Deserialize, Serialize};

use crate::settings::Difficulty;

/// Counters for one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStats {
    /// Clock time the session started at (seconds)
    pub started_at: f64,
    /// Seconds since `started_at`; frozen once the session ends
    pub elapsed: f64,
    /// Targets removed by a click
    pub hits: u32,
    /// Every mouse-down while playing, hit or not
    pub clicks: u32,
    /// Targets that shrank away unclicked
    pub misses: u32,
    /// Misses allowed before the session ends
    pub lives: u32,
}

impl SessionStats {
    pub fn new(lives: u32, started_at: f64) -> Self {
        Self {
            started_at,
            lives,
            ..Default::default()
        }
    }

    /// Refresh `elapsed` from the loop clock
    pub fn update_clock(&mut self, now: f64) {
        self.elapsed = (now - self.started_at).max(0.0);
    }

    pub fn lives_remaining(&self) -> u32 {
        self.lives.saturating_sub(self.misses)
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.misses >= self.lives
    }

    /// Targets hit per second (0 before any time has passed)
    pub fn speed(&self) -> f64 {
        if self.elapsed <= 0.0 {
            0.0
        } else {
            self.hits as f64 / self.elapsed
        }
    }

    /// Percentage of clicks that hit (0 with no clicks)
    pub fn accuracy(&self) -> f64 {
        if self.clicks == 0 {
            0.0
        } else {
            self.hits as f64 / self.clicks as f64 * 100.0
        }
    }

    /// `seed` and `skipped_spawns` let a session be replayed and its
    /// spawn pressure judged from the log alone
    pub fn summary(&self, difficulty: Difficulty, seed: u64, skipped_spawns: u32) -> SessionSummary {
        SessionSummary {
            difficulty,
            seed,
            skipped_spawns,
            elapsed: self.elapsed,
            hits: self.hits,
            clicks: self.clicks,
            misses: self.misses,
            speed: round1(self.speed()),
            accuracy: round1(self.accuracy()),
        }
    }
}

/// Final stats, logged once when the session ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub difficulty: Difficulty,
    /// RNG seed the session ran with
    pub seed: u64,
    /// Timer events that found no clear spawn position
    pub skipped_spawns: u32,
    pub elapsed: f64,
    pub hits: u32,
    pub clicks: u32,
    pub misses: u32,
    pub speed: f64,
    pub accuracy: f64,
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format seconds as `MM:SS:t` (t = tenths)
pub fn format_time(secs: f64) -> String {
    let secs = secs.max(0.0);
    let tenths = ((secs * 10.0).floor() as u64) % 10;
    let total = secs.floor() as u64;
    format!("{:02}:{:02}:{}", total / 60, total % 60, tenths)
}
