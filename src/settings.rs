//! Difficulty presets and session tuning
//!
//! Nothing here is read from disk; `Settings::default()` mirrors `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty levels offered on the pre-game menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Menu hotkey for this difficulty
    pub fn key(&self) -> char {
        match self {
            Difficulty::Easy => 'E',
            Difficulty::Medium => 'M',
            Difficulty::Hard => 'H',
        }
    }

    /// Map a menu key press to a difficulty (case-insensitive)
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'e' => Some(Difficulty::Easy),
            'm' => Some(Difficulty::Medium),
            'h' => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Period of the spawn timer
    pub fn spawn_interval_ms(&self) -> u32 {
        match self {
            Difficulty::Easy => 900,
            Difficulty::Medium => 600,
            Difficulty::Hard => 300,
        }
    }

    pub fn spawn_interval_secs(&self) -> f64 {
        self.spawn_interval_ms() as f64 / 1000.0
    }
}

/// Session tuning
#[derive(Debug, Clone)]
pub struct Settings {
    // === Play area ===
    pub width: f32,
    pub height: f32,
    pub top_bar_height: f32,
    pub padding: f32,

    // === Targets ===
    pub max_size: f32,
    pub growth_rate: f32,

    // === Session ===
    pub lives: u32,
    /// Rejected candidates before a spawn is given up
    pub spawn_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH as f32,
            height: WINDOW_HEIGHT as f32,
            top_bar_height: TOP_BAR_HEIGHT,
            padding: TARGET_PADDING,

            max_size: TARGET_MAX_SIZE,
            growth_rate: TARGET_GROWTH_RATE,

            lives: LIVES,
            spawn_attempts: SPAWN_ATTEMPTS,
        }
    }
}

impl Settings {
    /// Inclusive integer range spawn centers are drawn from, as
    /// `(x_min, x_max, y_min, y_max)`
    pub fn spawn_bounds(&self) -> (i32, i32, i32, i32) {
        let x_min = self.padding as i32;
        let x_max = (self.width - self.padding) as i32;
        let y_min = (self.top_bar_height + self.padding) as i32;
        let y_max = (self.height - self.padding) as i32;
        (x_min, x_max.max(x_min), y_min, y_max.max(y_min))
    }

    /// Clearance a new target needs from an existing one of `existing_size`
    pub fn required_clearance(&self, existing_size: f32) -> f32 {
        existing_size + self.max_size + self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_keys() {
        assert_eq!(Difficulty::from_key('e'), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_key('M'), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_key('h'), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_key('x'), None);

        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_key(difficulty.key()), Some(difficulty));
        }
    }

    #[test]
    fn test_spawn_intervals() {
        assert_eq!(Difficulty::Easy.spawn_interval_ms(), 900);
        assert_eq!(Difficulty::Medium.spawn_interval_ms(), 600);
        assert_eq!(Difficulty::Hard.spawn_interval_ms(), 300);
        assert!((Difficulty::Hard.spawn_interval_secs() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_default_spawn_bounds() {
        let settings = Settings::default();
        assert_eq!(settings.spawn_bounds(), (30, 770, 80, 570));
        assert_eq!(settings.required_clearance(10.0), 70.0);
    }
}
