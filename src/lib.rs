//! Aim Trainer - a single-screen reflex game
//!
//! Core modules:
//! - `sim`: Display-free game loop (targets, spawning, scoring, phases)
//! - `renderer`: wgpu rendering of the menu, play field and end screen
//! - `settings`: Difficulty presets and session tuning
//! - `error`: Startup failures of the native shell

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::AppError;
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Window dimensions (logical pixels)
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "Aim Trainer";

    /// Ticks per second the loop is limited to
    pub const FRAME_RATE: u32 = 60;

    /// Height of the status bar along the top edge
    pub const TOP_BAR_HEIGHT: f32 = 50.0;
    /// Clearance between targets and between targets and the edges
    pub const TARGET_PADDING: f32 = 30.0;

    /// Target radius at the peak of its animation
    pub const TARGET_MAX_SIZE: f32 = 30.0;
    /// Radius change per tick
    pub const TARGET_GROWTH_RATE: f32 = 0.2;

    /// Misses allowed before the session ends
    pub const LIVES: u32 = 3;

    /// Rejected spawn candidates before a spawn is skipped
    pub const SPAWN_ATTEMPTS: u32 = 64;
    /// Timer periods a single tick may catch up on
    pub const MAX_SPAWNS_PER_TICK: u32 = 4;
}
