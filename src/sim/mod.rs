//! Display-free simulation module
//!
//! All gameplay logic lives here:
//! - One `tick` per frame, fed by input events and the loop clock
//! - Seeded RNG only, so sessions replay deterministically in tests
//! - No rendering or platform dependencies

pub mod spawn;
pub mod state;
pub mod stats;
pub mod target;
pub mod tick;

pub use spawn::{Spawner, find_position, is_overlapping};
pub use state::{GamePhase, GameState};
pub use stats::{SessionStats, SessionSummary, format_time, round1};
pub use target::Target;
pub use tick::{InputEvent, TickInput, tick};
