//! Frame composition
//!
//! Turns a `GameState` into a vertex list. Pure, so every screen can be
//! checked without a GPU.

use super::shapes;
use super::text;
use super::vertex::{Vertex, colors};
use crate::settings::Difficulty;
use crate::sim::{GamePhase, GameState, SessionStats, format_time, round1};

/// Font scale for the status bar
const BAR_SCALE: f32 = 2.0;
/// Font scale for menu and end-screen lines
const SCREEN_SCALE: f32 = 3.0;
/// Left edges of the four status bar labels
const BAR_COLUMNS: [f32; 4] = [5.0, 200.0, 450.0, 650.0];

/// Menu lines, one per difficulty
pub fn menu_lines() -> Vec<String> {
    Difficulty::ALL
        .iter()
        .map(|d| format!("Press {} for {}", d.key(), d.as_str()))
        .collect()
}

/// Time, speed, hits and lives, in bar order
pub fn status_lines(stats: &SessionStats) -> [String; 4] {
    [
        format!("Time: {}", format_time(stats.elapsed)),
        format!("Speed: {:.1} t/s", round1(stats.speed())),
        format!("Hits: {}", stats.hits),
        format!("Lives: {}", stats.lives_remaining()),
    ]
}

/// Time, speed, hits and accuracy for the end screen
pub fn summary_lines(stats: &SessionStats) -> [String; 4] {
    [
        format!("Time: {}", format_time(stats.elapsed)),
        format!("Speed: {:.1} t/s", round1(stats.speed())),
        format!("Hits: {}", stats.hits),
        format!("Accuracy: {:.1}%", round1(stats.accuracy())),
    ]
}

/// Build every vertex for the current frame, back to front
pub fn build(state: &GameState) -> Vec<Vertex> {
    let settings = &state.settings;
    let center_x = settings.width / 2.0;
    let mut vertices = Vec::new();

    match state.phase {
        GamePhase::Menu => {
            for (line, y) in menu_lines().iter().zip([200.0, 300.0, 400.0]) {
                vertices.extend(text::label_centered(line, center_x, y, SCREEN_SCALE, colors::LABEL));
            }
        }
        GamePhase::Playing => {
            for target in &state.targets {
                vertices.extend(shapes::target(target));
            }

            // Status bar over the targets
            vertices.extend(shapes::rect(
                0.0,
                0.0,
                settings.width,
                settings.top_bar_height,
                colors::STATUS_BAR,
            ));
            let text_y = (settings.top_bar_height - text::measure("", BAR_SCALE).1) / 2.0;
            for (line, x) in status_lines(&state.stats).iter().zip(BAR_COLUMNS) {
                vertices.extend(text::label(line, x, text_y, BAR_SCALE, colors::LABEL));
            }
        }
        GamePhase::Ended => {
            for (line, y) in summary_lines(&state.stats)
                .iter()
                .zip([100.0, 200.0, 300.0, 400.0])
            {
                vertices.extend(text::label_centered(line, center_x, y, SCREEN_SCALE, colors::LABEL));
            }
            vertices.extend(text::label_centered(
                "Press any key to quit",
                center_x,
                500.0,
                BAR_SCALE,
                colors::LABEL,
            ));
        }
        GamePhase::Exited => {}
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Target, TickInput, tick};

    #[test]
    fn test_menu_lines() {
        assert_eq!(
            menu_lines(),
            vec!["Press E for Easy", "Press M for Medium", "Press H for Hard"]
        );
        assert!(!build(&GameState::new(1)).is_empty());
    }

    #[test]
    fn test_status_lines() {
        let mut stats = SessionStats::new(3, 0.0);
        stats.update_clock(4.0);
        stats.hits = 6;
        stats.misses = 1;
        assert_eq!(
            status_lines(&stats),
            [
                "Time: 00:04:0".to_string(),
                "Speed: 1.5 t/s".to_string(),
                "Hits: 6".to_string(),
                "Lives: 2".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_lines_before_any_click() {
        let stats = SessionStats::new(3, 0.0);
        let lines = summary_lines(&stats);
        assert_eq!(lines[1], "Speed: 0.0 t/s");
        assert_eq!(lines[3], "Accuracy: 0.0%");
    }

    #[test]
    fn test_status_bar_drawn_over_targets() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::key('e'), 0.0);
        let mut t = Target::new(1, 400, 300);
        t.size = 30.0;
        state.targets.push(t.clone());

        let vertices = build(&state);
        let target_len = shapes::target(&t).len();
        assert_eq!(&vertices[..target_len], shapes::target(&t).as_slice());
        // Bar quad comes right after the targets
        assert_eq!(vertices[target_len].color, colors::STATUS_BAR);
    }

    #[test]
    fn test_labels_fit_in_window() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::key('h'), 0.0);
        state.stats.hits = 999;
        state.stats.elapsed = 3599.9;

        for phase in [GamePhase::Menu, GamePhase::Playing, GamePhase::Ended] {
            state.phase = phase;
            for v in build(&state) {
                assert!((0.0..=state.settings.width).contains(&v.position[0]));
                assert!((0.0..=state.settings.height).contains(&v.position[1]));
            }
        }
    }

    #[test]
    fn test_exited_draws_nothing() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Exited;
        assert!(build(&state).is_empty());
    }
}
