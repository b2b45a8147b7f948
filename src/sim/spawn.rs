//! Spawn timer and non-overlapping placement

use glam::Vec2;
use rand::Rng;

use super::target::Target;
use crate::consts::MAX_SPAWNS_PER_TICK;
use crate::settings::Settings;

/// Periodic spawn timer, driven by the loop clock
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Timer period (seconds)
    pub interval: f64,
    /// Clock time of the next timer event
    pub next_at: f64,
    /// Spawns given up after exhausting the retry cap
    pub skipped: u32,
}

impl Spawner {
    /// Arm the timer at `now`; the first event fires one period later
    pub fn new(interval: f64, now: f64) -> Self {
        Self {
            interval,
            next_at: now + interval,
            skipped: 0,
        }
    }

    /// Number of timer events that have fired by `now`
    ///
    /// Catch-up after a long frame is capped; periods beyond the cap are
    /// dropped rather than queued.
    pub fn fire(&mut self, now: f64) -> u32 {
        let mut fired = 0;
        while self.next_at <= now {
            self.next_at += self.interval;
            if fired < MAX_SPAWNS_PER_TICK {
                fired += 1;
            }
        }
        fired
    }
}

/// True if a target centered at `pos` could ever touch a live target
pub fn is_overlapping(pos: Vec2, targets: &[Target], settings: &Settings) -> bool {
    targets
        .iter()
        .any(|t| t.center().distance(pos) < settings.required_clearance(t.size))
}

/// Pick a spawn position clear of every live target
///
/// Returns `None` if `settings.spawn_attempts` candidates were all rejected.
pub fn find_position<R: Rng>(
    targets: &[Target],
    settings: &Settings,
    rng: &mut R,
) -> Option<(i32, i32)> {
    let (x_min, x_max, y_min, y_max) = settings.spawn_bounds();

    for _ in 0..settings.spawn_attempts.max(1) {
        let x = rng.random_range(x_min..=x_max);
        let y = rng.random_range(y_min..=y_max);
        if !is_overlapping(Vec2::new(x as f32, y as f32), targets, settings) {
            return Some((x, y));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_timer_fires_once_per_period() {
        let mut spawner = Spawner::new(0.9, 10.0);
        assert_eq!(spawner.fire(10.0), 0);
        assert_eq!(spawner.fire(10.89), 0);
        assert_eq!(spawner.fire(10.91), 1);
        assert_eq!(spawner.fire(11.0), 0);
        assert_eq!(spawner.fire(11.81), 1);
    }

    #[test]
    fn test_timer_catch_up_is_capped() {
        let mut spawner = Spawner::new(0.3, 0.0);
        // Ten periods in one frame
        assert_eq!(spawner.fire(3.05), MAX_SPAWNS_PER_TICK);
        // The dropped periods are not replayed
        assert_eq!(spawner.fire(3.1), 0);
        assert!(spawner.next_at > 3.05);
    }

    #[test]
    fn test_overlap_uses_existing_size() {
        let settings = Settings::default();
        let mut target = Target::new(1, 400, 300);
        target.size = 10.0;
        let targets = vec![target];

        // clearance = 10 + 30 + 30 = 70
        assert!(is_overlapping(Vec2::new(469.0, 300.0), &targets, &settings));
        assert!(!is_overlapping(Vec2::new(470.0, 300.0), &targets, &settings));
    }

    #[test]
    fn test_position_within_play_area() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let (x_min, x_max, y_min, y_max) = settings.spawn_bounds();

        for _ in 0..500 {
            let (x, y) = find_position(&[], &settings, &mut rng).expect("empty field");
            assert!((x_min..=x_max).contains(&x));
            assert!((y_min..=y_max).contains(&y));
        }
    }

    #[test]
    fn test_gives_up_when_field_is_full() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(7);

        // One huge target covering the whole window
        let mut blocker = Target::new(1, 400, 300);
        blocker.size = 1000.0;

        assert_eq!(find_position(&[blocker], &settings, &mut rng), None);
    }

    proptest! {
        #[test]
        fn prop_spawned_targets_keep_clearance(seed in any::<u64>(), count in 1usize..20) {
            let settings = Settings::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut targets: Vec<Target> = Vec::new();

            for id in 0..count as u32 {
                if let Some((x, y)) = find_position(&targets, &settings, &mut rng) {
                    let fresh = Vec2::new(x as f32, y as f32);
                    for t in &targets {
                        prop_assert!(
                            t.center().distance(fresh) >= settings.max_size + settings.padding
                        );
                    }
                    targets.push(Target::new(id, x, y));
                }
                for t in targets.iter_mut() {
                    t.advance(settings.growth_rate * 25.0, settings.max_size);
                }
            }
        }
    }
}
