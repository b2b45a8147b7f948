//! Clickable targets with a grow-then-shrink animation

use glam::Vec2;

/// Ring radii as fractions of the current size, outermost first
pub const RING_FRACTIONS: [f32; 4] = [1.0, 0.8, 0.6, 0.4];

/// A live target
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    /// Current radius
    pub size: f32,
    /// Growing until the peak, shrinking after
    pub growing: bool,
}

impl Target {
    /// A freshly spawned target starts at size 0, growing
    pub fn new(id: u32, x: i32, y: i32) -> Self {
        Self {
            id,
            x,
            y,
            size: 0.0,
            growing: true,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Step the animation by one tick
    pub fn advance(&mut self, rate: f32, max_size: f32) {
        if self.growing {
            self.size = (self.size + rate).min(max_size);
            if self.size >= max_size {
                self.growing = false;
            }
        } else {
            self.size = (self.size - rate).max(0.0);
        }
    }

    /// True once the target has shrunk away
    pub fn is_expired(&self) -> bool {
        !self.growing && self.size <= 0.0
    }

    /// True iff `(px, py)` lies within the current radius
    pub fn hit_test(&self, px: f32, py: f32) -> bool {
        self.center().distance(Vec2::new(px, py)) <= self.size
    }

    /// Radii of the four concentric rings, outermost first
    pub fn ring_radii(&self) -> [f32; 4] {
        RING_FRACTIONS.map(|f| self.size * f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{TARGET_GROWTH_RATE, TARGET_MAX_SIZE};
    use proptest::prelude::*;

    fn run_to_expiry(target: &mut Target) -> u32 {
        let mut ticks = 0;
        while !target.is_expired() {
            target.advance(TARGET_GROWTH_RATE, TARGET_MAX_SIZE);
            ticks += 1;
            assert!(ticks < 10_000, "target never expired");
        }
        ticks
    }

    #[test]
    fn test_new_target_is_not_expired() {
        let target = Target::new(1, 100, 100);
        assert_eq!(target.size, 0.0);
        assert!(target.growing);
        assert!(!target.is_expired());
    }

    #[test]
    fn test_flips_exactly_once_at_peak() {
        let mut target = Target::new(1, 100, 100);
        let mut flips = 0;
        let mut was_growing = target.growing;

        while !target.is_expired() {
            target.advance(TARGET_GROWTH_RATE, TARGET_MAX_SIZE);
            if was_growing && !target.growing {
                flips += 1;
                assert_eq!(target.size, TARGET_MAX_SIZE);
            }
            assert!(
                !(target.growing && !was_growing),
                "target started growing again"
            );
            was_growing = target.growing;
        }

        assert_eq!(flips, 1);
    }

    #[test]
    fn test_lifetime_is_about_five_seconds() {
        let mut target = Target::new(1, 100, 100);
        let ticks = run_to_expiry(&mut target);
        // 150 ticks up, 150 down, give or take float accumulation
        assert!((295..=305).contains(&ticks), "lifetime was {ticks} ticks");
    }

    #[test]
    fn test_hit_test_edges() {
        let mut target = Target::new(1, 200, 300);
        target.size = 10.0;

        assert!(target.hit_test(200.0, 300.0));
        assert!(target.hit_test(210.0, 300.0));
        assert!(!target.hit_test(210.5, 300.0));
        assert!(!target.hit_test(208.0, 308.0));
    }

    #[test]
    fn test_ring_radii() {
        let mut target = Target::new(1, 0, 0);
        target.size = 20.0;
        let radii = target.ring_radii();
        assert_eq!(radii[0], 20.0);
        assert!((radii[1] - 16.0).abs() < 1e-5);
        assert!((radii[2] - 12.0).abs() < 1e-5);
        assert!((radii[3] - 8.0).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_size_stays_in_bounds(
            rate in 0.01f32..5.0,
            max_size in 1.0f32..100.0,
            ticks in 0usize..2_000,
        ) {
            let mut target = Target::new(1, 0, 0);
            for _ in 0..ticks {
                target.advance(rate, max_size);
                prop_assert!(target.size >= 0.0);
                prop_assert!(target.size <= max_size);
            }
        }

        #[test]
        fn prop_center_always_hits(size in 0.001f32..100.0, x in -1000i32..1000, y in -1000i32..1000) {
            let mut target = Target::new(1, x, y);
            target.size = size;
            prop_assert!(target.hit_test(x as f32, y as f32));
        }

        #[test]
        fn prop_far_points_miss(
            size in 0.0f32..100.0,
            extra in 0.01f32..500.0,
            angle in 0.0f32..std::f32::consts::TAU,
        ) {
            let target = Target { size, ..Target::new(1, 400, 300) };
            let d = size + extra;
            let px = 400.0 + d * angle.cos();
            let py = 300.0 + d * angle.sin();
            prop_assert!(!target.hit_test(px, py));
        }
    }
}
