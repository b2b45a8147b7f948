//! Shape generation for 2D primitives
//!
//! All coordinates are logical pixels, origin top-left, y down.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::Target;

/// Segment count for a circle of `radius`, so small circles stay cheap
pub fn segments_for(radius: f32) -> u32 {
    ((radius * 1.5) as u32).clamp(12, 64)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> [Vertex; 6] {
    let (x2, y2) = (x + w, y + h);
    [
        Vertex::new(x, y, color),
        Vertex::new(x2, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y, color),
        Vertex::new(x2, y2, color),
    ]
}

/// Four concentric discs, outermost first, alternating primary/secondary
pub fn target(target: &Target) -> Vec<Vertex> {
    if target.size <= 0.0 {
        return Vec::new();
    }

    let center = target.center();
    let segments = segments_for(target.size);
    let mut vertices = Vec::with_capacity((segments * 3 * 4) as usize);

    for (i, radius) in target.ring_radii().into_iter().enumerate() {
        let color = if i % 2 == 0 {
            colors::TARGET_PRIMARY
        } else {
            colors::TARGET_SECONDARY
        };
        vertices.extend(circle(center, radius, color, segments));
    }

    vertices
}
