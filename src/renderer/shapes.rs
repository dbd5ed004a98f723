//! Shape generation for 2D primitives
//!
//! Everything comes out as a plain triangle list in canvas pixels.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;

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

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::from_angle(theta1);
        let dir2 = Vec2::from_angle(theta2);
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        push_quad(&mut vertices, inner1, outer1, inner2, outer2, color);
    }

    vertices
}

/// Axis-aligned rectangle from its top-left corner
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    let a = origin;
    let b = origin + Vec2::new(size.x, 0.0);
    let c = origin + Vec2::new(0.0, size.y);
    let d = origin + size;
    push_quad(&mut vertices, a, b, c, d, color);
    vertices
}

/// Straight line of the given width
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = dir.perp() * (width * 0.5);
    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, from + perp, from - perp, to + perp, to - perp, color);
    vertices
}

/// Square-ish rectangle with rounded corners, centered on `center`
pub fn rounded_rect(
    center: Vec2,
    size: Vec2,
    corner: f32,
    color: [f32; 4],
    corner_segments: u32,
) -> Vec<Vertex> {
    let half = size * 0.5;
    let corner = corner.clamp(0.0, half.x.min(half.y));
    let inner = half - Vec2::splat(corner);
    let segments = corner_segments.max(1);

    // Corner centers, walked clockwise in screen space starting bottom-right
    let corners = [
        (Vec2::new(inner.x, inner.y), 0.0),
        (Vec2::new(-inner.x, inner.y), FRAC_PI_2),
        (Vec2::new(-inner.x, -inner.y), PI),
        (Vec2::new(inner.x, -inner.y), PI + FRAC_PI_2),
    ];

    let mut outline = Vec::with_capacity((4 * (segments + 1)) as usize);
    for (offset, start) in corners {
        for s in 0..=segments {
            let theta = start + FRAC_PI_2 * (s as f32 / segments as f32);
            outline.push(center + offset + Vec2::from_angle(theta) * corner);
        }
    }

    polygon(center, &outline, color)
}

/// Triangle fan around `center`. The outline must be star-shaped around it.
pub fn polygon(center: Vec2, outline: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let n = outline.len();
    if n < 3 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity(n * 3);
    for i in 0..n {
        let p1 = outline[i];
        let p2 = outline[(i + 1) % n];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }
    vertices
}

fn push_quad(vertices: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));

    vertices.push(Vertex::new(c.x, c.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(d.x, d.y, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 5.0, WHITE, 16).len(), 48);
    }

    #[test]
    fn test_ring_stays_between_radii() {
        let verts = ring(Vec2::new(10.0, 10.0), 20.0, 22.0, WHITE, 24);
        assert_eq!(verts.len(), 24 * 6);
        for v in verts {
            let r = Vec2::from(v.position).distance(Vec2::new(10.0, 10.0));
            assert!(r > 19.99 && r < 22.01);
        }
    }

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(1.0, 2.0), Vec2::new(10.0, 4.0), WHITE);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [11.0, 6.0]));
        assert!(verts.iter().any(|v| v.position == [1.0, 2.0]));
    }

    #[test]
    fn test_rounded_rect_within_bounds() {
        let center = Vec2::new(50.0, 50.0);
        let verts = rounded_rect(center, Vec2::splat(30.0), 6.0, WHITE, 4);
        assert!(!verts.is_empty());
        for v in &verts {
            assert!((v.position[0] - 50.0).abs() <= 15.001);
            assert!((v.position[1] - 50.0).abs() <= 15.001);
        }
        // Corner is cut: nothing reaches the exact square corner
        assert!(
            verts
                .iter()
                .all(|v| Vec2::from(v.position).distance(Vec2::splat(65.0)) > 1.0)
        );
    }

    #[test]
    fn test_polygon_needs_three_points() {
        assert!(polygon(Vec2::ZERO, &[Vec2::X, Vec2::Y], WHITE).is_empty());
        let tri = [Vec2::X, Vec2::Y, Vec2::NEG_X];
        assert_eq!(polygon(Vec2::ZERO, &tri, WHITE).len(), 9);
    }

    #[test]
    fn test_line_has_width() {
        let verts = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE);
        assert!(verts.iter().any(|v| v.position == [0.0, 1.0]));
        assert!(verts.iter().any(|v| v.position == [10.0, -1.0]));
    }
}
