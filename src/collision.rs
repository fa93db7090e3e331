//! Overlap detection and elastic collision response
//!
//! Detection is a set of pure predicates over the shape primitives;
//! response is the standard impulse form of the 1D elastic collision
//! generalized along the contact normal, weighted by inverse masses.
//!
//! Boundary convention: overlap tests use strict inequality, so two
//! touching circles (or rects sharing an edge) do NOT collide. Point
//! containment for circles is inclusive (`distance <= radius`).

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::shape::{Arc, Circle, Rect, Shape, Wedge};
use crate::vec::Vec2;
use crate::wrap_angle;

/// True iff the circles interpenetrate. Touching circles
/// (`distance == r1 + r2`) do not count.
#[inline]
pub fn circle_overlap(a: &Circle, b: &Circle) -> bool {
    a.center.distance_to(b.center) < a.radius + b.radius
}

/// Axis-aligned rectangle overlap. Shared edges do not count.
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    let (amax, bmax) = (a.max(), b.max());
    a.origin.x < bmax.x && amax.x > b.origin.x && a.origin.y < bmax.y && amax.y > b.origin.y
}

/// Clamp-based closest-point test, anchored at the rectangle center
pub fn circle_rect_overlap(c: &Circle, r: &Rect) -> bool {
    let half = r.size * 0.5;
    let diff = (c.center - r.center()).map(f64::abs);
    let dx = (diff.x - half.x).max(0.0);
    let dy = (diff.y - half.y).max(0.0);
    dx.hypot(dy) < c.radius
}

/// Inclusive containment: a point on the rim is inside
#[inline]
pub fn point_in_circle(p: Vec2, c: &Circle) -> bool {
    p.distance_to(c.center) <= c.radius
}

/// Strict interior test: points on the edges are outside
pub fn point_in_rect(p: Vec2, r: &Rect) -> bool {
    let max = r.max();
    p.x > r.origin.x && p.x < max.x && p.y > r.origin.y && p.y < max.y
}

/// True iff the point's radial distance lies within
/// `[inner_radius, outer_radius]` and its angle, wrapped into `[0, 2π)`,
/// within `[start_angle, end_angle]`
pub fn point_in_arc(p: Vec2, arc: &Arc) -> bool {
    let diff = p - arc.center;
    let r = diff.length();
    if r < arc.inner_radius || r > arc.outer_radius {
        return false;
    }
    let angle = wrap_angle(diff.angle());
    angle >= arc.start_angle && angle <= arc.end_angle
}

/// Arc containment with a zero inner radius
pub fn point_in_wedge(p: Vec2, wedge: &Wedge) -> bool {
    let diff = p - wedge.center;
    if diff.length() > wedge.radius {
        return false;
    }
    let angle = wrap_angle(diff.angle());
    angle >= wedge.start_angle && angle <= wedge.end_angle
}

/// Even-odd ray-casting containment. Fewer than 3 vertices is not a
/// testable polygon.
pub fn point_in_polygon(p: Vec2, vertices: &[Vec2]) -> Result<bool, Error> {
    if vertices.len() < 3 {
        return Err(Error::MissingShapeData(format!(
            "polygon containment needs at least 3 vertices, got {}",
            vertices.len()
        )));
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (a, b) = (vertices[i], vertices[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    Ok(inside)
}

/// Containment dispatch over the tagged union
pub fn point_in_shape(p: Vec2, shape: &Shape) -> Result<bool, Error> {
    shape.contains_point(p)
}

/// Reflect a velocity off a surface: `v' = v - 2(v·n)n`
#[inline]
pub fn reflect(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// A circular body with velocity and mass, owned and mutated by the
/// caller. The kernel only reads and writes `pos` and `vel`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f64,
    pub mass: f64,
}

impl MovingBody {
    /// Body at rest with unit mass
    pub fn new(pos: Vec2, radius: f64) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            mass: 1.0,
        }
    }

    pub fn with_mass(pos: Vec2, radius: f64, mass: f64) -> Self {
        Self { mass, ..Self::new(pos, radius) }
    }

    #[inline]
    pub fn as_circle(&self) -> Circle {
        Circle {
            center: self.pos,
            radius: self.radius,
        }
    }

    #[inline]
    pub fn overlaps(&self, other: &MovingBody) -> bool {
        circle_overlap(&self.as_circle(), &other.as_circle())
    }
}

/// Contact normal from `a` toward `b`. Coincident centers leave the
/// normal undefined; policy is a fixed `(1, 0)` axis so a real-time loop
/// always makes forward progress.
fn contact_normal(a: &MovingBody, b: &MovingBody) -> Vec2 {
    let delta = b.pos - a.pos;
    if delta.length_squared() == 0.0 {
        Vec2::X
    } else {
        delta.normalize_or_zero()
    }
}

/// Elastic pairwise response for two circle bodies already detected as
/// overlapping. Skips resolution when the bodies are separating along the
/// contact normal, which prevents sticky re-collisions.
pub fn resolve_elastic(a: &mut MovingBody, b: &mut MovingBody) {
    let n = contact_normal(a, b);
    let rvn = (a.vel - b.vel).dot(n);
    if rvn <= 0.0 {
        return;
    }
    let impulse = 2.0 * rvn / (1.0 / a.mass + 1.0 / b.mass);
    a.vel -= n * (impulse / a.mass);
    b.vel += n * (impulse / b.mass);
}

/// Push two overlapping circle bodies apart along the contact normal,
/// splitting the penetration depth by inverse mass. No-op when the
/// bodies do not overlap.
pub fn separate_circles(a: &mut MovingBody, b: &mut MovingBody) {
    let dist = a.pos.distance_to(b.pos);
    let penetration = a.radius + b.radius - dist;
    if penetration <= 0.0 {
        return;
    }
    let n = contact_normal(a, b);
    let inv_a = 1.0 / a.mass;
    let inv_b = 1.0 / b.mass;
    let total = inv_a + inv_b;
    a.pos -= n * (penetration * inv_a / total);
    b.pos += n * (penetration * inv_b / total);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Vec2::new(x, y), r).unwrap()
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h)).unwrap()
    }

    #[test]
    fn test_circle_overlap_strict_boundary() {
        let a = circle(0.0, 0.0, 2.0);
        // Exactly touching: distance == r1 + r2
        assert!(!circle_overlap(&a, &circle(5.0, 0.0, 3.0)));
        // A hair closer
        assert!(circle_overlap(&a, &circle(5.0 - 1e-9, 0.0, 3.0)));
    }

    #[test]
    fn test_circle_overlap_symmetry() {
        let a = circle(1.0, 2.0, 3.0);
        let b = circle(4.0, -1.0, 2.0);
        assert_eq!(circle_overlap(&a, &b), circle_overlap(&b, &a));
    }

    #[test]
    fn test_rect_overlap_shared_edge_is_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!rect_overlap(&a, &rect(10.0, 0.0, 5.0, 5.0)));
        assert!(rect_overlap(&a, &rect(9.0, 9.0, 5.0, 5.0)));
        assert!(!rect_overlap(&a, &rect(0.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_circle_rect_overlap_edge_and_corner() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        // Circle poking through the right edge
        assert!(circle_rect_overlap(&circle(12.0, 5.0, 3.0), &r));
        // Near the corner but diagonal distance keeps it clear:
        // closest point is (10, 10), distance sqrt(8) ≈ 2.83 > 2
        assert!(!circle_rect_overlap(&circle(12.0, 12.0, 2.0), &r));
        // Same spot, bigger radius
        assert!(circle_rect_overlap(&circle(12.0, 12.0, 3.0), &r));
        // Center inside the rect
        assert!(circle_rect_overlap(&circle(5.0, 5.0, 1.0), &r));
    }

    #[test]
    fn test_point_in_circle_rim_inclusive() {
        let c = circle(0.0, 0.0, 5.0);
        assert!(point_in_circle(Vec2::new(3.0, 4.0), &c));
        assert!(point_in_circle(Vec2::new(5.0, 0.0), &c));
        assert!(!point_in_circle(Vec2::new(5.0 + 1e-9, 0.0), &c));
    }

    #[test]
    fn test_point_in_rect_strict() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(point_in_rect(Vec2::new(5.0, 5.0), &r));
        assert!(!point_in_rect(Vec2::new(0.0, 5.0), &r));
        assert!(!point_in_rect(Vec2::new(10.0, 10.0), &r));
    }

    #[test]
    fn test_point_in_arc_wraps_negative_angle() {
        // Arc spanning the lower half-plane, [π, 2π]
        let arc = Arc::new(Vec2::ZERO, 1.0, 5.0, PI, TAU).unwrap();
        // Straight below center: atan2 says -π/2, wrapped that's 3π/2
        assert!(point_in_arc(Vec2::new(0.0, -3.0), &arc));
        // Straight above: π/2 is outside the band
        assert!(!point_in_arc(Vec2::new(0.0, 3.0), &arc));
        // Right radial band, wrong radius
        assert!(!point_in_arc(Vec2::new(0.0, -0.5), &arc));
        assert!(!point_in_arc(Vec2::new(0.0, -6.0), &arc));
    }

    #[test]
    fn test_point_in_wedge() {
        let wedge = Wedge::new(Vec2::ZERO, 10.0, 0.0, FRAC_PI_2).unwrap();
        assert!(point_in_wedge(Vec2::new(3.0, 3.0), &wedge));
        assert!(!point_in_wedge(Vec2::new(3.0, -3.0), &wedge));
        assert!(!point_in_wedge(Vec2::new(20.0, 0.0), &wedge));
    }

    #[test]
    fn test_point_in_polygon_square() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(Vec2::new(5.0, 5.0), &square).unwrap());
        assert!(!point_in_polygon(Vec2::new(15.0, 5.0), &square).unwrap());
        assert!(!point_in_polygon(Vec2::new(-1.0, -1.0), &square).unwrap());
    }

    #[test]
    fn test_point_in_polygon_concave() {
        // L-shape; the notch at (6, 6) is outside
        let l_shape = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 4.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(4.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(Vec2::new(2.0, 8.0), &l_shape).unwrap());
        assert!(!point_in_polygon(Vec2::new(6.0, 6.0), &l_shape).unwrap());
    }

    #[test]
    fn test_reflect_off_vertical_wall() {
        let v = reflect(Vec2::new(100.0, 25.0), Vec2::new(-1.0, 0.0));
        assert!((v.x + 100.0).abs() < 1e-12);
        assert!((v.y - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_elastic_equal_mass_head_on_swaps_velocities() {
        let mut a = MovingBody::new(Vec2::new(0.0, 0.0), 1.0);
        let mut b = MovingBody::new(Vec2::new(2.0, 0.0), 1.0);
        a.vel = Vec2::new(1.0, 0.0);
        b.vel = Vec2::new(-1.0, 0.0);
        resolve_elastic(&mut a, &mut b);
        assert!((a.vel.x + 1.0).abs() < 1e-12 && a.vel.y.abs() < 1e-12);
        assert!((b.vel.x - 1.0).abs() < 1e-12 && b.vel.y.abs() < 1e-12);
    }

    #[test]
    fn test_elastic_conserves_momentum_and_energy() {
        let mut a = MovingBody::with_mass(Vec2::new(0.0, 0.0), 1.0, 2.0);
        let mut b = MovingBody::with_mass(Vec2::new(1.5, 0.5), 1.0, 5.0);
        a.vel = Vec2::new(3.0, -1.0);
        b.vel = Vec2::new(-2.0, 0.5);
        let momentum = a.vel * a.mass + b.vel * b.mass;
        let energy = a.mass * a.vel.length_squared() + b.mass * b.vel.length_squared();
        resolve_elastic(&mut a, &mut b);
        let momentum_after = a.vel * a.mass + b.vel * b.mass;
        let energy_after = a.mass * a.vel.length_squared() + b.mass * b.vel.length_squared();
        assert!((momentum - momentum_after).length() < 1e-9);
        assert!((energy - energy_after).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_skips_separating_bodies() {
        let mut a = MovingBody::new(Vec2::new(0.0, 0.0), 1.0);
        let mut b = MovingBody::new(Vec2::new(1.0, 0.0), 1.0);
        a.vel = Vec2::new(-1.0, 0.0);
        b.vel = Vec2::new(1.0, 0.0);
        let (va, vb) = (a.vel, b.vel);
        resolve_elastic(&mut a, &mut b);
        assert_eq!(a.vel, va);
        assert_eq!(b.vel, vb);
    }

    #[test]
    fn test_elastic_coincident_centers_uses_fixed_axis() {
        let mut a = MovingBody::new(Vec2::new(1.0, 1.0), 1.0);
        let mut b = MovingBody::new(Vec2::new(1.0, 1.0), 1.0);
        a.vel = Vec2::new(2.0, 0.0);
        b.vel = Vec2::ZERO;
        resolve_elastic(&mut a, &mut b);
        // Normal fell back to (1, 0): head-on swap along x
        assert!((a.vel.x).abs() < 1e-12);
        assert!((b.vel.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_separate_circles_removes_penetration() {
        let mut a = MovingBody::new(Vec2::new(0.0, 0.0), 2.0);
        let mut b = MovingBody::new(Vec2::new(3.0, 0.0), 2.0);
        separate_circles(&mut a, &mut b);
        let dist = a.pos.distance_to(b.pos);
        assert!((dist - 4.0).abs() < 1e-9);
        // Equal masses move symmetrically
        assert!((a.pos.x + 0.5).abs() < 1e-9);
        assert!((b.pos.x - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_separate_circles_noop_when_clear() {
        let mut a = MovingBody::new(Vec2::new(0.0, 0.0), 1.0);
        let mut b = MovingBody::new(Vec2::new(5.0, 0.0), 1.0);
        separate_circles(&mut a, &mut b);
        assert_eq!(a.pos, Vec2::ZERO);
        assert_eq!(b.pos, Vec2::new(5.0, 0.0));
    }
}
