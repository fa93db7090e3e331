//! Vectile - a 2D game math, collision, and tile-map kernel
//!
//! Core modules:
//! - `vec` / `matrix`: vector algebra and small dense transforms
//! - `shape`: plain-data shape primitives (circle, rect, polygon, line)
//! - `collision`: overlap predicates and elastic collision response
//! - `motion`: per-tick motion helpers (easing, gravity)
//! - `tilemap`: tile grid with camera-relative viewport culling
//! - `sprite` / `input` / `frame`: pure bookkeeping for the outer layers
//!
//! The crate is the synchronous simulation core of a tile- or
//! particle-based canvas game. It never draws, listens to events, or
//! schedules frames; a driver advances entities via `motion`, queries
//! `collision` for overlapping pairs, and asks `tilemap` which cells are
//! visible for drawing through a [`surface::Surface`].

pub mod collision;
pub mod error;
pub mod frame;
pub mod input;
pub mod matrix;
pub mod motion;
pub mod shape;
pub mod sprite;
pub mod surface;
pub mod tilemap;
pub mod vec;

pub use collision::MovingBody;
pub use error::Error;
pub use matrix::{Mat3, Mat4};
pub use shape::{Arc, Circle, Line, Polygon, Rect, Shape, Wedge};
pub use tilemap::{Camera, TileMap, VisibleRange};
pub use vec::{Vec2, Vec3};

use std::f64::consts::{PI, TAU};

/// Kernel configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f64 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame deltas above this are discarded entirely (tab-suspension
    /// policy: one huge delta must not teleport every entity)
    pub const MAX_FRAME_DT: f64 = 0.2;
}

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f64) -> f64 {
    while angle >= PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

/// Wrap an angle into [0, 2π)
///
/// `atan2` yields negative angles for the lower half-plane; arc and wedge
/// containment tests must wrap those before comparing against the
/// `[start_angle, end_angle]` band.
#[inline]
pub fn wrap_angle(mut angle: f64) -> f64 {
    while angle < 0.0 {
        angle += TAU;
    }
    while angle >= TAU {
        angle -= TAU;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_normalize_angle_range() {
        for a in [-10.0, -PI, -FRAC_PI_2, 0.0, PI, TAU, 100.0] {
            let n = normalize_angle(a);
            assert!((-PI..PI).contains(&n), "normalize_angle({a}) = {n}");
        }
    }

    #[test]
    fn test_normalize_angle_identities() {
        // π lands on -π (the range is half-open at π)
        assert!((normalize_angle(PI) + PI).abs() < 1e-12);
        assert!((normalize_angle(3.0 * PI) + PI).abs() < 1e-12);
        assert_eq!(normalize_angle(FRAC_PI_2), FRAC_PI_2);
        // normalize and wrap agree modulo 2π
        for a in [-7.3, -1.0, 2.5, 9.9] {
            let diff = wrap_angle(normalize_angle(a)) - wrap_angle(a);
            assert!(diff.abs() < 1e-12 || (diff.abs() - TAU).abs() < 1e-12);
        }
    }

    #[test]
    fn test_wrap_angle_lower_half_plane() {
        // Straight below center: atan2 gives -π/2, the band math needs 3π/2
        let wrapped = wrap_angle(-FRAC_PI_2);
        assert!((wrapped - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_angle_range() {
        for a in [-10.0, -TAU, -0.0, 0.0, 1.0, TAU, TAU + 0.5, 100.0] {
            let w = wrap_angle(a);
            assert!((0.0..TAU).contains(&w), "wrap_angle({a}) = {w}");
        }
    }

    #[test]
    fn test_polar_round_trip() {
        let v = Vec2::new(3.0, -4.0);
        let (r, theta) = cartesian_to_polar(v);
        let back = polar_to_cartesian(r, theta);
        assert!((back.x - v.x).abs() < 1e-12);
        assert!((back.y - v.y).abs() < 1e-12);
    }
}
