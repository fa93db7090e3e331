//! Pointer gesture classification
//!
//! Turns raw pointer positions into game intents: swipe direction from a
//! press/release pair, and a virtual joystick sample from a drag around an
//! anchor point. Event plumbing stays in the platform layer; these
//! functions only do the geometry.

use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;
use crate::vec::Vec2;

/// Dominant-axis swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Classify a press/release pair by its dominant axis. A zero delta has no
/// direction and returns `None`; an exact diagonal counts as vertical.
pub fn classify_swipe(start: Vec2, end: Vec2) -> Option<SwipeDirection> {
    let delta = end - start;
    if delta == Vec2::ZERO {
        return None;
    }
    if delta.x.abs() > delta.y.abs() {
        Some(if delta.x < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    } else {
        Some(if delta.y < 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        })
    }
}

/// One reading of a virtual joystick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoystickSample {
    /// Direction from the anchor to the pointer, in radians
    pub angle: f64,
    /// Pointer distance from the anchor, capped at the outer radius
    pub magnitude: f64,
    /// Where to draw the knob: on the anchor-pointer ray, inside the ring
    pub knob: Vec2,
}

impl JoystickSample {
    /// Velocity the stick commands: direction times deflection, where full
    /// deflection maps to `scale` units per tick
    pub fn velocity(&self, outer_radius: f64, scale: f64) -> Vec2 {
        if outer_radius <= 0.0 {
            return Vec2::ZERO;
        }
        let deflection = self.magnitude / outer_radius;
        polar_to_cartesian(deflection * scale, self.angle)
    }
}

/// Sample a virtual joystick anchored at `origin` with ring radius
/// `outer_radius`. The knob tracks the pointer but never leaves the ring.
pub fn sample_joystick(origin: Vec2, pointer: Vec2, outer_radius: f64) -> JoystickSample {
    let delta = pointer - origin;
    let angle = delta.angle();
    let magnitude = delta.length().min(outer_radius);
    JoystickSample {
        angle,
        magnitude,
        knob: origin + polar_to_cartesian(magnitude, angle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_cardinal_directions() {
        let o = Vec2::ZERO;
        assert_eq!(classify_swipe(o, Vec2::new(10.0, 2.0)), Some(SwipeDirection::Right));
        assert_eq!(classify_swipe(o, Vec2::new(-10.0, 2.0)), Some(SwipeDirection::Left));
        assert_eq!(classify_swipe(o, Vec2::new(2.0, -10.0)), Some(SwipeDirection::Up));
        assert_eq!(classify_swipe(o, Vec2::new(2.0, 10.0)), Some(SwipeDirection::Down));
    }

    #[test]
    fn test_swipe_zero_delta_is_none() {
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(classify_swipe(p, p), None);
    }

    #[test]
    fn test_swipe_diagonal_counts_as_vertical() {
        assert_eq!(
            classify_swipe(Vec2::ZERO, Vec2::new(10.0, 10.0)),
            Some(SwipeDirection::Down)
        );
        assert_eq!(
            classify_swipe(Vec2::ZERO, Vec2::new(-10.0, -10.0)),
            Some(SwipeDirection::Up)
        );
    }

    #[test]
    fn test_joystick_within_ring_tracks_pointer() {
        let sample = sample_joystick(Vec2::ZERO, Vec2::new(3.0, 4.0), 10.0);
        assert!((sample.magnitude - 5.0).abs() < 1e-12);
        assert!((sample.knob.x - 3.0).abs() < 1e-12);
        assert!((sample.knob.y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_joystick_knob_clamped_to_ring() {
        let sample = sample_joystick(Vec2::ZERO, Vec2::new(30.0, 40.0), 10.0);
        assert!((sample.magnitude - 10.0).abs() < 1e-12);
        assert!((sample.knob.length() - 10.0).abs() < 1e-12);
        // Direction preserved
        assert!((sample.angle - (40.0_f64).atan2(30.0)).abs() < 1e-12);
    }

    #[test]
    fn test_joystick_velocity_scales_with_deflection() {
        let half = sample_joystick(Vec2::ZERO, Vec2::new(5.0, 0.0), 10.0);
        let v = half.velocity(10.0, 8.0);
        assert!((v.x - 4.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);

        let full = sample_joystick(Vec2::ZERO, Vec2::new(50.0, 0.0), 10.0);
        let v = full.velocity(10.0, 8.0);
        assert!((v.x - 8.0).abs() < 1e-12);
    }
}
