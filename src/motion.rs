//! Per-tick motion helpers
//!
//! Deterministic and stateless: all state lives in the caller-owned
//! [`MovingBody`]. The driver calls these once per simulation tick.

use crate::collision::MovingBody;
use crate::vec::Vec2;

/// Exponential approach: move a fixed fraction of the remaining distance
/// toward `target` each tick. Never exactly arrives; the caller decides a
/// snap threshold.
pub fn ease_towards(body: &mut MovingBody, target: Vec2, factor: f64) {
    body.pos += (target - body.pos) * factor;
}

/// Accelerate downward by `g` this tick. The caller gates this on its own
/// grounded predicate.
#[inline]
pub fn apply_gravity(body: &mut MovingBody, g: f64) {
    body.vel.y += g;
}

/// Advance position by the current velocity over `dt` seconds
#[inline]
pub fn integrate(body: &mut MovingBody, dt: f64) {
    body.pos += body.vel * dt;
}
