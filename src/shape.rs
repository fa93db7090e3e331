//! Plain-data shape primitives used by the collision routines
//!
//! Construction validates the shape invariants (non-negative extents,
//! finite coordinates) and fails with [`Error::Shape`]; fields stay public
//! because these are caller-owned data records mutated in place every
//! simulation tick.

use serde::{Deserialize, Serialize};

use crate::collision;
use crate::error::Error;
use crate::vec::Vec2;

/// A circle: center plus radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Fails when the radius is negative or any coordinate non-finite
    pub fn new(center: Vec2, radius: f64) -> Result<Self, Error> {
        if !center.is_finite() || !radius.is_finite() {
            return Err(Error::Shape("circle has non-finite data".into()));
        }
        if radius < 0.0 {
            return Err(Error::Shape(format!("circle radius {radius} is negative")));
        }
        Ok(Self { center, radius })
    }
}

/// An axis-aligned rectangle: top-left origin plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Fails when either size component is negative or any coordinate
    /// non-finite
    pub fn new(origin: Vec2, size: Vec2) -> Result<Self, Error> {
        if !origin.is_finite() || !size.is_finite() {
            return Err(Error::Shape("rect has non-finite data".into()));
        }
        if size.x < 0.0 || size.y < 0.0 {
            return Err(Error::Shape(format!(
                "rect size ({}, {}) has a negative component",
                size.x, size.y
            )));
        }
        Ok(Self { origin, size })
    }

    /// Corner opposite the origin
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// A polygon as an ordered vertex list. Containment tests require at
/// least 3 vertices; construction does not, so partially built outlines
/// can be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, Error> {
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(Error::Shape("polygon has a non-finite vertex".into()));
        }
        Ok(Self { vertices })
    }
}

/// A line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line {
    pub fn new(start: Vec2, end: Vec2) -> Result<Self, Error> {
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::Shape("line has non-finite data".into()));
        }
        Ok(Self { start, end })
    }
}

/// Tagged shape union with exhaustive matching in the detector, replacing
/// duck-typed field access with variants that cannot be half-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
    Polygon(Polygon),
    Line(Line),
}

impl Shape {
    /// Point-containment dispatch. Polygons with fewer than 3 vertices and
    /// lines (no interior) fail with [`Error::MissingShapeData`].
    pub fn contains_point(&self, p: Vec2) -> Result<bool, Error> {
        match self {
            Shape::Circle(c) => Ok(collision::point_in_circle(p, c)),
            Shape::Rect(r) => Ok(collision::point_in_rect(p, r)),
            Shape::Polygon(poly) => collision::point_in_polygon(p, &poly.vertices),
            Shape::Line(_) => Err(Error::MissingShapeData(
                "a line segment has no interior to contain a point".into(),
            )),
        }
    }
}

/// A thick annular arc band: radial extent `[inner_radius, outer_radius]`
/// around `center`, angular extent `[start_angle, end_angle]` with angles
/// measured in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Vec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn new(
        center: Vec2,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self, Error> {
        if !center.is_finite()
            || ![inner_radius, outer_radius, start_angle, end_angle]
                .iter()
                .all(|v| v.is_finite())
        {
            return Err(Error::Shape("arc has non-finite data".into()));
        }
        if inner_radius < 0.0 {
            return Err(Error::Shape(format!(
                "arc inner radius {inner_radius} is negative"
            )));
        }
        if outer_radius < inner_radius {
            return Err(Error::Shape(format!(
                "arc outer radius {outer_radius} is smaller than inner radius {inner_radius}"
            )));
        }
        Ok(Self {
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
        })
    }
}

/// A filled circular sector: an [`Arc`] with zero inner radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub center: Vec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Wedge {
    pub fn new(center: Vec2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self, Error> {
        if !center.is_finite() || ![radius, start_angle, end_angle].iter().all(|v| v.is_finite()) {
            return Err(Error::Shape("wedge has non-finite data".into()));
        }
        if radius < 0.0 {
            return Err(Error::Shape(format!("wedge radius {radius} is negative")));
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
        })
    }
}
