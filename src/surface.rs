//! Drawing seam between the kernel and whatever renders it
//!
//! The kernel never draws; it hands geometry to a [`Surface`]. Backends
//! implement the three primitives and the kernel stays free of any
//! graphics API. Tests use a recording surface; the demo binary uses a
//! counting one.

use crate::shape::{Circle, Rect, Shape};
use crate::vec::Vec2;

/// RGBA color, components in [0, 1]
pub type Color = [f32; 4];

/// Fill and stroke settings for a single draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub line_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some([1.0, 1.0, 1.0, 1.0]),
            stroke: None,
            line_width: 1.0,
        }
    }
}

impl Style {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            line_width: 1.0,
        }
    }

    pub fn stroked(color: Color, line_width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            line_width,
        }
    }
}

/// Render target abstraction. Coordinates are world-space; the backend
/// owns any camera transform.
pub trait Surface {
    fn draw_circle(&mut self, center: Vec2, radius: f64, style: &Style);
    fn draw_rect(&mut self, rect: &Rect, style: &Style);
    /// An open vertex chain when only stroking, a closed one when filling
    fn draw_polygon(&mut self, vertices: &[Vec2], style: &Style);
}

/// Dispatch a [`Shape`] to the matching primitive. Lines draw as a
/// two-vertex polygon chain.
pub fn draw_shape<S: Surface>(surface: &mut S, shape: &Shape, style: &Style) {
    match shape {
        Shape::Circle(Circle { center, radius }) => surface.draw_circle(*center, *radius, style),
        Shape::Rect(rect) => surface.draw_rect(rect, style),
        Shape::Polygon(poly) => surface.draw_polygon(&poly.vertices, style),
        Shape::Line(line) => surface.draw_polygon(&[line.start, line.end], style),
    }
}
