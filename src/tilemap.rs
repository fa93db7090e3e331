//! Tile grid with camera-relative viewport culling
//!
//! The map stores opaque cell ids row-major; the camera is an
//! axis-aligned window clamped to the pannable extent of the world.
//! `visible_range` converts the camera rectangle to half-open cell index
//! ranges so a renderer only touches the cells actually on screen.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::shape::Rect;
use crate::vec::Vec2;

/// Opaque per-cell value; meaning belongs to the game
pub type CellId = u32;

/// Half-open visible cell index ranges: rows `row_start..row_end`,
/// columns `col_start..col_end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub row_start: u32,
    pub row_end: u32,
    pub col_start: u32,
    pub col_end: u32,
}

/// A visible cell together with its grid position and world-space origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleCell {
    pub row: u32,
    pub col: u32,
    pub id: CellId,
    /// World-space top-left corner of the cell, for drawing
    pub origin: Vec2,
}

/// Row-major grid of cell values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    cell_size: Vec2,
    cols: u32,
    rows: u32,
    cells: Vec<CellId>,
}

impl TileMap {
    /// Fails with [`Error::Shape`] when `cells.len() != cols * rows` or
    /// the cell size is not strictly positive
    pub fn new(cell_size: Vec2, cols: u32, rows: u32, cells: Vec<CellId>) -> Result<Self, Error> {
        if !cell_size.is_finite() || cell_size.x <= 0.0 || cell_size.y <= 0.0 {
            return Err(Error::Shape(format!(
                "cell size ({}, {}) must be positive",
                cell_size.x, cell_size.y
            )));
        }
        let expected = cols as usize * rows as usize;
        if cells.len() != expected {
            return Err(Error::Shape(format!(
                "cell count mismatch: expected {expected} ({cols}x{rows}), got {}",
                cells.len()
            )));
        }
        Ok(Self {
            cell_size,
            cols,
            rows,
            cells,
        })
    }

    #[inline]
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total world-space extent of the map
    pub fn world_size(&self) -> Vec2 {
        self.cell_size * Vec2::new(f64::from(self.cols), f64::from(self.rows))
    }

    /// Cell value by grid position; `None` outside the grid
    pub fn cell(&self, row: u32, col: u32) -> Option<CellId> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[(row * self.cols + col) as usize])
    }

    /// Cell value under a world-space position. Out-of-range coordinates
    /// fail with [`Error::OutOfBounds`] rather than aliasing to cell 0.
    pub fn cell_at(&self, world: Vec2) -> Result<CellId, Error> {
        let oob = Error::OutOfBounds { x: world.x, y: world.y };
        if world.x < 0.0 || world.y < 0.0 {
            return Err(oob);
        }
        let col = (world.x / self.cell_size.x).floor() as u32;
        let row = (world.y / self.cell_size.y).floor() as u32;
        self.cell(row, col).ok_or(oob)
    }

    /// Visible cell index ranges for a camera window. The lower bounds
    /// floor and clamp to 0; the upper bounds ceil (so partially visible
    /// trailing cells are included) and clamp to the grid dimensions.
    pub fn visible_range(&self, camera: &Camera) -> VisibleRange {
        let min = camera.pos;
        let max = camera.pos + camera.viewport;
        let clamp_col = |v: f64| (v.max(0.0) as u32).min(self.cols);
        let clamp_row = |v: f64| (v.max(0.0) as u32).min(self.rows);
        VisibleRange {
            col_start: clamp_col((min.x / self.cell_size.x).floor()),
            row_start: clamp_row((min.y / self.cell_size.y).floor()),
            col_end: clamp_col((max.x / self.cell_size.x).ceil()),
            row_end: clamp_row((max.y / self.cell_size.y).ceil()),
        }
    }

    /// Iterate the visible cells in row-major order, yielding grid
    /// position, cell id, and world-space origin for drawing
    pub fn visible_cells(&self, camera: &Camera) -> impl Iterator<Item = VisibleCell> + '_ {
        let range = self.visible_range(camera);
        (range.row_start..range.row_end).flat_map(move |row| {
            (range.col_start..range.col_end).map(move |col| VisibleCell {
                row,
                col,
                id: self.cells[(row * self.cols + col) as usize],
                origin: self.cell_size * Vec2::new(f64::from(col), f64::from(row)),
            })
        })
    }
}

/// Axis-aligned viewport that follows a target and clamps to the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec2,
    pub viewport: Vec2,
    pub world_bounds: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2, world_bounds: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            viewport,
            world_bounds,
        }
    }

    /// Camera whose pannable extent is bound to a map's world size
    pub fn for_map(map: &TileMap, viewport: Vec2) -> Self {
        Self::new(viewport, map.world_size())
    }

    /// Center on `target_center`, then clamp componentwise into
    /// `[0, world_bounds - viewport]`. An axis where the viewport exceeds
    /// the world pins to 0.
    pub fn follow(&mut self, target_center: Vec2) {
        let desired = target_center - self.viewport * 0.5;
        self.pos = Vec2::new(
            clamp_axis(desired.x, self.world_bounds.x - self.viewport.x),
            clamp_axis(desired.y, self.world_bounds.y - self.viewport.y),
        );
    }

    /// The camera's world-space window
    pub fn rect(&self) -> Rect {
        Rect {
            origin: self.pos,
            size: self.viewport,
        }
    }
}

fn clamp_axis(v: f64, max: f64) -> f64 {
    if max <= 0.0 { 0.0 } else { v.clamp(0.0, max) }
}
