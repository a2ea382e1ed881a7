//! Conversions between the four coordinate spaces the viewport deals with.
//!
//! - screen: pixels relative to the canvas' top-left corner, Y grows downward
//! - canvas: same pixels with Y flipped so it grows upward
//! - render grid: indices into the latest grid snapshot
//! - world: absolute cells owned by the server
//!
//! Both directions flip Y against the same surface height, so a cell painted by
//! [`cell_rect`] is found again by [`screen_to_world`].

use crate::protocol::WorldCell;
use crate::viewport::Viewport;

/// A point in screen space (CSS pixels from the canvas' top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The on-screen rectangle a single render-grid cell is painted into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn centroid(&self) -> ScreenPoint {
        ScreenPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Flip a Y value between screen space and canvas space. The flip is its own inverse.
pub fn flip_y(y: f64, surface_height: f64) -> f64 {
    surface_height - y
}

/// Origin that centers a `render_w × render_h` block on the surface.
/// Negative when the grid is larger than the surface.
pub fn centered_origin(surface_w: f64, surface_h: f64, render_w: f64, render_h: f64) -> (f64, f64) {
    ((surface_w - render_w) / 2.0, (surface_h - render_h) / 2.0)
}

/// Render-grid index (1-based from the click's point of view) under a screen point.
pub fn screen_to_render(viewport: &Viewport, point: ScreenPoint, surface_height: f64) -> (i64, i64) {
    let canvas_x = point.x;
    let canvas_y = flip_y(point.y, surface_height);

    let render_x = ((canvas_x - viewport.render_origin_x) / viewport.tile_width).ceil();
    let render_y = ((canvas_y - viewport.render_origin_y) / viewport.tile_height).ceil();

    (render_x as i64, render_y as i64)
}

/// Resolve a screen point to the absolute world cell underneath it.
pub fn screen_to_world(viewport: &Viewport, point: ScreenPoint, surface_height: f64) -> WorldCell {
    let (render_x, render_y) = screen_to_render(viewport, point, surface_height);
    WorldCell::new(
        viewport.server_origin_x + render_x - 1,
        viewport.server_origin_y + render_y - 1,
    )
}

/// Screen rectangle for render-grid cell `(i, j)`.
pub fn cell_rect(viewport: &Viewport, i: usize, j: usize, surface_height: f64) -> CellRect {
    let x = viewport.render_origin_x + i as f64 * viewport.tile_width;
    let y = viewport.render_origin_y + j as f64 * viewport.tile_height;
    CellRect {
        x,
        y: flip_y(y, surface_height),
        width: viewport.tile_width,
        height: viewport.tile_height,
    }
}
