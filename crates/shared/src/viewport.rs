use crate::protocol::{Grid, UpdateResponse};

/// Tile size (pixels per world cell) before the first update arrives.
pub const DEFAULT_TILE_SIZE: f64 = 15.0;

/// Zoom floor. Tile sizes never go below this.
pub const MIN_TILE_SIZE: f64 = 1.0;

/// Everything the page knows about how the world is laid out on the canvas.
///
/// There is exactly one per page. It is never cloned; the update loop, the
/// renderer and the input handlers all borrow the same instance.
#[derive(Debug, PartialEq)]
pub struct Viewport {
    pub tile_width: f64,
    pub tile_height: f64,
    /// Pixel offset of render-grid cell (0,0), recomputed on every paint.
    pub render_origin_x: f64,
    pub render_origin_y: f64,
    pub render_width: f64,
    pub render_height: f64,
    pub grid: Grid,
    /// World coordinate of render-grid cell (0,0), as reported by the server.
    pub server_origin_x: i64,
    pub server_origin_y: i64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
            render_origin_x: 0.0,
            render_origin_y: 0.0,
            render_width: 0.0,
            render_height: 0.0,
            grid: Grid::new(),
            server_origin_x: 0,
            server_origin_y: 0,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of render-grid cells along X (outer grid length).
    pub fn columns(&self) -> usize {
        self.grid.len()
    }

    /// Number of render-grid cells along Y, taken from the first column.
    pub fn rows(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn zoom_in(&mut self) {
        self.tile_width += 1.0;
        self.tile_height += 1.0;
    }

    /// Shrink tiles by one pixel. Once either side would reach the floor both
    /// are pinned to exactly [`MIN_TILE_SIZE`].
    pub fn zoom_out(&mut self) {
        self.tile_width -= 1.0;
        self.tile_height -= 1.0;

        if self.tile_width <= MIN_TILE_SIZE || self.tile_height <= MIN_TILE_SIZE {
            self.tile_width = MIN_TILE_SIZE;
            self.tile_height = MIN_TILE_SIZE;
        }
    }

    /// Take the server's zoom and world origin. The grid itself is stored by the
    /// renderer when it paints.
    pub fn apply_update(&mut self, update: &UpdateResponse) {
        self.server_origin_x = update.start_x;
        self.server_origin_y = update.start_y;
        self.tile_width = sanitize_tile_size(update.tile_width, "tile_width");
        self.tile_height = sanitize_tile_size(update.tile_height, "tile_height");
    }
}

fn sanitize_tile_size(value: f64, field: &'static str) -> f64 {
    if value.is_finite() && value >= MIN_TILE_SIZE {
        value
    } else {
        tracing::warn!(field, value, "server sent degenerate tile size, clamping");
        MIN_TILE_SIZE
    }
}
