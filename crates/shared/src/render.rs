use crate::protocol::{CellColor, Grid};
use crate::transform::{self, CellRect};
use crate::viewport::Viewport;

/// Something tiles can be painted on. The browser implementation wraps a
/// `<canvas>` and its 2D context.
pub trait Surface {
    /// Size the surface is laid out at (CSS pixels).
    fn display_size(&self) -> (u32, u32);
    /// Size of the backing pixel buffer.
    fn buffer_size(&self) -> (u32, u32);
    fn resize_buffer(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: CellRect, color: &CellColor);
}

/// Match the backing buffer to the displayed size so tiles are not stretched.
/// Returns true when the buffer was resized.
pub fn fit_to_display<S: Surface + ?Sized>(surface: &mut S) -> bool {
    let display = surface.display_size();
    if surface.buffer_size() == display {
        return false;
    }
    surface.resize_buffer(display.0, display.1);
    true
}

/// Store `grid` as the viewport's current snapshot and paint it.
pub fn render_grid<S: Surface + ?Sized>(viewport: &mut Viewport, grid: Grid, surface: &mut S) {
    viewport.grid = grid;
    paint(viewport, surface);
}

/// Full repaint of the viewport's current grid. Recomputes render size and the
/// centered origin, which input handling relies on until the next paint.
pub fn paint<S: Surface + ?Sized>(viewport: &mut Viewport, surface: &mut S) {
    fit_to_display(surface);
    surface.clear();

    let (width, height) = surface.buffer_size();
    let (width, height) = (f64::from(width), f64::from(height));

    viewport.render_width = viewport.tile_width * viewport.columns() as f64;
    viewport.render_height = viewport.tile_height * viewport.rows() as f64;

    let (origin_x, origin_y) =
        transform::centered_origin(width, height, viewport.render_width, viewport.render_height);
    viewport.render_origin_x = origin_x;
    viewport.render_origin_y = origin_y;

    for (i, column) in viewport.grid.iter().enumerate() {
        for (j, color) in column.iter().enumerate() {
            surface.fill_rect(transform::cell_rect(viewport, i, j, height), color);
        }
    }
}
