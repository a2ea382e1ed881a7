use gopherlife_shared::protocol::CellColor;
use gopherlife_shared::render::Surface;
use gopherlife_shared::transform::{CellRect, ScreenPoint};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub const CANVAS_ID: &str = "worldCanvas";

/// Convert client (viewport) coordinates to canvas-relative screen coordinates.
pub fn client_to_canvas(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> ScreenPoint {
    ScreenPoint::new(client_x - rect_left, client_y - rect_top)
}

/// The world `<canvas>` and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look the canvas up by element id. `None` until it is mounted.
    pub fn find(id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Height of the backing buffer, the `H` the Y flip is taken against.
    pub fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    /// Map a mouse event's client coordinates onto this canvas.
    pub fn screen_point(&self, client_x: f64, client_y: f64) -> ScreenPoint {
        let rect = self.canvas.get_bounding_client_rect();
        client_to_canvas(client_x, client_y, rect.left(), rect.top())
    }
}

impl Surface for CanvasSurface {
    fn display_size(&self) -> (u32, u32) {
        (
            self.canvas.client_width().max(0) as u32,
            self.canvas.client_height().max(0) as u32,
        )
    }

    fn buffer_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize_buffer(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (width, height) = self.buffer_size();
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    fn fill_rect(&mut self, rect: CellRect, color: &CellColor) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_to_canvas_origin() {
        let p = client_to_canvas(100.0, 200.0, 100.0, 200.0);
        assert!((p.x - 0.0).abs() < 1e-9);
        assert!((p.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_client_to_canvas_offset() {
        let p = client_to_canvas(450.0, 350.0, 320.0, 50.0);
        assert!((p.x - 130.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_client_to_canvas_scrolled_page() {
        // bounding rect is viewport-relative, so a canvas scrolled partly off-screen has a negative top
        let p = client_to_canvas(10.0, 5.0, 0.0, -40.0);
        assert!((p.y - 45.0).abs() < 1e-9);
    }
}
