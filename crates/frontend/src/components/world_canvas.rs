use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use gopherlife_shared::input;
use gopherlife_shared::render;
use gopherlife_shared::viewport::Viewport;

use crate::api::HttpWorldApi;
use crate::surface::{CanvasSurface, CANVAS_ID};

/// Vertical wheel delta as the browser reported it, whatever its delta mode.
/// The server receives this value unscaled.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y,
        WheelDelta::Pages(d) => d.y,
    }
}

/// The world canvas. Gestures read and write the page's viewport and are
/// forwarded to the server; the update loop does all regular painting.
#[component]
pub fn WorldCanvas(viewport: Signal<Viewport>, api: HttpWorldApi) -> Element {
    // Signal is Copy; rebind so the handlers can write through it
    let mut viewport = viewport;

    let wheel_api = api.clone();
    let key_api = api.clone();
    let click_api = api;

    rsx! {
        canvas {
            id: CANVAS_ID,
            class: "world-canvas",
            tabindex: "0",

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();

                let delta_y = wheel_delta_y(evt.data().delta());
                let mut vp = viewport.write();
                let command = input::on_wheel(&mut vp, delta_y);
                if let Some(mut surface) = CanvasSurface::find(CANVAS_ID) {
                    render::paint(&mut vp, &mut surface);
                }
                drop(vp);

                wheel_api.send_fire(command);
            },

            onkeydown: move |evt: Event<KeyboardData>| {
                let key = evt.data().key().to_string();
                if let Some(command) = input::on_key(&key) {
                    key_api.send_fire(command);
                }
            },

            onclick: move |evt: Event<MouseData>| {
                let Some(surface) = CanvasSurface::find(CANVAS_ID) else { return };
                let client = evt.client_coordinates();
                let point = surface.screen_point(client.x, client.y);
                let command = input::on_click(&viewport.read(), point, surface.height());
                click_api.send_fire(command);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_delta_pixels_pass_through() {
        assert_eq!(wheel_delta_y(WheelDelta::pixels(0.0, -10.0, 0.0)), -10.0);
    }

    #[test]
    fn test_wheel_delta_lines_not_scaled() {
        assert_eq!(wheel_delta_y(WheelDelta::lines(0.0, 3.0, 0.0)), 3.0);
    }

    #[test]
    fn test_wheel_delta_pages_not_scaled() {
        assert_eq!(wheel_delta_y(WheelDelta::pages(0.0, -1.0, 0.0)), -1.0);
    }

    #[test]
    fn test_line_mode_scroll_sends_raw_delta() {
        let mut vp = Viewport::new();
        let command = input::on_wheel(&mut vp, wheel_delta_y(WheelDelta::lines(0.0, 3.0, 0.0)));
        assert_eq!(command.query(), vec![("deltaY", "3".to_string())]);
        assert_eq!(vp.tile_width, 14.0);
    }
}
