use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gopherlife_shared::display::WorldDisplay;
use gopherlife_shared::protocol::UpdateResponse;
use gopherlife_shared::update_loop::{self, apply_frame, run_update_loop, FrameSink, LinkStatus};
use gopherlife_shared::viewport::Viewport;

use crate::api::{self, HttpWorldApi};
use crate::components::gopher_panel::GopherPanel;
use crate::components::help_overlay::HelpOverlay;
use crate::components::status_badge::StatusBadge;
use crate::components::world_canvas::WorldCanvas;
use crate::config;
use crate::surface::{CanvasSurface, CANVAS_ID};

/// Writes loop output into the page's signals and repaints the canvas.
struct CanvasSink {
    viewport: Signal<Viewport>,
    display: Signal<WorldDisplay>,
    status: Signal<LinkStatus>,
}

impl FrameSink for CanvasSink {
    fn frame(&mut self, frame: UpdateResponse) {
        let mut surface = CanvasSurface::find(CANVAS_ID);
        let mut viewport = self.viewport.write();
        let mut display = self.display.write();
        apply_frame(frame, &mut viewport, &mut display, surface.as_mut());
    }

    fn status(&mut self, status: LinkStatus) {
        if status.is_degraded() {
            tracing::warn!(status = %status.label(), "update link degraded");
        }
        self.status.set(status);
    }
}

#[component]
pub fn WorldPage() -> Element {
    let api = use_hook(|| {
        let config = config::load_config();
        let origin = api::page_origin().unwrap_or_default();
        (HttpWorldApi::new(config.base_url(&origin)), config.retry)
    });
    let (api, retry) = api;

    let viewport = use_signal(Viewport::default);
    let display = use_signal(WorldDisplay::default);
    let status = use_signal(LinkStatus::default);
    let mut show_help = use_signal(|| false);

    let loop_api = api.clone();
    let handle = use_hook(move || {
        let (handle, stop) = update_loop::stop_pair();
        spawn(async move {
            let mut sink = CanvasSink { viewport, display, status };
            let exit = run_update_loop(
                &loop_api,
                &mut sink,
                retry,
                gloo_timers::future::sleep,
                stop,
            )
            .await;
            tracing::info!(?exit, "update loop finished");
        });
        Rc::new(RefCell::new(Some(handle)))
    });

    use_drop(move || {
        if let Some(handle) = handle.borrow_mut().take() {
            handle.stop();
        }
    });

    let current = display.read().clone();

    rsx! {
        div { class: "app-container",
            header { class: "top-bar",
                h1 { "Gopherlife" }
                StatusBadge { status: status.read().clone() }
                button {
                    class: "secondary",
                    onclick: move |_| show_help.toggle(),
                    "Help"
                }
            }

            WorldCanvas { viewport: viewport, api: api }

            div {
                class: "below-canvas",
                dangerous_inner_html: "{current.text_below_canvas}",
            }

            GopherPanel { gopher: current.selected }

            HelpOverlay { show: show_help }
        }
    }
}
