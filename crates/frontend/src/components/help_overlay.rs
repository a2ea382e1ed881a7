use dioxus::prelude::*;
use gopherlife_shared::input::KEY_BINDINGS;

#[component]
pub fn HelpOverlay(show: Signal<bool>) -> Element {
    if !*show.read() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "help-overlay-backdrop",
            onclick: move |_| show.set(false),

            div {
                class: "help-overlay",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                h2 { "Help" }

                div { class: "shortcut-section",
                    h3 { "Mouse" }
                    div { class: "shortcut-row",
                        span { class: "shortcut-keys", "Wheel" }
                        span { "Zoom in / out" }
                    }
                    div { class: "shortcut-row",
                        span { class: "shortcut-keys", "Click" }
                        span { "Select the gopher on a tile, or centre the view there" }
                    }
                }

                // Keys only reach the server while the canvas has focus
                div { class: "shortcut-section",
                    h3 { "Keyboard" }
                    for binding in KEY_BINDINGS {
                        div { class: "shortcut-row",
                            span { class: "shortcut-keys", kbd { "{binding.label}" } }
                            span { "{binding.action}" }
                        }
                    }
                }

                div { class: "help-divider" }

                button {
                    class: "secondary",
                    onclick: move |_| show.set(false),
                    "Close"
                }
            }
        }
    }
}
