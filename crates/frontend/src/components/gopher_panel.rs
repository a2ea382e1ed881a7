use dioxus::prelude::*;
use gopherlife_shared::protocol::SelectedGopher;

#[component]
pub fn GopherPanel(gopher: Option<SelectedGopher>) -> Element {
    let Some(gopher) = gopher else {
        return rsx! {};
    };

    rsx! {
        div { class: "panel gopher-panel",
            h3 { "Selected Gopher" }
            div { class: "gopher-row",
                span { class: "gopher-label", "Name" }
                span { id: "gopher-name", "{gopher.name}" }
            }
            div { class: "gopher-row",
                span { class: "gopher-label", "Position" }
                span { id: "gopher-position", "{gopher.position_label()}" }
            }
            div { class: "gopher-row",
                span { class: "gopher-label", "Hunger" }
                span { id: "gopher-hunger", "{gopher.hunger_label()}" }
            }
            div { class: "gopher-row",
                span { class: "gopher-label", "Lifespan" }
                span { id: "gopher-lifespan", "{gopher.lifespan_label()}" }
            }
        }
    }
}
