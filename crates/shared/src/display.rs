use crate::protocol::SelectedGopher;

/// The non-canvas part of the page that each update feeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldDisplay {
    /// Server-authored HTML shown under the canvas. Replaced on every update.
    pub text_below_canvas: String,
    /// Last gopher the server reported as selected.
    pub selected: Option<SelectedGopher>,
}

impl WorldDisplay {
    /// Take the text and, when present, the selected gopher from an update.
    /// A missing gopher leaves the previous one on screen.
    pub fn absorb(&mut self, text_below_canvas: String, selected: Option<SelectedGopher>) {
        self.text_below_canvas = text_below_canvas;
        if let Some(gopher) = selected {
            self.selected = Some(gopher);
        }
    }
}
