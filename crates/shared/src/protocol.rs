//! Wire types for the simulation server's HTTP endpoints.
//!
//! Field names follow the server's JSON (`PascalCase`). Every endpoint is a plain
//! `GET` with its parameters in the query string.

use serde::{Deserialize, Serialize};

pub const UPDATE_ENDPOINT: &str = "Update";
pub const SCROLL_ENDPOINT: &str = "Scroll";
pub const KEY_PRESS_ENDPOINT: &str = "KeyPress";
pub const CLICK_ENDPOINT: &str = "Click";

/// One tile's color. `a` is passed through untouched (the server usually sends 0..=1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellColor {
    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
    #[serde(rename = "A")]
    pub a: f64,
}

impl CellColor {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, e.g. `rgba(65, 119, 15, 1)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Render-grid snapshot, indexed `grid[i][j]` with `i` along X and `j` along Y.
pub type Grid = Vec<Vec<CellColor>>;

/// An absolute world cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldCell {
    #[serde(rename = "X")]
    pub x: i64,
    #[serde(rename = "Y")]
    pub y: i64,
}

impl WorldCell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for WorldCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelectedGopher {
    pub name: String,
    pub position: WorldCell,
    pub hunger: f64,
    pub lifespan: f64,
}

impl SelectedGopher {
    pub fn position_label(&self) -> String {
        self.position.to_string()
    }

    pub fn hunger_label(&self) -> String {
        format!("({})", self.hunger)
    }

    pub fn lifespan_label(&self) -> String {
        format!("({})", self.lifespan)
    }
}

/// Payload of `GET /Update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateResponse {
    pub start_x: i64,
    pub start_y: i64,
    pub tile_width: f64,
    pub tile_height: f64,
    pub grid: Grid,
    #[serde(default)]
    pub text_below_canvas: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_gopher: Option<SelectedGopher>,
}

/// A fire-and-forget request produced by user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Scroll { delta_y: f64 },
    KeyPress { key_code: u32 },
    Click { cell: WorldCell },
}

impl Command {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Command::Scroll { .. } => SCROLL_ENDPOINT,
            Command::KeyPress { .. } => KEY_PRESS_ENDPOINT,
            Command::Click { .. } => CLICK_ENDPOINT,
        }
    }

    /// Query parameters, in the order the server documents them.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Command::Scroll { delta_y } => vec![("deltaY", delta_y.to_string())],
            Command::KeyPress { key_code } => vec![("keydown", key_code.to_string())],
            Command::Click { cell } => vec![("x", cell.x.to_string()), ("y", cell.y.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_UPDATE: &str = r#"{
        "StartX": 40, "StartY": -3, "TileWidth": 15, "TileHeight": 15,
        "Grid": [[{"R":65,"G":119,"B":15,"A":1}],[{"R":90,"G":218,"B":255,"A":0.5}]],
        "TextBelowCanvas": "<span>Number of Gophers: 12 </span>",
        "SelectedGopher": {"Name":"Bob","Gender":0,"IsDead":false,"Position":{"X":41,"Y":-2},"Hunger":30,"Lifespan":120}
    }"#;

    // --- Update payload ---

    #[test]
    fn test_update_response_deserializes() {
        let resp: UpdateResponse = serde_json::from_str(FULL_UPDATE).unwrap();
        assert_eq!(resp.start_x, 40);
        assert_eq!(resp.start_y, -3);
        assert_eq!(resp.tile_width, 15.0);
        assert_eq!(resp.grid.len(), 2);
        assert_eq!(resp.grid[1][0], CellColor::new(90, 218, 255, 0.5));
        assert!(resp.text_below_canvas.contains("12"));

        let gopher = resp.selected_gopher.unwrap();
        assert_eq!(gopher.name, "Bob");
        assert_eq!(gopher.position, WorldCell::new(41, -2));
        assert_eq!(gopher.hunger, 30.0);
    }

    #[test]
    fn test_update_response_without_gopher_or_text() {
        let json = r#"{"StartX":0,"StartY":0,"TileWidth":2,"TileHeight":2,"Grid":[]}"#;
        let resp: UpdateResponse = serde_json::from_str(json).unwrap();
        assert!(resp.selected_gopher.is_none());
        assert!(resp.text_below_canvas.is_empty());
        assert!(resp.grid.is_empty());
    }

    #[test]
    fn test_update_response_rejects_missing_grid() {
        let json = r#"{"StartX":0,"StartY":0,"TileWidth":2,"TileHeight":2}"#;
        assert!(serde_json::from_str::<UpdateResponse>(json).is_err());
    }

    // --- Colors ---

    #[test]
    fn test_css_color_fractional_alpha() {
        assert_eq!(CellColor::new(204, 112, 0, 0.25).css(), "rgba(204, 112, 0, 0.25)");
    }

    #[test]
    fn test_css_color_integer_alpha() {
        assert_eq!(CellColor::new(0, 0, 0, 1.0).css(), "rgba(0, 0, 0, 1)");
    }

    // --- Gopher labels ---

    #[test]
    fn test_gopher_labels() {
        let gopher = SelectedGopher {
            name: "Ada".into(),
            position: WorldCell::new(3, 7),
            hunger: 12.0,
            lifespan: 250.0,
        };
        assert_eq!(gopher.position_label(), "(3,7)");
        assert_eq!(gopher.hunger_label(), "(12)");
        assert_eq!(gopher.lifespan_label(), "(250)");
    }

    // --- Commands ---

    #[test]
    fn test_scroll_command_query() {
        let cmd = Command::Scroll { delta_y: -10.0 };
        assert_eq!(cmd.endpoint(), "Scroll");
        assert_eq!(cmd.query(), vec![("deltaY", "-10".to_string())]);
    }

    #[test]
    fn test_scroll_command_keeps_fraction() {
        let cmd = Command::Scroll { delta_y: 53.5 };
        assert_eq!(cmd.query(), vec![("deltaY", "53.5".to_string())]);
    }

    #[test]
    fn test_key_press_command_query() {
        let cmd = Command::KeyPress { key_code: 80 };
        assert_eq!(cmd.endpoint(), "KeyPress");
        assert_eq!(cmd.query(), vec![("keydown", "80".to_string())]);
    }

    #[test]
    fn test_click_command_query() {
        let cmd = Command::Click { cell: WorldCell::new(-4, 19) };
        assert_eq!(cmd.endpoint(), "Click");
        assert_eq!(
            cmd.query(),
            vec![("x", "-4".to_string()), ("y", "19".to_string())]
        );
    }
}
