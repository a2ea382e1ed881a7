//! Translate user gestures into viewport changes and server commands.

use crate::protocol::Command;
use crate::transform::{self, ScreenPoint};
use crate::viewport::Viewport;

/// Wheel gesture: negative delta zooms in, anything else zooms out.
///
/// The zoom is applied to the local viewport right away; the raw delta is
/// still forwarded so the server can make the authoritative change, which
/// overwrites ours on the next update.
pub fn on_wheel(viewport: &mut Viewport, delta_y: f64) -> Command {
    if delta_y < 0.0 {
        viewport.zoom_in();
    } else {
        viewport.zoom_out();
    }
    Command::Scroll { delta_y }
}

/// Click gesture: resolve the world cell under the pointer.
pub fn on_click(viewport: &Viewport, point: ScreenPoint, surface_height: f64) -> Command {
    Command::Click {
        cell: transform::screen_to_world(viewport, point, surface_height),
    }
}

/// Key gesture. `key` is the DOM `KeyboardEvent.key` value.
pub fn on_key(key: &str) -> Option<Command> {
    let key_code = legacy_key_code(key);
    if key_code.is_none() {
        tracing::debug!(key, "no legacy key code, not forwarding");
    }
    key_code.map(|key_code| Command::KeyPress { key_code })
}

/// Legacy `KeyboardEvent.keyCode` for a DOM key name. Letters map to their
/// uppercase ASCII code regardless of shift state, and shifted digit-row
/// symbols (US layout) to the code of their digit. Other punctuation has no
/// code here and is not forwarded.
pub fn legacy_key_code(key: &str) -> Option<u32> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return match c {
            'a'..='z' => Some(c.to_ascii_uppercase() as u32),
            'A'..='Z' | '0'..='9' => Some(c as u32),
            ' ' => Some(32),
            ')' => Some(48),
            '!' => Some(49),
            '@' => Some(50),
            '#' => Some(51),
            '$' => Some(52),
            '%' => Some(53),
            '^' => Some(54),
            '&' => Some(55),
            '*' => Some(56),
            '(' => Some(57),
            _ => None,
        };
    }

    if let Some(n) = key.strip_prefix('F').and_then(|n| n.parse::<u32>().ok()) {
        return (1..=12).contains(&n).then_some(111 + n);
    }

    let code = match key {
        "Backspace" => 8,
        "Tab" => 9,
        "Enter" => 13,
        "Shift" => 16,
        "Control" => 17,
        "Alt" => 18,
        "Escape" => 27,
        "PageUp" => 33,
        "PageDown" => 34,
        "End" => 35,
        "Home" => 36,
        "ArrowLeft" => 37,
        "ArrowUp" => 38,
        "ArrowRight" => 39,
        "ArrowDown" => 40,
        "Delete" => 46,
        _ => return None,
    };
    Some(code)
}

/// A key the simulation server reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key_code: u32,
    pub label: &'static str,
    pub action: &'static str,
}

pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding { key_code: 87, label: "W", action: "Deselect gopher" },
    KeyBinding { key_code: 81, label: "Q", action: "Select a random gopher" },
    KeyBinding { key_code: 80, label: "P", action: "Pause / resume simulation" },
    KeyBinding { key_code: 37, label: "←", action: "Shift view left" },
    KeyBinding { key_code: 39, label: "→", action: "Shift view right" },
    KeyBinding { key_code: 38, label: "↑", action: "Shift view up" },
    KeyBinding { key_code: 40, label: "↓", action: "Shift view down" },
];

/// Look up what the server does with a key code, if anything.
pub fn binding_for(key_code: u32) -> Option<&'static KeyBinding> {
    KEY_BINDINGS.iter().find(|b| b.key_code == key_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::WorldCell;

    // --- Wheel ---

    #[test]
    fn test_wheel_up_at_floor_zooms_in() {
        let mut vp = Viewport::new();
        vp.tile_width = 1.0;
        vp.tile_height = 1.0;
        let cmd = on_wheel(&mut vp, -10.0);
        assert_eq!((vp.tile_width, vp.tile_height), (2.0, 2.0));
        assert_eq!(cmd, Command::Scroll { delta_y: -10.0 });
    }

    #[test]
    fn test_wheel_down_at_floor_stays_at_one() {
        let mut vp = Viewport::new();
        vp.tile_width = 1.0;
        vp.tile_height = 1.0;
        let cmd = on_wheel(&mut vp, 10.0);
        assert_eq!((vp.tile_width, vp.tile_height), (1.0, 1.0));
        assert_eq!(cmd, Command::Scroll { delta_y: 10.0 });
    }

    #[test]
    fn test_wheel_sequence_keeps_uniform_zoom() {
        let mut vp = Viewport::new();
        let deltas = [-3.0, -100.0, 5.0, 5.0, 5.0, -1.0, 40.0, 40.0, 40.0, 40.0];
        for delta in deltas.iter().cycle().take(200) {
            on_wheel(&mut vp, *delta);
            assert_eq!(vp.tile_width, vp.tile_height);
            assert!(vp.tile_width >= 1.0);
        }
    }

    #[test]
    fn test_wheel_zero_delta_zooms_out() {
        let mut vp = Viewport::new();
        on_wheel(&mut vp, 0.0);
        assert_eq!(vp.tile_width, 14.0);
    }

    // --- Click ---

    #[test]
    fn test_click_scenario() {
        let mut vp = Viewport::new();
        vp.render_origin_x = 75.0;
        vp.render_origin_y = 75.0;
        let cmd = on_click(&vp, ScreenPoint::new(90.0, 90.0), 300.0);
        assert_eq!(cmd, Command::Click { cell: WorldCell::new(0, 8) });
    }

    #[test]
    fn test_click_does_not_touch_viewport() {
        let mut vp = Viewport::new();
        vp.render_origin_x = 12.0;
        let before = (vp.tile_width, vp.render_origin_x, vp.server_origin_x);
        on_click(&vp, ScreenPoint::new(50.0, 50.0), 200.0);
        assert_eq!(before, (vp.tile_width, vp.render_origin_x, vp.server_origin_x));
    }

    // --- Keys ---

    #[test]
    fn test_letters_use_uppercase_code() {
        assert_eq!(legacy_key_code("p"), Some(80));
        assert_eq!(legacy_key_code("P"), Some(80));
        assert_eq!(legacy_key_code("w"), Some(87));
    }

    #[test]
    fn test_digits_and_space() {
        assert_eq!(legacy_key_code("0"), Some(48));
        assert_eq!(legacy_key_code("9"), Some(57));
        assert_eq!(legacy_key_code(" "), Some(32));
    }

    #[test]
    fn test_shifted_digit_row_uses_digit_code() {
        assert_eq!(legacy_key_code("!"), legacy_key_code("1"));
        assert_eq!(legacy_key_code("@"), Some(50));
        assert_eq!(legacy_key_code("("), Some(57));
        assert_eq!(legacy_key_code(")"), Some(48));
        assert_eq!(on_key("#"), Some(Command::KeyPress { key_code: 51 }));
        assert_eq!(legacy_key_code(";"), None);
    }

    #[test]
    fn test_arrows() {
        assert_eq!(legacy_key_code("ArrowLeft"), Some(37));
        assert_eq!(legacy_key_code("ArrowUp"), Some(38));
        assert_eq!(legacy_key_code("ArrowRight"), Some(39));
        assert_eq!(legacy_key_code("ArrowDown"), Some(40));
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(legacy_key_code("F1"), Some(112));
        assert_eq!(legacy_key_code("F12"), Some(123));
        assert_eq!(legacy_key_code("F13"), None);
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(legacy_key_code("é"), None);
        assert_eq!(legacy_key_code("MediaPlayPause"), None);
        assert_eq!(legacy_key_code(""), None);
        assert!(on_key("Dead").is_none());
    }

    #[test]
    fn test_on_key_forwards_code() {
        assert_eq!(on_key("q"), Some(Command::KeyPress { key_code: 81 }));
    }

    #[test]
    fn test_bindings_resolve_from_keys() {
        let code = legacy_key_code("ArrowRight").unwrap();
        assert_eq!(binding_for(code).unwrap().action, "Shift view right");
        assert!(binding_for(legacy_key_code("z").unwrap()).is_none());
    }
}
