pub mod gopher_panel;
pub mod help_overlay;
pub mod status_badge;
pub mod world_canvas;
