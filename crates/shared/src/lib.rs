pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod protocol;
pub mod render;
pub mod transform;
pub mod update_loop;
pub mod viewport;
