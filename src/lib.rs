//! pitchdeck: an animated, keyboard-navigable pitch deck for the terminal.

pub mod content;
pub mod deck;
pub mod loader;
pub mod logging;
pub mod report;
pub mod tui;
pub mod types;
