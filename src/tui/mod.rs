//! Terminal presenter.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (Screen, Action, Transition, App)
//! - `update`: pure transitions
//! - `animation`: per-slide frame-counted animations
//! - `controls`: shared geometry for drawing and hit-testing
//! - `view`: pure rendering
//! - `run`: effects (terminal, threads, event loop)

pub mod animation;
pub mod controls;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
