//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Blue: primary accent (titles' highlights, progress, current dot)
//! - Magenta: secondary accent (counters, steps)
//! - Red: alert text, high-risk items
//! - Yellow: medium-risk items
//! - Dim: de-emphasized (muted copy, inactive dots, disabled controls)

use ratatui::style::{Color, Modifier, Style};

use crate::types::{Risk, Tone};

// ============================================================================
// SLIDE TEXT
// ============================================================================

pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Uppercase line above a slide title.
pub const STYLE_KICKER: Style = Style::new().fg(Color::LightBlue);

pub const STYLE_BODY: Style = Style::new().fg(Color::Gray);

pub const STYLE_MUTED: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_EMPHASIS: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const STYLE_ALERT: Style = Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);

/// Animated counter value.
pub const STYLE_COUNTER: Style = Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD);

pub const STYLE_BULLET: Style = Style::new().fg(Color::LightBlue);

pub const STYLE_STEP: Style = Style::new().fg(Color::LightMagenta).add_modifier(Modifier::BOLD);

pub const STYLE_TAG: Style = Style::new().fg(Color::Black).bg(Color::DarkGray);

// ============================================================================
// CHROME
// ============================================================================

pub const STYLE_PROGRESS: Style = Style::new().fg(Color::LightBlue);

pub const STYLE_DOT: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_DOT_CURRENT: Style = Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD);

pub const STYLE_CONTROL: Style = Style::new().fg(Color::White);

pub const STYLE_CONTROL_DISABLED: Style = Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_KEY: Style = Style::new().fg(Color::Cyan);

pub fn tone(tone: Tone) -> Style {
    match tone {
        Tone::Normal => STYLE_BODY,
        Tone::Muted => STYLE_MUTED,
        Tone::Emphasis => STYLE_EMPHASIS,
        Tone::Alert => STYLE_ALERT,
    }
}

pub fn risk(risk: Risk) -> Style {
    match risk {
        Risk::High => Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        Risk::Medium => Style::new().fg(Color::Yellow),
        Risk::Low => Style::new().fg(Color::Green),
    }
}

// ============================================================================
// TESTS
// ============================================================================
