//! TUI state algebra: pure types, zero effects.
//!
//! Design principle: [`Screen`] is the small `Copy` part the transition
//! function works on (deck position plus overlay flag). The deck content
//! and the mounted slide's animations live in [`App`] beside it.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::deck::DeckController;
use crate::types::Deck;

use super::animation::{Animations, Motion};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A terminal reader thread sends `Key`, `Mouse` and `Resize`
/// - A frame ticker thread sends `Tick`
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal resized; only triggers a redraw.
    Resize,
    /// One animation frame elapsed.
    Tick,
}

// ============================================================================
// SCREEN
// ============================================================================

/// Navigation state the pure update function transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub deck: DeckController,
    /// Key binding overlay shown on top of the slide.
    pub help: bool,
}

impl Screen {
    pub fn new(deck: DeckController) -> Self {
        Screen { deck, help: false }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key and mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    /// Jump to a slide by zero-based index.
    GoTo(usize),
    First,
    Last,
    ToggleHelp,
    /// Close the overlay if open; otherwise nothing.
    Dismiss,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Same slide stays mounted; redraw with this screen.
    Screen(Screen),
    /// A different slide is now current: unmount the old one, mount this.
    Mount(Screen),
    Quit,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    pub deck: Deck,
    /// Animations of the mounted slide. Replaced on every mount.
    pub animations: Animations,
    pub motion: Motion,
    pub should_quit: bool,
}

impl App {
    /// Mount `deck` on slide `start`. Out-of-range starts fall back to the
    /// first slide. Returns None for a deck without slides.
    pub fn new(deck: Deck, start: usize, motion: Motion) -> Option<Self> {
        let total = std::num::NonZeroUsize::new(deck.slides.len())?;
        let mut controller = DeckController::new(total);
        if start > 0 {
            controller.go_to(start);
        }
        let index = controller.current_index();
        let animations = Animations::mount(
            index,
            &deck.slides[index],
            controller.direction(),
            motion,
        );
        Some(App {
            screen: Screen::new(controller),
            deck,
            animations,
            motion,
            should_quit: false,
        })
    }

    /// Apply a transition from the update function.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Screen(screen) => self.screen = screen,
            Transition::Mount(screen) => {
                self.screen = screen;
                self.mount_current();
            }
            Transition::Quit => self.should_quit = true,
        }
    }

    /// Start the current slide's animations. The old slide plays out
    /// first and its animations are released when it has left.
    fn mount_current(&mut self) {
        let index = self.screen.deck.current_index();
        let direction = self.screen.deck.direction();
        tracing::debug!(slide = index, ?direction, "mounting slide");
        let entering = Animations::mount(index, &self.deck.slides[index], direction, self.motion);
        let previous = std::mem::replace(&mut self.animations, entering);
        self.animations.play_out(previous, self.motion);
    }

    /// Advance the mounted slide's animations one frame.
    ///
    /// Returns true if anything visible may have changed.
    pub fn tick(&mut self) -> bool {
        if self.animations.is_settled() {
            return false;
        }
        self.animations.tick();
        true
    }
}

// ============================================================================
// TESTS
// ============================================================================
