//! Pure state transitions: (Screen, Action) → Transition.
//!
//! Fully testable without a terminal. Navigation always goes through the
//! deck controller, so bounds are enforced in exactly one place.

use super::state::{Action, Screen, Transition};

/// Pure state transition function.
///
/// Navigation closes the help overlay. A transition is a `Mount` only when
/// the current slide actually changed.
pub fn update(screen: Screen, action: &Action) -> Transition {
    let Screen { mut deck, help } = screen;

    let moved = match action {
        Action::Next => deck.next(),
        Action::Prev => deck.prev(),
        Action::GoTo(index) => deck.go_to(*index),
        Action::First => deck.go_to(0),
        Action::Last => deck.go_to(deck.total() - 1),
        Action::ToggleHelp => {
            return Transition::Screen(Screen { deck, help: !help });
        }
        Action::Dismiss => {
            return Transition::Screen(Screen { deck, help: false });
        }
        Action::Quit => return Transition::Quit,
    };

    let next = Screen { deck, help: false };
    if moved {
        Transition::Mount(next)
    } else {
        Transition::Screen(next)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{DeckController, Direction};
    use std::num::NonZeroUsize;

    fn screen(total: usize, at: usize) -> Screen {
        let mut deck = DeckController::new(NonZeroUsize::new(total).unwrap());
        deck.go_to(at);
        Screen::new(deck)
    }

    fn mounted(t: Transition) -> Screen {
        match t {
            Transition::Mount(s) => s,
            other => panic!("Expected Mount, got {:?}", other),
        }
    }

    fn stayed(t: Transition) -> Screen {
        match t {
            Transition::Screen(s) => s,
            other => panic!("Expected Screen, got {:?}", other),
        }
    }

    #[test]
    fn next_mounts_following_slide() {
        let s = mounted(update(screen(7, 0), &Action::Next));
        assert_eq!(s.deck.current_index(), 1);
        assert_eq!(s.deck.direction(), Direction::Forward);
    }

    #[test]
    fn next_on_last_slide_stays() {
        let s = stayed(update(screen(7, 6), &Action::Next));
        assert_eq!(s.deck.current_index(), 6);
    }

    #[test]
    fn prev_on_first_slide_stays() {
        let s = stayed(update(screen(7, 0), &Action::Prev));
        assert_eq!(s.deck.current_index(), 0);
    }

    #[test]
    fn prev_mounts_previous_slide_backward() {
        let s = mounted(update(screen(7, 3), &Action::Prev));
        assert_eq!(s.deck.current_index(), 2);
        assert_eq!(s.deck.direction(), Direction::Backward);
    }

    #[test]
    fn goto_out_of_range_stays() {
        let before = screen(7, 2);
        let s = stayed(update(before, &Action::GoTo(7)));
        assert_eq!(s, before);
    }

    #[test]
    fn first_and_last_jump_to_ends() {
        let s = mounted(update(screen(7, 3), &Action::Last));
        assert_eq!(s.deck.current_index(), 6);
        let s = mounted(update(s, &Action::First));
        assert_eq!(s.deck.current_index(), 0);
        assert_eq!(s.deck.direction(), Direction::Backward);
    }

    #[test]
    fn help_toggles_without_moving() {
        let s = stayed(update(screen(7, 2), &Action::ToggleHelp));
        assert!(s.help);
        assert_eq!(s.deck.current_index(), 2);
        let s = stayed(update(s, &Action::ToggleHelp));
        assert!(!s.help);
    }

    #[test]
    fn dismiss_closes_help() {
        let mut open = screen(7, 2);
        open.help = true;
        assert!(!stayed(update(open, &Action::Dismiss)).help);
    }

    #[test]
    fn navigation_closes_help() {
        let mut open = screen(7, 2);
        open.help = true;
        assert!(!mounted(update(open, &Action::Next)).help);
    }

    #[test]
    fn quit_quits() {
        assert_eq!(update(screen(7, 4), &Action::Quit), Transition::Quit);
    }

    #[test]
    fn seven_slide_walkthrough_through_actions() {
        let mut s = screen(7, 0);
        for _ in 0..3 {
            s = mounted(update(s, &Action::Next));
        }
        assert_eq!(s.deck.current_index(), 3);
        s = mounted(update(s, &Action::Prev));
        assert_eq!(s.deck.direction(), Direction::Backward);
        s = mounted(update(s, &Action::GoTo(0)));
        assert_eq!(s.deck.direction(), Direction::Backward);
        s = mounted(update(s, &Action::GoTo(6)));
        assert_eq!(s.deck.direction(), Direction::Forward);
        s = stayed(update(s, &Action::Next));
        assert_eq!(s.deck.current_index(), 6);
    }
}
