//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Terminal reader thread: forwards key, mouse and resize events
//! - Ticker thread: sends one `Tick` per animation frame, parked while the
//!   mounted slide is settled
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::types::Deck;

use super::animation::Motion;
use super::controls::{frame_layout, Controls};
use super::state::{Action, App, AppEvent};
use super::update::update;
use super::view::render;

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action, and for bindings
/// pressed with Ctrl or Alt held. Shift is allowed on characters (`G`, `?`).
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let allowed = match key.code {
        KeyCode::Char(_) => KeyModifiers::SHIFT,
        _ => KeyModifiers::NONE,
    };
    if !allowed.contains(key.modifiers) {
        return None;
    }

    match key.code {
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::PageDown => {
            Some(Action::Next)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp | KeyCode::Backspace => {
            Some(Action::Prev)
        }
        KeyCode::Home | KeyCode::Char('g') => Some(Action::First),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Last),

        // 1-based on the keyboard, 0-based in the deck
        KeyCode::Char(c @ '1'..='9') => Some(Action::GoTo(usize::from(c as u8 - b'1'))),

        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::Dismiss),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

/// Map a mouse event to an Action by hit-testing the controls row.
///
/// Only left-button presses count.
pub fn map_mouse(mouse: MouseEvent, controls: &Controls) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => controls.hit(mouse.column, mouse.row),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Terminal in presenter mode for as long as this value lives.
///
/// Raw mode, the alternate screen and mouse capture are acquired in
/// [`TerminalSession::start`] and released on drop, so every exit path
/// out of [`run`] hands the terminal back.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(TerminalSession { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue, // key releases, focus, paste
                Err(e) => {
                    tracing::error!(error = %e, "terminal event reader stopped");
                    break;
                }
            };
            if tx.send(forwarded).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

/// Handle to the frame ticker thread.
///
/// The thread sends a `Tick` every `interval` while running and parks
/// while paused, so a settled slide costs no wakeups.
struct Ticker {
    thread: thread::Thread,
    running: Arc<AtomicBool>,
}

impl Ticker {
    /// Spawn the ticker, initially running.
    fn spawn(tx: mpsc::Sender<AppEvent>, interval: Duration) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let handle = thread::spawn(move || {
            loop {
                if !flag.load(Ordering::Acquire) {
                    thread::park();
                    continue; // unpark or spurious wakeup, recheck
                }
                thread::sleep(interval);
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });
        Ticker {
            thread: handle.thread().clone(),
            running,
        }
    }

    fn resume(&self) {
        if !self.running.swap(true, Ordering::AcqRel) {
            self.thread.unpark();
        }
    }

    fn pause(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Run only while the mounted slide still has something to animate.
    fn follow(&self, app: &App) {
        if app.animations.is_settled() {
            self.pause();
        } else {
            self.resume();
        }
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Present `deck` starting on slide `start` until the user quits.
pub fn run(deck: Deck, start: usize, motion: Motion) -> io::Result<()> {
    let title = deck.title.clone();
    let Some(mut app) = App::new(deck, start, motion) else {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "deck has no slides"));
    };
    tracing::info!(deck = %title, slides = app.deck.slides.len(), start, "presenting");

    install_panic_hook();
    let mut session = TerminalSession::start()?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_event_reader(tx.clone());
    let ticker = if motion.enabled {
        Some(Ticker::spawn(tx, motion.tick_interval()))
    } else {
        drop(tx);
        None
    };

    let mut dirty = true;
    loop {
        if dirty {
            session.terminal.draw(|frame| render(&app, frame))?;
            dirty = false;
        }

        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        dirty = match event {
            AppEvent::Key(key) => dispatch(&mut app, map_key(key)),
            AppEvent::Mouse(mouse) => {
                let size = session.terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                let controls = Controls::layout(frame_layout(area).controls, app.deck.slides.len());
                dispatch(&mut app, map_mouse(mouse, &controls))
            }
            AppEvent::Resize => true,
            AppEvent::Tick => app.tick(),
        };
        if let Some(ticker) = &ticker {
            ticker.follow(&app);
        }
    }

    tracing::info!(slide = app.screen.deck.current_index(), "presenter closed");
    Ok(())
}

/// Run an action through the pure update and apply the result.
fn dispatch(app: &mut App, action: Option<Action>) -> bool {
    match action {
        Some(action) => {
            let transition = update(app.screen, &action);
            app.apply(transition);
            true
        }
        None => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_deck;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn controls() -> Controls {
        Controls::layout(frame_layout(Rect::new(0, 0, 80, 24)).controls, 7)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn right_arrow_and_space_advance() {
        assert_eq!(map_key(key(KeyCode::Right)), Some(Action::Next));
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Action::Next));
    }

    #[test]
    fn left_arrow_goes_back() {
        assert_eq!(map_key(key(KeyCode::Left)), Some(Action::Prev));
    }

    #[test]
    fn number_keys_jump_zero_based() {
        for n in 1..=9u8 {
            let k = key(KeyCode::Char((b'0' + n) as char));
            assert_eq!(map_key(k), Some(Action::GoTo(usize::from(n - 1))));
        }
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn home_and_end_map_to_ends() {
        assert_eq!(map_key(key(KeyCode::Home)), Some(Action::First));
        assert_eq!(map_key(key(KeyCode::End)), Some(Action::Last));
    }

    #[test]
    fn ctrl_and_alt_chords_do_not_navigate() {
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        let alt_left = KeyEvent::new(KeyCode::Left, KeyModifiers::ALT);
        let ctrl_end = KeyEvent::new(KeyCode::End, KeyModifiers::CONTROL);
        let alt_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        assert_eq!(map_key(ctrl_l), None);
        assert_eq!(map_key(alt_left), None);
        assert_eq!(map_key(ctrl_end), None);
        assert_eq!(map_key(alt_q), None);
    }

    #[test]
    fn shifted_characters_still_map() {
        let shift_g = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        let shift_question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(map_key(shift_g), Some(Action::Last));
        assert_eq!(map_key(key(KeyCode::Char('G'))), Some(Action::Last));
        assert_eq!(map_key(shift_question), Some(Action::ToggleHelp));
        let shift_right = KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT);
        assert_eq!(map_key(shift_right), None);
    }

    #[test]
    fn ticker_sends_nothing_while_paused() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(tx, Duration::from_millis(2));
        assert!(matches!(rx.recv_timeout(Duration::from_secs(2)), Ok(AppEvent::Tick)));

        ticker.pause();
        // at most one tick already in flight when paused
        thread::sleep(Duration::from_millis(50));
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());

        ticker.resume();
        assert!(matches!(rx.recv_timeout(Duration::from_secs(2)), Ok(AppEvent::Tick)));
    }

    #[test]
    fn ticker_follows_settling() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(tx, Duration::from_millis(2));
        let mut app = App::new(builtin_deck(), 0, Motion::default()).unwrap();
        while app.tick() {}
        ticker.follow(&app);
        assert!(!ticker.running.load(Ordering::Acquire));

        dispatch(&mut app, Some(Action::Next));
        ticker.follow(&app);
        assert!(ticker.running.load(Ordering::Acquire));
        drop(rx);
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn esc_dismisses() {
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Dismiss));
    }

    #[test]
    fn clicking_next_matches_right_arrow() {
        let controls = controls();
        let next = controls.next;
        let by_click = map_mouse(click(next.x, next.y), &controls);
        assert_eq!(by_click, map_key(key(KeyCode::Right)));

        let mut via_key = App::new(builtin_deck(), 2, Motion::still()).unwrap();
        let mut via_click = App::new(builtin_deck(), 2, Motion::still()).unwrap();
        dispatch(&mut via_key, map_key(key(KeyCode::Right)));
        dispatch(&mut via_click, by_click);
        assert_eq!(via_key.screen, via_click.screen);
        assert_eq!(via_click.screen.deck.current_index(), 3);
    }

    #[test]
    fn clicking_a_dot_jumps_there() {
        let controls = controls();
        let dot = controls.dots[5];
        assert_eq!(map_mouse(click(dot.x, dot.y), &controls), Some(Action::GoTo(5)));
    }

    #[test]
    fn non_left_clicks_are_ignored() {
        let controls = controls();
        let mut event = click(controls.next.x, controls.next.y);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(map_mouse(event, &controls), None);
        event.kind = MouseEventKind::Moved;
        assert_eq!(map_mouse(event, &controls), None);
    }

    #[test]
    fn unmapped_input_does_not_redraw() {
        let mut app = App::new(builtin_deck(), 0, Motion::still()).unwrap();
        assert!(!dispatch(&mut app, None));
    }
}
