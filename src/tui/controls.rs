//! Geometry of the on-screen controls, shared by rendering and mouse
//! hit-testing so a click always lands on what was drawn.
//!
//! Row layout, centered: `‹`, one dot per slide, `›`.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use super::state::Action;

const BUTTON_WIDTH: u16 = 3;
const DOT_WIDTH: u16 = 2;
const DOT_GAP: u16 = 1;
const GROUP_GAP: u16 = 2;

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub progress: Rect,
    pub slide: Rect,
    pub controls: Rect,
    pub footer: Rect,
}

/// Split the terminal area: progress bar, slide, controls row, footer.
pub fn frame_layout(area: Rect) -> FrameLayout {
    let chunks = Layout::vertical([
        Constraint::Length(1), // progress
        Constraint::Min(0),    // slide
        Constraint::Length(1), // controls
        Constraint::Length(1), // footer
    ])
    .split(area);

    FrameLayout {
        progress: chunks[0],
        slide: chunks[1],
        controls: chunks[2],
        footer: chunks[3],
    }
}

/// Clickable regions in the controls row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub prev: Rect,
    /// One per slide, in slide order.
    pub dots: Vec<Rect>,
    pub next: Rect,
}

impl Controls {
    /// Lay out controls for `total` slides centered in `row`.
    ///
    /// Regions past the right edge of a narrow terminal are clipped to
    /// zero width and can never be hit.
    pub fn layout(row: Rect, total: usize) -> Self {
        let total = u16::try_from(total).unwrap_or(u16::MAX);
        let dots_width = total.saturating_mul(DOT_WIDTH + DOT_GAP).saturating_sub(DOT_GAP);
        let full = dots_width.saturating_add(BUTTON_WIDTH * 2 + GROUP_GAP * 2);

        let mut x = row.x + row.width.saturating_sub(full) / 2;
        let prev = clip(Rect::new(x, row.y, BUTTON_WIDTH, row.height.min(1)), row);
        x = x.saturating_add(BUTTON_WIDTH + GROUP_GAP);

        let mut dots = Vec::with_capacity(usize::from(total));
        for _ in 0..total {
            dots.push(clip(Rect::new(x, row.y, DOT_WIDTH, row.height.min(1)), row));
            x = x.saturating_add(DOT_WIDTH + DOT_GAP);
        }
        x = x.saturating_sub(DOT_GAP).saturating_add(GROUP_GAP);
        let next = clip(Rect::new(x, row.y, BUTTON_WIDTH, row.height.min(1)), row);

        Controls { prev, dots, next }
    }

    /// Action for a click at (`column`, `row`), if it hit a control.
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);
        if self.prev.contains(pos) {
            return Some(Action::Prev);
        }
        if self.next.contains(pos) {
            return Some(Action::Next);
        }
        self.dots
            .iter()
            .position(|dot| dot.contains(pos))
            .map(Action::GoTo)
    }
}

fn clip(rect: Rect, bounds: Rect) -> Rect {
    let clipped = rect.intersection(bounds);
    if clipped.width == 0 || clipped.height == 0 {
        Rect::new(rect.x, rect.y, 0, 0)
    } else {
        clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Rect {
        Rect::new(0, 20, 80, 1)
    }

    #[test]
    fn frame_layout_reserves_chrome_rows() {
        let layout = frame_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.progress, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.slide, Rect::new(0, 1, 80, 21));
        assert_eq!(layout.controls, Rect::new(0, 22, 80, 1));
        assert_eq!(layout.footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn controls_are_centered_and_ordered() {
        let controls = Controls::layout(row(), 7);
        // 3 + 2 + (7*3 - 1) + 2 + 3 = 30 wide, centered in 80
        assert_eq!(controls.prev.x, 25);
        assert_eq!(controls.dots.len(), 7);
        assert_eq!(controls.dots[0].x, 30);
        assert_eq!(controls.dots[6].x, 48);
        assert_eq!(controls.next.x, 52);
    }

    #[test]
    fn clicks_map_to_actions() {
        let controls = Controls::layout(row(), 7);
        assert_eq!(controls.hit(26, 20), Some(Action::Prev));
        assert_eq!(controls.hit(53, 20), Some(Action::Next));
        assert_eq!(controls.hit(31, 20), Some(Action::GoTo(0)));
        assert_eq!(controls.hit(34, 20), Some(Action::GoTo(1)));
    }

    #[test]
    fn clicks_between_controls_miss() {
        let controls = Controls::layout(row(), 7);
        assert_eq!(controls.hit(32, 20), None); // gap after first dot
        assert_eq!(controls.hit(0, 20), None);
        assert_eq!(controls.hit(26, 19), None); // wrong row
    }

    #[test]
    fn narrow_row_clips_without_panicking() {
        let controls = Controls::layout(Rect::new(0, 0, 10, 1), 20);
        assert_eq!(controls.dots.len(), 20);
        assert_eq!(controls.hit(200, 0), None);
    }
}
