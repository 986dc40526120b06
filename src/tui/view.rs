//! Pure rendering: map App state to ratatui widget trees.
//!
//! The slide is rendered into a scratch buffer first and then copied into
//! the frame shifted by the slide-in or slide-out offset, so moving content
//! is clipped at the slide edge instead of reflowing.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block as Panel, Borders, Clear, Gauge, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::deck::DeckController;
use crate::types::{Block, Slide, Stat};

use super::animation::Animations;
use super::controls::{frame_layout, Controls};
use super::state::App;
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole frame.
pub fn render(app: &App, frame: &mut Frame) {
    let layout = frame_layout(frame.area());
    let deck = &app.screen.deck;

    frame.render_widget(render_progress(deck), layout.progress);

    let width = layout.slide.width;
    match app.animations.leaving() {
        Some(out) => {
            let slide = &app.deck.slides[out.slide()];
            render_slide(slide, out.animations(), out.offset(width), layout.slide, frame.buffer_mut());
        }
        None => {
            let slide = &app.deck.slides[deck.current_index()];
            let offset = app.animations.offset(width);
            render_slide(slide, &app.animations, offset, layout.slide, frame.buffer_mut());
        }
    }

    render_controls(deck, layout.controls, frame.buffer_mut());
    frame.render_widget(render_footer(deck), layout.footer);

    if app.screen.help {
        render_help_overlay(frame, layout.slide);
    }
}

// ============================================================================
// PROGRESS
// ============================================================================

fn render_progress(deck: &DeckController) -> Gauge<'static> {
    Gauge::default()
        .ratio(deck.progress())
        .label("")
        .gauge_style(theme::STYLE_PROGRESS)
}

// ============================================================================
// SLIDE
// ============================================================================

/// Render `slide` into `area` of `buf`, shifted `offset` columns right.
pub fn render_slide(slide: &Slide, animations: &Animations, offset: i32, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let mut scratch = Buffer::empty(area);
    let lines = slide_lines(slide, animations);
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let body = Rect::new(area.x, area.y + top, area.width, area.height - top);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(body, &mut scratch);

    blit(&scratch, buf, area, offset);
}

/// Copy `area` of `src` into `dst`, moved `offset` columns to the right.
/// Cells shifted outside `area` are dropped.
fn blit(src: &Buffer, dst: &mut Buffer, area: Rect, offset: i32) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let source_x = i32::from(x) - offset;
            if source_x < i32::from(area.left()) || source_x >= i32::from(area.right()) {
                continue;
            }
            if let (Some(cell), Some(target)) = (src.cell((source_x as u16, y)), dst.cell_mut((x, y))) {
                *target = cell.clone();
            }
        }
    }
}

/// Build the text of a slide, honouring staggered reveals and counters.
fn slide_lines<'a>(slide: &'a Slide, animations: &Animations) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    if let Some(kicker) = &slide.kicker {
        lines.push(Line::from(Span::styled(kicker.to_uppercase(), theme::STYLE_KICKER)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(slide.title.as_str(), theme::STYLE_TITLE)));

    let mut counter_base = 0;
    for (i, block) in slide.blocks.iter().enumerate() {
        let counters_here = match block {
            Block::Stats { stats } => stats.len(),
            _ => 0,
        };
        if animations.is_revealed(i) {
            lines.push(Line::from(""));
            lines.extend(block_lines(block, animations, counter_base));
        }
        counter_base += counters_here;
    }

    lines
}

fn block_lines<'a>(block: &'a Block, animations: &Animations, counter_base: usize) -> Vec<Line<'a>> {
    match block {
        Block::Text { text, tone } => {
            vec![Line::from(Span::styled(text.as_str(), theme::tone(*tone)))]
        }
        Block::Bullets { items } => items
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled("• ", theme::STYLE_BULLET),
                    Span::styled(item.as_str(), theme::STYLE_BODY),
                ])
            })
            .collect(),
        Block::Stats { stats } => stats_lines(stats, animations, counter_base),
        Block::Steps { steps } => {
            let mut titles = Vec::new();
            let mut subs = Vec::new();
            for (i, step) in steps.iter().enumerate() {
                if i > 0 {
                    titles.push(Span::styled("  ›  ", theme::STYLE_MUTED));
                    subs.push(Span::styled("  ·  ", theme::STYLE_MUTED));
                }
                titles.push(Span::styled(step.title.as_str(), theme::STYLE_STEP));
                subs.push(Span::styled(step.sub.as_str(), theme::STYLE_MUTED));
            }
            vec![Line::from(titles), Line::from(subs)]
        }
        Block::Cards { cards } => cards
            .iter()
            .map(|card| {
                let mut spans = vec![
                    Span::styled("▪ ", theme::STYLE_BULLET),
                    Span::styled(card.title.as_str(), theme::STYLE_EMPHASIS),
                ];
                if !card.sub.is_empty() {
                    spans.push(Span::styled(format!("  {}", card.sub), theme::STYLE_MUTED));
                }
                Line::from(spans)
            })
            .collect(),
        Block::Tags { tags } => {
            let mut spans = Vec::new();
            for (i, tag) in tags.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(format!(" {} ", tag), theme::STYLE_TAG));
            }
            vec![Line::from(spans)]
        }
        Block::Feed { channel, items } => {
            let mut lines = vec![Line::from(Span::styled(
                format!("# {}", channel),
                theme::STYLE_EMPHASIS,
            ))];
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled(format!("[{}] ", item.risk.label()), theme::risk(item.risk)),
                    Span::styled(item.headline.as_str(), theme::STYLE_BODY),
                    Span::styled(format!("  {}", item.source), theme::STYLE_MUTED),
                ]));
                if !item.summary.is_empty() {
                    lines.push(Line::from(Span::styled(item.summary.as_str(), theme::STYLE_MUTED)));
                }
            }
            lines
        }
    }
}

/// Counters on one row, labels on the row below, each column wide enough
/// for its final value so the row does not jitter while counting.
fn stats_lines<'a>(stats: &'a [Stat], animations: &Animations, counter_base: usize) -> Vec<Line<'a>> {
    let mut values = Vec::new();
    let mut labels = Vec::new();
    for (i, stat) in stats.iter().enumerate() {
        let final_text = format!("{}{}", stat.value, stat.suffix);
        let width = final_text.chars().count().max(stat.label.chars().count()) + 4;
        let current = animations.counter(counter_base + i).unwrap_or(stat.value);
        values.push(Span::styled(
            format!("{:^width$}", format!("{}{}", current, stat.suffix)),
            theme::STYLE_COUNTER,
        ));
        labels.push(Span::styled(format!("{:^width$}", stat.label), theme::STYLE_MUTED));
    }
    vec![Line::from(values), Line::from(labels)]
}

// ============================================================================
// CONTROLS & FOOTER
// ============================================================================

fn render_controls(deck: &DeckController, row: Rect, buf: &mut Buffer) {
    let controls = Controls::layout(row, deck.total());

    let prev_style = if deck.is_first() {
        theme::STYLE_CONTROL_DISABLED
    } else {
        theme::STYLE_CONTROL
    };
    let next_style = if deck.is_last() {
        theme::STYLE_CONTROL_DISABLED
    } else {
        theme::STYLE_CONTROL
    };

    Paragraph::new(Span::styled(" ‹ ", prev_style)).render(controls.prev, buf);
    for (i, dot) in controls.dots.iter().enumerate() {
        let (symbol, style) = if i == deck.current_index() {
            ("━━", theme::STYLE_DOT_CURRENT)
        } else {
            ("──", theme::STYLE_DOT)
        };
        Paragraph::new(Span::styled(symbol, style)).render(*dot, buf);
    }
    Paragraph::new(Span::styled(" › ", next_style)).render(controls.next, buf);
}

fn render_footer(deck: &DeckController) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("[←/→] navigate  [?] help  [q] quit", theme::STYLE_HELP),
        Span::styled(
            format!("   {} / {}", deck.current_index() + 1, deck.total()),
            theme::STYLE_MUTED,
        ),
    ]))
}

// ============================================================================
// HELP OVERLAY
// ============================================================================

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("→  Space  l  PgDn", "next slide"),
    ("←  h  PgUp  Bksp", "previous slide"),
    ("Home  g", "first slide"),
    ("End  G", "last slide"),
    ("1-9", "jump to slide"),
    ("click ‹ › or a dot", "navigate"),
    ("?  Esc", "close this help"),
    ("q  Ctrl+C", "quit"),
];

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(44, KEY_BINDINGS.len() as u16 + 2, area);
    let lines: Vec<Line> = KEY_BINDINGS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<20}", keys), theme::STYLE_KEY),
                Span::styled(*what, theme::STYLE_BODY),
            ])
        })
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Panel::default()
                .borders(Borders::ALL)
                .title(" Keys ")
                .border_style(theme::STYLE_MUTED),
        ),
        popup,
    );
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

// ============================================================================
// TESTS
// ============================================================================
