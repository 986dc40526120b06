//! Per-slide animation state, advanced one frame per tick.
//!
//! An [`Animations`] value is created when a slide mounts and dropped when
//! it unmounts. Counters and reveals therefore never outlive their slide:
//! navigating away cancels them, coming back starts them over.
//!
//! The replaced slide plays out first: it is held frozen in a [`SlideOut`]
//! and slides off toward the side opposite the new slide's entry. The new
//! slide's own timeline starts only once the old one has left.
//!
//! Time is counted in frames, not wall clock, so every animation here is
//! deterministic under test.

use std::time::Duration;

use crate::deck::Direction;
use crate::types::{Block, Slide};

const SLIDE_IN: Duration = Duration::from_millis(350);
const SLIDE_OUT: Duration = Duration::from_millis(200);
const REVEAL_STAGGER: Duration = Duration::from_millis(150);
const COUNTER_RUN: Duration = Duration::from_secs(2);
const COUNTER_DELAY: Duration = Duration::from_millis(600);
const COUNTER_STAGGER: Duration = Duration::from_millis(200);

// ============================================================================
// MOTION SETTINGS
// ============================================================================

/// Frame rate and the global motion switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub enabled: bool,
    pub fps: u16,
}

impl Default for Motion {
    fn default() -> Self {
        Motion { enabled: true, fps: 30 }
    }
}

impl Motion {
    /// Motion switched off: every slide renders settled.
    pub fn still() -> Self {
        Motion {
            enabled: false,
            ..Motion::default()
        }
    }

    /// Number of frames covering `duration`. Zero when motion is off.
    pub fn frames(&self, duration: Duration) -> u32 {
        if !self.enabled {
            return 0;
        }
        (duration.as_secs_f64() * f64::from(self.fps.max(1))).round() as u32
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

// ============================================================================
// SLIDE-IN
// ============================================================================

/// Horizontal entry of a freshly mounted slide.
///
/// Forward navigation enters from the right, backward from the left.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideIn {
    direction: Direction,
    frames: u32,
    elapsed: u32,
}

impl SlideIn {
    pub fn new(direction: Direction, frames: u32) -> Self {
        SlideIn {
            direction,
            frames,
            elapsed: 0,
        }
    }

    /// Column offset for a slide `width` columns wide. Zero once settled.
    pub fn offset(&self, width: u16) -> i32 {
        if self.is_done() {
            return 0;
        }
        let t = f64::from(self.elapsed) / f64::from(self.frames);
        let remaining = 1.0 - ease_out_cubic(t);
        self.direction.sign() * (f64::from(width) * remaining).round() as i32
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.frames
    }

    fn tick(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_cubic(t: f64) -> f64 {
    t.clamp(0.0, 1.0).powi(3)
}

// ============================================================================
// SLIDE-OUT
// ============================================================================

/// Horizontal exit of the slide being replaced.
///
/// Owns the outgoing slide's animations, frozen where they were when the
/// navigation happened. They are dropped once the exit completes.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideOut {
    animations: Box<Animations>,
    direction: Direction,
    frames: u32,
    elapsed: u32,
}

impl SlideOut {
    /// `direction` is the navigation direction; the slide leaves opposite it.
    fn new(animations: Animations, direction: Direction, frames: u32) -> Self {
        SlideOut {
            animations: Box::new(animations),
            direction,
            frames,
            elapsed: 0,
        }
    }

    /// Index of the outgoing slide.
    pub fn slide(&self) -> usize {
        self.animations.slide
    }

    /// Reveal and counter state to draw the outgoing slide with.
    pub fn animations(&self) -> &Animations {
        &self.animations
    }

    /// Column offset: zero at first, accelerating to a full width away.
    pub fn offset(&self, width: u16) -> i32 {
        let t = if self.frames == 0 {
            1.0
        } else {
            f64::from(self.elapsed) / f64::from(self.frames)
        };
        -self.direction.sign() * (f64::from(width) * ease_in_cubic(t)).round() as i32
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.frames
    }

    fn tick(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
    }
}

// ============================================================================
// COUNTERS
// ============================================================================

/// Counts from zero to `end` after an initial delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    end: u64,
    delay: u32,
    run: u32,
    elapsed: u32,
}

impl Counter {
    pub fn new(end: u64, delay: u32, run: u32) -> Self {
        Counter {
            end,
            delay,
            run,
            elapsed: 0,
        }
    }

    /// `floor(progress * end)`, reaching `end` exactly when done.
    ///
    /// Computed in integers so values beyond f64 precision stay exact.
    pub fn value(&self) -> u64 {
        if self.is_done() {
            return self.end;
        }
        if self.elapsed < self.delay {
            return 0;
        }
        // not done, so elapsed - delay < run and run > 0
        let counted = u128::from(self.elapsed - self.delay);
        (u128::from(self.end) * counted / u128::from(self.run)) as u64
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.delay.saturating_add(self.run)
    }

    fn tick(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
    }
}

// ============================================================================
// PER-SLIDE ANIMATIONS
// ============================================================================

/// Everything animating on the mounted slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Animations {
    slide: usize,
    slide_in: SlideIn,
    counters: Vec<Counter>,
    stagger: u32,
    blocks: usize,
    elapsed: u32,
    /// Previous slide still on its way out.
    leaving: Option<SlideOut>,
}

impl Animations {
    /// Start the animations of `slide`, shown at index `slide_index`.
    pub fn mount(slide_index: usize, slide: &Slide, direction: Direction, motion: Motion) -> Self {
        let run = motion.frames(COUNTER_RUN);
        let base = motion.frames(COUNTER_DELAY);
        let step = motion.frames(COUNTER_STAGGER);

        let counters = slide
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::Stats { stats } => Some(stats),
                _ => None,
            })
            .flatten()
            .enumerate()
            .map(|(i, stat)| Counter::new(stat.value, base + step * i as u32, run))
            .collect();

        Animations {
            slide: slide_index,
            slide_in: SlideIn::new(direction, motion.frames(SLIDE_IN)),
            counters,
            stagger: motion.frames(REVEAL_STAGGER),
            blocks: slide.blocks.len(),
            elapsed: 0,
            leaving: None,
        }
    }

    /// Let `previous` slide out before this slide starts entering.
    ///
    /// Anything `previous` was itself still playing out is dropped. With
    /// motion off `previous` is dropped at once.
    pub fn play_out(&mut self, mut previous: Animations, motion: Motion) {
        previous.leaving = None;
        let frames = motion.frames(SLIDE_OUT);
        self.leaving = if frames == 0 {
            None
        } else {
            Some(SlideOut::new(previous, self.slide_in.direction, frames))
        };
    }

    /// The outgoing slide, while it is still visible.
    pub fn leaving(&self) -> Option<&SlideOut> {
        self.leaving.as_ref()
    }

    /// Advance one frame: the outgoing slide's exit if there is one,
    /// otherwise every animation of this slide.
    pub fn tick(&mut self) {
        if let Some(out) = self.leaving.as_mut() {
            out.tick();
            if out.is_done() {
                self.leaving = None;
            }
            return;
        }
        self.elapsed = self.elapsed.saturating_add(1);
        self.slide_in.tick();
        for counter in &mut self.counters {
            counter.tick();
        }
    }

    /// Index of the slide these animations belong to.
    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn offset(&self, width: u16) -> i32 {
        self.slide_in.offset(width)
    }

    /// Whether block `index` has faded in yet.
    pub fn is_revealed(&self, index: usize) -> bool {
        let due = (index as u32).saturating_mul(self.stagger);
        self.elapsed >= due
    }

    /// Current value of the `index`-th counter on the slide, counting
    /// stats in reading order across blocks.
    pub fn counter(&self, index: usize) -> Option<u64> {
        self.counters.get(index).map(Counter::value)
    }

    pub fn pending_counters(&self) -> usize {
        self.counters.iter().filter(|c| !c.is_done()).count()
    }

    /// True once nothing on the slide will change on the next tick.
    pub fn is_settled(&self) -> bool {
        self.leaving.is_none()
            && self.slide_in.is_done()
            && self.pending_counters() == 0
            && self.is_revealed(self.blocks.saturating_sub(1))
    }
}

impl Drop for Animations {
    fn drop(&mut self) {
        let pending = self.pending_counters();
        if pending > 0 {
            tracing::trace!(slide = self.slide, pending, "cancelled counters on unmount");
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stat;

    fn stats_slide() -> Slide {
        Slide {
            title: "Numbers".into(),
            kicker: None,
            blocks: vec![
                Block::Text {
                    text: "intro".into(),
                    tone: Default::default(),
                },
                Block::Stats {
                    stats: vec![
                        Stat {
                            value: 100,
                            suffix: "+".into(),
                            label: "Countries".into(),
                        },
                        Stat {
                            value: 6,
                            suffix: "M+".into(),
                            label: "Workers".into(),
                        },
                    ],
                },
            ],
        }
    }

    fn ticked(mut anim: Animations, n: usize) -> Animations {
        for _ in 0..n {
            anim.tick();
        }
        anim
    }

    #[test]
    fn frames_follow_fps() {
        let motion = Motion { enabled: true, fps: 30 };
        assert_eq!(motion.frames(Duration::from_secs(2)), 60);
        assert_eq!(Motion::still().frames(Duration::from_secs(2)), 0);
    }

    #[test]
    fn forward_slide_enters_from_right() {
        let slide_in = SlideIn::new(Direction::Forward, 10);
        assert_eq!(slide_in.offset(80), 80);
    }

    #[test]
    fn backward_slide_enters_from_left() {
        let slide_in = SlideIn::new(Direction::Backward, 10);
        assert_eq!(slide_in.offset(80), -80);
    }

    #[test]
    fn slide_in_settles_at_zero() {
        let mut slide_in = SlideIn::new(Direction::Forward, 4);
        let mut last = slide_in.offset(100);
        for _ in 0..4 {
            slide_in.tick();
            let now = slide_in.offset(100);
            assert!(now <= last);
            last = now;
        }
        assert!(slide_in.is_done());
        assert_eq!(slide_in.offset(100), 0);
    }

    #[test]
    fn counter_waits_then_counts_up() {
        let mut counter = Counter::new(100, 2, 4);
        assert_eq!(counter.value(), 0);
        counter.tick();
        counter.tick();
        assert_eq!(counter.value(), 0);
        counter.tick();
        assert_eq!(counter.value(), 25);
        counter.tick();
        counter.tick();
        counter.tick();
        assert_eq!(counter.value(), 100);
        assert!(counter.is_done());
    }

    #[test]
    fn counter_floors_partial_progress() {
        let mut counter = Counter::new(6, 0, 4);
        counter.tick();
        // 1/4 of 6 = 1.5
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn counter_lands_exactly_on_large_values() {
        let end = (1u64 << 53) + 1;
        let mut counter = Counter::new(end, 0, 4);
        counter.tick();
        counter.tick();
        assert_eq!(counter.value(), end / 2);
        counter.tick();
        counter.tick();
        assert!(counter.is_done());
        assert_eq!(counter.value(), end);

        let mut counter = Counter::new(u64::MAX, 0, 3);
        counter.tick();
        assert_eq!(counter.value(), u64::MAX / 3);
    }

    #[test]
    fn forward_exit_leaves_to_the_left() {
        let anim = Animations::mount(0, &stats_slide(), Direction::Forward, Motion::still());
        let mut out = SlideOut::new(anim, Direction::Forward, 4);
        assert_eq!(out.offset(80), 0);
        out.tick();
        out.tick();
        assert!(out.offset(80) < 0);
        out.tick();
        out.tick();
        assert!(out.is_done());
        assert_eq!(out.offset(80), -80);
    }

    #[test]
    fn backward_exit_leaves_to_the_right() {
        let anim = Animations::mount(3, &stats_slide(), Direction::Backward, Motion::still());
        let mut out = SlideOut::new(anim, Direction::Backward, 4);
        out.tick();
        out.tick();
        assert!(out.offset(80) > 0);
        assert_eq!(out.slide(), 3);
    }

    #[test]
    fn entering_slide_waits_for_exit() {
        let motion = Motion { enabled: true, fps: 10 };
        let slide = stats_slide();
        let previous = ticked(Animations::mount(0, &slide, Direction::Forward, motion), 40);
        let mut anim = Animations::mount(1, &slide, Direction::Forward, motion);
        anim.play_out(previous, motion);

        // 200 ms at 10 fps
        assert_eq!(anim.leaving().map(SlideOut::slide), Some(0));
        assert_eq!(anim.leaving().unwrap().animations().counter(0), Some(100));
        let anim = ticked(anim, 1);
        assert!(anim.leaving().is_some());
        assert!(!anim.is_settled());
        assert_eq!(anim.offset(80), 80);

        let anim = ticked(anim, 1);
        assert!(anim.leaving().is_none());
        assert_eq!(anim.offset(80), 80);
        let anim = ticked(anim, 1);
        assert!(anim.offset(80) < 80);
    }

    #[test]
    fn play_out_drops_older_exits() {
        let motion = Motion::default();
        let slide = stats_slide();
        let mut second = Animations::mount(1, &slide, Direction::Forward, motion);
        second.play_out(Animations::mount(0, &slide, Direction::Forward, motion), motion);
        let mut third = Animations::mount(2, &slide, Direction::Forward, motion);
        third.play_out(second, motion);

        let out = third.leaving().unwrap();
        assert_eq!(out.slide(), 1);
        assert!(out.animations().leaving().is_none());
    }

    #[test]
    fn still_motion_skips_exit() {
        let slide = stats_slide();
        let mut anim = Animations::mount(1, &slide, Direction::Forward, Motion::still());
        anim.play_out(
            Animations::mount(0, &slide, Direction::Forward, Motion::still()),
            Motion::still(),
        );
        assert!(anim.leaving().is_none());
        assert!(anim.is_settled());
    }

    #[test]
    fn still_motion_mounts_settled() {
        let anim = Animations::mount(2, &stats_slide(), Direction::Forward, Motion::still());
        assert!(anim.is_settled());
        assert_eq!(anim.offset(80), 0);
        assert_eq!(anim.counter(0), Some(100));
        assert_eq!(anim.counter(1), Some(6));
        assert!(anim.is_revealed(1));
    }

    #[test]
    fn mount_collects_counters_in_reading_order() {
        let anim = Animations::mount(0, &stats_slide(), Direction::Forward, Motion::default());
        assert_eq!(anim.pending_counters(), 2);
        assert_eq!(anim.counter(0), Some(0));
        assert_eq!(anim.counter(2), None);
    }

    #[test]
    fn blocks_reveal_in_turn() {
        let motion = Motion { enabled: true, fps: 20 };
        // stagger = 3 frames at 20 fps
        let anim = Animations::mount(0, &stats_slide(), Direction::Forward, motion);
        assert!(anim.is_revealed(0));
        assert!(!anim.is_revealed(1));
        let anim = ticked(anim, 3);
        assert!(anim.is_revealed(1));
    }

    #[test]
    fn animations_settle_eventually() {
        let motion = Motion { enabled: true, fps: 10 };
        let anim = Animations::mount(0, &stats_slide(), Direction::Backward, motion);
        assert!(!anim.is_settled());
        let anim = ticked(anim, 40);
        assert!(anim.is_settled());
        assert_eq!(anim.counter(0), Some(100));
    }

    #[test]
    fn remount_restarts_counters() {
        let motion = Motion { enabled: true, fps: 10 };
        let slide = stats_slide();
        let anim = ticked(Animations::mount(0, &slide, Direction::Forward, motion), 40);
        assert_eq!(anim.counter(0), Some(100));
        let again = Animations::mount(0, &slide, Direction::Backward, motion);
        assert_eq!(again.counter(0), Some(0));
    }
}
