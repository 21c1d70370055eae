use std::time::Duration;
use tracing::debug;

use crate::clock::Clock;
use crate::rotation::state::{HoverRelease, RotationState, RotationTiming};

/// Selects which of `len` items a carousel shows.
///
/// Time only enters through the injected [`Clock`]: pending timers are stored
/// as deadlines and fired, oldest first, whenever [`update`](Self::update) or
/// a navigation method runs. There is a single cooldown slot, so a new manual
/// action always replaces the previous resume deadline instead of stacking one.
#[derive(Debug)]
pub struct RotationController<C: Clock> {
    clock: C,
    timing: RotationTiming,

    len: usize,
    index: usize,

    state: RotationState,
    hovered: bool,

    resume_at: Option<Duration>,    // Pending cooldown expiry
    next_tick_at: Option<Duration>, // Only set while Running
}

impl<C: Clock> RotationController<C> {
    pub fn new(len: usize, clock: C, timing: RotationTiming) -> Self {
        let next_tick_at = Some(clock.now() + timing.interval);
        Self {
            clock,
            timing,
            len,
            index: 0,
            state: RotationState::Running,
            hovered: false,
            resume_at: None,
            next_tick_at,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RotationState::Paused
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn timing(&self) -> RotationTiming {
        self.timing
    }

    /// Time left before a pending cooldown expires, if one is pending.
    pub fn cooldown_remaining(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.resume_at.map(|at| at.saturating_sub(now))
    }

    /// Time left before the next automatic advance. `None` while paused.
    pub fn next_tick_in(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.next_tick_at.map(|at| at.saturating_sub(now))
    }

    /// Fires every timer that is due at the clock's current time.
    ///
    /// Returns `true` if the displayed index changed.
    pub fn update(&mut self) -> bool {
        let now = self.clock.now();
        let before = self.index;

        loop {
            // Cooldowns only exist while paused, so at most one of the two
            // deadlines can be armed at any point in this loop.
            if let Some(at) = self.resume_at.filter(|at| *at <= now) {
                self.resume_at = None;
                if self.hovered {
                    debug!("cooldown expired while hovered, staying paused");
                } else {
                    self.resume(at);
                }
                continue;
            }
            if let Some(at) = self.next_tick_at.filter(|at| *at <= now) {
                self.tick();
                self.next_tick_at = Some(at + self.timing.interval);
                continue;
            }
            break;
        }

        self.index != before
    }

    /// Advances to the next item unless paused. Wraps at the end.
    pub fn tick(&mut self) -> bool {
        if self.is_paused() || self.len == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    pub fn next(&mut self) {
        self.update();
        if self.len == 0 {
            return;
        }
        self.begin_cooldown();
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.update();
        if self.len == 0 {
            return;
        }
        self.begin_cooldown();
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jumps to `index`. Out-of-range requests are rejected and leave the
    /// controller untouched.
    pub fn go_to(&mut self, index: usize) -> bool {
        self.update();
        if index >= self.len {
            debug!(index, len = self.len, "rejected out-of-range carousel jump");
            return false;
        }
        self.begin_cooldown();
        self.index = index;
        true
    }

    /// Pointer entered (`true`) or left (`false`) the carousel.
    pub fn set_hover(&mut self, active: bool) {
        self.update();
        if active == self.hovered {
            return;
        }
        self.hovered = active;

        if active {
            self.pause();
            return;
        }

        let now = self.clock.now();
        match self.timing.hover_release {
            HoverRelease::Immediate => {
                self.resume_at = None;
                self.resume(now);
            }
            HoverRelease::HonorCooldown => {
                if self.resume_at.is_none() {
                    self.resume(now);
                }
            }
        }
    }

    /// The item list changed length. Keeps the index in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.revalidate();
    }

    fn begin_cooldown(&mut self) {
        let now = self.clock.now();
        self.pause();
        self.resume_at = Some(now + self.timing.cooldown);
    }

    fn pause(&mut self) {
        if self.state == RotationState::Running {
            debug!(index = self.index, "carousel paused");
        }
        self.state = RotationState::Paused;
        self.next_tick_at = None;
    }

    fn resume(&mut self, at: Duration) {
        self.revalidate();
        self.state = RotationState::Running;
        self.next_tick_at = Some(at + self.timing.interval);
        debug!(index = self.index, "carousel resumed");
    }

    fn revalidate(&mut self) {
        if self.len == 0 {
            self.index = 0;
        } else if self.index >= self.len {
            self.index = self.len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn controller(len: usize, policy: HoverRelease) -> (RotationController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let timing = RotationTiming::new(ms(5000), ms(8000), policy);
        (RotationController::new(len, clock.clone(), timing), clock)
    }

    #[test]
    fn tick_wraps_at_end() {
        let (mut c, _) = controller(3, HoverRelease::default());
        assert!(c.tick());
        assert!(c.tick());
        assert_eq!(c.index(), 2);
        assert!(c.tick());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn tick_on_empty_list_is_noop() {
        let (mut c, _) = controller(0, HoverRelease::default());
        assert!(!c.tick());
        c.next();
        c.previous();
        assert_eq!(c.index(), 0);
        assert!(!c.is_paused());
    }

    #[test]
    fn ticks_cover_every_index_once_per_cycle() {
        for len in 1..=7 {
            for start in 0..len {
                let (mut c, clock) = controller(len, HoverRelease::default());
                c.go_to(start);
                clock.advance(ms(8000));
                c.update();
                let mut seen = vec![0; len];
                for _ in 0..len {
                    seen[c.index()] += 1;
                    c.tick();
                }
                assert!(seen.iter().all(|&n| n == 1), "len {len} start {start}: {seen:?}");
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn next_then_previous_returns_to_start() {
        let (mut c, _) = controller(5, HoverRelease::default());
        c.go_to(4);
        c.next();
        assert_eq!(c.index(), 0);
        c.previous();
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn go_to_rejects_out_of_range_without_pausing() {
        let (mut c, _) = controller(5, HoverRelease::default());
        assert!(!c.go_to(5));
        assert_eq!(c.index(), 0);
        assert_eq!(c.state(), RotationState::Running);
        assert!(c.go_to(3));
        assert_eq!(c.index(), 3);
        assert!(c.is_paused());
    }

    #[test]
    fn paused_tick_never_moves() {
        let (mut c, clock) = controller(4, HoverRelease::default());
        c.set_hover(true);
        for _ in 0..10 {
            assert!(!c.tick());
            clock.advance(ms(5000));
            c.update();
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn documented_timeline() {
        let (mut c, clock) = controller(5, HoverRelease::default());
        assert_eq!(c.index(), 0);

        clock.set(ms(5000));
        assert!(c.update());
        assert_eq!(c.index(), 1);

        clock.set(ms(6000));
        c.previous();
        assert_eq!(c.index(), 0);
        assert!(c.is_paused());

        clock.set(ms(13_999));
        assert!(!c.update());
        assert!(c.is_paused());

        clock.set(ms(14_000));
        c.update();
        assert_eq!(c.state(), RotationState::Running);
        assert_eq!(c.index(), 0);
        assert_eq!(c.next_tick_in(), Some(ms(5000)));

        clock.set(ms(19_000));
        c.update();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn repeated_manual_actions_replace_the_cooldown() {
        let (mut c, clock) = controller(5, HoverRelease::default());
        c.next();
        clock.advance(ms(6000));
        c.next();
        assert_eq!(c.cooldown_remaining(), Some(ms(8000)));

        // The first cooldown would have expired here.
        clock.advance(ms(3000));
        c.update();
        assert!(c.is_paused());

        clock.advance(ms(5000));
        c.update();
        assert!(!c.is_paused());
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn hover_pauses_and_leave_resumes_without_cooldown() {
        let (mut c, clock) = controller(3, HoverRelease::default());
        c.set_hover(true);
        assert!(c.is_paused());
        assert_eq!(c.cooldown_remaining(), None);

        clock.advance(ms(20_000));
        c.set_hover(false);
        assert!(!c.is_paused());
        assert_eq!(c.index(), 0);
        assert_eq!(c.next_tick_in(), Some(ms(5000)));
    }

    #[test]
    fn honor_cooldown_keeps_pause_after_early_hover_leave() {
        let (mut c, clock) = controller(3, HoverRelease::HonorCooldown);
        c.next();
        clock.advance(ms(1000));
        c.set_hover(true);
        clock.advance(ms(2000));
        c.set_hover(false);
        assert!(c.is_paused());

        clock.advance(ms(5000));
        c.update();
        assert!(!c.is_paused());
    }

    #[test]
    fn honor_cooldown_resumes_on_leave_when_cooldown_elapsed_during_hover() {
        let (mut c, clock) = controller(3, HoverRelease::HonorCooldown);
        c.next();
        c.set_hover(true);
        clock.advance(ms(9000));
        c.update();
        assert!(c.is_paused());
        assert_eq!(c.cooldown_remaining(), None);

        c.set_hover(false);
        assert!(!c.is_paused());
    }

    #[test]
    fn immediate_release_cancels_pending_cooldown() {
        let (mut c, clock) = controller(3, HoverRelease::Immediate);
        c.next();
        clock.advance(ms(1000));
        c.set_hover(true);
        c.set_hover(false);
        assert!(!c.is_paused());
        assert_eq!(c.cooldown_remaining(), None);

        // A stale cooldown must not fire later.
        clock.advance(ms(5000));
        c.update();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn shrinking_list_clamps_index() {
        let (mut c, clock) = controller(6, HoverRelease::default());
        c.go_to(5);
        c.set_len(3);
        assert_eq!(c.index(), 2);
        c.set_len(0);
        assert_eq!(c.index(), 0);

        clock.advance(ms(8000));
        c.update();
        assert!(!c.is_paused());
        assert!(!c.tick());
    }

    #[test]
    fn long_stall_fires_every_missed_tick() {
        let (mut c, clock) = controller(4, HoverRelease::default());
        clock.advance(ms(15_000));
        c.update();
        assert_eq!(c.index(), 3);
    }
}
