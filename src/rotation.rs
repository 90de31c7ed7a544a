use log::debug;

use crate::page::PageIdentity;

/// Homepage rotation shows a window of 3 cards at a time.
pub const HOME_VISIBLE_COUNT: usize = 3;

/// Both carousel variants advance every 5 seconds.
pub const ROTATE_INTERVAL_MS: u64 = 5000;

/// The single-item carousel rotates over a fixed collection size,
/// independent of the data actually rendered; deriving it from data
/// would change the wrap points.
pub const SINGLE_ITEM_TOTAL: usize = 3;

pub type TimerId = u64;

/// Owns timer arming/cancelling so the rotator never touches a real clock.
/// Timer fire is modeled as the owner calling `tick` on the rotator.
pub trait Scheduler {
    fn arm(&mut self, interval_ms: u64) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

/// Scheduler driven by its owner: arming registers a timer id, firing is
/// an explicit `Rotator::tick` by whoever holds the scheduler.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: TimerId,
    active: Vec<TimerId>,
}

impl ManualScheduler {
    pub fn new() -> ManualScheduler {
        ManualScheduler::default()
    }

    pub fn active_timers(&self) -> usize {
        self.active.len()
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, interval_ms: u64) -> TimerId {
        self.next_id += 1;
        self.active.push(self.next_id);
        debug!("armed rotation timer {} ({}ms)", self.next_id, interval_ms);
        self.next_id
    }

    fn cancel(&mut self, id: TimerId) {
        self.active.retain(|t| *t != id);
    }
}

#[derive(Debug, Clone)]
pub struct RotatorConfig {
    pub visible_count: usize,
    pub total_count: usize,
    pub interval_ms: u64,
    pub pause_on_hover: bool,
}

/// One rotation component covering both carousels: the homepage's
/// windowed rotation (3 visible, pause on hover) and the single-item
/// carousel with its 1-based indicator API. States are {stopped, running},
/// tracked by the owned timer handle.
#[derive(Debug)]
pub struct Rotator {
    cfg: RotatorConfig,
    current: usize,
    timer: Option<TimerId>,
}

impl Rotator {
    pub fn new(cfg: RotatorConfig) -> Rotator {
        Rotator {
            cfg,
            current: 0,
            timer: None,
        }
    }

    /// Homepage variant: window of 3 over the loaded testimonials.
    pub fn windowed(total_count: usize, interval_ms: u64) -> Rotator {
        Rotator::new(RotatorConfig {
            visible_count: HOME_VISIBLE_COUNT,
            total_count,
            interval_ms,
            pause_on_hover: true,
        })
    }

    /// Single-item variant: one visible, fixed total, never paused.
    pub fn single_item(interval_ms: u64) -> Rotator {
        Rotator::new(RotatorConfig {
            visible_count: 1,
            total_count: SINGLE_ITEM_TOTAL,
            interval_ms,
            pause_on_hover: false,
        })
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn total_count(&self) -> usize {
        self.cfg.total_count
    }

    /// Arm the rotation timer. No-op on empty data. Any already-armed
    /// timer is cancelled first, so repeated starts never stack timers.
    pub fn start(&mut self, sched: &mut dyn Scheduler) {
        if self.cfg.total_count == 0 {
            return;
        }
        if let Some(timer) = self.timer.take() {
            sched.cancel(timer);
        }
        self.timer = Some(sched.arm(self.cfg.interval_ms));
    }

    /// Cancel the timer. Safe to call when already stopped.
    pub fn stop(&mut self, sched: &mut dyn Scheduler) {
        if let Some(timer) = self.timer.take() {
            sched.cancel(timer);
        }
    }

    /// One timer fire: return the window to show, then advance. The first
    /// tick re-shows the initial window; the advance happens after.
    pub fn tick(&mut self) -> Vec<usize> {
        if self.cfg.total_count == 0 {
            return Vec::new();
        }
        let window = self.visible_indices();
        self.current = (self.current + self.cfg.visible_count) % self.cfg.total_count;
        window
    }

    /// The current window: `min(visible, total)` indices starting at the
    /// current position, wrapping modulo the total.
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.cfg.total_count == 0 {
            return Vec::new();
        }
        let count = self.cfg.visible_count.min(self.cfg.total_count);
        (0..count)
            .map(|i| (self.current + i) % self.cfg.total_count)
            .collect()
    }

    pub fn pointer_enter(&mut self, sched: &mut dyn Scheduler) {
        if self.cfg.pause_on_hover {
            self.stop(sched);
        }
    }

    pub fn pointer_leave(&mut self, sched: &mut dyn Scheduler, identity: PageIdentity) {
        if self.cfg.pause_on_hover && identity == PageIdentity::Home {
            self.start(sched);
        }
    }

    /// Page unload: release the timer so nothing fires against a
    /// torn-down page.
    pub fn teardown(&mut self, sched: &mut dyn Scheduler) {
        self.stop(sched);
    }

    // ── Single-item carousel surface (1-based, indicator-driven) ──

    /// Show the testimonial at a 1-based index. Out-of-range values wrap
    /// a single step to the opposite end: above the total lands on 1,
    /// below 1 lands on the total. Not modulo arithmetic.
    pub fn show_at(&mut self, n: i64) -> usize {
        if self.cfg.total_count == 0 {
            return 0;
        }
        let total = self.cfg.total_count as i64;
        let active = if n > total {
            1
        } else if n < 1 {
            total
        } else {
            n
        };
        self.current = (active - 1) as usize;
        self.active()
    }

    /// Indicator click: select an index directly.
    pub fn select(&mut self, n: i64) -> usize {
        self.show_at(n)
    }

    /// Timer fire for the single-item variant: advance by one, wrapping.
    pub fn next(&mut self) -> usize {
        self.show_at(self.active() as i64 + 1)
    }

    /// The 1-based active index.
    pub fn active(&self) -> usize {
        self.current + 1
    }
}
