//! Clean-First LRU (CFLRU) Replacement Policy.
//!
//! CFLRU keeps the same recency order as LRU but splits the LRU end of the
//! list into a *clean-first window* of `window_size` pages. On eviction the
//! window is scanned from least to most recently used and the first clean
//! page is evicted, avoiding a flash write. If the window holds no clean page
//! (or is empty) the policy falls back to the plain LRU victim, so eviction
//! always succeeds.
//!
//! In dynamic mode the window size is tuned online. Every `dynamic_period`
//! accesses the cost of the finished period (`misses + 8 * dirty evictions`)
//! is compared with the previous period's; if it went up the search direction
//! is reversed, then the window moves one step. This is a noisy local search
//! with no convergence guarantee.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - hit: O(1)
//!   - miss: O(W) where W is the window size
//! - **Space Complexity:** O(C) where C is the capacity

use tracing::debug;

use super::recency::RecencyList;
use super::{AccessOutcome, ReplacementPolicy, check_capacity};
use crate::common::{FLUSH_COST, MISS_COST, Page, PageId, Result};
use crate::config::{CflruConfig, WindowMode};

/// Fraction of the capacity the window moves per adjustment.
const STEP_RATIO: f64 = 0.05;

/// Direction of the next window adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Grow,
    Shrink,
}

impl Direction {
    const fn reversed(self) -> Self {
        match self {
            Self::Grow => Self::Shrink,
            Self::Shrink => Self::Grow,
        }
    }
}

/// Hill-climbing controller for the clean-first window size.
///
/// Holds the current window, the step applied per adjustment, the search
/// direction and the cost of the previous period. The window stays within
/// `[0, capacity]`.
#[derive(Clone, Debug)]
pub struct WindowTuner {
    capacity: usize,
    window: usize,
    step: usize,
    direction: Direction,
    /// `None` until the first period completes (an infinitely bad baseline).
    prev_cost: Option<u64>,
}

impl WindowTuner {
    /// Creates a tuner with window `round(capacity * window_ratio)` and step
    /// `max(1, round(capacity * 0.05))`, initially growing.
    pub fn new(capacity: usize, window_ratio: f64) -> Self {
        let window = (capacity as f64 * window_ratio).round() as usize;
        let step = ((capacity as f64 * STEP_RATIO).round() as usize).max(1);
        Self {
            capacity,
            window: window.min(capacity),
            step,
            direction: Direction::Grow,
            prev_cost: None,
        }
    }

    /// Current window size.
    #[inline]
    pub const fn window(&self) -> usize {
        self.window
    }

    /// Pages the window moves per adjustment.
    #[inline]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Runs one hill-climbing step with the cost of the period that just ended.
    ///
    /// # Returns
    ///
    /// The new window size.
    pub fn adjust(&mut self, period_cost: u64) -> usize {
        if self.prev_cost.is_some_and(|prev| period_cost > prev) {
            self.direction = self.direction.reversed();
        }
        self.window = match self.direction {
            Direction::Grow => (self.window + self.step).min(self.capacity),
            Direction::Shrink => self.window.saturating_sub(self.step),
        };
        self.prev_cost = Some(period_cost);
        self.window
    }
}

/// CFLRU Policy state.
#[derive(Debug)]
pub struct CflruPolicy {
    capacity: usize,
    /// Resident pages, head is LRU, tail is MRU.
    pages: RecencyList,
    mode: WindowMode,
    tuner: WindowTuner,
    dynamic_period: u64,
    /// Accesses since construction.
    op_count: u64,
    /// Misses since the last adjustment.
    period_reads: u64,
    /// Dirty evictions since the last adjustment.
    period_writes: u64,
}

impl CflruPolicy {
    /// Creates an empty CFLRU cache.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident pages.
    /// * `config` - Window ratio, window mode and tuning period.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCapacity`](crate::common::SimError::InvalidCapacity)
    /// if `capacity` is zero and [`SimError::InvalidConfig`](crate::common::SimError::InvalidConfig)
    /// if the window ratio or period is out of range.
    pub fn new(capacity: usize, config: &CflruConfig) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        config.validate()?;
        Ok(Self {
            capacity,
            pages: RecencyList::with_capacity(capacity),
            mode: config.mode,
            tuner: WindowTuner::new(capacity, config.window_ratio),
            dynamic_period: config.dynamic_period,
            op_count: 0,
            period_reads: 0,
            period_writes: 0,
        })
    }

    /// Current clean-first window size.
    #[inline]
    pub const fn window_size(&self) -> usize {
        self.tuner.window()
    }

    /// Static or dynamic window.
    #[inline]
    pub const fn mode(&self) -> WindowMode {
        self.mode
    }

    /// Evicts the first clean page inside the window, else the LRU page.
    fn evict(&mut self) -> Option<Page> {
        let clean = self
            .pages
            .iter()
            .take(self.tuner.window())
            .find(|page| !page.dirty)
            .map(|page| page.id);

        let victim = match clean {
            Some(id) => self.pages.remove(id),
            None => self.pages.pop_front(),
        };
        if victim.is_some_and(|page| page.dirty) {
            self.period_writes += 1;
        }
        victim
    }

    fn adjust_window(&mut self) {
        let period_cost = self.period_reads * MISS_COST + self.period_writes * FLUSH_COST;
        let window = self.tuner.adjust(period_cost);
        debug!(
            op = self.op_count,
            period_cost,
            window,
            "cflru window adjusted"
        );
        self.period_reads = 0;
        self.period_writes = 0;
    }
}

impl ReplacementPolicy for CflruPolicy {
    fn access(&mut self, page_id: PageId, is_write: bool) -> AccessOutcome {
        self.op_count += 1;

        let outcome = if let Some(page) = self.pages.touch(page_id) {
            if is_write {
                page.mark_dirty();
            }
            AccessOutcome::hit()
        } else {
            self.period_reads += 1;
            let victim = if self.pages.len() >= self.capacity {
                self.evict()
            } else {
                None
            };
            self.pages.push_back(Page::new(page_id, is_write));
            AccessOutcome::miss(victim)
        };

        if self.mode == WindowMode::Dynamic && self.op_count % self.dynamic_period == 0 {
            self.adjust_window();
        }
        outcome
    }

    fn name(&self) -> &'static str {
        match self.mode {
            WindowMode::Static => "CFLRU-Static",
            WindowMode::Dynamic => "CFLRU-Dynamic",
        }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.pages.len()
    }

    fn contains(&self, page_id: PageId) -> bool {
        self.pages.contains(page_id)
    }

    fn residents(&self) -> Vec<Page> {
        self.pages.iter().copied().collect()
    }
}
