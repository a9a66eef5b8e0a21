//! Page Replacement Policies.
//!
//! Implements the algorithms that own a cache's contents and decide which
//! resident page to evict on a miss.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used.
//! - `Cflru`: Clean-First LRU with a static or self-tuning window.
//! - `BeladyMin`: Belady's offline-optimal MIN (needs the full trace up front).
//!
//! Every policy satisfies the same contract, so the replay harness drives them
//! interchangeably and never looks inside their cache structures.

/// Belady's offline-optimal MIN replacement policy.
pub mod belady;

/// Clean-First LRU replacement policy.
pub mod cflru;

/// Future-access index used by Belady MIN.
pub mod future;

/// Least Recently Used replacement policy.
pub mod lru;

mod recency;

pub use belady::{BeladyMinBuilder, BeladyMinPolicy};
pub use cflru::{CflruPolicy, WindowTuner};
pub use future::{FutureIndex, NextUse};
pub use lru::LruPolicy;

use std::fmt;

use tracing::debug;

use crate::common::{Page, PageId, Result, SimError};
use crate::config::{PolicyConfig, PolicyKind};
use crate::trace::Trace;

/// Result of a single page access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessOutcome {
    /// The page was resident.
    pub hit: bool,
    /// Page evicted to make room on a miss at capacity. Owned by the caller.
    pub victim: Option<Page>,
}

impl AccessOutcome {
    /// A hit; hits never evict.
    #[inline]
    pub const fn hit() -> Self {
        Self {
            hit: true,
            victim: None,
        }
    }

    /// A miss, with the victim if the cache was full.
    #[inline]
    pub const fn miss(victim: Option<Page>) -> Self {
        Self { hit: false, victim }
    }
}

/// Trait for page replacement policies.
///
/// Defines the interface the replay harness uses to drive a cache.
pub trait ReplacementPolicy: Send + fmt::Debug {
    /// Accesses a page.
    ///
    /// On a hit a write raises the resident page's dirty flag (a read never
    /// clears it). On a miss at capacity exactly one resident is evicted and
    /// returned; the new page is inserted with `dirty = is_write`.
    ///
    /// # Arguments
    ///
    /// * `page_id` - The accessed page.
    /// * `is_write` - Whether the access writes the page.
    ///
    /// # Returns
    ///
    /// The hit flag and the evicted page, if any.
    fn access(&mut self, page_id: PageId, is_write: bool) -> AccessOutcome;

    /// Display name of the policy.
    fn name(&self) -> &'static str;

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Number of resident pages.
    fn len(&self) -> usize;

    /// Returns `true` if no page is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `page_id` is resident.
    fn contains(&self, page_id: PageId) -> bool;

    /// Copies of the resident pages in the policy's own order.
    ///
    /// LRU and CFLRU list least-recently-used first; Belady MIN lists in
    /// insertion order.
    fn residents(&self) -> Vec<Page>;
}

/// Rejects capacities below one page.
pub(crate) fn check_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        Err(SimError::InvalidCapacity { capacity })
    } else {
        Ok(capacity)
    }
}

/// Builds the configured policy at the given capacity.
///
/// Belady MIN is handed the full trace here, before any access is replayed;
/// the online policies ignore it.
///
/// # Errors
///
/// Returns [`SimError::InvalidCapacity`] for a zero capacity and
/// [`SimError::InvalidConfig`] for invalid CFLRU parameters.
pub fn build_policy(
    config: &PolicyConfig,
    capacity: usize,
    trace: &Trace,
) -> Result<Box<dyn ReplacementPolicy>> {
    let policy: Box<dyn ReplacementPolicy> = match config.kind {
        PolicyKind::Lru => Box::new(LruPolicy::new(capacity)?),
        PolicyKind::Cflru => Box::new(CflruPolicy::new(capacity, &config.cflru)?),
        PolicyKind::BeladyMin => Box::new(BeladyMinBuilder::new(capacity).trace(trace).build()?),
    };
    debug!(policy = policy.name(), capacity, "policy built");
    Ok(policy)
}
