//! Belady's MIN (OPT) Replacement Policy.
//!
//! The offline-optimal reference policy: on a miss at capacity it evicts the
//! resident page whose next use lies farthest in the future, or one that is
//! never used again. It minimizes the miss count but needs the whole trace in
//! advance, so it serves only as a baseline for the online policies.
//!
//! The policy can only be obtained through [`BeladyMinBuilder`], which
//! requires the trace and builds the [`FutureIndex`] before the first access.
//!
//! Finite next-use positions are unique per page, so ties are only possible
//! among pages that are never used again. Among those the page that entered
//! the cache earliest is evicted.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - build: O(N) where N is the trace length
//!   - `access()`: O(log C) where C is the capacity
//! - **Space Complexity:** O(N + C)

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::future::{FutureIndex, NextUse};
use super::{AccessOutcome, ReplacementPolicy, check_capacity};
use crate::common::{Page, PageId, Result, SimError};
use crate::trace::Trace;

/// Eviction order key. The greatest key is the next victim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct EvictionKey {
    next_use: NextUse,
    /// Earlier insertions rank higher among equal next uses.
    age: Reverse<u64>,
    page_id: PageId,
}

#[derive(Clone, Copy, Debug)]
struct Resident {
    page: Page,
    key: EvictionKey,
}

/// Builder for [`BeladyMinPolicy`]; the future trace is mandatory.
#[derive(Debug)]
pub struct BeladyMinBuilder<'a> {
    capacity: usize,
    trace: Option<&'a Trace>,
}

impl<'a> BeladyMinBuilder<'a> {
    /// Starts a builder for a cache of `capacity` pages.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            trace: None,
        }
    }

    /// Supplies the full trace that will be replayed.
    #[must_use]
    pub const fn trace(mut self, trace: &'a Trace) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Builds the future index and returns an empty cache at logical time 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCapacity`] if the capacity is zero and
    /// [`SimError::MissingFutureTrace`] if no trace was supplied.
    pub fn build(self) -> Result<BeladyMinPolicy> {
        let capacity = check_capacity(self.capacity)?;
        let trace = self.trace.ok_or(SimError::MissingFutureTrace)?;
        let index = FutureIndex::build(trace);
        debug!(
            accesses = trace.len(),
            pages = index.pages(),
            "future index built"
        );
        Ok(BeladyMinPolicy {
            capacity,
            index,
            clock: 0,
            residents: HashMap::with_capacity(capacity),
            order: BTreeSet::new(),
            inserted: 0,
        })
    }
}

/// Belady MIN Policy state.
#[derive(Debug)]
pub struct BeladyMinPolicy {
    capacity: usize,
    index: FutureIndex,
    /// Logical time: position of the next access in the trace.
    clock: usize,
    residents: HashMap<PageId, Resident>,
    /// Resident keys; the last one is the eviction candidate.
    order: BTreeSet<EvictionKey>,
    /// Insertions so far, used as the insertion sequence number.
    inserted: u64,
}

impl BeladyMinPolicy {
    /// Logical time of the next access.
    #[inline]
    pub const fn clock(&self) -> usize {
        self.clock
    }

    /// Next use of `page_id` as seen from the current clock.
    pub fn next_use(&self, page_id: PageId) -> NextUse {
        self.index.next_use(page_id)
    }

    fn evict(&mut self) -> Option<Page> {
        let key = self.order.pop_last()?;
        self.residents.remove(&key.page_id).map(|r| r.page)
    }

    fn insert(&mut self, page: Page) {
        let key = EvictionKey {
            next_use: self.index.next_use(page.id),
            age: Reverse(self.inserted),
            page_id: page.id,
        };
        self.inserted += 1;
        let _ = self.order.insert(key);
        let _ = self.residents.insert(page.id, Resident { page, key });
    }
}

impl ReplacementPolicy for BeladyMinPolicy {
    fn access(&mut self, page_id: PageId, is_write: bool) -> AccessOutcome {
        let now = self.clock;
        self.clock += 1;
        let _ = self.index.consume(page_id, now);

        if let Some(resident) = self.residents.get_mut(&page_id) {
            if is_write {
                resident.page.mark_dirty();
            }
            // Consuming this access moved the page's next use forward.
            let old = resident.key;
            resident.key.next_use = self.index.next_use(page_id);
            let _ = self.order.remove(&old);
            let _ = self.order.insert(resident.key);
            return AccessOutcome::hit();
        }

        let victim = if self.residents.len() >= self.capacity {
            self.evict()
        } else {
            None
        };
        self.insert(Page::new(page_id, is_write));
        AccessOutcome::miss(victim)
    }

    fn name(&self) -> &'static str {
        "Belady MIN (OPT)"
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.residents.len()
    }

    fn contains(&self, page_id: PageId) -> bool {
        self.residents.contains_key(&page_id)
    }

    fn residents(&self) -> Vec<Page> {
        let mut residents: Vec<&Resident> = self.residents.values().collect();
        residents.sort_unstable_by_key(|r| r.key.age.0);
        residents.into_iter().map(|r| r.page).collect()
    }
}
