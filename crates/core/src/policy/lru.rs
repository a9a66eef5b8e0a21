//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the page that has not been accessed for the longest
//! time. Both hits and miss-inserts move the page to the most recently used
//! end of the recency list; the victim is always the page at the other end.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `access()` (hit or miss): O(1)
//! - **Space Complexity:** O(C) where C is the capacity
//! - **Best Case:** Workloads with strong temporal locality
//! - **Worst Case:** Cyclic scans larger than the capacity (thrashing)

use super::recency::RecencyList;
use super::{AccessOutcome, ReplacementPolicy, check_capacity};
use crate::common::{Page, PageId, Result};

/// LRU Policy state.
#[derive(Debug)]
pub struct LruPolicy {
    capacity: usize,
    /// Resident pages, head is LRU, tail is MRU.
    pages: RecencyList,
}

impl LruPolicy {
    /// Creates an empty LRU cache.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident pages.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCapacity`](crate::common::SimError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            capacity,
            pages: RecencyList::with_capacity(capacity),
        })
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Hits move the page to the MRU position; misses at capacity evict the
    /// page at the LRU position.
    fn access(&mut self, page_id: PageId, is_write: bool) -> AccessOutcome {
        if let Some(page) = self.pages.touch(page_id) {
            if is_write {
                page.mark_dirty();
            }
            return AccessOutcome::hit();
        }

        let victim = if self.pages.len() >= self.capacity {
            self.pages.pop_front()
        } else {
            None
        };
        self.pages.push_back(Page::new(page_id, is_write));
        AccessOutcome::miss(victim)
    }

    fn name(&self) -> &'static str {
        "Standard LRU"
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
