//! Future-Access Index.
//!
//! Maps every page id of a trace to the queue of trace positions at which it
//! is accessed, in increasing order. The index is built in one pass and then
//! consumed front to back as logical time advances: at time `t`, the head of
//! a page's queue is `t` only during that page's own access at `t`; otherwise
//! it is the page's next use, and an empty queue means the page is never
//! accessed again.

use std::collections::{HashMap, VecDeque};

use crate::common::PageId;
use crate::trace::Trace;

/// Next use of a page.
///
/// Ordered so that later uses compare greater and [`NextUse::Never`] is
/// greater than every position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NextUse {
    /// Accessed again at this trace position.
    At(usize),
    /// Not accessed again.
    Never,
}

/// Per-page queues of future trace positions.
#[derive(Clone, Debug, Default)]
pub struct FutureIndex {
    positions: HashMap<PageId, VecDeque<usize>>,
}

impl FutureIndex {
    /// Builds the index in a single pass over the trace.
    pub fn build(trace: &Trace) -> Self {
        let mut positions: HashMap<PageId, VecDeque<usize>> = HashMap::new();
        for (t, access) in trace.iter().enumerate() {
            positions.entry(access.page_id).or_default().push_back(t);
        }
        Self { positions }
    }

    /// Consumes the occurrence of `page_id` at time `t`.
    ///
    /// # Returns
    ///
    /// `true` if the head of the page's queue was `t` and has been removed.
    pub fn consume(&mut self, page_id: PageId, t: usize) -> bool {
        match self.positions.get_mut(&page_id) {
            Some(queue) if queue.front() == Some(&t) => queue.pop_front().is_some(),
            _ => false,
        }
    }

    /// Next use of `page_id` after the consumed occurrences.
    pub fn next_use(&self, page_id: PageId) -> NextUse {
        self.positions
            .get(&page_id)
            .and_then(VecDeque::front)
            .map_or(NextUse::Never, |&t| NextUse::At(t))
    }

    /// Number of occurrences of `page_id` not yet consumed.
    pub fn pending(&self, page_id: PageId) -> usize {
        self.positions.get(&page_id).map_or(0, VecDeque::len)
    }

    /// Number of distinct pages in the indexed trace.
    pub fn pages(&self) -> usize {
        self.positions.len()
    }
}
