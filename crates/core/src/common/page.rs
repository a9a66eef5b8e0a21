//! Cached page entity.
//!
//! A [`Page`] is created when its id first enters a cache on a miss, has its
//! dirty flag raised in place by a write hit, and is handed back to the
//! caller by value when it is evicted.

use std::fmt;

use serde::Serialize;

/// Page identifier as it appears in a canonical trace.
pub type PageId = u64;

/// A resident page: identity plus dirty flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Page {
    /// Page identifier.
    pub id: PageId,
    /// Set once the page has been written since it was loaded.
    pub dirty: bool,
}

impl Page {
    /// Creates a page as loaded by a miss. A write miss loads the page dirty.
    #[inline]
    pub const fn new(id: PageId, dirty: bool) -> Self {
        Self { id, dirty }
    }

    /// Raises the dirty flag. The flag is never cleared while resident.
    #[inline]
    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({}, Dirty={})", self.id, self.dirty)
    }
}
