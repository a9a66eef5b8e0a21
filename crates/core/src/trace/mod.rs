//! Canonical access traces.
//!
//! A trace is the ordered sequence of `(page id, write flag)` accesses in
//! logical time order; position in the sequence is the access's timestamp.
//! This module provides:
//! 1. **Types:** [`Access`] and the in-memory [`Trace`].
//! 2. **Reader:** Loading the canonical two-column CSV format.
//! 3. **Summary:** Working-set and read/write statistics used to size caches.

/// Canonical CSV trace reader.
pub mod reader;

/// Descriptive trace statistics.
pub mod summary;

use std::ops::Index;

use crate::common::{AccessKind, PageId};

pub use reader::{TraceLoad, read_trace, read_trace_file};
pub use summary::TraceSummary;

/// One element of a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Access {
    /// Accessed page.
    pub page_id: PageId,
    /// Whether the access writes the page.
    pub is_write: bool,
}

impl Access {
    /// Creates a read access.
    #[inline]
    pub const fn read(page_id: PageId) -> Self {
        Self {
            page_id,
            is_write: false,
        }
    }

    /// Creates a write access.
    #[inline]
    pub const fn write(page_id: PageId) -> Self {
        Self {
            page_id,
            is_write: true,
        }
    }

    /// Read/write classification of this access.
    #[inline]
    pub const fn kind(&self) -> AccessKind {
        AccessKind::from_write(self.is_write)
    }
}

impl From<(PageId, bool)> for Access {
    fn from((page_id, is_write): (PageId, bool)) -> Self {
        Self { page_id, is_write }
    }
}

/// A fully materialized trace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    accesses: Vec<Access>,
}

impl Trace {
    /// Wraps an ordered list of accesses.
    pub const fn new(accesses: Vec<Access>) -> Self {
        Self { accesses }
    }

    /// Number of accesses.
    #[inline]
    pub const fn len(&self) -> usize {
        self.accesses.len()
    }

    /// Returns `true` if the trace has no accesses.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.accesses.is_empty()
    }

    /// Iterates the accesses in logical time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Access> {
        self.accesses.iter()
    }

    /// The accesses as a slice.
    pub fn as_slice(&self) -> &[Access] {
        &self.accesses
    }
}

impl Index<usize> for Trace {
    type Output = Access;

    fn index(&self, index: usize) -> &Access {
        &self.accesses[index]
    }
}

impl FromIterator<Access> for Trace {
    fn from_iter<I: IntoIterator<Item = Access>>(iter: I) -> Self {
        Self {
            accesses: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(PageId, bool)> for Trace {
    fn from_iter<I: IntoIterator<Item = (PageId, bool)>>(iter: I) -> Self {
        iter.into_iter().map(Access::from).collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Access;
    type IntoIter = std::slice::Iter<'a, Access>;

    fn into_iter(self) -> Self::IntoIter {
        self.accesses.iter()
    }
}
