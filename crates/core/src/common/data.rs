//! Access Kinds.
//!
//! Classifies a trace access as a read or a write. The kind decides whether a
//! hit dirties the resident page and whether a freshly loaded page starts dirty.

use std::fmt;

use serde::Serialize;

/// Kind of page access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessKind {
    /// Read access. Never changes the dirty flag of a resident page.
    Read,

    /// Write access. Leaves the accessed page dirty.
    Write,
}

impl AccessKind {
    /// Maps a write flag to the access kind.
    #[inline]
    pub const fn from_write(is_write: bool) -> Self {
        if is_write { Self::Write } else { Self::Read }
    }

    /// Returns `true` for [`AccessKind::Write`].
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "Read"),
            Self::Write => write!(f, "Write"),
        }
    }
}
