//! Per-access replay log.
//!
//! Writes one block per access:
//!
//! ```text
//! [Write 5]: MISS. Evicted: Page(3, Dirty=true)
//!    Current Cache: [Page(4, Dirty=false), Page(5, Dirty=true)]
//! ------------------------------
//! ```
//!
//! The cache contents line is only written for small caches.

use std::fmt;
use std::io::{self, Write};

use super::simulator::AccessEvent;
use crate::common::Page;
use crate::policy::ReplacementPolicy;

/// Destination and formatting options for the per-access log.
pub struct AccessLog {
    out: Box<dyn Write + Send>,
    show_cache_limit: usize,
}

impl AccessLog {
    /// Creates a log writing to `out`. The resident pages are listed after
    /// each access while the cache capacity is at most `show_cache_limit`.
    pub fn new(out: Box<dyn Write + Send>, show_cache_limit: usize) -> Self {
        Self {
            out,
            show_cache_limit,
        }
    }

    /// Log on stdout.
    pub fn stdout(show_cache_limit: usize) -> Self {
        Self::new(Box::new(io::stdout()), show_cache_limit)
    }

    /// Writes the block for one access.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn record(&mut self, event: &AccessEvent, policy: &dyn ReplacementPolicy) -> io::Result<()> {
        let status = if event.hit { "HIT" } else { "MISS" };
        match event.victim {
            Some(victim) => writeln!(
                self.out,
                "[{} {}]: {status}. Evicted: {victim}",
                event.access.kind(),
                event.access.page_id
            )?,
            None => writeln!(
                self.out,
                "[{} {}]: {status}. No Eviction",
                event.access.kind(),
                event.access.page_id
            )?,
        }
        if policy.capacity() <= self.show_cache_limit {
            writeln!(self.out, "   Current Cache: {}", PageList(&policy.residents()))?;
        }
        writeln!(self.out, "{}", "-".repeat(30))
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl fmt::Debug for AccessLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessLog")
            .field("show_cache_limit", &self.show_cache_limit)
            .finish_non_exhaustive()
    }
}

struct PageList<'a>(&'a [Page]);

impl fmt::Display for PageList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, page) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{page}")?;
        }
        write!(f, "]")
    }
}
