//! Simulator: owns one policy instance and the statistics of its replay.
//!
//! The harness calls the policy exactly once per access, folds the returned
//! hit/victim outcome into [`RunStats`], and never touches the policy's
//! internal state. Replay is single-threaded and strictly in trace order;
//! independent simulators (e.g. one per capacity) share nothing.

use std::time::Instant;

use tracing::{info, trace};

use super::log::AccessLog;
use crate::common::{Page, Result};
use crate::config::PolicyConfig;
use crate::policy::{ReplacementPolicy, build_policy};
use crate::stats::{RunReport, RunStats};
use crate::trace::{Access, Trace};

/// Outcome of one replayed access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessEvent {
    /// Logical time (position in the trace).
    pub time: u64,
    /// The access replayed.
    pub access: Access,
    /// Whether the page was resident.
    pub hit: bool,
    /// Page evicted by this access, if any.
    pub victim: Option<Page>,
    /// Cost charged for this access.
    pub cost: u64,
}

/// Top-level replay harness: one policy plus its running statistics.
#[derive(Debug)]
pub struct Simulator {
    policy: Box<dyn ReplacementPolicy>,
    stats: RunStats,
    log: Option<AccessLog>,
}

impl Simulator {
    /// Creates a simulator around an already constructed policy.
    pub fn new(policy: Box<dyn ReplacementPolicy>) -> Self {
        Self {
            policy,
            stats: RunStats::default(),
            log: None,
        }
    }

    /// Builds the configured policy for `trace` and wraps it.
    ///
    /// Policies that need the future (Belady MIN) receive the full trace
    /// here, before the first access is replayed.
    ///
    /// # Errors
    ///
    /// Propagates policy construction errors.
    pub fn for_trace(config: &PolicyConfig, capacity: usize, trace: &Trace) -> Result<Self> {
        Ok(Self::new(build_policy(config, capacity, trace)?))
    }

    /// Enables the per-access log.
    #[must_use]
    pub fn with_log(mut self, log: AccessLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Replays a single access.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the per-access log cannot be written.
    pub fn step(&mut self, access: Access) -> Result<AccessEvent> {
        let time = self.stats.accesses;
        let outcome = self.policy.access(access.page_id, access.is_write);
        let cost = self.stats.record(&outcome);
        let event = AccessEvent {
            time,
            access,
            hit: outcome.hit,
            victim: outcome.victim,
            cost,
        };
        trace!(
            time,
            page = access.page_id,
            write = access.is_write,
            hit = event.hit,
            victim = ?event.victim,
            cost,
            "access"
        );
        if let Some(log) = self.log.as_mut() {
            log.record(&event, &*self.policy)?;
        }
        Ok(event)
    }

    /// Replays every access of `trace` in order and returns the final statistics.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the per-access log cannot be written.
    pub fn run(&mut self, trace: &Trace) -> Result<RunStats> {
        let started = Instant::now();
        for &access in trace {
            let _ = self.step(access)?;
        }
        if let Some(log) = self.log.as_mut() {
            log.flush()?;
        }
        info!(
            policy = self.policy.name(),
            capacity = self.policy.capacity(),
            accesses = self.stats.accesses,
            misses = self.stats.misses,
            total_cost = self.stats.total_cost,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "replay finished"
        );
        Ok(self.stats)
    }

    /// Statistics accumulated so far.
    #[inline]
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Read-only view of the policy.
    pub fn policy(&self) -> &dyn ReplacementPolicy {
        &*self.policy
    }

    /// Finalizes the run into a report.
    pub fn report(&self) -> RunReport {
        RunReport::new(self.policy.name(), self.policy.capacity(), self.stats)
    }
}
