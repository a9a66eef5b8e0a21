//! Replay statistics collection and reporting.
//!
//! This module tracks the outcome of a replay. It provides:
//! 1. **Counters:** Accesses, hits, misses, clean and dirty evictions.
//! 2. **Cost:** Total I/O cost under the 1:8 read-miss to flash-write model.
//! 3. **Reports:** A text report on stdout and a serializable run record.

use serde::Serialize;

use crate::common::{FLUSH_COST, MISS_COST};
use crate::policy::AccessOutcome;

/// Replay statistics.
///
/// Every counter is monotonically non-decreasing during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Accesses replayed.
    pub accesses: u64,
    /// Accesses that found their page resident.
    pub hits: u64,
    /// Accesses that had to load their page.
    pub misses: u64,
    /// Victims that were clean.
    pub clean_evictions: u64,
    /// Victims that were dirty and had to be flushed (flash writes).
    pub dirty_evictions: u64,
    /// `misses * MISS_COST + dirty_evictions * FLUSH_COST`.
    pub total_cost: u64,
}

impl RunStats {
    /// Folds one access outcome into the counters.
    ///
    /// # Returns
    ///
    /// The cost charged for this access.
    pub fn record(&mut self, outcome: &AccessOutcome) -> u64 {
        self.accesses += 1;
        if outcome.hit {
            self.hits += 1;
            return 0;
        }

        self.misses += 1;
        let mut cost = MISS_COST;
        match outcome.victim {
            Some(victim) if victim.dirty => {
                self.dirty_evictions += 1;
                cost += FLUSH_COST;
            }
            Some(_) => self.clean_evictions += 1,
            None => {}
        }
        self.total_cost += cost;
        cost
    }

    /// Fraction of accesses that missed, `0.0` for an empty run.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that hit, `0.0` for an empty run.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Flash writes caused by the run; one per dirty eviction.
    #[inline]
    pub const fn flash_writes(&self) -> u64 {
        self.dirty_evictions
    }
}

/// Finalized statistics of one policy at one capacity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    /// Policy display name.
    pub policy: String,
    /// Cache capacity in pages.
    pub capacity: usize,
    /// Counters.
    #[serde(flatten)]
    pub stats: RunStats,
    /// Misses divided by accesses.
    pub miss_rate: f64,
}

impl RunReport {
    /// Bundles finished statistics with the run's identity.
    pub fn new(policy: impl Into<String>, capacity: usize, stats: RunStats) -> Self {
        Self {
            policy: policy.into(),
            capacity,
            stats,
            miss_rate: stats.miss_rate(),
        }
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("PAGE REPLACEMENT SIMULATION");
        println!("==========================================================");
        println!("algorithm                {}", self.policy);
        println!("capacity                 {} pages", self.capacity);
        println!("total_access             {}", self.stats.accesses);
        println!("hits                     {}", self.stats.hits);
        println!("misses                   {}", self.stats.misses);
        println!("miss_rate                {:.2}%", self.miss_rate * 100.0);
        println!("total_cost               {}", self.stats.total_cost);
        println!("flash_writes             {}", self.stats.flash_writes());
        println!("==========================================================");
    }
}
