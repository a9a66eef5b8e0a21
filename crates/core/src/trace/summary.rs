//! Trace Summary.
//!
//! Descriptive statistics over a canonical trace, computed without replaying
//! any policy: access counts, read/write split, working-set size and an
//! estimated memory footprint. Callers use the working-set size to pick
//! cache capacities as fractions of it before constructing a policy.

use std::collections::HashSet;

use serde::Serialize;

use super::Trace;
use crate::common::PageId;

/// Capacity-sizing statistics for a trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    /// Total number of accesses.
    pub total: u64,
    /// Instruction reads. Canonical traces carry data accesses only, so this is always zero.
    pub instruction_reads: u64,
    /// Data read accesses.
    pub reads: u64,
    /// Data write accesses.
    pub writes: u64,
    /// Number of distinct page ids.
    pub working_set_size: usize,
    /// Page size used for the footprint estimate, in KiB.
    pub page_size_kb: u64,
    /// Estimated memory footprint: `working_set_size * page_size`, in bytes.
    pub footprint_bytes: u64,
}

impl TraceSummary {
    /// Scans a trace once and summarizes it.
    pub fn from_trace(trace: &Trace, page_size_kb: u64) -> Self {
        let mut pages: HashSet<PageId> = HashSet::new();
        let mut writes = 0u64;
        for access in trace {
            let _ = pages.insert(access.page_id);
            if access.is_write {
                writes += 1;
            }
        }
        let total = trace.len() as u64;
        let working_set_size = pages.len();
        Self {
            total,
            instruction_reads: 0,
            reads: total - writes,
            writes,
            working_set_size,
            page_size_kb,
            footprint_bytes: working_set_size as u64 * page_size_kb * 1024,
        }
    }

    /// Footprint in MiB.
    pub fn mem_used_mb(&self) -> f64 {
        (self.working_set_size as f64 * self.page_size_kb as f64) / 1024.0
    }

    /// Share of reads, in percent of all accesses.
    pub fn read_percent(&self) -> f64 {
        percent(self.reads, self.total)
    }

    /// Share of writes, in percent of all accesses.
    pub fn write_percent(&self) -> f64 {
        percent(self.writes, self.total)
    }

    /// Prints the summary table to stdout.
    pub fn print(&self) {
        println!("==========================================================");
        println!("TRACE SUMMARY");
        println!("==========================================================");
        println!("mem_used                 {:.2} MB", self.mem_used_mb());
        println!("total                    {}", self.total);
        println!("instruction_reads        {}", self.instruction_reads);
        println!(
            "data_reads               {} ({:.1}%)",
            self.reads,
            self.read_percent()
        );
        println!(
            "data_writes              {} ({:.1}%)",
            self.writes,
            self.write_percent()
        );
        println!("working_set              {} pages", self.working_set_size);
        println!("==========================================================");
    }
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
