//! Page replacement simulator library.
//!
//! This crate replays address-access traces against page replacement policies
//! for flash-backed memory caches and measures miss rate and I/O cost:
//! 1. **Policies:** LRU, Clean-First LRU with an adaptive window, and Belady's offline-optimal MIN.
//! 2. **Traces:** Canonical `page_id,is_write` trace loading and working-set summaries.
//! 3. **Simulation:** The replay harness, the 1:8 read/flush cost model and run statistics.
//! 4. **Configuration:** JSON-deserializable run configuration with defaults.
//!
//! # Example
//!
//! ```
//! use pagesim_core::policy::LruPolicy;
//! use pagesim_core::trace::Trace;
//! use pagesim_core::Simulator;
//!
//! let trace: Trace = [(1, false), (2, false), (1, false), (3, true)].into_iter().collect();
//! let mut sim = Simulator::new(Box::new(LruPolicy::new(2).unwrap()));
//! let stats = sim.run(&trace).unwrap();
//! assert_eq!(stats.misses, 3);
//! assert_eq!(stats.total_cost, 3);
//! ```

/// Common types and constants (pages, access kinds, cost model, errors).
pub mod common;
/// Run configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// Replacement policies (LRU, CFLRU, Belady MIN) and their shared contract.
pub mod policy;
/// Trace replay harness and per-access log.
pub mod sim;
/// Replay statistics collection and reporting.
pub mod stats;
/// Canonical traces, trace loading and trace summaries.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Shared policy contract.
pub use crate::policy::ReplacementPolicy;
/// Replay harness; construct with `Simulator::new` or `Simulator::for_trace`.
pub use crate::sim::Simulator;
/// Statistics of a replay.
pub use crate::stats::RunStats;
