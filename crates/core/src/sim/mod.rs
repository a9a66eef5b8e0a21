//! Trace replay.
//!
//! Provides the harness that feeds a trace through a replacement policy one
//! access at a time and accounts the resulting I/O cost, plus the optional
//! per-access log.

/// Per-access log writer.
pub mod log;

/// The replay harness.
pub mod simulator;

pub use log::AccessLog;
pub use simulator::{AccessEvent, Simulator};
