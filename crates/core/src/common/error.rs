//! Simulator error definitions.
//!
//! This module defines the error type shared by the whole crate. It covers:
//! 1. **Configuration Errors:** Invalid capacities and out-of-range tuning parameters.
//! 2. **Precondition Errors:** Building the offline-optimal policy without its future trace.
//! 3. **Input Errors:** Unreadable trace files, bad headers and unparsable configuration.
//!
//! Individual malformed trace rows are not errors; the reader skips and counts them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by policy construction, configuration and trace loading.
#[derive(Debug, Error)]
pub enum SimError {
    /// A policy was constructed with a capacity below one page.
    #[error("invalid cache capacity {capacity}: capacity must be at least 1")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },

    /// The offline-optimal policy was built without the full trace it needs.
    #[error("missing future trace: Belady MIN requires the full trace before the first access")]
    MissingFutureTrace,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The trace file could not be opened.
    #[error("could not open trace '{}': {source}", path.display())]
    TraceOpen {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The trace header lacks one of the canonical columns.
    #[error("trace header must contain 'page_id' and 'is_write' columns, found {found:?}")]
    TraceHeader {
        /// Header fields that were found.
        found: Vec<String>,
    },

    /// The CSV reader failed for a reason other than a malformed row.
    #[error("trace read failed: {0}")]
    Csv(#[from] csv::Error),

    /// A JSON configuration document could not be parsed.
    #[error("could not parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Writing the per-access log or a report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimError>;
