//! Common types and constants shared by every part of the simulator.
//!
//! This module provides the small building blocks the policies, the trace
//! layer and the replay harness agree on. It includes:
//! 1. **Pages:** Page identity and the dirty flag carried by a resident page.
//! 2. **Access Kinds:** Read/write classification of a trace access.
//! 3. **Constants:** The I/O cost model and sizing defaults.
//! 4. **Error Handling:** The crate-wide error enum and `Result` alias.

/// Cost model and sizing constants.
pub mod constants;

/// Access kind definitions.
pub mod data;

/// Error types.
pub mod error;

/// Page identity and dirty state.
pub mod page;

pub use constants::{FLUSH_COST, MISS_COST};
pub use data::AccessKind;
pub use error::{Result, SimError};
pub use page::{Page, PageId};
