//! Global Simulator Constants.
//!
//! This module defines the constants of the cost model. It includes:
//! 1. **I/O Costs:** The relative cost of a read miss and of flushing a dirty victim.
//! 2. **Sizing Defaults:** Page size and lower capacity bound used when sizing runs.

/// Cost charged for every miss (one page read from flash).
pub const MISS_COST: u64 = 1;

/// Cost charged when a dirty victim is flushed back to flash.
///
/// Flash writes are modelled as eight times as expensive as reads.
pub const FLUSH_COST: u64 = 8;

/// Default page size in KiB used for footprint estimates.
pub const DEFAULT_PAGE_SIZE_KB: u64 = 4;

/// Smallest capacity produced when sizing a cache from a working-set ratio.
pub const DEFAULT_MIN_CAPACITY: usize = 5;
