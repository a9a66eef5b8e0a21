//! Replacement policy tests.

/// Belady MIN construction, eviction order and optimality.
pub mod belady;



/// Plain LRU ordering and eviction.
pub mod lru;
