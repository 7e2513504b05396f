//! Shared helpers
//!
//! - Dedup: order-preserving, optionally capped deduplication

pub mod dedup;

pub use dedup::dedup_first_occurrence;
