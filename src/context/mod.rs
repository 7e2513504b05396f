//! Context Extraction
//!
//! Turns a short free-text description of farm conditions
//! ("sandy soil with low rainfall, pH 6.5") into a typed fact set.
//!
//! ## Architecture
//! - `types.rs` - SoilClimateContext and its field enums
//! - `extractor.rs` - Independent keyword passes, one per field

pub mod types;
pub mod extractor;

// Re-export public API
pub use types::{SoilClimateContext, SoilTexture, RainfallBand, ClimateZone};
pub use extractor::extract;
