//! Recommendation Engine
//!
//! Evaluates the ordered agronomic rule table against a SoilClimateContext and
//! aggregates every matching rule into a bounded, deduplicated result. The
//! engine only depends on the context type, so contexts may come from text
//! extraction or be built directly.
//!
//! ## Architecture
//! - `rules.rs` - Typed conditions and the fixed nine-rule table
//! - `result.rs` - RecommendationResult, Advice, limits and fallback
//! - `recommend.rs` - Match-all-then-aggregate, plus parallel batch variants

pub mod rules;
pub mod result;
pub mod recommend;

// Re-export public API
pub use rules::{Condition, Rule, RULES};
pub use result::{Advice, RecommendationResult, MAX_CROPS, MAX_TIPS};
pub use recommend::{
    advise,
    advise_batch,
    advise_context,
    aggregate,
    matching_rules,
    recommend,
    recommend_batch,
    recommend_with,
};
