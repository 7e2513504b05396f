//! Recommendation output types and the fallback default

use crate::context::SoilClimateContext;
use serde::{Deserialize, Serialize};

/// Maximum number of crops in a result
pub const MAX_CROPS: usize = 8;

/// Maximum number of tips in a result
pub const MAX_TIPS: usize = 5;

pub const FALLBACK_CROPS: &[&str] = &["Wheat", "Maize", "Chickpea", "Mustard"];

pub const FALLBACK_REASON: &str = "Based on typical conditions, these are generally adaptable crops. \
Provide soil texture, rainfall and pH for a sharper match.";

pub const FALLBACK_TIPS: &[&str] = &[
    "Test soil pH and organic carbon annually.",
    "Use mulching and timely irrigation scheduling.",
    "Rotate with legumes to improve soil health.",
];

/// Aggregated crop suggestions for one context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Unique, rule order, at most MAX_CROPS
    pub crops: Vec<String>,
    /// Unique rationale sentences joined by a single space
    pub reason: String,
    /// Unique, rule order, at most MAX_TIPS
    pub tips: Vec<String>,
}

impl RecommendationResult {
    /// The fixed default returned when no rule matches
    pub fn fallback() -> Self {
        Self {
            crops: FALLBACK_CROPS.iter().map(|c| c.to_string()).collect(),
            reason: FALLBACK_REASON.to_string(),
            tips: FALLBACK_TIPS.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

/// Full pipeline output for one message: what was detected, which rules
/// fired, and the resulting recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub context: SoilClimateContext,
    /// Names of matched rules in table order (empty on fallback)
    pub matched_rules: Vec<String>,
    pub fallback: bool,
    pub recommendation: RecommendationResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let fb = RecommendationResult::fallback();
        assert_eq!(fb.crops, vec!["Wheat", "Maize", "Chickpea", "Mustard"]);
        assert_eq!(fb.tips.len(), 3);
        assert!(fb.reason.contains("soil texture, rainfall and pH"));
        assert!(fb.is_fallback());
    }
}
