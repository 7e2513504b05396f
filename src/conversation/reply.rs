//! Reply text composition
//!
//! Renders a recommendation the way the chat assistant shows it:
//!
//! ```text
//! Based on your conditions (sandy soil, low rainfall) I suggest:
//! • Pearl millet, Sorghum, Groundnut, Sesame
//!
//! Why: Drought-tolerant crops ...
//!
//! Tips:
//! - Add organic matter (compost) to improve water holding.
//! ```

use crate::context::SoilClimateContext;
use crate::engine::RecommendationResult;

pub fn compose_reply(ctx: &SoilClimateContext, rec: &RecommendationResult) -> String {
    let opening = match ctx.detected_summary() {
        Some(summary) => format!("Based on your conditions ({}) I suggest:", summary),
        None => "Based on your conditions I suggest:".to_string(),
    };

    let mut lines = vec![
        opening,
        format!("• {}", rec.crops.join(", ")),
        String::new(),
        format!("Why: {}", rec.reason),
    ];

    if !rec.tips.is_empty() {
        lines.push(String::new());
        lines.push(format!("Tips:\n- {}", rec.tips.join("\n- ")));
    }

    lines.join("\n")
}
