//! Agronomic Rule Table
//!
//! Nine fixed rules, each a typed condition plus the crops, rationale and
//! tips it contributes. Declaration order is aggregation order: every
//! matching rule contributes, earlier rules win ties in deduplication.

use crate::context::{ClimateZone, RainfallBand, SoilClimateContext, SoilTexture};

/// pH strictly below this counts as acidic
pub const ACIDIC_PH_THRESHOLD: f64 = 6.0;

/// pH strictly above this counts as alkaline
pub const ALKALINE_PH_THRESHOLD: f64 = 7.8;

/// Predicate over a context
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// Texture and rainfall band both equal
    TextureAndRainfall(SoilTexture, RainfallBand),
    Texture(SoilTexture),
    /// pH present and strictly below the bound
    PhBelow(f64),
    /// pH present and strictly above the bound
    PhAbove(f64),
    Saline,
    Waterlogged,
    Climate(ClimateZone),
}

impl Condition {
    pub fn matches(&self, ctx: &SoilClimateContext) -> bool {
        match *self {
            Condition::TextureAndRainfall(texture, rainfall) => {
                ctx.texture == Some(texture) && ctx.rainfall == Some(rainfall)
            }
            Condition::Texture(texture) => ctx.texture == Some(texture),
            Condition::PhBelow(bound) => ctx.ph.is_some_and(|ph| ph < bound),
            Condition::PhAbove(bound) => ctx.ph.is_some_and(|ph| ph > bound),
            Condition::Saline => ctx.saline,
            Condition::Waterlogged => ctx.waterlogged,
            Condition::Climate(zone) => ctx.climate == Some(zone),
        }
    }
}

/// One rule table entry
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable identifier, used in logs and API output
    pub name: &'static str,
    pub condition: Condition,
    pub crops: &'static [&'static str],
    pub rationale: &'static str,
    pub tips: &'static [&'static str],
}

impl Rule {
    pub fn matches(&self, ctx: &SoilClimateContext) -> bool {
        self.condition.matches(ctx)
    }
}

// ============================================================================
// Rule Table
// ============================================================================

pub static RULES: [Rule; 9] = [
    Rule {
        name: "sandy_low_rainfall",
        condition: Condition::TextureAndRainfall(SoilTexture::Sandy, RainfallBand::Low),
        crops: &["Pearl millet", "Sorghum", "Groundnut", "Sesame"],
        rationale: "Drought-tolerant crops with deep roots perform well in sandy, low-moisture soils.",
        tips: &[
            "Add organic matter (compost) to improve water holding.",
            "Adopt mulch to reduce evaporation.",
            "Irrigate with drip to save water.",
        ],
    },
    Rule {
        name: "clay_high_rainfall",
        condition: Condition::TextureAndRainfall(SoilTexture::Clay, RainfallBand::High),
        crops: &["Paddy/Rice", "Jute", "Taro"],
        rationale: "Clay soils with high rainfall retain water; paddy thrives in such conditions.",
        tips: &[
            "Create proper bunds and drainage channels.",
            "Avoid compaction; add gypsum/organic matter to improve structure.",
        ],
    },
    Rule {
        name: "loam",
        condition: Condition::Texture(SoilTexture::Loam),
        crops: &["Wheat", "Maize", "Tomato", "Okra", "Chickpea"],
        rationale: "Loam has balanced texture and fertility, so it supports diverse crops.",
        tips: &[
            "Rotate cereals with legumes for nitrogen balance.",
            "Maintain pH ~6.5-7.0 for nutrient availability.",
        ],
    },
    Rule {
        name: "acidic_ph",
        condition: Condition::PhBelow(ACIDIC_PH_THRESHOLD),
        crops: &["Potato", "Tea", "Pineapple", "Sweet potato"],
        rationale: "These crops tolerate slightly acidic soils.",
        tips: &[
            "Consider liming to raise pH gradually.",
            "Incorporate well-decomposed compost.",
        ],
    },
    Rule {
        name: "alkaline_ph",
        condition: Condition::PhAbove(ALKALINE_PH_THRESHOLD),
        crops: &["Barley", "Mustard", "Safflower", "Cotton"],
        rationale: "These crops are relatively tolerant to alkaline conditions.",
        tips: &[
            "Apply gypsum if sodicity is an issue.",
            "Add organic matter to buffer pH.",
        ],
    },
    Rule {
        name: "saline",
        condition: Condition::Saline,
        crops: &["Barley", "Quinoa", "Sugar beet", "Cotton"],
        rationale: "These have higher salt tolerance than most staples.",
        tips: &[
            "Flush salts with adequate drainage/irrigation.",
            "Use raised beds and mulches.",
        ],
    },
    Rule {
        name: "waterlogged",
        condition: Condition::Waterlogged,
        crops: &["Rice", "Taro", "Water chestnut"],
        rationale: "Adapted to standing water and saturated soils.",
        tips: &[
            "Install surface drains.",
            "Adopt alternate wetting and drying if growing paddy.",
        ],
    },
    Rule {
        name: "arid_climate",
        condition: Condition::Climate(ClimateZone::Arid),
        crops: &["Cumin", "Millets", "Dates", "Cluster bean"],
        rationale: "Heat/drought tolerant choices for arid climates.",
        tips: &["Windbreaks + drip irrigation are highly effective."],
    },
    Rule {
        name: "tropical_climate",
        condition: Condition::Climate(ClimateZone::Tropical),
        crops: &["Rice", "Banana", "Sugarcane", "Cassava"],
        rationale: "High heat and humidity suits these crops.",
        tips: &["Manage pests proactively; encourage beneficial insects."],
    },
];
