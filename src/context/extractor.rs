//! Free-text context extraction
//!
//! Keyword/substring matching over a lower-cased copy of the input (no NLP).
//! Each field is its own pass, so one message can set several fields at once.
//! Within a field, keyword families are tried in priority order and the first
//! family with any hit wins.

use super::types::{ClimateZone, RainfallBand, SoilClimateContext, SoilTexture};
use regex::Regex;
use std::sync::LazyLock;

/// "ph", optional whitespace, then an integer or decimal number
static PH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ph\s*([0-9]+(?:\.[0-9]+)?)").expect("valid pH pattern"));

// ============================================================================
// Keyword families (priority order matters)
// ============================================================================

/// "sandy clay" resolves to sandy because sandy is tried first.
const TEXTURE_KEYWORDS: &[(SoilTexture, &[&str])] = &[
    (SoilTexture::Sandy, &["sandy"]),
    (SoilTexture::Clay, &["clay"]),
    (SoilTexture::Loam, &["loam", "loamy"]),
    (SoilTexture::Silt, &["silt", "silty"]),
];

/// "arid" sits here and in CLIMATE_KEYWORDS; both fields get set from it.
const RAINFALL_KEYWORDS: &[(RainfallBand, &[&str])] = &[
    (RainfallBand::Low, &["low", "less", "dry", "arid"]),
    (RainfallBand::Moderate, &["moderate", "medium", "avg", "average"]),
    (RainfallBand::High, &["high", "heavy", "monsoon", "humid"]),
];

const CLIMATE_KEYWORDS: &[(ClimateZone, &[&str])] = &[
    (ClimateZone::Arid, &["arid", "desert"]),
    (ClimateZone::Tropical, &["tropic", "tropical"]),
    (ClimateZone::Temperate, &["temperate", "mild"]),
];

const SALINE_KEYWORDS: &[&str] = &["saline", "salty"];

const WATERLOGGED_KEYWORDS: &[&str] = &["waterlog", "water-logged", "water logged", "flood"];

// ============================================================================
// Extraction passes
// ============================================================================

/// Parse a free-text description into a context. Total: never fails.
pub fn extract(text: &str) -> SoilClimateContext {
    let normalized = text.to_lowercase();
    let t = normalized.as_str();

    let context = SoilClimateContext {
        texture: extract_texture(t),
        rainfall: extract_rainfall(t),
        ph: extract_ph(t),
        climate: extract_climate(t),
        saline: contains_any(t, SALINE_KEYWORDS),
        waterlogged: contains_any(t, WATERLOGGED_KEYWORDS),
    };

    tracing::debug!(?context, "extracted context");
    context
}

/// Expects lower-cased input.
pub fn extract_texture(t: &str) -> Option<SoilTexture> {
    first_family_match(t, TEXTURE_KEYWORDS)
}

/// Expects lower-cased input.
pub fn extract_rainfall(t: &str) -> Option<RainfallBand> {
    first_family_match(t, RAINFALL_KEYWORDS)
}

/// Expects lower-cased input.
pub fn extract_climate(t: &str) -> Option<ClimateZone> {
    first_family_match(t, CLIMATE_KEYWORDS)
}

/// First "ph <number>" occurrence, parsed as f64. Expects lower-cased input.
/// A number too large for f64 counts as no pH.
pub fn extract_ph(t: &str) -> Option<f64> {
    PH_PATTERN
        .captures(t)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|ph| ph.is_finite())
}

fn first_family_match<T: Copy>(t: &str, families: &[(T, &[&str])]) -> Option<T> {
    families
        .iter()
        .find(|(_, keywords)| contains_any(t, keywords))
        .map(|(value, _)| *value)
}

fn contains_any(t: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| t.contains(k))
}
