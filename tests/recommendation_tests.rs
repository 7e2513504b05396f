//! End-to-end recommendation tests
//!
//! Drives free text through extraction and the rule engine, checking the
//! documented scenarios plus determinism, bounding and uniqueness properties.

use approx::assert_relative_eq;
use crop_advisor::engine::{matching_rules, MAX_CROPS, MAX_TIPS};
use crop_advisor::{
    advise, extract, recommend, ClimateZone, RainfallBand, RecommendationResult, SoilClimateContext,
    SoilTexture, QUICK_QUESTIONS, RULES,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn rule_names(text: &str) -> Vec<&'static str> {
    matching_rules(&RULES, &extract(text))
        .iter()
        .map(|r| r.name)
        .collect()
}

fn assert_unique(items: &[String]) {
    let unique: HashSet<&String> = items.iter().collect();
    assert_eq!(unique.len(), items.len(), "duplicates in {:?}", items);
}

// =========================================================================
// Section 1: Documented scenarios
// =========================================================================

#[test]
fn test_sandy_low_rainfall_scenario() {
    let ctx = extract(QUICK_QUESTIONS[0]);
    assert_eq!(
        ctx,
        SoilClimateContext {
            texture: Some(SoilTexture::Sandy),
            rainfall: Some(RainfallBand::Low),
            ..Default::default()
        }
    );

    let result = recommend(&ctx);
    assert_eq!(&result.crops[..4], &["Pearl millet", "Sorghum", "Groundnut", "Sesame"]);
    assert_eq!(rule_names(QUICK_QUESTIONS[0]), vec!["sandy_low_rainfall"]);
}

#[test]
fn test_clay_alkaline_waterlogged_scenario() {
    let text = "clay soil and high rainfall, pH 7.9, waterlogged";
    assert_eq!(
        rule_names(text),
        vec!["clay_high_rainfall", "alkaline_ph", "waterlogged"]
    );

    let result = recommend(&extract(text));
    assert_eq!(result.crops.len(), MAX_CROPS);
    assert_eq!(
        result.crops,
        vec!["Paddy/Rice", "Jute", "Taro", "Barley", "Mustard", "Safflower", "Cotton", "Rice"]
    );

    let expected_reason = [RULES[1].rationale, RULES[4].rationale, RULES[6].rationale].join(" ");
    assert_eq!(result.reason, expected_reason);
}

#[test]
fn test_loamy_quick_question() {
    let ctx = extract(QUICK_QUESTIONS[2]);
    assert_eq!(ctx.texture, Some(SoilTexture::Loam));
    assert_relative_eq!(ctx.ph.unwrap(), 6.5);

    let result = recommend(&ctx);
    assert_eq!(result.crops, vec!["Wheat", "Maize", "Tomato", "Okra", "Chickpea"]);
}

#[test]
fn test_texture_precedence() {
    assert_eq!(extract("sandy clay soil").texture, Some(SoilTexture::Sandy));
}

#[test]
fn test_arid_overlap_sets_two_fields() {
    let ctx = extract("arid farmland");
    assert_eq!(ctx.rainfall, Some(RainfallBand::Low));
    assert_eq!(ctx.climate, Some(ClimateZone::Arid));
    assert_eq!(rule_names("arid farmland"), vec!["arid_climate"]);
}

// =========================================================================
// Section 2: pH boundaries
// =========================================================================

#[test]
fn test_ph_boundaries() {
    let acidic = recommend(&extract("pH 5.9"));
    assert!(acidic.crops.iter().any(|c| c == "Potato"));

    assert!(!rule_names("pH 6.0").contains(&"acidic_ph"));
    assert!(recommend(&extract("pH 6.0")).is_fallback());

    assert!(!rule_names("pH 7.8").contains(&"alkaline_ph"));
    assert!(rule_names("pH 7.81").contains(&"alkaline_ph"));
}

// =========================================================================
// Section 3: Fallback
// =========================================================================

#[test]
fn test_fallback_trigger() {
    let result = recommend(&extract("hello there"));
    assert_eq!(result, RecommendationResult::fallback());
    assert_eq!(result.crops, vec!["Wheat", "Maize", "Chickpea", "Mustard"]);
    assert_eq!(
        result.tips,
        vec![
            "Test soil pH and organic carbon annually.",
            "Use mulching and timely irrigation scheduling.",
            "Rotate with legumes to improve soil health.",
        ]
    );
    assert!(!result.reason.is_empty());

    let advice = advise("hello there");
    assert!(advice.fallback);
    assert!(advice.matched_rules.is_empty());
}

// =========================================================================
// Section 4: Properties
// =========================================================================

fn texture_strategy() -> impl Strategy<Value = Option<SoilTexture>> {
    prop_oneof![
        Just(None),
        Just(Some(SoilTexture::Sandy)),
        Just(Some(SoilTexture::Clay)),
        Just(Some(SoilTexture::Loam)),
        Just(Some(SoilTexture::Silt)),
    ]
}

fn rainfall_strategy() -> impl Strategy<Value = Option<RainfallBand>> {
    prop_oneof![
        Just(None),
        Just(Some(RainfallBand::Low)),
        Just(Some(RainfallBand::Moderate)),
        Just(Some(RainfallBand::High)),
    ]
}

fn climate_strategy() -> impl Strategy<Value = Option<ClimateZone>> {
    prop_oneof![
        Just(None),
        Just(Some(ClimateZone::Arid)),
        Just(Some(ClimateZone::Tropical)),
        Just(Some(ClimateZone::Temperate)),
    ]
}

prop_compose! {
    fn context_strategy()(
        texture in texture_strategy(),
        rainfall in rainfall_strategy(),
        ph in proptest::option::of(3.0f64..10.0),
        climate in climate_strategy(),
        saline in any::<bool>(),
        waterlogged in any::<bool>(),
    ) -> SoilClimateContext {
        SoilClimateContext { texture, rainfall, ph, climate, saline, waterlogged }
    }
}

proptest! {
    #[test]
    fn prop_recommend_is_deterministic(text in ".{0,80}") {
        let first = recommend(&extract(&text));
        let second = recommend(&extract(&text));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_results_are_bounded_and_unique(ctx in context_strategy()) {
        let result = recommend(&ctx);

        prop_assert!(!result.crops.is_empty());
        prop_assert!(result.crops.len() <= MAX_CROPS);
        prop_assert!(result.tips.len() <= MAX_TIPS);
        prop_assert!(!result.reason.is_empty());
        assert_unique(&result.crops);
        assert_unique(&result.tips);

        if result.is_fallback() {
            prop_assert_eq!(result.crops.len(), 4);
        }
    }

    #[test]
    fn prop_reason_has_no_repeated_sentences(ctx in context_strategy()) {
        let result = recommend(&ctx);
        let matched = matching_rules(&RULES, &ctx);
        let mut seen = HashSet::new();
        for rule in matched.iter() {
            if seen.insert(rule.rationale) {
                prop_assert_eq!(result.reason.matches(rule.rationale).count(), 1);
            }
        }
    }

    #[test]
    fn prop_extract_is_total(text in "\\PC{0,120}") {
        let ctx = extract(&text);
        // Any combination is acceptable; only check the flags mirror keywords
        let lower = text.to_lowercase();
        prop_assert_eq!(ctx.saline, lower.contains("saline") || lower.contains("salty"));
    }
}
