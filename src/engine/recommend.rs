//! Match-all-then-aggregate recommendation
//!
//! 1. Every rule is evaluated (no short-circuit).
//! 2. Matching rules contribute crops, rationale and tips in table order.
//! 3. Each list is deduplicated by first occurrence; crops and tips are capped.
//! 4. No match at all yields the fixed fallback.

use super::result::{Advice, RecommendationResult, MAX_CROPS, MAX_TIPS};
use super::rules::{Rule, RULES};
use crate::context::{extract, SoilClimateContext};
use crate::utils::dedup_first_occurrence;
use rayon::prelude::*;
use smallvec::SmallVec;

/// Rules whose condition holds, in table order
pub type MatchedRules<'r> = SmallVec<[&'r Rule; 9]>;

/// Evaluate every rule in `rules` against the context.
pub fn matching_rules<'r>(rules: &'r [Rule], ctx: &SoilClimateContext) -> MatchedRules<'r> {
    rules.iter().filter(|rule| rule.matches(ctx)).collect()
}

/// Recommend crops using the built-in rule table. Pure and total.
pub fn recommend(ctx: &SoilClimateContext) -> RecommendationResult {
    recommend_with(&RULES, ctx)
}

/// Recommend crops using an arbitrary ordered rule slice.
pub fn recommend_with(rules: &[Rule], ctx: &SoilClimateContext) -> RecommendationResult {
    aggregate(&matching_rules(rules, ctx))
}

/// Aggregate already-matched rules into a result (fallback when empty).
pub fn aggregate(matched: &[&Rule]) -> RecommendationResult {
    let crops = dedup_first_occurrence(
        matched.iter().flat_map(|r| r.crops.iter().copied()),
        Some(MAX_CROPS),
    );

    if crops.is_empty() {
        tracing::debug!("no rule matched, using fallback recommendation");
        return RecommendationResult::fallback();
    }

    let reasons = dedup_first_occurrence(matched.iter().map(|r| r.rationale), None);
    let tips = dedup_first_occurrence(
        matched.iter().flat_map(|r| r.tips.iter().copied()),
        Some(MAX_TIPS),
    );

    RecommendationResult {
        crops,
        reason: reasons.join(" "),
        tips,
    }
}

/// Run the whole pipeline on one message: extract, match, aggregate.
pub fn advise(text: &str) -> Advice {
    advise_context(extract(text))
}

/// Same as [`advise`] for a context obtained elsewhere (e.g. a form).
pub fn advise_context(context: SoilClimateContext) -> Advice {
    let matched = matching_rules(&RULES, &context);
    let names: Vec<String> = matched.iter().map(|r| r.name.to_string()).collect();
    tracing::debug!(rules = ?names, "matched rules");

    let recommendation = aggregate(&matched);
    let fallback = matched.iter().all(|r| r.crops.is_empty());

    Advice {
        context,
        matched_rules: names,
        fallback,
        recommendation,
    }
}

/// Recommend for many contexts in parallel. Output order follows input order.
pub fn recommend_batch(contexts: &[SoilClimateContext]) -> Vec<RecommendationResult> {
    contexts.par_iter().map(recommend).collect()
}

/// Advise on many messages in parallel. Output order follows input order.
pub fn advise_batch<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<Advice> {
    texts.par_iter().map(|t| advise(t.as_ref())).collect()
}
