//! Order-preserving deduplication
//!
//! Keeps the first occurrence of each string and optionally stops once a
//! limit of unique items has been collected.

use rustc_hash::FxHashSet;

/// Deduplicate `items` by first occurrence, keeping at most `limit` entries
/// (`None` = no cap).
pub fn dedup_first_occurrence<'a, I>(items: I, limit: Option<usize>) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let cap = limit.unwrap_or(usize::MAX);
    let mut seen: FxHashSet<&'a str> = FxHashSet::default();
    let mut out = Vec::new();

    for item in items {
        if out.len() >= cap {
            break;
        }
        if seen.insert(item) {
            out.push(item.to_string());
        }
    }

    out
}
