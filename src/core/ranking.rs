//! Weight ranking ahead of packing

use crate::core::traits::Weighted;

/// Returns a copy of `items` ordered heaviest first.
///
/// The sort is stable: items of equal weight keep their input order, which
/// keeps container assignments reproducible. Weights are compared with IEEE
/// total ordering so the ranking never fails, even on NaN; `-0.0` and `0.0`
/// count as the same weight.
pub fn rank<T: Weighted + Clone>(items: &[T]) -> Vec<T> {
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| sort_key(b).total_cmp(&sort_key(a)));
    ranked
}

// Adding 0.0 turns -0.0 into 0.0, which total_cmp would otherwise order apart
fn sort_key<T: Weighted>(item: &T) -> f64 {
    item.weight() + 0.0
}
