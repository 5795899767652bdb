//! Heuristic estimators over tube states.
//!
//! Two independent estimators, neither admissible:
//!
//! - h1 ([`foreign_layer_count`]): a cheap monotone proxy for "layers that
//!   must eventually move".
//! - h2 ([`relabel::swap_estimate`]): the multi-phase label/swap
//!   estimator; a best-effort ranking signal, considerably more expensive.

pub mod relabel;

use poursort_kernel::state::TubeStateV1;
use poursort_search::strategy::HeuristicId;

/// Evaluate the selected heuristic.
#[must_use]
pub fn evaluate(state: &TubeStateV1, id: HeuristicId) -> i64 {
    match id {
        HeuristicId::H1 => foreign_layer_count(state),
        HeuristicId::H2 => relabel::swap_estimate(state),
    }
}

/// h1: per non-empty bottle, scan from the top pointer toward the bottom
/// and count the first layer differing from the bottom slot's color plus
/// every layer after it in scan order; sum over bottles.
///
/// Layers below the first foreign one count even when they match the
/// bottom color again — the estimator charges the whole stretch, not just
/// the strangers.
#[must_use]
pub fn foreign_layer_count(state: &TubeStateV1) -> i64 {
    let mut total = 0;
    for bottle in 0..state.bottle_count() {
        let Some(top) = state.top_of(bottle) else {
            continue;
        };
        let bottom = state.layer(bottle, state.capacity() - 1);
        let mut counting = false;
        for slot in top..state.capacity() {
            if !counting && state.layer(bottle, slot) != bottom {
                counting = true;
            }
            if counting {
                total += 1;
            }
        }
    }
    total
}
