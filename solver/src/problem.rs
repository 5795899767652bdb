//! `PourPuzzle`: the pour-sort domain bound to the search contract.

use poursort_kernel::pour::{self, PourOpV1};
use poursort_kernel::state::TubeStateV1;

use poursort_search::contract::SearchProblemV1;
use poursort_search::node::CandidateMoveV1;
use poursort_search::strategy::HeuristicId;

use crate::heuristics;

/// One solve invocation's problem: the initial state plus the pour
/// transition model.
pub struct PourPuzzle {
    initial: TubeStateV1,
}

impl PourPuzzle {
    /// Bind a problem to an initial state.
    #[must_use]
    pub fn new(initial: TubeStateV1) -> Self {
        Self { initial }
    }
}

impl SearchProblemV1 for PourPuzzle {
    fn initial_state(&self) -> &TubeStateV1 {
        &self.initial
    }

    /// Enumerate every ordered bottle pair, bottles ascending.
    ///
    /// Each pair is probed twice and an applicable pour is emitted twice;
    /// the frontier's fingerprint dedup admits only one child. The outer
    /// loops already cover both directions of every pair, so no legal
    /// move is lost.
    fn expand(&self, state: &TubeStateV1) -> Vec<CandidateMoveV1> {
        let mut candidates = Vec::new();

        for src in 0..state.bottle_count() {
            for dst in 0..state.bottle_count() {
                let op = PourOpV1::new(src, dst);

                if let Some(cost) = pour::pour_cost(state, op) {
                    candidates.push(CandidateMoveV1 { op, cost });
                }

                if let Some(cost) = pour::pour_cost(state, op) {
                    candidates.push(CandidateMoveV1 { op, cost });
                }
            }
        }

        candidates
    }

    fn apply(&self, state: &TubeStateV1, op: PourOpV1) -> TubeStateV1 {
        pour::pour(state, op)
    }

    fn is_goal(&self, state: &TubeStateV1) -> bool {
        pour::is_goal(state)
    }

    fn heuristic(&self, state: &TubeStateV1, id: HeuristicId) -> i64 {
        heuristics::evaluate(state, id)
    }
}
