//! Search problem contract trait.

use poursort_kernel::pour::PourOpV1;
use poursort_kernel::state::TubeStateV1;

use crate::node::CandidateMoveV1;
use crate::strategy::HeuristicId;

/// Trait binding one initial state to the operations the generic driver
/// needs.
///
/// One problem value exists per search invocation and is passed explicitly
/// into the driver; nothing in this crate holds process-wide state.
///
/// # Contract
///
/// - `expand` must be deterministic: same state, same candidates in the
///   same order. Duplicate candidates are allowed — the frontier's
///   fingerprint dedup admits at most one child per resulting state.
/// - `apply` must never mutate its input; successors are fresh copies.
pub trait SearchProblemV1 {
    /// The state the search starts from.
    fn initial_state(&self) -> &TubeStateV1;

    /// Enumerate candidate pours (with costs) out of a state.
    fn expand(&self, state: &TubeStateV1) -> Vec<CandidateMoveV1>;

    /// Apply one pour, producing the successor state.
    fn apply(&self, state: &TubeStateV1, op: PourOpV1) -> TubeStateV1;

    /// Goal predicate.
    fn is_goal(&self, state: &TubeStateV1) -> bool;

    /// Evaluate a heuristic over a state.
    fn heuristic(&self, state: &TubeStateV1, id: HeuristicId) -> i64;
}
