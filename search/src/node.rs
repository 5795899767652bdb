//! Search node and candidate move types.

use poursort_kernel::hash::ContentHash;
use poursort_kernel::pour::PourOpV1;
use poursort_kernel::state::TubeStateV1;

/// Arena handle for a search node.
///
/// Handles index the invocation-local node arena directly; parent links
/// are handles, so ancestor chains share structure without ownership
/// cycles.
pub type NodeId = usize;

/// Sentinel for a node whose heuristic cost was never evaluated.
///
/// Uninformed strategies leave `h_cost` at this value; informed strategies
/// evaluate the heuristic before the node is built, so the sentinel never
/// reaches an ordered insertion.
pub const HEURISTIC_UNSET: i64 = -1;

/// An immutable search-tree node stored in the arena.
///
/// Invariants: `depth == parent.depth + 1` for non-root nodes; `path_cost`
/// is the sum of operator costs along the root path; nodes are never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct SearchNodeV1 {
    /// Arena handle of this node.
    pub node_id: NodeId,
    /// Parent handle (`None` for the root).
    pub parent_id: Option<NodeId>,
    /// Exclusively owned puzzle state.
    pub state: TubeStateV1,
    /// Canonical fingerprint of `state` under the search-node domain.
    pub state_fingerprint: ContentHash,
    /// The pour that produced this node (`None` for the root).
    pub producing_op: Option<PourOpV1>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative pour cost from the root.
    pub path_cost: i64,
    /// Heuristic estimate, or [`HEURISTIC_UNSET`].
    pub h_cost: i64,
    /// Monotonic creation counter for arrival-order tie-breaking.
    pub arrival: u64,
}

impl SearchNodeV1 {
    /// Compute `path_cost + h_cost` (the A* ordering key).
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.path_cost.saturating_add(self.h_cost)
    }

    /// Operator label for plan output; empty for the root.
    #[must_use]
    pub fn operator_label(&self) -> String {
        self.producing_op.map(PourOpV1::label).unwrap_or_default()
    }
}

/// A candidate pour proposed during expansion: the operator plus the
/// number of layers it would move.
///
/// Candidate lists may contain duplicates; the frontier's fingerprint
/// dedup admits at most one child per resulting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMoveV1 {
    pub op: PourOpV1,
    pub cost: usize,
}
