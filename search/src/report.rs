//! `SolveReportV1`: the deterministic per-invocation artifact.
//!
//! Everything external tooling needs from a finished invocation: the plan
//! (or the no-solution sentinel), the accumulated cost, and the driver
//! counters. Serializes to canonical JSON bytes so two identical runs
//! produce byte-identical artifacts.

use poursort_kernel::canon::{canonical_json_bytes, CanonError};
use poursort_kernel::hash::{canonical_hash, ContentHash, HashDomain};

use crate::driver::{SearchStatsV1, TerminationReasonV1};

/// The outcome of one solve invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReportV1 {
    /// Strategy code the invocation ran under.
    pub strategy: String,
    /// Comma-joined operator plan, or the no-solution sentinel.
    pub plan: String,
    /// True when a goal node was reached.
    pub solved: bool,
    /// Accumulated cost of the goal path (`None` when unsolved).
    pub path_cost: Option<i64>,
    /// Depth of the goal node (`None` when unsolved).
    pub goal_depth: Option<u32>,
    /// Fingerprint of the initial state.
    pub root_fingerprint: String,
    /// Why the driver stopped.
    pub termination: TerminationReasonV1,
    /// Driver counters.
    pub stats: SearchStatsV1,
}

impl SolveReportV1 {
    /// Serialize to canonical JSON bytes (sorted keys, compact form).
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if a counter is not representable as an
    /// integer (cannot happen for values this type constructs).
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Digest of the canonical JSON bytes under the report domain.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from serialization.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SolveReport, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "strategy": self.strategy,
            "plan": self.plan,
            "solved": self.solved,
            "path_cost": self.path_cost,
            "goal_depth": self.goal_depth,
            "root_fingerprint": self.root_fingerprint,
            "termination": termination_to_json(self.termination),
            "stats": stats_to_json(&self.stats),
        })
    }
}

fn termination_to_json(reason: TerminationReasonV1) -> serde_json::Value {
    match reason {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"type": "goal_reached", "node_id": node_id as u64})
        }
        TerminationReasonV1::FrontierExhausted => {
            serde_json::json!({"type": "frontier_exhausted"})
        }
    }
}

fn stats_to_json(stats: &SearchStatsV1) -> serde_json::Value {
    serde_json::json!({
        "nodes_expanded": stats.nodes_expanded,
        "candidates_generated": stats.candidates_generated,
        "duplicates_suppressed": stats.duplicates_suppressed,
        "depth_limit_discards": stats.depth_limit_discards,
        "frontier_high_water": stats.frontier_high_water,
        "depth_limit_reached": stats.depth_limit_reached,
    })
}
