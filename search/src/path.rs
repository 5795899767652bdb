//! Plan reconstruction from the node arena.

use crate::node::{NodeId, SearchNodeV1};

/// Walk parent handles from `goal_id` to the root, collecting operator
/// labels in execution order (the root contributes none).
#[must_use]
pub fn reconstruct_plan(nodes: &[SearchNodeV1], goal_id: NodeId) -> Vec<String> {
    let mut operators = Vec::new();
    let mut cursor = Some(goal_id);
    while let Some(id) = cursor {
        let node = &nodes[id];
        if let Some(op) = node.producing_op {
            operators.push(op.label());
        }
        cursor = node.parent_id;
    }
    operators.reverse();
    operators
}

/// Render a plan as the comma-joined operator string.
#[must_use]
pub fn plan_string(plan: &[String]) -> String {
    plan.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::HEURISTIC_UNSET;
    use poursort_kernel::hash::{canonical_hash, HashDomain};
    use poursort_kernel::pour::PourOpV1;
    use poursort_kernel::state::TubeStateV1;

    fn chain_node(id: NodeId, parent: Option<NodeId>, op: Option<PourOpV1>) -> SearchNodeV1 {
        let state = TubeStateV1::new(1, 1);
        SearchNodeV1 {
            node_id: id,
            parent_id: parent,
            state_fingerprint: canonical_hash(HashDomain::SearchNode, &(id as u64).to_le_bytes()),
            state,
            producing_op: op,
            depth: 0,
            path_cost: 0,
            h_cost: HEURISTIC_UNSET,
            arrival: id as u64,
        }
    }

    #[test]
    fn root_alone_yields_an_empty_plan() {
        let nodes = vec![chain_node(0, None, None)];
        assert!(reconstruct_plan(&nodes, 0).is_empty());
        assert_eq!(plan_string(&reconstruct_plan(&nodes, 0)), "");
    }

    #[test]
    fn chain_reconstructs_in_execution_order() {
        let nodes = vec![
            chain_node(0, None, None),
            chain_node(1, Some(0), Some(PourOpV1::new(0, 2))),
            chain_node(2, Some(1), Some(PourOpV1::new(1, 0))),
            chain_node(3, Some(2), Some(PourOpV1::new(1, 2))),
        ];
        let plan = reconstruct_plan(&nodes, 3);
        assert_eq!(plan, ["pour_0_2", "pour_1_0", "pour_1_2"]);
        assert_eq!(plan_string(&plan), "pour_0_2,pour_1_0,pour_1_2");
    }

    #[test]
    fn reconstruction_ignores_siblings() {
        let nodes = vec![
            chain_node(0, None, None),
            chain_node(1, Some(0), Some(PourOpV1::new(0, 1))),
            chain_node(2, Some(0), Some(PourOpV1::new(1, 0))),
        ];
        assert_eq!(reconstruct_plan(&nodes, 2), ["pour_1_0"]);
    }
}
