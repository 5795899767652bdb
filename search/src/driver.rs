//! Generic search driver: the strategy-parametrized expansion loop.
//!
//! One loop serves every strategy; the frontier's insertion policy is the
//! only varying part. Iterative deepening is a wrapper that repeats the
//! bounded loop with growing limits, each repetition starting from a
//! brand-new frontier, visited set, and arena. The wrapper itself is
//! unbounded — callers must impose an external cutoff when a goal may be
//! unreachable.

use poursort_kernel::hash::{canonical_hash, HashDomain};
use poursort_kernel::state::TubeStateV1;

use crate::contract::SearchProblemV1;
use crate::frontier::StrategyFrontier;
use crate::node::{NodeId, SearchNodeV1, HEURISTIC_UNSET};
use crate::strategy::StrategyV1;

/// Why the driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A popped node satisfied the goal predicate.
    GoalReached { node_id: NodeId },
    /// The frontier emptied without a goal — a normal outcome, not an
    /// error; surfaces as the `NOSOLUTION` sentinel upstream.
    FrontierExhausted,
}

/// Aggregate counters for one driver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Nodes popped and expanded (goal pops are not expansions).
    pub nodes_expanded: u64,
    /// Candidates produced by `expand`, duplicates included.
    pub candidates_generated: u64,
    /// Children rejected because their fingerprint was already visited.
    pub duplicates_suppressed: u64,
    /// Children rejected by the depth bound (iterative deepening only).
    pub depth_limit_discards: u64,
    /// High-water mark of the frontier size.
    pub frontier_high_water: u64,
    /// The bound the successful iteration ran under (iterative deepening
    /// only).
    pub depth_limit_reached: Option<u32>,
}

/// Everything one driver run produced.
///
/// The arena (`nodes`) owns every admitted node for the lifetime of the
/// result, so the goal's ancestor chain stays reachable through plan
/// reconstruction.
#[derive(Debug)]
pub struct SearchResultV1 {
    /// Goal handle, if a goal was popped.
    pub goal_id: Option<NodeId>,
    /// Arena of all admitted nodes, indexed by handle.
    pub nodes: Vec<SearchNodeV1>,
    /// Handles in pop order (the frontier discipline made observable).
    pub pop_order: Vec<NodeId>,
    /// Aggregate counters.
    pub stats: SearchStatsV1,
    /// Why the run stopped.
    pub termination: TerminationReasonV1,
}

impl SearchResultV1 {
    /// True if the run terminated on a goal.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReasonV1::GoalReached { .. })
    }

    /// The goal node, if any.
    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNodeV1> {
        self.goal_id.map(|id| &self.nodes[id])
    }
}

/// Fingerprint a state under the search-node domain.
#[must_use]
pub fn fingerprint(state: &TubeStateV1) -> poursort_kernel::hash::ContentHash {
    canonical_hash(HashDomain::SearchNode, &state.identity_bytes())
}

/// Run a search to completion under the given strategy.
///
/// [`StrategyV1::IterativeDeepening`] is handled by the deepening wrapper;
/// every other strategy is a single unbounded run.
#[must_use]
pub fn run_search(problem: &dyn SearchProblemV1, strategy: StrategyV1) -> SearchResultV1 {
    if strategy == StrategyV1::IterativeDeepening {
        return iterative_deepening(problem);
    }
    bounded_run(problem, strategy, None)
}

/// One depth-bounded run with a fresh frontier, visited set, and arena.
///
/// This is both the iterative-deepening building block and a first-class
/// operation: the deepening wrapper at limit `L` visits exactly the nodes
/// this run visits.
#[must_use]
pub fn depth_limited_search(problem: &dyn SearchProblemV1, limit: u32) -> SearchResultV1 {
    bounded_run(problem, StrategyV1::IterativeDeepening, Some(limit))
}

/// Repeat bounded runs at limits `0, 1, 2, ...` until one reaches a goal.
fn iterative_deepening(problem: &dyn SearchProblemV1) -> SearchResultV1 {
    let mut limit = 0;
    loop {
        let mut result = depth_limited_search(problem, limit);
        if result.is_goal_reached() {
            result.stats.depth_limit_reached = Some(limit);
            return result;
        }
        limit += 1;
    }
}

fn bounded_run(
    problem: &dyn SearchProblemV1,
    strategy: StrategyV1,
    depth_limit: Option<u32>,
) -> SearchResultV1 {
    let policy = strategy.insertion_policy(depth_limit);
    let heuristic = strategy.heuristic();

    let mut frontier = StrategyFrontier::new();
    let mut nodes: Vec<SearchNodeV1> = Vec::new();
    let mut pop_order: Vec<NodeId> = Vec::new();
    let mut stats = SearchStatsV1::default();
    let mut next_arrival: u64 = 0;

    let root_state = problem.initial_state().clone();
    let root = SearchNodeV1 {
        node_id: 0,
        parent_id: None,
        state_fingerprint: fingerprint(&root_state),
        state: root_state,
        producing_op: None,
        depth: 0,
        path_cost: 0,
        h_cost: HEURISTIC_UNSET,
        arrival: next_arrival,
    };
    next_arrival += 1;
    frontier.push_root(&root);
    nodes.push(root);

    loop {
        let Some(current_id) = frontier.pop_front() else {
            stats.frontier_high_water = frontier.high_water();
            return SearchResultV1 {
                goal_id: None,
                nodes,
                pop_order,
                stats,
                termination: TerminationReasonV1::FrontierExhausted,
            };
        };
        pop_order.push(current_id);

        if problem.is_goal(&nodes[current_id].state) {
            stats.frontier_high_water = frontier.high_water();
            return SearchResultV1 {
                goal_id: Some(current_id),
                nodes,
                pop_order,
                stats,
                termination: TerminationReasonV1::GoalReached {
                    node_id: current_id,
                },
            };
        }

        // Snapshot the parent fields: the arena grows while children are
        // admitted below.
        let parent_state = nodes[current_id].state.clone();
        let parent_depth = nodes[current_id].depth;
        let parent_cost = nodes[current_id].path_cost;

        stats.nodes_expanded += 1;
        let candidates = problem.expand(&parent_state);
        stats.candidates_generated += candidates.len() as u64;

        for candidate in candidates {
            let child_state = problem.apply(&parent_state, candidate.op);
            let child_fingerprint = fingerprint(&child_state);
            if frontier.is_visited(child_fingerprint.hex_digest()) {
                stats.duplicates_suppressed += 1;
                continue;
            }

            let h_cost = match heuristic {
                Some(id) => problem.heuristic(&child_state, id),
                None => HEURISTIC_UNSET,
            };
            let child = SearchNodeV1 {
                node_id: nodes.len(),
                parent_id: Some(current_id),
                state: child_state,
                state_fingerprint: child_fingerprint,
                producing_op: Some(candidate.op),
                depth: parent_depth + 1,
                path_cost: parent_cost + candidate.cost as i64,
                h_cost,
                arrival: next_arrival,
            };
            next_arrival += 1;

            if frontier.insert(&child, policy) {
                nodes.push(child);
            } else {
                // Not a duplicate (checked above), so the policy's depth
                // bound rejected it; the node is dropped entirely.
                stats.depth_limit_discards += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poursort_kernel::parse::parse_state;
    use poursort_kernel::pour::{is_goal, pour, pour_cost, PourOpV1};

    use crate::node::CandidateMoveV1;
    use crate::strategy::HeuristicId;

    /// Minimal pour-puzzle problem for driver tests: single-probe
    /// expansion, layer-count heuristic stub.
    struct TestPuzzle {
        initial: TubeStateV1,
    }

    impl TestPuzzle {
        fn from_text(text: &str) -> Self {
            Self {
                initial: parse_state(text).unwrap(),
            }
        }
    }

    impl SearchProblemV1 for TestPuzzle {
        fn initial_state(&self) -> &TubeStateV1 {
            &self.initial
        }

        fn expand(&self, state: &TubeStateV1) -> Vec<CandidateMoveV1> {
            let mut candidates = Vec::new();
            for src in 0..state.bottle_count() {
                for dst in 0..state.bottle_count() {
                    let op = PourOpV1::new(src, dst);
                    if let Some(cost) = pour_cost(state, op) {
                        candidates.push(CandidateMoveV1 { op, cost });
                    }
                }
            }
            candidates
        }

        fn apply(&self, state: &TubeStateV1, op: PourOpV1) -> TubeStateV1 {
            pour(state, op)
        }

        fn is_goal(&self, state: &TubeStateV1) -> bool {
            is_goal(state)
        }

        fn heuristic(&self, state: &TubeStateV1, _id: HeuristicId) -> i64 {
            let mut layers = 0;
            for bottle in 0..state.bottle_count() {
                for slot in 0..state.capacity() {
                    if !state.layer(bottle, slot).is_empty() {
                        layers += 1;
                    }
                }
            }
            layers
        }
    }

    /// Three bottles, capacity 2; solvable in three pours.
    const SMALL: &str = "3;2;r,b;b,r;e,e;";

    #[test]
    fn goal_at_root_expands_nothing() {
        let puzzle = TestPuzzle::from_text("2;2;r,r;e,e;");
        for code in ["BF", "DF", "ID", "UC", "GR1", "AS2"] {
            let strategy = StrategyV1::parse_code(code).unwrap();
            let result = run_search(&puzzle, strategy);
            assert!(result.is_goal_reached(), "{code} must accept the root");
            assert_eq!(result.goal_id, Some(0));
            assert_eq!(result.stats.nodes_expanded, 0, "{code}");
        }
    }

    #[test]
    fn every_strategy_solves_the_small_instance() {
        let puzzle = TestPuzzle::from_text(SMALL);
        for code in ["BF", "DF", "ID", "UC", "GR1", "GR2", "AS1", "AS2"] {
            let strategy = StrategyV1::parse_code(code).unwrap();
            let result = run_search(&puzzle, strategy);
            assert!(result.is_goal_reached(), "{code} must find a goal");
            let goal = result.goal_node().unwrap();
            assert!(is_goal(&goal.state), "{code} goal state must satisfy the predicate");
        }
    }

    #[test]
    fn exhaustion_terminates_without_a_goal() {
        // Two full mixed bottles: no pour ever applies.
        let puzzle = TestPuzzle::from_text("2;2;r,b;b,r;");
        let result = run_search(&puzzle, StrategyV1::BreadthFirst);
        assert!(!result.is_goal_reached());
        assert_eq!(result.termination, TerminationReasonV1::FrontierExhausted);
        assert_eq!(result.goal_id, None);
        assert_eq!(result.pop_order, vec![0], "only the root is ever popped");
    }

    #[test]
    fn children_link_back_to_their_parents() {
        let puzzle = TestPuzzle::from_text(SMALL);
        let result = run_search(&puzzle, StrategyV1::BreadthFirst);
        for node in &result.nodes {
            match node.parent_id {
                None => assert_eq!(node.node_id, 0, "only the root has no parent"),
                Some(parent) => {
                    assert!(parent < node.node_id, "parents precede children");
                    assert_eq!(result.nodes[parent].depth + 1, node.depth);
                }
            }
        }
    }

    #[test]
    fn uniform_cost_pops_in_nondecreasing_path_cost() {
        let puzzle = TestPuzzle::from_text(SMALL);
        let result = run_search(&puzzle, StrategyV1::UniformCost);
        let costs: Vec<i64> = result
            .pop_order
            .iter()
            .map(|&id| result.nodes[id].path_cost)
            .collect();
        assert!(
            costs.windows(2).all(|pair| pair[0] <= pair[1]),
            "pop costs must be nondecreasing: {costs:?}"
        );
    }

    #[test]
    fn depth_limit_zero_sees_only_the_root() {
        let puzzle = TestPuzzle::from_text(SMALL);
        let result = depth_limited_search(&puzzle, 0);
        assert!(!result.is_goal_reached());
        assert_eq!(result.pop_order, vec![0]);
        assert!(result.stats.depth_limit_discards > 0);
    }

    #[test]
    fn iterative_deepening_matches_its_final_bounded_run() {
        let puzzle = TestPuzzle::from_text(SMALL);
        let deepening = run_search(&puzzle, StrategyV1::IterativeDeepening);
        assert!(deepening.is_goal_reached());
        let limit = deepening.stats.depth_limit_reached.unwrap();

        let bounded = depth_limited_search(&puzzle, limit);
        assert!(bounded.is_goal_reached());
        assert_eq!(bounded.pop_order, deepening.pop_order);
        assert_eq!(bounded.goal_id, deepening.goal_id);

        // Every shallower limit must fail, or the wrapper would have
        // stopped there.
        for shallower in 0..limit {
            assert!(!depth_limited_search(&puzzle, shallower).is_goal_reached());
        }
    }

    #[test]
    fn no_two_arena_nodes_share_a_fingerprint() {
        let puzzle = TestPuzzle::from_text(SMALL);
        let result = run_search(&puzzle, StrategyV1::BreadthFirst);
        let mut seen = std::collections::BTreeSet::new();
        for node in &result.nodes {
            assert!(
                seen.insert(node.state_fingerprint.hex_digest().to_string()),
                "fingerprint admitted twice: {}",
                node.state_fingerprint.as_str()
            );
        }
    }
}
