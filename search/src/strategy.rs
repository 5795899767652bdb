//! Strategy codes and their insertion policies.
//!
//! The strategy is a closed variant type selected once per invocation from
//! its text code; every enqueue then follows the variant's insertion
//! policy with no further dispatch. Unknown codes are a typed error, never
//! a silent fallback to some other strategy.

use crate::error::SearchError;
use crate::node::SearchNodeV1;

/// Which heuristic an informed strategy evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicId {
    /// The simple foreign-layer count.
    H1,
    /// The combinatorial relabel/swap estimator.
    H2,
}

/// A search strategy, parsed from its case-sensitive text code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyV1 {
    /// `DF`: stack-ordered expansion.
    DepthFirst,
    /// `BF`: queue-ordered expansion.
    BreadthFirst,
    /// `ID`: repeated depth-bounded runs with growing limits.
    IterativeDeepening,
    /// `UC`: ordered by accumulated path cost.
    UniformCost,
    /// `GR1`/`GR2`: ordered by heuristic cost alone.
    Greedy(HeuristicId),
    /// `AS1`/`AS2`: ordered by path cost plus heuristic cost.
    AStar(HeuristicId),
}

impl StrategyV1 {
    /// Parse a strategy code.
    ///
    /// Codes are exactly `BF`, `DF`, `ID`, `UC`, `GR1`, `GR2`, `AS1`,
    /// `AS2`, case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedStrategy`] for any other code.
    pub fn parse_code(code: &str) -> Result<Self, SearchError> {
        match code {
            "BF" => Ok(Self::BreadthFirst),
            "DF" => Ok(Self::DepthFirst),
            "ID" => Ok(Self::IterativeDeepening),
            "UC" => Ok(Self::UniformCost),
            "GR1" => Ok(Self::Greedy(HeuristicId::H1)),
            "GR2" => Ok(Self::Greedy(HeuristicId::H2)),
            "AS1" => Ok(Self::AStar(HeuristicId::H1)),
            "AS2" => Ok(Self::AStar(HeuristicId::H2)),
            _ => Err(SearchError::UnsupportedStrategy {
                code: code.to_string(),
            }),
        }
    }

    /// The canonical text code for this strategy.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BF",
            Self::DepthFirst => "DF",
            Self::IterativeDeepening => "ID",
            Self::UniformCost => "UC",
            Self::Greedy(HeuristicId::H1) => "GR1",
            Self::Greedy(HeuristicId::H2) => "GR2",
            Self::AStar(HeuristicId::H1) => "AS1",
            Self::AStar(HeuristicId::H2) => "AS2",
        }
    }

    /// The heuristic this strategy evaluates before insertion, if any.
    #[must_use]
    pub const fn heuristic(self) -> Option<HeuristicId> {
        match self {
            Self::Greedy(id) | Self::AStar(id) => Some(id),
            _ => None,
        }
    }

    /// The insertion policy this strategy imposes on the frontier.
    ///
    /// `depth_limit` binds only the [`StrategyV1::IterativeDeepening`]
    /// variant's bounded runs; other strategies ignore it.
    #[must_use]
    pub fn insertion_policy(self, depth_limit: Option<u32>) -> InsertionPolicyV1 {
        match self {
            Self::DepthFirst => InsertionPolicyV1::Front,
            Self::BreadthFirst => InsertionPolicyV1::Back,
            Self::IterativeDeepening => InsertionPolicyV1::DepthBounded {
                limit: depth_limit.unwrap_or(u32::MAX),
            },
            Self::UniformCost => InsertionPolicyV1::Ordered {
                key: RankKeyV1::PathCost,
            },
            Self::Greedy(_) => InsertionPolicyV1::Ordered {
                key: RankKeyV1::HeuristicCost,
            },
            Self::AStar(_) => InsertionPolicyV1::Ordered {
                key: RankKeyV1::TotalCost,
            },
        }
    }
}

/// The ranking key an ordered insertion sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKeyV1 {
    /// Accumulated path cost (uniform cost).
    PathCost,
    /// Heuristic cost alone (greedy).
    HeuristicCost,
    /// Path cost plus heuristic cost (A*).
    TotalCost,
}

impl RankKeyV1 {
    /// Extract the ranking key from a node.
    #[must_use]
    pub fn key_of(self, node: &SearchNodeV1) -> i64 {
        match self {
            Self::PathCost => node.path_cost,
            Self::HeuristicCost => node.h_cost,
            Self::TotalCost => node.f_cost(),
        }
    }
}

/// How a child node enters the frontier sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPolicyV1 {
    /// Insert at the front (stack order).
    Front,
    /// Insert at the back (FIFO).
    Back,
    /// Insert at the front only while `node.depth <= limit`; deeper nodes
    /// are discarded without entering the visited set.
    DepthBounded { limit: u32 },
    /// Insert ascending by key; a new node lands after equal-key
    /// incumbents (arrival order breaks ties).
    Ordered { key: RankKeyV1 },
}
