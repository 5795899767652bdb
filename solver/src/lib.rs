//! Poursort Solver: the pour-puzzle domain bound to the search engine.
//!
//! The public surface is [`solve`] / [`solve_with_report`]: parse an
//! initial-state text, select a strategy by code, run the driver, and
//! render the plan (or the [`NO_SOLUTION`] sentinel).
//!
//! # Key types
//!
//! - [`problem::PourPuzzle`] — the `SearchProblemV1` implementation
//! - [`heuristics`] — the two estimators behind `GR1/GR2/AS1/AS2`
//! - [`SolveError`] — typed input failures (everything else is a normal
//!   outcome)

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod heuristics;
pub mod problem;

use poursort_kernel::parse::{parse_state, ParseError};
use poursort_search::driver::run_search;
use poursort_search::error::SearchError;
use poursort_search::path::{plan_string, reconstruct_plan};
use poursort_search::report::SolveReportV1;
use poursort_search::strategy::StrategyV1;

use crate::problem::PourPuzzle;

/// Sentinel returned when the chosen strategy exhausts the space without
/// reaching a goal.
pub const NO_SOLUTION: &str = "NOSOLUTION";

/// Typed failure for one solve invocation.
///
/// Exhaustion is not an error (see [`NO_SOLUTION`]); only malformed input
/// and unknown strategy codes fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The initial-state text is malformed.
    InvalidInput(ParseError),
    /// The strategy code is not one of the supported set.
    UnsupportedStrategy { code: String },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(source) => write!(f, "invalid initial state: {source}"),
            Self::UnsupportedStrategy { code } => {
                write!(f, "unsupported strategy code: {code:?}")
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(source) => Some(source),
            Self::UnsupportedStrategy { .. } => None,
        }
    }
}

impl From<ParseError> for SolveError {
    fn from(source: ParseError) -> Self {
        Self::InvalidInput(source)
    }
}

impl From<SearchError> for SolveError {
    fn from(source: SearchError) -> Self {
        match source {
            SearchError::UnsupportedStrategy { code } => Self::UnsupportedStrategy { code },
        }
    }
}

/// Solve an instance, returning the comma-joined operator plan (empty when
/// the initial state is already a goal) or [`NO_SOLUTION`].
///
/// # Errors
///
/// Returns [`SolveError`] on malformed initial-state text or an unknown
/// strategy code.
pub fn solve(initial_state: &str, strategy_code: &str) -> Result<String, SolveError> {
    Ok(solve_with_report(initial_state, strategy_code)?.plan)
}

/// Solve an instance and return the full report artifact.
///
/// # Errors
///
/// Returns [`SolveError`] on malformed initial-state text or an unknown
/// strategy code.
pub fn solve_with_report(
    initial_state: &str,
    strategy_code: &str,
) -> Result<SolveReportV1, SolveError> {
    let strategy = StrategyV1::parse_code(strategy_code)?;
    let initial = parse_state(initial_state)?;

    let puzzle = PourPuzzle::new(initial);
    let result = run_search(&puzzle, strategy);
    let root_fingerprint = result.nodes[0].state_fingerprint.as_str().to_string();

    let report = match result.goal_id {
        Some(goal_id) => {
            let goal = &result.nodes[goal_id];
            SolveReportV1 {
                strategy: strategy.code().to_string(),
                plan: plan_string(&reconstruct_plan(&result.nodes, goal_id)),
                solved: true,
                path_cost: Some(goal.path_cost),
                goal_depth: Some(goal.depth),
                root_fingerprint,
                termination: result.termination,
                stats: result.stats,
            }
        }
        None => SolveReportV1 {
            strategy: strategy.code().to_string(),
            plan: NO_SOLUTION.to_string(),
            solved: false,
            path_cost: None,
            goal_depth: None,
            root_fingerprint,
            termination: result.termination,
            stats: result.stats,
        },
    };

    Ok(report)
}
