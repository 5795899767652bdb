//! Poursort Search: the strategy-parametrized generic search engine.
//!
//! This crate depends only on `poursort_kernel` — the domain binding lives
//! above it in `poursort_solver`.
//!
//! # Crate dependency graph
//!
//! ```text
//! poursort_kernel  ←  poursort_search  ←  poursort_solver
//! (state, pour)       (frontier, driver)   (problem, heuristics, solve)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNodeV1`] — immutable arena node with parent handles
//! - [`strategy::StrategyV1`] — closed strategy variant type with its
//!   insertion policy
//! - [`frontier::StrategyFrontier`] — ordered sequence + visited dedup
//! - [`driver::run_search`] — the expansion loop (and deepening wrapper)
//! - [`contract::SearchProblemV1`] — trait for domains that support search
//! - [`report::SolveReportV1`] — deterministic invocation artifact

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod driver;
pub mod error;
pub mod frontier;
pub mod node;
pub mod path;
pub mod report;
pub mod strategy;
