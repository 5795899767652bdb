//! Poursort Kernel: the pour-sort puzzle domain carrier.
//!
//! # API Surface
//!
//! - [`parse::parse_state`] -- parse initial-state text into [`state::TubeStateV1`]
//! - [`pour`] -- applicability, cost, and mutation of the pour transition,
//!   plus the goal predicate
//! - [`hash::canonical_hash`] -- domain-separated SHA-256 fingerprints
//! - [`canon::canonical_json_bytes`] -- deterministic artifact serialization
//!
//! # Module Dependency Direction
//!
//! `layer` ← `state` ← `parse`/`pour`
//!
//! `hash` and `canon` depend on nothing internal. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod hash;
pub mod layer;
pub mod parse;
pub mod pour;
pub mod state;
