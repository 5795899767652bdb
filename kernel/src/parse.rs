//! Initial-state text parsing.
//!
//! Format (semicolon-delimited):
//!
//! ```text
//! bottle_count; capacity; layers_1; layers_2; ...; layers_n;
//! ```
//!
//! where each `layers_i` is a comma-separated list of exactly `capacity`
//! single-character layer codes, slot 0 (the physical top) first. The
//! trailing semicolon is optional. Top pointers are recomputed from the
//! layer grid after parsing.
//!
//! Malformed text is a typed [`ParseError`], never an index panic.

use std::fmt;

use crate::layer::Layer;
use crate::state::TubeStateV1;

/// Typed failure for initial-state text parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A header count field is missing entirely.
    MissingField { field: &'static str },
    /// A header count field is present but not a number.
    NonNumericCount { field: &'static str, token: String },
    /// The number of layer-list sections does not match the bottle count.
    BottleCountMismatch { expected: usize, actual: usize },
    /// One bottle's layer list has the wrong number of entries.
    LayerCountMismatch {
        bottle: usize,
        expected: usize,
        actual: usize,
    },
    /// A layer token is not a single character.
    InvalidLayerToken {
        bottle: usize,
        slot: usize,
        token: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => {
                write!(f, "missing initial-state field: {field}")
            }
            Self::NonNumericCount { field, token } => {
                write!(f, "non-numeric {field}: {token:?}")
            }
            Self::BottleCountMismatch { expected, actual } => {
                write!(f, "expected {expected} bottle sections, got {actual}")
            }
            Self::LayerCountMismatch {
                bottle,
                expected,
                actual,
            } => {
                write!(f, "bottle {bottle}: expected {expected} layers, got {actual}")
            }
            Self::InvalidLayerToken {
                bottle,
                slot,
                token,
            } => {
                write!(f, "bottle {bottle} slot {slot}: invalid layer token {token:?}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse initial-state text into a [`TubeStateV1`].
///
/// # Errors
///
/// Returns [`ParseError`] on missing or non-numeric header counts, a
/// section count that disagrees with the declared bottle count, a layer
/// list of the wrong length, or a multi-character layer token.
pub fn parse_state(text: &str) -> Result<TubeStateV1, ParseError> {
    // Trailing `;` produces trailing empty splits; drop them so the
    // section count reflects actual content.
    let mut fields: Vec<&str> = text.split(';').map(str::trim).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    let mut fields = fields.into_iter();
    let bottle_count = parse_count(fields.next(), "bottle count")?;
    let capacity = parse_count(fields.next(), "bottle capacity")?;

    let sections: Vec<&str> = fields.collect();
    if sections.len() != bottle_count {
        return Err(ParseError::BottleCountMismatch {
            expected: bottle_count,
            actual: sections.len(),
        });
    }

    let mut state = TubeStateV1::new(bottle_count, capacity);
    for (bottle, section) in sections.iter().enumerate() {
        let tokens: Vec<&str> = section.split(',').map(str::trim).collect();
        if tokens.len() != capacity {
            return Err(ParseError::LayerCountMismatch {
                bottle,
                expected: capacity,
                actual: tokens.len(),
            });
        }
        for (slot, token) in tokens.iter().enumerate() {
            let [code] = token.as_bytes() else {
                return Err(ParseError::InvalidLayerToken {
                    bottle,
                    slot,
                    token: (*token).to_string(),
                });
            };
            state.set_layer(bottle, slot, Layer::new(*code));
        }
    }

    state.recompute_tops();
    Ok(state)
}

fn parse_count(field: Option<&str>, name: &'static str) -> Result<usize, ParseError> {
    let token = field.ok_or(ParseError::MissingField { field: name })?;
    token.parse().map_err(|_| ParseError::NonNumericCount {
        field: name,
        token: token.to_string(),
    })
}
