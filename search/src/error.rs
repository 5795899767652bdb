//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures only. Frontier exhaustion is a
//! normal termination (see `driver::TerminationReasonV1`), not an error.

/// Typed failure raised before any search step runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The strategy code is not one of the supported set.
    UnsupportedStrategy { code: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedStrategy { code } => {
                write!(f, "unsupported strategy code: {code:?}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
