//! Canonical hashing: typed domain separators and `ContentHash`.
//!
//! Exactly one place defines canonical hashing for the workspace. All
//! fingerprints and artifact digests are SHA-256 over a null-terminated
//! domain prefix followed by the payload bytes, rendered as
//! `"sha256:<hex_digest>"`.

use sha2::{Digest, Sha256};

/// Typed domain separator for [`canonical_hash`].
///
/// Each variant maps to a unique, null-terminated byte string used as a
/// SHA-256 prefix, so payloads hashed under different domains can never
/// collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Tube-state identity hashing (the serialization text).
    TubeStateIdentity,
    /// Search-node state fingerprints (frontier dedup).
    SearchNode,
    /// Solve report artifact digests.
    SolveReport,
}

impl HashDomain {
    /// The raw domain-separator bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::TubeStateIdentity => b"POURSORT::TUBESTATE_IDENTITY::V1\0",
            Self::SearchNode => b"POURSORT::SEARCH_NODE::V1\0",
            Self::SolveReport => b"POURSORT::SOLVE_REPORT::V1\0",
        }
    }

    /// All domain variants in declaration order.
    pub const ALL: &'static [Self] = &[Self::TubeStateIdentity, Self::SearchNode, Self::SolveReport];
}

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g. `"sha256:abcdef..."`).
///
/// Invariant: the inner string always contains exactly one `:` separator
/// with non-empty substrings on both sides (enforced by construction and
/// by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    /// Full string in `"algorithm:hex_digest"` form.
    full: String,
    /// Byte offset of the `:` separator.
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` form.
    ///
    /// Returns `None` if the format is invalid (missing colon, empty
    /// algorithm, or empty digest).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (always `"sha256"` for produced hashes).
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `"algorithm:hex_digest"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

/// Compute the canonical hash of a byte slice under a domain separator.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let digest = hasher.finalize();

    let full = format!("sha256:{}", hex::encode(digest));
    ContentHash {
        colon: "sha256".len(),
        full,
    }
}
