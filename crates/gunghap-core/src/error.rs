//! Error types for Gunghap
//!
//! The scoring pipeline itself never fails. Errors come from the input
//! validation layer and from rule configuration.

use thiserror::Error;

/// Result type alias for Gunghap operations
pub type Result<T> = std::result::Result<T, GunghapError>;

/// Errors that can occur while validating names or rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GunghapError {
    // === Name Validation ===
    /// Nothing left after trimming
    #[error("Name is empty")]
    EmptyName,

    /// Fewer syllables than the rules require
    #[error("Name must have at least {min} syllables, got {actual}")]
    TooShort { min: usize, actual: usize },

    /// Character outside the composed-syllable block (inner whitespace included)
    #[error("Only Hangul syllables are allowed, found {found:?} at position {position}")]
    NonHangul { found: char, position: usize },

    /// Name lengths too far apart to interleave
    #[error("Name lengths may differ by at most {max_diff}, got {first} and {second}")]
    LengthMismatch {
        first: usize,
        second: usize,
        max_diff: usize,
    },

    /// Error attributed to one name of a pair (1-based)
    #[error("Name {index}")]
    InName {
        index: usize,
        #[source]
        source: Box<GunghapError>,
    },

    // === Configuration ===
    /// Rule set cannot be satisfied
    #[error("Invalid rules: {0}")]
    InvalidRules(String),
}

impl GunghapError {
    /// Get the error code for machine-readable output
    pub fn code(&self) -> u32 {
        match self {
            Self::EmptyName => 2001,
            Self::TooShort { .. } => 2002,
            Self::NonHangul { .. } => 2003,
            Self::LengthMismatch { .. } => 2004,
            Self::InName { source, .. } => source.code(),
            Self::InvalidRules(_) => 3001,
        }
    }

    /// Check if the caller can fix the input and retry
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InName { source, .. } => source.is_recoverable(),
            Self::InvalidRules(_) => false,
            _ => true,
        }
    }

    /// Attribute this error to the name at `index` (1-based)
    pub fn in_name(self, index: usize) -> Self {
        Self::InName {
            index,
            source: Box::new(self),
        }
    }
}
