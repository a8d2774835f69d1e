//! # Gunghap Core
//!
//! Name compatibility ("궁합") scoring for names written in Hangul.
//!
//! This crate provides the full pipeline:
//! - `stroke` - Fixed stroke counts for initial, vowel and final components
//! - `syllable` - Arithmetic decomposition of composed syllables
//! - `sequence` - Per-name stroke digits and the diagnostic breakdown
//! - `interleave` - Alternating merge of the two names' digits
//! - `ladder` - Pairwise modular reduction down to two digits
//! - `score` - Orchestration and the final score
//! - `validate` - Optional input rules for front ends
//!
//! ## Pipeline
//!
//! ```text
//!   name₁ ──► decompose ──► strokes ──► digits₁ ──┐
//!                                                 ├──► interleave ──► ladder ──► score
//!   name₂ ──► decompose ──► strokes ──► digits₂ ──┘
//! ```
//!
//! Every stage is a pure function. The pipeline never fails: undecomposable
//! input degrades to a smaller sequence and, at worst, a score of 0.

pub mod error;
pub mod interleave;
pub mod ladder;
pub mod score;
pub mod sequence;
pub mod stroke;
pub mod syllable;
pub mod types;
pub mod validate;

pub use error::*;
pub use interleave::*;
pub use ladder::*;
pub use score::*;
pub use sequence::*;
pub use stroke::*;
pub use syllable::*;
pub use types::*;
pub use validate::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{GunghapError, Result};
    pub use crate::interleave::Lead;
    pub use crate::ladder::ReductionLadder;
    pub use crate::score::{compute_compatibility, CompatibilityResult};
    pub use crate::sequence::{decompose_for_display, StrokeSequence, SyllableBreakdown};
    pub use crate::syllable::{decompose, Decomposition, SyllableComponents};
    pub use crate::types::Name;
    pub use crate::validate::{validate_pair, ValidationRules};
}
