//! Stroke sequences - From a name to its per-syllable digits
//!
//! Two steps:
//! 1. [`stroke_totals`] sums the component strokes of each syllable, unreduced.
//! 2. [`StrokeSequence::from_totals`] drops syllables without a total and
//!    takes the rest modulo 10.
//!
//! Dropping shrinks the sequence, so a name with an undecomposable syllable
//! interleaves shorter than its syllable count suggests.

use serde::{Deserialize, Serialize};

use crate::stroke::ComponentKind;
use crate::syllable::{decompose_char, Decomposition};
use crate::types::Name;

/// Per-syllable stroke totals, `None` where a syllable has no total
pub fn stroke_totals(name: &Name) -> Vec<Option<u32>> {
    name.iter().map(|c| decompose_char(c).stroke_total()).collect()
}

/// Ordered single-digit stroke values for one name
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeSequence {
    digits: Vec<u8>,
}

impl StrokeSequence {
    /// Normalize raw totals: drop missing ones, reduce the rest modulo 10
    pub fn from_totals(totals: &[Option<u32>]) -> Self {
        let digits: Vec<u8> = totals.iter().flatten().map(|&t| (t % 10) as u8).collect();

        let dropped = totals.len() - digits.len();
        if dropped > 0 {
            tracing::debug!(dropped, kept = digits.len(), "dropped syllables without stroke total");
        }

        Self { digits }
    }

    /// Build the sequence for a name
    pub fn for_name(name: &Name) -> Self {
        Self::from_totals(&stroke_totals(name))
    }

    /// Build from arbitrary values, each reduced modulo 10
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            digits: values.into_iter().map(|v| (v % 10) as u8).collect(),
        }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

/// Diagnostic view of one syllable
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableBreakdown {
    /// The syllable as written
    pub syllable: char,

    /// Component indices, or invalid
    pub decomposition: Decomposition,

    /// Stroke count of the initial consonant
    pub initial_strokes: Option<u8>,

    /// Stroke count of the vowel
    pub vowel_strokes: Option<u8>,

    /// Stroke count of the final slot
    pub final_strokes: Option<u8>,

    /// Same value the score is computed from
    pub total: Option<u32>,
}

impl SyllableBreakdown {
    fn of(syllable: char) -> Self {
        let decomposition = decompose_char(syllable);
        let component = |kind| decomposition.components().and_then(|c| c.strokes(kind));

        Self {
            syllable,
            decomposition,
            initial_strokes: component(ComponentKind::Initial),
            vowel_strokes: component(ComponentKind::Vowel),
            final_strokes: component(ComponentKind::Final),
            total: decomposition.stroke_total(),
        }
    }
}

/// Decompose every syllable of a name for display
pub fn decompose_for_display(name: &Name) -> Vec<SyllableBreakdown> {
    name.iter().map(SyllableBreakdown::of).collect()
}
