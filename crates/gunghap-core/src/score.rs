//! Compatibility scoring
//!
//! Orchestrates the pipeline for a pair of names and keeps every
//! intermediate value, so a front end can draw the full pyramid.

use serde::{Deserialize, Serialize};

use crate::interleave::{interleave, Lead};
use crate::ladder::ReductionLadder;
use crate::sequence::StrokeSequence;
use crate::types::constants::MAX_SCORE;
use crate::types::Name;

/// Score of a ladder's final row
///
/// An empty ladder scores as `[0, 0]`; a missing second digit counts as 0.
pub fn score(ladder: &ReductionLadder) -> u8 {
    let last = ladder.last_row().unwrap_or(&[0, 0]);
    let tens = u16::from(last.first().copied().unwrap_or(0));
    let ones = u16::from(last.get(1).copied().unwrap_or(0));

    (tens * 10 + ones).min(u16::from(MAX_SCORE)) as u8
}

/// Everything computed for one pair of names
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Digits of the first name
    pub first: StrokeSequence,

    /// Digits of the second name
    pub second: StrokeSequence,

    /// Which name contributed first at each position
    pub lead: Lead,

    /// Merged digits, top row of the pyramid
    pub interleaved: Vec<u8>,

    /// All reduction rows
    pub ladder: ReductionLadder,

    /// Final score in `0..=100`
    pub score: u8,
}

impl CompatibilityResult {
    /// Derive the result from two stroke sequences and a lead
    pub fn from_sequences(first: StrokeSequence, second: StrokeSequence, lead: Lead) -> Self {
        let interleaved = interleave(first.digits(), second.digits(), lead);
        let ladder = ReductionLadder::reduce(&interleaved);
        let score = score(&ladder);

        Self {
            first,
            second,
            lead,
            interleaved,
            ladder,
            score,
        }
    }
}

/// Compute the compatibility of two names
///
/// Performs no validation. Characters that are not composed syllables, and
/// syllables without a full stroke entry, are dropped from their name's
/// sequence; a pair with fewer than two usable syllables scores 0.
pub fn compute_compatibility(first: &Name, second: &Name) -> CompatibilityResult {
    let lead = Lead::for_names(first, second);
    let result = CompatibilityResult::from_sequences(
        StrokeSequence::for_name(first),
        StrokeSequence::for_name(second),
        lead,
    );

    tracing::debug!(
        first = %first,
        second = %second,
        lead = ?lead,
        rows = result.ladder.len(),
        score = result.score,
        "computed compatibility"
    );

    result
}
