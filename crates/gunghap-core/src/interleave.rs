//! Interleaving of two sequences
//!
//! Positions alternate between a primary and a secondary source. The same
//! rule merges the digit sequences for scoring and the name characters for
//! display, so [`interleave`] is generic over the element type.

use serde::{Deserialize, Serialize};

use crate::types::Name;

/// Which sequence contributes first at every position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lead {
    #[default]
    First,
    Second,
}

impl Lead {
    /// The second source leads only when strictly longer
    pub fn for_lengths(first_len: usize, second_len: usize) -> Self {
        if second_len > first_len {
            Self::Second
        } else {
            Self::First
        }
    }

    /// Lead for a pair of names, by syllable count
    pub fn for_names(first: &Name, second: &Name) -> Self {
        Self::for_lengths(first.len(), second.len())
    }
}

impl From<bool> for Lead {
    fn from(start_with_second: bool) -> Self {
        if start_with_second {
            Self::Second
        } else {
            Self::First
        }
    }
}

/// Merge two sequences by alternating positional picks
///
/// For every position up to the longer length, the leading sequence's
/// element is appended, then the other's; missing elements are skipped.
/// The result always holds `first.len() + second.len()` elements.
pub fn interleave<T: Clone>(first: &[T], second: &[T], lead: Lead) -> Vec<T> {
    let (primary, secondary) = match lead {
        Lead::First => (first, second),
        Lead::Second => (second, first),
    };

    let mut merged = Vec::with_capacity(first.len() + second.len());
    for i in 0..first.len().max(second.len()) {
        if let Some(item) = primary.get(i) {
            merged.push(item.clone());
        }
        if let Some(item) = secondary.get(i) {
            merged.push(item.clone());
        }
    }
    merged
}
