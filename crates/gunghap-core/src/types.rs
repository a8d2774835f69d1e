//! Core type definitions for Gunghap
//!
//! A [`Name`] is the unit every stage of the pipeline works on: an ordered run
//! of syllables, one `char` each. Every composed Hangul syllable is a single
//! Unicode scalar value, so a `char` is a whole grapheme for the supported
//! script.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name - An ordered sequence of syllables
///
/// Construction never fails; characters outside the composed-syllable block
/// are carried along and degrade gracefully during decomposition.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Name {
    syllables: Vec<char>,
}

impl Name {
    /// Create a name from text, one syllable per character
    pub fn new(text: &str) -> Self {
        Self {
            syllables: text.chars().collect(),
        }
    }

    /// Create a name from already separated syllables
    pub fn from_syllables(syllables: Vec<char>) -> Self {
        Self { syllables }
    }

    /// Get the syllables
    pub fn syllables(&self) -> &[char] {
        &self.syllables
    }

    /// Iterate over the syllables in order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.syllables.iter().copied()
    }

    /// Number of syllables
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.to_string())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for syllable in &self.syllables {
            write!(f, "{}", syllable)?;
        }
        Ok(())
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Name {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.syllables.into_iter().collect()
    }
}

/// Constants of the Hangul composition scheme and the scoring rules
pub mod constants {
    /// First composed syllable (가)
    pub const HANGUL_BASE: u32 = 0xAC00;

    /// Last composed syllable (힣)
    pub const HANGUL_LAST: u32 = 0xD7A3;

    /// Distinct initial consonants
    pub const INITIAL_COUNT: usize = 19;

    /// Distinct vowels
    pub const VOWEL_COUNT: usize = 21;

    /// Final consonant slots, slot 0 being "no final consonant"
    pub const FINAL_SLOTS: usize = 28;

    /// Code points sharing one initial consonant
    pub const SYLLABLES_PER_INITIAL: u32 = (VOWEL_COUNT * FINAL_SLOTS) as u32;

    /// Upper bound of a compatibility score
    pub const MAX_SCORE: u8 = 100;

    /// Ladder reduction stops once a row is this short
    pub const LADDER_FLOOR: usize = 2;
}
