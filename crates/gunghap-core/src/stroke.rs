//! Stroke tables - Fixed weights for each syllable component
//!
//! A composed syllable is an initial consonant, a vowel and an optional final
//! consonant. Each component kind has its own table indexed by the position
//! of the component in the composition scheme.
//!
//! The final table holds 27 entries while the scheme has 28 final slots: the
//! last final consonant (ㅎ, slot 27) has no stroke count. Lookups past the
//! end of a table return `None`.

use serde::{Deserialize, Serialize};

/// Initial consonants ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
pub const INITIAL_STROKES: [u8; 19] = [1, 2, 1, 2, 4, 3, 3, 4, 8, 2, 4, 1, 2, 4, 3, 2, 3, 4, 3];

/// Vowels ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
pub const VOWEL_STROKES: [u8; 21] = [2, 3, 3, 4, 2, 3, 3, 4, 2, 4, 5, 3, 3, 2, 4, 5, 3, 3, 1, 2, 1];

/// Final slots, starting with "none" (0 strokes)
pub const FINAL_STROKES: [u8; 27] = [
    0, 1, 2, 3, 1, 3, 4, 2, 3, 4, 7, 5, 6, 7, 6, 3, 4, 6, 2, 4, 1, 2, 3, 2, 3, 4, 3,
];

/// Component of a composed syllable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Initial,
    Vowel,
    Final,
}

impl ComponentKind {
    /// All kinds, in composition order
    pub const ALL: [ComponentKind; 3] = [Self::Initial, Self::Vowel, Self::Final];

    /// Stroke table for this kind
    pub fn table(&self) -> &'static [u8] {
        match self {
            Self::Initial => &INITIAL_STROKES,
            Self::Vowel => &VOWEL_STROKES,
            Self::Final => &FINAL_STROKES,
        }
    }
}

/// Look up the stroke count of a component
///
/// Returns `None` when `index` has no entry in the table.
pub fn strokes(kind: ComponentKind, index: usize) -> Option<u8> {
    kind.table().get(index).copied()
}
