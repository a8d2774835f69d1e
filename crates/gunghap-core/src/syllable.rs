//! Syllable decomposition
//!
//! A composed Hangul syllable encodes its components arithmetically:
//!
//! ```text
//! code = 0xAC00 + (initial × 21 + vowel) × 28 + final
//! ```
//!
//! Decomposition inverts that formula. Anything that is not exactly one
//! composed syllable decomposes to [`Decomposition::Invalid`] instead of
//! failing; callers pattern-match on the result.

use serde::{Deserialize, Serialize};

use crate::stroke::{strokes, ComponentKind};
use crate::types::constants::{
    FINAL_SLOTS, HANGUL_BASE, HANGUL_LAST, INITIAL_COUNT, SYLLABLES_PER_INITIAL, VOWEL_COUNT,
};

/// Component indices of one composed syllable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyllableComponents {
    /// Initial consonant (0..19)
    pub initial: usize,

    /// Vowel (0..21)
    pub vowel: usize,

    /// Final consonant slot (0..28), 0 meaning none
    pub final_slot: usize,
}

impl SyllableComponents {
    /// Index of the given component
    pub fn index(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Initial => self.initial,
            ComponentKind::Vowel => self.vowel,
            ComponentKind::Final => self.final_slot,
        }
    }

    /// Stroke count of the given component, if the table has one
    pub fn strokes(&self, kind: ComponentKind) -> Option<u8> {
        strokes(kind, self.index(kind))
    }

    /// Sum of the three component stroke counts
    ///
    /// `None` as soon as any component lacks a stroke count; such a syllable
    /// contributes nothing to a stroke sequence.
    pub fn stroke_total(&self) -> Option<u32> {
        ComponentKind::ALL
            .iter()
            .map(|&kind| self.strokes(kind).map(u32::from))
            .sum()
    }

    /// Recompose the syllable, `None` if any index is outside the scheme
    pub fn compose(&self) -> Option<char> {
        if self.initial >= INITIAL_COUNT
            || self.vowel >= VOWEL_COUNT
            || self.final_slot >= FINAL_SLOTS
        {
            return None;
        }
        let offset = self.initial as u32 * SYLLABLES_PER_INITIAL
            + (self.vowel * FINAL_SLOTS + self.final_slot) as u32;
        char::from_u32(HANGUL_BASE + offset)
    }
}

/// Outcome of decomposing one grapheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Decomposition {
    /// A composed syllable
    Valid(SyllableComponents),

    /// Not exactly one composed syllable
    Invalid,
}

impl Decomposition {
    /// Get the components, if valid
    pub fn components(&self) -> Option<SyllableComponents> {
        match self {
            Self::Valid(components) => Some(*components),
            Self::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Stroke total, `None` for invalid input or missing table entries
    pub fn stroke_total(&self) -> Option<u32> {
        self.components().and_then(|c| c.stroke_total())
    }
}

/// Check whether a character is a composed Hangul syllable
pub fn is_composed_syllable(c: char) -> bool {
    (HANGUL_BASE..=HANGUL_LAST).contains(&(c as u32))
}

/// Decompose a grapheme that should be exactly one composed syllable
pub fn decompose(grapheme: &str) -> Decomposition {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => decompose_char(c),
        _ => Decomposition::Invalid,
    }
}

/// Decompose a single character
pub fn decompose_char(c: char) -> Decomposition {
    if !is_composed_syllable(c) {
        return Decomposition::Invalid;
    }

    let offset = c as u32 - HANGUL_BASE;
    let final_slots = FINAL_SLOTS as u32;

    Decomposition::Valid(SyllableComponents {
        initial: (offset / SYLLABLES_PER_INITIAL) as usize,
        vowel: ((offset % SYLLABLES_PER_INITIAL) / final_slots) as usize,
        final_slot: (offset % final_slots) as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(initial: usize, vowel: usize, final_slot: usize) -> Decomposition {
        Decomposition::Valid(SyllableComponents {
            initial,
            vowel,
            final_slot,
        })
    }

    #[test]
    fn test_decompose_first_syllable() {
        assert_eq!(decompose("가"), components(0, 0, 0));
        assert_eq!(decompose("가").stroke_total(), Some(3));
    }

    #[test]
    fn test_decompose_with_final() {
        // ㄱ + ㅣ + ㅁ
        assert_eq!(decompose("김"), components(0, 20, 16));
        assert_eq!(decompose("김").stroke_total(), Some(1 + 1 + 4));

        // ㄱ + ㅏ + ㄱ
        assert_eq!(decompose("각"), components(0, 0, 1));
        assert_eq!(decompose("각").stroke_total(), Some(4));
    }

    #[test]
    fn test_decompose_last_syllable() {
        let result = decompose("힣");
        assert_eq!(result, components(18, 20, 27));
        // final ㅎ has no stroke entry
        assert!(result.is_valid());
        assert_eq!(result.stroke_total(), None);
    }

    #[test]
    fn test_not_single_grapheme() {
        assert_eq!(decompose(""), Decomposition::Invalid);
        assert_eq!(decompose("김철"), Decomposition::Invalid);
    }

    #[test]
    fn test_outside_syllable_block() {
        assert_eq!(decompose("a"), Decomposition::Invalid);
        assert_eq!(decompose(" "), Decomposition::Invalid);
        // compatibility jamo, not a composed syllable
        assert_eq!(decompose("ㄱ"), Decomposition::Invalid);
        assert_eq!(decompose_char('\u{D7A4}'), Decomposition::Invalid);
        assert_eq!(Decomposition::Invalid.stroke_total(), None);
    }

    #[test]
    fn test_compose() {
        let parts = decompose("철").components().unwrap();
        assert_eq!(parts.compose(), Some('철'));

        let out_of_scheme = SyllableComponents {
            initial: 19,
            vowel: 0,
            final_slot: 0,
        };
        assert_eq!(out_of_scheme.compose(), None);
    }

    #[test]
    fn test_decomposition_serialization() {
        let json = serde_json::to_value(decompose("가")).unwrap();
        assert_eq!(json["status"], "valid");
        assert_eq!(json["final_slot"], 0);

        let json = serde_json::to_value(Decomposition::Invalid).unwrap();
        assert_eq!(json["status"], "invalid");
    }
}
