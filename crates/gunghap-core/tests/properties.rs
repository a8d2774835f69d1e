//! Property tests for decomposition, reduction and scoring

use gunghap_core::prelude::*;
use gunghap_core::types::constants::{FINAL_SLOTS, HANGUL_BASE, HANGUL_LAST};
use gunghap_core::{interleave, score, ComponentKind};
use proptest::prelude::*;

fn syllable() -> impl Strategy<Value = char> {
    (HANGUL_BASE..=HANGUL_LAST).prop_map(|code| char::from_u32(code).unwrap())
}

fn digits(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..10, 0..max_len)
}

proptest! {
    #[test]
    fn decomposition_stays_in_bounds(c in syllable()) {
        let parts = decompose(&c.to_string()).components().unwrap();

        prop_assert!(parts.initial < ComponentKind::Initial.table().len());
        prop_assert!(parts.vowel < ComponentKind::Vowel.table().len());
        prop_assert!(parts.final_slot < FINAL_SLOTS);
        prop_assert_eq!(parts.compose(), Some(c));
    }

    #[test]
    fn stroke_total_is_component_sum(c in syllable()) {
        let parts = decompose(&c.to_string()).components().unwrap();
        let sum: Option<u32> = ComponentKind::ALL
            .iter()
            .map(|&kind| parts.strokes(kind).map(u32::from))
            .sum();

        prop_assert_eq!(parts.stroke_total(), sum);
        if parts.final_slot < ComponentKind::Final.table().len() {
            prop_assert!(sum.is_some());
        }
    }

    #[test]
    fn multi_character_input_is_invalid(text in "\\PC{2,6}") {
        prop_assert_eq!(decompose(&text), Decomposition::Invalid);
    }

    #[test]
    fn interleave_keeps_every_element(a in digits(12), b in digits(12), second in any::<bool>()) {
        let merged = interleave(&a, &b, Lead::from(second));
        prop_assert_eq!(merged.len(), a.len() + b.len());

        let mut sorted_merged = merged.clone();
        let mut sorted_inputs: Vec<u8> = a.iter().chain(b.iter()).copied().collect();
        sorted_merged.sort_unstable();
        sorted_inputs.sort_unstable();
        prop_assert_eq!(sorted_merged, sorted_inputs);
    }

    #[test]
    fn ladder_rows_shrink_by_one(seq in digits(24)) {
        let ladder = ReductionLadder::reduce(&seq);

        if seq.len() < 2 {
            prop_assert!(ladder.is_empty());
        } else {
            prop_assert_eq!(&ladder.rows()[0], &seq);
            prop_assert_eq!(ladder.len(), seq.len() - 1);
            for pair in ladder.rows().windows(2) {
                prop_assert_eq!(pair[1].len(), pair[0].len() - 1);
            }
            prop_assert_eq!(ladder.last_row().map(<[u8]>::len), Some(2));
        }
    }

    #[test]
    fn score_is_bounded(seq in digits(24)) {
        let value = score(&ReductionLadder::reduce(&seq));
        prop_assert!(value <= 100);
    }

    #[test]
    fn compatibility_is_deterministic(
        a in prop::collection::vec(syllable(), 2..6),
        b in prop::collection::vec(syllable(), 2..6),
    ) {
        let first = Name::from_syllables(a);
        let second = Name::from_syllables(b);
        prop_assert_eq!(
            compute_compatibility(&first, &second),
            compute_compatibility(&first, &second)
        );
    }
}
