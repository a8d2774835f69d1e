//! Integration tests for the Gunghap scoring pipeline
//!
//! These tests drive the public API end to end, from raw text through
//! validation to the final score and its trace.

use gunghap_core::prelude::*;
use gunghap_core::{interleave, next_row, score, stroke_totals};

mod worked_examples {
    use super::*;

    #[test]
    fn test_documented_reduction() {
        let merged = interleave(&[1u8, 2, 3], &[4, 5], Lead::First);
        assert_eq!(merged, vec![1, 4, 2, 5, 3]);

        let ladder = ReductionLadder::reduce(&merged);
        assert_eq!(ladder.rows()[1], vec![5, 6, 7, 8]);
        assert_eq!(ladder.rows()[2], vec![1, 3, 5]);
        assert_eq!(ladder.rows()[3], vec![4, 8]);
        assert_eq!(score(&ladder), 48);
    }

    #[test]
    fn test_from_sequences_matches_manual_steps() {
        let first = StrokeSequence::from_values([1, 2, 3]);
        let second = StrokeSequence::from_values([4, 5]);
        let result = CompatibilityResult::from_sequences(first, second, Lead::Second);

        assert_eq!(result.interleaved, vec![4, 1, 5, 2, 3]);
        assert_eq!(result.ladder.last_row(), Some(&[4, 5][..]));
        assert_eq!(result.score, 45);
    }

    #[test]
    fn test_hong_and_seong() {
        let (first, second) =
            validate_pair("홍길동", "성춘향", &ValidationRules::default()).unwrap();
        let result = compute_compatibility(&first, &second);

        assert_eq!(result.interleaved, vec![7, 6, 5, 6, 6, 8]);
        assert_eq!(
            result.ladder.rows(),
            &[
                vec![7, 6, 5, 6, 6, 8],
                vec![3, 1, 1, 2, 4],
                vec![4, 2, 3, 6],
                vec![6, 5, 9],
                vec![1, 4],
            ]
        );
        assert_eq!(result.score, 14);
    }
}

mod invariants {
    use super::*;

    #[test]
    fn test_idempotent() {
        let a = Name::new("김철수");
        let b = Name::new("이영희");
        assert_eq!(compute_compatibility(&a, &b), compute_compatibility(&a, &b));
    }

    #[test]
    fn test_each_row_one_shorter() {
        let result = compute_compatibility(&Name::new("남궁민수"), &Name::new("제갈영희"));
        let rows = result.ladder.rows();

        assert_eq!(rows[0].len(), 8);
        for pair in rows.windows(2) {
            assert_eq!(pair[1].len(), pair[0].len() - 1);
            assert_eq!(pair[1], next_row(&pair[0]));
        }
        assert_eq!(rows.last().map(Vec::len), Some(2));
    }

    #[test]
    fn test_interleaved_length_is_sum_of_sequences() {
        let result = compute_compatibility(&Name::new("김a수"), &Name::new("이영희"));
        assert_eq!(result.first.len(), 2);
        assert_eq!(
            result.interleaved.len(),
            result.first.len() + result.second.len()
        );
        assert_eq!(result.interleaved, vec![6, 2, 4, 6, 5]);
        assert_eq!(result.score, 7);
    }

    #[test]
    fn test_breakdown_consistent_with_score_input() {
        let name = Name::new("성춘향");
        let from_display: Vec<_> = decompose_for_display(&name)
            .into_iter()
            .map(|row| row.total)
            .collect();
        assert_eq!(from_display, stroke_totals(&name));
    }
}

mod degraded_input {
    use super::*;

    #[test]
    fn test_both_names_empty() {
        let result = compute_compatibility(&Name::new(""), &Name::new(""));
        assert!(result.interleaved.is_empty());
        assert!(result.ladder.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_non_syllables_are_skipped() {
        assert_eq!(decompose("!"), Decomposition::Invalid);

        let result = compute_compatibility(&Name::new("ab"), &Name::new("cd"));
        assert_eq!(result.score, 0);
    }
}
