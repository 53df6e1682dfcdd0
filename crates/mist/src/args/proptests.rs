//! Property-based tests for the field validators

use super::validators::{float_0_1, non_negative_int, positive_int, str2bool};
use crate::error::ValueError;
use proptest::prelude::*;

fn bool_word_strategy(words: &'static [&'static str]) -> impl Strategy<Value = String> {
    (prop::sample::select(words), any::<u64>()).prop_map(|(word, mask)| {
        // Random casing of each character
        word.chars()
            .enumerate()
            .map(|(i, c)| {
                if mask >> (i % 64) & 1 == 1 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_positive_int_accepts_positive(n in 1i64..=i64::from(u32::MAX)) {
        prop_assert_eq!(positive_int(&n.to_string()), Ok(n as usize));
    }

    #[test]
    fn prop_positive_int_rejects_non_positive(n in i64::MIN..=0) {
        prop_assert!(matches!(
            positive_int(&n.to_string()),
            Err(ValueError::NotPositive(_))
        ));
    }

    #[test]
    fn prop_non_negative_int_accepts_non_negative(n in 0i64..=i64::from(u32::MAX)) {
        prop_assert_eq!(non_negative_int(&n.to_string()), Ok(n as usize));
    }

    #[test]
    fn prop_non_negative_int_rejects_negative(n in i64::MIN..0) {
        prop_assert!(matches!(
            non_negative_int(&n.to_string()),
            Err(ValueError::Negative(_))
        ));
    }

    #[test]
    fn prop_float_0_1_accepts_unit_interval(f in 0.0f64..=1.0) {
        prop_assert_eq!(float_0_1(&f.to_string()), Ok(f));
    }

    #[test]
    fn prop_float_0_1_rejects_above(f in 1.0001f64..1e12) {
        prop_assert!(matches!(
            float_0_1(&f.to_string()),
            Err(ValueError::OutOfUnitInterval(_))
        ));
    }

    #[test]
    fn prop_float_0_1_rejects_below(f in -1e12f64..-1e-9) {
        prop_assert!(matches!(
            float_0_1(&f.to_string()),
            Err(ValueError::OutOfUnitInterval(_))
        ));
    }

    #[test]
    fn prop_str2bool_true_words(word in bool_word_strategy(&["yes", "true", "t", "y", "1"])) {
        prop_assert_eq!(str2bool(&word), Ok(true));
    }

    #[test]
    fn prop_str2bool_false_words(word in bool_word_strategy(&["no", "false", "f", "n", "0"])) {
        prop_assert_eq!(str2bool(&word), Ok(false));
    }

    #[test]
    fn prop_str2bool_rejects_other_words(word in "[a-z]{2,8}") {
        prop_assume!(!["yes", "true", "no", "false"].contains(&word.as_str()));
        prop_assert!(matches!(str2bool(&word), Err(ValueError::NotABoolean(_))));
    }
}
