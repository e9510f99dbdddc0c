//! Property-based tests for echovault
//!
//! These tests verify invariants that must hold for all inputs:
//! - Classification is total and deterministic
//! - Matching ignores case
//! - History stays bounded and chronological
//!
//! Run with: cargo test --test property_tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap()
}

// ============================================================================
// CLASSIFIER TESTS
// ============================================================================

mod classifier_tests {
    use super::*;
    use echovault::MoodClassifier;

    proptest! {
        /// Invariant: any input yields a lexicon emotion, bounded intensity and keywords
        #[test]
        fn total_and_well_formed(s in "\\PC{0,600}") {
            let classifier = MoodClassifier::default();
            let mood = classifier.classify(&s, fixed_now());

            let def = classifier.lexicon().get(&mood.emotion);
            prop_assert!(def.is_some());
            prop_assert_eq!(&def.unwrap().color, &mood.color);
            prop_assert!((0.0..=1.0).contains(&mood.intensity));
            prop_assert!(!mood.keywords.is_empty());
        }

        /// Invariant: same text and time give identical results
        #[test]
        fn deterministic(s in "\\PC{0,200}") {
            let classifier = MoodClassifier::default();
            prop_assert_eq!(
                classifier.classify(&s, fixed_now()),
                classifier.classify(&s, fixed_now())
            );
        }

        /// Invariant: ASCII case never changes the classification
        #[test]
        fn case_insensitive(s in "[a-zA-Z ]{0,120}") {
            let classifier = MoodClassifier::default();
            prop_assert_eq!(
                classifier.classify(&s.to_uppercase(), fixed_now()),
                classifier.classify(&s.to_lowercase(), fixed_now())
            );
        }

        /// Invariant: reported keywords all occur in the input
        #[test]
        fn keywords_come_from_input(s in "(happy|sad|mad|zen|miss|hope|love|scared|[a-z ]{1,8}){0,12}") {
            let classifier = MoodClassifier::default();
            let mood = classifier.classify(&s, fixed_now());
            let lower = s.to_lowercase();
            if mood.keywords != vec![mood.emotion.clone()] {
                for keyword in &mood.keywords {
                    prop_assert!(lower.contains(keyword.as_str()));
                }
            }
        }
    }
}

// ============================================================================
// HISTORY TESTS
// ============================================================================

mod history_tests {
    use super::*;
    use echovault::{MoodClassifier, MoodHistory};

    proptest! {
        /// Invariant: history never exceeds capacity and keeps the newest entries in order
        #[test]
        fn bounded_and_ordered(count in 0usize..120, capacity in 1usize..60) {
            let classifier = MoodClassifier::default();
            let mut history = MoodHistory::with_capacity(capacity, fixed_now());

            let mut recorded = Vec::new();
            for i in 0..count {
                let mood = classifier.classify(
                    &format!("entry {}", i),
                    fixed_now() + Duration::seconds(i as i64),
                );
                history.record(mood.clone());
                recorded.push(mood);
            }

            prop_assert!(history.len() <= capacity);
            prop_assert_eq!(history.len(), count.min(capacity));
            prop_assert_eq!(history.history(), &recorded[count - history.len()..]);
            prop_assert!(history
                .history()
                .windows(2)
                .all(|w| w[0].timestamp <= w[1].timestamp));
            if let Some(last) = recorded.last() {
                prop_assert_eq!(history.current(), last);
            }
        }
    }
}
