//! Property-based tests for path handling.
//!
//! The normalize and facility modules carry light property tests of their
//! own. This module runs heavier cases across separators, sanitization and
//! parent/facility interplay.

use std::borrow::Cow;

use super::facility::FacilityMatcher;
use super::normalize::Normalizer;
use super::sanitize::SegmentSanitizer;
use super::separators::Separators;
use proptest::prelude::*;

// Segments drawn from names, dots, and characters the sanitizer rewrites
fn raw_segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just(String::new()),
        "[a-z0-9_?:*|-]{1,10}",
    ]
}

fn mixed_separator_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(raw_segment_strategy(), 0..10),
        prop::collection::vec(prop_oneof![Just('/'), Just('\\')], 0..10),
        any::<bool>(),
    )
        .prop_map(|(parts, seps, leading)| {
            let mut path = String::new();
            if leading {
                path.push('/');
            }
            for (i, part) in parts.iter().enumerate() {
                path.push_str(part);
                path.push(*seps.get(i).unwrap_or(&'/'));
            }
            path
        })
}

fn absolute_dir_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,12}", 1..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Backslash and slash are interchangeable once the alternate is configured
    #[test]
    fn alternate_separator_matches_slash(path in mixed_separator_path_strategy()) {
        let windows = Normalizer::new(Separators::with_alternate('\\'));
        let slash = Normalizer::new(Separators::SLASH_ONLY);
        prop_assert_eq!(windows.normalize(&path), slash.normalize(&path.replace('\\', "/")));
    }

    // Output only ever uses `/` when an alternate is configured
    #[test]
    fn canonical_output_has_no_alternate(path in mixed_separator_path_strategy()) {
        let windows = Normalizer::new(Separators::with_alternate('\\'));
        prop_assert!(!windows.normalize(&path).contains('\\'));
    }

    // Sanitized normalization is idempotent under the same sanitizer
    #[test]
    fn sanitized_normalization_idempotent(path in mixed_separator_path_strategy()) {
        let sanitizer = SegmentSanitizer::default();
        let normalizer = Normalizer::new(Separators::with_alternate('\\'));
        let once = normalizer.normalize_with(&path, |s| sanitizer.apply(s));
        let twice = normalizer.normalize_with(&once, |s| sanitizer.apply(s));
        prop_assert_eq!(once, twice);
    }

    // The identity map and an explicit borrowing closure agree
    #[test]
    fn identity_map_equivalence(path in mixed_separator_path_strategy()) {
        let normalizer = Normalizer::new(Separators::SLASH_ONLY);
        prop_assert_eq!(
            normalizer.normalize(&path),
            normalizer.normalize_with(&path, |s| Cow::Borrowed(s))
        );
    }

    // Absoluteness and trailing separator survive normalization
    #[test]
    fn absoluteness_and_trailing_preserved(path in mixed_separator_path_strategy()) {
        let normalizer = Normalizer::new(Separators::SLASH_ONLY);
        let normalized = normalizer.normalize(&path);
        prop_assert_eq!(path.starts_with('/'), normalized.starts_with('/'));
        if path.len() > 1 && path.ends_with('/') {
            prop_assert!(normalized.ends_with('/'));
        }
    }

    // The parent of an absolute directory is always a strict prefix of it
    #[test]
    fn parent_is_prefix(dir in absolute_dir_strategy()) {
        let normalizer = Normalizer::new(Separators::SLASH_ONLY);
        let parent = normalizer.parent_of(&dir);
        prop_assert!(parent.is_some());
        let parent = parent.unwrap_or_default();
        prop_assert!(dir.starts_with(&parent));
        prop_assert!(parent.len() < dir.len());
    }

    // Facility matching between a directory and its parent holds in both orders
    #[test]
    fn facility_parent_child(dir in absolute_dir_strategy(), child in "[a-z]{1,8}") {
        let matcher = FacilityMatcher::new(Normalizer::new(Separators::SLASH_ONLY));
        let nested = format!("{dir}/{child}");
        prop_assert!(matcher.is_same_facility(&dir, &nested));
        prop_assert!(matcher.is_same_facility(&nested, &dir));
    }

    // Sibling directories under a common parent never match
    #[test]
    fn facility_siblings_unrelated(
        dir in absolute_dir_strategy(),
        left in "[a-m]{1,8}",
        right in "[n-z]{1,8}",
    ) {
        let matcher = FacilityMatcher::new(Normalizer::new(Separators::SLASH_ONLY));
        let a = format!("{dir}/{left}");
        let b = format!("{dir}/{right}");
        prop_assert!(!matcher.is_same_facility(&a, &b));
    }
}
