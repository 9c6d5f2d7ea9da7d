//! Property-based tests for path containment.
//!
//! The normalize module carries its own property tests for lexical
//! resolution. This module focuses on the containment rule.

use super::containment::{make_relative, to_slash_string};
use super::relationship::PathRelationship;
use proptest::prelude::*;
use std::path::PathBuf;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..6)
        .prop_map(|parts| parts.iter().collect::<PathBuf>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Stripping the root from an absolute path under it, then joining, gives it back
    #[test]
    fn absolute_under_root_round_trips(root in absolute_path_strategy(), rel in relative_path_strategy()) {
        let absolute = root.join(&rel);
        let stored = make_relative(&root, &absolute).unwrap();
        prop_assert_eq!(&stored, &rel);
        prop_assert_eq!(root.join(stored), absolute);
    }

    // Relative paths without dots are stored unchanged
    #[test]
    fn clean_relative_is_unchanged(root in absolute_path_strategy(), rel in relative_path_strategy()) {
        prop_assert_eq!(make_relative(&root, &rel).unwrap(), rel);
    }

    // Paths that are not strictly beneath the root are always rejected
    #[test]
    fn unrelated_absolute_is_rejected(root in absolute_path_strategy(), other in absolute_path_strategy()) {
        let rel = PathRelationship::between(&other, &root);
        let result = make_relative(&root, &other);
        if rel == PathRelationship::Descendant {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }

    // Climbing out with a leading ".." is always rejected
    #[test]
    fn leading_parent_is_rejected(root in absolute_path_strategy(), rel in relative_path_strategy()) {
        let escaping = PathBuf::from("..").join(rel);
        prop_assert!(make_relative(&root, &escaping).is_err());
    }

    // Slash rendering has one segment per component
    #[test]
    fn slash_string_segments(rel in relative_path_strategy()) {
        let rendered = to_slash_string(&rel);
        prop_assert_eq!(rendered.split('/').count(), rel.components().count());
    }
}
