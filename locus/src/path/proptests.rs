//! Property-based tests for path handling.

use super::normalize::{
    last_component, parent_path, split_at_parent_reference, strip_current_dir_segments,
    with_trailing_separator,
};
use super::resolver::PathResolver;
use super::types::LocationKind;
use crate::fs::MockFileSystem;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 0..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

/// Segments that may appear in a messy user path.
fn messy_segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => component_strategy(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn messy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(messy_segment_strategy(), 1..10)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

/// A filesystem on which every folder exists.
fn permissive_fs() -> MockFileSystem {
    let mut fs = MockFileSystem::new();
    fs.expect_current_dir().returning(|| Ok("/".to_string()));
    fs.expect_home_dir().returning(|| Some("/home".to_string()));
    fs.expect_exists()
        .returning(|_, kind| kind == LocationKind::Folder);
    fs
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Trailing separator normalization is idempotent and leaves exactly one
    #[test]
    fn trailing_separator_idempotent(path in absolute_path_strategy(), extra in 0..4usize) {
        let padded = format!("{path}{}", "/".repeat(extra));
        let once = with_trailing_separator(&padded);
        prop_assert_eq!(&with_trailing_separator(&once), &once);
        prop_assert!(once.ends_with('/'));
        prop_assert!(!once.ends_with("//"));
    }

    // Dropping "." segments is idempotent and never leaves one behind
    #[test]
    fn current_dir_stripping_idempotent(path in messy_path_strategy()) {
        let once = strip_current_dir_segments(&path);
        prop_assert_eq!(&strip_current_dir_segments(&once), &once);
        prop_assert!(!once.split('/').any(|s| s == "."));
        prop_assert!(!once.contains("//"));
    }

    // The parent of a folder plus its last component rebuilds the folder
    #[test]
    fn parent_and_name_rebuild_path(path in absolute_path_strategy()) {
        let folder = with_trailing_separator(&path);
        match parent_path(&folder) {
            Some(parent) => {
                let rebuilt = format!("{parent}{}/", last_component(&folder));
                prop_assert_eq!(rebuilt, folder);
            }
            None => prop_assert_eq!(folder, "/"),
        }
    }

    // Resolved folder paths never keep a parent reference
    #[test]
    fn resolved_folders_have_no_parent_references(path in messy_path_strategy()) {
        let fs = permissive_fs();
        let resolved = PathResolver::new(&fs)
            .resolve(&path, LocationKind::Folder)
            .unwrap();

        prop_assert!(split_at_parent_reference(resolved.as_str()).is_none());
        prop_assert!(resolved.as_str().starts_with('/'));
        prop_assert!(resolved.as_str().ends_with('/'));
        prop_assert!(!resolved.as_str().ends_with("//"));
    }
}
