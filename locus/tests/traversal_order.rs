//! Integration tests for folder traversal on the real filesystem.
//!
//! Verifies ordering, hidden-entry filtering, recursion order and the
//! derived sequence operations.

mod common;

use common::TestTree;
use locus::{File, Folder, Location};

#[test]
fn test_names_sorted_byte_wise() {
    let tree = TestTree::new();
    tree.file("b", "").file("a", "").file("C", "");

    assert_eq!(tree.root().files_sequence().names(), vec!["C", "a", "b"]);
}

#[test]
fn test_hidden_files_need_opt_in() {
    let tree = TestTree::new();
    tree.file(".gitignore", "target/").file("Cargo.toml", "");

    let root = tree.root();
    let files = root.files_sequence();
    assert_eq!(files.names(), vec!["Cargo.toml"]);

    let with_hidden = files.including_hidden();
    assert_eq!(with_hidden.names(), vec![".gitignore", "Cargo.toml"]);
    assert!(with_hidden.includes_hidden());
}

#[test]
fn test_recursive_direct_children_first() {
    let tree = TestTree::new();
    tree.file("b", "").file("C/d", "");

    let root = tree.root();
    assert_eq!(root.files_sequence().names(), vec!["b"]);
    assert_eq!(root.files_sequence().recursive().names(), vec!["b", "d"]);
}

#[test]
fn test_recursive_subtrees_in_discovery_order() {
    let tree = TestTree::new();
    tree.file("top", "")
        .file("a/a1", "")
        .file("a/deep/d1", "")
        .file("b/b1", "");

    let root = tree.root();
    let paths: Vec<String> = root
        .files_sequence()
        .recursive()
        .iter()
        .map(|file| file.path_relative_to(&root))
        .collect();
    assert_eq!(paths, vec!["top", "a/a1", "a/deep/d1", "b/b1"]);

    let folders: Vec<String> = root
        .subfolders()
        .recursive()
        .iter()
        .map(|folder| folder.path_relative_to(&root))
        .collect();
    assert_eq!(folders, vec!["a", "b", "a/deep"]);
}

#[test]
fn test_hidden_folders_not_descended_by_default() {
    let tree = TestTree::new();
    tree.file(".git/HEAD", "ref").file("src/lib.rs", "");

    let root = tree.root();
    assert_eq!(root.files_sequence().recursive().names(), vec!["lib.rs"]);
    assert_eq!(
        root.files_sequence().recursive().including_hidden().names(),
        vec!["HEAD", "lib.rs"]
    );
}

#[test]
fn test_first_and_last() {
    let tree = TestTree::new();
    tree.file("m", "").file("z", "").file("a", "").folder("zz");

    let files = tree.root().files_sequence();
    assert_eq!(files.first().map(|f| f.name().to_string()), Some("a".into()));
    assert_eq!(files.last().map(|f| f.name().to_string()), Some("z".into()));
    assert_eq!(files.count(), 3);

    let empty = TestTree::new();
    assert!(empty.root().files_sequence().first().is_none());
    assert!(empty.root().files_sequence().last().is_none());
}

#[test]
fn test_sequences_reflect_disk_each_time() {
    let tree = TestTree::new();
    tree.file("one", "");

    let files = tree.root().files_sequence();
    assert_eq!(files.count(), 1);

    tree.file("two", "");
    assert_eq!(files.count(), 2);
}

#[test]
fn test_sequence_move_and_delete() {
    let tree = TestTree::new();
    tree.file("src/a.txt", "a").file("src/b.txt", "b").folder("dst");

    let root = tree.root();
    let src = root.subfolder("src").unwrap();
    let dst = root.subfolder("dst").unwrap();

    src.files_sequence().move_to(&dst).unwrap();
    assert!(src.files_sequence().first().is_none());
    assert_eq!(dst.files_sequence().names(), vec!["a.txt", "b.txt"]);

    dst.files_sequence().delete().unwrap();
    assert!(dst.is_empty(true));
}

#[test]
fn test_move_stops_at_first_conflict() {
    let tree = TestTree::new();
    tree.file("src/a", "new").file("src/b", "new").file("dst/a", "old");

    let root = tree.root();
    let src = root.subfolder("src").unwrap();
    let dst = root.subfolder("dst").unwrap();

    assert!(src.files_sequence().move_to(&dst).is_err());
    // "a" conflicted first, so "b" was never attempted.
    assert_eq!(src.files_sequence().names(), vec!["a", "b"]);
    assert_eq!(dst.file("a").unwrap().read_to_string().unwrap(), "old");
}

#[test]
fn test_files_lists_eagerly() {
    let tree = TestTree::new();
    tree.file("x.rs", "").file("y.rs", "");

    let files: Vec<File> = tree.root().files();
    let names: Vec<&str> = files.iter().map(Location::name).collect();
    assert_eq!(names, vec!["x.rs", "y.rs"]);
}

#[test]
fn test_for_loop_over_sequence() {
    let tree = TestTree::new();
    tree.folder("one").folder("two");

    let mut seen = Vec::new();
    for folder in &tree.root().subfolders() {
        seen.push(folder.name().to_string());
    }
    assert_eq!(seen, vec!["one", "two"]);

    let owned: Vec<Folder> = tree.root().subfolders().into_iter().collect();
    assert_eq!(owned.len(), 2);
}
