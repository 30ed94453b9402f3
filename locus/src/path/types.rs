//! Core types for path handling.
//!
//! This module defines the location kind discriminator and the canonical
//! path produced by resolution.

use std::fmt;

/// Kinds of locations that can be found on a filesystem.
///
/// The kind decides how a path is validated: folders always carry exactly
/// one trailing separator and an empty folder path means the current
/// directory, while an empty file path is an error.
///
/// # Examples
///
/// ```
/// use locus::LocationKind;
///
/// assert_eq!(LocationKind::Folder.to_string(), "folder");
/// assert_ne!(LocationKind::File, LocationKind::Folder);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    /// A file can be found at the location.
    File,
    /// A folder can be found at the location.
    Folder,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

/// A path that has been normalized and checked against the filesystem.
///
/// Canonical paths are absolute, free of `..` and `.` segments and of a
/// leading `~`. Folder paths end with exactly one `/`; file paths never do.
/// At the time of resolution an entry of the matching kind existed.
///
/// Values are only produced by [`PathResolver`](crate::path::PathResolver)
/// or, in debug builds, by the fixture constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPath {
    path: String,
    kind: LocationKind,
}

impl CanonicalPath {
    pub(crate) fn new(path: String, kind: LocationKind) -> Self {
        Self { path, kind }
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Get the kind this path was resolved for.
    #[must_use]
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    /// Replace the stored path after a successful rename or move.
    pub(crate) fn relocate(&mut self, new_path: &str) {
        self.path = match self.kind {
            LocationKind::File => new_path.to_string(),
            LocationKind::Folder => super::normalize::with_trailing_separator(new_path),
        };
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relocate_folder_keeps_trailing_separator() {
        let mut path = CanonicalPath::new("/a/b/".to_string(), LocationKind::Folder);
        path.relocate("/a/c");
        assert_eq!(path.as_str(), "/a/c/");

        path.relocate("/a/d/");
        assert_eq!(path.as_str(), "/a/d/");
    }

    #[test]
    fn test_relocate_file_takes_path_verbatim() {
        let mut path = CanonicalPath::new("/a/b.txt".to_string(), LocationKind::File);
        path.relocate("/a/c.txt");
        assert_eq!(path.as_str(), "/a/c.txt");
        assert_eq!(path.kind(), LocationKind::File);
    }
}
