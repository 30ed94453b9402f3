//! Path string normalization.
//!
//! Canonical paths are plain `/`-separated strings. This module holds the
//! purely lexical steps of resolution:
//! - Expanding a leading `~` to the home directory
//! - Anchoring relative paths at the current directory
//! - Dropping `.` segments and duplicate separators
//! - Trailing separator handling and parent path derivation
//!
//! Nothing here touches the filesystem; the existence checks live in
//! [`PathResolver`](super::PathResolver).

use std::io;

use crate::error::{Error, Result};

/// The path separator used by canonical paths.
pub const SEPARATOR: char = '/';

/// A `..` segment together with the separators around it.
const PARENT_SEGMENT: &str = "/../";

/// Ensure `path` ends with exactly one separator.
///
/// # Examples
///
/// ```
/// use locus::path::normalize::with_trailing_separator;
///
/// assert_eq!(with_trailing_separator("/a/b"), "/a/b/");
/// assert_eq!(with_trailing_separator("/a/b//"), "/a/b/");
/// assert_eq!(with_trailing_separator("/"), "/");
/// ```
#[must_use]
pub fn with_trailing_separator(path: &str) -> String {
    let mut result = path.trim_end_matches(SEPARATOR).to_string();
    result.push(SEPARATOR);
    result
}

/// Remove a single trailing separator, if present.
#[must_use]
pub fn without_trailing_separator(path: &str) -> &str {
    path.strip_suffix(SEPARATOR).unwrap_or(path)
}

/// Remove a single leading separator, if present.
#[must_use]
pub fn without_leading_separator(path: &str) -> &str {
    path.strip_prefix(SEPARATOR).unwrap_or(path)
}

/// Append `suffix` unless `value` already ends with it.
#[must_use]
pub fn with_suffix(value: &str, suffix: &str) -> String {
    if value.ends_with(suffix) {
        value.to_string()
    } else {
        format!("{value}{suffix}")
    }
}

/// Expand a leading `~` to the home directory.
///
/// Only `~` and `~/...` are expanded. A name such as `~user` is left
/// untouched and later treated as a relative entry name.
///
/// # Errors
///
/// Returns [`Error::HomeDirectoryUnresolved`] if expansion is needed but
/// `home` yields nothing.
///
/// # Examples
///
/// ```
/// use locus::path::normalize::expand_tilde;
///
/// let home = || Some("/home/me".to_string());
/// assert_eq!(expand_tilde("~/notes", home).unwrap(), "/home/me/notes");
/// assert_eq!(expand_tilde("~", home).unwrap(), "/home/me");
/// assert_eq!(expand_tilde("/abs", home).unwrap(), "/abs");
/// ```
pub fn expand_tilde(path: &str, home: impl FnOnce() -> Option<String>) -> Result<String> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(SEPARATOR) => rest,
        _ => return Ok(path.to_string()),
    };

    let home = home().ok_or_else(|| Error::HomeDirectoryUnresolved {
        path: path.to_string(),
    })?;

    Ok(format!("{}{rest}", home.trim_end_matches(SEPARATOR)))
}

/// Anchor a relative path at the directory returned by `cwd`.
///
/// # Errors
///
/// Returns an I/O error if the path is relative and the current directory
/// cannot be determined.
pub fn make_absolute(path: &str, cwd: impl FnOnce() -> io::Result<String>) -> Result<String> {
    if path.starts_with(SEPARATOR) {
        return Ok(path.to_string());
    }
    let cwd = cwd()?;
    Ok(format!("{}{path}", with_trailing_separator(&cwd)))
}

/// Drop `.` segments and collapse repeated separators.
///
/// `..` segments are kept; they need the filesystem to resolve. A trailing
/// separator survives if the input had one.
///
/// # Examples
///
/// ```
/// use locus::path::normalize::strip_current_dir_segments;
///
/// assert_eq!(strip_current_dir_segments("/a/./b//c/"), "/a/b/c/");
/// assert_eq!(strip_current_dir_segments("/a/../b"), "/a/../b");
/// assert_eq!(strip_current_dir_segments("/./"), "/");
/// ```
#[must_use]
pub fn strip_current_dir_segments(path: &str) -> String {
    let absolute = path.starts_with(SEPARATOR);
    let trailing = path.ends_with(SEPARATOR) || path.ends_with("/.");
    let segments: Vec<&str> = path
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    let mut result = String::with_capacity(path.len());
    if absolute {
        result.push(SEPARATOR);
    }
    result.push_str(&segments.join("/"));
    if trailing && !segments.is_empty() {
        result.push(SEPARATOR);
    }
    result
}

/// Split an absolute `path` around its left-most `../` segment.
///
/// Returns the folder path preceding the segment (with its trailing
/// separator) and everything after it. Names that merely end in `..`, such
/// as `a..`, are not parent references.
#[must_use]
pub fn split_at_parent_reference(path: &str) -> Option<(&str, &str)> {
    path.find(PARENT_SEGMENT)
        .map(|index| (&path[..=index], &path[index + PARENT_SEGMENT.len()..]))
}

/// The folder path containing `path`, with a trailing separator.
///
/// Returns `None` for the root folder.
///
/// # Examples
///
/// ```
/// use locus::path::normalize::parent_path;
///
/// assert_eq!(parent_path("/a/b/c.txt").as_deref(), Some("/a/b/"));
/// assert_eq!(parent_path("/a/b/").as_deref(), Some("/a/"));
/// assert_eq!(parent_path("/a").as_deref(), Some("/"));
/// assert_eq!(parent_path("/"), None);
/// ```
#[must_use]
pub fn parent_path(path: &str) -> Option<String> {
    if path == "/" {
        return None;
    }

    let components: Vec<&str> = path.split(SEPARATOR).filter(|c| !c.is_empty()).collect();
    match components.split_last() {
        Some((_, parents)) if !parents.is_empty() => Some(format!("/{}/", parents.join("/"))),
        _ => Some("/".to_string()),
    }
}

/// The last component of `path`; `/` for the root folder.
///
/// # Examples
///
/// ```
/// use locus::path::normalize::last_component;
///
/// assert_eq!(last_component("/a/b.txt"), "b.txt");
/// assert_eq!(last_component("/a/b/"), "b");
/// assert_eq!(last_component("/"), "/");
/// ```
#[must_use]
pub fn last_component(path: &str) -> &str {
    path.split(SEPARATOR)
        .filter(|c| !c.is_empty())
        .next_back()
        .unwrap_or(if path.starts_with(SEPARATOR) { "/" } else { "" })
}
