//! Path resolution against a host filesystem.
//!
//! This module provides the `PathResolver` type, which turns user-supplied
//! path strings into [`CanonicalPath`]s.

use crate::error::{Error, ResolutionReason, Result};
use crate::fs::FileSystem;
use crate::path::normalize;
use crate::path::types::{CanonicalPath, LocationKind};

/// Prefix of the synthesized file paths used by debug fixtures.
#[cfg(debug_assertions)]
pub const DEBUG_FILE_PREFIX: &str = "debug-file";

/// Prefix of the synthesized folder paths used by debug fixtures.
#[cfg(debug_assertions)]
pub const DEBUG_FOLDER_PREFIX: &str = "debug-folder";

/// Resolves raw path strings into canonical paths.
///
/// Resolution runs these steps in order:
/// 1. An empty folder path means the current working directory; an empty
///    file path is rejected.
/// 2. Folder paths get exactly one trailing separator.
/// 3. A leading `~` is replaced by the home directory.
/// 4. Relative paths are anchored at the current working directory and `.`
///    segments are dropped.
/// 5. Each left-most `../` is replaced by the parent of the folder in front
///    of it. That parent must exist.
/// 6. An entry of the requested kind must exist at the final path.
///
/// In debug builds, paths starting with [`DEBUG_FILE_PREFIX`] or
/// [`DEBUG_FOLDER_PREFIX`] are accepted as-is.
///
/// # Examples
///
/// ```no_run
/// use locus::fs::OsFileSystem;
/// use locus::path::PathResolver;
/// use locus::LocationKind;
///
/// let fs = OsFileSystem;
/// let resolver = PathResolver::new(&fs);
///
/// let root = resolver.resolve("/tmp/..", LocationKind::Folder).unwrap();
/// assert_eq!(root.as_str(), "/");
/// ```
#[derive(Clone, Copy)]
pub struct PathResolver<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> PathResolver<'a> {
    /// Create a resolver that checks existence on `fs`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Resolve `raw` into a canonical path for a location of `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A file path is empty ([`ResolutionReason::EmptyPath`])
    /// - The path starts with `~` and the home directory is unknown
    /// - The path is relative and the working directory is unavailable
    /// - A computed parent folder or the final location does not exist
    ///   ([`ResolutionReason::MissingLocation`])
    pub fn resolve(&self, raw: &str, kind: LocationKind) -> Result<CanonicalPath> {
        #[cfg(debug_assertions)]
        if let Some(fixture) = Self::debug_fixture(raw, kind) {
            return Ok(fixture);
        }

        let path = match kind {
            LocationKind::Folder if raw.is_empty() => self.fs.current_dir()?,
            LocationKind::File if raw.is_empty() => {
                return Err(Error::resolution(raw, ResolutionReason::EmptyPath));
            }
            _ => raw.to_string(),
        };

        let path = match kind {
            LocationKind::Folder => normalize::with_trailing_separator(&path),
            LocationKind::File => path,
        };

        let path = normalize::expand_tilde(&path, || self.fs.home_dir())?;
        let path = normalize::make_absolute(&path, || self.fs.current_dir())?;
        let path = normalize::strip_current_dir_segments(&path);
        let path = self.resolve_parent_references(path)?;

        if !self.fs.exists(&path, kind) {
            log::trace!("No {kind} at {path}");
            return Err(Error::missing(path));
        }

        Ok(CanonicalPath::new(path, kind))
    }

    /// Resolve `raw` as a file path.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_file(&self, raw: &str) -> Result<CanonicalPath> {
        self.resolve(raw, LocationKind::File)
    }

    /// Resolve `raw` as a folder path.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_folder(&self, raw: &str) -> Result<CanonicalPath> {
        self.resolve(raw, LocationKind::Folder)
    }

    /// Replace `../` segments left to right until none remain.
    ///
    /// Every pass removes one reference, so this terminates after at most
    /// as many passes as the path has segments.
    fn resolve_parent_references(&self, mut path: String) -> Result<String> {
        while let Some((folder, rest)) = normalize::split_at_parent_reference(&path) {
            let parent = normalize::parent_path(folder).unwrap_or_else(|| "/".to_string());
            if !self.fs.exists(&parent, LocationKind::Folder) {
                log::trace!("Parent {parent} of {folder} does not exist");
                return Err(Error::missing(parent));
            }
            path = format!("{parent}{rest}");
        }
        Ok(path)
    }

    #[cfg(debug_assertions)]
    fn debug_fixture(raw: &str, kind: LocationKind) -> Option<CanonicalPath> {
        if !raw.starts_with(DEBUG_FILE_PREFIX) && !raw.starts_with(DEBUG_FOLDER_PREFIX) {
            return None;
        }
        let path = match kind {
            LocationKind::File => raw.to_string(),
            LocationKind::Folder => normalize::with_trailing_separator(raw),
        };
        Some(CanonicalPath::new(path, kind))
    }
}

impl std::fmt::Debug for PathResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathResolver").finish_non_exhaustive()
    }
}
