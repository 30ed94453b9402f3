//! The host that location handles are built through.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, ResolutionReason, Result};
use crate::fs::{FileSystem, KnownFolder, OsFileSystem};
#[cfg(debug_assertions)]
use crate::intercept::Interceptor;
use crate::location::{File, Folder, Location};
use crate::path::PathResolver;

/// A filesystem paired with the debug interceptor that overrides it.
///
/// Every [`File`] and [`Folder`] remembers the host it was resolved on and
/// performs all later disk access through it. Cloning a host is cheap and
/// clones share the same filesystem and interceptor.
///
/// # Examples
///
/// ```no_run
/// use locus::{Host, Location};
///
/// let host = Host::os();
/// let tmp = host.temporary_folder().unwrap();
/// let notes = host.folder("~/notes").unwrap();
/// assert!(tmp.path().ends_with('/'));
/// # let _ = notes;
/// ```
#[derive(Clone)]
pub struct Host {
    fs: Arc<dyn FileSystem>,
    #[cfg(debug_assertions)]
    interceptor: Arc<Interceptor>,
}

impl Host {
    /// A host backed by the real filesystem.
    #[must_use]
    pub fn os() -> Self {
        Self::new(OsFileSystem)
    }

    /// A host backed by `fs`.
    #[must_use]
    pub fn new(fs: impl FileSystem + 'static) -> Self {
        Self::from_arc(Arc::new(fs))
    }

    /// A host backed by an already shared filesystem.
    #[must_use]
    pub fn from_arc(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            #[cfg(debug_assertions)]
            interceptor: Arc::new(Interceptor::new()),
        }
    }

    /// Replace the interceptor, for example to share one between hosts.
    #[cfg(debug_assertions)]
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: Arc<Interceptor>) -> Self {
        self.interceptor = interceptor;
        self
    }

    /// The interceptor consulted by [`Folder::files`].
    #[cfg(debug_assertions)]
    #[must_use]
    pub fn interceptor(&self) -> &Arc<Interceptor> {
        &self.interceptor
    }

    /// The underlying filesystem.
    #[must_use]
    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// A resolver that validates paths against this host's filesystem.
    #[must_use]
    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(self.fs.as_ref())
    }

    /// Resolve `path` to an existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not resolve to an existing file.
    pub fn file(&self, path: &str) -> Result<File> {
        File::resolve(self, path)
    }

    /// Resolve `path` to an existing folder. An empty path is the current
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not resolve to an existing folder.
    pub fn folder(&self, path: &str) -> Result<Folder> {
        Folder::resolve(self, path)
    }

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn current_folder(&self) -> Result<Folder> {
        self.folder("")
    }

    /// The root folder, `/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the root folder cannot be found.
    pub fn root_folder(&self) -> Result<Folder> {
        self.folder("/")
    }

    /// The current user's home folder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirectoryUnresolved`] if the home directory is
    /// unknown.
    pub fn home_folder(&self) -> Result<Folder> {
        self.folder("~")
    }

    /// The system's temporary folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary folder does not exist.
    pub fn temporary_folder(&self) -> Result<Folder> {
        self.folder(&self.fs.temp_dir())
    }

    /// The first existing candidate for a well-known folder.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionReason::UnresolvedSearchPath`] if the platform
    /// offers no candidate, or a resolution error for the candidate.
    pub fn known_folder(&self, folder: KnownFolder) -> Result<Folder> {
        let candidates = self.fs.known_folder_candidates(folder);
        let first = candidates.first().ok_or_else(|| {
            Error::resolution(String::new(), ResolutionReason::UnresolvedSearchPath(folder))
        })?;
        self.folder(first)
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::os()
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_known_folder_without_candidates() {
        let mut fs = MockFileSystem::new();
        fs.expect_known_folder_candidates()
            .returning(|_| Vec::new());

        let err = Host::new(fs).known_folder(KnownFolder::Downloads).unwrap_err();
        assert_eq!(
            err.resolution_reason(),
            Some(ResolutionReason::UnresolvedSearchPath(KnownFolder::Downloads))
        );
    }

    #[test]
    fn test_known_folder_uses_first_candidate() {
        let mut fs = MockFileSystem::new();
        fs.expect_known_folder_candidates()
            .returning(|_| vec!["/home/me/Documents".to_string(), "/other".to_string()]);
        fs.expect_exists().returning(|path, _| path == "/home/me/Documents/");

        let folder = Host::new(fs).known_folder(KnownFolder::Documents).unwrap();
        assert_eq!(folder.path(), "/home/me/Documents/");
    }

    #[test]
    fn test_temporary_folder() {
        let mut fs = MockFileSystem::new();
        fs.expect_temp_dir().returning(|| "/tmp".to_string());
        fs.expect_exists().returning(|path, _| path == "/tmp/");

        assert_eq!(Host::new(fs).temporary_folder().unwrap().path(), "/tmp/");
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_clones_share_interceptor() {
        let host = Host::new(MockFileSystem::new());
        let clone = host.clone();
        assert!(Arc::ptr_eq(host.interceptor(), clone.interceptor()));
    }
}
