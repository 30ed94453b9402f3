use std::io;

use super::{location_type, File, Location, Storage};
use crate::error::{Error, MutationReason, ResolutionReason, Result};
use crate::fs::KnownFolder;
use crate::host::Host;
use crate::path::{normalize, LocationKind};
use crate::traversal::ChildSequence;

/// A handle to an existing folder.
///
/// # Examples
///
/// ```no_run
/// use locus::{Folder, Location};
///
/// let tmp = Folder::temporary().unwrap();
/// let cache = tmp.create_subfolder_if_needed("my-app/cache").unwrap();
/// cache.create_file_if_needed("index.json", || b"{}".to_vec()).unwrap();
///
/// for file in cache.files_sequence().recursive() {
///     println!("{}", file.path_relative_to(&tmp));
/// }
/// ```
#[derive(Clone)]
pub struct Folder {
    storage: Storage,
}

location_type!(Folder, LocationKind::Folder);

impl Folder {
    /// Resolve `path` on the real filesystem. An empty path is the current
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not name an existing folder.
    pub fn new(path: &str) -> Result<Self> {
        Self::resolve(&Host::os(), path)
    }

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn current() -> Result<Self> {
        Host::os().current_folder()
    }

    /// The root folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the root folder cannot be found.
    pub fn root() -> Result<Self> {
        Host::os().root_folder()
    }

    /// The current user's home folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown.
    pub fn home() -> Result<Self> {
        Host::os().home_folder()
    }

    /// The system's temporary folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary folder does not exist.
    pub fn temporary() -> Result<Self> {
        Host::os().temporary_folder()
    }

    /// A well-known per-user folder such as Documents or Downloads.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionReason::UnresolvedSearchPath`] if the platform
    /// has no such folder.
    pub fn matching(folder: KnownFolder) -> Result<Self> {
        Host::os().known_folder(folder)
    }

    /// A folder for tests that is never checked against the disk.
    ///
    /// The path is `debug-folder-<uuid>/`, and `files` is registered with
    /// the host's interceptor as the folder's file listing.
    #[cfg(debug_assertions)]
    #[must_use]
    pub fn debug_folder(host: &Host, files: Vec<File>) -> Self {
        let path = format!(
            "{}-{}/",
            crate::path::DEBUG_FOLDER_PREFIX,
            uuid::Uuid::new_v4()
        );
        host.interceptor().set(path.clone(), files);
        Self::from_storage(Storage::new(
            crate::path::CanonicalPath::new(path, LocationKind::Folder),
            host.clone(),
        ))
    }

    fn child_path(&self, at: &str) -> String {
        format!("{}{}", self.path(), normalize::without_leading_separator(at))
    }

    fn require_path(at: &str) -> Result<&str> {
        let relative = normalize::without_leading_separator(at);
        if relative.is_empty() {
            return Err(Error::resolution(at, ResolutionReason::EmptyPath));
        }
        Ok(relative)
    }

    /// The subfolder at the relative path `at`.
    ///
    /// # Errors
    ///
    /// Returns an error if no such folder exists.
    pub fn subfolder(&self, at: &str) -> Result<Folder> {
        Folder::resolve(self.host(), &self.child_path(at))
    }

    /// The file at the relative path `at`.
    ///
    /// # Errors
    ///
    /// Returns an error if no such file exists.
    pub fn file(&self, at: &str) -> Result<File> {
        File::resolve(self.host(), &self.child_path(at))
    }

    /// Whether a folder exists at the relative path `at`.
    #[must_use]
    pub fn contains_subfolder(&self, at: &str) -> bool {
        self.subfolder(at).is_ok()
    }

    /// Whether a file exists at the relative path `at`.
    #[must_use]
    pub fn contains_file(&self, at: &str) -> bool {
        self.file(at).is_ok()
    }

    /// Whether `location` is a direct child of this folder that still
    /// exists.
    #[must_use]
    pub fn contains<L: Location>(&self, location: &L) -> bool {
        normalize::parent_path(location.path()).as_deref() == Some(self.path())
            && self.host().fs().exists(location.path(), L::KIND)
    }

    /// Create a new subfolder at the relative path `at`, creating any
    /// intermediate folders.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionReason::EmptyPath`] for an empty path, or
    /// [`MutationReason::FolderCreationFailed`] if something already exists
    /// at `at` or the host refuses.
    pub fn create_subfolder(&self, at: &str) -> Result<Folder> {
        let target = format!("{}{}", self.path(), Self::require_path(at)?);
        let fs = self.host().fs();

        if let Some(parent) = normalize::parent_path(&target) {
            fs.create_dir_all(&parent)
                .map_err(|e| Error::mutation(&target, MutationReason::FolderCreationFailed(e)))?;
        }
        fs.create_dir(&target)
            .map_err(|e| Error::mutation(&target, MutationReason::FolderCreationFailed(e)))?;

        log::debug!("Created folder {target}");
        Folder::resolve(self.host(), &target)
    }

    /// The subfolder at `at`, created along with any intermediate folders if
    /// it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionReason::EmptyPath`] for an empty path, or
    /// [`MutationReason::FolderCreationFailed`] if the host refuses, for
    /// example because a file is in the way.
    pub fn create_subfolder_if_needed(&self, at: &str) -> Result<Folder> {
        let target = format!("{}{}", self.path(), Self::require_path(at)?);

        self.host()
            .fs()
            .create_dir_all(&target)
            .map_err(|e| Error::mutation(&target, MutationReason::FolderCreationFailed(e)))?;

        Folder::resolve(self.host(), &target)
    }

    /// Create a new file at the relative path `at` holding `contents`,
    /// creating any intermediate folders.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionReason::EmptyPath`] for an empty path,
    /// [`MutationReason::FolderCreationFailed`] if an intermediate folder
    /// cannot be created, or [`MutationReason::FileCreationFailed`] if
    /// something already exists at `at` or the host refuses.
    pub fn create_file(&self, at: &str, contents: impl AsRef<[u8]>) -> Result<File> {
        let target = format!("{}{}", self.path(), Self::require_path(at)?);
        let fs = self.host().fs();

        if let Some(parent) = normalize::parent_path(&target) {
            fs.create_dir_all(&parent)
                .map_err(|e| Error::mutation(&target, MutationReason::FolderCreationFailed(e)))?;
        }
        fs.create_file(&target, contents.as_ref())
            .map_err(|e| Error::mutation(&target, MutationReason::FileCreationFailed(e)))?;

        log::debug!("Created file {target}");
        File::resolve(self.host(), &target)
    }

    /// The file at `at`, created if it does not exist yet.
    ///
    /// `contents` is only called when a file is actually created. If another
    /// caller creates the file first, that file is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionReason::EmptyPath`] for an empty path, or the
    /// creation error if the file could not be created.
    pub fn create_file_if_needed<F>(&self, at: &str, contents: F) -> Result<File>
    where
        F: FnOnce() -> Vec<u8>,
    {
        match self.file(at) {
            Ok(file) => return Ok(file),
            Err(err) if err.is_missing() => {}
            Err(err) => return Err(err),
        }

        match self.create_file(at, contents()) {
            Err(Error::Mutation {
                reason: MutationReason::FileCreationFailed(cause),
                ..
            }) if cause.kind() == io::ErrorKind::AlreadyExists => {
                log::debug!("{at} appeared in {} while creating it", self.path());
                self.file(at)
            }
            other => other,
        }
    }

    /// The files directly inside this folder, sorted by name, hidden files
    /// excluded.
    ///
    /// In debug builds a listing registered with the host's
    /// [`Interceptor`](crate::Interceptor) for this folder is returned
    /// instead, without reading the disk.
    #[must_use]
    pub fn files(&self) -> Vec<File> {
        #[cfg(debug_assertions)]
        {
            let intercepted = self.host().interceptor().get(self.path());
            if !intercepted.is_empty() {
                log::debug!("Using intercepted file listing for {}", self.path());
                return intercepted;
            }
        }
        self.files_sequence().iter().collect()
    }

    /// A lazy traversal of the files in this folder.
    #[must_use]
    pub fn files_sequence(&self) -> ChildSequence<File> {
        ChildSequence::new(self.clone())
    }

    /// A lazy traversal of the subfolders of this folder.
    #[must_use]
    pub fn subfolders(&self) -> ChildSequence<Folder> {
        ChildSequence::new(self.clone())
    }

    /// Whether the folder has no files and no subfolders.
    ///
    /// Hidden entries only count with `include_hidden`.
    #[must_use]
    pub fn is_empty(&self, include_hidden: bool) -> bool {
        self.files_sequence().with_hidden(include_hidden).first().is_none()
            && self.subfolders().with_hidden(include_hidden).first().is_none()
    }

    /// Move every file and subfolder into `folder`.
    ///
    /// # Errors
    ///
    /// Stops at the first entry that cannot be moved and returns its error;
    /// entries moved before it stay moved.
    pub fn move_contents(&self, folder: &Folder, include_hidden: bool) -> Result<()> {
        self.files_sequence().with_hidden(include_hidden).move_to(folder)?;
        self.subfolders().with_hidden(include_hidden).move_to(folder)
    }

    /// Delete every file and subfolder.
    ///
    /// # Errors
    ///
    /// Stops at the first entry that cannot be deleted and returns its error.
    pub fn empty(&self, include_hidden: bool) -> Result<()> {
        self.files_sequence().with_hidden(include_hidden).delete()?;
        self.subfolders().with_hidden(include_hidden).delete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MockFileSystem, OsFileSystem};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn temp_folder() -> (TempDir, Folder) {
        let dir = tempdir().unwrap();
        let folder = Host::new(OsFileSystem)
            .folder(&dir.path().to_string_lossy())
            .unwrap();
        (dir, folder)
    }

    #[test]
    fn test_create_subfolder_round_trip() {
        let (_dir, root) = temp_folder();
        let created = root.create_subfolder("a/b").unwrap();
        let found = root.subfolder("a/b").unwrap();
        assert_eq!(created, found);
        assert!(created.path().ends_with("/a/b/"));
    }

    #[test]
    fn test_create_subfolder_fails_if_present() {
        let (_dir, root) = temp_folder();
        root.create_subfolder("a").unwrap();
        let err = root.create_subfolder("a").unwrap_err();
        assert!(matches!(
            err.mutation_reason(),
            Some(MutationReason::FolderCreationFailed(_))
        ));
    }

    #[test]
    fn test_create_if_needed_twice_is_equal() {
        let (_dir, root) = temp_folder();
        let one = root.create_subfolder_if_needed("x/y").unwrap();
        let two = root.create_subfolder_if_needed("x/y").unwrap();
        assert_eq!(one, two);

        let first = root.create_file_if_needed("x/f.txt", || b"1".to_vec()).unwrap();
        let second = root
            .create_file_if_needed("x/f.txt", || panic!("contents must not be built"))
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(second.read().unwrap(), b"1");
    }

    #[test]
    fn test_create_with_empty_path() {
        let (_dir, root) = temp_folder();
        for err in [
            root.create_subfolder("").unwrap_err(),
            root.create_subfolder_if_needed("/").unwrap_err(),
            root.create_file("", b"").unwrap_err(),
            root.create_file_if_needed("", Vec::new).unwrap_err(),
        ] {
            assert_eq!(err.resolution_reason(), Some(ResolutionReason::EmptyPath));
        }
    }

    #[test]
    fn test_create_file_makes_intermediate_folders() {
        let (dir, root) = temp_folder();
        let file = root.create_file("/deep/er/f.txt", "hi").unwrap();
        assert_eq!(file.path_relative_to(&root), "deep/er/f.txt");
        assert_eq!(
            fs::read_to_string(dir.path().join("deep/er/f.txt")).unwrap(),
            "hi"
        );
    }

    #[test]
    fn test_contains() {
        let (_dir, root) = temp_folder();
        let sub = root.create_subfolder("sub").unwrap();
        let file = sub.create_file("f.txt", "").unwrap();

        assert!(root.contains_subfolder("sub"));
        assert!(!root.contains_file("sub"));
        assert!(sub.contains_file("f.txt"));
        assert!(root.contains(&sub));
        assert!(sub.contains(&file));
        assert!(!root.contains(&file));

        file.delete().unwrap();
        assert!(!sub.contains(&file));
    }

    #[test]
    fn test_is_empty_with_hidden_file() {
        let (_dir, root) = temp_folder();
        assert!(root.is_empty(false));
        root.create_file(".hidden", "").unwrap();
        assert!(root.is_empty(false));
        assert!(!root.is_empty(true));
    }

    #[test]
    fn test_move_contents_and_empty() {
        let (_dir, root) = temp_folder();
        let source = root.create_subfolder("source").unwrap();
        let target = root.create_subfolder("target").unwrap();
        source.create_file("a.txt", "a").unwrap();
        source.create_file(".b", "b").unwrap();
        source.create_subfolder("c").unwrap();

        source.move_contents(&target, false).unwrap();
        assert_eq!(target.files_sequence().names(), vec!["a.txt"]);
        assert_eq!(target.subfolders().names(), vec!["c"]);
        assert!(!source.is_empty(true));

        target.empty(false).unwrap();
        assert!(target.is_empty(true));
        source.empty(true).unwrap();
        assert!(source.is_empty(true));
    }

    #[test]
    fn test_subfolder_strips_leading_separator() {
        let mut fs = MockFileSystem::new();
        fs.expect_exists()
            .returning(|path, kind| kind == LocationKind::Folder && path.starts_with("/a/"));
        let root = Host::new(fs).folder("/a").unwrap();
        assert_eq!(root.subfolder("/b").unwrap().path(), "/a/b/");
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_debug_folder_lists_registered_files() {
        let host = Host::new(MockFileSystem::new());
        let files = vec![File::debug_file(&host, "jpeg"), File::debug_file(&host, "png")];
        let folder = Folder::debug_folder(&host, files.clone());

        assert!(folder.name().starts_with("debug-folder-"));
        assert_eq!(folder.files(), files);
        host.interceptor().clear();
    }
}
