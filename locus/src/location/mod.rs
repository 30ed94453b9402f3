//! File and folder handles.
//!
//! A location handle is a resolved [`CanonicalPath`] bound to the [`Host`]
//! it was resolved on. Handles compare, hash and order by path. Dropping a
//! handle never touches the filesystem.
//!
//! The two kinds, [`File`] and [`Folder`], share their behavior through the
//! sealed [`Location`] trait.
//!
//! # Examples
//!
//! ```no_run
//! use locus::{Folder, Location};
//!
//! let folder = Folder::new("~/projects").unwrap();
//! let mut readme = folder.file("locus/README.md").unwrap();
//! assert_eq!(readme.extension(), Some("md"));
//!
//! readme.rename("INTRO", true).unwrap();
//! assert_eq!(readme.name(), "INTRO.md");
//! ```

mod file;
mod folder;
mod storage;

use std::time::SystemTime;

use crate::error::{Error, MutationReason, ResolutionReason, Result};
use crate::host::Host;
use crate::path::normalize;
use crate::path::LocationKind;

pub use file::File;
pub use folder::Folder;
pub use storage::Storage;

mod private {
    pub trait Sealed {}
}

/// Behavior shared by [`File`] and [`Folder`].
///
/// This trait is sealed; the set of location kinds is closed.
pub trait Location: private::Sealed + Clone + Sized {
    /// The kind every handle of this type is resolved as.
    const KIND: LocationKind;

    #[doc(hidden)]
    fn storage(&self) -> &Storage;

    #[doc(hidden)]
    fn storage_mut(&mut self) -> &mut Storage;

    #[doc(hidden)]
    fn from_storage(storage: Storage) -> Self;

    /// Resolve `path` on `host` into a handle of this kind.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not name an existing location of
    /// this kind.
    fn resolve(host: &Host, path: &str) -> Result<Self> {
        let path = host.resolver().resolve(path, Self::KIND)?;
        Ok(Self::from_storage(Storage::new(path, host.clone())))
    }

    /// The canonical path. Folder paths end with `/`.
    fn path(&self) -> &str {
        self.storage().path().as_str()
    }

    /// The host this handle performs its disk access through.
    fn host(&self) -> &Host {
        self.storage().host()
    }

    /// The last path component; `/` for the root folder.
    fn name(&self) -> &str {
        normalize::last_component(self.path())
    }

    /// The name without its extension.
    ///
    /// ```no_run
    /// # use locus::{File, Location};
    /// let archive = File::new("/tmp/backup.tar.gz").unwrap();
    /// assert_eq!(archive.name_excluding_extension(), "backup.tar");
    /// ```
    fn name_excluding_extension(&self) -> String {
        let pieces: Vec<&str> = self.name().split('.').filter(|p| !p.is_empty()).collect();
        match pieces.split_last() {
            Some((_, rest)) if !rest.is_empty() => rest.join("."),
            _ => self.name().to_string(),
        }
    }

    /// The text after the last `.` in the name, if there is one.
    ///
    /// A leading dot does not start an extension: `.gitignore` has none.
    fn extension(&self) -> Option<&str> {
        let pieces: Vec<&str> = self.name().split('.').filter(|p| !p.is_empty()).collect();
        if pieces.len() > 1 {
            pieces.last().copied()
        } else {
            None
        }
    }

    /// The containing folder, if it still exists. The root folder has none.
    fn parent(&self) -> Option<Folder> {
        let parent = normalize::parent_path(self.path())?;
        Folder::resolve(self.host(), &parent).ok()
    }

    /// When the entry was created; `None` if unknown or deleted.
    fn creation_date(&self) -> Option<SystemTime> {
        self.host().fs().timestamps(self.path()).ok()?.created
    }

    /// When the entry was last modified; `None` if unknown or deleted.
    fn modification_date(&self) -> Option<SystemTime> {
        self.host().fs().timestamps(self.path()).ok()?.modified
    }

    /// The path relative to `folder`, or the full path if this location is
    /// not inside it.
    fn path_relative_to(&self, folder: &Folder) -> String {
        match self.path().strip_prefix(folder.path()) {
            Some(relative) => normalize::without_trailing_separator(relative).to_string(),
            None => self.path().to_string(),
        }
    }

    /// Re-resolve this location on another host.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not resolve on `host`.
    fn managed_by(&self, host: &Host) -> Result<Self> {
        Self::resolve(host, self.path())
    }

    /// Rename in place, keeping the parent folder.
    ///
    /// With `keep_extension`, the current extension is appended to
    /// `new_name` unless it already ends with it.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionReason::CannotRenameRoot`] for the root folder, or
    /// [`MutationReason::RenameFailed`] if the host refuses.
    fn rename(&mut self, new_name: &str, keep_extension: bool) -> Result<()> {
        let parent = normalize::parent_path(self.path())
            .ok_or_else(|| Error::resolution(self.path(), ResolutionReason::CannotRenameRoot))?;

        let new_name = match self.extension().filter(|_| keep_extension) {
            Some(extension) => normalize::with_suffix(new_name, &format!(".{extension}")),
            None => new_name.to_string(),
        };
        let new_path = format!("{parent}{new_name}");

        self.host()
            .fs()
            .rename(normalize::without_trailing_separator(self.path()), &new_path)
            .map_err(|e| Error::mutation(self.path(), MutationReason::RenameFailed(e)))?;

        log::debug!("Renamed {} to {new_path}", self.path());
        self.storage_mut().relocate(&new_path);
        Ok(())
    }

    /// Move into `folder`, keeping the name.
    ///
    /// # Errors
    ///
    /// Returns [`MutationReason::MoveFailed`] if the host refuses, for
    /// example because `folder` already holds an entry with this name.
    fn move_to(&mut self, folder: &Folder) -> Result<()> {
        let new_path = format!("{}{}", folder.path(), self.name());

        self.host()
            .fs()
            .rename(normalize::without_trailing_separator(self.path()), &new_path)
            .map_err(|e| Error::mutation(self.path(), MutationReason::MoveFailed(e)))?;

        log::debug!("Moved {} to {new_path}", self.path());
        self.storage_mut().relocate(&new_path);
        Ok(())
    }

    /// Copy into `folder`, returning a handle to the copy.
    ///
    /// # Errors
    ///
    /// Returns [`MutationReason::CopyFailed`] if the host refuses, or a
    /// resolution error if the copy cannot be found afterwards.
    fn copy_to(&self, folder: &Folder) -> Result<Self> {
        let new_path = format!("{}{}", folder.path(), self.name());

        self.host()
            .fs()
            .copy(normalize::without_trailing_separator(self.path()), &new_path)
            .map_err(|e| Error::mutation(self.path(), MutationReason::CopyFailed(e)))?;

        log::debug!("Copied {} to {new_path}", self.path());
        Self::resolve(folder.host(), &new_path)
    }

    /// Permanently delete the entry, recursively for folders.
    ///
    /// # Errors
    ///
    /// Returns [`MutationReason::DeleteFailed`] if the host refuses.
    fn delete(&self) -> Result<()> {
        self.host()
            .fs()
            .remove(self.path(), Self::KIND)
            .map_err(|e| Error::mutation(self.path(), MutationReason::DeleteFailed(e)))?;

        log::debug!("Deleted {}", self.path());
        Ok(())
    }
}

/// Implements the trait plumbing and value semantics of a location type.
macro_rules! location_type {
    ($name:ident, $kind:expr) => {
        impl $crate::location::private::Sealed for $name {}

        impl $crate::location::Location for $name {
            const KIND: $crate::path::LocationKind = $kind;

            fn storage(&self) -> &$crate::location::Storage {
                &self.storage
            }

            fn storage_mut(&mut self) -> &mut $crate::location::Storage {
                &mut self.storage
            }

            fn from_storage(storage: $crate::location::Storage) -> Self {
                Self { storage }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.storage.path() == other.storage.path()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self.storage.path(), state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.storage.path().as_str().cmp(other.storage.path().as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use $crate::location::Location;
                write!(
                    f,
                    "{}(name: {}, path: {})",
                    stringify!($name),
                    self.name(),
                    self.path()
                )
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.storage.path().as_str())
                    .finish()
            }
        }
    };
}

pub(crate) use location_type;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MockFileSystem, Timestamps};
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// A mock filesystem that knows a fixed set of folders and files and
    /// records renames so the new paths resolve afterwards.
    fn host_with(folders: &[&str], files: &[&str]) -> Host {
        let folders: Vec<String> = folders.iter().map(ToString::to_string).collect();
        let files = Arc::new(Mutex::new(
            files.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ));

        let mut fs = MockFileSystem::new();
        let known = Arc::clone(&files);
        fs.expect_exists().returning(move |path, kind| match kind {
            LocationKind::Folder => folders.iter().any(|f| f == path),
            LocationKind::File => known.lock().unwrap().iter().any(|f| f == path),
        });
        let renamed = Arc::clone(&files);
        fs.expect_rename().returning(move |from, to| {
            let mut files = renamed.lock().unwrap();
            files.retain(|f| f != from);
            files.push(to.to_string());
            Ok(())
        });
        fs.expect_timestamps().returning(|path| {
            if path == "/a/gone.txt" {
                Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
            } else {
                Ok(Timestamps {
                    created: Some(SystemTime::UNIX_EPOCH),
                    modified: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(60)),
                })
            }
        });
        Host::new(fs)
    }

    #[test]
    fn test_name_and_extension() {
        let host = host_with(&["/a/"], &["/a/photo.jpeg", "/a/.gitignore", "/a/x.tar.gz"]);

        let photo = host.file("/a/photo.jpeg").unwrap();
        assert_eq!(photo.name(), "photo.jpeg");
        assert_eq!(photo.extension(), Some("jpeg"));
        assert_eq!(photo.name_excluding_extension(), "photo");

        let hidden = host.file("/a/.gitignore").unwrap();
        assert_eq!(hidden.extension(), None);
        assert_eq!(hidden.name_excluding_extension(), ".gitignore");

        let archive = host.file("/a/x.tar.gz").unwrap();
        assert_eq!(archive.extension(), Some("gz"));
        assert_eq!(archive.name_excluding_extension(), "x.tar");

        let folder = host.folder("/a").unwrap();
        assert_eq!(folder.name(), "a");
        assert_eq!(folder.extension(), None);
    }

    #[test]
    fn test_equality_by_path() {
        let host = host_with(&["/a/"], &[]);
        let one = host.folder("/a").unwrap();
        let two = host.folder("/a/").unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn test_display() {
        let host = host_with(&["/a/"], &["/a/f.txt"]);
        assert_eq!(
            host.file("/a/f.txt").unwrap().to_string(),
            "File(name: f.txt, path: /a/f.txt)"
        );
        assert_eq!(
            host.folder("/a").unwrap().to_string(),
            "Folder(name: a, path: /a/)"
        );
    }

    #[test]
    fn test_parent() {
        let host = host_with(&["/", "/a/"], &["/a/f.txt"]);
        let file = host.file("/a/f.txt").unwrap();
        let parent = file.parent().unwrap();
        assert_eq!(parent.path(), "/a/");
        assert_eq!(parent.parent().unwrap().path(), "/");
        assert!(host.root_folder().unwrap().parent().is_none());
    }

    #[test]
    fn test_dates() {
        let host = host_with(&["/a/"], &["/a/f.txt", "/a/gone.txt"]);
        let file = host.file("/a/f.txt").unwrap();
        assert_eq!(file.creation_date(), Some(SystemTime::UNIX_EPOCH));
        assert_eq!(
            file.modification_date(),
            Some(SystemTime::UNIX_EPOCH + Duration::from_secs(60))
        );

        let gone = host.file("/a/gone.txt").unwrap();
        assert_eq!(gone.creation_date(), None);
        assert_eq!(gone.modification_date(), None);
    }

    #[test]
    fn test_path_relative_to() {
        let host = host_with(&["/a/", "/a/b/", "/c/"], &["/a/b/f.txt"]);
        let a = host.folder("/a").unwrap();
        let c = host.folder("/c").unwrap();

        assert_eq!(host.file("/a/b/f.txt").unwrap().path_relative_to(&a), "b/f.txt");
        assert_eq!(host.folder("/a/b").unwrap().path_relative_to(&a), "b");
        assert_eq!(host.folder("/a/b").unwrap().path_relative_to(&c), "/a/b/");
    }

    #[test]
    fn test_rename_keeps_extension() {
        let host = host_with(&["/a/"], &["/a/photo.jpeg"]);
        let mut file = host.file("/a/photo.jpeg").unwrap();

        file.rename("holiday", true).unwrap();
        assert_eq!(file.path(), "/a/holiday.jpeg");

        file.rename("again.jpeg", true).unwrap();
        assert_eq!(file.path(), "/a/again.jpeg");

        file.rename("plain", false).unwrap();
        assert_eq!(file.path(), "/a/plain");
    }

    #[test]
    fn test_rename_folder_keeps_trailing_separator() {
        let host = host_with(&["/a/"], &[]);
        let mut folder = host.folder("/a").unwrap();
        folder.rename("b", true).unwrap();
        assert_eq!(folder.path(), "/b/");
        assert_eq!(folder.name(), "b");
    }

    #[test]
    fn test_rename_root_fails() {
        let host = host_with(&["/"], &[]);
        let mut root = host.root_folder().unwrap();
        let err = root.rename("x", true).unwrap_err();
        assert_eq!(
            err.resolution_reason(),
            Some(ResolutionReason::CannotRenameRoot)
        );
        assert_eq!(root.path(), "/");
    }

    #[test]
    fn test_rename_failure_keeps_path() {
        let mut fs = MockFileSystem::new();
        fs.expect_exists().returning(|_, _| true);
        fs.expect_rename()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::PermissionDenied, "no")));

        let host = Host::new(fs);
        let mut file = host.file("/a/f.txt").unwrap();
        let err = file.rename("g", true).unwrap_err();

        assert!(matches!(
            err.mutation_reason(),
            Some(MutationReason::RenameFailed(_))
        ));
        assert_eq!(err.path(), Some("/a/f.txt"));
        assert_eq!(file.path(), "/a/f.txt");
    }

    #[test]
    fn test_move_to_updates_path() {
        let host = host_with(&["/a/", "/b/"], &["/a/f.txt"]);
        let mut file = host.file("/a/f.txt").unwrap();
        file.move_to(&host.folder("/b").unwrap()).unwrap();
        assert_eq!(file.path(), "/b/f.txt");
    }

    #[test]
    fn test_delete_failure_is_mutation_error() {
        let mut fs = MockFileSystem::new();
        fs.expect_exists().returning(|_, _| true);
        fs.expect_remove()
            .withf(|path, kind| path == "/a/" && *kind == LocationKind::Folder)
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::PermissionDenied, "no")));

        let folder = Host::new(fs).folder("/a").unwrap();
        let err = folder.delete().unwrap_err();
        assert!(matches!(
            err.mutation_reason(),
            Some(MutationReason::DeleteFailed(_))
        ));
    }
}
