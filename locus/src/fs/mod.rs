//! Host filesystem abstraction.
//!
//! Every disk access made by locus goes through the [`FileSystem`] trait, so
//! a [`Host`](crate::Host) can be pointed at the real disk
//! ([`OsFileSystem`]) or at a test double. Paths cross this boundary as
//! `/`-separated strings, the same representation location handles store.

mod os;

use std::fmt;
use std::io;
use std::time::SystemTime;

use crate::path::LocationKind;

pub use os::OsFileSystem;

/// Creation and modification times of a filesystem entry.
///
/// Either field may be `None` on platforms or filesystems that do not
/// record it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamps {
    /// When the entry was created.
    pub created: Option<SystemTime>,
    /// When the entry was last modified.
    pub modified: Option<SystemTime>,
}

/// Well-known per-user folders that the platform can locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownFolder {
    /// The user's documents folder.
    Documents,
    /// The user's desktop folder.
    Desktop,
    /// The user's downloads folder.
    Downloads,
    /// Per-user application data (`~/Library` on macOS).
    Library,
    /// Per-user caches.
    Caches,
}

impl fmt::Display for KnownFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Documents => write!(f, "documents"),
            Self::Desktop => write!(f, "desktop"),
            Self::Downloads => write!(f, "downloads"),
            Self::Library => write!(f, "library"),
            Self::Caches => write!(f, "caches"),
        }
    }
}

/// The operations locus needs from the host filesystem.
///
/// Implementations must be blocking and must give a definitive answer per
/// call; nothing above this trait retries.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem: Send + Sync {
    /// The process's current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    fn current_dir(&self) -> io::Result<String>;

    /// The current user's home directory, if it can be determined.
    fn home_dir(&self) -> Option<String>;

    /// The system's temporary directory.
    fn temp_dir(&self) -> String;

    /// Whether an entry of `kind` exists at `path`.
    ///
    /// Anything that is not a directory counts as a file.
    fn exists(&self, path: &str, kind: LocationKind) -> bool;

    /// Names of the entries directly inside the directory at `path`, in no
    /// particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list_names(&self, path: &str) -> io::Result<Vec<String>>;

    /// Creates a single directory; fails if anything already exists there.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir(&self, path: &str) -> io::Result<()>;

    /// Creates a directory and any missing parents; succeeds if the
    /// directory already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    fn create_dir_all(&self, path: &str) -> io::Result<()>;

    /// Creates a new file holding `contents`; fails with
    /// [`io::ErrorKind::AlreadyExists`] if anything exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    fn create_file(&self, path: &str, contents: &[u8]) -> io::Result<()>;

    /// Renames `from` to `to`; fails if `to` already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be renamed.
    fn rename(&self, from: &str, to: &str) -> io::Result<()>;

    /// Copies `from` to `to`, recursively for directories; fails if `to`
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be copied.
    fn copy(&self, from: &str, to: &str) -> io::Result<()>;

    /// Permanently removes the entry at `path` (recursively for folders).
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be removed.
    fn remove(&self, path: &str, kind: LocationKind) -> io::Result<()>;

    /// Creation and modification times of the entry at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry's metadata cannot be read.
    fn timestamps(&self, path: &str) -> io::Result<Timestamps>;

    /// Reads the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Replaces the contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &str, contents: &[u8]) -> io::Result<()>;

    /// Appends to the file at `path`, which must already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    fn append(&self, path: &str, contents: &[u8]) -> io::Result<()>;

    /// Candidate absolute paths for a well-known folder, best first.
    fn known_folder_candidates(&self, folder: KnownFolder) -> Vec<String>;
}
