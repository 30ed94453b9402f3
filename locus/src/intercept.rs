//! Debug-only substitution of folder file listings.
//!
//! An [`Interceptor`] maps a folder's canonical path to a list of [`File`]
//! handles. While a mapping exists, [`Folder::files`](crate::Folder::files)
//! returns it instead of reading the directory. Subfolder listings are never
//! intercepted.
//!
//! The interceptor holds handles that themselves hold the [`Host`](crate::Host)
//! owning the interceptor. Call [`Interceptor::clear`] when a test is done to
//! release them.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::location::File;

/// Registry of substitute file listings, keyed by canonical folder path.
///
/// # Examples
///
/// ```
/// use locus::{Host, Interceptor};
///
/// let host = Host::os();
/// let interceptor = host.interceptor();
/// assert!(interceptor.get("/somewhere/").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Interceptor {
    files: Mutex<HashMap<String, Vec<File>>>,
}

impl Interceptor {
    /// Create an empty interceptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<File>>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Substitute `files` for the listing of the folder at `folder_path`,
    /// replacing any earlier substitute.
    pub fn set(&self, folder_path: impl Into<String>, files: Vec<File>) {
        let folder_path = folder_path.into();
        log::debug!(
            "Intercepting file listing of {folder_path} with {} file(s)",
            files.len()
        );
        self.lock().insert(folder_path, files);
    }

    /// The substitute listing for `folder_path`; empty if there is none.
    #[must_use]
    pub fn get(&self, folder_path: &str) -> Vec<File> {
        self.lock().get(folder_path).cloned().unwrap_or_default()
    }

    /// Stop intercepting the folder at `folder_path`.
    pub fn remove(&self, folder_path: &str) {
        if self.lock().remove(folder_path).is_some() {
            log::debug!("Stopped intercepting {folder_path}");
        }
    }

    /// Drop every substitute listing.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Whether no folder is intercepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
