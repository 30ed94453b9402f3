//! `std::fs`-backed implementation of [`FileSystem`].

use std::env;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{FileSystem, KnownFolder, Timestamps};
use crate::path::LocationKind;

/// The real filesystem of the host.
///
/// # Examples
///
/// ```no_run
/// use locus::fs::{FileSystem, OsFileSystem};
/// use locus::LocationKind;
///
/// let fs = OsFileSystem;
/// assert!(fs.exists("/", LocationKind::Folder));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    fn ensure_vacant(path: &str) -> io::Result<()> {
        if fs::symlink_metadata(path).is_ok() {
            return Err(io::Error::new(
                ErrorKind::AlreadyExists,
                format!("'{path}' already exists"),
            ));
        }
        Ok(())
    }

    fn copy_recursive(from: &Path, to: &Path) -> io::Result<()> {
        if fs::metadata(from)?.is_dir() {
            fs::create_dir(to)?;
            for entry in fs::read_dir(from)? {
                let entry = entry?;
                Self::copy_recursive(&entry.path(), &to.join(entry.file_name()))?;
            }
        } else {
            fs::copy(from, to)?;
        }
        Ok(())
    }

    fn display(path: PathBuf) -> String {
        path.to_string_lossy().into_owned()
    }

    fn xdg_dir(variable: &str) -> Option<PathBuf> {
        env::var_os(variable)
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
    }
}

impl FileSystem for OsFileSystem {
    fn current_dir(&self) -> io::Result<String> {
        env::current_dir().map(Self::display)
    }

    fn home_dir(&self) -> Option<String> {
        home::home_dir()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Self::display)
    }

    fn temp_dir(&self) -> String {
        Self::display(env::temp_dir())
    }

    fn exists(&self, path: &str, kind: LocationKind) -> bool {
        match fs::metadata(path) {
            Ok(metadata) => match kind {
                LocationKind::Folder => metadata.is_dir(),
                LocationKind::File => !metadata.is_dir(),
            },
            Err(_) => false,
        }
    }

    fn list_names(&self, path: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::warn!("Skipping non UTF-8 entry {raw:?} in {path}"),
            }
        }
        Ok(names)
    }

    fn create_dir(&self, path: &str) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn create_dir_all(&self, path: &str) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn create_file(&self, path: &str, contents: &[u8]) -> io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(contents)
    }

    fn rename(&self, from: &str, to: &str) -> io::Result<()> {
        Self::ensure_vacant(to)?;
        fs::rename(from, to)
    }

    fn copy(&self, from: &str, to: &str) -> io::Result<()> {
        Self::ensure_vacant(to)?;
        Self::copy_recursive(Path::new(from), Path::new(to))
    }

    fn remove(&self, path: &str, kind: LocationKind) -> io::Result<()> {
        match kind {
            LocationKind::File => fs::remove_file(path),
            LocationKind::Folder => fs::remove_dir_all(path),
        }
    }

    fn timestamps(&self, path: &str) -> io::Result<Timestamps> {
        let metadata = fs::metadata(path)?;
        Ok(Timestamps {
            created: metadata.created().ok(),
            modified: metadata.modified().ok(),
        })
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &str, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn append(&self, path: &str, contents: &[u8]) -> io::Result<()> {
        let mut file = fs::OpenOptions::new().append(true).open(path)?;
        file.write_all(contents)
    }

    fn known_folder_candidates(&self, folder: KnownFolder) -> Vec<String> {
        let Some(home) = home::home_dir() else {
            return Vec::new();
        };

        let candidates = match folder {
            KnownFolder::Documents => vec![
                Self::xdg_dir("XDG_DOCUMENTS_DIR"),
                Some(home.join("Documents")),
            ],
            KnownFolder::Desktop => vec![
                Self::xdg_dir("XDG_DESKTOP_DIR"),
                Some(home.join("Desktop")),
            ],
            KnownFolder::Downloads => vec![
                Self::xdg_dir("XDG_DOWNLOAD_DIR"),
                Some(home.join("Downloads")),
            ],
            KnownFolder::Library => vec![
                Some(home.join("Library")),
                Self::xdg_dir("XDG_DATA_HOME"),
                Some(home.join(".local").join("share")),
            ],
            KnownFolder::Caches => vec![
                Some(home.join("Library").join("Caches")),
                Self::xdg_dir("XDG_CACHE_HOME"),
                Some(home.join(".cache")),
            ],
        };

        candidates
            .into_iter()
            .flatten()
            .filter(|p| p.is_dir())
            .map(Self::display)
            .collect()
    }
}
