//! Lazy traversal of folder contents.
//!
//! A [`ChildSequence`] describes which children of a folder to visit: files
//! or subfolders, direct children only or the whole tree, and whether names
//! starting with `.` are included. Nothing is read from disk until the
//! sequence is iterated, and every iteration reads the folder afresh.
//!
//! # Examples
//!
//! ```no_run
//! use locus::{Folder, Location};
//!
//! let project = Folder::new("~/projects/locus").unwrap();
//!
//! let sources: Vec<String> = project
//!     .files_sequence()
//!     .recursive()
//!     .iter()
//!     .filter(|file| file.extension() == Some("rs"))
//!     .map(|file| file.path_relative_to(&project))
//!     .collect();
//! ```

mod iter;

use std::fmt;
use std::marker::PhantomData;

use crate::error::Result;
use crate::location::{Folder, Location};

pub use iter::ChildIter;

/// The files or subfolders of a folder, visited lazily.
///
/// Entries are yielded in byte-wise ascending name order, so `"C"` comes
/// before `"a"`. Entries that vanish or change kind between listing and
/// visiting are skipped.
#[derive(Clone)]
pub struct ChildSequence<C: Location> {
    folder: Folder,
    recursive: bool,
    include_hidden: bool,
    kind: PhantomData<fn() -> C>,
}

impl<C: Location> ChildSequence<C> {
    pub(crate) fn new(folder: Folder) -> Self {
        Self {
            folder,
            recursive: false,
            include_hidden: false,
            kind: PhantomData,
        }
    }

    /// Also visit everything inside subfolders.
    ///
    /// All direct children come first. Then each subfolder's contents are
    /// visited in full, in the order the subfolders were found.
    #[must_use]
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Also visit entries whose names start with `.`.
    #[must_use]
    pub fn including_hidden(self) -> Self {
        self.with_hidden(true)
    }

    /// Set whether entries whose names start with `.` are visited.
    #[must_use]
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// The folder whose children are visited.
    #[must_use]
    pub fn folder(&self) -> &Folder {
        &self.folder
    }

    /// Whether subfolder contents are visited.
    #[must_use]
    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Whether hidden entries are visited.
    #[must_use]
    pub fn includes_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Start a new walk.
    #[must_use]
    pub fn iter(&self) -> ChildIter<C> {
        self.walk(false)
    }

    fn walk(&self, reverse: bool) -> ChildIter<C> {
        ChildIter::new(
            self.folder.host().clone(),
            self.folder.path().to_string(),
            self.recursive,
            self.include_hidden,
            reverse,
        )
    }

    /// The number of children.
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// The names of the children, in traversal order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|child| child.name().to_string()).collect()
    }

    /// The first child, reading no further than needed.
    #[must_use]
    pub fn first(&self) -> Option<C> {
        self.iter().next()
    }

    /// The last child.
    ///
    /// Without recursion this walks the listing backwards and stops at the
    /// first match.
    #[must_use]
    pub fn last(&self) -> Option<C> {
        if self.recursive {
            self.iter().last()
        } else {
            self.walk(true).next()
        }
    }

    /// Move every child into `folder`, one at a time.
    ///
    /// # Errors
    ///
    /// Returns the first failure; children moved before it stay moved.
    pub fn move_to(&self, folder: &Folder) -> Result<()> {
        for mut child in self.iter() {
            child.move_to(folder)?;
        }
        Ok(())
    }

    /// Delete every child, one at a time.
    ///
    /// # Errors
    ///
    /// Returns the first failure; children deleted before it stay deleted.
    pub fn delete(&self) -> Result<()> {
        for child in self.iter() {
            child.delete()?;
        }
        Ok(())
    }
}

impl<C: Location> IntoIterator for ChildSequence<C> {
    type Item = C;
    type IntoIter = ChildIter<C>;

    fn into_iter(self) -> ChildIter<C> {
        self.iter()
    }
}

impl<C: Location> IntoIterator for &ChildSequence<C> {
    type Item = C;
    type IntoIter = ChildIter<C>;

    fn into_iter(self) -> ChildIter<C> {
        self.iter()
    }
}

impl<C: Location + fmt::Display> fmt::Display for ChildSequence<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, child) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

impl<C: Location> fmt::Debug for ChildSequence<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildSequence")
            .field("folder", &self.folder.path())
            .field("recursive", &self.recursive)
            .field("include_hidden", &self.include_hidden)
            .finish()
    }
}
