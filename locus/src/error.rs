//! Error types for the locus library.
//!
//! Every fallible operation returns an [`Error`] carrying the offending path
//! and a typed reason. Resolution failures (the path does not name an
//! existing location of the requested kind) are kept apart from mutation
//! failures (the host filesystem refused a create/rename/move/copy/delete or
//! write) and read failures, so callers can match on the family they care
//! about.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::fs::KnownFolder;

/// Result type alias for operations that may fail with a locus error.
///
/// # Examples
///
/// ```
/// use locus::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the locus library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be turned into a location handle.
    #[error("cannot resolve '{path}': {reason}")]
    Resolution {
        /// The path that failed to resolve.
        path: String,
        /// Why resolution failed.
        reason: ResolutionReason,
    },

    /// The host filesystem refused a mutation.
    #[error("cannot modify '{path}': {reason}")]
    Mutation {
        /// The path of the location being modified.
        path: String,
        /// What was attempted, and the underlying cause.
        #[source]
        reason: MutationReason,
    },

    /// A file's contents could not be read or decoded.
    #[error("cannot read '{path}': {reason}")]
    Read {
        /// The path of the file being read.
        path: String,
        /// Why reading failed.
        #[source]
        reason: ReadReason,
    },

    /// A `~` path was given but the home directory is unknown.
    ///
    /// This is an environment problem rather than a missing location, so
    /// the "create if needed" helpers never treat it as a cue to create.
    #[error("cannot expand '~' in '{path}': home directory could not be determined")]
    HomeDirectoryUnresolved {
        /// The path that required expansion.
        path: String,
    },

    /// A configuration value or file was invalid.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the problem.
        message: String,
    },

    /// An I/O error occurred outside of any location operation.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Why a path could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolutionReason {
    /// An empty path was given where a file path is required.
    #[error("path is empty")]
    EmptyPath,

    /// Nothing of the requested kind exists at the path.
    #[error("no location of the requested kind exists")]
    MissingLocation,

    /// The root folder has no parent to rename within.
    #[error("the root folder cannot be renamed")]
    CannotRenameRoot,

    /// The platform returned no candidate for a well-known folder.
    #[error("no folder matches {0}")]
    UnresolvedSearchPath(KnownFolder),
}

/// What mutation the host filesystem refused.
#[derive(Debug, Error)]
pub enum MutationReason {
    /// A folder (or an intermediate folder) could not be created.
    #[error("folder creation failed: {0}")]
    FolderCreationFailed(#[source] io::Error),

    /// A file could not be created.
    #[error("file creation failed: {0}")]
    FileCreationFailed(#[source] io::Error),

    /// Renaming failed.
    #[error("rename failed: {0}")]
    RenameFailed(#[source] io::Error),

    /// Moving to a new parent folder failed.
    #[error("move failed: {0}")]
    MoveFailed(#[source] io::Error),

    /// Copying into a folder failed.
    #[error("copy failed: {0}")]
    CopyFailed(#[source] io::Error),

    /// Deleting failed.
    #[error("delete failed: {0}")]
    DeleteFailed(#[source] io::Error),

    /// Writing or appending to a file failed.
    #[error("write failed: {0}")]
    WriteFailed(#[source] io::Error),
}

/// Why a file's contents could not be read.
#[derive(Debug, Error)]
pub enum ReadReason {
    /// The bytes could not be read.
    #[error("read failed: {0}")]
    ReadFailed(#[source] io::Error),

    /// The contents are not valid UTF-8.
    #[error("contents are not valid UTF-8")]
    StringDecodingFailed(#[source] FromUtf8Error),

    /// The contents do not parse as an integer.
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
}

impl Error {
    pub(crate) fn resolution(path: impl Into<String>, reason: ResolutionReason) -> Self {
        Self::Resolution {
            path: path.into(),
            reason,
        }
    }

    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::resolution(path, ResolutionReason::MissingLocation)
    }

    pub(crate) fn mutation(path: impl Into<String>, reason: MutationReason) -> Self {
        Self::Mutation {
            path: path.into(),
            reason,
        }
    }

    pub(crate) fn read(path: impl Into<String>, reason: ReadReason) -> Self {
        Self::Read {
            path: path.into(),
            reason,
        }
    }

    /// Check if error indicates that no location of the requested kind exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use locus::{Error, ResolutionReason};
    ///
    /// let err = Error::Resolution {
    ///     path: "/nonexistent".to_string(),
    ///     reason: ResolutionReason::MissingLocation,
    /// };
    /// assert!(err.is_missing());
    /// ```
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::Resolution {
                reason: ResolutionReason::MissingLocation,
                ..
            }
        )
    }

    /// Check if the path could not be turned into a location handle.
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }

    /// Check if the host filesystem refused a mutation.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Mutation { .. })
    }

    /// The resolution reason, if this is a resolution error.
    #[must_use]
    pub fn resolution_reason(&self) -> Option<ResolutionReason> {
        match self {
            Self::Resolution { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// The mutation reason, if this is a mutation error.
    #[must_use]
    pub fn mutation_reason(&self) -> Option<&MutationReason> {
        match self {
            Self::Mutation { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// The path the error occurred at, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Resolution { path, .. }
            | Self::Mutation { path, .. }
            | Self::Read { path, .. }
            | Self::HomeDirectoryUnresolved { path } => Some(path),
            Self::Configuration { .. } | Self::Io(_) => None,
        }
    }
}
