#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # locus
//!
//! Typed handles for files and folders.
//!
//! Instead of passing raw path strings around, resolve them once into a
//! [`File`] or [`Folder`]. Resolution expands `~`, resolves `..` against
//! folders that exist, normalizes trailing separators and checks that an
//! entry of the right kind is there. Handles then offer navigation,
//! creation, mutation and lazy traversal of folder contents.
//!
//! ## Core Types
//!
//! - [`Host`]: the filesystem (and, in debug builds, the [`Interceptor`])
//!   that handles are resolved on
//! - [`File`], [`Folder`] and the [`Location`] trait: location handles
//! - [`ChildSequence`]: lazy, sorted traversal of a folder's children
//! - [`PathResolver`] and [`CanonicalPath`]: path validation
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use locus::{Folder, Location};
//!
//! let home = Folder::home().unwrap();
//! for folder in home.subfolders() {
//!     println!("{}", folder.name());
//! }
//!
//! let notes = home.create_subfolder_if_needed("notes").unwrap();
//! let today = notes.create_file_if_needed("today.md", Vec::new).unwrap();
//! today.append_str("- write docs\n").unwrap();
//! ```

pub mod config;
pub mod error;
pub mod fs;
mod host;
#[cfg(debug_assertions)]
pub mod intercept;
pub mod location;
pub mod logging;
pub mod path;
pub mod traversal;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, MutationReason, ReadReason, ResolutionReason, Result};
pub use fs::{FileSystem, KnownFolder, OsFileSystem};
pub use host::Host;
#[cfg(debug_assertions)]
pub use intercept::Interceptor;
pub use location::{File, Folder, Location};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{CanonicalPath, LocationKind, PathResolver};
pub use traversal::{ChildIter, ChildSequence};
