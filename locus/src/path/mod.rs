//! Path normalization and validation.
//!
//! Turning a user-supplied string into a canonical location path is split in
//! two halves:
//!
//! - [`normalize`] holds the lexical steps: `~` expansion, anchoring at the
//!   current directory, `.` removal and trailing separator handling.
//! - [`PathResolver`] drives those steps and adds the ones that need a
//!   filesystem: `..` resolution against existing parents and the final
//!   existence check.
//!
//! # Examples
//!
//! ```
//! use locus::path::normalize;
//!
//! assert_eq!(normalize::with_trailing_separator("/a/b"), "/a/b/");
//! assert_eq!(normalize::parent_path("/a/b/").as_deref(), Some("/a/"));
//! ```

pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use resolver::PathResolver;
#[cfg(debug_assertions)]
pub use resolver::{DEBUG_FILE_PREFIX, DEBUG_FOLDER_PREFIX};
pub use types::{CanonicalPath, LocationKind};
