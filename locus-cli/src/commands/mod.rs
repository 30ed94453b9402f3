//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Print the canonical path of a file or folder
//! - `ls`: List the children of a folder
//! - `info`: Show kind, name parts, parent and timestamps
//! - `mkdir`: Create a folder
//! - `touch`: Create a file if needed
//! - `rename`: Rename in place
//! - `mv`: Move into another folder
//! - `cp`: Copy into another folder
//! - `rm`: Delete a file or folder
//! - `empty`: Delete the contents of a folder
//! - `is_empty`: Check whether a folder is empty
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod cp;
pub mod empty;
pub mod info;
pub mod is_empty;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod rename;
pub mod resolve;
pub mod rm;
pub mod touch;

pub use completions::CompletionsCommand;
pub use cp::CopyCommand;
pub use empty::EmptyCommand;
pub use info::InfoCommand;
pub use is_empty::IsEmptyCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use mv::MoveCommand;
pub use rename::RenameCommand;
pub use resolve::ResolveCommand;
pub use rm::RemoveCommand;
pub use touch::TouchCommand;
