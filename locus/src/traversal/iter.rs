//! The iterator behind [`ChildSequence`](super::ChildSequence).

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::vec;

use crate::fs::FileSystem;
use crate::host::Host;
use crate::location::{Location, Storage};
use crate::path::LocationKind;

/// One folder being listed.
struct Frame {
    folder_path: String,
    /// Sorted entry names, read on first use.
    names: Option<vec::IntoIter<String>>,
    reverse: bool,
    /// Subfolders found in this folder, waiting to be listed in order.
    pending: VecDeque<String>,
}

impl Frame {
    fn new(folder_path: String, reverse: bool) -> Self {
        Self {
            folder_path,
            names: None,
            reverse,
            pending: VecDeque::new(),
        }
    }

    fn next_name(&mut self, fs: &dyn FileSystem) -> Option<String> {
        let folder_path = &self.folder_path;
        let reverse = self.reverse;
        self.names
            .get_or_insert_with(|| {
                let mut names = fs.list_names(folder_path).unwrap_or_else(|err| {
                    log::debug!("Cannot list {folder_path}: {err}");
                    Vec::new()
                });
                names.sort();
                if reverse {
                    names.reverse();
                }
                names.into_iter()
            })
            .next()
    }
}

/// A lazy walk over the children of a folder.
///
/// Each folder's entries are read once, when the walk first reaches it, and
/// yielded in byte-wise ascending name order. When recursing, a folder's
/// direct children all come first; then every subfolder it contained is
/// walked completely, one after another, in the order they were found.
pub struct ChildIter<C: Location> {
    host: Host,
    recursive: bool,
    include_hidden: bool,
    frames: Vec<Frame>,
    kind: PhantomData<fn() -> C>,
}

impl<C: Location> ChildIter<C> {
    pub(crate) fn new(
        host: Host,
        folder_path: String,
        recursive: bool,
        include_hidden: bool,
        reverse: bool,
    ) -> Self {
        Self {
            host,
            recursive,
            include_hidden,
            frames: vec![Frame::new(folder_path, reverse)],
            kind: PhantomData,
        }
    }
}

impl<C: Location> Iterator for ChildIter<C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        loop {
            let frame = self.frames.last_mut()?;

            let Some(name) = frame.next_name(self.host.fs()) else {
                match frame.pending.pop_front() {
                    Some(nested) => self.frames.push(Frame::new(nested, false)),
                    None => {
                        self.frames.pop();
                    }
                }
                continue;
            };

            if !self.include_hidden && name.starts_with('.') {
                continue;
            }

            let child_path = format!("{}{name}", frame.folder_path);
            let resolver = self.host.resolver();

            let folder = if self.recursive {
                resolver.resolve(&child_path, LocationKind::Folder).ok()
            } else {
                None
            };
            if let Some(folder) = &folder {
                frame.pending.push_back(folder.as_str().to_string());
            }

            let resolved = match folder {
                Some(folder) if C::KIND == LocationKind::Folder => Ok(folder),
                _ => resolver.resolve(&child_path, C::KIND),
            };

            match resolved {
                Ok(path) => return Some(C::from_storage(Storage::new(path, self.host.clone()))),
                Err(err) => log::trace!("Skipping {child_path}: {err}"),
            }
        }
    }
}

impl<C: Location> std::fmt::Debug for ChildIter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChildIter")
            .field("recursive", &self.recursive)
            .field("include_hidden", &self.include_hidden)
            .field("depth", &self.frames.len())
            .finish()
    }
}
