use crate::host::Host;
use crate::path::CanonicalPath;

/// The state shared by every location handle: where it is and which host
/// it lives on.
///
/// Only reachable through [`Location`](super::Location); the fields are
/// private to the crate.
#[derive(Clone)]
pub struct Storage {
    path: CanonicalPath,
    host: Host,
}

impl Storage {
    pub(crate) fn new(path: CanonicalPath, host: Host) -> Self {
        Self { path, host }
    }

    pub(crate) fn path(&self) -> &CanonicalPath {
        &self.path
    }

    pub(crate) fn host(&self) -> &Host {
        &self.host
    }

    pub(crate) fn relocate(&mut self, new_path: &str) {
        self.path.relocate(new_path);
    }
}
