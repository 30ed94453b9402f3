use super::{location_type, Location, Storage};
use crate::error::{Error, MutationReason, ReadReason, Result};
use crate::host::Host;
use crate::path::LocationKind;

/// A handle to an existing file.
///
/// # Examples
///
/// ```no_run
/// use locus::{File, Location};
///
/// let file = File::new("~/notes/todo.txt").unwrap();
/// file.append_str("\n- ship it").unwrap();
/// println!("{}", file.read_to_string().unwrap());
/// ```
#[derive(Clone)]
pub struct File {
    storage: Storage,
}

location_type!(File, LocationKind::File);

impl File {
    /// Resolve `path` on the real filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not name an existing file.
    pub fn new(path: &str) -> Result<Self> {
        Self::resolve(&Host::os(), path)
    }

    /// A file handle for tests that is never checked against the disk.
    ///
    /// The path is `debug-file-<uuid>.<extension>`. Reading or writing it
    /// goes to the host filesystem and will normally fail.
    #[cfg(debug_assertions)]
    #[must_use]
    pub fn debug_file(host: &Host, extension: &str) -> Self {
        let path = format!(
            "{}-{}.{extension}",
            crate::path::DEBUG_FILE_PREFIX,
            uuid::Uuid::new_v4()
        );
        Self::from_storage(Storage::new(
            crate::path::CanonicalPath::new(path, LocationKind::File),
            host.clone(),
        ))
    }

    /// Replace the file's contents.
    ///
    /// # Errors
    ///
    /// Returns [`MutationReason::WriteFailed`] if the file cannot be written.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.host()
            .fs()
            .write(self.path(), data.as_ref())
            .map_err(|e| Error::mutation(self.path(), MutationReason::WriteFailed(e)))
    }

    /// Replace the file's contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`MutationReason::WriteFailed`] if the file cannot be written.
    pub fn write_str(&self, text: &str) -> Result<()> {
        self.write(text.as_bytes())
    }

    /// Append to the file's contents.
    ///
    /// # Errors
    ///
    /// Returns [`MutationReason::WriteFailed`] if the file cannot be written.
    pub fn append(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.host()
            .fs()
            .append(self.path(), data.as_ref())
            .map_err(|e| Error::mutation(self.path(), MutationReason::WriteFailed(e)))
    }

    /// Append `text` to the file's contents.
    ///
    /// # Errors
    ///
    /// Returns [`MutationReason::WriteFailed`] if the file cannot be written.
    pub fn append_str(&self, text: &str) -> Result<()> {
        self.append(text.as_bytes())
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`ReadReason::ReadFailed`] if the file cannot be read.
    pub fn read(&self) -> Result<Vec<u8>> {
        self.host()
            .fs()
            .read(self.path())
            .map_err(|e| Error::read(self.path(), ReadReason::ReadFailed(e)))
    }

    /// Read the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`ReadReason::StringDecodingFailed`] if the contents are not
    /// valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        String::from_utf8(self.read()?)
            .map_err(|e| Error::read(self.path(), ReadReason::StringDecodingFailed(e)))
    }

    /// Read the file as a decimal integer. Surrounding whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ReadReason::NotAnInteger`] if the text is not an integer.
    pub fn read_as_int(&self) -> Result<i64> {
        let text = self.read_to_string()?;
        text.trim()
            .parse()
            .map_err(|_| Error::read(self.path(), ReadReason::NotAnInteger(text.clone())))
    }
}
