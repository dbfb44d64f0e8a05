use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while FlatFileStore handles the "what" (collection semantics).
pub trait StorageBackend {
    /// Read the raw serialized collection.
    /// Returns Ok(None) if no data file exists yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the serialized collection in one shot.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, contents: &str) -> Result<()>;

    /// The path of the data file.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn data_path(&self) -> PathBuf;
}
