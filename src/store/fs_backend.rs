use super::backend::StorageBackend;
use crate::error::{Result, StoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one data file, overwritten whole on every write.
pub struct FsBackend {
    data_path: PathBuf,
}

impl FsBackend {
    pub fn new<P: AsRef<Path>>(data_path: P) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
        }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.data_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(StoreError::Io)?;
            }
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.data_path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn write(&self, contents: &str) -> Result<()> {
        self.ensure_parent_dir()?;

        // Atomic write: tmp in the same directory, then rename over the target.
        let tmp_path = self
            .data_path
            .with_file_name(format!(".db-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, contents).map_err(StoreError::Io)?;
        fs::rename(&tmp_path, &self.data_path).map_err(StoreError::Io)?;

        Ok(())
    }

    fn data_path(&self) -> PathBuf {
        self.data_path.clone()
    }
}
