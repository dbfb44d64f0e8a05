use super::backend::StorageBackend;
use crate::error::{Result, StoreError};
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is
/// single-threaded. This avoids the overhead of `RwLock` while still
/// allowing the `StorageBackend` trait to use `&self` for all methods.
pub struct MemBackend {
    contents: RefCell<Option<String>>,
    write_count: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            contents: RefCell::new(None),
            write_count: RefCell::new(0),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the raw file contents, bypassing the store.
    /// Useful for seeding empty or corrupt data.
    pub fn seed(&self, raw: &str) {
        *self.contents.borrow_mut() = Some(raw.to_string());
    }

    /// Raw file contents as last written, or None if never written.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Number of writes that have been accepted.
    pub fn write_count(&self) -> usize {
        *self.write_count.borrow()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, new_contents: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::Other,
                "simulated write error",
            )));
        }
        *self.contents.borrow_mut() = Some(new_contents.to_string());
        *self.write_count.borrow_mut() += 1;
        Ok(())
    }

    fn data_path(&self) -> PathBuf {
        PathBuf::from("memory://chinook.db")
    }
}
