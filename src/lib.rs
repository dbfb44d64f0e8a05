//! # chinook
//!
//! A tiny persistence layer that keeps one ordered collection of JSON
//! records in a single local file, mirrored in memory. Every mutation
//! rewrites the whole file; reads are served from memory.
//!
//! There is no indexing, no query language, no transaction log and no
//! concurrent-writer safety. If you need any of those, you want a real
//! database. If you need "a list of records that survives a restart",
//! this is enough:
//!
//! ```no_run
//! use chinook::{FlatFileStore, Mode, Record, StoreConfig};
//!
//! # fn main() -> chinook::Result<()> {
//! let config = StoreConfig { mode: Mode::Test, ..Default::default() };
//! let mut store = FlatFileStore::from_config(&config);
//!
//! store.load()?;
//! store.write_new_object(Record::new("1").with("name", "Jake Berg"))?;
//! assert!(store.get_item("1").is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use config::{Mode, StoreConfig};
pub use error::{Result, StoreError};
pub use model::{Collection, Record};
pub use store::FlatFileStore;
