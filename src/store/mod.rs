//! # Storage Layer
//!
//! One component lives here: [`FlatFileStore`]. It holds the ordered
//! collection of records in memory and mirrors it to a single JSON file,
//! rewriting the whole file after every mutation.
//!
//! ## Architecture
//!
//! The [`backend::StorageBackend`] trait splits the "how" of storage
//! (filesystem vs memory) from the "what" (collection semantics, which
//! live in [`flat_store::FlatFileStore`]):
//!
//! - [`fs_backend::FsBackend`]: production implementation. Whole-file
//!   overwrites go through a temp-file-then-rename step so a crash
//!   mid-write cannot truncate the data file.
//! - [`mem_backend::MemBackend`]: for testing store logic without
//!   filesystem I/O.
//!
//! ## Load lifecycle
//!
//! The only non-trivial part of the store is what `load` does when the
//! file is not a well-formed collection:
//!
//! - **Missing file**: treated as an empty collection. The file is not
//!   created eagerly; the first persist creates it.
//! - **Empty file**: recognized corruption sub-case. Recovered by
//!   resetting to an empty collection and healing the file to `[]`.
//! - **Anything else unreadable or unparseable**: propagated to the
//!   caller unchanged. No retry, no logging, no partial recovery.
//!
//! ## What this is not
//!
//! There is no locking and no cross-process coordination. Two store
//! instances pointed at the same path will clobber each other's writes.
//! Within one instance, `&mut self` on every mutation means the
//! append-then-persist sequence cannot interleave.

pub mod backend;
pub mod flat_store;
pub mod fs_backend;
pub mod mem_backend;

pub use flat_store::FlatFileStore;
