use super::backend::StorageBackend;
use super::fs_backend::FsBackend;
use crate::config::{Mode, StoreConfig};
use crate::error::{Result, StoreError};
use crate::model::{Collection, Record};

/// A single ordered collection of JSON records, mirrored between memory
/// and one file on disk.
///
/// Reads (`get_all`, `get_item`, `get_last`) are served from memory and do
/// no I/O. Mutations (`write_new_object`, `delete_item`, `initialize`)
/// apply in memory first, then persist the full collection by overwriting
/// the file. Mutations take `&mut self`, so within one store instance the
/// mutate-then-persist sequence can never interleave with another call.
///
/// Before `load` the in-memory collection is empty; call `load` once after
/// construction to pick up whatever is on disk.
pub struct FlatFileStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    mode: Mode,
    items: Collection,
}

impl FlatFileStore<FsBackend> {
    /// Open a store on the data file selected by `config`.
    /// Does not touch the filesystem until `load` or the first mutation.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_backend(FsBackend::new(config.data_path()), config.mode)
    }
}

impl<B: StorageBackend> FlatFileStore<B> {
    pub fn with_backend(backend: B, mode: Mode) -> Self {
        Self {
            backend,
            mode,
            items: Vec::new(),
        }
    }

    /// Load the collection from disk, replacing in-memory state.
    ///
    /// A missing file is treated as an empty collection; the file itself
    /// is created by the first persist. A present-but-empty file is
    /// recovered by resetting to an empty collection and healing the file.
    /// Any other read or parse failure propagates to the caller.
    pub fn load(&mut self) -> Result<&[Record]> {
        match self.backend.read()? {
            None => {
                self.items = Vec::new();
            }
            Some(raw) if raw.trim().is_empty() => {
                // Empty file: the one recognized corruption sub-case.
                self.items = Vec::new();
                self.persist()?;
            }
            Some(raw) => {
                self.items = serde_json::from_str(&raw)?;
            }
        }
        Ok(&self.items)
    }

    /// Reset the data file to `initial` by full overwrite, replacing
    /// in-memory state.
    ///
    /// Destructive, so it refuses to run outside test mode unless `force`
    /// is set; in that case nothing is written.
    pub fn initialize(&mut self, force: bool, initial: Collection) -> Result<()> {
        if !force && !self.mode.is_test() {
            return Err(StoreError::ResetNotPermitted);
        }
        self.items = initial;
        self.persist()
    }

    /// The in-memory collection, as-is. No copy, no I/O.
    pub fn get_all(&self) -> &[Record] {
        &self.items
    }

    /// First record whose id matches, or None. Pure read.
    pub fn get_item(&self, id: &str) -> Option<&Record> {
        self.items.iter().find(|record| record.id() == Some(id))
    }

    /// The record at the end of insertion order, or None when empty.
    pub fn get_last(&self) -> Option<&Record> {
        self.items.last()
    }

    /// Append a record and persist the full collection.
    ///
    /// The record must carry a non-empty string `id`; otherwise this fails
    /// with [`StoreError::IdRequired`] and leaves memory and disk
    /// untouched. Duplicate ids are allowed; lookups return the first
    /// match.
    pub fn write_new_object(&mut self, record: Record) -> Result<()> {
        if record.id().is_none() {
            return Err(StoreError::IdRequired);
        }
        self.items.push(record);
        self.persist()
    }

    /// Remove every record whose id matches (not just the first),
    /// preserving the order of the rest, then persist.
    ///
    /// A miss is a silent no-op that still rewrites the unchanged
    /// collection.
    pub fn delete_item(&mut self, id: &str) -> Result<()> {
        self.items.retain(|record| record.id() != Some(id));
        self.persist()
    }

    /// Serialize the whole collection and overwrite the data file.
    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.items)?;
        self.backend.write(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn make_store() -> FlatFileStore<MemBackend> {
        FlatFileStore::with_backend(MemBackend::new(), Mode::Test)
    }

    // --- Write & Lookup Tests ---

    #[test]
    fn test_write_then_get_item() {
        let mut store = make_store();
        let record = Record::new("32k324").with("name", "Jake Berg");

        store.write_new_object(record.clone()).unwrap();

        assert_eq!(store.get_item("32k324"), Some(&record));
    }

    #[test]
    fn test_get_item_returns_first_match_on_duplicates() {
        let mut store = make_store();
        store
            .write_new_object(Record::new("1").with("name", "first"))
            .unwrap();
        store
            .write_new_object(Record::new("1").with("name", "second"))
            .unwrap();

        let found = store.get_item("1").unwrap();
        assert_eq!(
            found.get("name").and_then(serde_json::Value::as_str),
            Some("first")
        );
    }

    #[test]
    fn test_get_item_miss_returns_none() {
        let mut store = make_store();
        store.write_new_object(Record::new("1")).unwrap();

        assert!(store.get_item("nope").is_none());
    }

    #[test]
    fn test_get_last_returns_last_inserted() {
        let mut store = make_store();
        for (id, name) in [("1", "Jake Berg"), ("2", "Sally Summers"), ("3", "Jason Atwater")] {
            store
                .write_new_object(Record::new(id).with("name", name))
                .unwrap();
        }

        assert_eq!(store.get_last().unwrap().id(), Some("3"));
    }

    #[test]
    fn test_get_last_empty_returns_none() {
        let store = make_store();
        assert!(store.get_last().is_none());
    }

    // --- Validation Tests ---

    #[test]
    fn test_write_without_id_fails_and_changes_nothing() {
        let mut store = make_store();
        let record = Record::from(serde_json::Map::new()).with("name", "Jake Berg");

        let result = store.write_new_object(record);

        assert!(matches!(result, Err(StoreError::IdRequired)));
        assert!(store.get_all().is_empty());
        // No persist happened either.
        assert_eq!(store.backend.write_count(), 0);
    }

    #[test]
    fn test_write_with_empty_id_fails() {
        let mut store = make_store();
        let result = store.write_new_object(Record::new(""));
        assert!(matches!(result, Err(StoreError::IdRequired)));
    }

    // --- Delete Tests ---

    #[test]
    fn test_delete_removes_all_matches_keeps_rest() {
        let mut store = make_store();
        for id in ["1", "2", "1", "3"] {
            store.write_new_object(Record::new(id)).unwrap();
        }

        store.delete_item("1").unwrap();

        assert!(store.get_item("1").is_none());
        assert!(store.get_item("2").is_some());
        assert!(store.get_item("3").is_some());
        assert_eq!(store.get_all().len(), 2);
        // Relative order of the remainder is preserved.
        assert_eq!(store.get_all()[0].id(), Some("2"));
        assert_eq!(store.get_all()[1].id(), Some("3"));
    }

    #[test]
    fn test_delete_miss_is_noop_but_still_persists() {
        let mut store = make_store();
        store.write_new_object(Record::new("1")).unwrap();
        let writes_before = store.backend.write_count();

        store.delete_item("nope").unwrap();

        assert_eq!(store.get_all().len(), 1);
        assert_eq!(store.backend.write_count(), writes_before + 1);
    }

    // --- Initialize Tests ---

    #[test]
    fn test_initialize_outside_test_mode_fails_without_force() {
        let mut store = FlatFileStore::with_backend(MemBackend::new(), Mode::Default);

        let result = store.initialize(false, vec![]);

        assert!(matches!(result, Err(StoreError::ResetNotPermitted)));
        assert_eq!(store.backend.write_count(), 0);
    }

    #[test]
    fn test_initialize_outside_test_mode_succeeds_with_force() {
        let mut store = FlatFileStore::with_backend(MemBackend::new(), Mode::Default);
        store.initialize(true, vec![Record::new("1")]).unwrap();
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_initialize_round_trip() {
        let mut store = make_store();
        let initial = vec![
            Record::new("a").with("n", 1),
            Record::new("b").with("nested", serde_json::json!({"x": [1, 2, 3]})),
        ];

        store.initialize(true, initial.clone()).unwrap();
        let loaded = store.load().unwrap().to_vec();

        assert_eq!(loaded, initial);
    }

    #[test]
    fn test_initialize_empty_round_trip() {
        let mut store = make_store();
        store.initialize(true, vec![]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    // --- Load Lifecycle Tests ---

    #[test]
    fn test_load_missing_file_yields_empty_without_creating_it() {
        let mut store = make_store();

        let loaded = store.load().unwrap().to_vec();

        assert!(loaded.is_empty());
        assert_eq!(store.backend.write_count(), 0);
    }

    #[test]
    fn test_first_persist_creates_the_file() {
        let mut store = make_store();
        store.load().unwrap();
        store.write_new_object(Record::new("1")).unwrap();

        assert_eq!(store.backend.contents().as_deref(), Some("[{\"id\":\"1\"}]"));
    }

    #[test]
    fn test_load_empty_file_recovers_and_heals() {
        let backend = MemBackend::new();
        backend.seed("");
        let mut store = FlatFileStore::with_backend(backend, Mode::Test);

        let loaded = store.load().unwrap().to_vec();

        assert!(loaded.is_empty());
        assert!(store.get_all().is_empty());
        assert_eq!(store.backend.contents().as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_whitespace_file_recovers() {
        let backend = MemBackend::new();
        backend.seed("  \n\t ");
        let mut store = FlatFileStore::with_backend(backend, Mode::Test);

        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.backend.contents().as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_corrupt_file_propagates_parse_error() {
        let backend = MemBackend::new();
        backend.seed("{not json");
        let mut store = FlatFileStore::with_backend(backend, Mode::Test);

        let result = store.load();

        assert!(matches!(result, Err(StoreError::Serialization(_))));
        // The corrupt file is left alone.
        assert_eq!(store.backend.contents().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_load_replaces_in_memory_state() {
        let backend = MemBackend::new();
        backend.seed("[{\"id\":\"on-disk\"}]");
        let mut store = FlatFileStore::with_backend(backend, Mode::Test);
        store.items.push(Record::new("stale"));

        store.load().unwrap();

        assert!(store.get_item("stale").is_none());
        assert!(store.get_item("on-disk").is_some());
    }

    #[test]
    fn test_records_without_id_on_disk_are_kept_but_unaddressable() {
        let backend = MemBackend::new();
        backend.seed("[{\"name\":\"no id\"},{\"id\":\"1\"}]");
        let mut store = FlatFileStore::with_backend(backend, Mode::Test);

        store.load().unwrap();
        assert_eq!(store.get_all().len(), 2);

        // Deleting by any id never matches the id-less record.
        store.delete_item("1").unwrap();
        assert_eq!(store.get_all().len(), 1);
        assert!(store.get_all()[0].id().is_none());
    }

    // --- Error Handling Tests ---

    #[test]
    fn test_write_fails_on_backend_write_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let mut store = FlatFileStore::with_backend(backend, Mode::Test);

        let result = store.write_new_object(Record::new("1"));

        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
