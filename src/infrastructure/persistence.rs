use crate::domain::{Grid, StorageResult};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// The fixed store entry the grid is persisted under.
pub const STORAGE_KEY: &str = "grid-data.json";

/// A named-slot key-value store.
///
/// The grid is persisted under a single fixed key; abstracting the store
/// lets alternate backends (memory for tests, a file for the binary) be
/// substituted without touching the application layer.
pub trait KeyValueStore {
    /// Reads the value under `key`, or `None` if no entry exists or the
    /// entry cannot be read.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, unconditionally overwriting any previous
    /// entry.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory store backend, used in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: each key is one file under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Loads and saves the grid under [`STORAGE_KEY`].
///
/// The persisted layout is a JSON 2-D array of `number | null`, rows outer.
pub struct GridRepository;

impl GridRepository {
    /// Loads the grid from the store, falling back to an all-absent grid of
    /// the given dimensions when the entry is missing or unparseable. Data
    /// of a different shape is normalized to the given dimensions.
    pub fn load(store: &dyn KeyValueStore, rows: usize, columns: usize) -> Grid {
        let Some(raw) = store.get(STORAGE_KEY) else {
            return Grid::new(rows, columns);
        };

        match serde_json::from_str::<Vec<Vec<Option<f64>>>>(&raw) {
            Ok(cells) => Grid::from_cells(cells, rows, columns),
            Err(_) => Grid::new(rows, columns),
        }
    }

    /// Serializes the grid and writes it to the store.
    pub fn save(store: &mut dyn KeyValueStore, grid: &Grid) -> StorageResult<()> {
        let json = serde_json::to_string(grid.cells())?;
        store.set(STORAGE_KEY, &json)
    }
}
