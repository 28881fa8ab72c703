use super::KeyValueStore;
use crate::error::{JotzError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "data.json";

/// File-backed store keeping the whole namespace in one `data.json`.
///
/// The file holds a JSON object mapping keys to string values and is
/// rewritten in full on every mutation (last-writer-wins if two processes
/// share the directory).
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(JotzError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(JotzError::Io)?;
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(JotzError::Serialization)?;
        Ok(entries)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(entries).map_err(JotzError::Serialization)?;
        fs::write(self.data_file(), content).map_err(JotzError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.load()?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
