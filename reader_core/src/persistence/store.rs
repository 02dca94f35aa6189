//! Key-value stores backing the history.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::PersistError;

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
    fn remove(&mut self, key: &str) -> Result<(), PersistError>;
}

/// In-process store; contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        self.values.remove(key);
        Ok(())
    }
}

/// One file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for storage; it is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes a sibling temporary file and renames it over the key's file,
    /// so a crash never leaves a half-written value behind.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        fs::create_dir_all(&self.dir)?;
        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(value.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let saves = dir.path().join("saves");

        let mut store = FileStore::new(&saves);
        assert_eq!(store.get("story-history").unwrap(), None);
        store.set("story-history", "[1,2]").unwrap();

        let reopened = FileStore::new(&saves);
        assert_eq!(
            reopened.get("story-history").unwrap().as_deref(),
            Some("[1,2]")
        );
    }

    #[test]
    fn test_file_store_overwrite_leaves_only_the_key_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());

        store.set("story-history", "[1,2,3,4,5]").unwrap();
        store.set("story-history", "[1]").unwrap();

        assert_eq!(store.get("story-history").unwrap().as_deref(), Some("[1]"));
        let files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(files, vec![std::ffi::OsString::from("story-history.json")]);
    }

    #[test]
    fn test_file_store_keys_stay_in_directory() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("../escape", "x").unwrap();

        assert!(dir.path().join(".._escape.json").exists());
    }

    #[test]
    fn test_file_store_remove_missing_key() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(store.remove("nothing").is_ok());
    }
}
