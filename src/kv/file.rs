//! FileKeyValueStore - one JSON object file holding every key.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

use super::{KeyValueStore, KvError};

/// Key-value store persisted as a single JSON object `{ "key": "value" }`.
///
/// Nothing touches the filesystem until the first `get` or `set`. A missing
/// file reads as an empty map. Each write goes to its own uniquely named
/// sibling temp file which is then renamed over the target, so readers never
/// observe a half-written map and concurrent writers never share a temp path.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    write_guard: Arc<Mutex<()>>,
}

impl FileKeyValueStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, KvError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(KvError::Io(format!("{}: {}", self.path.display(), e))),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| KvError::Serde(format!("{}: {}", self.path.display(), e)))
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> Result<(), KvError> {
        let bytes = serde_json::to_vec_pretty(map).map_err(|e| KvError::Serde(e.to_string()))?;

        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)
                    .map_err(|e| KvError::Io(format!("{}: {}", parent.display(), e)))?;
                parent
            }
            None => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent)
            .map_err(|e| KvError::Io(format!("{}: {}", parent.display(), e)))?;
        tmp.write_all(&bytes)
            .map_err(|e| KvError::Io(format!("{}: {}", tmp.path().display(), e)))?;
        tmp.persist(&self.path)
            .map_err(|e| KvError::Io(format!("{}: {}", self.path.display(), e.error)))?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let _guard = self
            .write_guard
            .lock()
            .map_err(|_| KvError::LockPoisoned("write"))?;

        let mut map = self.load()?;
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
    }
}
