use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use jobscout_logging::{scout_debug, scout_info};
use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::sync::{Mutex, RwLock};

use crate::StoreError;

/// Asynchronous key-value storage the proxy fronts.
///
/// Implementations serialize their own writes; callers may invoke methods
/// concurrently.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    /// Overwrites any existing value under `key`.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

/// Store persisted as one JSON object, rewritten after each change.
///
/// Writes go to a sibling temp file which is then renamed over the store
/// file, on the blocking pool so runtime workers never wait on the disk. The
/// in-memory map only changes once the file write succeeded.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, Value>>,
}

impl JsonFileStore {
    /// Opens the store at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if path.file_name().is_none() {
            return Err(StoreError::Unavailable(format!(
                "store path {:?} has no file name",
                path
            )));
        }

        let entries = load_entries(&path)?;
        scout_info!("Opened store {:?} with {} keys", path, entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Writes `next` to disk and hands it back for installing in memory.
    async fn persist(
        &self,
        next: BTreeMap<String, Value>,
    ) -> Result<BTreeMap<String, Value>, StoreError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<BTreeMap<String, Value>, StoreError> {
            write_entries(&path, &next)?;
            scout_debug!("Persisted {} keys to {:?}", next.len(), path);
            Ok(next)
        })
        .await
        .map_err(|err| StoreError::Unavailable(format!("store writer stopped: {err}")))?
    }
}

fn load_entries(path: &Path) -> Result<BTreeMap<String, Value>, StoreError> {
    let content = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(err) => return Err(err.into()),
    };
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(BTreeMap::new());
    }
    Ok(serde_json::from_slice(&content)?)
}

fn write_entries(path: &Path, entries: &BTreeMap<String, Value>) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Same directory as the store so the rename never crosses filesystems.
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| StoreError::Io(err.error))?;
    Ok(())
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        let mut next = entries.clone();
        next.insert(key.to_string(), value);
        *entries = self.persist(next).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        *entries = self.persist(BTreeMap::new()).await?;
        Ok(())
    }
}
