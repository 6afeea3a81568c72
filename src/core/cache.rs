//! Two-tier caching: in-memory LRU in front of JSON files on disk
//!
//! - L1 Cache: In-memory LRU cache for fast access
//! - L2 Cache: File system persistence under an explicit cache directory
//!
//! Caches are owned by whoever constructs them; nothing here is global.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};
use tracing::{debug, warn};

/// Directory name used under the platform cache directory.
pub const APP_DIR: &str = "kickoff-kings";

/// Path: ~/.cache/kickoff-kings
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(APP_DIR)
}

/// SQLite file holding cached seasons and draft sessions.
pub fn database_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("kickoff.db")
}

/// Default location of a saved projection model.
pub fn model_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("projection-model.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Key usable for both memory and disk caching
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// String form used as the file name on disk
    fn to_file_key(&self) -> String;

    fn to_file_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", self.to_file_key()))
    }
}

/// Key for a scored player pool: which source, at which version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolCacheKey {
    pub source_id: String,
    pub version: u64,
}

impl CacheKey for PoolCacheKey {
    fn to_file_key(&self) -> String {
        let slug: String = self
            .source_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("scored_pool_{}_v{}", slug, self.version)
    }
}

/// Unified cache that combines LRU memory cache with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Mutex<LruCache<K, V>>,
    memory_capacity: usize,
    disk_dir: Option<PathBuf>,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Memory-only cache
    pub fn in_memory(memory_capacity: usize) -> Self {
        Self::build(memory_capacity, None)
    }

    /// Memory cache backed by JSON files in `dir`
    pub fn with_disk(memory_capacity: usize, dir: impl Into<PathBuf>) -> Self {
        Self::build(memory_capacity, Some(dir.into()))
    }

    fn build(memory_capacity: usize, disk_dir: Option<PathBuf>) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            memory_capacity: capacity.get(),
            disk_dir,
        }
    }

    fn memory(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Some(value) = self.memory().get(key) {
            return Some(value.clone());
        }

        let value = self.get_from_disk(key)?;
        // Promote to memory cache
        self.memory().put(key.clone(), value.clone());
        Some(value)
    }

    /// Put an item into cache (stores in both memory and disk)
    pub fn put(&self, key: K, value: V) {
        if let Err(e) = self.put_to_disk(&key, &value) {
            warn!(key = %key.to_file_key(), error = %e, "failed to write disk cache entry");
        }
        self.memory().put(key, value);
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = key.to_file_path(self.disk_dir.as_deref()?);
        let content = try_read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(value) => {
                debug!(path = %path.display(), "disk cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable disk cache entry");
                None
            }
        }
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let Some(dir) = self.disk_dir.as_deref() else {
            return Ok(());
        };
        let content = serde_json::to_string(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&key.to_file_path(dir), &content)
    }

    /// (entries in memory, memory capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.memory().len(), self.memory_capacity)
    }
}
