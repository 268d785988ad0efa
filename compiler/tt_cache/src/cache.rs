//! The kernel store and its on-disk index.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, MutexGuard};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use tt_dsl::{Kernel, Role};

use crate::{hash_source, CacheConfig, CacheError, ContentHash};

/// Bumped whenever the index layout changes.
const INDEX_VERSION: u32 = 1;

/// What the index records about one cached kernel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// File name relative to the cache directory.
    pub file: String,
    pub role: String,
    pub provenance: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Index {
    version: u32,
    entries: FxHashMap<ContentHash, CacheEntry>,
}

type Entries = FxHashMap<ContentHash, CacheEntry>;

/// Content-addressable store of rendered kernels.
///
/// One cache may be shared between threads; the index is guarded by a
/// mutex and rewritten atomically after every change. Several caches may
/// share one directory: every change takes an exclusive lock on
/// `<index>.lock`, reloads the index from disk and merges into it, and
/// reads refresh from disk under a shared lock.
#[derive(Debug)]
pub struct KernelCache {
    config: CacheConfig,
    entries: Mutex<Entries>,
}

impl KernelCache {
    /// Open the cache, creating its directory if needed and loading an
    /// existing index.
    pub fn open(config: CacheConfig) -> Result<Self, CacheError> {
        fs::create_dir_all(&config.cache_dir).map_err(CacheError::io(&config.cache_dir))?;
        let entries = {
            let _lock = lock_file(&config.lock_path(), false)?;
            load_index(&config.index_path())?
        };
        debug!(
            dir = %config.cache_dir.display(),
            entries = entries.len(),
            "opened kernel cache"
        );
        Ok(Self {
            config,
            entries: Mutex::new(entries),
        })
    }

    /// Is a kernel with identical text cached?
    pub fn contains<R: Role>(&self, kernel: &Kernel<R>) -> bool {
        let hash = hash_source(kernel.source());
        self.synced().contains_key(&hash)
    }

    /// Persist `kernel`. Returns `false` without touching the disk when
    /// identical text is already cached.
    pub fn put<R: Role>(&self, kernel: &Kernel<R>) -> Result<bool, CacheError> {
        require_provenance(kernel)?;
        let hash = hash_source(kernel.source());
        let (mut entries, _lock) = self.lock_for_write()?;
        if entries.contains_key(&hash) {
            debug!(%hash, provenance = kernel.provenance(), "kernel already cached");
            return Ok(false);
        }

        let file = self.config.file_name(R::NAME, hash);
        let path = self.config.cache_dir.join(&file);
        write_atomic(&self.config.cache_dir, &path, kernel.source().as_bytes())?;
        entries.insert(
            hash,
            CacheEntry {
                file,
                role: R::NAME.to_string(),
                provenance: kernel.provenance().to_string(),
            },
        );
        self.save(&entries)?;
        debug!(%hash, path = %path.display(), "cached kernel");
        Ok(true)
    }

    /// Path of the cached file for `kernel`, if present on disk.
    pub fn get<R: Role>(&self, kernel: &Kernel<R>) -> Result<Option<PathBuf>, CacheError> {
        require_provenance(kernel)?;
        let hash = hash_source(kernel.source());
        let entries = self.synced();
        let Some(entry) = entries.get(&hash) else {
            debug!(%hash, "cache miss");
            return Ok(None);
        };
        let path = self.config.cache_dir.join(&entry.file);
        if path.is_file() {
            debug!(%hash, "cache hit");
            Ok(Some(path))
        } else {
            warn!(%hash, path = %path.display(), "cached kernel file is missing");
            Ok(None)
        }
    }

    /// Drop entries whose file is gone or no longer hashes to its key,
    /// deleting stale files. Returns the number of entries dropped.
    pub fn purge(&self) -> Result<usize, CacheError> {
        let (mut entries, _lock) = self.lock_for_write()?;
        let mut stale = Vec::new();
        for (&hash, entry) in entries.iter() {
            let path = self.config.cache_dir.join(&entry.file);
            let fresh = fs::read_to_string(&path).is_ok_and(|text| hash_source(&text) == hash);
            if !fresh {
                stale.push((hash, path));
            }
        }

        for (hash, path) in &stale {
            entries.remove(hash);
            if path.exists() {
                fs::remove_file(path).map_err(CacheError::io(path))?;
            }
        }
        if !stale.is_empty() {
            self.save(&entries)?;
        }
        debug!(removed = stale.len(), remaining = entries.len(), "purged kernel cache");
        Ok(stale.len())
    }

    /// Delete every cached file and empty the index.
    pub fn clear(&self) -> Result<(), CacheError> {
        let (mut entries, _lock) = self.lock_for_write()?;
        for entry in entries.values() {
            let path = self.config.cache_dir.join(&entry.file);
            if path.exists() {
                fs::remove_file(&path).map_err(CacheError::io(&path))?;
            }
        }
        entries.clear();
        self.save(&entries)
    }

    /// Number of cached kernels, as of the last index on disk.
    pub fn len(&self) -> usize {
        self.synced().len()
    }

    pub fn is_empty(&self) -> bool {
        self.synced().is_empty()
    }

    /// Snapshot of the index, ordered by hash.
    pub fn entries(&self) -> Vec<(ContentHash, CacheEntry)> {
        let mut all: Vec<_> = self
            .synced()
            .iter()
            .map(|(hash, entry)| (*hash, entry.clone()))
            .collect();
        all.sort_by_key(|(hash, _)| *hash);
        all
    }

    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Take the in-process mutex and the exclusive file lock, then reload
    /// the index so changes made through other handles are kept.
    fn lock_for_write(&self) -> Result<(MutexGuard<'_, Entries>, File), CacheError> {
        let mut entries = self.entries.lock();
        let lock = lock_file(&self.config.lock_path(), true)?;
        *entries = load_index(&self.config.index_path())?;
        Ok((entries, lock))
    }

    /// The in-memory index, refreshed from disk. A failed refresh keeps
    /// the last known state.
    fn synced(&self) -> MutexGuard<'_, Entries> {
        let mut entries = self.entries.lock();
        let fresh = lock_file(&self.config.lock_path(), false)
            .and_then(|_lock| load_index(&self.config.index_path()));
        match fresh {
            Ok(fresh) => *entries = fresh,
            Err(error) => warn!(%error, "could not refresh kernel index"),
        }
        entries
    }

    fn save(&self, entries: &Entries) -> Result<(), CacheError> {
        let index = Index {
            version: INDEX_VERSION,
            entries: entries.clone(),
        };
        let bytes = bincode::serialize(&index).map_err(|e| CacheError::Corrupt {
            message: e.to_string(),
        })?;
        write_atomic(&self.config.cache_dir, &self.config.index_path(), &bytes)
    }
}

fn require_provenance<R: Role>(kernel: &Kernel<R>) -> Result<(), CacheError> {
    if kernel.provenance().is_empty() {
        warn!(role = R::NAME, "skipping cache operation on kernel without provenance");
        return Err(CacheError::MissingProvenance);
    }
    Ok(())
}

/// Open `path` and lock it. The lock is released when the file is dropped.
fn lock_file(path: &Path, exclusive: bool) -> Result<File, CacheError> {
    let file = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .truncate(false)
        .open(path)
        .map_err(CacheError::io(path))?;
    let locked = if exclusive {
        file.lock()
    } else {
        file.lock_shared()
    };
    locked.map_err(CacheError::io(path))?;
    Ok(file)
}

fn load_index(path: &Path) -> Result<Entries, CacheError> {
    if !path.exists() {
        return Ok(FxHashMap::default());
    }
    let bytes = fs::read(path).map_err(CacheError::io(path))?;
    let index: Index = bincode::deserialize(&bytes).map_err(|e| CacheError::Corrupt {
        message: e.to_string(),
    })?;
    if index.version != INDEX_VERSION {
        return Err(CacheError::Corrupt {
            message: format!(
                "index version {} (expected {INDEX_VERSION})",
                index.version
            ),
        });
    }
    Ok(index.entries)
}

/// Write `bytes` to a temp file in `dir`, then rename it over `dest`.
fn write_atomic(dir: &Path, dest: &Path, bytes: &[u8]) -> Result<(), CacheError> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(CacheError::io(dir))?;
    tmp.write_all(bytes).map_err(CacheError::io(tmp.path()))?;
    tmp.persist(dest)
        .map_err(|e| CacheError::io(dest)(e.error))?;
    Ok(())
}
