//! Cache configuration.

use std::path::PathBuf;

/// Environment variable naming the cache directory.
pub const CACHE_DIR_ENV: &str = "TT_EDSL_CACHE_DIR";

/// Cache directory used when [`CACHE_DIR_ENV`] is unset.
pub const DEFAULT_CACHE_DIR: &str = "./.tt_edsl";

/// Where and how the cache stores its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Root directory for kernel files and the index.
    pub cache_dir: PathBuf,
    /// File name of the index inside `cache_dir`.
    pub index_name: String,
    /// Prefix of every kernel file name.
    pub file_prefix: String,
    /// Extension of kernel files, without the dot.
    pub extension: String,
}

impl CacheConfig {
    #[must_use]
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            index_name: "index.bin".to_string(),
            file_prefix: "ttedsl_kernel".to_string(),
            extension: "cpp".to_string(),
        }
    }

    /// Directory from `TT_EDSL_CACHE_DIR`, or `./.tt_edsl`.
    #[must_use]
    pub fn from_env() -> Self {
        let dir = std::env::var_os(CACHE_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR), PathBuf::from);
        Self::new(dir)
    }

    #[must_use]
    pub fn with_index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = name.into();
        self
    }

    #[must_use]
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.cache_dir.join(&self.index_name)
    }

    /// Lock file guarding the index, e.g. `index.bin.lock`.
    #[must_use]
    pub fn lock_path(&self) -> PathBuf {
        self.cache_dir.join(format!("{}.lock", self.index_name))
    }

    /// File name for a kernel of `role` whose text hashes to `hash`.
    #[must_use]
    pub fn file_name(&self, role: &str, hash: crate::ContentHash) -> String {
        format!("{}_{role}_{hash}.{}", self.file_prefix, self.extension)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
