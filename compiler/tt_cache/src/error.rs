use std::fmt;
use std::path::PathBuf;

/// Error during cache operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Filesystem failure at `path`.
    Io { path: PathBuf, message: String },
    /// `put` or `get` on a kernel whose provenance is empty.
    MissingProvenance,
    /// The index file could not be decoded or encoded.
    Corrupt { message: String },
}

impl CacheError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> CacheError {
        let path = path.into();
        move |e| CacheError::Io {
            path,
            message: e.to_string(),
        }
    }
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Io { path, message } => {
                write!(f, "cache I/O error at '{}': {message}", path.display())
            }
            CacheError::MissingProvenance => {
                f.write_str("kernel has no provenance; cache operations need one")
            }
            CacheError::Corrupt { message } => write!(f, "cache index is corrupt: {message}"),
        }
    }
}

impl std::error::Error for CacheError {}
