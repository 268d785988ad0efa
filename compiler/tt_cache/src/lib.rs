//! TT Kernel Cache
//!
//! Persists rendered kernels to disk, keyed by a hash of their text.
//!
//! Each cached kernel is a `.cpp` file in the cache directory; an index
//! file maps content hashes to those files and records the role and
//! provenance of the kernel that produced them. Entries are never
//! overwritten: a second `put` of identical text is a no-op.

mod cache;
mod config;
mod error;
mod hash;

pub use cache::{CacheEntry, KernelCache};
pub use config::{CacheConfig, CACHE_DIR_ENV, DEFAULT_CACHE_DIR};
pub use error::CacheError;
pub use hash::{hash_source, ContentHash};
