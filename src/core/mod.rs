//! Core utilities shared across commands
//!
//! - `cache`: cache directory layout and the two-tier LRU/disk cache
//! - `http`: HTTP client and header helpers

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{default_cache_dir, try_read_to_string, write_string, CacheKey, PoolCacheKey, UnifiedCache};
