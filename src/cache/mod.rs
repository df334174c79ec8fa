//! Messages cache.
//!
//! One in-process namespace with two compartments: the all-messages list
//! (singleton entry) and a per-id LRU cache. Reads populate on miss; a write
//! anywhere evicts the whole namespace via [`MessageCache::invalidate_all`].
//!
//! Behavior is controlled via `bacheca.toml`:
//!
//! ```toml
//! [cache]
//! enabled = true
//! message_limit = 1024
//! ```

mod config;
mod lock;
mod store;

pub use config::CacheConfig;
pub use store::MessageCache;
