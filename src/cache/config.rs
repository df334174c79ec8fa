//! Cache configuration.

use std::num::NonZeroUsize;

const DEFAULT_MESSAGE_LIMIT: usize = 1024;

/// Cache behavior resolved from the `[cache]` section of `bacheca.toml`.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Enable the messages cache; when false the service reads the store
    /// directly.
    pub enabled: bool,
    /// Maximum entries in the per-id message cache.
    pub message_limit: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            message_limit: DEFAULT_MESSAGE_LIMIT,
        }
    }
}

impl From<&crate::config::CacheSettings> for CacheConfig {
    fn from(settings: &crate::config::CacheSettings) -> Self {
        Self {
            enabled: settings.enabled,
            message_limit: settings.message_limit,
        }
    }
}

impl CacheConfig {
    /// Returns the per-id limit as NonZeroUsize, clamping to 1 if zero.
    pub fn message_limit_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.message_limit).unwrap_or(NonZeroUsize::MIN)
    }
}
