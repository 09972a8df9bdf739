use std::sync::Arc;

use cached::{Cached, TimedSizedCache};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: usize,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 10_000,
            ttl_secs: 86_400,
        }
    }
}

/// Block hash to height memo shared by every resolver of a process.
///
/// Each entry is a slot that is filled at most once; concurrent lookups of the
/// same block wait on the same slot instead of issuing their own request. A
/// slot whose lookup failed stays empty and is filled by the next caller.
pub struct BlockHeightCache {
    slots: Mutex<TimedSizedCache<String, Arc<OnceCell<u32>>>>,
}

impl BlockHeightCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            slots: Mutex::new(TimedSizedCache::with_size_and_lifespan(
                config.capacity.max(1),
                config.ttl_secs,
            )),
        }
    }

    pub fn slot(&self, block_hash: &str) -> Arc<OnceCell<u32>> {
        let key = block_hash.to_string();
        let mut slots = self.slots.lock();
        if let Some(slot) = slots.cache_get(&key) {
            return Arc::clone(slot);
        }

        let slot = Arc::new(OnceCell::new());
        slots.cache_set(key, Arc::clone(&slot));
        slot
    }

    pub fn get(&self, block_hash: &str) -> Option<u32> {
        self.slots
            .lock()
            .cache_get(&block_hash.to_string())
            .and_then(|slot| slot.get().copied())
    }

    pub fn len(&self) -> usize {
        self.slots.lock().cache_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BlockHeightCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_is_shared() {
        let cache = BlockHeightCache::default();
        let a = cache.slot("block");
        let b = cache.slot("block");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.get("block"), None);

        a.set(12).unwrap();
        assert_eq!(cache.get("block"), Some(12));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_is_bounded() {
        let cache = BlockHeightCache::new(&CacheConfig {
            capacity: 2,
            ttl_secs: 60,
        });
        for (height, hash) in ["a", "b", "c"].into_iter().enumerate() {
            cache.slot(hash).set(height as u32).unwrap();
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("c"), Some(2));
    }
}
