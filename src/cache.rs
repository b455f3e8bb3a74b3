//! Block cache wrapper (`rocksdb_cache_t`).

use std::sync::Arc;

use crate::engine::Engine;
use crate::error::{ResourceKind, Result};
use crate::handle::OwnedHandle;
use crate::sys;

/// A block cache with LRU eviction.
///
/// Caches are shared with the engine: installing one through
/// [`Options::set_row_cache`](crate::Options::set_row_cache) hands the
/// engine an internal reference. Closing this wrapper drops the caller's
/// reference; the underlying cache survives until the engine has dropped
/// its own.
pub struct Cache {
    handle: OwnedHandle<sys::rocksdb_cache_t>,
    engine: Arc<Engine>,
}

impl Cache {
    /// Create an LRU cache with the given capacity in bytes.
    pub fn new_lru(engine: &Arc<Engine>, capacity: usize) -> Result<Cache> {
        // SAFETY: factory call; null is handled as the failure sentinel.
        let ptr = unsafe { (engine.api().cache_create_lru)(capacity) };
        let handle = OwnedHandle::new(ptr, engine.api().cache_destroy, ResourceKind::Cache)?;
        Ok(Cache {
            handle,
            engine: Arc::clone(engine),
        })
    }

    /// Memory currently pinned by the cache, in bytes.
    pub fn usage(&self) -> Result<usize> {
        let cache = self.handle.as_ptr()?;
        // SAFETY: live handle, read-only engine call.
        Ok(unsafe { (self.engine.api().cache_get_usage)(cache) })
    }

    /// Drop the caller's reference. Idempotent; also runs on drop.
    pub fn close(&self) {
        if self.handle.release() {
            log::debug!("released cache");
        }
    }

    pub(crate) fn as_ptr(&self) -> Result<*mut sys::rocksdb_cache_t> {
        self.handle.as_ptr()
    }
}
