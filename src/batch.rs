//! Atomic write batches (`rocksdb_writebatch_t`).

use std::os::raw::c_char;
use std::sync::Arc;

use crate::engine::Engine;
use crate::error::{ResourceKind, Result};
use crate::handle::OwnedHandle;
use crate::sys;

/// A batch of updates applied atomically by [`Db::write`](crate::Db::write).
///
/// The batch is borrowed by the write call: it stays owned by this wrapper
/// and may be cleared and reused, or released, afterwards.
pub struct WriteBatch {
    handle: OwnedHandle<sys::rocksdb_writebatch_t>,
    engine: Arc<Engine>,
}

impl WriteBatch {
    /// Create an empty batch.
    pub fn new(engine: &Arc<Engine>) -> Result<WriteBatch> {
        // SAFETY: factory call; null is handled as the failure sentinel.
        let ptr = unsafe { (engine.api().writebatch_create)() };
        let handle =
            OwnedHandle::new(ptr, engine.api().writebatch_destroy, ResourceKind::WriteBatch)?;
        Ok(WriteBatch {
            handle,
            engine: Arc::clone(engine),
        })
    }

    /// Queue a key/value insertion.
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        let batch = self.handle.as_ptr()?;
        // SAFETY: live handle; the engine copies both slices during the call.
        unsafe {
            (self.engine.api().writebatch_put)(
                batch,
                key.as_ptr() as *const c_char,
                key.len(),
                value.as_ptr() as *const c_char,
                value.len(),
            )
        };
        Ok(())
    }

    /// Queue a key deletion.
    pub fn delete(&mut self, key: &[u8]) -> Result<()> {
        let batch = self.handle.as_ptr()?;
        // SAFETY: as above.
        unsafe {
            (self.engine.api().writebatch_delete)(batch, key.as_ptr() as *const c_char, key.len())
        };
        Ok(())
    }

    /// Remove all queued updates, keeping the batch usable.
    pub fn clear(&mut self) -> Result<()> {
        let batch = self.handle.as_ptr()?;
        // SAFETY: live handle.
        unsafe { (self.engine.api().writebatch_clear)(batch) };
        Ok(())
    }

    /// Number of queued updates.
    pub fn count(&self) -> Result<usize> {
        let batch = self.handle.as_ptr()?;
        // SAFETY: live handle, read-only engine call.
        Ok(unsafe { (self.engine.api().writebatch_count)(batch) } as usize)
    }

    /// Release the underlying native object. Idempotent; also runs on drop.
    pub fn close(&self) {
        self.handle.release();
    }

    pub(crate) fn as_ptr(&self) -> Result<*mut sys::rocksdb_writebatch_t> {
        self.handle.as_ptr()
    }
}
