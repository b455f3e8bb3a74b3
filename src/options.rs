//! Database, read, and write options.
//!
//! Setters forward each value opaquely to the engine; nothing is
//! interpreted on the Rust side. Every setter requires a live handle and
//! fails with `UseAfterRelease` once the wrapper has been closed.

use std::os::raw::{c_int, c_uchar};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cache::Cache;
use crate::comparator::Comparator;
use crate::engine::Engine;
use crate::env::{Env, EnvInner};
use crate::error::{ResourceKind, Result};
use crate::handle::OwnedHandle;
use crate::sys;

/// Compression algorithm selector.
///
/// Discriminants are the engine's stable wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    None = 0,
    Snappy = 1,
    Zlib = 2,
    Bz2 = 3,
    Lz4 = 4,
    Lz4hc = 5,
    Xpress = 6,
    Zstd = 7,
}

/// Database options (`rocksdb_options_t`).
pub struct Options {
    handle: OwnedHandle<sys::rocksdb_options_t>,
    engine: Arc<Engine>,
    env: Option<Arc<EnvInner>>,
}

impl Options {
    /// Create a default options object.
    pub fn new(engine: &Arc<Engine>) -> Result<Options> {
        // SAFETY: factory call; null is handled as the failure sentinel.
        let ptr = unsafe { (engine.api().options_create)() };
        let handle = OwnedHandle::new(ptr, engine.api().options_destroy, ResourceKind::Options)?;
        Ok(Options {
            handle,
            engine: Arc::clone(engine),
            env: None,
        })
    }

    /// Create the database if it is missing when opened.
    pub fn set_create_if_missing(&mut self, value: bool) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        // SAFETY: live handle, mutation happens entirely inside the engine.
        unsafe { (self.engine.api().options_set_create_if_missing)(opts, value as c_uchar) };
        Ok(())
    }

    /// Fail opening if the database already exists.
    pub fn set_error_if_exists(&mut self, value: bool) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        // SAFETY: as above.
        unsafe { (self.engine.api().options_set_error_if_exists)(opts, value as c_uchar) };
        Ok(())
    }

    /// Size of the in-memory write buffer, in bytes.
    pub fn set_write_buffer_size(&mut self, size: usize) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        // SAFETY: as above.
        unsafe { (self.engine.api().options_set_write_buffer_size)(opts, size) };
        Ok(())
    }

    /// Maximum number of open files; `-1` means unlimited.
    pub fn set_max_open_files(&mut self, count: i32) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        // SAFETY: as above.
        unsafe { (self.engine.api().options_set_max_open_files)(opts, count) };
        Ok(())
    }

    /// Tune thread pools for the given total thread count.
    pub fn increase_parallelism(&mut self, threads: i32) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        // SAFETY: as above.
        unsafe { (self.engine.api().options_increase_parallelism)(opts, threads) };
        Ok(())
    }

    /// Select the block compression algorithm.
    pub fn set_compression(&mut self, compression: Compression) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        // SAFETY: as above.
        unsafe { (self.engine.api().options_set_compression)(opts, compression as c_int) };
        Ok(())
    }

    /// Install a custom key comparator.
    ///
    /// The comparator is consumed: the engine owns it from here on and
    /// destroys it together with these options. The wrapper is released
    /// without running the destructor, so neither dropping it nor closing
    /// it again can double-free the transferred handle.
    pub fn set_comparator(&mut self, comparator: Comparator) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        let raw = comparator.surrender()?;
        // SAFETY: both handles are live and ownership of `raw` passes to
        // the engine with this call.
        unsafe { (self.engine.api().options_set_comparator)(opts, raw) };
        Ok(())
    }

    /// Use a specific environment.
    ///
    /// The env is borrowed; the caller keeps ownership. These options (and
    /// any database opened with them) retain a reference so the borrowed
    /// state cannot disappear underneath them.
    pub fn set_env(&mut self, env: &Env) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        let raw = env.inner().handle.as_ptr()?;
        // SAFETY: both handles are live; the engine only stores the pointer.
        unsafe { (self.engine.api().options_set_env)(opts, raw) };
        self.env = Some(Arc::clone(env.inner()));
        Ok(())
    }

    /// Install a row cache, shared with the engine.
    ///
    /// The engine takes one internal reference; the caller may release the
    /// cache at any time and the underlying object survives until both
    /// sides have let go.
    pub fn set_row_cache(&mut self, cache: &Cache) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        let raw = cache.as_ptr()?;
        // SAFETY: both handles are live; the engine refcounts the cache.
        unsafe { (self.engine.api().options_set_row_cache)(opts, raw) };
        Ok(())
    }

    /// Release the underlying native object. Idempotent; also runs on drop.
    pub fn close(&self) {
        if self.handle.release() {
            log::debug!("released options");
        }
    }

    pub(crate) fn as_ptr(&self) -> Result<*mut sys::rocksdb_options_t> {
        self.handle.as_ptr()
    }

    pub(crate) fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    pub(crate) fn env_guard(&self) -> Option<Arc<EnvInner>> {
        self.env.clone()
    }
}

/// Read options (`rocksdb_readoptions_t`).
pub struct ReadOptions {
    handle: OwnedHandle<sys::rocksdb_readoptions_t>,
    engine: Arc<Engine>,
}

impl ReadOptions {
    /// Create default read options.
    pub fn new(engine: &Arc<Engine>) -> Result<ReadOptions> {
        // SAFETY: factory call; null is handled as the failure sentinel.
        let ptr = unsafe { (engine.api().readoptions_create)() };
        let handle =
            OwnedHandle::new(ptr, engine.api().readoptions_destroy, ResourceKind::ReadOptions)?;
        Ok(ReadOptions {
            handle,
            engine: Arc::clone(engine),
        })
    }

    /// Verify block checksums on every read.
    pub fn set_verify_checksums(&mut self, value: bool) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        // SAFETY: live handle, engine-internal mutation.
        unsafe { (self.engine.api().readoptions_set_verify_checksums)(opts, value as c_uchar) };
        Ok(())
    }

    /// Cache blocks fetched by this read.
    pub fn set_fill_cache(&mut self, value: bool) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        // SAFETY: as above.
        unsafe { (self.engine.api().readoptions_set_fill_cache)(opts, value as c_uchar) };
        Ok(())
    }

    /// Release the underlying native object. Idempotent; also runs on drop.
    pub fn close(&self) {
        self.handle.release();
    }

    pub(crate) fn as_ptr(&self) -> Result<*mut sys::rocksdb_readoptions_t> {
        self.handle.as_ptr()
    }
}

/// Write options (`rocksdb_writeoptions_t`).
pub struct WriteOptions {
    handle: OwnedHandle<sys::rocksdb_writeoptions_t>,
    engine: Arc<Engine>,
}

impl WriteOptions {
    /// Create default write options.
    pub fn new(engine: &Arc<Engine>) -> Result<WriteOptions> {
        // SAFETY: factory call; null is handled as the failure sentinel.
        let ptr = unsafe { (engine.api().writeoptions_create)() };
        let handle =
            OwnedHandle::new(ptr, engine.api().writeoptions_destroy, ResourceKind::WriteOptions)?;
        Ok(WriteOptions {
            handle,
            engine: Arc::clone(engine),
        })
    }

    /// Sync the write-ahead log before acknowledging the write.
    pub fn set_sync(&mut self, value: bool) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        // SAFETY: live handle, engine-internal mutation.
        unsafe { (self.engine.api().writeoptions_set_sync)(opts, value as c_uchar) };
        Ok(())
    }

    /// Skip the write-ahead log entirely.
    pub fn disable_wal(&mut self, value: bool) -> Result<()> {
        let opts = self.handle.as_ptr()?;
        // SAFETY: as above.
        unsafe { (self.engine.api().writeoptions_disable_wal)(opts, value as c_int) };
        Ok(())
    }

    /// Release the underlying native object. Idempotent; also runs on drop.
    pub fn close(&self) {
        self.handle.release();
    }

    pub(crate) fn as_ptr(&self) -> Result<*mut sys::rocksdb_writeoptions_t> {
        self.handle.as_ptr()
    }
}
