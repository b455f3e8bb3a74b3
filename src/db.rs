//! The database handle (`rocksdb_t`).

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_void};
use std::path::Path;
use std::ptr;
use std::sync::Arc;

use libc::size_t;

use crate::batch::WriteBatch;
use crate::engine::Engine;
use crate::env::EnvInner;
use crate::error::{Error, ResourceKind, Result};
use crate::handle::OwnedHandle;
use crate::options::{Options, ReadOptions, WriteOptions};
use crate::sys;

/// An open database.
///
/// # Thread Safety
///
/// Reads and writes may run concurrently from multiple threads; the engine
/// serializes internally. [`Db::close`] is idempotent and safe to race with
/// itself and with drop, but must not race operations still in flight on
/// other threads; that contract is inherited from the native API.
pub struct Db {
    handle: OwnedHandle<sys::rocksdb_t>,
    engine: Arc<Engine>,
    _env: Option<Arc<EnvInner>>,
    path: String,
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").field("path", &self.path).finish()
    }
}

impl Db {
    /// Open the database at `path`.
    ///
    /// The options are borrowed: the engine snapshots them during the call
    /// and the caller remains free to release them immediately afterwards.
    /// An env installed in the options is kept alive by the returned
    /// database.
    pub fn open(options: &Options, path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();
        let engine = Arc::clone(options.engine());
        let opts = options.as_ptr()?;
        let cpath = path_to_cstring(path)?;

        let mut err: *mut c_char = ptr::null_mut();
        // SAFETY: live options handle, valid C path, valid errptr slot.
        let ptr = unsafe { (engine.api().open)(opts, cpath.as_ptr(), &mut err) };
        check(&engine, err)?;
        let handle = OwnedHandle::new(ptr, engine.api().close, ResourceKind::Db)?;

        log::info!("opened database at {}", path.display());
        Ok(Db {
            handle,
            _env: options.env_guard(),
            engine,
            path: path.display().to_string(),
        })
    }

    /// The path this database was opened at.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Store `value` under `key`.
    pub fn put(&self, options: &WriteOptions, key: &[u8], value: &[u8]) -> Result<()> {
        let db = self.handle.as_ptr()?;
        let wopts = options.as_ptr()?;
        let mut err: *mut c_char = ptr::null_mut();
        // SAFETY: live handles; the engine copies both slices during the call.
        unsafe {
            (self.engine.api().put)(
                db,
                wopts,
                key.as_ptr() as *const c_char,
                key.len(),
                value.as_ptr() as *const c_char,
                value.len(),
                &mut err,
            )
        };
        check(&self.engine, err)
    }

    /// Fetch the value stored under `key`, or `None` if absent.
    pub fn get(&self, options: &ReadOptions, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let db = self.handle.as_ptr()?;
        let ropts = options.as_ptr()?;
        let mut len: size_t = 0;
        let mut err: *mut c_char = ptr::null_mut();
        // SAFETY: live handles; the returned buffer (if any) is engine-owned
        // until the `free` below.
        let value = unsafe {
            (self.engine.api().get)(
                db,
                ropts,
                key.as_ptr() as *const c_char,
                key.len(),
                &mut len,
                &mut err,
            )
        };
        check(&self.engine, err)?;
        if value.is_null() {
            return Ok(None);
        }
        // SAFETY: the engine returned a buffer of exactly `len` bytes; copy
        // it out and return the native buffer through the matching free.
        let owned = unsafe { std::slice::from_raw_parts(value as *const u8, len) }.to_vec();
        unsafe { (self.engine.api().free)(value as *mut c_void) };
        Ok(Some(owned))
    }

    /// Remove `key` if present.
    pub fn delete(&self, options: &WriteOptions, key: &[u8]) -> Result<()> {
        let db = self.handle.as_ptr()?;
        let wopts = options.as_ptr()?;
        let mut err: *mut c_char = ptr::null_mut();
        // SAFETY: live handles; the engine copies the key during the call.
        unsafe {
            (self.engine.api().delete)(db, wopts, key.as_ptr() as *const c_char, key.len(), &mut err)
        };
        check(&self.engine, err)
    }

    /// Apply a batch of updates atomically.
    ///
    /// The batch is borrowed and stays reusable by the caller.
    pub fn write(&self, options: &WriteOptions, batch: &WriteBatch) -> Result<()> {
        let db = self.handle.as_ptr()?;
        let wopts = options.as_ptr()?;
        let raw = batch.as_ptr()?;
        let mut err: *mut c_char = ptr::null_mut();
        // SAFETY: live handles; the engine reads the batch during the call.
        unsafe { (self.engine.api().write)(db, wopts, raw, &mut err) };
        check(&self.engine, err)
    }

    /// Close the database. Idempotent; also runs on drop.
    pub fn close(&self) {
        if self.handle.release() {
            log::info!("closed database at {}", self.path);
        }
    }

    /// Remove the persistent state of the database at `path`.
    ///
    /// The database must not be open.
    pub fn destroy(options: &Options, path: impl AsRef<Path>) -> Result<()> {
        let engine = options.engine();
        let opts = options.as_ptr()?;
        let cpath = path_to_cstring(path.as_ref())?;
        let mut err: *mut c_char = ptr::null_mut();
        // SAFETY: live options handle, valid C path, valid errptr slot.
        unsafe { (engine.api().destroy_db)(opts, cpath.as_ptr(), &mut err) };
        check(engine, err)
    }
}

fn path_to_cstring(path: &Path) -> Result<CString> {
    let text = path.to_string_lossy();
    CString::new(text.as_bytes()).map_err(|_| Error::InvalidPath(path.display().to_string()))
}

/// Translate an engine `errptr` result, releasing the native message.
fn check(engine: &Engine, err: *mut c_char) -> Result<()> {
    if err.is_null() {
        return Ok(());
    }
    // SAFETY: a non-null errptr is an engine-allocated NUL-terminated
    // message, released with the engine's own free.
    let message = unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned();
    unsafe { (engine.api().free)(err as *mut c_void) };
    Err(Error::Engine(message))
}
