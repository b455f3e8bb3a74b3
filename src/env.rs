//! Environment wrappers (`rocksdb_env_t`, `rocksdb_envoptions_t`).

use std::sync::Arc;

use crate::engine::Engine;
use crate::error::{ResourceKind, Result};
use crate::handle::OwnedHandle;
use crate::sys;

/// Options controlling how the environment performs file operations.
pub struct EnvOptions {
    handle: OwnedHandle<sys::rocksdb_envoptions_t>,
    _engine: Arc<Engine>,
}

impl EnvOptions {
    /// Create a default `EnvOptions` object.
    pub fn new(engine: &Arc<Engine>) -> Result<EnvOptions> {
        // SAFETY: factory call; null is handled as the failure sentinel.
        let ptr = unsafe { (engine.api().envoptions_create)() };
        let handle = OwnedHandle::new(ptr, engine.api().envoptions_destroy, ResourceKind::EnvOptions)?;
        Ok(EnvOptions {
            handle,
            _engine: Arc::clone(engine),
        })
    }

    /// Release the underlying native object. Idempotent; also runs on drop.
    pub fn close(&self) {
        if self.handle.release() {
            log::debug!("released env options");
        }
    }
}

/// Shared state behind [`Env`], so other wrappers can guard a borrowed env
/// without taking over its release.
pub(crate) struct EnvInner {
    pub(crate) handle: OwnedHandle<sys::rocksdb_env_t>,
    pub(crate) engine: Arc<Engine>,
}

/// An engine environment.
///
/// Passing an env into [`Options::set_env`](crate::Options::set_env) is a
/// borrow: this wrapper keeps ownership and stays responsible for the
/// release. The options (and any database opened with them) hold a
/// reference that keeps the wrapper state alive, but the env must not be
/// closed while such a database is still open.
pub struct Env {
    inner: Arc<EnvInner>,
}

impl Env {
    /// Create the engine's default environment.
    pub fn default_env(engine: &Arc<Engine>) -> Result<Env> {
        // SAFETY: factory call; null is handled as the failure sentinel.
        let ptr = unsafe { (engine.api().create_default_env)() };
        let handle = OwnedHandle::new(ptr, engine.api().env_destroy, ResourceKind::Env)?;
        Ok(Env {
            inner: Arc::new(EnvInner {
                handle,
                engine: Arc::clone(engine),
            }),
        })
    }

    /// Set the number of background worker threads.
    pub fn set_background_threads(&mut self, count: i32) -> Result<()> {
        let env = self.inner.handle.as_ptr()?;
        // SAFETY: the handle is valid and the call only mutates engine state.
        unsafe { (self.inner.engine.api().env_set_background_threads)(env, count) };
        Ok(())
    }

    /// Release the underlying native object. Idempotent; also runs on drop.
    pub fn close(&self) {
        if self.inner.handle.release() {
            log::debug!("released env");
        }
    }

    pub(crate) fn inner(&self) -> &Arc<EnvInner> {
        &self.inner
    }
}
