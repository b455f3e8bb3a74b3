//! Engine library loading.
//!
//! An [`Engine`] owns the resolved [`NativeApi`] table and, when the engine
//! was loaded dynamically, the shared library itself. Every wrapper in this
//! crate holds an `Arc<Engine>` so the library cannot be unloaded while a
//! native handle created from it is still alive.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

use libloading::Library;

use crate::error::{Error, Result};
use crate::sys::NativeApi;

/// Environment variable overriding the engine library location.
pub const LIBRARY_ENV_VAR: &str = "ZIPPDB_LIBRARY";

/// A loaded engine: the entry-point table plus the library keeping its
/// symbols alive.
pub struct Engine {
    api: NativeApi,
    _library: Option<Library>,
}

impl Engine {
    /// Load the engine from a specific shared library.
    pub fn load(path: impl AsRef<OsStr>) -> Result<Arc<Engine>> {
        let path = path.as_ref();
        // SAFETY: loading a shared library runs its initializers; the engine
        // library is trusted, and all further access goes through the typed
        // entry points resolved below.
        let library = unsafe { Library::new(path) }.map_err(|e| {
            Error::LibraryLoad(format!("{}: {e}", Path::new(path).display()))
        })?;
        let api = NativeApi::load(&library)?;
        log::info!("loaded engine library {}", Path::new(path).display());
        Ok(Arc::new(Engine {
            api,
            _library: Some(library),
        }))
    }

    /// Load the engine from its platform-default library name, honoring the
    /// `ZIPPDB_LIBRARY` environment variable when set.
    ///
    /// With a bare file name the system loader applies its usual search
    /// path, so a library installed in a standard location is found without
    /// configuration.
    pub fn load_default() -> Result<Arc<Engine>> {
        match std::env::var(LIBRARY_ENV_VAR) {
            Ok(path) if !path.is_empty() => Engine::load(path),
            _ => Engine::load(default_library_name()),
        }
    }

    /// Wrap an already-resolved entry-point table (test engines).
    #[cfg(test)]
    pub(crate) fn from_api(api: NativeApi) -> Arc<Engine> {
        Arc::new(Engine {
            api,
            _library: None,
        })
    }

    pub(crate) fn api(&self) -> &NativeApi {
        &self.api
    }
}

/// The engine library's file name on this platform.
pub fn default_library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "rocksdb.dll"
    } else if cfg!(target_os = "macos") {
        "librocksdb.dylib"
    } else {
        "librocksdb.so"
    }
}
