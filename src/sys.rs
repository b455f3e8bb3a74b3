//! The engine's C API surface.
//!
//! One opaque type per native resource kind, plus [`NativeApi`]: the fixed
//! table of foreign function pointers the rest of the crate calls through.
//! The table is resolved at runtime from the engine's shared library; the
//! signatures mirror the engine's `c.h` exactly.
//!
//! Each factory returns null as its allocation-failure sentinel. Fallible
//! operations additionally report messages through a `char** errptr`
//! out-parameter; the message is allocated by the engine and must be
//! released with `rocksdb_free`. Destructors are not safe to call twice on
//! the same handle; the wrapper layer's idempotent release substitutes for
//! that guarantee.

use libc::size_t;
use std::os::raw::{c_char, c_int, c_uchar, c_void};

use libloading::Library;

use crate::error::{Error, Result};

macro_rules! opaque {
    ($(#[$doc:meta] $name:ident),* $(,)?) => {
        $(
            #[$doc]
            #[allow(non_camel_case_types)]
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque! {
    /// An open database.
    rocksdb_t,
    /// Database options.
    rocksdb_options_t,
    /// Read options.
    rocksdb_readoptions_t,
    /// Write options.
    rocksdb_writeoptions_t,
    /// Environment options.
    rocksdb_envoptions_t,
    /// An environment.
    rocksdb_env_t,
    /// A block cache.
    rocksdb_cache_t,
    /// A key comparator.
    rocksdb_comparator_t,
    /// A write batch.
    rocksdb_writebatch_t,
}

/// Reclaims comparator callback state; invoked by whichever side ends up
/// owning the comparator when it is destroyed.
pub type ComparatorDestructor = unsafe extern "C" fn(state: *mut c_void);

/// Three-way key comparison callback (`< 0`, `0`, `> 0`).
pub type ComparatorCompare = unsafe extern "C" fn(
    state: *mut c_void,
    a: *const c_char,
    a_len: size_t,
    b: *const c_char,
    b_len: size_t,
) -> c_int;

/// Returns the comparator's identifying name (owned by the callback state).
pub type ComparatorName = unsafe extern "C" fn(state: *mut c_void) -> *const c_char;

/// Resolved engine entry points.
///
/// Ownership conventions are stated per call; any call not annotated
/// borrows its arguments for the duration of the call only.
pub struct NativeApi {
    // -- database options ------------------------------------------------
    /// Factory; null on allocation failure.
    pub options_create: unsafe extern "C" fn() -> *mut rocksdb_options_t,
    /// Destructor. Also destroys a comparator previously consumed by
    /// `options_set_comparator` and drops the reference taken by
    /// `options_set_row_cache`.
    pub options_destroy: unsafe extern "C" fn(*mut rocksdb_options_t),
    pub options_set_create_if_missing: unsafe extern "C" fn(*mut rocksdb_options_t, c_uchar),
    pub options_set_error_if_exists: unsafe extern "C" fn(*mut rocksdb_options_t, c_uchar),
    pub options_set_write_buffer_size: unsafe extern "C" fn(*mut rocksdb_options_t, size_t),
    pub options_set_max_open_files: unsafe extern "C" fn(*mut rocksdb_options_t, c_int),
    pub options_increase_parallelism: unsafe extern "C" fn(*mut rocksdb_options_t, c_int),
    pub options_set_compression: unsafe extern "C" fn(*mut rocksdb_options_t, c_int),
    /// CONSUMES the comparator: the options own it from this call on and
    /// destroy it when they are themselves destroyed. The caller must not
    /// destroy it again.
    pub options_set_comparator:
        unsafe extern "C" fn(*mut rocksdb_options_t, *mut rocksdb_comparator_t),
    /// Borrows the env. The caller keeps ownership and must keep the env
    /// alive for the lifetime of any database opened with these options.
    pub options_set_env: unsafe extern "C" fn(*mut rocksdb_options_t, *mut rocksdb_env_t),
    /// Shared: the engine takes one internal reference to the cache. The
    /// caller's destroy and the options' destroy each drop one reference;
    /// the cache is freed when the last one goes.
    pub options_set_row_cache: unsafe extern "C" fn(*mut rocksdb_options_t, *mut rocksdb_cache_t),

    // -- read/write options ----------------------------------------------
    /// Factory; null on allocation failure.
    pub readoptions_create: unsafe extern "C" fn() -> *mut rocksdb_readoptions_t,
    pub readoptions_destroy: unsafe extern "C" fn(*mut rocksdb_readoptions_t),
    pub readoptions_set_verify_checksums: unsafe extern "C" fn(*mut rocksdb_readoptions_t, c_uchar),
    pub readoptions_set_fill_cache: unsafe extern "C" fn(*mut rocksdb_readoptions_t, c_uchar),
    /// Factory; null on allocation failure.
    pub writeoptions_create: unsafe extern "C" fn() -> *mut rocksdb_writeoptions_t,
    pub writeoptions_destroy: unsafe extern "C" fn(*mut rocksdb_writeoptions_t),
    pub writeoptions_set_sync: unsafe extern "C" fn(*mut rocksdb_writeoptions_t, c_uchar),
    pub writeoptions_disable_wal: unsafe extern "C" fn(*mut rocksdb_writeoptions_t, c_int),

    // -- environment -----------------------------------------------------
    /// Factory; null on allocation failure.
    pub envoptions_create: unsafe extern "C" fn() -> *mut rocksdb_envoptions_t,
    pub envoptions_destroy: unsafe extern "C" fn(*mut rocksdb_envoptions_t),
    /// Factory; null on allocation failure.
    pub create_default_env: unsafe extern "C" fn() -> *mut rocksdb_env_t,
    pub env_set_background_threads: unsafe extern "C" fn(*mut rocksdb_env_t, c_int),
    pub env_destroy: unsafe extern "C" fn(*mut rocksdb_env_t),

    // -- block cache -------------------------------------------------------
    /// Factory; null on allocation failure.
    pub cache_create_lru: unsafe extern "C" fn(size_t) -> *mut rocksdb_cache_t,
    /// Drops the caller's reference; see `options_set_row_cache`.
    pub cache_destroy: unsafe extern "C" fn(*mut rocksdb_cache_t),
    pub cache_get_usage: unsafe extern "C" fn(*mut rocksdb_cache_t) -> size_t,

    // -- comparator --------------------------------------------------------
    /// Factory; null on allocation failure. On success the comparator owns
    /// `state` and reclaims it through `destructor`; on failure `state` is
    /// untouched and remains the caller's to reclaim.
    pub comparator_create: unsafe extern "C" fn(
        state: *mut c_void,
        destructor: ComparatorDestructor,
        compare: ComparatorCompare,
        name: ComparatorName,
    ) -> *mut rocksdb_comparator_t,
    pub comparator_destroy: unsafe extern "C" fn(*mut rocksdb_comparator_t),

    // -- write batch -------------------------------------------------------
    /// Factory; null on allocation failure.
    pub writebatch_create: unsafe extern "C" fn() -> *mut rocksdb_writebatch_t,
    pub writebatch_destroy: unsafe extern "C" fn(*mut rocksdb_writebatch_t),
    pub writebatch_clear: unsafe extern "C" fn(*mut rocksdb_writebatch_t),
    pub writebatch_count: unsafe extern "C" fn(*mut rocksdb_writebatch_t) -> c_int,
    pub writebatch_put: unsafe extern "C" fn(
        *mut rocksdb_writebatch_t,
        *const c_char,
        size_t,
        *const c_char,
        size_t,
    ),
    pub writebatch_delete: unsafe extern "C" fn(*mut rocksdb_writebatch_t, *const c_char, size_t),

    // -- database ----------------------------------------------------------
    /// Factory; null + `errptr` on failure. Borrows the options (the engine
    /// snapshots them; they may be destroyed immediately afterwards).
    pub open: unsafe extern "C" fn(
        *const rocksdb_options_t,
        *const c_char,
        *mut *mut c_char,
    ) -> *mut rocksdb_t,
    pub close: unsafe extern "C" fn(*mut rocksdb_t),
    pub put: unsafe extern "C" fn(
        *mut rocksdb_t,
        *const rocksdb_writeoptions_t,
        *const c_char,
        size_t,
        *const c_char,
        size_t,
        *mut *mut c_char,
    ),
    /// Returns an engine-allocated value buffer (release with `free`), or
    /// null with a clean `errptr` when the key is absent.
    pub get: unsafe extern "C" fn(
        *mut rocksdb_t,
        *const rocksdb_readoptions_t,
        *const c_char,
        size_t,
        *mut size_t,
        *mut *mut c_char,
    ) -> *mut c_char,
    pub delete: unsafe extern "C" fn(
        *mut rocksdb_t,
        *const rocksdb_writeoptions_t,
        *const c_char,
        size_t,
        *mut *mut c_char,
    ),
    /// Borrows the batch: it stays owned by the caller and may be reused
    /// or destroyed afterwards.
    pub write: unsafe extern "C" fn(
        *mut rocksdb_t,
        *const rocksdb_writeoptions_t,
        *mut rocksdb_writebatch_t,
        *mut *mut c_char,
    ),
    pub destroy_db:
        unsafe extern "C" fn(*const rocksdb_options_t, *const c_char, *mut *mut c_char),

    /// Releases engine-allocated buffers (`errptr` messages, `get` values).
    pub free: unsafe extern "C" fn(*mut c_void),
}

/// Resolve one symbol, copying the raw function pointer out of the library.
fn sym<T: Copy>(library: &Library, name: &'static str) -> Result<T> {
    // SAFETY: the signature recorded in `NativeApi` is the trusted contract
    // with the engine library; a mismatch there is unrecoverable either way.
    unsafe { library.get::<T>(name.as_bytes()) }
        .map(|symbol| *symbol)
        .map_err(|e| Error::MissingSymbol {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

impl NativeApi {
    /// Resolve the full entry-point table from a loaded engine library.
    ///
    /// Fails with [`Error::MissingSymbol`] on the first absent symbol, so a
    /// partially usable table never escapes.
    pub(crate) fn load(library: &Library) -> Result<NativeApi> {
        Ok(NativeApi {
            options_create: sym(library, "rocksdb_options_create")?,
            options_destroy: sym(library, "rocksdb_options_destroy")?,
            options_set_create_if_missing: sym(library, "rocksdb_options_set_create_if_missing")?,
            options_set_error_if_exists: sym(library, "rocksdb_options_set_error_if_exists")?,
            options_set_write_buffer_size: sym(library, "rocksdb_options_set_write_buffer_size")?,
            options_set_max_open_files: sym(library, "rocksdb_options_set_max_open_files")?,
            options_increase_parallelism: sym(library, "rocksdb_options_increase_parallelism")?,
            options_set_compression: sym(library, "rocksdb_options_set_compression")?,
            options_set_comparator: sym(library, "rocksdb_options_set_comparator")?,
            options_set_env: sym(library, "rocksdb_options_set_env")?,
            options_set_row_cache: sym(library, "rocksdb_options_set_row_cache")?,
            readoptions_create: sym(library, "rocksdb_readoptions_create")?,
            readoptions_destroy: sym(library, "rocksdb_readoptions_destroy")?,
            readoptions_set_verify_checksums: sym(
                library,
                "rocksdb_readoptions_set_verify_checksums",
            )?,
            readoptions_set_fill_cache: sym(library, "rocksdb_readoptions_set_fill_cache")?,
            writeoptions_create: sym(library, "rocksdb_writeoptions_create")?,
            writeoptions_destroy: sym(library, "rocksdb_writeoptions_destroy")?,
            writeoptions_set_sync: sym(library, "rocksdb_writeoptions_set_sync")?,
            writeoptions_disable_wal: sym(library, "rocksdb_writeoptions_disable_WAL")?,
            envoptions_create: sym(library, "rocksdb_envoptions_create")?,
            envoptions_destroy: sym(library, "rocksdb_envoptions_destroy")?,
            create_default_env: sym(library, "rocksdb_create_default_env")?,
            env_set_background_threads: sym(library, "rocksdb_env_set_background_threads")?,
            env_destroy: sym(library, "rocksdb_env_destroy")?,
            cache_create_lru: sym(library, "rocksdb_cache_create_lru")?,
            cache_destroy: sym(library, "rocksdb_cache_destroy")?,
            cache_get_usage: sym(library, "rocksdb_cache_get_usage")?,
            comparator_create: sym(library, "rocksdb_comparator_create")?,
            comparator_destroy: sym(library, "rocksdb_comparator_destroy")?,
            writebatch_create: sym(library, "rocksdb_writebatch_create")?,
            writebatch_destroy: sym(library, "rocksdb_writebatch_destroy")?,
            writebatch_clear: sym(library, "rocksdb_writebatch_clear")?,
            writebatch_count: sym(library, "rocksdb_writebatch_count")?,
            writebatch_put: sym(library, "rocksdb_writebatch_put")?,
            writebatch_delete: sym(library, "rocksdb_writebatch_delete")?,
            open: sym(library, "rocksdb_open")?,
            close: sym(library, "rocksdb_close")?,
            put: sym(library, "rocksdb_put")?,
            get: sym(library, "rocksdb_get")?,
            delete: sym(library, "rocksdb_delete")?,
            write: sym(library, "rocksdb_write")?,
            destroy_db: sym(library, "rocksdb_destroy_db")?,
            free: sym(library, "rocksdb_free")?,
        })
    }
}
