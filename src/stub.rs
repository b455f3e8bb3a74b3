//! Instrumented in-process engine for the test suite.
//!
//! Implements the full [`NativeApi`] table over in-memory state so the
//! lifecycle layer can be exercised without the real engine library. Two
//! properties matter here:
//!
//! - every stub object records how many times its destructor ran, and the
//!   objects are intentionally leaked so the counter stays readable after
//!   release; a count above one is a double-free caught red-handed;
//! - the documented ownership conventions are honored faithfully:
//!   destroying options destroys a consumed comparator and drops one
//!   row-cache reference, destroying a cache drops the caller's reference,
//!   and stores persist across close/reopen in a process-global registry.
//!
//! [`fail_next_create`] arms a thread-local injection making the next
//! factory call on this thread return the null allocation-failure sentinel.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_uchar, c_void};
use std::ptr;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicPtr, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use libc::size_t;

use crate::engine::Engine;
use crate::sys::{
    ComparatorCompare, ComparatorDestructor, ComparatorName, NativeApi, rocksdb_cache_t,
    rocksdb_comparator_t, rocksdb_env_t, rocksdb_envoptions_t, rocksdb_options_t,
    rocksdb_readoptions_t, rocksdb_t, rocksdb_writebatch_t, rocksdb_writeoptions_t,
};

// ---------------------------------------------------------------------------
// instrumentation

/// Destruction bookkeeping; first field of every stub object so a handle
/// pointer can be read back as a `Header` regardless of its kind.
#[repr(C)]
struct Header {
    freed: AtomicUsize,
}

impl Header {
    fn new() -> Header {
        Header {
            freed: AtomicUsize::new(0),
        }
    }

    /// Record one destructor invocation; returns how many ran before.
    fn mark_freed(&self) -> usize {
        self.freed.fetch_add(1, Ordering::SeqCst)
    }
}

/// How many times the native destructor ran for this handle.
pub(crate) fn freed_count<T>(handle: *mut T) -> usize {
    unsafe { &*(handle as *const Header) }.freed.load(Ordering::SeqCst)
}

thread_local! {
    static FAIL_NEXT_CREATE: Cell<bool> = const { Cell::new(false) };
}

/// Make the next factory call on this thread fail with the null sentinel.
pub(crate) fn fail_next_create() {
    FAIL_NEXT_CREATE.with(|flag| flag.set(true));
}

fn take_injected_failure() -> bool {
    FAIL_NEXT_CREATE.with(|flag| flag.replace(false))
}

fn leak<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// A process-unique database path for one test.
pub(crate) fn unique_path(tag: &str) -> String {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    format!("/stub/{tag}-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}

fn set_err(errptr: *mut *mut c_char, message: &str) {
    if errptr.is_null() {
        return;
    }
    let message = CString::new(message).unwrap();
    let bytes = message.as_bytes_with_nul();
    unsafe {
        let buffer = libc::malloc(bytes.len()) as *mut u8;
        ptr::copy_nonoverlapping(bytes.as_ptr(), buffer, bytes.len());
        *errptr = buffer as *mut c_char;
    }
}

// ---------------------------------------------------------------------------
// options

#[repr(C)]
struct StubOptions {
    header: Header,
    create_if_missing: AtomicBool,
    error_if_exists: AtomicBool,
    write_buffer_size: AtomicUsize,
    max_open_files: AtomicI32,
    parallelism: AtomicI32,
    compression: AtomicI32,
    comparator: AtomicPtr<rocksdb_comparator_t>,
    row_cache: AtomicPtr<rocksdb_cache_t>,
}

/// The option values an options handle currently carries.
pub(crate) struct OptionsSnapshot {
    pub(crate) create_if_missing: bool,
    pub(crate) error_if_exists: bool,
    pub(crate) write_buffer_size: usize,
    pub(crate) max_open_files: i32,
    pub(crate) parallelism: i32,
    pub(crate) compression: i32,
}

pub(crate) fn options_snapshot(opts: *mut rocksdb_options_t) -> OptionsSnapshot {
    let stub = unsafe { &*(opts as *const StubOptions) };
    OptionsSnapshot {
        create_if_missing: stub.create_if_missing.load(Ordering::SeqCst),
        error_if_exists: stub.error_if_exists.load(Ordering::SeqCst),
        write_buffer_size: stub.write_buffer_size.load(Ordering::SeqCst),
        max_open_files: stub.max_open_files.load(Ordering::SeqCst),
        parallelism: stub.parallelism.load(Ordering::SeqCst),
        compression: stub.compression.load(Ordering::SeqCst),
    }
}

pub(crate) fn options_comparator(opts: *mut rocksdb_options_t) -> *mut rocksdb_comparator_t {
    let stub = unsafe { &*(opts as *const StubOptions) };
    stub.comparator.load(Ordering::SeqCst)
}

unsafe extern "C" fn options_create() -> *mut rocksdb_options_t {
    if take_injected_failure() {
        return ptr::null_mut();
    }
    leak(StubOptions {
        header: Header::new(),
        create_if_missing: AtomicBool::new(false),
        error_if_exists: AtomicBool::new(false),
        write_buffer_size: AtomicUsize::new(64 << 20),
        max_open_files: AtomicI32::new(-1),
        parallelism: AtomicI32::new(1),
        compression: AtomicI32::new(1),
        comparator: AtomicPtr::new(ptr::null_mut()),
        row_cache: AtomicPtr::new(ptr::null_mut()),
    }) as *mut rocksdb_options_t
}

unsafe extern "C" fn options_destroy(opts: *mut rocksdb_options_t) {
    let stub = unsafe { &*(opts as *const StubOptions) };
    if stub.header.mark_freed() > 0 {
        return;
    }
    // Ownership conventions: a consumed comparator dies with the options,
    // and the engine-held row-cache reference is dropped.
    let comparator = stub.comparator.load(Ordering::SeqCst);
    if !comparator.is_null() {
        unsafe { comparator_destroy(comparator) };
    }
    let cache = stub.row_cache.load(Ordering::SeqCst);
    if !cache.is_null() {
        cache_unref(cache);
    }
}

unsafe extern "C" fn options_set_create_if_missing(opts: *mut rocksdb_options_t, value: c_uchar) {
    let stub = unsafe { &*(opts as *const StubOptions) };
    stub.create_if_missing.store(value != 0, Ordering::SeqCst);
}

unsafe extern "C" fn options_set_error_if_exists(opts: *mut rocksdb_options_t, value: c_uchar) {
    let stub = unsafe { &*(opts as *const StubOptions) };
    stub.error_if_exists.store(value != 0, Ordering::SeqCst);
}

unsafe extern "C" fn options_set_write_buffer_size(opts: *mut rocksdb_options_t, size: size_t) {
    let stub = unsafe { &*(opts as *const StubOptions) };
    stub.write_buffer_size.store(size, Ordering::SeqCst);
}

unsafe extern "C" fn options_set_max_open_files(opts: *mut rocksdb_options_t, count: c_int) {
    let stub = unsafe { &*(opts as *const StubOptions) };
    stub.max_open_files.store(count, Ordering::SeqCst);
}

unsafe extern "C" fn options_increase_parallelism(opts: *mut rocksdb_options_t, threads: c_int) {
    let stub = unsafe { &*(opts as *const StubOptions) };
    stub.parallelism.store(threads, Ordering::SeqCst);
}

unsafe extern "C" fn options_set_compression(opts: *mut rocksdb_options_t, value: c_int) {
    let stub = unsafe { &*(opts as *const StubOptions) };
    stub.compression.store(value, Ordering::SeqCst);
}

unsafe extern "C" fn options_set_comparator(
    opts: *mut rocksdb_options_t,
    comparator: *mut rocksdb_comparator_t,
) {
    let stub = unsafe { &*(opts as *const StubOptions) };
    let previous = stub.comparator.swap(comparator, Ordering::SeqCst);
    if !previous.is_null() {
        unsafe { comparator_destroy(previous) };
    }
}

unsafe extern "C" fn options_set_env(opts: *mut rocksdb_options_t, env: *mut rocksdb_env_t) {
    // Borrowed: the stub only records that an env was installed.
    let _ = (opts, env);
}

unsafe extern "C" fn options_set_row_cache(
    opts: *mut rocksdb_options_t,
    cache: *mut rocksdb_cache_t,
) {
    let stub = unsafe { &*(opts as *const StubOptions) };
    cache_ref(cache);
    let previous = stub.row_cache.swap(cache, Ordering::SeqCst);
    if !previous.is_null() {
        cache_unref(previous);
    }
}

// ---------------------------------------------------------------------------
// read/write options

#[repr(C)]
struct StubReadOptions {
    header: Header,
    verify_checksums: AtomicBool,
    fill_cache: AtomicBool,
}

pub(crate) fn read_options_flags(opts: *mut rocksdb_readoptions_t) -> (bool, bool) {
    let stub = unsafe { &*(opts as *const StubReadOptions) };
    (
        stub.verify_checksums.load(Ordering::SeqCst),
        stub.fill_cache.load(Ordering::SeqCst),
    )
}

unsafe extern "C" fn readoptions_create() -> *mut rocksdb_readoptions_t {
    if take_injected_failure() {
        return ptr::null_mut();
    }
    leak(StubReadOptions {
        header: Header::new(),
        verify_checksums: AtomicBool::new(false),
        fill_cache: AtomicBool::new(true),
    }) as *mut rocksdb_readoptions_t
}

unsafe extern "C" fn readoptions_destroy(opts: *mut rocksdb_readoptions_t) {
    let stub = unsafe { &*(opts as *const StubReadOptions) };
    stub.header.mark_freed();
}

unsafe extern "C" fn readoptions_set_verify_checksums(
    opts: *mut rocksdb_readoptions_t,
    value: c_uchar,
) {
    let stub = unsafe { &*(opts as *const StubReadOptions) };
    stub.verify_checksums.store(value != 0, Ordering::SeqCst);
}

unsafe extern "C" fn readoptions_set_fill_cache(opts: *mut rocksdb_readoptions_t, value: c_uchar) {
    let stub = unsafe { &*(opts as *const StubReadOptions) };
    stub.fill_cache.store(value != 0, Ordering::SeqCst);
}

#[repr(C)]
struct StubWriteOptions {
    header: Header,
    sync: AtomicBool,
    disable_wal: AtomicBool,
}

pub(crate) fn write_options_flags(opts: *mut rocksdb_writeoptions_t) -> (bool, bool) {
    let stub = unsafe { &*(opts as *const StubWriteOptions) };
    (
        stub.sync.load(Ordering::SeqCst),
        stub.disable_wal.load(Ordering::SeqCst),
    )
}

unsafe extern "C" fn writeoptions_create() -> *mut rocksdb_writeoptions_t {
    if take_injected_failure() {
        return ptr::null_mut();
    }
    leak(StubWriteOptions {
        header: Header::new(),
        sync: AtomicBool::new(false),
        disable_wal: AtomicBool::new(false),
    }) as *mut rocksdb_writeoptions_t
}

unsafe extern "C" fn writeoptions_destroy(opts: *mut rocksdb_writeoptions_t) {
    let stub = unsafe { &*(opts as *const StubWriteOptions) };
    stub.header.mark_freed();
}

unsafe extern "C" fn writeoptions_set_sync(opts: *mut rocksdb_writeoptions_t, value: c_uchar) {
    let stub = unsafe { &*(opts as *const StubWriteOptions) };
    stub.sync.store(value != 0, Ordering::SeqCst);
}

unsafe extern "C" fn writeoptions_disable_wal(opts: *mut rocksdb_writeoptions_t, value: c_int) {
    let stub = unsafe { &*(opts as *const StubWriteOptions) };
    stub.disable_wal.store(value != 0, Ordering::SeqCst);
}

// ---------------------------------------------------------------------------
// environment

#[repr(C)]
struct StubEnvOptions {
    header: Header,
}

unsafe extern "C" fn envoptions_create() -> *mut rocksdb_envoptions_t {
    if take_injected_failure() {
        return ptr::null_mut();
    }
    leak(StubEnvOptions {
        header: Header::new(),
    }) as *mut rocksdb_envoptions_t
}

unsafe extern "C" fn envoptions_destroy(opts: *mut rocksdb_envoptions_t) {
    let stub = unsafe { &*(opts as *const StubEnvOptions) };
    stub.header.mark_freed();
}

#[repr(C)]
struct StubEnv {
    header: Header,
    background_threads: AtomicI32,
}

pub(crate) fn env_background_threads(env: *mut rocksdb_env_t) -> i32 {
    let stub = unsafe { &*(env as *const StubEnv) };
    stub.background_threads.load(Ordering::SeqCst)
}

unsafe extern "C" fn create_default_env() -> *mut rocksdb_env_t {
    if take_injected_failure() {
        return ptr::null_mut();
    }
    leak(StubEnv {
        header: Header::new(),
        background_threads: AtomicI32::new(1),
    }) as *mut rocksdb_env_t
}

unsafe extern "C" fn env_set_background_threads(env: *mut rocksdb_env_t, count: c_int) {
    let stub = unsafe { &*(env as *const StubEnv) };
    stub.background_threads.store(count, Ordering::SeqCst);
}

unsafe extern "C" fn env_destroy(env: *mut rocksdb_env_t) {
    let stub = unsafe { &*(env as *const StubEnv) };
    stub.header.mark_freed();
}

// ---------------------------------------------------------------------------
// block cache (shared, refcounted like the engine's shared_ptr)

#[repr(C)]
struct StubCache {
    header: Header,
    capacity: usize,
    refs: AtomicUsize,
    usage: AtomicUsize,
}

pub(crate) fn cache_capacity(cache: *mut rocksdb_cache_t) -> usize {
    let stub = unsafe { &*(cache as *const StubCache) };
    stub.capacity
}

fn cache_ref(cache: *mut rocksdb_cache_t) {
    let stub = unsafe { &*(cache as *const StubCache) };
    stub.refs.fetch_add(1, Ordering::SeqCst);
}

fn cache_unref(cache: *mut rocksdb_cache_t) {
    let stub = unsafe { &*(cache as *const StubCache) };
    // The freed counter records the 1 -> 0 edge; dropping a reference that
    // was never taken is an over-release and is recorded too.
    match stub.refs.fetch_sub(1, Ordering::SeqCst) {
        1 | 0 => {
            stub.header.mark_freed();
        }
        _ => {}
    }
}

unsafe extern "C" fn cache_create_lru(capacity: size_t) -> *mut rocksdb_cache_t {
    if take_injected_failure() {
        return ptr::null_mut();
    }
    leak(StubCache {
        header: Header::new(),
        capacity,
        refs: AtomicUsize::new(1),
        usage: AtomicUsize::new(0),
    }) as *mut rocksdb_cache_t
}

unsafe extern "C" fn cache_destroy(cache: *mut rocksdb_cache_t) {
    cache_unref(cache);
}

unsafe extern "C" fn cache_get_usage(cache: *mut rocksdb_cache_t) -> size_t {
    let stub = unsafe { &*(cache as *const StubCache) };
    stub.usage.load(Ordering::SeqCst)
}

// ---------------------------------------------------------------------------
// comparator

#[repr(C)]
struct StubComparator {
    header: Header,
    state: *mut c_void,
    destructor: ComparatorDestructor,
    compare: ComparatorCompare,
    name: ComparatorName,
}

pub(crate) fn comparator_compare(cmp: *mut rocksdb_comparator_t, a: &[u8], b: &[u8]) -> i32 {
    let stub = unsafe { &*(cmp as *const StubComparator) };
    unsafe {
        (stub.compare)(
            stub.state,
            a.as_ptr() as *const c_char,
            a.len(),
            b.as_ptr() as *const c_char,
            b.len(),
        )
    }
}

pub(crate) fn comparator_name(cmp: *mut rocksdb_comparator_t) -> String {
    let stub = unsafe { &*(cmp as *const StubComparator) };
    unsafe { CStr::from_ptr((stub.name)(stub.state)) }
        .to_string_lossy()
        .into_owned()
}

unsafe extern "C" fn comparator_create(
    state: *mut c_void,
    destructor: ComparatorDestructor,
    compare: ComparatorCompare,
    name: ComparatorName,
) -> *mut rocksdb_comparator_t {
    if take_injected_failure() {
        return ptr::null_mut();
    }
    leak(StubComparator {
        header: Header::new(),
        state,
        destructor,
        compare,
        name,
    }) as *mut rocksdb_comparator_t
}

unsafe extern "C" fn comparator_destroy(cmp: *mut rocksdb_comparator_t) {
    let stub = unsafe { &*(cmp as *const StubComparator) };
    if stub.header.mark_freed() > 0 {
        return;
    }
    unsafe { (stub.destructor)(stub.state) };
}

// ---------------------------------------------------------------------------
// write batch

enum BatchOp {
    Put(Vec<u8>, Vec<u8>),
    Delete(Vec<u8>),
}

#[repr(C)]
struct StubWriteBatch {
    header: Header,
    ops: Mutex<Vec<BatchOp>>,
}

unsafe extern "C" fn writebatch_create() -> *mut rocksdb_writebatch_t {
    if take_injected_failure() {
        return ptr::null_mut();
    }
    leak(StubWriteBatch {
        header: Header::new(),
        ops: Mutex::new(Vec::new()),
    }) as *mut rocksdb_writebatch_t
}

unsafe extern "C" fn writebatch_destroy(batch: *mut rocksdb_writebatch_t) {
    let stub = unsafe { &*(batch as *const StubWriteBatch) };
    stub.header.mark_freed();
}

unsafe extern "C" fn writebatch_clear(batch: *mut rocksdb_writebatch_t) {
    let stub = unsafe { &*(batch as *const StubWriteBatch) };
    stub.ops.lock().unwrap().clear();
}

unsafe extern "C" fn writebatch_count(batch: *mut rocksdb_writebatch_t) -> c_int {
    let stub = unsafe { &*(batch as *const StubWriteBatch) };
    stub.ops.lock().unwrap().len() as c_int
}

unsafe extern "C" fn writebatch_put(
    batch: *mut rocksdb_writebatch_t,
    key: *const c_char,
    key_len: size_t,
    value: *const c_char,
    value_len: size_t,
) {
    let stub = unsafe { &*(batch as *const StubWriteBatch) };
    let key = unsafe { std::slice::from_raw_parts(key as *const u8, key_len) }.to_vec();
    let value = unsafe { std::slice::from_raw_parts(value as *const u8, value_len) }.to_vec();
    stub.ops.lock().unwrap().push(BatchOp::Put(key, value));
}

unsafe extern "C" fn writebatch_delete(
    batch: *mut rocksdb_writebatch_t,
    key: *const c_char,
    key_len: size_t,
) {
    let stub = unsafe { &*(batch as *const StubWriteBatch) };
    let key = unsafe { std::slice::from_raw_parts(key as *const u8, key_len) }.to_vec();
    stub.ops.lock().unwrap().push(BatchOp::Delete(key));
}

// ---------------------------------------------------------------------------
// database

type Store = Arc<Mutex<BTreeMap<Vec<u8>, Vec<u8>>>>;

/// Stores persist here across close/reopen, keyed by path, emulating the
/// engine's on-disk state within the test process.
fn registry() -> &'static Mutex<HashMap<String, Store>> {
    static REGISTRY: OnceLock<Mutex<HashMap<String, Store>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

#[repr(C)]
struct StubDb {
    header: Header,
    store: Store,
}

unsafe extern "C" fn open(
    opts: *const rocksdb_options_t,
    path: *const c_char,
    errptr: *mut *mut c_char,
) -> *mut rocksdb_t {
    if take_injected_failure() {
        return ptr::null_mut();
    }
    let options = unsafe { &*(opts as *const StubOptions) };
    let path = unsafe { CStr::from_ptr(path) }.to_string_lossy().into_owned();

    let mut registry = registry().lock().unwrap();
    let exists = registry.contains_key(&path);
    if exists && options.error_if_exists.load(Ordering::SeqCst) {
        set_err(errptr, &format!("Invalid argument: {path} exists (error_if_exists is true)"));
        return ptr::null_mut();
    }
    if !exists && !options.create_if_missing.load(Ordering::SeqCst) {
        set_err(
            errptr,
            &format!("Invalid argument: {path} does not exist (create_if_missing is false)"),
        );
        return ptr::null_mut();
    }

    let store = registry.entry(path).or_default().clone();
    leak(StubDb {
        header: Header::new(),
        store,
    }) as *mut rocksdb_t
}

unsafe extern "C" fn close(db: *mut rocksdb_t) {
    let stub = unsafe { &*(db as *const StubDb) };
    stub.header.mark_freed();
}

unsafe extern "C" fn put(
    db: *mut rocksdb_t,
    _wopts: *const rocksdb_writeoptions_t,
    key: *const c_char,
    key_len: size_t,
    value: *const c_char,
    value_len: size_t,
    _errptr: *mut *mut c_char,
) {
    let stub = unsafe { &*(db as *const StubDb) };
    let key = unsafe { std::slice::from_raw_parts(key as *const u8, key_len) }.to_vec();
    let value = unsafe { std::slice::from_raw_parts(value as *const u8, value_len) }.to_vec();
    stub.store.lock().unwrap().insert(key, value);
}

unsafe extern "C" fn get(
    db: *mut rocksdb_t,
    _ropts: *const rocksdb_readoptions_t,
    key: *const c_char,
    key_len: size_t,
    value_len: *mut size_t,
    _errptr: *mut *mut c_char,
) -> *mut c_char {
    let stub = unsafe { &*(db as *const StubDb) };
    let key = unsafe { std::slice::from_raw_parts(key as *const u8, key_len) };
    let store = stub.store.lock().unwrap();
    match store.get(key) {
        Some(value) => unsafe {
            *value_len = value.len();
            let buffer = libc::malloc(value.len().max(1)) as *mut u8;
            ptr::copy_nonoverlapping(value.as_ptr(), buffer, value.len());
            buffer as *mut c_char
        },
        None => {
            unsafe { *value_len = 0 };
            ptr::null_mut()
        }
    }
}

unsafe extern "C" fn delete(
    db: *mut rocksdb_t,
    _wopts: *const rocksdb_writeoptions_t,
    key: *const c_char,
    key_len: size_t,
    _errptr: *mut *mut c_char,
) {
    let stub = unsafe { &*(db as *const StubDb) };
    let key = unsafe { std::slice::from_raw_parts(key as *const u8, key_len) };
    stub.store.lock().unwrap().remove(key);
}

unsafe extern "C" fn write(
    db: *mut rocksdb_t,
    _wopts: *const rocksdb_writeoptions_t,
    batch: *mut rocksdb_writebatch_t,
    _errptr: *mut *mut c_char,
) {
    let stub = unsafe { &*(db as *const StubDb) };
    let batch = unsafe { &*(batch as *const StubWriteBatch) };
    let ops = batch.ops.lock().unwrap();
    let mut store = stub.store.lock().unwrap();
    for op in ops.iter() {
        match op {
            BatchOp::Put(key, value) => {
                store.insert(key.clone(), value.clone());
            }
            BatchOp::Delete(key) => {
                store.remove(key);
            }
        }
    }
}

unsafe extern "C" fn destroy_db(
    _opts: *const rocksdb_options_t,
    path: *const c_char,
    _errptr: *mut *mut c_char,
) {
    let path = unsafe { CStr::from_ptr(path) }.to_string_lossy().into_owned();
    registry().lock().unwrap().remove(&path);
}

unsafe extern "C" fn free(buffer: *mut c_void) {
    unsafe { libc::free(buffer) };
}

// ---------------------------------------------------------------------------
// assembly

/// An [`Engine`] backed entirely by this stub.
pub(crate) fn engine() -> Arc<Engine> {
    Engine::from_api(NativeApi {
        options_create,
        options_destroy,
        options_set_create_if_missing,
        options_set_error_if_exists,
        options_set_write_buffer_size,
        options_set_max_open_files,
        options_increase_parallelism,
        options_set_compression,
        options_set_comparator,
        options_set_env,
        options_set_row_cache,
        readoptions_create,
        readoptions_destroy,
        readoptions_set_verify_checksums,
        readoptions_set_fill_cache,
        writeoptions_create,
        writeoptions_destroy,
        writeoptions_set_sync,
        writeoptions_disable_wal,
        envoptions_create,
        envoptions_destroy,
        create_default_env,
        env_set_background_threads,
        env_destroy,
        cache_create_lru,
        cache_destroy,
        cache_get_usage,
        comparator_create,
        comparator_destroy,
        writebatch_create,
        writebatch_destroy,
        writebatch_clear,
        writebatch_count,
        writebatch_put,
        writebatch_delete,
        open,
        close,
        put,
        get,
        delete,
        write,
        destroy_db,
        free,
    })
}
