//! Custom key comparators.
//!
//! A [`Comparator`] wraps a Rust ordering closure in the engine's callback
//! triple (destructor, compare, name). The callback state travels with the
//! native comparator object: whichever side ends up owning the comparator
//! reclaims the state through the destructor callback, exactly once.

use std::cmp::Ordering;
use std::ffi::CString;
use std::os::raw::{c_char, c_int, c_void};
use std::sync::Arc;

use libc::size_t;

use crate::engine::Engine;
use crate::error::{Error, ResourceKind, Result};
use crate::handle::OwnedHandle;
use crate::sys;

struct ComparatorState {
    name: CString,
    compare: Box<dyn Fn(&[u8], &[u8]) -> Ordering + Send + Sync>,
}

unsafe extern "C" fn destructor_callback(state: *mut c_void) {
    // SAFETY: `state` is the Box leaked in `Comparator::new`, reclaimed
    // exactly once by the owning side's destroy call.
    drop(unsafe { Box::from_raw(state as *mut ComparatorState) });
}

unsafe extern "C" fn compare_callback(
    state: *mut c_void,
    a: *const c_char,
    a_len: size_t,
    b: *const c_char,
    b_len: size_t,
) -> c_int {
    // SAFETY: the engine passes back the state it was created with, and the
    // key slices are valid for the duration of the call.
    let state = unsafe { &*(state as *const ComparatorState) };
    let a = unsafe { std::slice::from_raw_parts(a as *const u8, a_len) };
    let b = unsafe { std::slice::from_raw_parts(b as *const u8, b_len) };
    match (state.compare)(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

unsafe extern "C" fn name_callback(state: *mut c_void) -> *const c_char {
    // SAFETY: as above; the returned pointer lives as long as the state.
    let state = unsafe { &*(state as *const ComparatorState) };
    state.name.as_ptr()
}

/// A key comparator backed by a Rust closure.
///
/// Passing the comparator to
/// [`Options::set_comparator`](crate::Options::set_comparator) transfers
/// ownership to the engine; the wrapper is spent afterwards.
pub struct Comparator {
    handle: OwnedHandle<sys::rocksdb_comparator_t>,
    _engine: Arc<Engine>,
}

impl Comparator {
    /// Create a comparator from an ordering closure.
    ///
    /// The name identifies the comparator in the database's metadata;
    /// opening a database with a differently named comparator is rejected
    /// by the engine.
    pub fn new<F>(engine: &Arc<Engine>, name: &str, compare: F) -> Result<Comparator>
    where
        F: Fn(&[u8], &[u8]) -> Ordering + Send + Sync + 'static,
    {
        let name = CString::new(name)
            .map_err(|_| Error::Config("comparator name contains a NUL byte".to_string()))?;
        let state = Box::into_raw(Box::new(ComparatorState {
            name,
            compare: Box::new(compare),
        }));

        // SAFETY: `state` is a valid leaked Box and the callbacks match the
        // engine's expected signatures.
        let ptr = unsafe {
            (engine.api().comparator_create)(
                state as *mut c_void,
                destructor_callback,
                compare_callback,
                name_callback,
            )
        };
        if ptr.is_null() {
            // The factory failed without taking ownership; reclaim the
            // state here so the failure path leaks nothing.
            // SAFETY: `state` was never handed to the engine.
            drop(unsafe { Box::from_raw(state) });
            return Err(Error::Allocation(ResourceKind::Comparator));
        }

        let handle = OwnedHandle::new(ptr, engine.api().comparator_destroy, ResourceKind::Comparator)?;
        Ok(Comparator {
            handle,
            _engine: Arc::clone(engine),
        })
    }

    /// Release the underlying native object. Idempotent; also runs on drop.
    ///
    /// A no-op once the comparator has been consumed by an options object.
    pub fn close(&self) {
        self.handle.release();
    }

    /// Hand the raw handle over for an ownership-transferring native call.
    pub(crate) fn surrender(&self) -> Result<*mut sys::rocksdb_comparator_t> {
        self.handle.surrender()
    }
}
