//! Ownership and lifetime tracking for native engine handles.
//!
//! Every wrapper type in this crate stores its raw engine pointer in an
//! [`OwnedHandle`]. The handle is either valid (non-null) or released
//! (null), and the only transition is valid → released. Release runs the
//! native destructor exactly once, no matter how many times it is invoked
//! or from how many threads, and no matter whether it is triggered by an
//! explicit close or by the wrapper being dropped.

use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

use crate::error::{Error, ResourceKind, Result};

/// The native destructor paired with a handle at creation time.
pub(crate) type Destructor<T> = unsafe extern "C" fn(*mut T);

/// Exclusive owner of one native handle.
///
/// The pointer is stored in an [`AtomicPtr`]; release swaps it to null with
/// `AcqRel` ordering and access loads it with `Acquire`, so a release on one
/// thread happens-before any subsequent access attempt on another. The swap
/// also serializes racing releases: exactly one caller observes the live
/// pointer and runs the destructor.
pub(crate) struct OwnedHandle<T> {
    ptr: AtomicPtr<T>,
    destroy: Destructor<T>,
    kind: ResourceKind,
}

impl<T> OwnedHandle<T> {
    /// Take ownership of a freshly created native handle.
    ///
    /// A null `ptr` is the engine's allocation-failure sentinel and yields
    /// [`Error::Allocation`]; no partially initialized handle is returned.
    pub(crate) fn new(ptr: *mut T, destroy: Destructor<T>, kind: ResourceKind) -> Result<Self> {
        if ptr.is_null() {
            return Err(Error::Allocation(kind));
        }
        Ok(Self {
            ptr: AtomicPtr::new(ptr),
            destroy,
            kind,
        })
    }

    /// The raw pointer, for forwarding into further native calls.
    ///
    /// Fails with [`Error::UseAfterRelease`] once the handle has been
    /// released. Crate-private: the pointer is only ever re-presented to
    /// the engine, never handed to external callers.
    pub(crate) fn as_ptr(&self) -> Result<*mut T> {
        let ptr = self.ptr.load(Ordering::Acquire);
        if ptr.is_null() {
            return Err(Error::UseAfterRelease(self.kind));
        }
        Ok(ptr)
    }

    /// Release the handle, invoking the native destructor if this call is
    /// the one that transitions it out of the valid state.
    ///
    /// Idempotent: later calls (from any thread, including the drop path)
    /// observe null and return `false` without touching the engine.
    pub(crate) fn release(&self) -> bool {
        let ptr = self.ptr.swap(ptr::null_mut(), Ordering::AcqRel);
        if ptr.is_null() {
            return false;
        }
        // SAFETY: the swap returned the live pointer, so this thread holds
        // the only remaining right to destroy it and nobody else can
        // observe it again.
        unsafe { (self.destroy)(ptr) };
        true
    }

    /// Take the pointer out without running the destructor.
    ///
    /// Used when ownership transfers into a composite native call (the
    /// engine becomes responsible for destruction). The wrapper ends up
    /// released, so neither an explicit release nor the drop path can
    /// double-free the transferred handle.
    pub(crate) fn surrender(&self) -> Result<*mut T> {
        let ptr = self.ptr.swap(ptr::null_mut(), Ordering::AcqRel);
        if ptr.is_null() {
            return Err(Error::UseAfterRelease(self.kind));
        }
        Ok(ptr)
    }
}

impl<T> Drop for OwnedHandle<T> {
    fn drop(&mut self) {
        self.release();
    }
}
