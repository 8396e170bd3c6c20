//! The ownership bridge: a managed-side wrapper over a shared native handle.
//!
//! `SharedBridge<T>` reconciles two incompatible lifetime disciplines:
//! deterministic native destruction on one side, non-deterministic managed
//! collection on the other. It owns exactly one handle *slot*; the handle
//! itself may share the underlying value with other bridges produced by
//! copy-construction. Teardown is two-phase:
//!
//! - **finalize** releases only the handle slot, decrementing the underlying
//!   value's reference count. It is safe from any execution context - the
//!   collector may run it on its own thread, long after or never in sync with
//!   explicit disposal - and it touches no other managed state.
//! - **dispose** runs finalize and then marks the instance disposed. It is
//!   idempotent: a second dispose, or a finalize after dispose, is a silent
//!   no-op, never a double-free. The handle's own reference counting absorbs
//!   the actual value destruction, so teardown is only responsible for
//!   releasing the bridge's slot on that count.
//!
//! Member access after disposal is rejected before it can reach native code:
//! [`SharedBridge::get`] and [`SharedBridge::as_native_handle`] fail with
//! [`BridgeError::UseAfterDispose`] on a disposed or empty bridge.
//!
//! # Examples
//!
//! ```
//! use clrbridge_runtime::SharedBridge;
//!
//! struct Aklass { i: i32 }
//!
//! let mut original = SharedBridge::from_value(Aklass { i: 5 });
//! let copy = original.clone();           // shares the underlying value
//!
//! original.reassign(Aklass { i: 7 }).unwrap();
//! assert_eq!(copy.get().unwrap().i, 5);      // copy is unaffected
//! assert_eq!(original.get().unwrap().i, 7);
//!
//! original.dispose();
//! original.dispose();                    // idempotent, absorbed silently
//! assert!(original.get().is_err());
//! assert_eq!(copy.get().unwrap().i, 5);  // copy still owns its claim
//! ```

use std::any;
use std::fmt;

use clrbridge_core::BridgeError;

use crate::handle::NativeHandle;

/// A managed-side wrapper holding one shared-ownership handle slot.
///
/// The bridge carries no locks and never blocks: an instance becomes
/// finalizable only once it is unreachable, so no live caller can race its
/// own finalize. Two bridges sharing an underlying value may finalize
/// concurrently; the atomic reference count inside [`NativeHandle`] absorbs
/// that.
pub struct SharedBridge<T> {
    /// The owned handle slot. `None` when the bridge is empty (never
    /// constructed with a value, reset, or already finalized).
    slot: Option<NativeHandle<T>>,
    /// Set by `dispose`; terminal.
    disposed: bool,
}

impl<T> SharedBridge<T> {
    /// Create an empty bridge: no underlying value, slot is vacant.
    pub fn new() -> Self {
        Self {
            slot: None,
            disposed: false,
        }
    }

    /// Take ownership of a native value behind a fresh shared handle.
    ///
    /// On teardown the value is destroyed if no other handle shares it.
    pub fn from_value(value: T) -> Self {
        Self {
            slot: Some(NativeHandle::new(value)),
            disposed: false,
        }
    }

    /// Share an existing handle's underlying value.
    ///
    /// The reference count increases; the bridge's claim is independent of
    /// the source handle's own lifetime.
    pub fn from_handle(handle: NativeHandle<T>) -> Self {
        Self {
            slot: Some(handle),
            disposed: false,
        }
    }

    /// Borrow the underlying value for forwarding a native member call.
    ///
    /// Fails with [`BridgeError::UseAfterDispose`] on a disposed or empty
    /// bridge: native member access through a stale or null pointer is
    /// undefined and must be rejected before it reaches native code.
    pub fn get(&self) -> Result<&T, BridgeError> {
        match &self.slot {
            Some(handle) if !self.disposed => Ok(handle),
            _ => Err(self.use_after_dispose()),
        }
    }

    /// Clone the underlying shared handle (reference count increases).
    ///
    /// This is the explicit, named form of the native-handle conversion;
    /// the same use-after-dispose guard applies as for [`Self::get`].
    pub fn as_native_handle(&self) -> Result<NativeHandle<T>, BridgeError> {
        match &self.slot {
            Some(handle) if !self.disposed => Ok(NativeHandle::clone(handle)),
            _ => Err(self.use_after_dispose()),
        }
    }

    /// Drop the slot's claim on the underlying value.
    ///
    /// Decrements the reference count, destroying the value if this was the
    /// last claim. The bridge becomes empty but not disposed; it may take a
    /// new value via [`Self::reassign`].
    pub fn reset(&mut self) {
        self.slot = None;
    }

    /// Drop the current claim and take ownership of a new value behind a
    /// fresh handle.
    ///
    /// Rejected on a disposed instance: disposal is terminal and a disposed
    /// bridge must not be resurrected.
    pub fn reassign(&mut self, value: T) -> Result<(), BridgeError> {
        if self.disposed {
            return Err(self.use_after_dispose());
        }
        self.slot = Some(NativeHandle::new(value));
        Ok(())
    }

    /// Release the handle slot only.
    ///
    /// Safe from any execution context; touches no managed state beyond the
    /// slot itself. Idempotent: releasing an already-vacant slot does
    /// nothing.
    pub fn finalize(&mut self) {
        self.slot = None;
    }

    /// Deterministic teardown: finalize, then mark the instance disposed.
    ///
    /// Idempotent. A second dispose, or a finalize arriving after dispose
    /// from the collector, observes no state transition.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.finalize();
        self.disposed = true;
    }

    /// Check if the slot is vacant.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Check if the bridge has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Number of handles currently sharing the underlying value, or 0 for an
    /// empty bridge.
    pub fn handle_count(&self) -> usize {
        self.slot.as_ref().map(NativeHandle::strong_count).unwrap_or(0)
    }

    fn use_after_dispose(&self) -> BridgeError {
        BridgeError::UseAfterDispose {
            type_name: any::type_name::<T>(),
        }
    }
}

impl<T> Default for SharedBridge<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SharedBridge<T> {
    /// Copy-construction: a new bridge instance with a new handle slot
    /// sharing the same underlying value (reference count increases).
    ///
    /// Disposed state is never shared: the clone starts undisposed. Cloning
    /// an empty or already-finalized bridge yields an empty bridge, whose
    /// member access then fails loudly.
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.as_ref().map(NativeHandle::clone),
            disposed: false,
        }
    }
}

impl<T> Drop for SharedBridge<T> {
    /// The collector path: an unreachable instance is finalized, releasing
    /// its slot's claim on the reference count.
    fn drop(&mut self) {
        self.finalize();
    }
}

impl<T> fmt::Debug for SharedBridge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBridge")
            .field("type", &any::type_name::<T>())
            .field("empty", &self.is_empty())
            .field("disposed", &self.disposed)
            .finish()
    }
}
