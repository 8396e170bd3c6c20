//! Shared-ownership handle over a native value.

use std::sync::Arc;

/// A reference-counted ownership token over a native value.
///
/// Multiple handles may reference the same underlying value; the value is
/// destroyed when the last referencing handle is dropped or reset. The count
/// is atomic, so handles held by bridges on different threads may be released
/// concurrently without racing on the count - that atomicity is delegated
/// entirely to this primitive, never re-implemented in the bridge.
pub type NativeHandle<T> = Arc<T>;

/// Number of handles currently sharing the underlying value.
pub fn handle_count<T>(handle: &NativeHandle<T>) -> usize {
    Arc::strong_count(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_tracks_sharing() {
        let handle = NativeHandle::new(5_i32);
        assert_eq!(handle_count(&handle), 1);

        let second = NativeHandle::clone(&handle);
        assert_eq!(handle_count(&handle), 2);

        drop(second);
        assert_eq!(handle_count(&handle), 1);
    }
}
