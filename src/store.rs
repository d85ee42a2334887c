//! Shared slot holding the current snapshot.
//!
//! The reconciler and the surface's data source both read the current
//! snapshot; only the reconciler replaces it. Replacement swaps the whole
//! `Arc`, so a reader sees either the old or the new snapshot in full, never
//! a partially updated one.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::snapshot::Snapshot;

/// Thread-safe handle to the current snapshot.
///
/// Uses `parking_lot::RwLock` for better performance under contention.
/// Cloning the handle shares the slot.
#[derive(Debug)]
pub struct SharedSnapshot<S, I> {
    inner: Arc<RwLock<Arc<Snapshot<S, I>>>>,
}

impl<S, I> Clone for SharedSnapshot<S, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, I> SharedSnapshot<S, I> {
    /// Create a slot holding `snapshot`.
    pub fn new(snapshot: Snapshot<S, I>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    /// Get the current snapshot.
    ///
    /// The read lock is released before returning, so callers may hold the
    /// result across a later `replace`.
    pub fn load(&self) -> Arc<Snapshot<S, I>> {
        Arc::clone(&self.inner.read())
    }

    /// Execute a closure with read access to the current snapshot.
    pub fn with_read<R>(&self, f: impl FnOnce(&Snapshot<S, I>) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Swap in a new snapshot, returning the previous one.
    pub(crate) fn replace(&self, snapshot: Arc<Snapshot<S, I>>) -> Arc<Snapshot<S, I>> {
        std::mem::replace(&mut *self.inner.write(), snapshot)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn one_section(items: Vec<u32>) -> Snapshot<&'static str, u32> {
        [("main", items)].into_iter().collect()
    }

    #[test]
    fn test_clones_share_the_slot() {
        let shared = SharedSnapshot::new(one_section(vec![1]));
        let other = shared.clone();
        assert!(Arc::ptr_eq(&shared.load(), &other.load()));

        other.replace(Arc::new(one_section(vec![1, 2])));
        assert_eq!(shared.with_read(|s| s.total_items()), 2);
    }

    #[test]
    fn test_loaded_snapshot_survives_replace() {
        let shared = SharedSnapshot::new(one_section(vec![1]));
        let before = shared.load();

        let previous = shared.replace(Arc::new(one_section(vec![])));
        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.item_identifiers(&"main"), &[1]);
        assert_eq!(shared.load().total_items(), 0);
    }

    #[test]
    fn test_independent_slots() {
        let a = SharedSnapshot::new(one_section(vec![]));
        let b = SharedSnapshot::new(one_section(vec![]));
        b.replace(Arc::new(one_section(vec![3])));
        assert_eq!(a.load().total_items(), 0);
        assert_eq!(b.load().total_items(), 1);
    }
}
