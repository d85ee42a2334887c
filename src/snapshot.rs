//! Snapshot type and its builder operations.
//!
//! A [`Snapshot`] is the full desired state of a sectioned view: an ordered
//! list of section identifiers, each owning an ordered list of item
//! identifiers. It is a plain value. Mutating a snapshot after handing a copy
//! to a [`Reconciler`](crate::Reconciler) never affects the reconciler's copy.
//!
//! # Storage
//!
//! Sections live in an `IndexMap` keyed by section identifier, which gives
//! both display order and O(1) section lookup. Section identity is the key
//! alone, so two sections with the same identifier are the same section no
//! matter what items they hold.
//!
//! # Missing identifiers
//!
//! Every mutator is total: an operation that names an unknown section, item
//! or anchor leaves the snapshot unchanged and emits a `debug` event instead
//! of failing.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::{FxBuildHasher, FxHashMap};
use tracing::debug;

use crate::error::{DiffableError, DiffableResult};
use crate::id::Identifier;
use crate::index::IndexPath;

type SectionMap<S, I> = IndexMap<S, Vec<I>, FxBuildHasher>;
type MarkSet<T> = IndexSet<T, FxBuildHasher>;

// =============================================================================
// Snapshot
// =============================================================================

/// Ordered, two-level description of sections and their items.
#[derive(Clone)]
pub struct Snapshot<S, I> {
    sections: SectionMap<S, I>,
    reloaded_sections: MarkSet<S>,
    reloaded_items: MarkSet<I>,
}

impl<S: Identifier, I: Identifier> Default for Snapshot<S, I> {
    fn default() -> Self {
        Self {
            sections: IndexMap::default(),
            reloaded_sections: IndexSet::default(),
            reloaded_items: IndexSet::default(),
        }
    }
}

impl<S: Identifier, I: Identifier> Snapshot<S, I> {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of sections.
    #[inline]
    pub fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    /// Number of items in `section`, or 0 if the section is absent.
    pub fn number_of_items(&self, section: &S) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    /// Total number of items across all sections.
    pub fn total_items(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Check if the snapshot has no sections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section identifiers in display order.
    pub fn section_identifiers(&self) -> impl ExactSizeIterator<Item = &S> {
        self.sections.keys()
    }

    /// Sections with their items, in display order.
    pub fn sections(&self) -> impl ExactSizeIterator<Item = (&S, &[I])> {
        self.sections.iter().map(|(id, items)| (id, items.as_slice()))
    }

    /// Items of `section` in order, or an empty slice if the section is absent.
    pub fn item_identifiers(&self, section: &S) -> &[I] {
        self.sections.get(section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First section whose item list contains `item`.
    ///
    /// Linear scan. If the same item identifier appears in several sections,
    /// the first one in display order wins.
    pub fn section_identifier(&self, item: &I) -> Option<&S> {
        self.locate(item).map(|(section, _, _)| section)
    }

    /// Position of `item` within its own section (not a global index).
    ///
    /// First section match wins under duplicates.
    pub fn index_of_item(&self, item: &I) -> Option<usize> {
        self.locate(item).map(|(_, _, index)| index)
    }

    /// Display position of `section`.
    #[inline]
    pub fn index_of_section(&self, section: &S) -> Option<usize> {
        self.sections.get_index_of(section)
    }

    /// Section identifier and items at display position `index`.
    pub fn section_at(&self, index: usize) -> Option<(&S, &[I])> {
        self.sections.get_index(index).map(|(id, items)| (id, items.as_slice()))
    }

    /// Item identifier at `path`.
    pub fn item_at(&self, path: IndexPath) -> Option<&I> {
        self.section_at(path.section).and_then(|(_, items)| items.get(path.item))
    }

    /// Section identifier, section index and item index of the first
    /// occurrence of `item`.
    fn locate(&self, item: &I) -> Option<(&S, usize, usize)> {
        self.sections
            .iter()
            .enumerate()
            .find_map(|(section_index, (section, items))| {
                items
                    .iter()
                    .position(|candidate| candidate == item)
                    .map(|item_index| (section, section_index, item_index))
            })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Item mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append items to the last section.
    ///
    /// No-op when the snapshot has no sections.
    pub fn append_items(&mut self, items: impl IntoIterator<Item = I>) {
        match self.sections.last_mut() {
            Some((_, list)) => list.extend(items),
            None => debug!("append_items: snapshot has no sections"),
        }
    }

    /// Append items to `section`.
    ///
    /// No-op when the section does not exist.
    pub fn append_items_to_section(&mut self, items: impl IntoIterator<Item = I>, section: &S) {
        match self.sections.get_mut(section) {
            Some(list) => list.extend(items),
            None => debug!(?section, "append_items_to_section: section not found"),
        }
    }

    /// Insert items immediately before the anchor item `before`.
    ///
    /// No-op when the anchor is not in the snapshot.
    pub fn insert_items_before(&mut self, items: impl IntoIterator<Item = I>, before: &I) {
        match self.locate(before) {
            Some((_, section_index, item_index)) => self.splice_items(section_index, item_index, items),
            None => debug!(anchor = ?before, "insert_items_before: anchor not found"),
        }
    }

    /// Insert items immediately after the anchor item `after`.
    ///
    /// No-op when the anchor is not in the snapshot.
    pub fn insert_items_after(&mut self, items: impl IntoIterator<Item = I>, after: &I) {
        match self.locate(after) {
            Some((_, section_index, item_index)) => self.splice_items(section_index, item_index + 1, items),
            None => debug!(anchor = ?after, "insert_items_after: anchor not found"),
        }
    }

    fn splice_items(&mut self, section_index: usize, at: usize, items: impl IntoIterator<Item = I>) {
        if let Some((_, list)) = self.sections.get_index_mut(section_index) {
            let tail = list.split_off(at);
            list.extend(items);
            list.extend(tail);
        }
    }

    /// Remove each item from its section. Unknown items are skipped.
    pub fn delete_items(&mut self, items: &[I]) {
        for item in items {
            let Some((_, section_index, item_index)) = self.locate(item) else {
                debug!(?item, "delete_items: item not found");
                continue;
            };
            if let Some((_, list)) = self.sections.get_index_mut(section_index) {
                list.remove(item_index);
            }
            self.reloaded_items.shift_remove(item);
        }
    }

    /// Clear every section's items. The sections themselves remain.
    pub fn delete_all_items(&mut self) {
        for list in self.sections.values_mut() {
            list.clear();
        }
        self.reloaded_items.clear();
    }

    /// Mark items as changed so the next apply reloads their content.
    ///
    /// Structurally a no-op: identity and position are untouched. Unknown
    /// items are skipped.
    pub fn reload_items(&mut self, items: &[I]) {
        for item in items {
            if self.locate(item).is_some() {
                self.reloaded_items.insert(item.clone());
            } else {
                debug!(?item, "reload_items: item not found");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Section mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append empty sections at the end.
    ///
    /// Identifiers already present are skipped, so section identifiers stay
    /// unique.
    pub fn append_sections(&mut self, sections: impl IntoIterator<Item = S>) {
        for section in sections {
            if self.sections.contains_key(&section) {
                debug!(?section, "append_sections: section already present");
                continue;
            }
            self.sections.insert(section, Vec::new());
        }
    }

    /// Remove sections along with their items. Unknown sections are skipped.
    pub fn delete_sections(&mut self, sections: &[S]) {
        for section in sections {
            match self.sections.shift_remove(section) {
                Some(items) => {
                    self.reloaded_sections.shift_remove(section);
                    for item in &items {
                        self.reloaded_items.shift_remove(item);
                    }
                }
                None => debug!(?section, "delete_sections: section not found"),
            }
        }
    }

    /// Mark sections as changed so the next apply reloads them.
    ///
    /// The section keeps its position and items. Unknown sections are skipped.
    pub fn reload_sections(&mut self, sections: &[S]) {
        for section in sections {
            if self.sections.contains_key(section) {
                self.reloaded_sections.insert(section.clone());
            } else {
                debug!(?section, "reload_sections: section not found");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reload marks
    // ─────────────────────────────────────────────────────────────────────────

    /// Items marked by [`reload_items`](Self::reload_items), in marking order.
    pub fn reloaded_items(&self) -> impl ExactSizeIterator<Item = &I> {
        self.reloaded_items.iter()
    }

    /// Sections marked by [`reload_sections`](Self::reload_sections), in
    /// marking order.
    pub fn reloaded_sections(&self) -> impl ExactSizeIterator<Item = &S> {
        self.reloaded_sections.iter()
    }

    /// Check whether `item` is marked for reload.
    #[inline]
    pub fn is_item_reloaded(&self, item: &I) -> bool {
        self.reloaded_items.contains(item)
    }

    /// Check whether `section` is marked for reload.
    #[inline]
    pub fn is_section_reloaded(&self, section: &S) -> bool {
        self.reloaded_sections.contains(section)
    }

    /// Drop all reload marks.
    pub fn clear_reload_marks(&mut self) {
        self.reloaded_items.clear();
        self.reloaded_sections.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Check that every item identifier appears exactly once in the snapshot.
    ///
    /// Mutators never enforce this; duplicates only make item lookups
    /// ambiguous (first match wins) and the diff non-minimal. Sections are
    /// scanned in display order and the first violation is reported.
    pub fn validate(&self) -> DiffableResult<()> {
        let mut seen: FxHashMap<&I, &S> = FxHashMap::default();
        for (section, items) in &self.sections {
            for item in items {
                if let Some(first) = seen.insert(item, section) {
                    return Err(if first == section {
                        DiffableError::duplicate_item(item, section)
                    } else {
                        DiffableError::item_in_multiple_sections(item, first, section)
                    });
                }
            }
        }
        Ok(())
    }
}

impl<S: Identifier, I: Identifier> PartialEq for Snapshot<S, I> {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order; snapshots are order-sensitive.
        self.sections.iter().eq(other.sections.iter())
            && self.reloaded_sections.iter().eq(other.reloaded_sections.iter())
            && self.reloaded_items.iter().eq(other.reloaded_items.iter())
    }
}

impl<S: Identifier, I: Identifier> Eq for Snapshot<S, I> {}

impl<S: fmt::Debug, I: fmt::Debug> fmt::Debug for Snapshot<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sections.iter()).finish()
    }
}

impl<S: Identifier, I: Identifier> FromIterator<(S, Vec<I>)> for Snapshot<S, I> {
    /// Build a snapshot from `(section, items)` pairs.
    ///
    /// A repeated section identifier is ignored along with its items.
    fn from_iter<T: IntoIterator<Item = (S, Vec<I>)>>(iter: T) -> Self {
        let mut snapshot = Self::new();
        for (section, items) in iter {
            if snapshot.sections.contains_key(&section) {
                debug!(?section, "from_iter: duplicate section ignored");
                continue;
            }
            snapshot.sections.insert(section, items);
        }
        snapshot
    }
}

// =============================================================================
// Tests
// =============================================================================
