//! Snapshot Diff Algorithm
//!
//! Computes the edit script between two snapshots.
//! This is a **pure algorithm module** with **no surface dependencies**.
//!
//! # Architecture: Diff/Apply Separation
//!
//! ```text
//! diff_snapshots(old, new) -> EditScript   // Pure data, no surface
//!       |
//!       v
//! Reconciler::apply -> RenderSurface::perform_batch_updates
//! ```
//!
//! # Algorithm
//!
//! 1. Diff section identifiers (old order vs new order)
//! 2. For every section of the new snapshot, diff its items against the items
//!    the same section held in the old snapshot (empty if the section is new)
//! 3. Collect reloads for marked sections and items the diff kept, skipping
//!    items of sections that are being inserted
//!
//! # Coordinates
//!
//! Deletions are positions in the old snapshot, insertions and reloads are
//! positions in the new one. A surface applies deletions before insertions,
//! so old coordinates stay valid until every deletion is issued.
//!
//! Sections that only exist in the old snapshot are not item-diffed: deleting
//! the section removes its items.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::id::Identifier;
use crate::index::{IndexPath, SectionIndices};
use crate::snapshot::Snapshot;

use super::myers::{diff_sequences, EditStats};

// =============================================================================
// Public Types
// =============================================================================

/// Statistics from snapshot diff
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    /// Section-level keep/insert/delete counts
    pub sections: EditStats,
    /// Item-level counts, summed over every section of the new snapshot
    pub items: EditStats,
}

/// Minimal structural edits turning one snapshot into another.
///
/// All lists are ascending. Item paths are ordered by section of the new
/// snapshot, then by item index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditScript {
    /// Sections to delete, by old index
    pub section_deletions: SectionIndices,
    /// Sections to insert, by new index
    pub section_insertions: SectionIndices,
    /// Items to delete, by old position
    pub item_deletions: Vec<IndexPath>,
    /// Items to insert, by new position
    pub item_insertions: Vec<IndexPath>,
    /// Kept sections marked for reload, by new index
    pub section_reloads: SectionIndices,
    /// Kept items marked for reload, by new position
    pub item_reloads: Vec<IndexPath>,
    /// Statistics about the diff
    pub stats: DiffStats,
}

impl EditScript {
    /// Check if there are no structural edits.
    ///
    /// Reloads are not structural and are ignored here.
    pub fn is_empty(&self) -> bool {
        self.structural_edit_count() == 0
    }

    /// Total number of section and item insertions and deletions.
    pub fn structural_edit_count(&self) -> usize {
        self.section_deletions.len()
            + self.section_insertions.len()
            + self.item_deletions.len()
            + self.item_insertions.len()
    }

    /// Check if any section or item reload is pending.
    pub fn has_reloads(&self) -> bool {
        !self.section_reloads.is_empty() || !self.item_reloads.is_empty()
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Diff two snapshots.
///
/// # Example
///
/// ```
/// use diffable_sections::{diff_snapshots, IndexPath, Snapshot};
///
/// let old: Snapshot<&str, u32> = [("s1", vec![1, 2]), ("s2", vec![3])].into_iter().collect();
/// let new: Snapshot<&str, u32> = [("s2", vec![3, 4]), ("s3", vec![5])].into_iter().collect();
///
/// let script = diff_snapshots(&old, &new);
/// assert_eq!(script.section_deletions.as_slice(), &[0]);
/// assert_eq!(script.section_insertions.as_slice(), &[1]);
/// assert!(script.item_deletions.is_empty());
/// assert_eq!(script.item_insertions[0], IndexPath::new(0, 1));
/// ```
#[must_use]
pub fn diff_snapshots<S, I>(old: &Snapshot<S, I>, new: &Snapshot<S, I>) -> EditScript
where
    S: Identifier,
    I: Identifier,
{
    let sections = new
        .sections()
        .enumerate()
        .map(|(index, (section, items))| diff_section_items(old, new, index, section, items))
        .collect();
    assemble(old, new, sections)
}

/// Diff two snapshots, running the per-section item diffs on the rayon pool.
///
/// Produces the same script as [`diff_snapshots`]. Worth it for snapshots
/// with many large sections.
#[cfg(feature = "parallel")]
#[must_use]
pub fn par_diff_snapshots<S, I>(old: &Snapshot<S, I>, new: &Snapshot<S, I>) -> EditScript
where
    S: Identifier + Sync,
    I: Identifier + Sync,
{
    let sections: Vec<(usize, (&S, &[I]))> = new.sections().enumerate().collect();
    let sections = sections
        .into_par_iter()
        .map(|(index, (section, items))| diff_section_items(old, new, index, section, items))
        .collect();
    assemble(old, new, sections)
}

fn assemble<S, I>(old: &Snapshot<S, I>, new: &Snapshot<S, I>, sections: Vec<SectionItemsDiff>) -> EditScript
where
    S: Identifier,
    I: Identifier,
{
    let old_ids: Vec<&S> = old.section_identifiers().collect();
    let new_ids: Vec<&S> = new.section_identifiers().collect();

    let section_diff = diff_sequences(&old_ids, &new_ids);

    let mut script = EditScript {
        section_deletions: section_diff.deletions().collect(),
        section_insertions: section_diff.insertions().collect(),
        section_reloads: section_diff
            .keeps()
            .filter(|&(_, new_idx)| new.is_section_reloaded(new_ids[new_idx]))
            .map(|(_, new_idx)| new_idx)
            .collect(),
        ..Default::default()
    };
    script.stats.sections = section_diff.stats;

    for (new_section, section) in sections.into_iter().enumerate() {
        script.item_deletions.extend(section.deletions);
        script.item_insertions.extend(section.insertions);
        // An inserted section is rebuilt whole, nothing in it to reload
        if !script.section_insertions.contains(new_section) {
            script.item_reloads.extend(section.reloads);
        }
        script.stats.items += section.stats;
    }

    script
}

// =============================================================================
// Per-section item diff
// =============================================================================

struct SectionItemsDiff {
    deletions: Vec<IndexPath>,
    insertions: Vec<IndexPath>,
    reloads: Vec<IndexPath>,
    stats: EditStats,
}

fn diff_section_items<S, I>(
    old: &Snapshot<S, I>,
    new: &Snapshot<S, I>,
    new_section: usize,
    section: &S,
    new_items: &[I],
) -> SectionItemsDiff
where
    S: Identifier,
    I: Identifier,
{
    let old_items = old.item_identifiers(section);
    // Only read when there are deletions, which implies the section existed
    let old_section = old.index_of_section(section).unwrap_or_default();

    let diff = diff_sequences(old_items, new_items);

    SectionItemsDiff {
        deletions: diff.deletions().map(|item| IndexPath::new(old_section, item)).collect(),
        insertions: diff.insertions().map(|item| IndexPath::new(new_section, item)).collect(),
        reloads: diff
            .keeps()
            .filter(|&(_, new_idx)| new.is_item_reloaded(&new_items[new_idx]))
            .map(|(_, new_idx)| IndexPath::new(new_section, new_idx))
            .collect(),
        stats: diff.stats,
    }
}

// =============================================================================
// Tests
// =============================================================================
