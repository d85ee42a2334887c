//! Pull-model queries the surface issues during layout.
//!
//! A [`DataSource`] is what the surface talks to: section and item counts,
//! identifier lookup by position, and cell resolution. It always reflects the
//! snapshot the reconciler last committed, including while a batch is in
//! flight, so counts the surface reads mid-batch match the edits it receives.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::id::Identifier;
use crate::index::IndexPath;
use crate::snapshot::Snapshot;
use crate::store::SharedSnapshot;
use crate::surface::{CellProvider, CellSize, Placeholder, RenderSurface, SupplementaryKind};

/// Query handle shared by a reconciler and its surface.
///
/// Cheap to clone; clones observe the same current snapshot.
pub struct DataSource<S, I, Surf: RenderSurface<S, I>> {
    snapshot: SharedSnapshot<S, I>,
    provider: Arc<dyn CellProvider<S, I, Surf>>,
}

impl<S, I, Surf: RenderSurface<S, I>> Clone for DataSource<S, I, Surf> {
    fn clone(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<S, I, Surf: RenderSurface<S, I>> fmt::Debug for DataSource<S, I, Surf> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource").finish_non_exhaustive()
    }
}

impl<S, I, Surf> DataSource<S, I, Surf>
where
    S: Identifier,
    I: Identifier,
    Surf: RenderSurface<S, I>,
{
    /// Create a data source over an empty snapshot.
    pub(crate) fn new(provider: Arc<dyn CellProvider<S, I, Surf>>) -> Self {
        Self {
            snapshot: SharedSnapshot::new(Snapshot::new()),
            provider,
        }
    }

    pub(crate) fn store(&self) -> &SharedSnapshot<S, I> {
        &self.snapshot
    }

    /// The snapshot currently committed.
    pub fn snapshot(&self) -> Arc<Snapshot<S, I>> {
        self.snapshot.load()
    }

    /// Number of sections.
    pub fn number_of_sections(&self) -> usize {
        self.snapshot.with_read(Snapshot::number_of_sections)
    }

    /// Number of items in the section at `section`, or 0 when out of range.
    pub fn number_of_items(&self, section: usize) -> usize {
        self.snapshot
            .with_read(|snapshot| snapshot.section_at(section).map_or(0, |(_, items)| items.len()))
    }

    /// Section identifier at `section`.
    pub fn section_identifier(&self, section: usize) -> Option<S> {
        self.snapshot
            .with_read(|snapshot| snapshot.section_at(section).map(|(id, _)| id.clone()))
    }

    /// Item identifier at `path`.
    pub fn item_identifier(&self, path: IndexPath) -> Option<I> {
        self.snapshot.with_read(|snapshot| snapshot.item_at(path).cloned())
    }

    /// Cell for the item at `path`.
    ///
    /// Falls back to [`Placeholder::empty`] when the provider yields nothing or
    /// `path` is out of range.
    pub fn resolve_cell(&self, surface: &Surf, path: IndexPath) -> Surf::Cell {
        // Clone the identifier out so the provider runs without the lock held
        let Some(item) = self.item_identifier(path) else {
            debug!(%path, "resolve_cell: no item at path");
            return <Surf::Cell as Placeholder>::empty();
        };
        self.provider
            .cell(surface, path, &item)
            .unwrap_or_else(<Surf::Cell as Placeholder>::empty)
    }

    /// Supplementary view of `kind` at `path`.
    ///
    /// Falls back to a placeholder that fills the cross axis of the surface's
    /// scroll direction.
    pub fn resolve_supplementary(&self, surface: &Surf, kind: &SupplementaryKind, path: IndexPath) -> Surf::Cell {
        self.provider
            .supplementary(surface, kind, path)
            .unwrap_or_else(|| <Surf::Cell as Placeholder>::sized(CellSize::fill_cross_axis(surface.scroll_axis())))
    }
}
