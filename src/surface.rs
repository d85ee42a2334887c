//! Boundary with the rendering surface.
//!
//! The surface is the external, order-sensitive view (a list, grid or table)
//! whose rows are kept in sync with the applied snapshot. The reconciler only
//! needs a few capabilities from it:
//!
//! - [`RenderSurface::perform_batch_updates`]: run a closure of structural
//!   edits as one atomic transaction, then signal completion
//! - [`BatchUpdates`]: the edits themselves, reachable only inside that closure
//! - [`RenderSurface::set_animations_enabled`]: optional global animation toggle
//!
//! Cells are produced on demand through a [`CellProvider`], which the surface
//! reaches via the [`DataSource`] handed to it by [`RenderSurface::attach`].

use std::fmt;

use compact_str::CompactString;

use crate::index::{IndexPath, SectionIndices};
use crate::source::DataSource;

/// Callback fired once the surface has applied a batch.
pub type Completion = Box<dyn FnOnce() + 'static>;

// =============================================================================
// Surface traits
// =============================================================================

/// Structural edits a surface accepts inside a batch.
///
/// Calls arrive in this order: section deletions, section insertions, item
/// deletions, item insertions, then reloads. Deletions use old coordinates,
/// everything else new coordinates.
pub trait BatchUpdates {
    fn delete_sections(&mut self, sections: &SectionIndices);

    fn insert_sections(&mut self, sections: &SectionIndices);

    fn delete_items(&mut self, items: &[IndexPath]);

    fn insert_items(&mut self, items: &[IndexPath]);

    /// Refresh kept sections in place. Ignored by default.
    fn reload_sections(&mut self, sections: &SectionIndices) {
        let _ = sections;
    }

    /// Refresh kept items in place. Ignored by default.
    fn reload_items(&mut self, items: &[IndexPath]) {
        let _ = items;
    }
}

/// A view that renders a sectioned list of cells.
///
/// `perform_batch_updates` is not reentrant. The reconciler never nests
/// batches, and `&mut self` keeps callers from doing so.
pub trait RenderSurface<S, I>: Sized {
    /// Visual cell type produced for items and supplementary views
    type Cell: Placeholder;

    /// Receive the data source the surface should query during layout.
    ///
    /// Called once when the reconciler is constructed.
    fn attach(&mut self, source: DataSource<S, I, Self>) {
        let _ = source;
    }

    /// Run `updates` synchronously as one atomic transaction, then invoke
    /// `completion` exactly once when the mutation has taken effect.
    ///
    /// `completion` may be deferred, for example until an animation ends.
    fn perform_batch_updates<F>(&mut self, updates: F, completion: Completion)
    where
        F: FnOnce(&mut dyn BatchUpdates);

    /// Enable or disable animated transitions globally.
    fn set_animations_enabled(&mut self, enabled: bool) {
        let _ = enabled;
    }

    /// Scrolling direction, used to size fallback supplementary views.
    fn scroll_axis(&self) -> ScrollAxis {
        ScrollAxis::Vertical
    }
}

/// Produces cells for items and supplementary views.
///
/// Shared between the caller and the reconciler through an `Arc`. Returning
/// `None` makes the data source fall back to a placeholder cell.
///
/// Any `Fn(&Surf, IndexPath, &I) -> Option<Cell>` closure is a provider that
/// never supplies supplementary views.
pub trait CellProvider<S, I, Surf: RenderSurface<S, I>> {
    /// Cell for `item`, displayed at `path`.
    fn cell(&self, surface: &Surf, path: IndexPath, item: &I) -> Option<Surf::Cell>;

    /// Supplementary view (header, footer, ...) of `kind` at `path`.
    fn supplementary(&self, surface: &Surf, kind: &SupplementaryKind, path: IndexPath) -> Option<Surf::Cell> {
        let _ = (surface, kind, path);
        None
    }
}

impl<S, I, Surf, F> CellProvider<S, I, Surf> for F
where
    Surf: RenderSurface<S, I>,
    F: Fn(&Surf, IndexPath, &I) -> Option<Surf::Cell>,
{
    fn cell(&self, surface: &Surf, path: IndexPath, item: &I) -> Option<Surf::Cell> {
        self(surface, path, item)
    }
}

// =============================================================================
// Placeholder cells
// =============================================================================

/// Cells that can stand in when a provider yields nothing.
pub trait Placeholder: Sized {
    /// Empty cell used for items.
    fn empty() -> Self;

    /// Empty cell with an explicit size, used for supplementary views.
    fn sized(size: CellSize) -> Self {
        let _ = size;
        Self::empty()
    }
}

/// Scrolling direction of a surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
}

/// A single layout dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Absolute size in points
    Points(f32),
    /// Fraction of the container along that axis
    Fraction(f32),
}

/// Width and height of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl CellSize {
    /// Full extent across the scroll axis, one point along it.
    pub fn fill_cross_axis(axis: ScrollAxis) -> Self {
        match axis {
            ScrollAxis::Vertical => Self {
                width: Dimension::Fraction(1.0),
                height: Dimension::Points(1.0),
            },
            ScrollAxis::Horizontal => Self {
                width: Dimension::Points(1.0),
                height: Dimension::Fraction(1.0),
            },
        }
    }
}

// =============================================================================
// SupplementaryKind
// =============================================================================

/// Kind of a supplementary view, e.g. `"header"` or `"footer"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SupplementaryKind(CompactString);

impl SupplementaryKind {
    pub fn new(kind: &str) -> Self {
        Self(CompactString::new(kind))
    }

    pub fn header() -> Self {
        Self::new("header")
    }

    pub fn footer() -> Self {
        Self::new("footer")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SupplementaryKind {
    fn from(kind: &str) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for SupplementaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
