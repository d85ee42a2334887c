//! diffable-sections - Snapshot-driven updates for sectioned list views
//!
//! ## Core Concepts
//!
//! **Snapshots**: A [`Snapshot`] is an ordered list of sections, each holding an
//! ordered list of items. Sections and items are named by identifiers, not by
//! position. Build the full state you want to show, then hand it over.
//!
//! **Reconciliation**: A [`Reconciler`] diffs the new snapshot against the one
//! it applied last and drives a [`RenderSurface`] there with the minimal set of
//! section and item insertions and deletions, issued as one batch.
//!
//! ## Modules
//! - `snapshot`: Section/item container and its mutations
//! - `algo`: Sequence diff (Myers) and snapshot diff
//! - `surface`: Traits a rendering surface implements
//! - `source`: Pull-model queries for the surface
//! - `reconciler`: Applies snapshots to a surface
//!
//! ## Usage
//!
//! ```ignore
//! use diffable_sections::prelude::*;
//!
//! let mut reconciler = Reconciler::new(list_view, Arc::new(provider));
//!
//! let mut snapshot = Snapshot::new();
//! snapshot.append_sections(["recent", "archived"]);
//! snapshot.append_items_to_section([1, 2, 3], &"recent");
//! reconciler.apply(snapshot)?;
//!
//! // Later: start from the current state and edit it
//! let mut next = reconciler.snapshot();
//! next.delete_items(&[2]);
//! reconciler.apply_with(next, ApplyOptions::new().animated(false))?;
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Identifier bound for sections and items
pub mod id;

/// Positions: IndexPath, SectionIndices
pub mod index;

/// Snapshot container
pub mod snapshot;

/// Algorithms: sequence diff, snapshot diff
pub mod algo;

/// Error types
pub mod error;

// =============================================================================
// Surface integration
// =============================================================================

/// Rendering surface traits and cell types
pub mod surface;

/// Shared current-snapshot slot
pub mod store;

/// Query handle given to the surface
pub mod source;

/// Snapshot reconciler
pub mod reconciler;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Identity and positions
pub use id::Identifier;
pub use index::{IndexPath, SectionIndices};

// Snapshot
pub use snapshot::Snapshot;

// Algorithms
pub use algo::{diff_sequences, diff_snapshots, DiffStats, Edit, EditScript, EditStats, SequenceDiff};
#[cfg(feature = "parallel")]
pub use algo::par_diff_snapshots;

// Surface
pub use surface::{
    BatchUpdates, CellProvider, CellSize, Completion, Dimension, Placeholder, RenderSurface, ScrollAxis,
    SupplementaryKind,
};

// Reconciliation
pub use reconciler::{ApplyOptions, Reconciler, ReconcilerConfig, Validation};
pub use source::DataSource;
pub use store::SharedSnapshot;

// Error types
pub use error::{DiffableError, DiffableResult};
