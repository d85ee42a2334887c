//! Prelude module for common imports.
//!
//! ```ignore
//! use diffable_sections::prelude::*;
//! ```

// Snapshot and positions
pub use crate::id::Identifier;
pub use crate::index::{IndexPath, SectionIndices};
pub use crate::snapshot::Snapshot;

// Algorithms
pub use crate::algo::{diff_sequences, diff_snapshots, DiffStats, Edit, EditScript, EditStats};

// Surface
pub use crate::surface::{
    BatchUpdates, CellProvider, CellSize, Completion, Placeholder, RenderSurface, ScrollAxis, SupplementaryKind,
};

// Reconciliation
pub use crate::reconciler::{ApplyOptions, Reconciler, ReconcilerConfig, Validation};
pub use crate::source::DataSource;

// Error
pub use crate::error::{DiffableError, DiffableResult};
