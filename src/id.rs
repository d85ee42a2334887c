//! Identity for sections and items.
//!
//! Sections and items are compared purely by identifier. Two sections with the
//! same identifier are the same section for diffing, whatever items they hold,
//! and an item keeps its identity as long as its identifier is unchanged.
//!
//! Identifiers must be unique across the whole snapshot: section identifiers by
//! construction, item identifiers by caller obligation (see
//! [`Snapshot::validate`](crate::Snapshot::validate)).

use std::fmt::Debug;
use std::hash::Hash;

/// Bound shared by section and item identifiers.
///
/// Blanket-implemented for every `Eq + Hash + Clone + Debug` type, so plain
/// integers, strings or caller-defined enums all work. `Debug` is used to name
/// identifiers in diagnostics. Thread-safety is not required; only
/// `par_diff_snapshots` asks for `Sync` on top.
pub trait Identifier: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Identifier for T {}
