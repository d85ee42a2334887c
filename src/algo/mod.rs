//! Algorithm implementations for snapshot reconciliation.
//!
//! - `myers`: Myers diff for flat identifier sequences
//! - `diff`: two-level snapshot diff producing an edit script

mod diff;
mod myers;

pub use diff::{diff_snapshots, DiffStats, EditScript};
#[cfg(feature = "parallel")]
pub use diff::par_diff_snapshots;
pub use myers::{diff_sequences, Edit, EditStats, SequenceDiff};
