//! Error types for diffable-sections.
//!
//! Snapshot mutators never fail; these errors only come out of explicit
//! validation (`Snapshot::validate`, or `Validation::Strict` on apply).

use std::fmt::Debug;

use thiserror::Error;

/// Errors that can occur while validating a snapshot.
///
/// Identifiers are rendered with `Debug` so the error stays `Send + Sync`
/// whatever the identifier types are.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffableError {
    /// The same item identifier appears twice inside one section
    #[error("item {item} appears more than once in section {section}")]
    DuplicateItem {
        /// Offending item identifier
        item: String,
        /// Section that holds the duplicate
        section: String,
    },

    /// The same item identifier appears in two different sections
    #[error("item {item} appears in both section {first} and section {second}")]
    ItemInMultipleSections {
        /// Offending item identifier
        item: String,
        /// First section containing the item
        first: String,
        /// Later section containing the item again
        second: String,
    },
}

/// Result type alias for snapshot validation and reconciliation.
pub type DiffableResult<T> = Result<T, DiffableError>;

impl DiffableError {
    /// Create a duplicate-in-section error.
    pub fn duplicate_item(item: &impl Debug, section: &impl Debug) -> Self {
        Self::DuplicateItem {
            item: format!("{item:?}"),
            section: format!("{section:?}"),
        }
    }

    /// Create a cross-section duplicate error.
    pub fn item_in_multiple_sections(item: &impl Debug, first: &impl Debug, second: &impl Debug) -> Self {
        Self::ItemInMultipleSections {
            item: format!("{item:?}"),
            first: format!("{first:?}"),
            second: format!("{second:?}"),
        }
    }
}
