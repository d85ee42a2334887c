//! Positional coordinates used by edit scripts and the surface boundary.

use std::fmt;

use smallvec::SmallVec;

// =============================================================================
// IndexPath
// =============================================================================

/// Position of an item: section index plus item index within that section.
///
/// Whether the coordinates refer to the old or the new snapshot depends on
/// where the path is used. Deletions carry old coordinates, insertions and
/// reloads carry new ones.
///
/// Ordering is section-major, which is the order the diff emits paths in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPath {
    /// Section index
    pub section: usize,
    /// Item index within the section
    pub item: usize,
}

impl IndexPath {
    /// Create a new index path.
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, item): (usize, usize)) -> Self {
        Self::new(section, item)
    }
}

// =============================================================================
// SectionIndices
// =============================================================================

/// Sorted set of section indices.
///
/// Backed by a `SmallVec` since typical updates touch a handful of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SectionIndices(SmallVec<[usize; 4]>);

impl SectionIndices {
    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an index, keeping the set sorted. Returns `false` if it was
    /// already present.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.0.binary_search(&index) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, index);
                true
            }
        }
    }

    /// Check whether `index` is in the set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    /// Number of indices in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// View the indices as an ascending slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl FromIterator<usize> for SectionIndices {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = Self::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SectionIndices {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
