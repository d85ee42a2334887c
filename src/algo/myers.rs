//! Myers Diff Algorithm for identifier sequences
//!
//! Computes a minimal edit script between two ordered sequences.
//!
//! # Cost
//!
//! O((n+m)*d) time for edit distance `d`. Snapshot updates usually touch a
//! few rows of a long list, so `d` stays small. Common prefix and suffix are
//! stripped first, and very short remainders go through a plain LCS table.
//!
//! # Minimality
//!
//! Myers finds a shortest edit script, which is the complement of a longest
//! common subsequence. Every element of the LCS is kept; nothing is both
//! deleted and re-inserted unless it changed order relative to its neighbours.
//! There is no move primitive: reordered elements come out as a deletion plus
//! an insertion.
//!
//! # Determinism
//!
//! Ties between equally short scripts are broken the same way on every run
//! (prefer deletions on the forward pass, collect matches while backtracking),
//! so identical inputs always produce identical scripts.
//!
//! # References
//!
//! - Myers, E.W. "An O(ND) Difference Algorithm and Its Variations" (1986)

// =============================================================================
// Public Types
// =============================================================================

/// Edit operation in a diff sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Keep element at old_idx, corresponds to new_idx
    Keep { old_idx: usize, new_idx: usize },
    /// Insert element at new_idx
    Insert { new_idx: usize },
    /// Delete element at old_idx
    Delete { old_idx: usize },
}


/// Result of diff operation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SequenceDiff {
    /// Keeps in LCS order, then deletions by old index, then insertions by
    /// new index
    pub edits: Vec<Edit>,
    pub stats: EditStats,
}

impl SequenceDiff {
    /// Old positions to delete, ascending.
    pub fn deletions(&self) -> impl Iterator<Item = usize> + '_ {
        self.edits.iter().filter_map(|edit| match edit {
            Edit::Delete { old_idx } => Some(*old_idx),
            _ => None,
        })
    }

    /// New positions to insert, ascending.
    pub fn insertions(&self) -> impl Iterator<Item = usize> + '_ {
        self.edits.iter().filter_map(|edit| match edit {
            Edit::Insert { new_idx } => Some(*new_idx),
            _ => None,
        })
    }

    /// Matched `(old_idx, new_idx)` pairs, ascending on both sides.
    pub fn keeps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edits.iter().filter_map(|edit| match edit {
            Edit::Keep { old_idx, new_idx } => Some((*old_idx, *new_idx)),
            _ => None,
        })
    }
}

/// Statistics from diff computation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EditStats {
    pub kept: usize,
    pub inserted: usize,
    pub deleted: usize,
}

impl EditStats {
    pub fn edit_count(&self) -> usize {
        self.inserted + self.deleted
    }

    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

impl std::ops::AddAssign for EditStats {
    fn add_assign(&mut self, other: Self) {
        self.kept += other.kept;
        self.inserted += other.inserted;
        self.deleted += other.deleted;
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Compute a minimal edit script turning `old` into `new`.
///
/// Applying the deletions (old positions) and then the insertions (new
/// positions) to `old` yields `new`.
pub fn diff_sequences<T: PartialEq>(old: &[T], new: &[T]) -> SequenceDiff {
    // Quick paths
    if old.is_empty() && new.is_empty() {
        return SequenceDiff::default();
    }

    if old.is_empty() {
        return SequenceDiff {
            edits: (0..new.len()).map(|i| Edit::Insert { new_idx: i }).collect(),
            stats: EditStats { inserted: new.len(), ..Default::default() },
        };
    }

    if new.is_empty() {
        return SequenceDiff {
            edits: (0..old.len()).map(|i| Edit::Delete { old_idx: i }).collect(),
            stats: EditStats { deleted: old.len(), ..Default::default() },
        };
    }

    let lcs = myers_lcs(old, new);
    extract_edits(old.len(), new.len(), &lcs)
}

// =============================================================================
// Myers Algorithm Core
// =============================================================================

/// Compute LCS using Myers diff algorithm with prefix/suffix optimization
fn myers_lcs<T: PartialEq>(old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let n = old.len();
    let m = new.len();

    // Strip common prefix
    let mut prefix_len = 0;
    while prefix_len < n && prefix_len < m && old[prefix_len] == new[prefix_len] {
        prefix_len += 1;
    }

    // Strip common suffix
    let mut suffix_len = 0;
    while suffix_len < (n - prefix_len)
        && suffix_len < (m - prefix_len)
        && old[n - 1 - suffix_len] == new[m - 1 - suffix_len]
    {
        suffix_len += 1;
    }

    let mut lcs: Vec<(usize, usize)> = (0..prefix_len).map(|i| (i, i)).collect();

    let old_mid = &old[prefix_len..n - suffix_len];
    let new_mid = &new[prefix_len..m - suffix_len];

    if !old_mid.is_empty() && !new_mid.is_empty() {
        for (oi, ni) in myers_core(old_mid, new_mid) {
            lcs.push((oi + prefix_len, ni + prefix_len));
        }
    }

    for i in 0..suffix_len {
        lcs.push((n - suffix_len + i, m - suffix_len + i));
    }

    lcs
}

/// Myers algorithm core implementation
///
/// Explores the edit graph by edit distance `d`, tracking the furthest-reaching
/// path on each diagonal `k = x - y`. The first `d` whose path reaches
/// `(n, m)` is the length of a shortest edit script.
///
/// Inputs of at most 8 elements on each side go through a plain DP table,
/// which wins on allocation and cache locality at that size.
fn myers_core<T: PartialEq>(old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let n = old.len();
    let m = new.len();

    if n == 0 || m == 0 {
        return Vec::new();
    }

    if n <= SMALL_INPUT && m <= SMALL_INPUT {
        return small_lcs_dp(old, new);
    }

    let trace = forward(old, new);
    backtrack(&trace, old, new)
}

/// Forward pass. Returns, for each round `d`, diagonals `-d..=d` of V as they
/// stood before that round.
///
/// Round `d` of the backtrack only reads those diagonals, so the trace holds
/// O(d^2) entries instead of a full copy of V per round.
fn forward<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Vec<usize>> {
    let n = old.len();
    let m = new.len();

    let max_d = n + m;
    let offset = max_d; // k ranges over [-max_d, max_d]

    // V[k + offset] = furthest x on diagonal k
    let mut v = vec![0usize; 2 * max_d + 1];
    let mut trace: Vec<Vec<usize>> = Vec::new();

    'outer: for d in 0..=max_d {
        trace.push(v[offset - d..=offset + d].to_vec());

        for k in (-(d as isize)..=(d as isize)).step_by(2) {
            let kk = (k + offset as isize) as usize;

            // At k=-d we must come from k+1 (insert), at k=d from k-1 (delete).
            // Otherwise take whichever neighbour reaches further.
            let mut x = if k == -(d as isize) || (k != d as isize && v[kk - 1] < v[kk + 1]) {
                v[kk + 1]
            } else {
                v[kk - 1] + 1
            };

            let mut y = (x as isize - k) as usize;

            // Follow the snake while elements match
            while x < n && y < m && old[x] == new[y] {
                x += 1;
                y += 1;
            }

            v[kk] = x;

            if x >= n && y >= m {
                break 'outer;
            }
        }
    }

    trace
}

const SMALL_INPUT: usize = 8;

/// Backtrack through trace to extract LCS pairs
fn backtrack<T: PartialEq>(trace: &[Vec<usize>], old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let mut x = old.len();
    let mut y = new.len();
    let mut lcs = Vec::new();

    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        // v holds diagonals -d..=d
        let at = |k: isize| v[(k + d) as usize];
        let k = x as isize - y as isize;

        let prev_k = if d == 0 {
            0isize
        } else if k == -d || (k != d && at(k - 1) < at(k + 1)) {
            k + 1 // came from insert
        } else {
            k - 1 // came from delete
        };

        let prev_x = if d == 0 { 0 } else { at(prev_k) };
        let prev_y = (prev_x as isize - prev_k) as usize;

        // Diagonal moves along the snake are matches
        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            debug_assert!(old[x] == new[y]);
            lcs.push((x, y));
        }

        if d > 0 {
            x = prev_x;
            y = prev_y;
        }

        if x == 0 && y == 0 {
            break;
        }
    }

    lcs.reverse();
    lcs
}

/// Simple O(n*m) DP for inputs of at most `SMALL_INPUT` elements per side.
fn small_lcs_dp<T: PartialEq>(old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let n = old.len();
    let m = new.len();

    // dp[i][j] = LCS length of old[0..i] and new[0..j]
    let mut dp = [[0u8; SMALL_INPUT + 1]; SMALL_INPUT + 1];

    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if old[i - 1] == new[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut lcs = Vec::with_capacity(dp[n][m] as usize);
    let mut i = n;
    let mut j = m;

    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            lcs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    lcs.reverse();
    lcs
}

/// Turn LCS pairs into keeps, deletions and insertions.
fn extract_edits(n: usize, m: usize, lcs: &[(usize, usize)]) -> SequenceDiff {
    let mut in_lcs_old = vec![false; n];
    let mut in_lcs_new = vec![false; m];

    let mut edits = Vec::with_capacity(n + m - lcs.len());
    let mut stats = EditStats::default();

    for &(old_idx, new_idx) in lcs {
        in_lcs_old[old_idx] = true;
        in_lcs_new[new_idx] = true;
        edits.push(Edit::Keep { old_idx, new_idx });
        stats.kept += 1;
    }

    for old_idx in (0..n).filter(|&i| !in_lcs_old[i]) {
        edits.push(Edit::Delete { old_idx });
        stats.deleted += 1;
    }

    for new_idx in (0..m).filter(|&i| !in_lcs_new[i]) {
        edits.push(Edit::Insert { new_idx });
        stats.inserted += 1;
    }

    SequenceDiff { edits, stats }
}

// =============================================================================
// Tests
// =============================================================================
