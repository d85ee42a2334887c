//! Reconciler: applies snapshots to a rendering surface.
//!
//! The reconciler owns the current snapshot. [`Reconciler::apply`] diffs a new
//! snapshot against it and issues the result to the surface as one batch:
//!
//! ```text
//! perform_batch_updates(|batch| {
//!     current = new                 // surface queries now see `new`
//!     batch.delete_sections(old)    // old coordinates
//!     batch.insert_sections(new)
//!     batch.delete_items(old)       // old coordinates
//!     batch.insert_items(new)
//!     batch.reload_sections / reload_items (if any)
//! }, completion)
//! ```
//!
//! All deletions are issued before any insertion so that old coordinates are
//! still valid when the surface resolves them.

use std::fmt;
use std::sync::Arc;

use tracing::{debug_span, trace, warn};

use crate::algo::{diff_snapshots, EditScript};
use crate::error::DiffableResult;
use crate::id::Identifier;
use crate::snapshot::Snapshot;
use crate::source::DataSource;
use crate::surface::{CellProvider, Completion, RenderSurface};

// =============================================================================
// Configuration
// =============================================================================

/// How strictly applied snapshots are checked for duplicate item identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// No checks (default)
    #[default]
    Lenient,
    /// Log a warning and apply anyway
    Warn,
    /// Reject the snapshot
    Strict,
}

/// Reconciler configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcilerConfig {
    /// Duplicate-identifier policy applied on every `apply`.
    /// Default: `Validation::Lenient`
    pub validation: Validation,
}

impl ReconcilerConfig {
    /// Create config with a custom validation policy.
    pub fn new(validation: Validation) -> Self {
        Self { validation }
    }

    /// Reject snapshots whose item identifiers are not globally unique.
    pub fn strict() -> Self {
        Self::new(Validation::Strict)
    }

    /// Apply every snapshot as given.
    pub fn lenient() -> Self {
        Self::new(Validation::Lenient)
    }
}

/// Per-call options for [`Reconciler::apply_with`].
///
/// ```
/// use diffable_sections::ApplyOptions;
///
/// let options = ApplyOptions::new()
///     .animated(false)
///     .on_complete(|| println!("applied"));
/// assert!(!options.is_animated());
/// ```
pub struct ApplyOptions {
    animate: bool,
    completion: Option<Completion>,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            animate: true,
            completion: None,
        }
    }
}

impl ApplyOptions {
    /// Animated, no completion callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the surface may animate the batch.
    pub fn animated(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Callback fired once the surface has applied the batch.
    pub fn on_complete(mut self, completion: impl FnOnce() + 'static) -> Self {
        self.completion = Some(Box::new(completion));
        self
    }

    pub fn is_animated(&self) -> bool {
        self.animate
    }
}

impl fmt::Debug for ApplyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplyOptions")
            .field("animate", &self.animate)
            .field("completion", &self.completion.is_some())
            .finish()
    }
}

// =============================================================================
// Reconciler
// =============================================================================

/// Keeps a [`RenderSurface`] in sync with the latest applied [`Snapshot`].
pub struct Reconciler<S, I, Surf: RenderSurface<S, I>> {
    surface: Surf,
    source: DataSource<S, I, Surf>,
    config: ReconcilerConfig,
}

impl<S, I, Surf> Reconciler<S, I, Surf>
where
    S: Identifier,
    I: Identifier,
    Surf: RenderSurface<S, I>,
{
    /// Create a reconciler with an empty current snapshot.
    ///
    /// The surface receives its [`DataSource`] through
    /// [`RenderSurface::attach`] before this returns.
    pub fn new(surface: Surf, provider: Arc<dyn CellProvider<S, I, Surf>>) -> Self {
        Self::with_config(surface, provider, ReconcilerConfig::default())
    }

    /// Create a reconciler with custom configuration.
    pub fn with_config(
        mut surface: Surf,
        provider: Arc<dyn CellProvider<S, I, Surf>>,
        config: ReconcilerConfig,
    ) -> Self {
        let source = DataSource::new(provider);
        surface.attach(source.clone());
        Self { surface, source, config }
    }

    /// Apply `snapshot` with animation and no completion callback.
    pub fn apply(&mut self, snapshot: Snapshot<S, I>) -> DiffableResult<EditScript> {
        self.apply_with(snapshot, ApplyOptions::default())
    }

    /// Diff `snapshot` against the current one and drive the surface to it.
    ///
    /// Returns the edit script that was issued. Fails only under
    /// [`Validation::Strict`], in which case neither the current snapshot nor
    /// the surface is touched.
    pub fn apply_with(&mut self, snapshot: Snapshot<S, I>, options: ApplyOptions) -> DiffableResult<EditScript> {
        let ApplyOptions { animate, completion } = options;
        let _span = debug_span!(
            "apply",
            sections = snapshot.number_of_sections(),
            items = snapshot.total_items(),
            animate
        )
        .entered();

        self.check(&snapshot)?;

        let old = self.source.snapshot();
        let script = diff_snapshots(&old, &snapshot);
        trace!(
            edits = script.structural_edit_count(),
            reloads = script.has_reloads(),
            stats = ?script.stats,
            "computed edit script"
        );

        // Reload marks apply to this batch only
        let mut committed = snapshot;
        committed.clear_reload_marks();
        let committed = Arc::new(committed);
        let expected = Arc::clone(&committed);

        let completion: Completion = Box::new(move || {
            trace!("batch update completed");
            if let Some(completion) = completion {
                completion();
            }
        });

        if !animate {
            self.surface.set_animations_enabled(false);
        }

        let store = self.source.store();
        let batch = &script;
        self.surface.perform_batch_updates(
            |updates| {
                store.replace(committed);
                updates.delete_sections(&batch.section_deletions);
                updates.insert_sections(&batch.section_insertions);
                updates.delete_items(&batch.item_deletions);
                updates.insert_items(&batch.item_insertions);
                if batch.has_reloads() {
                    updates.reload_sections(&batch.section_reloads);
                    updates.reload_items(&batch.item_reloads);
                }
            },
            completion,
        );

        if !animate {
            self.surface.set_animations_enabled(true);
        }

        if !Arc::ptr_eq(&self.source.snapshot(), &expected) {
            warn!("surface returned from perform_batch_updates without running the updates");
        }

        Ok(script)
    }

    fn check(&self, snapshot: &Snapshot<S, I>) -> DiffableResult<()> {
        match self.config.validation {
            Validation::Lenient => Ok(()),
            Validation::Warn => {
                if let Err(err) = snapshot.validate() {
                    warn!(%err, "applying snapshot with ambiguous item identifiers");
                }
                Ok(())
            }
            Validation::Strict => snapshot.validate(),
        }
    }

    /// Copy of the current snapshot.
    ///
    /// Mutating the returned value does not affect the reconciler.
    pub fn snapshot(&self) -> Snapshot<S, I> {
        Snapshot::clone(&self.source.snapshot())
    }

    /// Handle for pull-model queries, the same one given to the surface.
    pub fn data_source(&self) -> DataSource<S, I, Surf> {
        self.source.clone()
    }

    pub fn surface(&self) -> &Surf {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surf {
        &mut self.surface
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }
}

impl<S, I, Surf> fmt::Debug for Reconciler<S, I, Surf>
where
    S: fmt::Debug,
    I: fmt::Debug,
    Surf: RenderSurface<S, I> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reconciler")
            .field("surface", &self.surface)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::error::DiffableError;
    use crate::index::{IndexPath, SectionIndices};
    use crate::surface::{BatchUpdates, CellSize, Placeholder, ScrollAxis, SupplementaryKind};

    type Source = DataSource<&'static str, u32, MockSurface>;

    #[derive(Debug, Clone, PartialEq)]
    enum MockCell {
        Empty,
        Sized(CellSize),
        Item(u32),
        Header(usize),
    }

    impl Placeholder for MockCell {
        fn empty() -> Self {
            MockCell::Empty
        }

        fn sized(size: CellSize) -> Self {
            MockCell::Sized(size)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Animations(bool),
        DeleteSections(Vec<usize>),
        InsertSections(Vec<usize>),
        DeleteItems(Vec<IndexPath>),
        InsertItems(Vec<IndexPath>),
        ReloadSections(Vec<usize>),
        ReloadItems(Vec<IndexPath>),
        /// Section count the surface saw when the first edit arrived
        BatchStart(usize),
        BatchEnd,
    }

    /// Records every call and answers completions immediately unless told to
    /// hold them.
    #[derive(Default)]
    struct MockSurface {
        source: Option<Source>,
        calls: Vec<Call>,
        axis: ScrollAxis,
        hold_completions: bool,
        pending: Vec<Completion>,
        skip_updates: bool,
    }

    impl MockSurface {
        fn horizontal() -> Self {
            Self {
                axis: ScrollAxis::Horizontal,
                ..Default::default()
            }
        }

        fn holding_completions() -> Self {
            Self {
                hold_completions: true,
                ..Default::default()
            }
        }

        fn finish(&mut self) {
            for completion in self.pending.drain(..) {
                completion();
            }
        }

        fn batches(&self) -> Vec<Vec<Call>> {
            let mut batches = Vec::new();
            let mut current = None;
            for call in &self.calls {
                match call {
                    Call::BatchStart(_) => current = Some(Vec::new()),
                    Call::BatchEnd => batches.extend(current.take()),
                    other => {
                        if let Some(batch) = current.as_mut() {
                            batch.push(other.clone());
                        }
                    }
                }
            }
            batches
        }
    }

    struct Recorder<'a> {
        source: Option<&'a Source>,
        calls: Vec<Call>,
    }

    impl Recorder<'_> {
        fn record(&mut self, call: Call) {
            if self.calls.is_empty() {
                let seen = self.source.map_or(0, |s| s.number_of_sections());
                self.calls.push(Call::BatchStart(seen));
            }
            self.calls.push(call);
        }
    }

    impl BatchUpdates for Recorder<'_> {
        fn delete_sections(&mut self, sections: &SectionIndices) {
            self.record(Call::DeleteSections(sections.iter().collect()));
        }

        fn insert_sections(&mut self, sections: &SectionIndices) {
            self.record(Call::InsertSections(sections.iter().collect()));
        }

        fn delete_items(&mut self, items: &[IndexPath]) {
            self.record(Call::DeleteItems(items.to_vec()));
        }

        fn insert_items(&mut self, items: &[IndexPath]) {
            self.record(Call::InsertItems(items.to_vec()));
        }

        fn reload_sections(&mut self, sections: &SectionIndices) {
            self.record(Call::ReloadSections(sections.iter().collect()));
        }

        fn reload_items(&mut self, items: &[IndexPath]) {
            self.record(Call::ReloadItems(items.to_vec()));
        }
    }

    impl RenderSurface<&'static str, u32> for MockSurface {
        type Cell = MockCell;

        fn attach(&mut self, source: Source) {
            self.source = Some(source);
        }

        fn perform_batch_updates<F>(&mut self, updates: F, completion: Completion)
        where
            F: FnOnce(&mut dyn BatchUpdates),
        {
            if self.skip_updates {
                completion();
                return;
            }
            let mut recorder = Recorder {
                source: self.source.as_ref(),
                calls: Vec::new(),
            };
            updates(&mut recorder);
            let mut calls = recorder.calls;
            calls.push(Call::BatchEnd);
            self.calls.extend(calls);

            if self.hold_completions {
                self.pending.push(completion);
            } else {
                completion();
            }
        }

        fn set_animations_enabled(&mut self, enabled: bool) {
            self.calls.push(Call::Animations(enabled));
        }

        fn scroll_axis(&self) -> ScrollAxis {
            self.axis
        }
    }

    /// Even items get a cell, odd items fall back. Headers only for section 0.
    struct EvenItems;

    impl CellProvider<&'static str, u32, MockSurface> for EvenItems {
        fn cell(&self, _surface: &MockSurface, _path: IndexPath, item: &u32) -> Option<MockCell> {
            (item % 2 == 0).then_some(MockCell::Item(*item))
        }

        fn supplementary(&self, _surface: &MockSurface, kind: &SupplementaryKind, path: IndexPath) -> Option<MockCell> {
            (kind == &SupplementaryKind::header() && path.section == 0).then_some(MockCell::Header(path.section))
        }
    }

    fn reconciler(surface: MockSurface) -> Reconciler<&'static str, u32, MockSurface> {
        Reconciler::new(surface, Arc::new(EvenItems))
    }

    fn snap(sections: &[(&'static str, &[u32])]) -> Snapshot<&'static str, u32> {
        sections.iter().map(|(id, items)| (*id, items.to_vec())).collect()
    }

    fn paths(pairs: &[(usize, usize)]) -> Vec<IndexPath> {
        pairs.iter().copied().map(IndexPath::from).collect()
    }

    #[test]
    fn test_new_attaches_data_source() {
        let r = reconciler(MockSurface::default());
        let attached = r.surface().source.as_ref().expect("attached");
        assert_eq!(attached.number_of_sections(), 0);
        assert!(r.snapshot().is_empty());
    }

    #[test]
    fn test_initial_apply_inserts_everything() {
        let mut r = reconciler(MockSurface::default());
        let script = r.apply(snap(&[("a", &[1, 2]), ("b", &[3])])).unwrap();

        assert_eq!(script.section_insertions.as_slice(), &[0, 1]);
        assert_eq!(script.item_insertions, paths(&[(0, 0), (0, 1), (1, 0)]));
        assert!(script.item_deletions.is_empty());
        assert_eq!(r.snapshot(), snap(&[("a", &[1, 2]), ("b", &[3])]));
    }

    #[test]
    fn test_batch_order() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("s1", &[1, 2]), ("s2", &[3])])).unwrap();
        r.apply(snap(&[("s2", &[4]), ("s3", &[5])])).unwrap();

        let batches = r.surface().batches();
        assert_eq!(
            batches[1],
            vec![
                Call::DeleteSections(vec![0]),
                Call::InsertSections(vec![1]),
                Call::DeleteItems(paths(&[(1, 0)])),
                Call::InsertItems(paths(&[(0, 0), (1, 0)])),
            ]
        );
    }

    #[test]
    fn test_concrete_scenario() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("S1", &[1, 2]), ("S2", &[3])])).unwrap();
        let script = r.apply(snap(&[("S2", &[3, 4]), ("S3", &[5])])).unwrap();

        assert_eq!(script.section_deletions.as_slice(), &[0]);
        assert_eq!(script.section_insertions.as_slice(), &[1]);
        assert!(script.item_deletions.is_empty());
        assert!(script.item_insertions.contains(&IndexPath::new(0, 1)));
    }

    #[test]
    fn test_mid_batch_queries_see_new_snapshot() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("a", &[1])])).unwrap();
        r.apply(snap(&[("a", &[1]), ("b", &[]), ("c", &[])])).unwrap();

        let starts: Vec<&Call> = r
            .surface()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::BatchStart(_)))
            .collect();
        assert_eq!(starts, vec![&Call::BatchStart(1), &Call::BatchStart(3)]);
    }

    #[test]
    fn test_reapplying_same_snapshot_is_empty() {
        let mut r = reconciler(MockSurface::default());
        let s = snap(&[("a", &[1, 2, 3]), ("b", &[4])]);
        r.apply(s.clone()).unwrap();
        let second = r.apply(s).unwrap();

        assert!(second.is_empty());
        assert_eq!(
            r.surface().batches()[1],
            vec![
                Call::DeleteSections(vec![]),
                Call::InsertSections(vec![]),
                Call::DeleteItems(vec![]),
                Call::InsertItems(vec![]),
            ]
        );
    }

    #[test]
    fn test_minimal_item_edits() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("s", &[1, 2, 3])])).unwrap();

        let script = r.apply(snap(&[("s", &[1, 3])])).unwrap();
        assert_eq!(script.item_deletions, paths(&[(0, 1)]));
        assert!(script.item_insertions.is_empty());

        let script = r.apply(snap(&[("s", &[3, 1])])).unwrap();
        assert_eq!(script.item_deletions.len(), 1);
        assert_eq!(script.item_insertions.len(), 1);
    }

    #[test]
    fn test_appended_section_with_items() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("a", &[1])])).unwrap();

        let mut next = r.snapshot();
        next.append_sections(["b"]);
        next.append_items([7, 8, 9]);
        let script = r.apply(next).unwrap();

        assert_eq!(script.section_insertions.len(), 1);
        assert_eq!(script.item_insertions, paths(&[(1, 0), (1, 1), (1, 2)]));
        assert!(script.item_deletions.is_empty());
    }

    #[test]
    fn test_ordering_invariant() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("x", &[5, 4, 3]), ("y", &[9])])).unwrap();
        r.apply(snap(&[("y", &[1, 9, 2]), ("x", &[3, 5])])).unwrap();

        let current = r.snapshot();
        assert_eq!(current.item_identifiers(&"x"), &[3, 5]);
        assert_eq!(current.item_identifiers(&"y"), &[1, 9, 2]);
        assert_eq!(current.section_identifiers().collect::<Vec<_>>(), vec![&"y", &"x"]);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("a", &[1])])).unwrap();

        let mut copy = r.snapshot();
        copy.append_items([2]);
        copy.delete_items(&[42]);
        assert_eq!(r.snapshot(), snap(&[("a", &[1])]));
        assert_eq!(r.data_source().number_of_items(0), 1);
    }

    #[test]
    fn test_animations_disabled_around_batch() {
        let mut r = reconciler(MockSurface::default());
        r.apply_with(snap(&[("a", &[1])]), ApplyOptions::new().animated(false))
            .unwrap();

        let calls = &r.surface().calls;
        assert_eq!(calls.first(), Some(&Call::Animations(false)));
        assert_eq!(calls.last(), Some(&Call::Animations(true)));
        assert!(matches!(calls[1], Call::BatchStart(_)));
    }

    #[test]
    fn test_animated_apply_leaves_toggle_alone() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("a", &[1])])).unwrap();
        assert!(!r.surface().calls.iter().any(|c| matches!(c, Call::Animations(_))));
    }

    #[test]
    fn test_completion_fires_once() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);

        let mut r = reconciler(MockSurface::default());
        r.apply_with(
            snap(&[("a", &[1])]),
            ApplyOptions::new().on_complete(move || counter.set(counter.get() + 1)),
        )
        .unwrap();

        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_completion_waits_for_surface() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);

        let mut r = reconciler(MockSurface::holding_completions());
        r.apply_with(
            snap(&[("a", &[1])]),
            ApplyOptions::new().on_complete(move || counter.set(counter.get() + 1)),
        )
        .unwrap();

        // Structure is committed even though the surface has not finished
        assert_eq!(fired.get(), 0);
        assert_eq!(r.snapshot().total_items(), 1);

        r.surface_mut().finish();
        assert_eq!(fired.get(), 1);
        r.surface_mut().finish();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_strict_validation_rejects_and_leaves_state() {
        let mut r = Reconciler::with_config(MockSurface::default(), Arc::new(EvenItems), ReconcilerConfig::strict());
        r.apply(snap(&[("a", &[1])])).unwrap();
        let calls_before = r.surface().calls.len();

        let err = r.apply(snap(&[("a", &[1]), ("b", &[1])])).unwrap_err();
        assert!(matches!(err, DiffableError::ItemInMultipleSections { .. }));
        assert_eq!(r.snapshot(), snap(&[("a", &[1])]));
        assert_eq!(r.surface().calls.len(), calls_before);
    }

    #[test]
    fn test_warn_validation_still_applies() {
        let config = ReconcilerConfig::new(Validation::Warn);
        let mut r = Reconciler::with_config(MockSurface::default(), Arc::new(EvenItems), config);
        r.apply(snap(&[("a", &[1, 1])])).unwrap();
        assert_eq!(r.snapshot().total_items(), 2);
        assert_eq!(r.config().validation, Validation::Warn);
    }

    #[test]
    fn test_lenient_is_default() {
        let r = reconciler(MockSurface::default());
        assert_eq!(r.config().validation, Validation::Lenient);
    }

    #[test]
    fn test_reloads_issued_last_and_cleared() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("a", &[1, 2]), ("b", &[3])])).unwrap();

        let mut next = r.snapshot();
        next.reload_items(&[2]);
        next.reload_sections(&["b"]);
        let script = r.apply(next).unwrap();

        assert!(script.is_empty());
        assert!(script.has_reloads());
        let batch = r.surface().batches().pop().unwrap();
        assert_eq!(
            &batch[4..],
            &[Call::ReloadSections(vec![1]), Call::ReloadItems(paths(&[(0, 1)]))]
        );

        let current = r.snapshot();
        assert!(!current.is_item_reloaded(&2));
        assert!(!current.is_section_reloaded(&"b"));
    }

    #[test]
    fn test_surface_skipping_updates_keeps_old_snapshot() {
        let mut r = reconciler(MockSurface {
            skip_updates: true,
            ..Default::default()
        });
        r.apply(snap(&[("a", &[1])])).unwrap();
        assert!(r.snapshot().is_empty());
    }

    #[test]
    fn test_data_source_counts_and_identifiers() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("a", &[1, 2]), ("b", &[3])])).unwrap();

        let source = r.data_source();
        assert_eq!(source.number_of_sections(), 2);
        assert_eq!(source.number_of_items(0), 2);
        assert_eq!(source.number_of_items(1), 1);
        assert_eq!(source.number_of_items(7), 0);
        assert_eq!(source.section_identifier(1), Some("b"));
        assert_eq!(source.item_identifier(IndexPath::new(0, 1)), Some(2));
        assert_eq!(source.item_identifier(IndexPath::new(1, 1)), None);
    }

    #[test]
    fn test_resolve_cell_falls_back_to_placeholder() {
        let mut r = reconciler(MockSurface::default());
        r.apply(snap(&[("a", &[1, 2])])).unwrap();

        let source = r.data_source();
        let surface = r.surface();
        assert_eq!(source.resolve_cell(surface, IndexPath::new(0, 1)), MockCell::Item(2));
        assert_eq!(source.resolve_cell(surface, IndexPath::new(0, 0)), MockCell::Empty);
        assert_eq!(source.resolve_cell(surface, IndexPath::new(3, 0)), MockCell::Empty);
    }

    #[test]
    fn test_resolve_supplementary() {
        let mut r = reconciler(MockSurface::horizontal());
        r.apply(snap(&[("a", &[1]), ("b", &[2])])).unwrap();

        let source = r.data_source();
        let surface = r.surface();
        let header = SupplementaryKind::header();
        assert_eq!(
            source.resolve_supplementary(surface, &header, IndexPath::new(0, 0)),
            MockCell::Header(0)
        );
        assert_eq!(
            source.resolve_supplementary(surface, &header, IndexPath::new(1, 0)),
            MockCell::Sized(CellSize::fill_cross_axis(ScrollAxis::Horizontal))
        );
    }

    #[test]
    fn test_closure_provider() {
        let provider = |_: &MockSurface, path: IndexPath, _: &u32| Some(MockCell::Header(path.item));
        let mut r: Reconciler<&'static str, u32, MockSurface> = Reconciler::new(MockSurface::default(), Arc::new(provider));
        r.apply(snap(&[("a", &[1, 2])])).unwrap();

        let source = r.data_source();
        assert_eq!(source.resolve_cell(r.surface(), IndexPath::new(0, 1)), MockCell::Header(1));
        assert_eq!(
            source.resolve_supplementary(r.surface(), &SupplementaryKind::footer(), IndexPath::new(0, 0)),
            MockCell::Sized(CellSize::fill_cross_axis(ScrollAxis::Vertical))
        );
    }

    #[test]
    fn test_apply_options_debug() {
        let options = ApplyOptions::new().on_complete(|| {});
        assert!(options.is_animated());
        assert_eq!(format!("{options:?}"), "ApplyOptions { animate: true, completion: true }");
    }
}
