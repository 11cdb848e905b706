use indexmap::IndexSet;
use std::hash::Hash;

/// How a [`RowSelection`] sources its effective selection set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionModeKind {
    /// The host owns the selection; the controller holds a read-only mirror
    /// refreshed via [`RowSelection::sync_selected`].
    Controlled,
    /// The controller owns the selection and mutates it directly.
    Uncontrolled,
}

/// Command/result value returned by selection operations.
///
/// Instead of calling back into the host, every operation returns one of
/// these and lets the caller dispatch it: re-render, notify the data layer,
/// or (in controlled mode) apply the change to its own selection array and
/// sync it back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent<K> {
    /// A single row was asked to change. Returned even when the effective set
    /// already matched the request; `changed` tells the two cases apart.
    Row { key: K, selected: bool, changed: bool },
    /// The whole row set was selected (`true`) or cleared (`false`).
    All { selected: bool },
}

enum Mode<K> {
    Uncontrolled { selected: IndexSet<K> },
    Controlled { mirror: IndexSet<K> },
}

/// Tracks which row keys of a grid are selected.
///
/// The mode is fixed at construction: [`RowSelection::new_uncontrolled`] owns
/// its set, [`RowSelection::new_controlled`] mirrors a host-owned set and
/// never writes to it. Controlled-mode operations only *report* the requested
/// change through the returned [`SelectionEvent`]; the host applies it and
/// feeds the result back through [`RowSelection::sync_selected`]. There is no
/// second write path, so the mirror cannot drift from the host's state.
///
/// One instance per grid; instances share nothing.
pub struct RowSelection<K> {
    mode: Mode<K>,
    row_keys: Vec<K>,
}

impl<K> RowSelection<K>
where
    K: Hash + Eq + Clone,
{
    /// A controller that owns its selection set, starting empty.
    pub fn new_uncontrolled() -> Self {
        Self {
            mode: Mode::Uncontrolled {
                selected: IndexSet::new(),
            },
            row_keys: Vec::new(),
        }
    }

    /// An uncontrolled controller with an initial selection. Duplicates in
    /// `initial` collapse to one membership.
    pub fn with_selected(initial: impl IntoIterator<Item = K>) -> Self {
        Self {
            mode: Mode::Uncontrolled {
                selected: initial.into_iter().collect(),
            },
            row_keys: Vec::new(),
        }
    }

    /// A controller that mirrors a host-owned selection, starting empty until
    /// the first [`RowSelection::sync_selected`].
    pub fn new_controlled() -> Self {
        Self {
            mode: Mode::Controlled {
                mirror: IndexSet::new(),
            },
            row_keys: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionModeKind {
        match self.mode {
            Mode::Uncontrolled { .. } => SelectionModeKind::Uncontrolled,
            Mode::Controlled { .. } => SelectionModeKind::Controlled,
        }
    }

    /// Replaces the ordered list of all row keys currently in the grid.
    /// `select_all(true)` selects exactly this list.
    pub fn set_row_keys(&mut self, keys: Vec<K>) {
        self.row_keys = keys;
    }

    pub fn row_keys(&self) -> &[K] {
        &self.row_keys
    }

    /// Controlled mode: refresh the mirror from the host's selection array.
    /// De-duplicates. A no-op on uncontrolled controllers, which own their
    /// set and take no external writes.
    pub fn sync_selected(&mut self, keys: impl IntoIterator<Item = K>) {
        if let Mode::Controlled { mirror } = &mut self.mode {
            *mirror = keys.into_iter().collect();
        }
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.effective().contains(key)
    }

    /// The effective selection set, in stable insertion order.
    pub fn selected_keys(&self) -> &IndexSet<K> {
        self.effective()
    }

    pub fn selected_count(&self) -> usize {
        self.effective().len()
    }

    /// True when the effective selection set has no members.
    pub fn is_empty(&self) -> bool {
        self.effective().is_empty()
    }

    /// Asks for `key` to become selected or deselected.
    ///
    /// Uncontrolled mode applies the change to the owned set first (adding an
    /// already-present key or removing an absent one leaves the set as-is).
    /// Controlled mode leaves the mirror untouched. Either way the event is
    /// always returned, so hosts that announce every click keep doing so even
    /// when membership did not change.
    pub fn select_row(&mut self, key: K, selected: bool) -> SelectionEvent<K> {
        let changed = match &mut self.mode {
            Mode::Uncontrolled { selected: set } => {
                if selected {
                    set.insert(key.clone())
                } else {
                    set.shift_remove(&key)
                }
            }
            Mode::Controlled { mirror } => mirror.contains(&key) != selected,
        };
        SelectionEvent::Row {
            key,
            selected,
            changed,
        }
    }

    /// Selects every key from the row-key list, or clears the selection.
    ///
    /// With an empty row-key list, `select_all(true)` yields an empty set.
    /// `select_all(false)` always yields an empty set regardless of prior
    /// contents.
    pub fn select_all(&mut self, selected: bool) -> SelectionEvent<K> {
        if let Mode::Uncontrolled { selected: set } = &mut self.mode {
            if selected {
                *set = self.row_keys.iter().cloned().collect();
            } else {
                set.clear();
            }
        }
        SelectionEvent::All { selected }
    }

    fn effective(&self) -> &IndexSet<K> {
        match &self.mode {
            Mode::Uncontrolled { selected } => selected,
            Mode::Controlled { mirror } => mirror,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(sel: &RowSelection<u64>) -> Vec<u64> {
        sel.selected_keys().iter().copied().collect()
    }

    #[test]
    fn select_all_covers_every_row_key() {
        let mut sel = RowSelection::new_uncontrolled();
        sel.set_row_keys(vec![1u64, 2, 3, 4]);
        sel.select_all(true);
        for k in 1..=4u64 {
            assert!(sel.is_selected(&k));
        }
        assert_eq!(sel.selected_count(), 4);
    }

    #[test]
    fn select_all_false_always_clears() {
        let mut sel = RowSelection::with_selected(vec![7u64, 8]);
        sel.set_row_keys(vec![7u64, 8, 9]);
        sel.select_all(false);
        assert_eq!(keys(&sel), Vec::<u64>::new());

        // And again from an already-empty state.
        sel.select_all(false);
        assert_eq!(sel.selected_count(), 0);
    }

    #[test]
    fn is_empty_tracks_effective_set() {
        let mut sel = RowSelection::new_uncontrolled();
        assert!(sel.is_empty());
        sel.select_row(1u64, true);
        assert!(!sel.is_empty());
        sel.select_all(false);
        assert!(sel.is_empty());

        let mut ctl: RowSelection<u64> = RowSelection::new_controlled();
        assert!(ctl.is_empty());
        ctl.sync_selected(vec![2u64]);
        assert!(!ctl.is_empty());
    }

    #[test]
    fn select_all_with_no_rows_yields_empty_set() {
        let mut sel: RowSelection<u64> = RowSelection::new_uncontrolled();
        sel.select_all(true);
        assert_eq!(sel.selected_count(), 0);
    }

    #[test]
    fn selecting_twice_keeps_single_membership() {
        let mut sel = RowSelection::new_uncontrolled();
        let first = sel.select_row(5u64, true);
        let second = sel.select_row(5u64, true);
        assert_eq!(
            first,
            SelectionEvent::Row {
                key: 5,
                selected: true,
                changed: true
            }
        );
        assert_eq!(
            second,
            SelectionEvent::Row {
                key: 5,
                selected: true,
                changed: false
            }
        );
        assert_eq!(keys(&sel), vec![5]);
    }

    #[test]
    fn deselecting_absent_key_still_reports_event() {
        let mut sel = RowSelection::new_uncontrolled();
        let ev = sel.select_row(42u64, false);
        assert_eq!(
            ev,
            SelectionEvent::Row {
                key: 42,
                selected: false,
                changed: false
            }
        );
        assert_eq!(sel.selected_count(), 0);
    }

    #[test]
    fn select_all_then_deselect_one() {
        let mut sel = RowSelection::new_uncontrolled();
        sel.set_row_keys(vec![1u64, 2, 3]);
        sel.select_all(true);
        assert_eq!(keys(&sel), vec![1, 2, 3]);
        sel.select_row(2, false);
        assert_eq!(keys(&sel), vec![1, 3]);
    }

    #[test]
    fn initial_selection_deduplicates() {
        let sel = RowSelection::with_selected(vec![1u64, 1, 2]);
        assert_eq!(keys(&sel), vec![1, 2]);
    }

    #[test]
    fn controlled_mode_reads_from_synced_mirror_only() {
        let mut sel = RowSelection::new_controlled();
        sel.set_row_keys(vec![1u64, 2, 3]);

        // The operation reports the request but does not write the mirror.
        let ev = sel.select_row(2u64, true);
        assert_eq!(
            ev,
            SelectionEvent::Row {
                key: 2,
                selected: true,
                changed: true
            }
        );
        assert!(!sel.is_selected(&2));

        // The host applies the event and syncs back.
        sel.sync_selected(vec![2u64]);
        assert!(sel.is_selected(&2));
        assert_eq!(
            sel.select_row(2u64, true),
            SelectionEvent::Row {
                key: 2,
                selected: true,
                changed: false
            }
        );
    }

    #[test]
    fn controlled_select_all_leaves_mirror_untouched() {
        let mut sel = RowSelection::new_controlled();
        sel.set_row_keys(vec![1u64, 2]);
        sel.sync_selected(vec![1u64]);
        assert_eq!(sel.select_all(true), SelectionEvent::All { selected: true });
        assert_eq!(keys(&sel), vec![1]);
        assert_eq!(sel.mode(), SelectionModeKind::Controlled);
    }

    #[test]
    fn sync_selected_is_ignored_in_uncontrolled_mode() {
        let mut sel = RowSelection::with_selected(vec![1u64]);
        sel.sync_selected(vec![9u64]);
        assert_eq!(keys(&sel), vec![1]);
    }

    #[test]
    fn instances_are_isolated() {
        let mut a = RowSelection::new_uncontrolled();
        let mut b = RowSelection::new_uncontrolled();
        a.set_row_keys(vec![1u64, 2]);
        a.select_all(true);
        b.select_row(3u64, true);
        assert_eq!(keys(&a), vec![1, 2]);
        assert_eq!(keys(&b), vec![3]);
    }

    #[test]
    fn string_keys_work() {
        let mut sel: RowSelection<String> = RowSelection::new_uncontrolled();
        sel.select_row("alpha".to_string(), true);
        assert!(sel.is_selected(&"alpha".to_string()));
    }
}
