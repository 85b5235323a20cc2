// SPDX-License-Identifier: MPL-2.0
//! Ordered multi-selection state.
//!
//! The selection is a list of grid entries in the order the user picked them,
//! each carrying its zero-based rank. Toggling is the only mutating
//! operation; every mutation re-establishes the invariant
//! `picked[i].rank == Some(i)`.

use crate::library::asset::PhotoAsset;
use crate::picker::entry::{EntryId, GridEntry};

/// Selected subset of the fetched grid, ordered by selection time.
#[derive(Debug, Default)]
pub struct Selection {
    picked: Vec<GridEntry>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `entry` in or out of the selection.
    ///
    /// Removing renumbers every remaining rank to its new position; adding
    /// appends a copy ranked after the current tail and leaves existing ranks
    /// untouched. Both branches are total: an entry that was never part of
    /// the fetched grid is simply accepted as a new selection.
    pub fn toggle(&mut self, entry: &GridEntry) {
        if let Some(index) = self.index_of(entry.id) {
            self.picked.remove(index);
            self.renumber();
        } else {
            let mut picked = entry.clone();
            picked.rank = Some(self.picked.len());
            self.picked.push(picked);
        }

        debug_assert!(self.ranks_are_contiguous());
    }

    /// Rank of `id` within the selection, if selected. Pure lookup; the view
    /// uses this to decide whether to paint a numbered badge and which
    /// number.
    #[must_use]
    pub fn rank_of(&self, id: EntryId) -> Option<usize> {
        self.index_of(id)
    }

    /// Projects the selection, in selection order, to bare asset references.
    /// This is the sole output crossing the component boundary.
    #[must_use]
    pub fn confirm(&self) -> Vec<PhotoAsset> {
        self.picked.iter().map(|entry| entry.asset.clone()).collect()
    }

    /// Discards the whole selection.
    pub fn cancel(&mut self) {
        self.picked.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    /// Selected entries in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &GridEntry> {
        self.picked.iter()
    }

    fn index_of(&self, id: EntryId) -> Option<usize> {
        self.picked.iter().position(|entry| entry.id == id)
    }

    fn renumber(&mut self) {
        for (index, entry) in self.picked.iter_mut().enumerate() {
            entry.rank = Some(index);
        }
    }

    fn ranks_are_contiguous(&self) -> bool {
        self.picked
            .iter()
            .enumerate()
            .all(|(index, entry)| entry.rank == Some(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn entry(name: &str) -> GridEntry {
        GridEntry::new(PhotoAsset::new(
            PathBuf::from(name),
            SystemTime::UNIX_EPOCH,
        ))
    }

    fn ranks(selection: &Selection) -> Vec<Option<usize>> {
        selection.iter().map(|e| e.rank).collect()
    }

    #[test]
    fn toggling_adds_with_next_rank() {
        let a = entry("a.jpg");
        let c = entry("c.jpg");
        let mut selection = Selection::new();

        selection.toggle(&a);
        assert_eq!(selection.rank_of(a.id), Some(0));

        selection.toggle(&c);
        assert_eq!(selection.rank_of(a.id), Some(0));
        assert_eq!(selection.rank_of(c.id), Some(1));
        assert_eq!(ranks(&selection), vec![Some(0), Some(1)]);
    }

    #[test]
    fn removing_renumbers_later_selections() {
        // The scenario from the picker contract: fetched [A, B, C];
        // toggle(A), toggle(C), toggle(A) leaves C alone at rank 0.
        let a = entry("a.jpg");
        let c = entry("c.jpg");
        let mut selection = Selection::new();

        selection.toggle(&a);
        selection.toggle(&c);
        selection.toggle(&a);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.rank_of(a.id), None);
        assert_eq!(selection.rank_of(c.id), Some(0));
        assert_eq!(selection.confirm(), vec![c.asset.clone()]);
    }

    #[test]
    fn removal_does_not_shift_earlier_ranks() {
        let a = entry("a.jpg");
        let b = entry("b.jpg");
        let c = entry("c.jpg");
        let mut selection = Selection::new();

        selection.toggle(&a);
        selection.toggle(&b);
        selection.toggle(&c);
        selection.toggle(&b);

        assert_eq!(selection.rank_of(a.id), Some(0));
        assert_eq!(selection.rank_of(c.id), Some(1));
    }

    #[test]
    fn double_toggle_is_an_involution() {
        let a = entry("a.jpg");
        let b = entry("b.jpg");
        let mut selection = Selection::new();

        selection.toggle(&a);
        let before = ranks(&selection);

        selection.toggle(&b);
        selection.toggle(&b);

        assert_eq!(ranks(&selection), before);
        assert_eq!(selection.rank_of(b.id), None);
    }

    #[test]
    fn ranks_stay_contiguous_under_arbitrary_toggles() {
        let entries: Vec<GridEntry> = (0..8).map(|i| entry(&format!("{i}.jpg"))).collect();
        let mut selection = Selection::new();

        // A scripted mix of adds and removals.
        let script = [0, 3, 5, 3, 1, 7, 0, 2, 5, 6, 1, 4];
        for &index in &script {
            selection.toggle(&entries[index]);
            for (position, picked) in selection.iter().enumerate() {
                assert_eq!(picked.rank, Some(position));
            }
        }
    }

    #[test]
    fn duplicates_are_impossible() {
        let a = entry("a.jpg");
        let mut selection = Selection::new();

        for _ in 0..5 {
            selection.toggle(&a);
        }

        // Odd number of toggles: selected exactly once.
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.rank_of(a.id), Some(0));
    }

    #[test]
    fn confirm_returns_selection_order_not_fetch_order() {
        let fetched: Vec<GridEntry> = ["a.jpg", "b.jpg", "c.jpg"]
            .iter()
            .map(|name| entry(name))
            .collect();
        let mut selection = Selection::new();

        selection.toggle(&fetched[2]);
        selection.toggle(&fetched[0]);

        let confirmed = selection.confirm();
        assert_eq!(confirmed.len(), 2);
        assert_eq!(confirmed[0], fetched[2].asset);
        assert_eq!(confirmed[1], fetched[0].asset);
    }

    #[test]
    fn foreign_entry_is_accepted_as_new_selection() {
        // An entry that never appeared in any fetched list.
        let stray = entry("stray.jpg");
        let mut selection = Selection::new();

        selection.toggle(&stray);
        assert_eq!(selection.rank_of(stray.id), Some(0));
        assert_eq!(selection.confirm(), vec![stray.asset.clone()]);
    }

    #[test]
    fn cancel_discards_everything() {
        let a = entry("a.jpg");
        let b = entry("b.jpg");
        let mut selection = Selection::new();

        selection.toggle(&a);
        selection.toggle(&b);
        selection.cancel();

        assert!(selection.is_empty());
        assert!(selection.confirm().is_empty());
    }

    #[test]
    fn empty_selection_confirms_to_nothing() {
        let selection = Selection::new();
        assert!(selection.confirm().is_empty());
        assert_eq!(selection.rank_of(entry("x.jpg").id), None);
    }
}
