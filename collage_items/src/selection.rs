// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for the current (selected) set of items.
//!
//! Keys live in a small `Vec` with uniqueness enforced by equality, in the
//! order they were selected. A revision counter bumps only when the contents
//! actually change.

use crate::ItemId;

/// The current set: selected item ids plus a revision counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentSet {
    ids: Vec<ItemId>,
    revision: u64,
}

impl CurrentSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of selected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Selected ids in selection order.
    #[must_use]
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    /// Returns `true` if `id` is selected.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    /// Monotonic change marker.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adds `id` if absent. Returns `true` if it was added.
    pub(crate) fn add(&mut self, id: ItemId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        self.bump_revision();
        true
    }

    /// Removes `id` if present. Returns `true` if it was removed.
    pub(crate) fn remove(&mut self, id: ItemId) -> bool {
        let Some(idx) = self.ids.iter().position(|&k| k == id) else {
            return false;
        };
        self.ids.remove(idx);
        self.bump_revision();
        true
    }

    /// Replaces the contents with `ids`, which must be unique.
    pub(crate) fn replace_with_unique(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        let new_ids: Vec<ItemId> = ids.into_iter().collect();
        debug_assert!(
            new_ids
                .iter()
                .enumerate()
                .all(|(i, id)| !new_ids[..i].contains(id)),
            "current set ids must be unique"
        );
        if new_ids == self.ids {
            return;
        }
        self.ids = new_ids;
        self.bump_revision();
    }

    /// Swaps `old` for `new` in place, keeping selection order.
    pub(crate) fn substitute(&mut self, old: ItemId, new: ItemId) {
        if let Some(slot) = self.ids.iter_mut().find(|k| **k == old) {
            *slot = new;
            self.bump_revision();
        }
    }

    pub(crate) fn clear(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        self.ids.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::CurrentSet;
    use crate::ItemId;

    #[test]
    fn revision_bumps_only_on_change() {
        let mut set = CurrentSet::new();
        assert!(set.add(ItemId(1)));
        assert_eq!(set.revision(), 1);
        assert!(!set.add(ItemId(1)));
        assert_eq!(set.revision(), 1);

        set.replace_with_unique([ItemId(1)]);
        assert_eq!(set.revision(), 1);

        assert!(!set.remove(ItemId(7)));
        set.clear();
        assert_eq!(set.revision(), 2);
        set.clear();
        assert_eq!(set.revision(), 2);
    }

    #[test]
    fn substitute_keeps_order() {
        let mut set = CurrentSet::new();
        set.replace_with_unique([ItemId(1), ItemId(2), ItemId(3)]);
        set.substitute(ItemId(2), ItemId(9));
        assert_eq!(set.ids(), &[ItemId(1), ItemId(9), ItemId(3)]);
    }
}
