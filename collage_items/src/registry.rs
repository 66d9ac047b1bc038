// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use tracing::{debug, info};

use collage_scene::toroidal::{contains_wrapped, wrap_x};

use crate::selection::CurrentSet;
use crate::{CollageItem, ItemId, ItemSpec, SortKey};

/// Scale factor applied per scroll step.
const SCROLL_FACTOR: f64 = 1.1;

/// Errors from registry operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No item has this id.
    #[error("no item with id {0}")]
    UnknownItem(ItemId),
    /// Render-order index past the end.
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of items.
        len: usize,
    },
    /// Stereo toggling needs two unpaired items or one paired item selected.
    #[error("stereo toggle needs two unpaired items or one pair selected, {selected} selected")]
    InvalidStereoSelection {
        /// Number of current items.
        selected: usize,
    },
}

/// Direction of a stereo depth adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthDirection {
    /// Deeper into the scene.
    Increase,
    /// Back out of the scene.
    Decrease,
}

/// Ordered collection of collage items plus the current (selected) subset.
///
/// Order is render order: later items draw on top of earlier ones. Selecting
/// an item moves it to the end. Every current id refers to exactly one item
/// in the sequence.
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    items: Vec<CollageItem>,
    current: CurrentSet,
    next_id: u64,
    loaded: u32,
}

impl ItemRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new item on top and returns its id.
    ///
    /// The item's load order comes from a counter that never decreases, so
    /// deleted items leave gaps.
    pub fn insert(&mut self, mut spec: ItemSpec) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        spec.metadata.load_order = self.loaded;
        self.loaded += 1;
        self.items.push(CollageItem::new(id, spec));
        id
    }

    /// Items in render order.
    #[must_use]
    pub fn items(&self) -> &[CollageItem] {
        &self.items
    }

    /// Mutable items in render order.
    ///
    /// A slice cannot grow, shrink or be reordered from outside.
    pub fn items_mut(&mut self) -> &mut [CollageItem] {
        &mut self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render-order index of `id`.
    #[must_use]
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// The item with `id`.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&CollageItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The item with `id`, mutably.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut CollageItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Ids of the current items, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[ItemId] {
        self.current.ids()
    }

    /// Returns `true` if `id` is current.
    #[must_use]
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.current.contains(id)
    }

    /// The current set.
    #[must_use]
    pub fn current(&self) -> &CurrentSet {
        &self.current
    }

    /// Revision of the current set; bumps whenever its contents change.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.current.revision()
    }

    /// Selects the item at `index`, moving it to the top of the render order.
    pub fn select(&mut self, index: usize) -> Result<ItemId, RegistryError> {
        let len = self.items.len();
        if index >= len {
            return Err(RegistryError::IndexOutOfRange { index, len });
        }
        let mut item = self.items.remove(index);
        item.set_selected(true);
        let id = item.id();
        self.items.push(item);
        self.current.add(id);
        debug!(%id, from = index, "selected item");
        Ok(id)
    }

    /// Clears the selection, then selects the item at `index`.
    pub fn select_only(&mut self, index: usize) -> Result<ItemId, RegistryError> {
        let len = self.items.len();
        if index >= len {
            return Err(RegistryError::IndexOutOfRange { index, len });
        }
        let id = self.items[index].id();
        self.deselect_all_but(Some(id));
        self.select(index)
    }

    /// Removes `id` from the current set and hides its border.
    pub fn deselect(&mut self, id: ItemId) -> Result<(), RegistryError> {
        let item = self.get_mut(id).ok_or(RegistryError::UnknownItem(id))?;
        item.set_selected(false);
        self.current.remove(id);
        Ok(())
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        self.deselect_all_but(None);
    }

    /// Selects every item without changing render order.
    pub fn select_all(&mut self) {
        for item in &mut self.items {
            item.set_selected(true);
        }
        self.current
            .replace_with_unique(self.items.iter().map(CollageItem::id));
    }

    fn deselect_all_but(&mut self, keep: Option<ItemId>) {
        for item in &mut self.items {
            if Some(item.id()) != keep {
                item.set_selected(false);
            }
        }
        let kept = keep.filter(|id| self.current.contains(*id));
        self.current.replace_with_unique(kept);
    }

    /// Index of the topmost item under `point`.
    ///
    /// On toroidal views, copies shifted by `±view_width` are hit as well.
    #[must_use]
    pub fn hit_test(&self, point: Point, view_width: f64, toroidal: bool) -> Option<usize> {
        self.items.iter().rposition(|item| {
            let extent = item.extent();
            if toroidal {
                contains_wrapped(extent, point, view_width)
            } else {
                point.x >= extent.x0
                    && point.x <= extent.x1
                    && point.y >= extent.y0
                    && point.y <= extent.y1
            }
        })
    }

    /// Applies a pointer click at `point` in view space.
    ///
    /// - A plain click on an item that is not current selects only that item.
    ///   A plain click on a current item brings it to the top and keeps the
    ///   rest of the selection, so the group can be dragged together.
    /// - A ctrl-click toggles the item's membership.
    /// - A click that hits nothing clears the selection.
    ///
    /// Returns the id of the item hit, if any.
    pub fn click(
        &mut self,
        point: Point,
        ctrl: bool,
        view_width: f64,
        toroidal: bool,
    ) -> Option<ItemId> {
        let Some(index) = self.hit_test(point, view_width, toroidal) else {
            self.clear_selection();
            return None;
        };
        let id = self.items[index].id();
        let current = self.current.contains(id);
        let result = match (ctrl, current) {
            (true, true) => self.deselect(id).map(|()| id),
            (true, false) => self.select(index),
            (false, true) => self.select(index),
            (false, false) => self.select_only(index),
        };
        result.ok()
    }

    fn for_each_selected(&mut self, mut f: impl FnMut(&mut CollageItem)) {
        let current = &self.current;
        for item in self.items.iter_mut().filter(|i| current.contains(i.id())) {
            f(item);
        }
    }

    /// Moves every current item by `delta`.
    pub fn translate_selected(&mut self, delta: Vec2) {
        self.for_each_selected(|item| item.translate(delta));
    }

    /// Folds the center of every current item back into `[0, view_width)`.
    ///
    /// Used on toroidal views after a move, so an item dragged off one edge
    /// comes back in from the other.
    pub fn wrap_selected(&mut self, view_width: f64) {
        self.for_each_selected(|item| {
            let position = item.position();
            let x = wrap_x(position.x, view_width);
            if x != position.x {
                item.set_position(Point::new(x, position.y));
            }
        });
    }

    /// Zooms every current item about its center. Each positive step shrinks
    /// by a factor of 1.1, each negative step grows by the same factor.
    pub fn scroll_selected(&mut self, steps: i32) {
        if steps == 0 {
            return;
        }
        let factor = SCROLL_FACTOR.powi(-steps);
        self.for_each_selected(|item| item.set_scale(item.scale() * factor));
    }

    /// Fits every current item to the view height.
    pub fn fit_selected_to_screen(&mut self) {
        self.for_each_selected(CollageItem::fit_to_screen);
    }

    /// Shows every current item at its native pixel size.
    pub fn native_resolution_selected(&mut self, window_height_px: f64) {
        self.for_each_selected(|item| item.native_resolution(window_height_px));
    }

    /// Adjusts stereo depth of every current item.
    pub fn adjust_stereo_depth(&mut self, direction: DepthDirection) {
        self.for_each_selected(|item| match direction {
            DepthDirection::Increase => item.increase_stereo_depth(),
            DepthDirection::Decrease => item.decrease_stereo_depth(),
        });
    }

    /// Removes every current item and returns them in render order.
    pub fn delete_selected(&mut self) -> Vec<CollageItem> {
        if self.current.is_empty() {
            return Vec::new();
        }
        let (removed, kept): (Vec<_>, Vec<_>) = core::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| self.current.contains(item.id()));
        self.items = kept;
        self.current.clear();
        info!(count = removed.len(), remaining = self.items.len(), "deleted items");
        removed
    }

    /// Pairs or swaps stereo images.
    ///
    /// - Two current items, neither paired: the second is removed from the
    ///   registry and attached to the first as its right-eye image.
    /// - One current item with a partner: left and right eyes swap in place.
    ///
    /// Returns the id of the resulting left-eye item.
    pub fn toggle_stereo(&mut self) -> Result<ItemId, RegistryError> {
        let invalid = RegistryError::InvalidStereoSelection {
            selected: self.current.len(),
        };
        let ids = self.current.ids().to_vec();
        match ids[..] {
            [left, right] => {
                let left_idx = self.index_of(left).ok_or(RegistryError::UnknownItem(left))?;
                let right_idx = self
                    .index_of(right)
                    .ok_or(RegistryError::UnknownItem(right))?;
                if self.items[left_idx].has_stereo() || self.items[right_idx].has_stereo() {
                    return Err(invalid);
                }
                let partner = self.items.remove(right_idx);
                self.current.remove(right);
                let left_idx = if right_idx < left_idx {
                    left_idx - 1
                } else {
                    left_idx
                };
                self.items[left_idx].attach_stereo(partner);
                info!(%left, %right, "paired stereo images");
                Ok(left)
            }
            [only] => {
                let idx = self.index_of(only).ok_or(RegistryError::UnknownItem(only))?;
                let Some(right) = self.items[idx].detach_stereo() else {
                    return Err(invalid);
                };
                let left = core::mem::replace(&mut self.items[idx], right);
                self.items[idx].attach_stereo(left);
                let new_id = self.items[idx].id();
                self.current.substitute(only, new_id);
                info!(left = %new_id, right = %only, "swapped stereo eyes");
                Ok(new_id)
            }
            _ => Err(invalid),
        }
    }

    /// Stable sort of the render order by a metadata field.
    pub fn sort_by(&mut self, key: SortKey) {
        self.items
            .sort_by(|a, b| a.metadata().compare(b.metadata(), key));
        debug!(%key, "sorted items");
    }
}
