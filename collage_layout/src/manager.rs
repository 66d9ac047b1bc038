// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The strategy trait and the plan/commit helpers strategies share.

use core::fmt::Debug;

use collage_items::CollageItem;
use kurbo::Point;

use crate::{LayoutEnv, LayoutError, LayoutKind};

/// A layout strategy.
///
/// A strategy assigns scale and position to the items at index `start` and
/// later. It never adds, removes or reorders items, and it leaves the
/// positions of items before `start` untouched. An empty slice, or a `start`
/// past the end, is a no-op.
///
/// Strategies compute a full plan before touching any item, so a failed call
/// leaves every item in its previous state.
pub trait LayoutManager: Debug {
    /// Which strategy this is.
    fn kind(&self) -> LayoutKind;

    /// Lays out `items[start..]`.
    fn layout(
        &mut self,
        items: &mut [CollageItem],
        env: &LayoutEnv<'_>,
        start: usize,
    ) -> Result<(), LayoutError>;
}

/// New scale, and optionally a new position, for one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Placement {
    pub(crate) index: usize,
    pub(crate) scale: f64,
    pub(crate) position: Option<Point>,
}

impl Placement {
    pub(crate) fn at(index: usize, scale: f64, position: Point) -> Self {
        Self {
            index,
            scale,
            position: Some(position),
        }
    }

    pub(crate) fn rescale(index: usize, scale: f64) -> Self {
        Self {
            index,
            scale,
            position: None,
        }
    }
}

/// Applies a finished plan.
pub(crate) fn commit(items: &mut [CollageItem], plan: &[Placement]) {
    for placement in plan {
        let item = &mut items[placement.index];
        item.set_scale(placement.scale);
        if let Some(position) = placement.position {
            item.set_position(position);
        }
    }
}

/// Returns `true` when there is nothing at or after `start`.
pub(crate) fn nothing_to_place(items: &[CollageItem], start: usize) -> bool {
    start >= items.len()
}

/// Centers of a left-to-right row of items with the given half-widths,
/// separated by `gap`, with the first left edge at `cursor + gap`.
pub(crate) fn row_centers(
    half_widths: impl IntoIterator<Item = f64>,
    mut cursor: f64,
    gap: f64,
) -> Vec<f64> {
    let mut previous: Option<f64> = None;
    half_widths
        .into_iter()
        .map(|half| {
            if let Some(previous) = previous {
                cursor += previous;
            }
            cursor += half + gap;
            previous = Some(half);
            cursor
        })
        .collect()
}
