// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_items::{CollageItem, VIEW_MID_HEIGHT};
use kurbo::Point;
use tracing::debug;

use crate::manager::{Placement, commit, nothing_to_place};
use crate::{LayoutEnv, LayoutError, LayoutKind, LayoutManager, X_BORDER, Y_BORDER};

/// A column in the double row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Column {
    Single(usize),
    /// Upper item, lower item.
    Pair(usize, usize),
}

/// Two rows, stacking short items above one another.
///
/// Walking the items from `start`, each unpaired item is paired with the first
/// later unpaired item whose combined height leaves room for three
/// [`Y_BORDER`]s. A pair shares one column: the first item above mid-height,
/// its partner below. Unpaired items sit on the mid-height line. Scales are
/// kept and the registry order is not changed.
#[derive(Clone, Debug, Default)]
pub struct SimpleDoubleLayoutManager;

impl SimpleDoubleLayoutManager {
    /// Creates the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn fits_stacked(a: &CollageItem, b: &CollageItem) -> bool {
    a.height() + b.height() < 1.0 - 3.0 * Y_BORDER
}

fn columns(items: &[CollageItem], start: usize) -> Vec<Column> {
    let mut pending: Vec<usize> = (start..items.len()).collect();
    let mut columns = Vec::with_capacity(pending.len());
    let mut k = 0;
    while k < pending.len() {
        let anchor = pending[k];
        let partner = pending[k + 1..]
            .iter()
            .position(|&other| fits_stacked(&items[anchor], &items[other]))
            .map(|offset| pending.remove(k + 1 + offset));
        columns.push(match partner {
            Some(partner) => Column::Pair(anchor, partner),
            None => Column::Single(anchor),
        });
        k += 1;
    }
    columns
}

impl LayoutManager for SimpleDoubleLayoutManager {
    fn kind(&self) -> LayoutKind {
        LayoutKind::SimpleDouble
    }

    fn layout(
        &mut self,
        items: &mut [CollageItem],
        _env: &LayoutEnv<'_>,
        start: usize,
    ) -> Result<(), LayoutError> {
        if nothing_to_place(items, start) {
            return Ok(());
        }
        let columns = columns(items, start);
        let mut plan = Vec::with_capacity(items.len() - start);
        let mut cursor = X_BORDER;
        for column in &columns {
            match *column {
                Column::Single(i) => {
                    let item = &items[i];
                    let half = item.half_width();
                    cursor += half;
                    plan.push(Placement::at(i, item.scale(), Point::new(cursor, VIEW_MID_HEIGHT)));
                    cursor += half + X_BORDER;
                }
                Column::Pair(upper, lower) => {
                    let (a, b) = (&items[upper], &items[lower]);
                    let half = a.half_width().max(b.half_width());
                    cursor += half;
                    let gap = Y_BORDER * 0.5;
                    plan.push(Placement::at(
                        upper,
                        a.scale(),
                        Point::new(cursor, VIEW_MID_HEIGHT + gap + a.half_height()),
                    ));
                    plan.push(Placement::at(
                        lower,
                        b.scale(),
                        Point::new(cursor, VIEW_MID_HEIGHT - gap - b.half_height()),
                    ));
                    cursor += half + X_BORDER;
                }
            }
        }
        debug!(
            start,
            columns = columns.len(),
            placed = plan.len(),
            "simple double layout"
        );
        commit(items, &plan);
        Ok(())
    }
}
