// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_items::{CollageItem, VIEW_MID_HEIGHT};
use kurbo::Point;
use tracing::debug;

use crate::manager::{Placement, commit, nothing_to_place, row_centers};
use crate::{LayoutEnv, LayoutError, LayoutKind, LayoutManager, X_BORDER};

/// One horizontal row at mid-height, left to right, keeping every item's
/// scale. Neighbouring edges are [`X_BORDER`] apart and the first item's left
/// edge sits at [`X_BORDER`].
///
/// Ignores the scene entirely, which makes it the fallback when a
/// scene-driven strategy cannot run.
#[derive(Clone, Debug, Default)]
pub struct SimpleSingleLayoutManager;

impl SimpleSingleLayoutManager {
    /// Creates the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LayoutManager for SimpleSingleLayoutManager {
    fn kind(&self) -> LayoutKind {
        LayoutKind::SimpleSingle
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
        let suffix = &items[start..];
        let centers = row_centers(suffix.iter().map(CollageItem::half_width), 0.0, X_BORDER);
        let plan: Vec<Placement> = suffix
            .iter()
            .zip(centers)
            .enumerate()
            .map(|(offset, (item, x))| {
                Placement::at(start + offset, item.scale(), Point::new(x, VIEW_MID_HEIGHT))
            })
            .collect();
        debug!(start, placed = plan.len(), "simple single layout");
        commit(items, &plan);
        Ok(())
    }
}
