// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_items::{CollageItem, VIEW_MID_HEIGHT};
use kurbo::Point;
use tracing::debug;

use crate::manager::{Placement, commit, nothing_to_place, row_centers};
use crate::{LayoutEnv, LayoutError, LayoutKind, LayoutManager, X_BORDER};

/// One row that spans the whole view width.
///
/// Every item, including those before `start`, is rescaled by the same factor
/// so that the widths plus one [`X_BORDER`] per item add up to the view width.
/// Only items from `start` are repositioned.
#[derive(Clone, Debug, Default)]
pub struct FillRoomLayoutManager;

impl FillRoomLayoutManager {
    /// Creates the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LayoutManager for FillRoomLayoutManager {
    fn kind(&self) -> LayoutKind {
        LayoutKind::FillRoom
    }

    fn layout(
        &mut self,
        items: &mut [CollageItem],
        env: &LayoutEnv<'_>,
        start: usize,
    ) -> Result<(), LayoutError> {
        if nothing_to_place(items, start) {
            return Ok(());
        }
        let count = items.len();
        let view_width = env.view.width;
        let total_width: f64 = items.iter().map(CollageItem::width).sum();
        let scale_factor = (view_width - count as f64 * X_BORDER) / total_width;
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(LayoutError::ViewTooNarrow {
                width: view_width,
                items: count,
            });
        }

        let mut plan: Vec<Placement> = items[..start]
            .iter()
            .enumerate()
            .map(|(index, item)| Placement::rescale(index, item.scale() * scale_factor))
            .collect();
        let suffix = &items[start..];
        let centers = row_centers(
            suffix.iter().map(|item| item.half_width() * scale_factor),
            -X_BORDER * 0.5,
            X_BORDER,
        );
        plan.extend(suffix.iter().zip(centers).enumerate().map(|(offset, (item, x))| {
            Placement::at(
                start + offset,
                item.scale() * scale_factor,
                Point::new(x, VIEW_MID_HEIGHT),
            )
        }));
        debug!(start, scale_factor, total_width, "fill room layout");
        commit(items, &plan);
        Ok(())
    }
}
