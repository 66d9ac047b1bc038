// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_items::CollageItem;
use collage_scene::{DisplayId, DisplayRole, Padding, SceneDisplay, SceneError, SceneManager};
use kurbo::{Point, Rect};
use tracing::debug;

use crate::manager::{Placement, commit, nothing_to_place};
use crate::{LayoutEnv, LayoutError, LayoutKind, LayoutManager};

/// How many items share each thumbnail display.
///
/// `floor(item_count / thumbnail_displays)`, raised to at least 1, with 3
/// rounded up to 4 and anything above 4 capped at 4.
#[must_use]
pub fn images_per_display(item_count: usize, thumbnail_displays: usize) -> usize {
    match item_count.checked_div(thumbnail_displays).unwrap_or(0) {
        0 => 1,
        n @ (1 | 2) => n,
        _ => 4,
    }
}

/// Scale (item height in view units) that fits an item with `aspect_ratio`
/// into one of `per_display` cells of `display`.
///
/// One item per display fills the usable width. Two and four items per display
/// fit their cell, preserving aspect ratio.
pub fn fitting_scale(
    per_display: usize,
    aspect_ratio: f64,
    display: &SceneDisplay,
    padding: Padding,
) -> Result<f64, LayoutError> {
    let height = f64::from(display.height_px());
    let available_width = f64::from(display.available_width_px(padding));
    let available_height = f64::from(display.available_height_px(padding));
    let (cell_width, cell_height) = match per_display {
        1 => return Ok(available_width / (height * aspect_ratio)),
        2 => (available_width * 0.5, available_height),
        4 => (available_width * 0.5, available_height * 0.5),
        other => return Err(LayoutError::UnsupportedImagesPerDisplay(other)),
    };
    Ok((cell_width / aspect_ratio).min(cell_height) / height)
}

/// Pixel center of cell `slot` of `display` when it holds `per_display` items.
///
/// Two items split the usable area into left and right halves; four split it
/// into quadrants, top row first.
fn cell_center(display: &SceneDisplay, padding: Padding, per_display: usize, slot: usize) -> Point {
    let area = display.available_rect(padding);
    let cell = |col: usize, row: usize, cols: usize, rows: usize| {
        let w = area.width() / cols as f64;
        let h = area.height() / rows as f64;
        Rect::new(
            area.x0 + w * col as f64,
            area.y0 + h * row as f64,
            area.x0 + w * (col + 1) as f64,
            area.y0 + h * (row + 1) as f64,
        )
        .center()
    };
    match per_display {
        2 => cell(slot % 2, 0, 2, 1),
        4 => cell(slot % 2, slot / 2, 2, 2),
        _ => display.center(),
    }
}

/// One thumbnail display per item (or per two or four items), filling each
/// display before moving to the next.
///
/// Requires a calculated scene with at least one
/// [`Thumbnail`](DisplayRole::Thumbnail) display.
#[derive(Clone, Debug, Default)]
pub struct SmartSingleLayoutManager;

impl SmartSingleLayoutManager {
    /// Creates the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn plan(
        items: &[CollageItem],
        scene: &SceneManager,
        start: usize,
    ) -> Result<Vec<Placement>, LayoutError> {
        let total_height = f64::from(scene.require_calculated()?.total_display_height);
        let thumbnails = scene.number_of_displays_by_role(DisplayRole::Thumbnail);
        if thumbnails == 0 {
            return Err(SceneError::NoDisplayWithRole(DisplayRole::Thumbnail).into());
        }
        let per_display = images_per_display(items.len(), thumbnails);
        let padding = scene.padding();

        let mut id: DisplayId = scene.first_display_with_role(DisplayRole::Thumbnail)?;
        let mut placed_on_display = 0;
        let mut plan = Vec::with_capacity(items.len() - start);
        for (index, item) in items.iter().enumerate().skip(start) {
            if placed_on_display == per_display {
                id = scene
                    .next_display_with_role(id, DisplayRole::Thumbnail)
                    .ok_or(LayoutError::DisplaysExhausted {
                        remaining: items.len() - index,
                    })?;
                placed_on_display = 0;
            }
            let display = scene.display(id)?;
            let scale = fitting_scale(per_display, item.aspect_ratio(), display, padding)?;
            let center = cell_center(display, padding, per_display, placed_on_display);
            let position = Point::new(
                center.x / f64::from(display.height_px()),
                center.y / total_height,
            );
            plan.push(Placement::at(index, scale, position));
            placed_on_display += 1;
        }
        debug!(per_display, thumbnails, last_display = %id, "smart single plan");
        Ok(plan)
    }
}

impl LayoutManager for SmartSingleLayoutManager {
    fn kind(&self) -> LayoutKind {
        LayoutKind::SmartSingle
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
        let plan = Self::plan(items, env.scene, start)?;
        commit(items, &plan);
        Ok(())
    }
}
