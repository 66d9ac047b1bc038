// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_items::CollageItem;
use kurbo::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::manager::{Placement, commit, nothing_to_place};
use crate::{LayoutEnv, LayoutError, LayoutKind, LayoutManager};

/// Scatters items uniformly over the view.
///
/// Every item, including those before `start`, is rescaled so that each covers
/// an equal share of the view area, clamped so it still fits inside the view.
/// Items from `start` then get a uniformly random center that keeps them fully
/// on screen. Overlap is allowed.
#[derive(Clone, Debug)]
pub struct RandomLayoutManager {
    rng: StdRng,
}

impl RandomLayoutManager {
    /// Creates the strategy with an OS-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates the strategy with a reproducible generator.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomLayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Height giving an item an `area` share of the view, limited to the view.
fn share_scale(area: f64, aspect_ratio: f64, width: f64, height: f64) -> f64 {
    (area / aspect_ratio)
        .sqrt()
        .min(height)
        .min(width / aspect_ratio)
}

impl LayoutManager for RandomLayoutManager {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Random
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
        let (width, height) = (env.view.width, env.view.height);
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::ViewTooNarrow {
                width,
                items: items.len(),
            });
        }
        let share = width * height / items.len() as f64;

        let mut plan = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let scale = share_scale(share, item.aspect_ratio(), width, height);
            if index < start {
                plan.push(Placement::rescale(index, scale));
                continue;
            }
            let half_width = scale * item.aspect_ratio() * 0.5;
            let half_height = scale * 0.5;
            let x = self
                .rng
                .random_range(half_width..=(width - half_width).max(half_width));
            let y = self
                .rng
                .random_range(half_height..=(height - half_height).max(half_height));
            plan.push(Placement::at(index, scale, Point::new(x, y)));
        }
        debug!(start, share, "random layout");
        commit(items, &plan);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::share_scale;

    #[test]
    fn share_is_limited_by_the_view() {
        // Four squares on a 4x1 view each get a 1x1 share.
        assert!((share_scale(1.0, 1.0, 4.0, 1.0) - 1.0).abs() < 1e-12);
        // One square alone would be 2 high; the view height caps it.
        assert!((share_scale(4.0, 1.0, 4.0, 1.0) - 1.0).abs() < 1e-12);
        // A very wide item is capped by the view width.
        assert!((share_scale(4.0, 16.0, 4.0, 1.0) - 0.25).abs() < 1e-12);
    }
}
