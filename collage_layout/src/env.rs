// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_scene::{SceneError, SceneManager};

/// Size of the view in view units. The height is normally `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewExtent {
    /// Width in view units.
    pub width: f64,
    /// Height in view units.
    pub height: f64,
}

impl ViewExtent {
    /// A view `width` wide and `1.0` high.
    #[must_use]
    pub const fn new(width: f64) -> Self {
        Self { width, height: 1.0 }
    }

    /// The view of a window of `width_px` × `height_px`.
    ///
    /// A zero height yields a zero-width view.
    #[must_use]
    pub fn from_window(width_px: u32, height_px: u32) -> Self {
        if height_px == 0 {
            return Self::new(0.0);
        }
        Self::new(f64::from(width_px) / f64::from(height_px))
    }

    /// The view spanning the whole calculated scene.
    pub fn from_scene(scene: &SceneManager) -> Result<Self, SceneError> {
        let metrics = scene.require_calculated()?;
        Ok(Self::from_window(
            metrics.total_display_width,
            metrics.total_display_height,
        ))
    }
}

impl Default for ViewExtent {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Read-only context for one layout call.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEnv<'a> {
    /// Display topology. Strategies that do not consult it accept an
    /// uncalculated scene.
    pub scene: &'a SceneManager,
    /// Current view extent.
    pub view: ViewExtent,
}

impl<'a> LayoutEnv<'a> {
    /// Bundles a scene and a view.
    #[must_use]
    pub fn new(scene: &'a SceneManager, view: ViewExtent) -> Self {
        Self { scene, view }
    }
}
