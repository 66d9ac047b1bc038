// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_scene::SceneError;

/// Errors raised while laying out items.
///
/// On any error the items are left exactly as they were before the call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The scene is missing, uncalculated or lacks a required display role.
    #[error(transparent)]
    Scene(#[from] SceneError),
    /// Per-display fitting only supports 1, 2 or 4 items per display.
    #[error("cannot fit {0} items on one display, only 1, 2 or 4")]
    UnsupportedImagesPerDisplay(usize),
    /// Every thumbnail display is full.
    #[error("ran out of thumbnail displays with {remaining} items left to place")]
    DisplaysExhausted {
        /// Items that had no display left.
        remaining: usize,
    },
    /// The view cannot hold the borders between this many items.
    #[error("view width {width} leaves no room for {items} items")]
    ViewTooNarrow {
        /// View width in view units.
        width: f64,
        /// Number of items in the row.
        items: usize,
    },
}

impl LayoutError {
    /// Returns `true` for errors caused by the venue or view configuration
    /// rather than by the caller's arguments.
    ///
    /// A layout that fails this way can be retried with a strategy that does
    /// not consult the scene.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::UnsupportedImagesPerDisplay(_))
    }
}
