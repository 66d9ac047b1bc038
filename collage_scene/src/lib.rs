// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collage Scene: the physical display environment of a collage venue.
//!
//! A scene is a set of rectangular [`SceneDisplay`]s (monitors or projectors)
//! grouped into [`SceneDisplayGroup`]s (for example, one wall of three
//! projectors), plus global parameters:
//! - stitch-line [`Padding`] applied to every display edge,
//! - whether the horizontal extent is **toroidal** (wraps around the room).
//!
//! Every display has a [`DisplayRole`]: thumbnail surfaces receive tiled
//! overviews, magnification surfaces show a single item large.
//!
//! The crate does **not** lay anything out. Layout strategies read the scene
//! after [`SceneManager::calculate_scene`] has derived per-display thru
//! coordinates, group bounds, the usable single-display size and the total
//! canvas size.
//!
//! ## Minimal example
//!
//! ```rust
//! use collage_scene::{DisplayRole, SceneManager};
//!
//! let mut scene = SceneManager::new();
//! let wall = scene.add_group("wall 1");
//! scene.add_display(wall, 1024, 768, 0, 0, DisplayRole::Thumbnail)?;
//! scene.add_display(wall, 1024, 768, 1024, 0, DisplayRole::Magnification)?;
//!
//! let metrics = scene.calculate_scene()?;
//! assert_eq!(metrics.total_display_width, 2048);
//! assert_eq!(scene.number_of_displays_by_role(DisplayRole::Thumbnail), 1);
//! # Ok::<(), collage_scene::SceneError>(())
//! ```
//!
//! ## Scale space
//!
//! Layouts work in a normalized view space whose height is `1.0`. Pixel
//! coordinates are mapped into it by dividing by scene dimensions; see
//! [`SceneManager::origin_in_scale`] and
//! [`SceneManager::padded_origin_in_scale`].
//!
//! ## Wraparound
//!
//! The [`toroidal`] module holds the seam math used for rendering and hit
//! testing on wraparound scenes.
//!
//! ## Venues
//!
//! Deployments construct a fixed topology at startup:
//! [`SceneManager::single_display`], [`SceneManager::scr_wall`],
//! [`SceneManager::tele_immersion`], or, with the `serde` feature, a
//! `VenueConfig` read from a configuration file.

mod display;
mod error;
mod group;
mod manager;
pub mod toroidal;
mod venue;

pub use display::{DisplayId, DisplayRole, Padding, SceneDisplay};
pub use error::SceneError;
pub use group::SceneDisplayGroup;
pub use manager::{SceneManager, SceneMetrics};
#[cfg(feature = "serde")]
pub use venue::{DisplayConfig, GroupConfig, VenueConfig, VenuePreset};
