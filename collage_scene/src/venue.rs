// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed venue topologies.
//!
//! Each deployment builds its scene once at startup. The presets here cover the
//! known venues; [`VenueConfig`] (behind the `serde` feature) describes custom
//! ones.

use crate::{DisplayRole, Padding, SceneError, SceneManager};

/// Pixel size of one SCR projector.
const SCR_PROJECTOR: (u32, u32) = (1024, 768);
/// Walls in the SCR, each three projectors wide.
const SCR_WALLS: u32 = 4;
const SCR_PROJECTORS_PER_WALL: u32 = 3;
/// Stitch-line padding used in the SCR.
const SCR_PAD_PIXELS: u32 = 10;

impl SceneManager {
    /// A single thumbnail display of `width_px` × `height_px`, calculated.
    pub fn single_display(width_px: u32, height_px: u32) -> Result<Self, SceneError> {
        let mut scene = Self::new();
        let group = scene.add_group("display");
        scene.add_display(group, width_px, height_px, 0, 0, DisplayRole::Thumbnail)?;
        scene.calculate_scene()?;
        Ok(scene)
    }

    /// The SCR: four walls of three 1024×768 projectors, wrapping around the
    /// room, with 10 pixels of stitch-line padding. Calculated.
    pub fn scr_wall() -> Result<Self, SceneError> {
        let mut scene = Self::new();
        scene.set_padding(Padding::uniform(SCR_PAD_PIXELS));
        scene.set_toroidal(true);

        let (width, height) = SCR_PROJECTOR;
        for wall in 0..SCR_WALLS {
            let group = scene.add_group(format!("wall {}", wall + 1));
            for projector in 0..SCR_PROJECTORS_PER_WALL {
                let x = (wall * SCR_PROJECTORS_PER_WALL + projector) * width;
                scene.add_display(group, width, height, x, 0, DisplayRole::Thumbnail)?;
            }
        }
        scene.calculate_scene()?;
        Ok(scene)
    }

    /// The tele-immersion rig: one 3840×2160 display. Calculated.
    pub fn tele_immersion() -> Result<Self, SceneError> {
        let mut scene = Self::new();
        let group = scene.add_group("wall 1");
        scene.add_display(group, 1920 * 2, 1080 * 2, 0, 0, DisplayRole::Thumbnail)?;
        scene.calculate_scene()?;
        Ok(scene)
    }
}

#[cfg(feature = "serde")]
pub use config::{DisplayConfig, GroupConfig, VenueConfig, VenuePreset};

#[cfg(feature = "serde")]
mod config {
    use serde::{Deserialize, Serialize};
    use tracing::debug;

    use crate::{DisplayRole, Padding, SceneError, SceneManager};

    /// Named venue topologies.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum VenuePreset {
        /// One display sized by [`VenueConfig::width`] / [`VenueConfig::height`].
        #[default]
        Single,
        /// See [`SceneManager::scr_wall`].
        Scr,
        /// See [`SceneManager::tele_immersion`].
        TeleImmersion,
        /// Built from [`VenueConfig::groups`].
        Custom,
    }

    /// One display in a custom venue.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DisplayConfig {
        /// Width in pixels.
        pub width: u32,
        /// Height in pixels.
        pub height: u32,
        /// Canvas x origin in pixels.
        #[serde(default)]
        pub x: u32,
        /// Canvas y origin in pixels.
        #[serde(default)]
        pub y: u32,
        /// Display role.
        #[serde(default)]
        pub role: DisplayRole,
    }

    /// One display group in a custom venue.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct GroupConfig {
        /// Group name.
        pub name: String,
        /// Displays, left to right.
        #[serde(default)]
        pub displays: Vec<DisplayConfig>,
    }

    /// Serializable description of a venue.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct VenueConfig {
        /// Which topology to build.
        pub preset: VenuePreset,
        /// Display width for [`VenuePreset::Single`].
        pub width: u32,
        /// Display height for [`VenuePreset::Single`].
        pub height: u32,
        /// Stitch-line padding per display edge (custom venues).
        pub pad_pixels: u32,
        /// Whether padding applies (custom venues).
        pub pad_for_boundaries: bool,
        /// Whether the horizontal extent wraps (custom venues).
        pub toroidal: bool,
        /// Display groups (custom venues).
        pub groups: Vec<GroupConfig>,
    }

    impl Default for VenueConfig {
        fn default() -> Self {
            Self {
                preset: VenuePreset::Single,
                width: 1920,
                height: 1080,
                pad_pixels: 0,
                pad_for_boundaries: false,
                toroidal: false,
                groups: Vec::new(),
            }
        }
    }

    impl SceneManager {
        /// Builds and calculates the scene described by `config`.
        pub fn from_config(config: &VenueConfig) -> Result<Self, SceneError> {
            debug!(preset = ?config.preset, "building venue");
            match config.preset {
                VenuePreset::Single => Self::single_display(config.width, config.height),
                VenuePreset::Scr => Self::scr_wall(),
                VenuePreset::TeleImmersion => Self::tele_immersion(),
                VenuePreset::Custom => {
                    let mut scene = Self::new();
                    scene.set_padding(Padding {
                        pixels: config.pad_pixels,
                        enabled: config.pad_for_boundaries,
                    });
                    scene.set_toroidal(config.toroidal);
                    for group_config in &config.groups {
                        let group = scene.add_group(group_config.name.clone());
                        for d in &group_config.displays {
                            scene.add_display(group, d.width, d.height, d.x, d.y, d.role)?;
                        }
                    }
                    scene.calculate_scene()?;
                    Ok(scene)
                }
            }
        }
    }
}
