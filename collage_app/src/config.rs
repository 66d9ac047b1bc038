// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML configuration for a collage session.
//!
//! Every section has defaults, so an empty file (or no file) describes a single
//! 1920×1080 display laid out as one row.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use collage_layout::{LayoutKind, ViewExtent};
use collage_scene::{SceneError, SceneManager, VenueConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Top-level configuration document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window the collage is rendered into.
    pub view: ViewConfig,
    /// Initial layout strategy.
    pub layout: LayoutConfig,
    /// Display topology.
    pub venue: VenueConfig,
}

/// Window size in pixels. Unset dimensions follow the venue's total size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Window width in pixels.
    pub window_width: Option<u32>,
    /// Window height in pixels.
    pub window_height: Option<u32>,
}

/// Layout selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Strategy active at startup.
    pub strategy: LayoutKind,
    /// Seed for the random strategy; unseeded when absent.
    pub random_seed: Option<u64>,
}

impl Config {
    /// Reads and parses the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!(path = %path.display(), "configuration loaded");
        debug!(?config, "configuration");
        Ok(config)
    }

    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid collage configuration")
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Builds and calculates the configured venue.
    pub fn build_scene(&self) -> Result<SceneManager, SceneError> {
        SceneManager::from_config(&self.venue)
    }

    /// Window size in pixels for `scene`, falling back to the scene's total
    /// size for unset dimensions.
    pub fn window_size(&self, scene: &SceneManager) -> Result<(u32, u32), SceneError> {
        let metrics = scene.require_calculated()?;
        Ok((
            self.view
                .window_width
                .unwrap_or(metrics.total_display_width),
            self.view
                .window_height
                .unwrap_or(metrics.total_display_height),
        ))
    }

    /// View extent for `scene`.
    pub fn view_extent(&self, scene: &SceneManager) -> Result<ViewExtent, SceneError> {
        let (width, height) = self.window_size(scene)?;
        Ok(ViewExtent::from_window(width, height))
    }
}

#[cfg(test)]
mod tests {
    use collage_layout::LayoutKind;
    use collage_scene::VenuePreset;

    use super::Config;

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn default_round_trips_through_toml() {
        let mut config = Config::default();
        config.layout.random_seed = Some(3);
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn sections_parse() {
        let config = Config::from_toml_str(
            r#"
            [view]
            window_width = 1024
            [layout]
            strategy = "fill_room"
            [venue]
            preset = "scr"
            "#,
        )
        .unwrap();
        assert_eq!(config.layout.strategy, LayoutKind::FillRoom);
        assert_eq!(config.venue.preset, VenuePreset::Scr);

        let scene = config.build_scene().unwrap();
        assert_eq!(config.window_size(&scene), Ok((1024, 768)));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = Config::from_toml_str("[layout]\nstrategy = \"spiral\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("spiral"), "{err:#}");
    }
}
