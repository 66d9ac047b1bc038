// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition root: one venue, one registry, one active layout.

use collage_items::{ItemId, ItemRegistry, ItemSpec, RegistryError};
use collage_layout::{LayoutEnv, LayoutError, LayoutFactory, LayoutKind, ViewExtent};
use collage_scene::{SceneError, SceneManager};
use tracing::{debug, info};

use crate::{Command, Config};

/// Errors from handling a [`Command`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// The registry rejected the command.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Laying out after the command failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// A running collage: the venue, the items on it and the active strategy.
#[derive(Debug)]
pub struct CollageSession {
    registry: ItemRegistry,
    scene: SceneManager,
    factory: LayoutFactory,
    view: ViewExtent,
    window_height_px: u32,
    show_titles: bool,
}

impl CollageSession {
    /// Starts an empty session on `scene`.
    ///
    /// `window_height_px` maps native pixels to view units for
    /// [`Command::NativeResolution`].
    #[must_use]
    pub fn new(
        scene: SceneManager,
        view: ViewExtent,
        window_height_px: u32,
        layout: LayoutKind,
        seed: Option<u64>,
    ) -> Self {
        let mut factory = LayoutFactory::new();
        factory.set_seed(seed);
        factory.set_layout_manager(layout);
        Self {
            registry: ItemRegistry::new(),
            scene,
            factory,
            view,
            window_height_px,
            show_titles: false,
        }
    }

    /// Builds the venue described by `config` and starts an empty session on it.
    pub fn from_config(config: &Config) -> Result<Self, SceneError> {
        let scene = config.build_scene()?;
        let (width, height) = config.window_size(&scene)?;
        info!(
            preset = ?config.venue.preset,
            width,
            height,
            layout = %config.layout.strategy,
            "starting session"
        );
        Ok(Self::new(
            scene,
            ViewExtent::from_window(width, height),
            height,
            config.layout.strategy,
            config.layout.random_seed,
        ))
    }

    /// The items.
    #[must_use]
    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    /// The venue.
    #[must_use]
    pub fn scene(&self) -> &SceneManager {
        &self.scene
    }

    /// The view extent layouts target.
    #[must_use]
    pub fn view(&self) -> ViewExtent {
        self.view
    }

    /// The active strategy.
    #[must_use]
    pub fn active_layout(&self) -> LayoutKind {
        self.factory.active_kind().unwrap_or_default()
    }

    /// Whether item titles are shown.
    #[must_use]
    pub fn show_titles(&self) -> bool {
        self.show_titles
    }

    /// Adds a batch of items and lays out only the new ones.
    ///
    /// On a layout failure the items stay loaded, unplaced.
    pub fn load(
        &mut self,
        batch: impl IntoIterator<Item = ItemSpec>,
    ) -> Result<Vec<ItemId>, LayoutError> {
        let start = self.registry.len();
        let ids: Vec<ItemId> = batch
            .into_iter()
            .map(|spec| self.registry.insert(spec))
            .collect();
        info!(count = ids.len(), start, "loaded items");
        self.layout_from(start)?;
        Ok(ids)
    }

    /// Lays every item out again with the active strategy.
    pub fn relayout(&mut self) -> Result<LayoutKind, LayoutError> {
        self.layout_from(0)
    }

    fn layout_from(&mut self, start: usize) -> Result<LayoutKind, LayoutError> {
        let env = LayoutEnv::new(&self.scene, self.view);
        let used = self
            .factory
            .layout_or_fallback(self.registry.items_mut(), &env, start)?;
        debug!(%used, start, items = self.registry.len(), "layout done");
        Ok(used)
    }

    /// Applies one user command.
    pub fn handle(&mut self, command: Command) -> Result<(), SessionError> {
        debug!(?command, "handling command");
        match command {
            Command::SelectFirst => {
                if !self.registry.is_empty() {
                    self.registry.select_only(0)?;
                }
            }
            Command::DeleteSelected => {
                self.registry.delete_selected();
            }
            Command::ToggleTitles => self.show_titles = !self.show_titles,
            Command::Nudge(delta) | Command::Drag(delta) => {
                self.registry.translate_selected(delta);
                if self.scene.is_toroidal() {
                    self.registry.wrap_selected(self.view.width);
                }
            }
            Command::UseLayout(kind) => {
                self.factory.set_layout_manager(kind);
                self.relayout()?;
            }
            Command::SelectAll => self.registry.select_all(),
            Command::FitToScreen => self.registry.fit_selected_to_screen(),
            Command::NativeResolution => self
                .registry
                .native_resolution_selected(f64::from(self.window_height_px)),
            Command::ToggleStereo => {
                self.registry.toggle_stereo()?;
            }
            Command::StereoDepth(direction) => self.registry.adjust_stereo_depth(direction),
            Command::SortBy(key) => {
                self.registry.sort_by(key);
                self.relayout()?;
            }
            Command::Relayout => {
                self.relayout()?;
            }
            Command::Click { point, ctrl } => {
                self.registry
                    .click(point, ctrl, self.view.width, self.scene.is_toroidal());
            }
            Command::Scroll(steps) => self.registry.scroll_selected(steps),
        }
        Ok(())
    }
}
