// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collage Layout: strategies that arrange collage items in view space.
//!
//! A strategy implements [`LayoutManager`]. It receives the items as a slice
//! (so it can move and scale them but never reorder, add or remove them), a
//! [`LayoutEnv`] holding the scene and the view extent, and a `start` index:
//! only items from `start` on are placed, which lets a freshly loaded batch be
//! appended without disturbing what is already on screen.
//!
//! The built-in strategies:
//! - [`SimpleSingleLayoutManager`]: one row at mid-height, scales untouched.
//! - [`SimpleDoubleLayoutManager`]: two rows, stacking pairs of short items.
//! - [`SmartSingleLayoutManager`]: fits items onto thumbnail displays, one,
//!   two or four per display.
//! - [`RandomLayoutManager`]: equal-area scatter, seedable.
//! - [`FillRoomLayoutManager`]: one row rescaled to span the whole view.
//!
//! [`LayoutFactory`] maps a [`LayoutKind`] to a strategy, owns the active one,
//! and can fall back to the single row when a scene-driven strategy fails.
//!
//! ## Minimal example
//!
//! ```rust
//! use collage_items::{ItemRegistry, ItemSpec};
//! use collage_layout::{LayoutEnv, LayoutFactory, LayoutKind, ViewExtent};
//! use collage_scene::SceneManager;
//!
//! let scene = SceneManager::single_display(1920, 1080)?;
//! let mut registry = ItemRegistry::new();
//! for _ in 0..3 {
//!     registry.insert(ItemSpec::new(400.0, 300.0));
//! }
//!
//! let mut factory = LayoutFactory::new();
//! factory.set_layout_manager(LayoutKind::FillRoom);
//! let env = LayoutEnv::new(&scene, ViewExtent::from_window(1920, 1080));
//! factory.layout(registry.items_mut(), &env, 0)?;
//!
//! let last = &registry.items()[2];
//! assert!((last.extent().x1 + 0.025 - env.view.width).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Units
//!
//! View space is `view.width` wide and `view.height` (normally `1.0`) high. An
//! item's scale is its height in those units. Gaps use [`X_BORDER`] and
//! [`Y_BORDER`].

mod env;
mod error;
mod factory;
mod kind;
mod manager;
mod strategies;

pub use env::{LayoutEnv, ViewExtent};
pub use error::LayoutError;
pub use factory::LayoutFactory;
pub use kind::{LayoutKind, ParseLayoutKindError};
pub use manager::LayoutManager;
pub use strategies::{
    FillRoomLayoutManager, RandomLayoutManager, SimpleDoubleLayoutManager,
    SimpleSingleLayoutManager, SmartSingleLayoutManager, fitting_scale, images_per_display,
};

/// Horizontal gap between neighbouring items, in view units.
pub const X_BORDER: f64 = 0.05;

/// Vertical gap unit for stacked rows, in view units.
pub const Y_BORDER: f64 = 0.01;
