// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collage Items: the pictures and video frames shown on a collage, and the
//! ordered registry that holds them.
//!
//! A [`CollageItem`] is a rectangle in a normalized view space whose height is
//! `1.0`. Its `position` is its center and its `scale` is its height; width
//! follows from the fixed aspect ratio of the source media.
//!
//! The [`ItemRegistry`] owns items in render order (later items draw on top)
//! and tracks the **current** subset, the items the user has selected:
//! - selecting an item moves it to the top,
//! - direct manipulation (drag, scroll, fit, native resolution, stereo depth)
//!   applies to every current item,
//! - two current items can be fused into a left/right stereo pair,
//! - the render order can be sorted by any [`SortKey`].
//!
//! Layout strategies receive [`ItemRegistry::items_mut`], a slice, so they can
//! move and scale items but never add, remove or reorder them.
//!
//! ## Minimal example
//!
//! ```rust
//! use collage_items::{ItemRegistry, ItemSpec};
//! use kurbo::Point;
//!
//! let mut registry = ItemRegistry::new();
//! let a = registry.insert(ItemSpec::new(640.0, 480.0).with_path("a.jpg"));
//! let b = registry.insert(ItemSpec::new(480.0, 640.0).with_path("b.jpg"));
//!
//! // Selecting `a` brings it to the top.
//! registry.select(0)?;
//! assert_eq!(registry.items()[1].id(), a);
//! assert_eq!(registry.selected(), &[a]);
//!
//! // Clicking empty space clears the selection.
//! assert_eq!(registry.click(Point::new(50.0, 0.5), false, 100.0, false), None);
//! assert!(registry.selected().is_empty());
//! # let _ = b;
//! # Ok::<(), collage_items::RegistryError>(())
//! ```

mod item;
mod metadata;
mod registry;
mod selection;

pub use item::{CollageItem, ItemId, ItemSpec, VIEW_MID_HEIGHT};
pub use metadata::{ItemMetadata, ParseSortKeyError, SortKey};
pub use registry::{DepthDirection, ItemRegistry, RegistryError};
pub use selection::CurrentSet;
