// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::display::{DisplayId, DisplayRole};

/// Configuration errors raised by an invalid or incomplete scene topology.
///
/// None of these are recoverable within the scene instance that produced them:
/// the caller either fixes the topology or falls back to a layout strategy that
/// does not consult scene geometry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// The scene has no display groups at all.
    #[error("no display groups in scene")]
    NoGroups,
    /// A display group was calculated without any displays in it.
    #[error("display group {group} (`{name}`) has no displays")]
    EmptyGroup {
        /// Index of the offending group.
        group: usize,
        /// Name of the offending group.
        name: String,
    },
    /// A display has zero width or zero height.
    #[error("display {id} has zero size ({width}x{height} pixels)")]
    ZeroSizeDisplay {
        /// The offending display.
        id: DisplayId,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// Boundary padding on both edges leaves no usable pixels on a display.
    #[error("padding of {pad} pixels per edge leaves no room on display {id}")]
    PaddingExceedsDisplay {
        /// The offending display.
        id: DisplayId,
        /// Padding per edge in pixels.
        pad: u32,
    },
    /// A display extends past the largest representable canvas coordinate.
    #[error("display {id} extends past the end of the canvas")]
    DisplayOutOfRange {
        /// The offending display.
        id: DisplayId,
    },
    /// A calculation-dependent query was made before `calculate_scene`.
    #[error("scene was not calculated; call `calculate_scene` after building the topology")]
    NotCalculated,
    /// No display in the scene carries the required role.
    #[error("no {0} display in scene")]
    NoDisplayWithRole(DisplayRole),
    /// A group index does not exist.
    #[error("unknown display group {0}")]
    UnknownGroup(usize),
    /// A display id does not exist.
    #[error("unknown display {0}")]
    UnknownDisplay(DisplayId),
}
