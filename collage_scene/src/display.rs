// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect};

use crate::SceneError;

/// What a display is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayRole {
    /// Overview surface where many small items are tiled.
    #[default]
    Thumbnail,
    /// Surface used to show a single item large.
    Magnification,
}

impl fmt::Display for DisplayRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Thumbnail => "thumbnail",
            Self::Magnification => "magnification",
        })
    }
}

/// Position of a display in scene order: group index, then display index
/// within that group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayId {
    /// Index of the owning display group.
    pub group: usize,
    /// Index of the display within its group.
    pub display: usize,
}

impl DisplayId {
    /// Creates a display id.
    #[must_use]
    pub const fn new(group: usize, display: usize) -> Self {
        Self { group, display }
    }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.display)
    }
}

/// Stitch-line padding applied symmetrically to every display edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Padding {
    /// Pixels reserved between neighbouring displays.
    pub pixels: u32,
    /// Whether the padding is applied at all.
    pub enabled: bool,
}

impl Padding {
    /// No padding.
    pub const NONE: Self = Self {
        pixels: 0,
        enabled: false,
    };

    /// Padding of `pixels` on each edge, enabled.
    #[must_use]
    pub const fn uniform(pixels: u32) -> Self {
        Self {
            pixels,
            enabled: true,
        }
    }

    /// Pixels removed from each edge of a display.
    #[must_use]
    pub const fn per_edge(self) -> u32 {
        if self.enabled { self.pixels } else { 0 }
    }
}

/// One physical rectangular display surface, such as a single projector in a
/// wall.
///
/// Origins are pixel offsets within the full multi-display canvas. The
/// `*_thru` coordinates (the last pixel covered) are derived by
/// [`SceneManager::calculate_scene`](crate::SceneManager::calculate_scene).
#[derive(Clone, Debug, PartialEq)]
pub struct SceneDisplay {
    width_px: u32,
    height_px: u32,
    x_origin: u32,
    y_origin: u32,
    role: DisplayRole,
    x_thru: u32,
    y_thru: u32,
}

impl SceneDisplay {
    /// Creates a display of `width_px` × `height_px` at the given canvas origin.
    #[must_use]
    pub const fn new(
        width_px: u32,
        height_px: u32,
        x_origin: u32,
        y_origin: u32,
        role: DisplayRole,
    ) -> Self {
        Self {
            width_px,
            height_px,
            x_origin,
            y_origin,
            role,
            x_thru: 0,
            y_thru: 0,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Height in pixels.
    #[must_use]
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// Horizontal pixel offset within the canvas.
    #[must_use]
    pub fn x_origin(&self) -> u32 {
        self.x_origin
    }

    /// Vertical pixel offset within the canvas.
    #[must_use]
    pub fn y_origin(&self) -> u32 {
        self.y_origin
    }

    /// Last horizontal pixel covered by this display.
    #[must_use]
    pub fn x_thru(&self) -> u32 {
        self.x_thru
    }

    /// Last vertical pixel covered by this display.
    #[must_use]
    pub fn y_thru(&self) -> u32 {
        self.y_thru
    }

    /// Current role.
    #[must_use]
    pub fn role(&self) -> DisplayRole {
        self.role
    }

    pub(crate) fn set_role(&mut self, role: DisplayRole) {
        self.role = role;
    }

    /// Width left after removing `padding` from both edges.
    #[must_use]
    pub fn available_width_px(&self, padding: Padding) -> u32 {
        self.width_px
            .saturating_sub(padding.per_edge().saturating_mul(2))
    }

    /// Height left after removing `padding` from both edges.
    #[must_use]
    pub fn available_height_px(&self, padding: Padding) -> u32 {
        self.height_px
            .saturating_sub(padding.per_edge().saturating_mul(2))
    }

    /// Canvas origin shifted inward by `padding`.
    #[must_use]
    pub fn padded_origin(&self, padding: Padding) -> Point {
        let pad = f64::from(padding.per_edge());
        Point::new(
            f64::from(self.x_origin) + pad,
            f64::from(self.y_origin) + pad,
        )
    }

    /// Pixel center of the display in canvas coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// Full pixel rectangle covered by the display.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x_origin),
            f64::from(self.y_origin),
            f64::from(self.x_origin) + f64::from(self.width_px),
            f64::from(self.y_origin) + f64::from(self.height_px),
        )
    }

    /// Pixel rectangle left after removing `padding` from every edge.
    #[must_use]
    pub fn available_rect(&self, padding: Padding) -> Rect {
        let origin = self.padded_origin(padding);
        Rect::new(
            origin.x,
            origin.y,
            origin.x + f64::from(self.available_width_px(padding)),
            origin.y + f64::from(self.available_height_px(padding)),
        )
    }

    /// Returns `true` if the canvas pixel `point` falls on this display.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let rect = self.rect();
        point.x >= rect.x0 && point.x < rect.x1 && point.y >= rect.y0 && point.y < rect.y1
    }

    /// Derives the thru coordinates, rejecting degenerate displays.
    pub(crate) fn calculate(&mut self, id: DisplayId, padding: Padding) -> Result<(), SceneError> {
        if self.width_px == 0 || self.height_px == 0 {
            return Err(SceneError::ZeroSizeDisplay {
                id,
                width: self.width_px,
                height: self.height_px,
            });
        }
        let pad = padding.per_edge();
        match pad.checked_mul(2) {
            Some(both) if both < self.width_px && both < self.height_px => {}
            _ => return Err(SceneError::PaddingExceedsDisplay { id, pad }),
        }
        // The exclusive end must fit, so `thru + 1` never overflows later.
        let (Some(x_end), Some(y_end)) = (
            self.x_origin.checked_add(self.width_px),
            self.y_origin.checked_add(self.height_px),
        ) else {
            return Err(SceneError::DisplayOutOfRange { id });
        };
        self.x_thru = x_end - 1;
        self.y_thru = y_end - 1;
        Ok(())
    }
}
