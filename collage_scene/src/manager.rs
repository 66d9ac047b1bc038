// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use tracing::{debug, info};

use crate::display::{DisplayId, DisplayRole, Padding, SceneDisplay};
use crate::group::SceneDisplayGroup;
use crate::SceneError;

/// Dimensions derived by [`SceneManager::calculate_scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneMetrics {
    /// Usable width of a single display, taken from the first display.
    pub available_single_display_width: u32,
    /// Usable height of a single display, taken from the first display.
    pub available_single_display_height: u32,
    /// Width of the canvas spanning every display.
    pub total_display_width: u32,
    /// Height of the canvas spanning every display.
    pub total_display_height: u32,
}

/// Describes the physical display environment of a venue.
///
/// A scene is built once with a fixed topology ([`add_group`](Self::add_group),
/// [`add_display`](Self::add_display)) and then calculated with
/// [`calculate_scene`](Self::calculate_scene). Queries that depend on derived
/// dimensions return [`SceneError::NotCalculated`] until that has happened.
/// Changing the topology afterwards discards the derived state; reassigning
/// display roles does not.
///
/// Single-display dimensions are read from the first display of the first
/// group: displays are assumed to share one size.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneManager {
    groups: Vec<SceneDisplayGroup>,
    padding: Padding,
    toroidal: bool,
    metrics: Option<SceneMetrics>,
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneManager {
    /// Creates an empty, uncalculated scene without padding or wraparound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            padding: Padding::NONE,
            toroidal: false,
            metrics: None,
        }
    }

    /// Sets the stitch-line padding.
    pub fn set_padding(&mut self, padding: Padding) {
        if self.padding != padding {
            self.padding = padding;
            self.metrics = None;
        }
    }

    /// Sets whether the horizontal extent wraps around.
    pub fn set_toroidal(&mut self, toroidal: bool) {
        self.toroidal = toroidal;
    }

    /// Current padding.
    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Pixels reserved between displays.
    #[must_use]
    pub fn pad_pixels_between_displays(&self) -> u32 {
        self.padding.pixels
    }

    /// Whether padding is applied to display boundaries.
    #[must_use]
    pub fn is_pad_for_boundaries(&self) -> bool {
        self.padding.enabled
    }

    /// Whether the horizontal extent wraps around.
    #[must_use]
    pub fn is_toroidal(&self) -> bool {
        self.toroidal
    }

    /// Appends an empty display group and returns its index.
    pub fn add_group(&mut self, name: impl Into<String>) -> usize {
        self.groups.push(SceneDisplayGroup::new(name));
        self.metrics = None;
        self.groups.len() - 1
    }

    /// Appends a display to `group`.
    ///
    /// Displays are not checked against each other; avoiding overlap is the
    /// caller's responsibility.
    pub fn add_display(
        &mut self,
        group: usize,
        width_px: u32,
        height_px: u32,
        x_origin: u32,
        y_origin: u32,
        role: DisplayRole,
    ) -> Result<DisplayId, SceneError> {
        let target = self
            .groups
            .get_mut(group)
            .ok_or(SceneError::UnknownGroup(group))?;
        let display = target.push(SceneDisplay::new(
            width_px, height_px, x_origin, y_origin, role,
        ));
        self.metrics = None;
        Ok(DisplayId::new(group, display))
    }

    /// Display groups in scene order.
    #[must_use]
    pub fn groups(&self) -> &[SceneDisplayGroup] {
        &self.groups
    }

    /// Iterates every display in scene order: group by group, display by
    /// display, in insertion order.
    pub fn displays(&self) -> impl Iterator<Item = (DisplayId, &SceneDisplay)> + '_ {
        self.groups.iter().enumerate().flat_map(|(g, group)| {
            group
                .displays()
                .iter()
                .enumerate()
                .map(move |(d, display)| (DisplayId::new(g, d), display))
        })
    }

    /// Looks up a display.
    pub fn display(&self, id: DisplayId) -> Result<&SceneDisplay, SceneError> {
        self.groups
            .get(id.group)
            .and_then(|group| group.displays().get(id.display))
            .ok_or(SceneError::UnknownDisplay(id))
    }

    /// Computes the derived dimensions of every display, group, and of the
    /// scene as a whole.
    ///
    /// The total canvas is the extent of all displays measured from the canvas
    /// origin `(0, 0)`. Running this twice on the same topology yields the same
    /// metrics.
    pub fn calculate_scene(&mut self) -> Result<SceneMetrics, SceneError> {
        if self.groups.is_empty() {
            return Err(SceneError::NoGroups);
        }

        let padding = self.padding;
        for (index, group) in self.groups.iter_mut().enumerate() {
            group.calculate(index, padding)?;
        }

        let first = self
            .groups
            .first()
            .and_then(|group| group.displays().first())
            .ok_or(SceneError::NoGroups)?;
        let available_single_display_width = first.available_width_px(padding);
        let available_single_display_height = first.available_height_px(padding);

        let (mut x_thru, mut y_thru) = (0_u32, 0_u32);
        for group in &self.groups {
            x_thru = x_thru.max(group.x_thru());
            y_thru = y_thru.max(group.y_thru());
            for display in group.displays() {
                x_thru = x_thru.max(display.x_thru());
                y_thru = y_thru.max(display.y_thru());
            }
        }

        // Every thru coordinate is below `u32::MAX`.
        let metrics = SceneMetrics {
            available_single_display_width,
            available_single_display_height,
            total_display_width: x_thru + 1,
            total_display_height: y_thru + 1,
        };
        info!(
            groups = self.groups.len(),
            displays = self.displays().count(),
            total_width = metrics.total_display_width,
            total_height = metrics.total_display_height,
            "scene calculated"
        );
        self.metrics = Some(metrics);
        Ok(metrics)
    }

    /// Returns `true` once [`calculate_scene`](Self::calculate_scene) has
    /// succeeded for the current topology.
    #[must_use]
    pub fn is_calculated(&self) -> bool {
        self.metrics.is_some()
    }

    /// Derived metrics, or [`SceneError::NotCalculated`].
    pub fn require_calculated(&self) -> Result<&SceneMetrics, SceneError> {
        self.metrics.as_ref().ok_or(SceneError::NotCalculated)
    }

    /// Usable width of a single display.
    pub fn available_single_display_width(&self) -> Result<u32, SceneError> {
        Ok(self.require_calculated()?.available_single_display_width)
    }

    /// Usable height of a single display.
    pub fn available_single_display_height(&self) -> Result<u32, SceneError> {
        Ok(self.require_calculated()?.available_single_display_height)
    }

    /// Width of the canvas spanning every display.
    pub fn total_display_width(&self) -> Result<u32, SceneError> {
        Ok(self.require_calculated()?.total_display_width)
    }

    /// Height of the canvas spanning every display.
    pub fn total_display_height(&self) -> Result<u32, SceneError> {
        Ok(self.require_calculated()?.total_display_height)
    }

    /// Canvas size in pixels.
    pub fn total_size(&self) -> Result<Size, SceneError> {
        let metrics = self.require_calculated()?;
        Ok(Size::new(
            f64::from(metrics.total_display_width),
            f64::from(metrics.total_display_height),
        ))
    }

    /// Counts displays carrying `role` across all groups.
    #[must_use]
    pub fn number_of_displays_by_role(&self, role: DisplayRole) -> usize {
        self.displays()
            .filter(|(_, display)| display.role() == role)
            .count()
    }

    /// First display in scene order carrying `role`.
    pub fn first_display_with_role(&self, role: DisplayRole) -> Result<DisplayId, SceneError> {
        self.displays()
            .find(|(_, display)| display.role() == role)
            .map(|(id, _)| id)
            .ok_or(SceneError::NoDisplayWithRole(role))
    }

    /// Next display after `after` in scene order carrying `role`, wrapping from
    /// the end of one group into the next. Returns `None` once the scene is
    /// exhausted.
    #[must_use]
    pub fn next_display_with_role(&self, after: DisplayId, role: DisplayRole) -> Option<DisplayId> {
        self.displays()
            .skip_while(|(id, _)| *id <= after)
            .find(|(_, display)| display.role() == role)
            .map(|(id, _)| id)
    }

    /// Reassigns the role of one display.
    pub fn set_display_role(&mut self, id: DisplayId, role: DisplayRole) -> Result<(), SceneError> {
        let display = self
            .groups
            .get_mut(id.group)
            .and_then(|group| group.display_mut(id.display))
            .ok_or(SceneError::UnknownDisplay(id))?;
        display.set_role(role);
        debug!(%id, %role, "display role reassigned");
        Ok(())
    }

    /// Reassigns the role of every display in a group.
    pub fn set_group_role(&mut self, group: usize, role: DisplayRole) -> Result<(), SceneError> {
        self.groups
            .get_mut(group)
            .ok_or(SceneError::UnknownGroup(group))?
            .set_role(role);
        debug!(group, %role, "group role reassigned");
        Ok(())
    }

    /// Display origin divided by the total scene dimensions.
    pub fn origin_in_scale(&self, id: DisplayId) -> Result<Point, SceneError> {
        let total = self.total_size()?;
        let display = self.display(id)?;
        Ok(Point::new(
            f64::from(display.x_origin()) / total.width,
            f64::from(display.y_origin()) / total.height,
        ))
    }

    /// Padded display origin divided by the total scene dimensions.
    pub fn padded_origin_in_scale(&self, id: DisplayId) -> Result<Point, SceneError> {
        let total = self.total_size()?;
        let origin = self.display(id)?.padded_origin(self.padding);
        Ok(Point::new(origin.x / total.width, origin.y / total.height))
    }

    /// Role of the display containing the canvas pixel `centroid`.
    #[must_use]
    pub fn role_by_centroid(&self, centroid: Point) -> Option<DisplayRole> {
        self.displays()
            .find(|(_, display)| display.contains(centroid))
            .map(|(_, display)| display.role())
    }

    /// Role of the display overlapping `rect` (canvas pixels) the most.
    ///
    /// Ties go to the display earliest in scene order.
    #[must_use]
    pub fn role_by_collision(&self, rect: Rect) -> Option<DisplayRole> {
        let mut best: Option<(f64, DisplayRole)> = None;
        for (_, display) in self.displays() {
            let overlap = display.rect().intersect(rect).area();
            if overlap > 0.0 && best.is_none_or(|(area, _)| overlap > area) {
                best = Some((overlap, display.role()));
            }
        }
        best.map(|(_, role)| role)
    }
}
