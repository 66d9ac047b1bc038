// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::display::{DisplayId, DisplayRole, Padding, SceneDisplay};
use crate::SceneError;

/// A contiguous run of displays acting as one logical surface, such as one
/// wall of projectors.
///
/// Displays are kept in insertion order. The group's bounds run from the first
/// display's origin to the last display's thru coordinates, so displays are
/// expected to be added left to right (or top to bottom).
#[derive(Clone, Debug, PartialEq)]
pub struct SceneDisplayGroup {
    name: String,
    displays: Vec<SceneDisplay>,
    x_origin: u32,
    y_origin: u32,
    x_thru: u32,
    y_thru: u32,
}

impl SceneDisplayGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            displays: Vec::new(),
            x_origin: 0,
            y_origin: 0,
            x_thru: 0,
            y_thru: 0,
        }
    }

    /// Display name of the group.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the group.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Displays in insertion order.
    #[must_use]
    pub fn displays(&self) -> &[SceneDisplay] {
        &self.displays
    }

    /// Number of displays in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.displays.len()
    }

    /// Returns `true` if the group has no displays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    /// Horizontal origin of the first display.
    #[must_use]
    pub fn x_origin(&self) -> u32 {
        self.x_origin
    }

    /// Vertical origin of the first display.
    #[must_use]
    pub fn y_origin(&self) -> u32 {
        self.y_origin
    }

    /// Last horizontal pixel of the last display.
    #[must_use]
    pub fn x_thru(&self) -> u32 {
        self.x_thru
    }

    /// Last vertical pixel of the last display.
    #[must_use]
    pub fn y_thru(&self) -> u32 {
        self.y_thru
    }

    pub(crate) fn push(&mut self, display: SceneDisplay) -> usize {
        self.displays.push(display);
        self.displays.len() - 1
    }

    pub(crate) fn display_mut(&mut self, index: usize) -> Option<&mut SceneDisplay> {
        self.displays.get_mut(index)
    }

    /// Assigns `role` to every display in the group.
    pub(crate) fn set_role(&mut self, role: DisplayRole) {
        for display in &mut self.displays {
            display.set_role(role);
        }
    }

    pub(crate) fn calculate(&mut self, group: usize, padding: Padding) -> Result<(), SceneError> {
        if self.displays.is_empty() {
            return Err(SceneError::EmptyGroup {
                group,
                name: self.name.clone(),
            });
        }

        for (index, display) in self.displays.iter_mut().enumerate() {
            display.calculate(DisplayId::new(group, index), padding)?;
        }

        if let (Some(first), Some(last)) = (self.displays.first(), self.displays.last()) {
            self.x_origin = first.x_origin();
            self.y_origin = first.y_origin();
            self.x_thru = last.x_thru();
            self.y_thru = last.y_thru();
        }
        Ok(())
    }
}
