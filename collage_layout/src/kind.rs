// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// The built-in layout strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayoutKind {
    /// [`SimpleSingleLayoutManager`](crate::SimpleSingleLayoutManager).
    #[default]
    SimpleSingle,
    /// [`SimpleDoubleLayoutManager`](crate::SimpleDoubleLayoutManager).
    SimpleDouble,
    /// [`SmartSingleLayoutManager`](crate::SmartSingleLayoutManager).
    SmartSingle,
    /// [`RandomLayoutManager`](crate::RandomLayoutManager).
    Random,
    /// [`FillRoomLayoutManager`](crate::FillRoomLayoutManager).
    FillRoom,
}

impl LayoutKind {
    /// Every kind, in hotkey order.
    pub const ALL: [Self; 5] = [
        Self::SimpleSingle,
        Self::SimpleDouble,
        Self::SmartSingle,
        Self::Random,
        Self::FillRoom,
    ];

    /// Kind by zero-based index; anything unknown is [`LayoutKind::SimpleSingle`].
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .unwrap_or_default()
    }

    /// Kind bound to the number keys `'1'` through `'5'`.
    #[must_use]
    pub fn from_hotkey(key: char) -> Option<Self> {
        let digit = key.to_digit(10)?;
        let index = usize::try_from(digit).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// The snake_case name used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SimpleSingle => "simple_single",
            Self::SimpleDouble => "simple_double",
            Self::SmartSingle => "smart_single",
            Self::Random => "random",
            Self::FillRoom => "fill_room",
        }
    }

    /// Returns `true` if the strategy reads scene geometry.
    #[must_use]
    pub const fn uses_scene(self) -> bool {
        matches!(self, Self::SmartSingle)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`LayoutKind`] name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout `{0}`, expected one of simple_single, simple_double, smart_single, random, fill_room")]
pub struct ParseLayoutKindError(pub String);

impl FromStr for LayoutKind {
    type Err = ParseLayoutKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ParseLayoutKindError(s.to_owned()))
    }
}
