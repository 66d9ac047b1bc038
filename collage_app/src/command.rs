// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User commands: hotkeys and pointer gestures.

use collage_items::{DepthDirection, SortKey};
use collage_layout::LayoutKind;
use kurbo::{Point, Vec2};

/// Distance the arrow keys move the selection, in view units.
pub const NUDGE_STEP: f64 = 0.05;

/// One user action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Tab: select only the bottom-most item.
    SelectFirst,
    /// Delete: remove the selection.
    DeleteSelected,
    /// Space: show or hide item titles.
    ToggleTitles,
    /// Arrow keys: move the selection.
    Nudge(Vec2),
    /// `1`–`5`: switch strategy and lay everything out.
    UseLayout(LayoutKind),
    /// `a`: select every item.
    SelectAll,
    /// `f`: fit the selection to the view height.
    FitToScreen,
    /// `n`: show the selection at native resolution.
    NativeResolution,
    /// `s`: pair or swap stereo images.
    ToggleStereo,
    /// `u` / `d`: adjust stereo depth of the selection.
    StereoDepth(DepthDirection),
    /// `p` / `[` / `]`: sort by file name, timestamp or path, then lay out.
    SortBy(SortKey),
    /// `l`: lay everything out again.
    Relayout,
    /// Pointer press at a view-space point.
    Click {
        /// Where, in view units.
        point: Point,
        /// Whether ctrl was held.
        ctrl: bool,
    },
    /// Pointer drag by a view-space delta.
    Drag(Vec2),
    /// Wheel steps; positive shrinks.
    Scroll(i32),
}

/// Error from [`Command::parse_keys`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseKeysError {
    /// A character with no binding.
    #[error("no command bound to key {0:?}")]
    UnknownKey(char),
    /// A `<...>` token that names nothing.
    #[error("unknown key name `<{0}>`")]
    UnknownName(String),
    /// A `<` without its `>`.
    #[error("unterminated key name starting at byte {0}")]
    Unterminated(usize),
}

impl Command {
    /// The command bound to a key character.
    ///
    /// Tab is `'\t'` and Delete is `'\u{7f}'`. Arrow keys have no character;
    /// use [`Command::parse_keys`] with `<left>` and friends.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        if let Some(kind) = LayoutKind::from_hotkey(key) {
            return Some(Self::UseLayout(kind));
        }
        Some(match key {
            '\t' => Self::SelectFirst,
            '\u{7f}' => Self::DeleteSelected,
            ' ' => Self::ToggleTitles,
            'a' => Self::SelectAll,
            'f' => Self::FitToScreen,
            'n' => Self::NativeResolution,
            's' => Self::ToggleStereo,
            'u' => Self::StereoDepth(DepthDirection::Increase),
            'd' => Self::StereoDepth(DepthDirection::Decrease),
            'p' => Self::SortBy(SortKey::FileName),
            '[' => Self::SortBy(SortKey::Timestamp),
            ']' => Self::SortBy(SortKey::Path),
            'l' => Self::Relayout,
            _ => return None,
        })
    }

    /// Parses a key script.
    ///
    /// Plain characters go through [`Command::from_key`]. Named keys and
    /// pointer gestures are written in angle brackets:
    /// - `<tab>`, `<del>`, `<space>`, `<left>`, `<right>`, `<up>`, `<down>`
    /// - `<click:X,Y>` and `<ctrl-click:X,Y>` in view units
    /// - `<drag:DX,DY>` in view units
    /// - `<scroll:N>`
    pub fn parse_keys(keys: &str) -> Result<Vec<Self>, ParseKeysError> {
        let mut commands = Vec::new();
        let mut chars = keys.char_indices();
        while let Some((at, key)) = chars.next() {
            if key != '<' {
                commands.push(Self::from_key(key).ok_or(ParseKeysError::UnknownKey(key))?);
                continue;
            }
            let rest = &keys[at + 1..];
            let end = rest.find('>').ok_or(ParseKeysError::Unterminated(at))?;
            let name = &rest[..end];
            commands.push(Self::from_name(name).ok_or_else(|| ParseKeysError::UnknownName(name.to_owned()))?);
            // Skip the name and the closing bracket.
            for _ in name.chars().chain(['>']) {
                chars.next();
            }
        }
        Ok(commands)
    }

    fn from_name(name: &str) -> Option<Self> {
        let (head, args) = match name.split_once(':') {
            Some((head, args)) => (head, Some(args)),
            None => (name, None),
        };
        let pair = |args: Option<&str>| -> Option<(f64, f64)> {
            let (a, b) = args?.split_once(',')?;
            Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
        };
        Some(match (head.to_ascii_lowercase().as_str(), args) {
            ("tab", None) => Self::SelectFirst,
            ("del" | "delete", None) => Self::DeleteSelected,
            ("space", None) => Self::ToggleTitles,
            ("left", None) => Self::Nudge(Vec2::new(-NUDGE_STEP, 0.0)),
            ("right", None) => Self::Nudge(Vec2::new(NUDGE_STEP, 0.0)),
            ("up", None) => Self::Nudge(Vec2::new(0.0, NUDGE_STEP)),
            ("down", None) => Self::Nudge(Vec2::new(0.0, -NUDGE_STEP)),
            ("click", args) => {
                let (x, y) = pair(args)?;
                Self::Click {
                    point: Point::new(x, y),
                    ctrl: false,
                }
            }
            ("ctrl-click", args) => {
                let (x, y) = pair(args)?;
                Self::Click {
                    point: Point::new(x, y),
                    ctrl: true,
                }
            }
            ("drag", args) => {
                let (dx, dy) = pair(args)?;
                Self::Drag(Vec2::new(dx, dy))
            }
            ("scroll", Some(steps)) => Self::Scroll(steps.trim().parse().ok()?),
            _ => return None,
        })
    }
}
