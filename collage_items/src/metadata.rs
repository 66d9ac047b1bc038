// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

/// Descriptive information about an item's source media.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemMetadata {
    /// File name without directories or extension.
    pub file_name: String,
    /// Extension without the leading dot, lowercased.
    pub extension: String,
    /// Full source path as given.
    pub path: String,
    /// Display title; defaults to the file name.
    pub title: String,
    /// Capture or modification time in seconds since the Unix epoch.
    pub timestamp: i64,
    /// Position in load order, assigned by the registry.
    pub load_order: u32,
    /// Index of the set the item was loaded with.
    pub set_order: u32,
}

impl ItemMetadata {
    /// Splits `path` into file name and extension. Both `/` and `\` separate
    /// directories.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let (file_name, extension) = match base.rfind('.') {
            Some(dot) if dot > 0 => (&base[..dot], base[dot + 1..].to_ascii_lowercase()),
            _ => (base, String::new()),
        };
        Self {
            file_name: file_name.to_owned(),
            extension,
            path: path.to_owned(),
            title: file_name.to_owned(),
            ..Self::default()
        }
    }

    /// Orders two items by `key`.
    #[must_use]
    pub fn compare(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::FileName => self.file_name.cmp(&other.file_name),
            SortKey::Extension => self.extension.cmp(&other.extension),
            SortKey::Path => self.path.cmp(&other.path),
            SortKey::Timestamp => self.timestamp.cmp(&other.timestamp),
            SortKey::LoadOrder => self.load_order.cmp(&other.load_order),
            SortKey::Title => self.title.cmp(&other.title),
        }
    }
}

/// Metadata field used to reorder the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// [`ItemMetadata::file_name`].
    FileName,
    /// [`ItemMetadata::extension`].
    Extension,
    /// [`ItemMetadata::path`].
    Path,
    /// [`ItemMetadata::timestamp`].
    Timestamp,
    /// [`ItemMetadata::load_order`].
    LoadOrder,
    /// [`ItemMetadata::title`].
    Title,
}

impl SortKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::FileName,
        Self::Extension,
        Self::Path,
        Self::Timestamp,
        Self::LoadOrder,
        Self::Title,
    ];

    /// Lowercase name used in configuration and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FileName => "file_name",
            Self::Extension => "extension",
            Self::Path => "path",
            Self::Timestamp => "timestamp",
            Self::LoadOrder => "load_order",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`SortKey`] name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key `{0}`")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| ParseSortKeyError(s.to_owned()))
    }
}
