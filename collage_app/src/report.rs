// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serializable snapshot of a session.

use collage_items::CollageItem;
use collage_layout::LayoutKind;
use collage_scene::toroidal::wrapped_copies;
use serde::Serialize;

use crate::CollageSession;

/// One item as reported.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemReport {
    /// Registry id.
    pub id: u64,
    /// Title, or file name when untitled.
    pub name: String,
    /// Center x in view units.
    pub x: f64,
    /// Center y in view units.
    pub y: f64,
    /// Height in view units.
    pub scale: f64,
    /// Width in view units.
    pub width: f64,
    /// Height in view units.
    pub height: f64,
    /// Whether the item is current.
    pub selected: bool,
    /// Id of the attached right-eye image.
    pub stereo: Option<u64>,
    /// Center x of each extra copy drawn across the seam of a toroidal view.
    pub copies: Vec<f64>,
}

impl From<&CollageItem> for ItemReport {
    fn from(item: &CollageItem) -> Self {
        let meta = item.metadata();
        let name = if meta.title.is_empty() {
            meta.file_name.clone()
        } else {
            meta.title.clone()
        };
        Self {
            id: item.id().0,
            name,
            x: item.position().x,
            y: item.position().y,
            scale: item.scale(),
            width: item.width(),
            height: item.height(),
            selected: item.is_selected(),
            stereo: item.stereo().map(|partner| partner.id().0),
            copies: Vec::new(),
        }
    }
}

/// Session snapshot in render order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// Active strategy.
    pub layout: LayoutKind,
    /// View width in view units.
    pub view_width: f64,
    /// Whether titles are shown.
    pub show_titles: bool,
    /// Items, bottom to top.
    pub items: Vec<ItemReport>,
}

impl CollageSession {
    /// Snapshots the session.
    #[must_use]
    pub fn report(&self) -> Report {
        let toroidal = self.scene().is_toroidal();
        let width = self.view().width;
        Report {
            layout: self.active_layout(),
            view_width: width,
            show_titles: self.show_titles(),
            items: self
                .registry()
                .items()
                .iter()
                .map(|item| {
                    let mut report = ItemReport::from(item);
                    if toroidal {
                        report.copies = wrapped_copies(item.extent(), width)
                            .iter()
                            .skip(1)
                            .map(|copy| copy.center().x)
                            .collect();
                    }
                    report
                })
                .collect(),
        }
    }
}
