// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect, Size, Vec2};

use crate::metadata::ItemMetadata;

/// Vertical center of the view, where rows of items sit.
pub const VIEW_MID_HEIGHT: f64 = 0.5;

/// Stereo depth change per step.
const STEREO_DEPTH_STEP: f64 = 0.001;

/// Stable identifier of an item within its registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the media collaborator knows about a freshly loaded item.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSpec {
    /// Native pixel size of the image or video frame.
    pub native_size: Size,
    /// Descriptive metadata; `load_order` is overwritten by the registry.
    pub metadata: ItemMetadata,
}

impl ItemSpec {
    /// A spec for media of `width` × `height` pixels with empty metadata.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            native_size: Size::new(width, height),
            metadata: ItemMetadata::default(),
        }
    }

    /// Attaches metadata derived from `path`.
    #[must_use]
    pub fn with_path(mut self, path: &str) -> Self {
        let load_order = self.metadata.load_order;
        self.metadata = ItemMetadata::from_path(path);
        self.metadata.load_order = load_order;
        self
    }

    /// Replaces the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: ItemMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A rectangular, positionable, scalable visual entity backed by an image or a
/// video frame.
///
/// Geometry lives in view space, where the view is `view_width` wide and
/// `1.0` high:
/// - `position` is the item's center,
/// - `scale` is the item's height, and its width is `scale * aspect_ratio`.
///
/// A right-eye stereo partner may be attached. It is owned by this (left-eye)
/// item, is not part of the registry's render order, and mirrors every
/// position, scale and selection change made here.
#[derive(Clone, Debug, PartialEq)]
pub struct CollageItem {
    id: ItemId,
    position: Point,
    scale: f64,
    aspect_ratio: f64,
    native_size: Size,
    selected: bool,
    stereo: Option<Box<CollageItem>>,
    stereo_offset: f64,
    metadata: ItemMetadata,
}

impl CollageItem {
    /// Creates an item centered at mid-height with scale `1.0`.
    ///
    /// The aspect ratio is fixed from `spec.native_size`, which must have a
    /// positive width and height.
    #[must_use]
    pub fn new(id: ItemId, spec: ItemSpec) -> Self {
        let ItemSpec {
            native_size,
            metadata,
        } = spec;
        debug_assert!(
            native_size.width > 0.0 && native_size.height > 0.0,
            "media must have a positive size, got {native_size:?}"
        );
        Self {
            id,
            position: Point::new(0.0, VIEW_MID_HEIGHT),
            scale: 1.0,
            aspect_ratio: native_size.width / native_size.height,
            native_size,
            selected: false,
            stereo: None,
            stereo_offset: 0.0,
            metadata,
        }
    }

    /// Builder-style override of scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.set_scale(scale);
        self
    }

    /// Builder-style override of position.
    #[must_use]
    pub fn with_position(mut self, position: Point) -> Self {
        self.set_position(position);
        self
    }

    /// Registry identifier.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Center in view space.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Height in view units.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Width / height of the source media.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Native pixel size of the source media.
    #[must_use]
    pub fn native_size(&self) -> Size {
        self.native_size
    }

    /// Width in view units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.aspect_ratio * self.scale
    }

    /// Height in view units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.scale
    }

    /// Half the width in view units.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width() * 0.5
    }

    /// Half the height in view units.
    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.height() * 0.5
    }

    /// View-space rectangle covered by the item.
    #[must_use]
    pub fn extent(&self) -> Rect {
        Rect::from_center_size(self.position, Size::new(self.width(), self.height()))
    }

    /// Whether the item is part of the current selection (drawn with a border).
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Descriptive metadata.
    #[must_use]
    pub fn metadata(&self) -> &ItemMetadata {
        &self.metadata
    }

    /// Mutable metadata.
    pub fn metadata_mut(&mut self) -> &mut ItemMetadata {
        &mut self.metadata
    }

    /// Moves the center, mirrored onto the stereo partner.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        if let Some(partner) = &mut self.stereo {
            partner.set_position(position);
        }
    }

    /// Sets the height in view units, mirrored onto the stereo partner.
    pub fn set_scale(&mut self, scale: f64) {
        debug_assert!(scale > 0.0, "scale must be positive, got {scale}");
        self.scale = scale;
        if let Some(partner) = &mut self.stereo {
            partner.set_scale(scale);
        }
    }

    /// Moves the center by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.set_position(self.position + delta);
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if let Some(partner) = &mut self.stereo {
            partner.set_selected(selected);
        }
    }

    /// Full view height, centered vertically.
    pub fn fit_to_screen(&mut self) {
        self.set_position(Point::new(self.position.x, VIEW_MID_HEIGHT));
        self.set_scale(1.0);
    }

    /// One media pixel per window pixel, centered vertically.
    pub fn native_resolution(&mut self, window_height_px: f64) {
        self.set_position(Point::new(self.position.x, VIEW_MID_HEIGHT));
        if window_height_px > 0.0 {
            self.set_scale(self.native_size.height / window_height_px);
        }
    }

    /// Attaches `partner` as the right-eye image, replacing any previous
    /// partner. The partner adopts this item's position, scale and selection.
    pub fn attach_stereo(&mut self, mut partner: Self) -> Option<Self> {
        partner.set_position(self.position);
        partner.set_scale(self.scale);
        partner.set_selected(self.selected);
        partner.stereo_offset = self.stereo_offset;
        self.stereo.replace(Box::new(partner)).map(|old| *old)
    }

    /// Detaches and returns the right-eye image.
    pub fn detach_stereo(&mut self) -> Option<Self> {
        self.stereo.take().map(|partner| *partner)
    }

    /// Returns `true` if a right-eye image is attached.
    #[must_use]
    pub fn has_stereo(&self) -> bool {
        self.stereo.is_some()
    }

    /// The attached right-eye image, if any.
    #[must_use]
    pub fn stereo(&self) -> Option<&Self> {
        self.stereo.as_deref()
    }

    /// Horizontal offset between the eyes.
    #[must_use]
    pub fn stereo_offset(&self) -> f64 {
        self.stereo_offset
    }

    /// Pushes the item one step deeper.
    pub fn increase_stereo_depth(&mut self) {
        self.set_stereo_offset(self.stereo_offset - STEREO_DEPTH_STEP);
    }

    /// Pulls the item one step back.
    pub fn decrease_stereo_depth(&mut self) {
        self.set_stereo_offset(self.stereo_offset + STEREO_DEPTH_STEP);
    }

    fn set_stereo_offset(&mut self, offset: f64) {
        self.stereo_offset = offset;
        if let Some(partner) = &mut self.stereo {
            partner.stereo_offset = offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{CollageItem, ItemId, ItemSpec};

    fn item(id: u64, width: f64, height: f64) -> CollageItem {
        CollageItem::new(ItemId(id), ItemSpec::new(width, height))
    }

    #[test]
    fn width_follows_aspect_ratio() {
        let mut a = item(1, 300.0, 200.0);
        a.set_scale(0.4);
        assert!((a.width() - 0.6).abs() < 1e-12);
        assert!((a.height() - 0.4).abs() < 1e-12);
        a.set_position(Point::new(1.0, 0.5));
        let extent = a.extent();
        assert!((extent.x0 - 0.7).abs() < 1e-12);
        assert!((extent.y1 - 0.7).abs() < 1e-12);
    }

    #[test]
    fn stereo_partner_mirrors_geometry() {
        let mut left = item(1, 100.0, 100.0).with_position(Point::new(2.0, 0.3));
        let right = item(2, 100.0, 100.0);
        assert!(left.attach_stereo(right).is_none());
        assert_eq!(left.stereo().unwrap().position(), Point::new(2.0, 0.3));

        left.translate(Vec2::new(0.5, 0.0));
        left.set_scale(0.25);
        left.increase_stereo_depth();
        let partner = left.stereo().unwrap();
        assert_eq!(partner.position(), Point::new(2.5, 0.3));
        assert_eq!(partner.scale(), 0.25);
        assert!((partner.stereo_offset() + 0.001).abs() < 1e-12);

        let right = left.detach_stereo().unwrap();
        assert_eq!(right.id(), ItemId(2));
        assert!(!left.has_stereo());
    }

    #[test]
    fn native_resolution_maps_pixels_to_view_height() {
        let mut a = item(1, 1024.0, 384.0).with_position(Point::new(3.0, 0.1));
        a.native_resolution(768.0);
        assert_eq!(a.position(), Point::new(3.0, 0.5));
        assert!((a.scale() - 0.5).abs() < 1e-12);

        a.fit_to_screen();
        assert_eq!(a.scale(), 1.0);
    }
}
