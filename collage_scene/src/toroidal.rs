// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal wraparound for toroidal displays.
//!
//! On a toroidal scene the right edge of the view is adjacent to its left edge.
//! Items straddling the seam are drawn (and hit-tested) a second time, shifted
//! by one view width.

use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

/// Wraps `x` into `[0, width)`.
///
/// A non-positive `width` leaves `x` unchanged.
#[must_use]
pub fn wrap_x(x: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return x;
    }
    let wrapped = x.rem_euclid(width);
    // `rem_euclid` can round up to `width` for tiny negative inputs.
    if wrapped >= width { 0.0 } else { wrapped }
}

/// Returns `rect` followed by each copy shifted by `±width` that still overlaps
/// the view `[0, width]` horizontally.
#[must_use]
pub fn wrapped_copies(rect: Rect, width: f64) -> SmallVec<[Rect; 3]> {
    let mut copies = SmallVec::new();
    copies.push(rect);
    if width <= 0.0 {
        return copies;
    }
    for shift in [-width, width] {
        let copy = rect + Vec2::new(shift, 0.0);
        if copy.x1 > 0.0 && copy.x0 < width {
            copies.push(copy);
        }
    }
    copies
}

/// Returns `true` if `point` falls inside `rect` or one of its copies shifted
/// by `±width`. Edges count as inside.
#[must_use]
pub fn contains_wrapped(rect: Rect, point: Point, width: f64) -> bool {
    let inside = |r: Rect| point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1;
    inside(rect)
        || inside(rect + Vec2::new(-width, 0.0))
        || inside(rect + Vec2::new(width, 0.0))
}
