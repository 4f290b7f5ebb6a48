// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rect and point extensions used by the navigation layers.

use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::direction::Direction;

/// Navigation-oriented extensions for [`Rect`].
///
/// A rect is *empty* when `x1 <= x0` or `y1 <= y0`; empty rects stand in for
/// "currently has no on-screen presence" and never produce navigation
/// candidates.
pub trait RectExt {
    /// The coordinate of the border facing `direction`.
    fn border(&self, direction: Direction) -> f64;

    /// A copy with the border facing `direction` moved to `value`.
    fn with_border(&self, direction: Direction, value: f64) -> Rect;

    /// Whether this rect is empty (`x1 <= x0 || y1 <= y0`).
    fn is_empty_rect(&self) -> bool;

    /// Strict intersection test: rects that merely touch along an edge do
    /// **not** intersect.
    fn intersects(&self, other: &Rect) -> bool;

    /// Touching-inclusive intersection test: shared edges count.
    fn intersects_geometric(&self, other: &Rect) -> bool;

    /// Subtract `other`, returning the up to four remaining fragments
    /// (top and bottom strips at full width, left and right strips between
    /// them). Returns the whole rect when the two do not strictly intersect;
    /// empty fragments are omitted.
    fn subtract(&self, other: &Rect) -> SmallVec<[Rect; 4]>;

    /// A copy translated by `offset`.
    fn translated(&self, offset: Vec2) -> Rect;
}

impl RectExt for Rect {
    fn border(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Left => self.x0,
            Direction::Right => self.x1,
            Direction::Up => self.y0,
            Direction::Down => self.y1,
        }
    }

    fn with_border(&self, direction: Direction, value: f64) -> Rect {
        match direction {
            Direction::Left => Rect::new(value, self.y0, self.x1, self.y1),
            Direction::Right => Rect::new(self.x0, self.y0, value, self.y1),
            Direction::Up => Rect::new(self.x0, value, self.x1, self.y1),
            Direction::Down => Rect::new(self.x0, self.y0, self.x1, value),
        }
    }

    fn is_empty_rect(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    fn intersects(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    fn intersects_geometric(&self, other: &Rect) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    fn subtract(&self, other: &Rect) -> SmallVec<[Rect; 4]> {
        let mut out = SmallVec::new();
        if !self.intersects(other) {
            out.push(*self);
            return out;
        }
        let hole = self.intersect(*other);
        let top = Rect::new(self.x0, self.y0, self.x1, hole.y0);
        let bottom = Rect::new(self.x0, hole.y1, self.x1, self.y1);
        let left = Rect::new(self.x0, hole.y0, hole.x0, hole.y1);
        let right = Rect::new(hole.x1, hole.y0, self.x1, hole.y1);
        for fragment in [top, bottom, left, right] {
            if !fragment.is_empty_rect() {
                out.push(fragment);
            }
        }
        out
    }

    fn translated(&self, offset: Vec2) -> Rect {
        Rect::new(
            self.x0 + offset.x,
            self.y0 + offset.y,
            self.x1 + offset.x,
            self.y1 + offset.y,
        )
    }
}

/// Bounding box of several rects.
///
/// Empty members are skipped; an empty slice (or a slice of only empty
/// rects) yields [`Rect::ZERO`].
pub fn extrapolate(rects: &[Rect]) -> Rect {
    let mut bounds: Option<Rect> = None;
    for r in rects {
        if r.is_empty_rect() {
            continue;
        }
        bounds = Some(match bounds {
            Some(b) => b.union(*r),
            None => *r,
        });
    }
    bounds.unwrap_or(Rect::ZERO)
}

/// Page-quantization and scaling extensions for [`Point`].
///
/// Page operations treat the plane as a grid of `page`-sized cells; scrolling
/// hosts use them to align focus anchors to whole pages.
pub trait PointExt {
    /// Component-wise scale.
    fn scaled(&self, factor: f64) -> Point;

    /// Snap each coordinate down to a multiple of the page size.
    fn page_floor(&self, page: Size) -> Point;

    /// Snap each coordinate up to a multiple of the page size.
    fn page_ceil(&self, page: Size) -> Point;

    /// Remainder of each coordinate within its page (always non-negative).
    fn page_mod(&self, page: Size) -> Point;
}

impl PointExt for Point {
    fn scaled(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    fn page_floor(&self, page: Size) -> Point {
        Point::new(
            (self.x / page.width).floor() * page.width,
            (self.y / page.height).floor() * page.height,
        )
    }

    fn page_ceil(&self, page: Size) -> Point {
        Point::new(
            (self.x / page.width).ceil() * page.width,
            (self.y / page.height).ceil() * page.height,
        )
    }

    fn page_mod(&self, page: Size) -> Point {
        Point::new(
            self.x.rem_euclid(page.width),
            self.y.rem_euclid(page.height),
        )
    }
}
