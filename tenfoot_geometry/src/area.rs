// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ordered collection of rects.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::rect::{RectExt, extrapolate};

/// An ordered collection of rects, typically the focusable rects a widget
/// exposes to the navigation layer.
///
/// Order is preserved (it mirrors child registration order in composite
/// widgets). An area is empty when every member rect is empty, so a widget
/// whose children are all hidden reports an empty area even if it still has
/// member rects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Area {
    rects: Vec<Rect>,
}

impl Area {
    /// Create an empty area.
    pub const fn new() -> Self {
        Self { rects: Vec::new() }
    }

    /// Append a rect, keeping insertion order.
    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// Append every rect from `other`.
    pub fn extend_from(&mut self, other: &Self) {
        self.rects.extend_from_slice(&other.rects);
    }

    /// The member rects in insertion order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Whether every member rect is empty (including the no-members case).
    pub fn is_empty(&self) -> bool {
        self.rects.iter().all(RectExt::is_empty_rect)
    }

    /// Bounding box of the member rects ([`Rect::ZERO`] when empty).
    pub fn extrapolate(&self) -> Rect {
        extrapolate(&self.rects)
    }
}

impl From<Vec<Rect>> for Area {
    fn from(rects: Vec<Rect>) -> Self {
        Self { rects }
    }
}

impl FromIterator<Rect> for Area {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}
