// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor-point pairs and the shared distance metric.
//!
//! Every spatial strategy ranks candidates by the same metric: the Euclidean
//! distance between a pair of anchor points derived from the source and
//! candidate rects. Compared to naive center-to-center distance, the anchor
//! pair favors candidates that are close along the navigation axis and
//! aligned on the perpendicular axis, which is what a viewer pressing an
//! arrow key expects.

use kurbo::{Point, Rect};
use tenfoot_geometry::{Direction, RectExt};

/// Compute the anchor-point pair for a source/candidate rect pair.
///
/// Returns `None` when the candidate yields no valid probe:
///
/// - the candidate rect is empty, or
/// - a direction is given and the candidate's facing border lies strictly
///   behind the source's border relative to that direction.
///
/// With a direction, both anchors start at the rect centers and are snapped
/// along the navigation axis to the two facing borders; the candidate's
/// anchor is additionally clamped on the perpendicular axis into the
/// candidate's extent, using the source center's perpendicular coordinate
/// when it falls inside that extent and the nearest candidate edge otherwise.
/// Without a direction, the anchors are the plain centers.
pub fn navigation_points(
    from: Rect,
    to: Rect,
    direction: Option<Direction>,
) -> Option<(Point, Point)> {
    if to.is_empty_rect() {
        return None;
    }

    let Some(direction) = direction else {
        return Some((from.center(), to.center()));
    };

    let from_border = from.border(direction);
    let to_border = to.border(direction.invert());
    if (to_border - from_border) * direction.sign() < 0.0 {
        // The candidate lies behind the source for this direction.
        return None;
    }

    let axis = direction.axis();
    let perp = axis.other();

    let from_point = axis.with_component(from.center(), from_border);

    let (lo, hi) = perp.span(to);
    let source_perp = perp.component(from.center());
    let clamped = source_perp.clamp(lo, hi);
    let to_point = perp.with_component(axis.with_component(to.center(), to_border), clamped);

    Some((from_point, to_point))
}

/// Anchor-to-anchor distance, or `None` when the candidate yields no probe.
pub fn navigation_distance(from: Rect, to: Rect, direction: Option<Direction>) -> Option<f64> {
    navigation_points(from, to, direction).map(|(a, b)| a.distance(b))
}
