// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial search: geometric nearest-candidate ranking with cyclical wrap.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use tenfoot_geometry::{Axis, Direction, RectExt, extrapolate};

use crate::points::{navigation_distance, navigation_points};
use crate::{NavEntry, NavSpace};

/// Configuration for [`Strategy::Spatial`](crate::Strategy::Spatial).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpatialConfig {
    /// Wrap past the horizontal edges and re-enter from the opposite side.
    pub cyclical_x: bool,
    /// Wrap past the vertical edges and re-enter from the opposite side.
    pub cyclical_y: bool,
    /// Anchor used when a query has no source widget (for example, the first
    /// navigation into a freshly shown container).
    pub default_anchor: Rect,
}

impl SpatialConfig {
    pub(crate) const fn cyclical(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.cyclical_x,
            Axis::Y => self.cyclical_y,
        }
    }
}

/// One candidate probe for debug visualization: the anchor segment connecting
/// the source to the candidate, with its distance.
///
/// Hosts can draw the segments and label them with [`NavProbe::distance`] to
/// show why the engine picked a particular target. Probes never influence
/// navigation outcomes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavProbe<K> {
    /// The probed candidate.
    pub id: K,
    /// Anchor point on the source rect.
    pub from: Point,
    /// Anchor point on the candidate's best rect.
    pub to: Point,
    /// Anchor-to-anchor Euclidean distance.
    pub distance: f64,
}

/// Rank focusable candidates by anchor distance from `source`, nearest first.
///
/// With a direction, candidates behind the source are excluded per
/// [`navigation_points`](crate::navigation_points); without one, this is
/// center-to-center ranking (useful for "nearest widget to a pointer tap").
/// `exclude` drops the source widget itself. Ties keep registration order.
pub fn sort_by_distance<K: Copy + Eq>(
    space: &NavSpace<'_, K>,
    source: Rect,
    direction: Option<Direction>,
    exclude: Option<K>,
) -> Vec<K> {
    let mut scored: Vec<(f64, K)> = space
        .entries
        .iter()
        .filter(|e| e.enabled && Some(e.id) != exclude)
        .filter_map(|e| {
            let best = e
                .rects
                .iter()
                .filter_map(|&r| navigation_distance(source, r, direction))
                .min_by(f64::total_cmp)?;
            Some((best, e.id))
        })
        .collect();
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored.into_iter().map(|(_, id)| id).collect()
}

/// Compute the debug probes for every valid candidate, nearest first.
pub fn probe<K: Copy + Eq>(
    space: &NavSpace<'_, K>,
    source: Rect,
    direction: Option<Direction>,
    exclude: Option<K>,
) -> Vec<NavProbe<K>> {
    let mut probes: Vec<NavProbe<K>> = space
        .entries
        .iter()
        .filter(|e| e.enabled && Some(e.id) != exclude)
        .filter_map(|e| {
            e.rects
                .iter()
                .filter_map(|&r| {
                    let (from, to) = navigation_points(source, r, direction)?;
                    Some(NavProbe {
                        id: e.id,
                        from,
                        to,
                        distance: from.distance(to),
                    })
                })
                .min_by(|a, b| a.distance.total_cmp(&b.distance))
        })
        .collect();
    probes.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    probes
}

/// Directional search from `anchor`, wrapping cyclically when enabled.
///
/// The wrap is implemented as a coordinate shift rather than a second
/// comparison pass: the anchor is moved one full candidate-extent past the
/// far edge ("mirage" anchor), the search re-runs against the inverted
/// direction, and the result order is reversed. The same exclusion and
/// distance rules therefore apply uniformly to wrapped queries.
pub(crate) fn search<K: Copy + Eq>(
    space: &NavSpace<'_, K>,
    anchor: Rect,
    from: Option<K>,
    direction: Direction,
    cyclical: bool,
) -> Vec<K> {
    let direct = sort_by_distance(space, anchor, Some(direction), from);
    if !direct.is_empty() || !cyclical {
        return direct;
    }

    // Bounding box of every other focusable widget's rects, recomputed per
    // query so re-layout is reflected immediately.
    let all_rects: Vec<Rect> = space
        .entries
        .iter()
        .filter(|e| e.enabled && Some(e.id) != from)
        .flat_map(|e| e.rects.iter().copied())
        .collect();
    let bounds = extrapolate(&all_rects);
    if bounds.is_empty_rect() {
        return Vec::new();
    }

    let axis = direction.axis();
    let (lo, hi) = axis.span(bounds);
    let shift = (hi - lo) * direction.sign();
    let mirage = match axis {
        Axis::X => anchor.translated(Vec2::new(shift, 0.0)),
        Axis::Y => anchor.translated(Vec2::new(0.0, shift)),
    };

    let mut wrapped = sort_by_distance(space, mirage, Some(direction.invert()), from);
    wrapped.reverse();
    wrapped
}

/// Automatic spatial search for the rule store.
pub(crate) fn auto_navigate<K: Copy + Eq>(
    config: &SpatialConfig,
    space: &NavSpace<'_, K>,
    from: Option<K>,
    direction: Direction,
) -> Vec<K> {
    let anchor = from
        .and_then(|id| space.entry(id))
        .map(NavEntry::anchor_rect)
        .unwrap_or(config.default_anchor);
    search(
        space,
        anchor,
        from,
        direction,
        config.cyclical(direction.axis()),
    )
}
