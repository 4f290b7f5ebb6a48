// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-restricted ("row/column") search.
//!
//! Horizontal movement is narrowed to widgets sharing the source's row,
//! vertical movement to widgets sharing its column. The narrowed set is
//! ranked exactly like the unrestricted spatial search, including the
//! cyclical wrap, so a restricted axis behaves like an independent strip of
//! the screen.

use alloc::vec::Vec;
use tenfoot_geometry::{Axis, Direction};

use crate::spatial::{self, SpatialConfig};
use crate::{NavEntry, NavSpace};

/// Per-axis restriction settings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisRestriction {
    /// Restrict movement on this axis to the source's row/column.
    pub enabled: bool,
    /// Wrap cyclically within the row/column when nothing is reachable
    /// directly.
    pub cyclical: bool,
}

/// Configuration for [`Strategy::PrincipalAxis`](crate::Strategy::PrincipalAxis).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrincipalAxisConfig {
    /// Restriction for horizontal (`Left`/`Right`) movement.
    pub horizontal: AxisRestriction,
    /// Restriction for vertical (`Up`/`Down`) movement.
    pub vertical: AxisRestriction,
    /// Defer to the unrestricted spatial search when an axis is not
    /// restriction-enabled or the narrowed search yields nothing.
    pub fallback: bool,
    /// Settings for the unrestricted fallback search.
    pub spatial: SpatialConfig,
}

impl PrincipalAxisConfig {
    const fn restriction(&self, axis: Axis) -> AxisRestriction {
        match axis {
            Axis::X => self.horizontal,
            Axis::Y => self.vertical,
        }
    }
}

/// Automatic axis-restricted search for the rule store.
pub(crate) fn auto_navigate<K: Copy + Eq>(
    config: &PrincipalAxisConfig,
    space: &NavSpace<'_, K>,
    from: Option<K>,
    direction: Direction,
) -> Vec<K> {
    let restriction = config.restriction(direction.axis());
    if !restriction.enabled {
        return if config.fallback {
            spatial::auto_navigate(&config.spatial, space, from, direction)
        } else {
            Vec::new()
        };
    }

    let anchor = from
        .and_then(|id| space.entry(id))
        .map(NavEntry::anchor_rect)
        .unwrap_or(config.spatial.default_anchor);

    // Keep only widgets whose rects cross the infinite strip spanning the
    // source's extent on the perpendicular axis (same row for horizontal
    // movement, same column for vertical movement). Touching the strip edge
    // is not enough.
    let perp = direction.axis().other();
    let (lo, hi) = perp.span(anchor);
    let narrowed: Vec<NavEntry<K>> = space
        .entries
        .iter()
        .filter(|e| {
            e.rects.iter().any(|&r| {
                let (r_lo, r_hi) = perp.span(r);
                r_lo < hi && lo < r_hi
            })
        })
        .cloned()
        .collect();
    let strip_space = NavSpace {
        entries: &narrowed,
    };

    let found = spatial::search(&strip_space, anchor, from, direction, restriction.cyclical);
    if found.is_empty() && config.fallback {
        return spatial::auto_navigate(&config.spatial, space, from, direction);
    }
    found
}
