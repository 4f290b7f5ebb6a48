// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declared-order search: registration order instead of geometry.

use alloc::vec::Vec;
use tenfoot_geometry::Direction;

use crate::NavSpace;

/// Automatic declared-order search for the rule store.
///
/// `Up`/`Left` walk widgets registered before the source, nearest first;
/// `Down`/`Right` walk widgets registered after it, in order. Without a
/// source, every focusable widget is a candidate (reversed for the backward
/// directions). Geometry never participates.
pub(crate) fn auto_navigate<K: Copy + Eq>(
    widgets: &[K],
    space: &NavSpace<'_, K>,
    from: Option<K>,
    direction: Direction,
) -> Vec<K> {
    let backward = matches!(direction, Direction::Up | Direction::Left);
    let position = from.and_then(|f| widgets.iter().position(|&w| w == f));

    let slice: &[K] = match (position, backward) {
        (Some(pos), true) => &widgets[..pos],
        (Some(pos), false) => &widgets[pos + 1..],
        (None, _) => widgets,
    };

    let focusable = slice.iter().copied().filter(|&w| space.is_focusable(w));
    if backward {
        focusable.rev().collect()
    } else {
        focusable.collect()
    }
}
