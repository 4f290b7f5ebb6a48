// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the focus tree: widget identifiers, flags, and keys.

use tenfoot_geometry::Direction;

/// Identifier for a widget in the tree (generational).
///
/// Slots are reused after removal with a bumped generation, so a stale id
/// never silently aliases a newer widget.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WidgetId(pub(crate) u32, pub(crate) u32);

impl WidgetId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Widget flags controlling focusability.
    ///
    /// A widget is focusable when it is both enabled and visible.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        /// Widget reacts to input and may be activated.
        const ENABLED = 0b0000_0001;
        /// Widget is currently shown on screen.
        const VISIBLE = 0b0000_0010;
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::ENABLED | Self::VISIBLE
    }
}

/// A directional key pulse from the remote control.
///
/// Translation from device scancodes to `Key` happens above the engine; the
/// tree only consumes the four arrows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The left arrow.
    Left,
    /// The right arrow.
    Right,
    /// The up arrow.
    Up,
    /// The down arrow.
    Down,
}

impl Key {
    /// The navigation direction this key requests.
    pub const fn direction(self) -> Direction {
        match self {
            Self::Left => Direction::Left,
            Self::Right => Direction::Right,
            Self::Up => Direction::Up,
            Self::Down => Direction::Down,
        }
    }
}

impl From<Key> for Direction {
    fn from(key: Key) -> Self {
        key.direction()
    }
}

impl From<Direction> for Key {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
        }
    }
}
