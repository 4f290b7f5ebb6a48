// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cardinal directions, axes, and corners.

use kurbo::{Point, Rect};

/// One of the two screen axes.
///
/// `X` grows rightwards, `Y` grows downwards, matching the usual UI
/// coordinate convention.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// The coordinate of `point` along this axis.
    pub const fn component(self, point: Point) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }

    /// `point` with its coordinate along this axis replaced by `value`.
    pub const fn with_component(self, point: Point, value: f64) -> Point {
        match self {
            Self::X => Point::new(value, point.y),
            Self::Y => Point::new(point.x, value),
        }
    }

    /// The extent of `rect` along this axis (`(min, max)` coordinates).
    pub const fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::X => (rect.x0, rect.x1),
            Self::Y => (rect.y0, rect.y1),
        }
    }
}

/// A cardinal navigation direction.
///
/// Each direction maps to an [`Axis`] and a sign: `Left`/`Up` are the
/// ascending-negative directions, `Right`/`Down` the ascending-positive ones.
/// The compact [`Direction::code`] encoding (`-1, +1` for X, `-2, +2` for Y)
/// round-trips through [`Direction::from_code`] and is handy for rule tables
/// and debug output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards negative X.
    Left,
    /// Towards positive X.
    Right,
    /// Towards negative Y.
    Up,
    /// Towards positive Y.
    Down,
}

impl Direction {
    /// All four directions, in a fixed order suitable for iteration.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// The axis this direction moves along.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Up | Self::Down => Axis::Y,
        }
    }

    /// The sign of movement along [`Direction::axis`]: `-1.0` or `+1.0`.
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left | Self::Up => -1.0,
            Self::Right | Self::Down => 1.0,
        }
    }

    /// Signed small-integer encoding: `-1`/`+1` on X, `-2`/`+2` on Y.
    pub const fn code(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
            Self::Up => -2,
            Self::Down => 2,
        }
    }

    /// Inverse of [`Direction::code`]; any other value yields `None`.
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(Self::Left),
            1 => Some(Self::Right),
            -2 => Some(Self::Up),
            2 => Some(Self::Down),
            _ => None,
        }
    }

    /// The opposite direction.
    pub const fn invert(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// A small dense index (0..4), usable for per-direction tables.
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Up => 2,
            Self::Down => 3,
        }
    }
}

/// One of the four corners of a rect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Minimum X, minimum Y.
    TopLeft,
    /// Maximum X, minimum Y.
    TopRight,
    /// Minimum X, maximum Y.
    BottomLeft,
    /// Maximum X, maximum Y.
    BottomRight,
}

impl Corner {
    /// The corner point of `rect`.
    pub const fn point_in(self, rect: Rect) -> Point {
        match self {
            Self::TopLeft => Point::new(rect.x0, rect.y0),
            Self::TopRight => Point::new(rect.x1, rect.y0),
            Self::BottomLeft => Point::new(rect.x0, rect.y1),
            Self::BottomRight => Point::new(rect.x1, rect.y1),
        }
    }

    /// The diagonally opposite corner.
    pub const fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }
}
