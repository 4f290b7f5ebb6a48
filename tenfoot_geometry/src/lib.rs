// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tenfoot Geometry: value types for directional focus navigation.
//!
//! Remote-driven ("ten-foot") UIs navigate by discrete directional pulses, so
//! the upper layers constantly ask geometric questions: which edge of a rect
//! faces a direction, do two rects share a row, what is the bounding box of a
//! group of candidates. This crate answers those questions on top of
//! [`kurbo`]'s [`Point`] and [`Rect`]:
//!
//! - [`Axis`] and [`Direction`] encode the four cardinal movements together
//!   with their axis/sign representation; directions are invertible.
//! - [`Corner`] names the four corners of a rect.
//! - [`RectExt`] adds border-by-direction access, empty-rect semantics,
//!   strict vs. touching-inclusive intersection tests, and subtraction into
//!   remaining fragments.
//! - [`PointExt`] adds scaling and page quantization (floor/ceil/mod by a
//!   page size) used by scrolling hosts.
//! - [`Area`] is an ordered collection of rects with a bounding-box
//!   [`Area::extrapolate`].
//!
//! All types are `Copy` or cheaply clonable and every operation returns a new
//! value; nothing here mutates in place.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use tenfoot_geometry::{Direction, RectExt};
//!
//! let r = Rect::new(0.0, 0.0, 10.0, 20.0);
//! assert_eq!(r.border(Direction::Right), 10.0);
//! assert_eq!(r.border(Direction::Up), 0.0);
//! assert_eq!(Direction::Right.invert(), Direction::Left);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod area;
mod direction;
mod rect;

pub use area::Area;
pub use direction::{Axis, Corner, Direction};
pub use rect::{PointExt, RectExt, extrapolate};

// Re-exported so downstream crates agree on the geometry types without
// depending on kurbo directly.
pub use kurbo::{Point, Rect, Size, Vec2};
