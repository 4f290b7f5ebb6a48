// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tenfoot Navigation: directional candidate search for focus navigation.
//!
//! ## Overview
//!
//! Given a source widget and a [`Direction`], this crate answers "which
//! widgets could receive focus next, in order of preference". It combines:
//!
//! - A **rule store** ([`Navigator`]) with one partial `Direction → target`
//!   override table per registered widget. An explicit rule always wins over
//!   automatic search, including the explicit *stop* rule
//!   ([`Search::Blocked`]) that halts navigation in a direction.
//! - Three **automatic search strategies** ([`Strategy`]), chosen once per
//!   navigator at construction:
//!   - [`Strategy::Spatial`] — geometric nearest-candidate search with
//!     optional cyclical wrap-around per axis.
//!   - [`Strategy::PrincipalAxis`] — spatial search restricted to the
//!     source's row (horizontal movement) or column (vertical movement),
//!     with optional fallback to the unrestricted search.
//!   - [`Strategy::Order`] — a non-spatial walk over widgets in registration
//!     order, for hosts whose layout is undefined or irrelevant.
//!
//! The crate is generic over the widget key `K: Copy + Eq`, so hosts can use
//! any small handle (for example `tenfoot_tree::WidgetId` or an
//! application-specific id).
//!
//! ## Snapshots, not caches
//!
//! Geometry is supplied per query as a [`NavSpace`]: a read-only slice of
//! [`NavEntry`] candidates with their current focusable rects. The navigator
//! never caches layout; hosts rebuild the space (cheaply, by reference) for
//! every navigation decision, so re-layout is always reflected immediately.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use tenfoot_geometry::Direction;
//! use tenfoot_navigation::{NavEntry, NavSpace, Navigator, Search, SpatialConfig, Strategy};
//!
//! let mut nav: Navigator<u32> = Navigator::new(Strategy::Spatial(SpatialConfig::default()));
//! nav.add_widget(1);
//! nav.add_widget(2);
//!
//! let entries = vec![
//!     NavEntry::new(1, Rect::new(0.0, 0.0, 10.0, 10.0)),
//!     NavEntry::new(2, Rect::new(20.0, 0.0, 30.0, 10.0)),
//! ];
//! let space = NavSpace { entries: &entries };
//!
//! match nav.find_widgets(Some(1), Direction::Right, &space) {
//!     Search::Candidates(c) => assert_eq!(c, vec![2]),
//!     Search::Blocked => unreachable!(),
//! }
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

use kurbo::Rect;
use smallvec::SmallVec;
use tenfoot_geometry::extrapolate;

mod axis;
mod navigator;
mod order;
mod points;
mod spatial;

pub use axis::{AxisRestriction, PrincipalAxisConfig};
pub use navigator::{Navigator, Search, Strategy};
pub use points::{navigation_distance, navigation_points};
pub use spatial::{NavProbe, SpatialConfig, probe, sort_by_distance};

pub use tenfoot_geometry::Direction;

/// A single focus candidate within a [`NavSpace`].
///
/// `rects` are the widget's current focusable rects (a composite widget
/// contributes the union of its focusable children's rects); `anchor` is the
/// rect used when this widget is the navigation *source* (for a composite,
/// the focused rect of its active child). When `anchor` is `None`, the
/// bounding box of `rects` is used instead.
#[derive(Clone, Debug)]
pub struct NavEntry<K> {
    /// Identifier for this candidate.
    pub id: K,
    /// Current focusable rects, in a consistent coordinate space.
    pub rects: SmallVec<[Rect; 2]>,
    /// Navigation anchor when this widget is the source.
    pub anchor: Option<Rect>,
    /// Whether this widget can be targeted by focus (enabled and visible).
    pub enabled: bool,
}

impl<K> NavEntry<K> {
    /// A focusable entry with a single rect that doubles as its anchor.
    pub fn new(id: K, rect: Rect) -> Self {
        Self {
            id,
            rects: SmallVec::from_slice(&[rect]),
            anchor: None,
            enabled: true,
        }
    }

    /// The rect used as the navigation anchor for this entry.
    pub fn anchor_rect(&self) -> Rect {
        self.anchor.unwrap_or_else(|| extrapolate(&self.rects))
    }
}

/// A read-only snapshot of focus candidates for one navigation query.
///
/// All entries should share one coordinate space. Build it fresh per query;
/// see the crate docs.
#[derive(Clone, Copy, Debug)]
pub struct NavSpace<'a, K> {
    /// Candidates visible to this query, in registration order.
    pub entries: &'a [NavEntry<K>],
}

impl<K: Copy + Eq> NavSpace<'_, K> {
    /// Look up the entry for `id`, if present.
    pub fn entry(&self, id: K) -> Option<&NavEntry<K>> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Whether `id` is present and currently focusable.
    pub fn is_focusable(&self, id: K) -> bool {
        self.entry(id).is_some_and(|e| e.enabled)
    }
}
