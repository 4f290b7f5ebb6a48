// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tenfoot Tree: a focus tree for remote-driven ("ten-foot") UIs.
//!
//! ## Overview
//!
//! The tree composes widgets recursively: [`FocusTree::add_leaf`] inserts a
//! focusable rect, [`FocusTree::add_container`] a node that groups children
//! and owns a `tenfoot_navigation` rule store with one search
//! [`Strategy`](tenfoot_navigation::Strategy). Each container keeps an
//! *active child* pointer that survives blur, so re-entering a container
//! restores its previous selection.
//!
//! Directional keys enter at a container via [`FocusTree::process_key`],
//! descend depth-first to the innermost active container, and on the way back
//! up each container gets a chance to move its own selection. Focus
//! transitions report to an [`EventSink`] in a fixed order: blur of the old
//! widget, focus of the new one, then an inner-focus bubble through the
//! ancestors.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use tenfoot_navigation::{SpatialConfig, Strategy};
//! use tenfoot_tree::{FocusTree, Key, NoEvents};
//!
//! let mut tree = FocusTree::new();
//! let screen = tree.add_container(None, Some("screen"), Strategy::Spatial(SpatialConfig::default()));
//! let poster = tree.add_leaf(screen, Some("poster"), Rect::new(0.0, 0.0, 200.0, 300.0));
//! let play = tree.add_leaf(screen, Some("play"), Rect::new(220.0, 0.0, 320.0, 40.0));
//!
//! tree.focus(screen, None, &mut NoEvents);
//! assert_eq!(tree.active_widget(screen), Some(poster));
//!
//! tree.process_key(screen, Key::Right, &mut NoEvents);
//! assert_eq!(tree.active_widget(screen), Some(play));
//! assert!(tree.is_focused(play));
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

mod events;
mod snapshot;
mod tree;
mod types;

pub use events::{EventSink, NoEvents};
pub use snapshot::FocusSnapshot;
pub use tree::FocusTree;
pub use types::{Key, WidgetFlags, WidgetId};

pub use tenfoot_geometry::Direction;
