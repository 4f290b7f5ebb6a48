// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capturing and restoring the active-widget chain.
//!
//! A snapshot records which child was active in each container along the
//! active chain, keyed by widget *name* rather than id. Restoring by name
//! survives widgets being removed and re-added (a screen rebuilt from a data
//! refresh), where raw ids would have gone stale.

use alloc::string::String;
use alloc::vec::Vec;

use crate::events::EventSink;
use crate::tree::{FocusTree, NodeKind};
use crate::types::WidgetId;

/// A saved active-widget chain, restorable onto a (possibly rebuilt) tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusSnapshot {
    /// `(container, active-child name)` pairs, outermost first.
    selections: Vec<(WidgetId, String)>,
}

impl FocusSnapshot {
    /// Whether the snapshot captured any selections.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

impl FocusTree {
    /// Capture the active chain below `root`.
    ///
    /// The walk follows active pointers downward and records one entry per
    /// container whose active child has a name; an unnamed active child ends
    /// the walk, since there is nothing stable to restore it by.
    ///
    /// # Panics
    ///
    /// Panics if `root` is stale or not a container.
    pub fn snapshot(&self, root: WidgetId) -> FocusSnapshot {
        let mut selections = Vec::new();
        let mut current = root;
        loop {
            let Some(active) = self.container(current).active else {
                break;
            };
            let Some(name) = self.node(active).name.clone() else {
                break;
            };
            selections.push((current, name));
            match self.node(active).kind {
                NodeKind::Container(_) => current = active,
                NodeKind::Leaf { .. } => break,
            }
        }
        FocusSnapshot { selections }
    }

    /// Re-activate the chain a snapshot captured.
    ///
    /// Entries whose container has since been removed, or whose named child
    /// no longer exists (or refuses activation), are skipped; restore never
    /// fails, it just restores as much as still applies. Focus and blur
    /// notifications fire through `sink` exactly as for any activation.
    pub fn restore<S: EventSink<WidgetId>>(&mut self, snapshot: &FocusSnapshot, sink: &mut S) {
        for (container, name) in &snapshot.selections {
            if !self.is_alive(*container) || !self.is_container(*container) {
                continue;
            }
            if let Some(widget) = self.widget_by_name(*container, name) {
                let _ = self.activate_by_id(*container, widget, sink);
            }
        }
    }
}
