// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The notification collaborator the focus tree reports into.
//!
//! The tree does not implement an event bus; queueing, wildcard listeners,
//! and at-most-once registration live in the host's notification channel.
//! The tree only calls this trait, synchronously and in a fixed order per
//! transition: blur of the old widget, then focus of the new one, then the
//! inner-focus bubble through its ancestors.

/// Callbacks for focus lifecycle notifications.
///
/// All methods default to no-ops so sinks implement only what they observe.
pub trait EventSink<K> {
    /// `id` gained focus.
    fn on_focus(&mut self, id: K) {
        let _ = id;
    }

    /// `id` lost focus.
    fn on_blur(&mut self, id: K) {
        let _ = id;
    }

    /// `id` asked to be focused (see
    /// [`FocusTree::request_focus`](crate::FocusTree::request_focus)).
    fn on_want_focus(&mut self, id: K) {
        let _ = id;
    }

    /// A descendant became active below container `id`.
    ///
    /// `path` is the breadcrumb accumulated so far, ordered from the newly
    /// active widget upward (`path[0]` is the widget itself, the last entry
    /// the child of `id` the bubble arrived through).
    fn on_inner_focus(&mut self, id: K, path: &[K]) {
        let _ = (id, path);
    }
}

/// An [`EventSink`] that discards every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoEvents;

impl<K> EventSink<K> for NoEvents {}
