// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, focus lifecycle, key dispatch.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;
use tenfoot_geometry::{Area, Direction, RectExt};
use tenfoot_navigation::{NavEntry, NavSpace, Navigator, Search, Strategy, sort_by_distance};

use crate::events::EventSink;
use crate::types::{Key, WidgetFlags, WidgetId};

/// The focus tree: a recursive composition of widgets into containers.
///
/// Leaves carry a bounding rect; containers own an ordered list of child
/// widgets (registration order is significant for declared-order search), a
/// name index, one [`Navigator`] chosen at construction, an active-child
/// pointer, and an optional default child. Directional keys enter at a
/// container, descend to the deepest active container first, and fall back
/// to the container's navigator when unhandled.
///
/// Geometry is queried freshly for every navigation decision; the tree never
/// caches candidate rects between key presses.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use tenfoot_navigation::{SpatialConfig, Strategy};
/// use tenfoot_tree::{FocusTree, Key, NoEvents};
///
/// let mut tree = FocusTree::new();
/// let menu = tree.add_container(None, Some("menu"), Strategy::Spatial(SpatialConfig::default()));
/// let movies = tree.add_leaf(menu, Some("movies"), Rect::new(0.0, 0.0, 100.0, 40.0));
/// let series = tree.add_leaf(menu, Some("series"), Rect::new(120.0, 0.0, 220.0, 40.0));
///
/// tree.focus(menu, None, &mut NoEvents);
/// assert_eq!(tree.active_widget(menu), Some(movies));
///
/// assert!(tree.process_key(menu, Key::Right, &mut NoEvents));
/// assert_eq!(tree.active_widget(menu), Some(series));
/// ```
#[derive(Debug, Default)]
pub struct FocusTree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

#[derive(Debug)]
pub(crate) struct Node {
    generation: u32,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) name: Option<String>,
    flags: WidgetFlags,
    focused: bool,
    pub(crate) kind: NodeKind,
}

#[derive(Debug)]
pub(crate) enum NodeKind {
    Leaf { bounds: Option<Rect> },
    Container(ContainerState),
}

#[derive(Debug)]
pub(crate) struct ContainerState {
    pub(crate) children: Vec<WidgetId>,
    pub(crate) by_name: HashMap<String, WidgetId>,
    pub(crate) navigator: Navigator<WidgetId>,
    pub(crate) active: Option<WidgetId>,
    default_widget: Option<WidgetId>,
}

impl FocusTree {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a container widget, optionally under a parent container.
    ///
    /// The `strategy` decides how directional keys pick among this
    /// container's children for the container's whole lifetime.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is stale or not a container, or if `name` is
    /// already taken among the parent's children.
    pub fn add_container(
        &mut self,
        parent: Option<WidgetId>,
        name: Option<&str>,
        strategy: Strategy,
    ) -> WidgetId {
        let kind = NodeKind::Container(ContainerState {
            children: Vec::new(),
            by_name: HashMap::new(),
            navigator: Navigator::new(strategy),
            active: None,
            default_widget: None,
        });
        self.insert(parent, name, kind)
    }

    /// Insert a leaf widget under a parent container.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is stale or not a container, or if `name` is
    /// already taken among the parent's children.
    pub fn add_leaf(&mut self, parent: WidgetId, name: Option<&str>, bounds: Rect) -> WidgetId {
        self.insert(
            Some(parent),
            name,
            NodeKind::Leaf {
                bounds: Some(bounds),
            },
        )
    }

    /// Remove a widget and its whole subtree.
    ///
    /// The parent container purges every navigation rule that references the
    /// widget; if it was the active child, the active pointer is cleared and
    /// the next [`FocusTree::focus`] falls back to the default/first child.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    pub fn remove_widget(&mut self, id: WidgetId) {
        if let Some(parent) = self.node(id).parent {
            let name = self.node(id).name.clone();
            let state = self.container_mut(parent);
            state.children.retain(|&c| c != id);
            state.navigator.remove_widget(id);
            if state.active == Some(id) {
                state.active = None;
            }
            if state.default_widget == Some(id) {
                state.default_widget = None;
            }
            if let Some(name) = name {
                state.by_name.remove(&name);
            }
        }
        if let NodeKind::Container(state) = &self.node(id).kind {
            let children = state.children.clone();
            for child in children {
                self.remove_widget(child);
            }
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live widget.
    pub fn is_alive(&self, id: WidgetId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Whether `id` is a container.
    pub fn is_container(&self, id: WidgetId) -> bool {
        matches!(self.node(id).kind, NodeKind::Container(_))
    }

    /// The parent container of `id`, or `None` for roots.
    pub fn parent_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.node(id).parent
    }

    /// The children of a container, in registration order.
    pub fn children_of(&self, container: WidgetId) -> &[WidgetId] {
        &self.container(container).children
    }

    /// The widget's name, if it has one.
    pub fn name(&self, id: WidgetId) -> Option<&str> {
        self.node(id).name.as_deref()
    }

    /// Look up a direct child of `container` by name.
    pub fn widget_by_name(&self, container: WidgetId, name: &str) -> Option<WidgetId> {
        self.container(container).by_name.get(name).copied()
    }

    /// The active child of a container (kept across blur).
    pub fn active_widget(&self, container: WidgetId) -> Option<WidgetId> {
        self.container(container).active
    }

    /// Whether the widget currently holds focus.
    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.node(id).focused
    }

    /// Set the child a blurred-then-refocused container prefers.
    ///
    /// # Panics
    ///
    /// Panics if `widget` is `Some` and not a child of `container`.
    pub fn set_default_widget(&mut self, container: WidgetId, widget: Option<WidgetId>) {
        if let Some(w) = widget {
            assert!(
                self.container(container).children.contains(&w),
                "widget is not a member of this container"
            );
        }
        self.container_mut(container).default_widget = widget;
    }

    /// Update a leaf's bounds (`None` while it has no on-screen presence).
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a leaf.
    pub fn set_bounds(&mut self, id: WidgetId, bounds: Option<Rect>) {
        match &mut self.node_mut(id).kind {
            NodeKind::Leaf { bounds: slot } => *slot = bounds,
            NodeKind::Container(_) => panic!("containers derive bounds from their children"),
        }
    }

    /// Enable or disable a widget.
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) {
        self.node_mut(id).flags.set(WidgetFlags::ENABLED, enabled);
    }

    /// Show or hide a widget.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        self.node_mut(id).flags.set(WidgetFlags::VISIBLE, visible);
    }

    /// Whether the widget can receive focus right now.
    ///
    /// Leaves are focusable when enabled and visible; a container
    /// additionally needs at least one focusable child, since focusing an
    /// effectively empty container would strand the focus.
    pub fn is_focusable(&self, id: WidgetId) -> bool {
        let node = self.node(id);
        if !node.flags.contains(WidgetFlags::ENABLED | WidgetFlags::VISIBLE) {
            return false;
        }
        match &node.kind {
            NodeKind::Leaf { .. } => true,
            NodeKind::Container(state) => {
                state.children.iter().any(|&child| self.is_focusable(child))
            }
        }
    }

    /// The widget's current focusable rects.
    ///
    /// A leaf contributes its own bounds; a container the union of its
    /// focusable children's areas. Non-focusable widgets report an empty
    /// area.
    pub fn focusable_area(&self, id: WidgetId) -> Area {
        let node = self.node(id);
        if !node.flags.contains(WidgetFlags::ENABLED | WidgetFlags::VISIBLE) {
            return Area::new();
        }
        match &node.kind {
            NodeKind::Leaf { bounds } => {
                let mut area = Area::new();
                if let Some(b) = bounds
                    && !b.is_empty_rect()
                {
                    area.push(*b);
                }
                area
            }
            NodeKind::Container(state) => {
                let mut area = Area::new();
                for &child in &state.children {
                    area.extend_from(&self.focusable_area(child));
                }
                area
            }
        }
    }

    /// The rect to use as the navigation anchor for this widget: a leaf's
    /// own bounds, or the focused rect of a container's active child.
    pub fn focused_rect(&self, id: WidgetId) -> Option<Rect> {
        match &self.node(id).kind {
            NodeKind::Leaf { bounds } => *bounds,
            NodeKind::Container(state) => state.active.and_then(|a| self.focused_rect(a)),
        }
    }

    /// Focus a container, choosing the child to activate.
    ///
    /// Priority: the current active child if still focusable, then the
    /// default child, then (for geometric strategies, when `from_rect` is
    /// given) the nearest focusable child to `from_rect`, then the first
    /// focusable child in registration order. When no child qualifies the
    /// container is focused with no active child.
    ///
    /// # Panics
    ///
    /// Panics if `container` is stale or not a container.
    pub fn focus<S: EventSink<WidgetId>>(
        &mut self,
        container: WidgetId,
        from_rect: Option<Rect>,
        sink: &mut S,
    ) {
        let _ = self.container(container);
        self.node_mut(container).focused = true;
        sink.on_focus(container);

        let chosen = self.choose_child(container, from_rect);
        let _ = self.activate_internal(container, chosen, from_rect, sink);
    }

    /// Blur a container: it stops holding focus but keeps its active pointer
    /// so a later [`FocusTree::focus`] restores the same child.
    ///
    /// # Panics
    ///
    /// Panics if `container` is stale or not a container.
    pub fn blur<S: EventSink<WidgetId>>(&mut self, container: WidgetId, sink: &mut S) {
        let _ = self.container(container);
        self.blur_widget(container, sink);
    }

    /// Make `widget` the container's active child.
    ///
    /// Activating the already-active, already-focused child is a successful
    /// no-op. Activating a non-focusable widget is a defined failure
    /// (`false`) with no side effects, so callers can try the next
    /// candidate. Otherwise the previous active child is blurred, the
    /// pointer moves, and — only while the container holds focus — the new
    /// child is focused and an inner-focus notification bubbles to ancestor
    /// containers with an accumulating breadcrumb path.
    ///
    /// `prev_rect` seeds nested containers' nearest-child selection.
    ///
    /// # Panics
    ///
    /// Panics if `widget` is `Some` and not a child of `container`: rules
    /// and activation key off membership, so a foreign widget is a
    /// programming error.
    pub fn activate_widget<S: EventSink<WidgetId>>(
        &mut self,
        container: WidgetId,
        widget: Option<WidgetId>,
        prev_rect: Option<Rect>,
        sink: &mut S,
    ) -> bool {
        if let Some(w) = widget {
            assert!(
                self.container(container).children.contains(&w),
                "widget is not a member of this container"
            );
        }
        self.activate_internal(container, widget, prev_rect, sink)
    }

    /// Handle a directional key pulse delivered to `container`.
    ///
    /// The active child sees the key first (recursively, down to the deepest
    /// active container). If it leaves the key unhandled, the container asks
    /// its navigator for ordered candidates and activates the first one that
    /// accepts. An explicit stop rule reports the key as handled without
    /// moving focus. Returns whether the key was handled.
    ///
    /// # Panics
    ///
    /// Panics if `container` is stale or not a container.
    pub fn process_key<S: EventSink<WidgetId>>(
        &mut self,
        container: WidgetId,
        key: Key,
        sink: &mut S,
    ) -> bool {
        let active = self.container(container).active;

        if let Some(child) = active
            && self.is_focusable(child)
            && self.is_container(child)
            && self.process_key(child, key, sink)
        {
            return true;
        }

        let direction = key.direction();
        let entries = self.nav_entries(container);
        let space = NavSpace { entries: &entries };
        let prev_rect = active.and_then(|a| self.focused_rect(a));

        match self
            .container(container)
            .navigator
            .find_widgets(active, direction, &space)
        {
            Search::Blocked => true,
            Search::Candidates(candidates) => {
                for candidate in candidates {
                    if self.activate_internal(container, Some(candidate), prev_rect, sink) {
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Ask for `id` to become the focused widget, activating it in every
    /// ancestor container up the chain.
    ///
    /// Emits a want-focus notification first; returns `false` (leaving any
    /// partially updated ancestors' pointers in place) if the widget or one
    /// of its ancestors refuses activation.
    pub fn request_focus<S: EventSink<WidgetId>>(&mut self, id: WidgetId, sink: &mut S) -> bool {
        sink.on_want_focus(id);
        if !self.is_focusable(id) {
            return false;
        }
        let mut child = id;
        while let Some(parent) = self.node(child).parent {
            if !self.activate_internal(parent, Some(child), None, sink) {
                return false;
            }
            child = parent;
        }
        true
    }

    /// Set an explicit navigation rule from `from` towards `direction`.
    ///
    /// `Some(target)` routes straight to a sibling; `None` blocks navigation
    /// in that direction. With `bidirectional`, a `Some` target also gets
    /// the mirror rule back to `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` has no parent container, or if `from` and the target
    /// are not siblings.
    pub fn set_navigation_rule(
        &mut self,
        from: WidgetId,
        direction: Direction,
        target: Option<WidgetId>,
        bidirectional: bool,
    ) {
        let parent = self.parent_container(from);
        self.container_mut(parent)
            .navigator
            .set_rule(from, direction, target);
        if bidirectional && let Some(t) = target {
            self.container_mut(parent)
                .navigator
                .set_rule(t, direction.invert(), Some(from));
        }
    }

    /// Remove the explicit rule for `(from, direction)`, restoring automatic
    /// search.
    ///
    /// # Panics
    ///
    /// Panics if `from` has no parent container.
    pub fn remove_navigation_rule(&mut self, from: WidgetId, direction: Direction) {
        let parent = self.parent_container(from);
        self.container_mut(parent)
            .navigator
            .remove_rule(from, direction);
    }

    /// Block navigation away from `widget` in all four directions.
    ///
    /// # Panics
    ///
    /// Panics if `widget` has no parent container.
    pub fn drop_navigation(&mut self, widget: WidgetId) {
        let parent = self.parent_container(widget);
        for direction in Direction::ALL {
            self.container_mut(parent)
                .navigator
                .set_rule(widget, direction, None);
        }
    }

    // --- internals ---

    fn insert(&mut self, parent: Option<WidgetId>, name: Option<&str>, kind: NodeKind) -> WidgetId {
        if let Some(p) = parent {
            // Fail before allocating a slot.
            let state = self.container(p);
            if let Some(name) = name {
                assert!(
                    !state.by_name.contains_key(name),
                    "name is already taken in this container"
                );
            }
        }
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.nodes.push(None);
            self.generations.push(1);
            (self.nodes.len() - 1, 1)
        };
        self.nodes[idx] = Some(Node {
            generation,
            parent,
            name: name.map(ToString::to_string),
            flags: WidgetFlags::default(),
            focused: false,
            kind,
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "WidgetId uses 32-bit indices by design."
        )]
        let id = WidgetId::new(idx as u32, generation);
        if let Some(p) = parent {
            let name = self.node(id).name.clone();
            let state = self.container_mut(p);
            state.children.push(id);
            state.navigator.add_widget(id);
            if let Some(name) = name {
                state.by_name.insert(name, id);
            }
        }
        id
    }

    fn choose_child(&self, container: WidgetId, from_rect: Option<Rect>) -> Option<WidgetId> {
        let state = self.container(container);
        if let Some(active) = state.active
            && self.is_focusable(active)
        {
            return Some(active);
        }
        if let Some(default) = state.default_widget
            && self.is_focusable(default)
        {
            return Some(default);
        }
        if let Some(rect) = from_rect
            && state.navigator.strategy().is_geometric()
        {
            let entries = self.nav_entries(container);
            let space = NavSpace { entries: &entries };
            if let Some(&nearest) = sort_by_distance(&space, rect, None, None).first() {
                return Some(nearest);
            }
        }
        state
            .children
            .iter()
            .copied()
            .find(|&child| self.is_focusable(child))
    }

    fn activate_internal<S: EventSink<WidgetId>>(
        &mut self,
        container: WidgetId,
        widget: Option<WidgetId>,
        prev_rect: Option<Rect>,
        sink: &mut S,
    ) -> bool {
        let focused = self.node(container).focused;
        let previous = self.container(container).active;

        // Re-activating the already-focused active widget is a no-op
        // success; a retained-but-blurred active widget must still pass the
        // focusability check below.
        if widget == previous && widget.is_none_or(|w| self.node(w).focused) {
            return true;
        }
        if let Some(w) = widget
            && !self.is_focusable(w)
        {
            return false;
        }
        if let Some(prev) = previous
            && self.node(prev).focused
        {
            self.blur_widget(prev, sink);
        }
        self.container_mut(container).active = widget;
        if let Some(w) = widget
            && focused
        {
            self.focus_widget(w, prev_rect, sink);
            self.bubble_inner_focus(container, w, sink);
        }
        true
    }

    fn focus_widget<S: EventSink<WidgetId>>(
        &mut self,
        id: WidgetId,
        from_rect: Option<Rect>,
        sink: &mut S,
    ) {
        match self.node(id).kind {
            NodeKind::Container(_) => self.focus(id, from_rect, sink),
            NodeKind::Leaf { .. } => {
                self.node_mut(id).focused = true;
                sink.on_focus(id);
            }
        }
    }

    fn blur_widget<S: EventSink<WidgetId>>(&mut self, id: WidgetId, sink: &mut S) {
        self.node_mut(id).focused = false;
        sink.on_blur(id);
        if let NodeKind::Container(state) = &self.node(id).kind
            && let Some(active) = state.active
            && self.node(active).focused
        {
            self.blur_widget(active, sink);
        }
    }

    fn bubble_inner_focus<S: EventSink<WidgetId>>(
        &mut self,
        container: WidgetId,
        widget: WidgetId,
        sink: &mut S,
    ) {
        let mut path: Vec<WidgetId> = Vec::new();
        path.push(widget);
        let mut current = container;
        loop {
            sink.on_inner_focus(current, &path);
            path.push(current);
            match self.node(current).parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
    }

    /// Build the navigation snapshot for one container query. Rects are
    /// gathered fresh so re-layout is reflected immediately.
    fn nav_entries(&self, container: WidgetId) -> Vec<NavEntry<WidgetId>> {
        self.container(container)
            .children
            .iter()
            .map(|&child| NavEntry {
                id: child,
                rects: SmallVec::from_slice(self.focusable_area(child).rects()),
                anchor: self.focused_rect(child),
                enabled: self.is_focusable(child),
            })
            .collect()
    }

    fn parent_container(&self, id: WidgetId) -> WidgetId {
        self.node(id)
            .parent
            .expect("widget has no parent container")
    }

    pub(crate) fn node(&self, id: WidgetId) -> &Node {
        let node = self.nodes[id.idx()].as_ref().expect("dangling WidgetId");
        assert!(node.generation == id.1, "dangling WidgetId");
        node
    }

    fn node_mut(&mut self, id: WidgetId) -> &mut Node {
        let node = self.nodes[id.idx()].as_mut().expect("dangling WidgetId");
        assert!(node.generation == id.1, "dangling WidgetId");
        node
    }

    pub(crate) fn container(&self, id: WidgetId) -> &ContainerState {
        match &self.node(id).kind {
            NodeKind::Container(state) => state,
            NodeKind::Leaf { .. } => panic!("widget is not a container"),
        }
    }

    fn container_mut(&mut self, id: WidgetId) -> &mut ContainerState {
        match &mut self.node_mut(id).kind {
            NodeKind::Container(state) => state,
            NodeKind::Leaf { .. } => panic!("widget is not a container"),
        }
    }

    pub(crate) fn activate_by_id<S: EventSink<WidgetId>>(
        &mut self,
        container: WidgetId,
        widget: WidgetId,
        sink: &mut S,
    ) -> bool {
        self.activate_internal(container, Some(widget), None, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NoEvents;
    use alloc::vec;
    use tenfoot_navigation::SpatialConfig;

    /// Sink that records every notification in emission order.
    #[derive(Default)]
    struct Recorder {
        log: Vec<Event>,
    }

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Focus(WidgetId),
        Blur(WidgetId),
        WantFocus(WidgetId),
        InnerFocus(WidgetId, Vec<WidgetId>),
    }

    impl EventSink<WidgetId> for Recorder {
        fn on_focus(&mut self, id: WidgetId) {
            self.log.push(Event::Focus(id));
        }
        fn on_blur(&mut self, id: WidgetId) {
            self.log.push(Event::Blur(id));
        }
        fn on_want_focus(&mut self, id: WidgetId) {
            self.log.push(Event::WantFocus(id));
        }
        fn on_inner_focus(&mut self, id: WidgetId, path: &[WidgetId]) {
            self.log.push(Event::InnerFocus(id, path.to_vec()));
        }
    }

    fn spatial() -> Strategy {
        Strategy::Spatial(SpatialConfig::default())
    }

    fn cyclical_row() -> Strategy {
        Strategy::Spatial(SpatialConfig {
            cyclical_x: true,
            ..SpatialConfig::default()
        })
    }

    /// A root container with three leaves laid out left to right.
    fn row(strategy: Strategy) -> (FocusTree, WidgetId, [WidgetId; 3]) {
        let mut tree = FocusTree::new();
        let root = tree.add_container(None, Some("row"), strategy);
        let a = tree.add_leaf(root, Some("a"), Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = tree.add_leaf(root, Some("b"), Rect::new(20.0, 0.0, 30.0, 10.0));
        let c = tree.add_leaf(root, Some("c"), Rect::new(40.0, 0.0, 50.0, 10.0));
        (tree, root, [a, b, c])
    }

    #[test]
    fn focus_activates_first_focusable_child() {
        let (mut tree, root, [a, ..]) = row(spatial());
        tree.focus(root, None, &mut NoEvents);
        assert!(tree.is_focused(root));
        assert_eq!(tree.active_widget(root), Some(a));
        assert!(tree.is_focused(a));
    }

    #[test]
    fn focus_prefers_default_then_active() {
        let (mut tree, root, [a, b, c]) = row(spatial());
        tree.set_default_widget(root, Some(b));
        tree.focus(root, None, &mut NoEvents);
        assert_eq!(tree.active_widget(root), Some(b));

        // A retained active pointer beats the default on re-focus.
        assert!(tree.activate_widget(root, Some(c), None, &mut NoEvents));
        tree.blur(root, &mut NoEvents);
        assert!(!tree.is_focused(c));
        assert_eq!(tree.active_widget(root), Some(c));
        tree.focus(root, None, &mut NoEvents);
        assert_eq!(tree.active_widget(root), Some(c));
        assert!(tree.is_focused(c));
        let _ = a;
    }

    #[test]
    fn focus_from_rect_picks_nearest_child() {
        let (mut tree, root, [_, _, c]) = row(spatial());
        tree.focus(root, Some(Rect::new(45.0, 20.0, 55.0, 30.0)), &mut NoEvents);
        assert_eq!(tree.active_widget(root), Some(c));
    }

    #[test]
    fn arrow_keys_move_focus() {
        let (mut tree, root, [a, b, c]) = row(spatial());
        tree.focus(root, None, &mut NoEvents);

        assert!(tree.process_key(root, Key::Right, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(b));
        assert!(tree.process_key(root, Key::Right, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(c));

        // Nothing to the right and no wrap configured.
        assert!(!tree.process_key(root, Key::Right, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(c));

        assert!(tree.process_key(root, Key::Left, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(b));
        let _ = a;
    }

    #[test]
    fn cyclical_row_wraps_to_first_widget() {
        let (mut tree, root, [a, _, c]) = row(cyclical_row());
        tree.focus(root, None, &mut NoEvents);
        assert!(tree.activate_widget(root, Some(c), None, &mut NoEvents));

        assert!(tree.process_key(root, Key::Right, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(a));
    }

    #[test]
    fn key_skips_non_focusable_candidates() {
        let (mut tree, root, [a, b, c]) = row(spatial());
        tree.focus(root, None, &mut NoEvents);
        tree.set_enabled(b, false);

        assert!(tree.process_key(root, Key::Right, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(c));
        let _ = a;
    }

    #[test]
    fn blocked_rule_handles_key_without_moving() {
        let (mut tree, root, [a, ..]) = row(spatial());
        tree.focus(root, None, &mut NoEvents);
        tree.set_navigation_rule(a, Direction::Right, None, false);

        assert!(tree.process_key(root, Key::Right, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(a), "focus must not move");
    }

    #[test]
    fn explicit_rule_overrides_geometry() {
        let (mut tree, root, [a, b, c]) = row(spatial());
        tree.focus(root, None, &mut NoEvents);
        tree.set_navigation_rule(a, Direction::Right, Some(c), true);

        assert!(tree.process_key(root, Key::Right, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(c));

        // The bidirectional mirror routes LEFT straight back to a.
        assert!(tree.process_key(root, Key::Left, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(a));
        let _ = b;
    }

    #[test]
    #[should_panic(expected = "widget is not a member of this container")]
    fn activating_foreign_widget_panics() {
        let (mut tree, root, _) = row(spatial());
        let mut other = FocusTree::new();
        let foreign_root = other.add_container(None, None, spatial());
        let foreign = other.add_leaf(foreign_root, None, Rect::new(0.0, 0.0, 1.0, 1.0));
        tree.activate_widget(root, Some(foreign), None, &mut NoEvents);
    }

    #[test]
    fn activating_non_focusable_widget_is_a_failed_noop() {
        let (mut tree, root, [a, b, _]) = row(spatial());
        tree.focus(root, None, &mut NoEvents);
        tree.set_visible(b, false);

        assert!(!tree.activate_widget(root, Some(b), None, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(a));
        assert!(tree.is_focused(a), "failed activation must not blur anyone");
    }

    #[test]
    fn blurred_then_disabled_widget_refuses_reactivation() {
        let (mut tree, root, [a, b, _]) = row(spatial());
        tree.focus(root, None, &mut NoEvents);
        assert_eq!(tree.active_widget(root), Some(a));

        // The pointer survives the blur, but the widget is disabled before
        // the container comes back.
        tree.blur(root, &mut NoEvents);
        tree.set_enabled(a, false);

        assert!(!tree.activate_widget(root, Some(a), None, &mut NoEvents));

        // Re-focusing falls past the stale pointer to the next child.
        tree.focus(root, None, &mut NoEvents);
        assert_eq!(tree.active_widget(root), Some(b));
        assert!(tree.is_focused(b));
    }

    #[test]
    fn removing_active_widget_clears_pointer() {
        let (mut tree, root, [a, b, _]) = row(spatial());
        tree.focus(root, None, &mut NoEvents);
        tree.set_navigation_rule(b, Direction::Left, Some(a), false);

        tree.remove_widget(a);
        assert!(!tree.is_alive(a));
        assert_eq!(tree.active_widget(root), None);

        // Re-focusing falls back to the first remaining focusable child.
        tree.focus(root, None, &mut NoEvents);
        assert_eq!(tree.active_widget(root), Some(b));

        // The rule targeting the removed widget was purged: LEFT now runs
        // the automatic search and finds nothing.
        assert!(!tree.process_key(root, Key::Left, &mut NoEvents));
    }

    #[test]
    fn nested_containers_dispatch_depth_first() {
        let mut tree = FocusTree::new();
        let root = tree.add_container(None, None, spatial());
        let inner = tree.add_container(Some(root), Some("inner"), spatial());
        let one = tree.add_leaf(inner, Some("one"), Rect::new(0.0, 0.0, 10.0, 10.0));
        let two = tree.add_leaf(inner, Some("two"), Rect::new(20.0, 0.0, 30.0, 10.0));
        let outside = tree.add_leaf(root, Some("outside"), Rect::new(40.0, 0.0, 50.0, 10.0));

        tree.focus(root, None, &mut NoEvents);
        assert_eq!(tree.active_widget(root), Some(inner));
        assert_eq!(tree.active_widget(inner), Some(one));

        // The inner container consumes the key while it can move.
        assert!(tree.process_key(root, Key::Right, &mut NoEvents));
        assert_eq!(tree.active_widget(inner), Some(two));

        // At the inner edge the key bubbles up and leaves the container.
        assert!(tree.process_key(root, Key::Right, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(outside));
        assert!(!tree.is_focused(two));
        assert!(tree.is_focused(outside));
    }

    #[test]
    fn transition_event_order_is_blur_focus_bubble() {
        let (mut tree, root, [a, b, _]) = row(spatial());
        tree.focus(root, None, &mut NoEvents);

        let mut recorder = Recorder::default();
        assert!(tree.process_key(root, Key::Right, &mut recorder));
        assert_eq!(
            recorder.log,
            vec![
                Event::Blur(a),
                Event::Focus(b),
                Event::InnerFocus(root, vec![b]),
            ]
        );
    }

    #[test]
    fn inner_focus_bubbles_with_breadcrumbs() {
        let mut tree = FocusTree::new();
        let root = tree.add_container(None, None, spatial());
        let inner = tree.add_container(Some(root), None, spatial());
        let one = tree.add_leaf(inner, None, Rect::new(0.0, 0.0, 10.0, 10.0));
        let two = tree.add_leaf(inner, None, Rect::new(20.0, 0.0, 30.0, 10.0));
        tree.focus(root, None, &mut NoEvents);
        let _ = one;

        let mut recorder = Recorder::default();
        assert!(tree.process_key(root, Key::Right, &mut recorder));

        // The bubble visits the inner container first with the widget alone
        // in the path, then the root with the accumulated breadcrumb.
        assert_eq!(
            recorder.log,
            vec![
                Event::Blur(one),
                Event::Focus(two),
                Event::InnerFocus(inner, vec![two]),
                Event::InnerFocus(root, vec![two, inner]),
            ]
        );
    }

    #[test]
    fn request_focus_activates_the_whole_chain() {
        let mut tree = FocusTree::new();
        let root = tree.add_container(None, None, spatial());
        let left = tree.add_container(Some(root), None, spatial());
        let right = tree.add_container(Some(root), None, spatial());
        let l1 = tree.add_leaf(left, None, Rect::new(0.0, 0.0, 10.0, 10.0));
        let r1 = tree.add_leaf(right, None, Rect::new(20.0, 0.0, 30.0, 10.0));
        let r2 = tree.add_leaf(right, None, Rect::new(20.0, 20.0, 30.0, 30.0));
        tree.focus(root, None, &mut NoEvents);
        assert!(tree.is_focused(l1));

        let mut recorder = Recorder::default();
        assert!(tree.request_focus(r2, &mut recorder));
        assert_eq!(tree.active_widget(root), Some(right));
        assert_eq!(tree.active_widget(right), Some(r2));
        assert!(tree.is_focused(r2));
        assert!(!tree.is_focused(l1));
        assert_eq!(recorder.log.first(), Some(&Event::WantFocus(r2)));
        let _ = r1;
    }

    #[test]
    fn request_focus_refuses_non_focusable_widgets() {
        let (mut tree, root, [a, b, _]) = row(spatial());
        tree.focus(root, None, &mut NoEvents);
        tree.set_enabled(b, false);

        assert!(!tree.request_focus(b, &mut NoEvents));
        assert_eq!(tree.active_widget(root), Some(a));
    }

    #[test]
    fn container_focusability_requires_a_focusable_child() {
        let mut tree = FocusTree::new();
        let root = tree.add_container(None, None, spatial());
        let inner = tree.add_container(Some(root), None, spatial());
        assert!(!tree.is_focusable(inner), "no focusable children yet");

        let leaf = tree.add_leaf(inner, None, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(tree.is_focusable(inner));

        tree.set_visible(leaf, false);
        assert!(!tree.is_focusable(inner));
    }

    #[test]
    fn composite_area_is_union_of_children() {
        let mut tree = FocusTree::new();
        let root = tree.add_container(None, None, spatial());
        let inner = tree.add_container(Some(root), None, spatial());
        let one = tree.add_leaf(inner, None, Rect::new(0.0, 0.0, 10.0, 10.0));
        let two = tree.add_leaf(inner, None, Rect::new(20.0, 0.0, 30.0, 10.0));

        let area = tree.focusable_area(inner);
        assert_eq!(area.rects().len(), 2);
        assert_eq!(area.extrapolate(), Rect::new(0.0, 0.0, 30.0, 10.0));

        tree.set_visible(one, false);
        let area = tree.focusable_area(inner);
        assert_eq!(area.rects().len(), 1);

        // The focused rect follows the active child.
        tree.focus(root, None, &mut NoEvents);
        assert_eq!(tree.active_widget(inner), Some(two));
        assert_eq!(tree.focused_rect(inner), Some(Rect::new(20.0, 0.0, 30.0, 10.0)));
    }

    #[test]
    fn slot_reuse_bumps_generation() {
        let (mut tree, root, [a, ..]) = row(spatial());
        tree.remove_widget(a);
        let replacement = tree.add_leaf(root, Some("a2"), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(tree.is_alive(replacement));
        assert!(!tree.is_alive(a));
        assert_eq!(replacement.0, a.0, "freed slot must be reused");
        assert!(replacement.1 > a.1, "generation must increase on reuse");
    }

    #[test]
    #[should_panic(expected = "name is already taken in this container")]
    fn duplicate_names_panic() {
        let (mut tree, root, _) = row(spatial());
        let _ = tree.add_leaf(root, Some("a"), Rect::new(0.0, 0.0, 1.0, 1.0));
    }
}
