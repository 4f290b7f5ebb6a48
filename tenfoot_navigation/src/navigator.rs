// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-container rule store and strategy dispatch.

use alloc::{vec, vec::Vec};
use tenfoot_geometry::Direction;

use crate::axis::PrincipalAxisConfig;
use crate::spatial::SpatialConfig;
use crate::{NavSpace, axis, order, spatial};

/// Automatic search strategy, chosen once per [`Navigator`] at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Strategy {
    /// Walk widgets in registration order; no geometry involved.
    Order,
    /// Geometric nearest-candidate search.
    Spatial(SpatialConfig),
    /// Spatial search restricted to the source's row/column.
    PrincipalAxis(PrincipalAxisConfig),
}

impl Strategy {
    /// Whether this strategy can rank candidates by distance to a rect.
    ///
    /// Hosts use this to decide whether "focus the widget nearest to this
    /// rect" requests are meaningful.
    pub const fn is_geometric(&self) -> bool {
        matches!(self, Self::Spatial(_) | Self::PrincipalAxis(_))
    }
}

/// Result of a [`Navigator::find_widgets`] query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Search<K> {
    /// An explicit stop rule matched: do not navigate in this direction.
    ///
    /// Deliberately distinct from `Candidates(vec![])`, which means "nothing
    /// reachable" and lets the caller try other mechanisms.
    Blocked,
    /// Candidates to try, in order of preference (possibly none).
    Candidates(Vec<K>),
}

/// Explicit per-direction override for one widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rule<K> {
    /// Stop: no navigation in this direction.
    Stop,
    /// Navigate to a specific widget.
    To(K),
}

type RuleSet<K> = [Option<Rule<K>>; 4];

/// Directional override table plus an automatic search [`Strategy`].
///
/// Widgets register in a significant order (declared-order search walks it)
/// and each holds a partial `Direction → target` rule map. Explicit rules
/// always win over automatic search; see [`Navigator::find_widgets`].
///
/// ## Panics
///
/// Rule mutation and queries that name an unregistered widget panic: keying
/// rules off a widget the navigator has never seen is a programming error,
/// not a recoverable condition.
#[derive(Clone, Debug)]
pub struct Navigator<K> {
    // Parallel arrays, 1:1 by index.
    widgets: Vec<K>,
    rules: Vec<RuleSet<K>>,
    strategy: Strategy,
}

impl<K: Copy + Eq> Navigator<K> {
    /// Create an empty navigator with the given strategy.
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            widgets: Vec::new(),
            rules: Vec::new(),
            strategy,
        }
    }

    /// The automatic search strategy.
    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Registered widgets in registration order.
    pub fn widgets(&self) -> &[K] {
        &self.widgets
    }

    /// Whether `widget` is registered.
    pub fn contains(&self, widget: K) -> bool {
        self.widgets.contains(&widget)
    }

    /// Register a widget at the end of the order.
    ///
    /// # Panics
    ///
    /// Panics if `widget` is already registered.
    pub fn add_widget(&mut self, widget: K) {
        assert!(!self.contains(widget), "widget is already registered");
        self.widgets.push(widget);
        self.rules.push([None; 4]);
    }

    /// Unregister a widget, purging its own rule entry and every rule that
    /// targets it.
    ///
    /// # Panics
    ///
    /// Panics if `widget` is not registered.
    pub fn remove_widget(&mut self, widget: K) {
        let index = self.index_of(widget);
        self.widgets.remove(index);
        self.rules.remove(index);
        for rules in &mut self.rules {
            for slot in rules.iter_mut() {
                if *slot == Some(Rule::To(widget)) {
                    *slot = None;
                }
            }
        }
    }

    /// Set the rule for `(from, direction)`.
    ///
    /// `Some(target)` navigates straight to `target`; `None` is the explicit
    /// stop rule. Both replace any previous rule for the pair.
    ///
    /// # Panics
    ///
    /// Panics if `from` (or a `Some` target) is not registered.
    pub fn set_rule(&mut self, from: K, direction: Direction, target: Option<K>) {
        let rule = match target {
            Some(to) => {
                assert!(self.contains(to), "rule target is not registered");
                Rule::To(to)
            }
            None => Rule::Stop,
        };
        let index = self.index_of(from);
        self.rules[index][direction.index()] = Some(rule);
    }

    /// Remove the rule for `(from, direction)`, restoring automatic search.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not registered.
    pub fn remove_rule(&mut self, from: K, direction: Direction) {
        let index = self.index_of(from);
        self.rules[index][direction.index()] = None;
    }

    /// The rule for `(from, direction)`: `None` when no rule is set,
    /// `Some(None)` for an explicit stop, `Some(Some(target))` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not registered.
    pub fn rule(&self, from: K, direction: Direction) -> Option<Option<K>> {
        let index = self.index_of(from);
        self.rules[index][direction.index()].map(|rule| match rule {
            Rule::Stop => None,
            Rule::To(target) => Some(target),
        })
    }

    /// Drop every rule of every widget.
    pub fn clear_rules(&mut self) {
        for rules in &mut self.rules {
            *rules = [None; 4];
        }
    }

    /// Ordered focus candidates for a move from `from` towards `direction`.
    ///
    /// An explicit rule for the pair wins outright: a target rule yields that
    /// single candidate (focusability is left to the caller's activation
    /// attempt), a stop rule yields [`Search::Blocked`]. Otherwise the
    /// strategy's automatic search runs over `space`; the source itself and
    /// non-focusable widgets are always excluded from automatic results.
    ///
    /// # Panics
    ///
    /// Panics if `from` is `Some` and not registered.
    pub fn find_widgets(
        &self,
        from: Option<K>,
        direction: Direction,
        space: &NavSpace<'_, K>,
    ) -> Search<K> {
        if let Some(source) = from {
            let index = self.index_of(source);
            match self.rules[index][direction.index()] {
                Some(Rule::Stop) => return Search::Blocked,
                Some(Rule::To(target)) => return Search::Candidates(vec![target]),
                None => {}
            }
        }

        let found = match &self.strategy {
            Strategy::Order => order::auto_navigate(&self.widgets, space, from, direction),
            Strategy::Spatial(config) => spatial::auto_navigate(config, space, from, direction),
            Strategy::PrincipalAxis(config) => axis::auto_navigate(config, space, from, direction),
        };
        Search::Candidates(found)
    }

    fn index_of(&self, widget: K) -> usize {
        self.widgets
            .iter()
            .position(|&w| w == widget)
            .expect("widget is not registered")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NavEntry;
    use alloc::{vec, vec::Vec};
    use kurbo::Rect;

    fn spatial_navigator() -> (Navigator<u32>, Vec<NavEntry<u32>>) {
        let mut nav = Navigator::new(Strategy::Spatial(SpatialConfig::default()));
        let entries: Vec<NavEntry<u32>> = (0..3)
            .map(|i| {
                let x = f64::from(i) * 20.0;
                NavEntry::new(i + 1, Rect::new(x, 0.0, x + 10.0, 10.0))
            })
            .collect();
        for e in &entries {
            nav.add_widget(e.id);
        }
        (nav, entries)
    }

    #[test]
    fn explicit_rule_wins_over_automatic_search() {
        let (mut nav, entries) = spatial_navigator();
        let space = NavSpace { entries: &entries };

        // Automatic search would pick widget 2.
        assert_eq!(
            nav.find_widgets(Some(1), Direction::Right, &space),
            Search::Candidates(vec![2, 3])
        );

        nav.set_rule(1, Direction::Right, Some(3));
        assert_eq!(
            nav.find_widgets(Some(1), Direction::Right, &space),
            Search::Candidates(vec![3])
        );

        // Other directions are untouched.
        assert_eq!(
            nav.find_widgets(Some(2), Direction::Left, &space),
            Search::Candidates(vec![1])
        );
    }

    #[test]
    fn stop_rule_blocks_instead_of_falling_through() {
        let (mut nav, entries) = spatial_navigator();
        let space = NavSpace { entries: &entries };

        nav.set_rule(1, Direction::Right, None);
        assert_eq!(
            nav.find_widgets(Some(1), Direction::Right, &space),
            Search::Blocked
        );

        // Removing the rule restores automatic search.
        nav.remove_rule(1, Direction::Right);
        assert_eq!(
            nav.find_widgets(Some(1), Direction::Right, &space),
            Search::Candidates(vec![2, 3])
        );
    }

    #[test]
    fn rule_accessor_distinguishes_stop_from_absent() {
        let (mut nav, _) = spatial_navigator();
        assert_eq!(nav.rule(1, Direction::Right), None);
        nav.set_rule(1, Direction::Right, None);
        assert_eq!(nav.rule(1, Direction::Right), Some(None));
        nav.set_rule(1, Direction::Right, Some(2));
        assert_eq!(nav.rule(1, Direction::Right), Some(Some(2)));
    }

    #[test]
    fn removal_purges_rules_targeting_the_widget() {
        let (mut nav, _entries) = spatial_navigator();
        nav.set_rule(1, Direction::Right, Some(2));
        nav.set_rule(3, Direction::Left, Some(2));
        nav.set_rule(3, Direction::Right, None);

        nav.remove_widget(2);
        assert!(!nav.contains(2));
        assert_eq!(nav.widgets(), &[1, 3]);

        // Rules pointing at widget 2 fell back to "no rule"; the stop rule
        // on widget 3 survived.
        assert_eq!(nav.rule(1, Direction::Right), None);
        assert_eq!(nav.rule(3, Direction::Left), None);
        assert_eq!(nav.rule(3, Direction::Right), Some(None));
    }

    #[test]
    fn clear_rules_resets_every_entry() {
        let (mut nav, entries) = spatial_navigator();
        let space = NavSpace { entries: &entries };
        nav.set_rule(1, Direction::Right, None);
        nav.set_rule(2, Direction::Left, Some(3));

        nav.clear_rules();
        assert_eq!(nav.rule(1, Direction::Right), None);
        assert_eq!(nav.rule(2, Direction::Left), None);
        assert_eq!(
            nav.find_widgets(Some(1), Direction::Right, &space),
            Search::Candidates(vec![2, 3])
        );
    }

    #[test]
    #[should_panic(expected = "widget is not registered")]
    fn rule_for_foreign_widget_panics() {
        let (mut nav, _) = spatial_navigator();
        nav.set_rule(99, Direction::Right, Some(1));
    }

    #[test]
    #[should_panic(expected = "rule target is not registered")]
    fn foreign_rule_target_panics() {
        let (mut nav, _) = spatial_navigator();
        nav.set_rule(1, Direction::Right, Some(99));
    }

    #[test]
    #[should_panic(expected = "widget is already registered")]
    fn duplicate_registration_panics() {
        let (mut nav, _) = spatial_navigator();
        nav.add_widget(1);
    }

    #[test]
    fn order_strategy_ignores_geometry() {
        let mut nav: Navigator<u32> = Navigator::new(Strategy::Order);
        for id in [1, 2, 3] {
            nav.add_widget(id);
        }
        // All entries share a rect: only registration order matters.
        let entries: Vec<NavEntry<u32>> = [1, 2, 3]
            .into_iter()
            .map(|id| NavEntry::new(id, Rect::new(0.0, 0.0, 1.0, 1.0)))
            .collect();
        let space = NavSpace { entries: &entries };

        assert_eq!(
            nav.find_widgets(Some(2), Direction::Right, &space),
            Search::Candidates(vec![3])
        );
        assert_eq!(
            nav.find_widgets(Some(2), Direction::Up, &space),
            Search::Candidates(vec![1])
        );
        assert!(!nav.strategy().is_geometric());
    }
}
