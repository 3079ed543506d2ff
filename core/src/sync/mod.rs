//! Keeps one border filter per attached descendant control.

use crate::filter::{BorderFilter, FilterState, HandleBinder, WindowGeometry};
use crate::tree::{ControlId, ControlTree, HierarchyObserver, ObserverId};
use crate::types::{BorderSides, ExclusionList, HitTest, Point};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Filter registry driven by structural notifications.
///
/// Subscribes itself on every control it creates a filter for, so changes
/// anywhere below the root reach it. Bind failures leave that control with an
/// inert filter and are never propagated.
pub struct FilterSync<B> {
    id: ObserverId,
    binder: B,
    exclusions: ExclusionList,
    window: Weak<WindowGeometry>,
    thickness: i32,
    default_sides: BorderSides,
    drag_target: Option<ControlId>,
    filters: HashMap<ControlId, BorderFilter>,
}

impl<B: HandleBinder> FilterSync<B> {
    pub fn new(
        id: ObserverId,
        binder: B,
        exclusions: ExclusionList,
        window: Weak<WindowGeometry>,
        thickness: i32,
        default_sides: BorderSides,
    ) -> Self {
        Self {
            id,
            binder,
            exclusions,
            window,
            thickness,
            default_sides,
            drag_target: None,
            filters: HashMap::new(),
        }
    }

    /// Subscribes on the tree root and filters every control already attached.
    pub fn watch_root(&mut self, tree: &mut ControlTree) -> usize {
        let root = tree.root();
        tree.subscribe(root, self.id);
        let children = tree.children(root).to_vec();
        children
            .into_iter()
            .map(|child| self.add_subtree(tree, child))
            .sum()
    }

    /// Creates filters for `id` and all of its descendants and subscribes on
    /// each of them. Returns the number of filters created.
    pub fn add_subtree(&mut self, tree: &mut ControlTree, id: ControlId) -> usize {
        if !tree.contains(id) {
            return 0;
        }

        let mut nodes = vec![id];
        nodes.extend(tree.descendants(id));

        let mut created = 0;
        for node in nodes {
            if !self.filters.contains_key(&node) {
                let Some(filter) = self.create_filter(tree, node) else {
                    continue;
                };
                self.filters.insert(node, filter);
                created += 1;
            }
            tree.subscribe(node, self.id);
        }

        tracing::debug!(
            target: "frameless_core::sync",
            ?id,
            created,
            total = self.filters.len(),
            "filtered sub-tree"
        );
        created
    }

    /// Drops the filters of `id` and all of its descendants and unsubscribes
    /// from each of them. Returns the number of filters removed.
    pub fn remove_subtree(&mut self, tree: &mut ControlTree, id: ControlId) -> usize {
        let mut nodes = vec![id];
        nodes.extend(tree.descendants(id));

        let mut removed = 0;
        for node in nodes {
            if self.filters.remove(&node).is_some() {
                removed += 1;
            }
            tree.unsubscribe(node, self.id);
        }

        tracing::debug!(
            target: "frameless_core::sync",
            ?id,
            removed,
            total = self.filters.len(),
            "unfiltered sub-tree"
        );
        removed
    }

    fn create_filter(&mut self, tree: &ControlTree, id: ControlId) -> Option<BorderFilter> {
        let control = tree.get(id)?;
        let state = Rc::new(FilterState::new(
            self.thickness,
            self.default_sides,
            self.window.clone(),
        ));
        state.set_drag_target(self.drag_target == Some(id));

        if self.exclusions.contains(&control.kind) {
            tracing::debug!(
                target: "frameless_core::sync",
                ?id,
                kind = %control.kind,
                "control kind excluded, filter is inert"
            );
            return Some(BorderFilter::inert(state));
        }

        match self.binder.bind(control.handle, state.clone()) {
            Ok(binding) => Some(BorderFilter::new(state, Some(binding))),
            Err(err) => {
                tracing::warn!(
                    target: "frameless_core::sync",
                    ?id,
                    kind = %control.kind,
                    %err,
                    "failed to bind control, filter is inert"
                );
                Some(BorderFilter::inert(state))
            }
        }
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    /// Sets the thickness used by every current and future filter.
    pub fn set_thickness(&mut self, thickness: i32) {
        self.thickness = thickness;
        for filter in self.filters.values() {
            filter.set_thickness(thickness);
        }
    }

    pub fn default_sides(&self) -> BorderSides {
        self.default_sides
    }

    /// Sets the side toggles of one control's filter. Returns false if the
    /// control has no filter.
    pub fn set_sides(&self, id: ControlId, sides: BorderSides) -> bool {
        match self.filters.get(&id) {
            Some(filter) => {
                filter.set_sides(sides);
                true
            }
            None => false,
        }
    }

    pub fn drag_target(&self) -> Option<ControlId> {
        self.drag_target
    }

    pub fn set_drag_target(&mut self, target: Option<ControlId>) {
        if let Some(filter) = self.drag_target.and_then(|id| self.filters.get(&id)) {
            filter.state().set_drag_target(false);
        }
        self.drag_target = target;
        if let Some(filter) = target.and_then(|id| self.filters.get(&id)) {
            filter.state().set_drag_target(true);
        }
    }

    /// Classifies a screen point arriving at a filtered control.
    pub fn hit_test(&self, id: ControlId, screen: Point) -> HitTest {
        self.filters
            .get(&id)
            .map_or(HitTest::Unhandled, |filter| filter.hit_test(screen))
    }

    pub fn filter(&self, id: ControlId) -> Option<&BorderFilter> {
        self.filters.get(&id)
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.filters.contains_key(&id)
    }

    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.filters.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn exclusions(&self) -> &ExclusionList {
        &self.exclusions
    }

    pub fn binder(&self) -> &B {
        &self.binder
    }
}

impl<B: HandleBinder> HierarchyObserver for FilterSync<B> {
    fn observer_id(&self) -> ObserverId {
        self.id
    }

    fn control_added(&mut self, tree: &mut ControlTree, _parent: ControlId, child: ControlId) {
        self.add_subtree(tree, child);
    }

    fn control_removed(&mut self, tree: &mut ControlTree, _parent: ControlId, child: ControlId) {
        self.remove_subtree(tree, child);
    }
}
