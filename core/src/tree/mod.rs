//! Control containment tree with per-node structural observers.
//!
//! Mutations never call observers directly. `attach` and `detach` return the
//! notifications owed to the observers subscribed on the affected parent, and
//! the owner delivers them with [`ControlTree::dispatch`] before handling the
//! next message.

use crate::error::TreeError;
use crate::types::{Control, NativeHandle};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Identifies a control in a [`ControlTree`].
    pub struct ControlId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Added,
    Removed,
}

/// A structural change addressed to one observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notification {
    pub observer: ObserverId,
    pub change: Change,
    pub parent: ControlId,
    pub child: ControlId,
}

/// Receives structural changes for the nodes it is subscribed on.
pub trait HierarchyObserver {
    fn observer_id(&self) -> ObserverId;

    fn control_added(&mut self, tree: &mut ControlTree, parent: ControlId, child: ControlId);

    fn control_removed(&mut self, tree: &mut ControlTree, parent: ControlId, child: ControlId);
}

struct Node {
    control: Control,
    parent: Option<ControlId>,
    children: Vec<ControlId>,
    observers: Vec<ObserverId>,
}

impl Node {
    fn new(control: Control) -> Self {
        Self {
            control,
            parent: None,
            children: Vec::new(),
            observers: Vec::new(),
        }
    }
}

pub struct ControlTree {
    nodes: SlotMap<ControlId, Node>,
    root: ControlId,
    next_observer: u64,
}

impl ControlTree {
    /// Creates a tree whose root is the window itself.
    pub fn new(root: Control) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(root));
        Self {
            nodes,
            root,
            next_observer: 0,
        }
    }

    pub fn root(&self) -> ControlId {
        self.root
    }

    pub fn new_observer_id(&mut self) -> ObserverId {
        self.next_observer += 1;
        ObserverId(self.next_observer)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.nodes.get(id).map(|n| &n.control)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.nodes.get_mut(id).map(|n| &mut n.control)
    }

    pub fn parent(&self, id: ControlId) -> Option<ControlId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: ControlId) -> &[ControlId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Returns all descendants of `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: ControlId) -> Vec<ControlId> {
        let mut out = Vec::new();
        let mut stack: Vec<ControlId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Returns true if `id` is reachable from the root.
    pub fn is_attached(&self, id: ControlId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.root {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    pub fn find_by_handle(&self, handle: NativeHandle) -> Option<ControlId> {
        self.nodes
            .iter()
            .find(|(_, n)| n.control.handle == handle)
            .map(|(id, _)| id)
    }

    /// Creates a detached control. It can receive children before it is
    /// attached.
    pub fn create(&mut self, control: Control) -> ControlId {
        self.nodes.insert(Node::new(control))
    }

    /// Attaches the detached sub-tree rooted at `child` beneath `parent`.
    pub fn attach(
        &mut self,
        parent: ControlId,
        child: ControlId,
    ) -> Result<Vec<Notification>, TreeError> {
        if child == self.root {
            return Err(TreeError::Root);
        }
        self.ensure_exists(parent)?;
        self.ensure_exists(child)?;
        if self.parent(child).is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::Cycle { parent, child });
        }

        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }

        tracing::trace!(target: "frameless_core::tree", ?parent, ?child, "attached control");
        Ok(self.notifications(parent, child, Change::Added))
    }

    /// Unlinks `child` from its parent. The sub-tree stays alive, detached.
    pub fn detach(&mut self, child: ControlId) -> Result<Vec<Notification>, TreeError> {
        if child == self.root {
            return Err(TreeError::Root);
        }
        self.ensure_exists(child)?;
        let parent = self.parent(child).ok_or(TreeError::NotAttached(child))?;

        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|&c| c != child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }

        tracing::trace!(target: "frameless_core::tree", ?parent, ?child, "detached control");
        Ok(self.notifications(parent, child, Change::Removed))
    }

    /// Frees a detached sub-tree. Returns the number of controls removed.
    pub fn destroy(&mut self, id: ControlId) -> Result<usize, TreeError> {
        if id == self.root {
            return Err(TreeError::Root);
        }
        self.ensure_exists(id)?;
        if self.parent(id).is_some() {
            return Err(TreeError::AlreadyAttached(id));
        }

        let mut doomed = self.descendants(id);
        doomed.push(id);
        for node in &doomed {
            self.nodes.remove(*node);
        }
        Ok(doomed.len())
    }

    /// Subscribes `observer` on `id`. Subscribing twice keeps one
    /// subscription. Returns false if the observer was already subscribed.
    pub fn subscribe(&mut self, id: ControlId, observer: ObserverId) -> bool {
        let was_subscribed = self.unsubscribe(id, observer);
        if let Some(node) = self.nodes.get_mut(id) {
            node.observers.push(observer);
        }
        !was_subscribed
    }

    /// Returns true if a subscription was removed.
    pub fn unsubscribe(&mut self, id: ControlId, observer: ObserverId) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        let before = node.observers.len();
        node.observers.retain(|&o| o != observer);
        node.observers.len() != before
    }

    pub fn observers(&self, id: ControlId) -> &[ObserverId] {
        self.nodes
            .get(id)
            .map(|n| n.observers.as_slice())
            .unwrap_or(&[])
    }

    /// Delivers the notifications addressed to `observer`. Returns how many
    /// were delivered.
    pub fn dispatch(
        &mut self,
        notifications: Vec<Notification>,
        observer: &mut dyn HierarchyObserver,
    ) -> usize {
        let id = observer.observer_id();
        let mut delivered = 0;
        for note in notifications.into_iter().filter(|n| n.observer == id) {
            match note.change {
                Change::Added => observer.control_added(self, note.parent, note.child),
                Change::Removed => observer.control_removed(self, note.parent, note.child),
            }
            delivered += 1;
        }
        delivered
    }

    fn notifications(
        &self,
        parent: ControlId,
        child: ControlId,
        change: Change,
    ) -> Vec<Notification> {
        self.observers(parent)
            .iter()
            .map(|&observer| Notification {
                observer,
                change,
                parent,
                child,
            })
            .collect()
    }

    fn ensure_exists(&self, id: ControlId) -> Result<(), TreeError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(TreeError::UnknownControl(id))
        }
    }

    fn is_ancestor_or_self(&self, ancestor: ControlId, id: ControlId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }
}
