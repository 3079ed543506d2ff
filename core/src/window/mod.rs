//! Borderless window combining the classifier, the control tree and the
//! filter registry.

use crate::classifier::classify_screen;
use crate::error::TreeError;
use crate::filter::{HandleBinder, WindowGeometry};
use crate::sync::FilterSync;
use crate::tree::{ControlId, ControlTree, Notification};
use crate::types::{BorderSides, Control, FramelessConfig, HitTest, NativeHandle, Point, Rect};
use std::rc::Rc;

pub struct FramelessWindow<B: HandleBinder> {
    geometry: Rc<WindowGeometry>,
    tree: ControlTree,
    sync: FilterSync<B>,
    thickness: i32,
}

impl<B: HandleBinder> FramelessWindow<B> {
    /// Creates a window whose client area covers `bounds` (screen
    /// coordinates). `root` is the window's own control.
    pub fn new(config: &FramelessConfig, binder: B, bounds: Rect, root: Control) -> Self {
        let geometry = Rc::new(WindowGeometry::new(bounds));
        let mut tree = ControlTree::new(root);
        let observer = tree.new_observer_id();
        let mut sync = FilterSync::new(
            observer,
            binder,
            config.exclusions(),
            Rc::downgrade(&geometry),
            config.resize_border_thickness,
            config.default_sides,
        );
        sync.watch_root(&mut tree);

        Self {
            geometry,
            tree,
            sync,
            thickness: config.resize_border_thickness,
        }
    }

    /// Answers a hit-test query arriving at the window itself.
    pub fn hit_test(&self, screen: Point) -> HitTest {
        if self.geometry.is_maximized() {
            return HitTest::Unhandled;
        }
        classify_screen(screen, self.geometry.bounds(), self.thickness)
    }

    /// Answers a hit-test query arriving at a descendant control's handle.
    pub fn hit_test_control(&self, id: ControlId, screen: Point) -> HitTest {
        self.sync.hit_test(id, screen)
    }

    /// Creates `control` and attaches it beneath `parent`.
    pub fn add_control(
        &mut self,
        parent: ControlId,
        control: Control,
    ) -> Result<ControlId, TreeError> {
        let id = self.tree.create(control);
        match self.attach(parent, id) {
            Ok(()) => Ok(id),
            Err(err) => {
                let _ = self.tree.destroy(id);
                Err(err)
            }
        }
    }

    /// Creates a detached control, e.g. to assemble a sub-tree before
    /// attaching it in one step.
    pub fn create_control(&mut self, control: Control) -> ControlId {
        self.tree.create(control)
    }

    /// Attaches a detached control beneath `parent`.
    pub fn attach(&mut self, parent: ControlId, child: ControlId) -> Result<(), TreeError> {
        let notes = self.tree.attach(parent, child)?;
        self.deliver(notes);
        Ok(())
    }

    /// Detaches a control. Its sub-tree stays alive and can be attached again.
    pub fn remove_control(&mut self, id: ControlId) -> Result<(), TreeError> {
        let notes = self.tree.detach(id)?;
        self.deliver(notes);
        Ok(())
    }

    /// Detaches a control if needed and frees its sub-tree.
    pub fn destroy_control(&mut self, id: ControlId) -> Result<usize, TreeError> {
        if self.tree.parent(id).is_some() {
            self.remove_control(id)?;
        }
        let freed = self.tree.destroy(id)?;
        if let Some(target) = self.sync.drag_target()
            && !self.tree.contains(target)
        {
            self.sync.set_drag_target(None);
        }
        Ok(freed)
    }

    fn deliver(&mut self, notes: Vec<Notification>) {
        self.tree.dispatch(notes, &mut self.sync);
    }

    pub fn resize_border_thickness(&self) -> i32 {
        self.thickness
    }

    pub fn set_resize_border_thickness(&mut self, thickness: i32) {
        tracing::debug!(target: "frameless_core::window", thickness, "resize border changed");
        self.thickness = thickness;
        self.sync.set_thickness(thickness);
    }

    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    /// Updates the client bounds after a move or resize.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.geometry.set_bounds(bounds);
    }

    pub fn is_maximized(&self) -> bool {
        self.geometry.is_maximized()
    }

    /// A maximized window has no resize borders. The flag lives in the
    /// geometry shared with every filter, so native callbacks see it too.
    pub fn set_maximized(&mut self, maximized: bool) {
        self.geometry.set_maximized(maximized);
    }

    pub fn drag_target(&self) -> Option<ControlId> {
        self.sync.drag_target()
    }

    pub fn set_drag_target(&mut self, target: Option<ControlId>) {
        self.sync.set_drag_target(target);
    }

    pub fn set_border_sides(&mut self, id: ControlId, sides: BorderSides) -> bool {
        self.sync.set_sides(id, sides)
    }

    pub fn root(&self) -> ControlId {
        self.tree.root()
    }

    pub fn find_by_handle(&self, handle: NativeHandle) -> Option<ControlId> {
        self.tree.find_by_handle(handle)
    }

    pub fn tree(&self) -> &ControlTree {
        &self.tree
    }

    pub fn filters(&self) -> &FilterSync<B> {
        &self.sync
    }
}

#[cfg(test)]
mod tests;
