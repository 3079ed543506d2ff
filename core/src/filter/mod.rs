//! Per-control border filters.
//!
//! A filter answers the hit-test query that arrives at a descendant control's
//! own handle. Inside the parent window's resize border it reports
//! [`HitTest::Transparent`] so the query falls through to the window, which
//! then classifies the point as a resize edge. Everywhere else the control
//! keeps its normal handling.

use crate::error::BindError;
use crate::types::{BorderSides, HitTest, NativeHandle, Point, Rect};
use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Window geometry shared with filters.
///
/// Filters hold it weakly: they look up the window's bounds but never keep
/// the window alive.
#[derive(Debug, Default)]
pub struct WindowGeometry {
    bounds: Cell<Rect>,
    maximized: Cell<bool>,
}

impl WindowGeometry {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: Cell::new(bounds),
            maximized: Cell::new(false),
        }
    }

    /// A maximized window has no resize borders, for the window and for
    /// every filter that reads this geometry.
    pub fn is_maximized(&self) -> bool {
        self.maximized.get()
    }

    pub fn set_maximized(&self, maximized: bool) {
        self.maximized.set(maximized);
    }

    /// Client bounds in screen coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    pub fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(bounds);
    }
}

/// Returns true when `screen` lies within `thickness` of an enabled side of
/// `parent`.
///
/// The point is compared in screen space against the parent's rectangle, not
/// against the control's own bounds.
pub fn within_parent_border(screen: Point, parent: Rect, thickness: i32, sides: BorderSides) -> bool {
    if thickness <= 0 {
        return false;
    }

    (sides.left && screen.x <= parent.left.saturating_add(thickness))
        || (sides.top && screen.y <= parent.top.saturating_add(thickness))
        || (sides.right && screen.x >= parent.right.saturating_sub(thickness))
        || (sides.bottom && screen.y >= parent.bottom.saturating_sub(thickness))
}

/// Mutable filter settings read by the native interception callback.
pub struct FilterState {
    thickness: Cell<i32>,
    sides: Cell<BorderSides>,
    drag_target: Cell<bool>,
    window: Weak<WindowGeometry>,
}

impl FilterState {
    pub fn new(thickness: i32, sides: BorderSides, window: Weak<WindowGeometry>) -> Self {
        Self {
            thickness: Cell::new(thickness),
            sides: Cell::new(sides),
            drag_target: Cell::new(false),
            window,
        }
    }

    pub fn thickness(&self) -> i32 {
        self.thickness.get()
    }

    pub fn set_thickness(&self, thickness: i32) {
        self.thickness.set(thickness);
    }

    pub fn sides(&self) -> BorderSides {
        self.sides.get()
    }

    pub fn set_sides(&self, sides: BorderSides) {
        self.sides.set(sides);
    }

    pub fn is_drag_target(&self) -> bool {
        self.drag_target.get()
    }

    pub fn set_drag_target(&self, drag_target: bool) {
        self.drag_target.set(drag_target);
    }

    /// Classifies a screen point for the filtered control.
    ///
    /// Returns `Transparent` inside the window's border, `Caption` for the
    /// drag target, and `Unhandled` otherwise. A filter whose window is gone
    /// always returns `Unhandled`; so does one whose window is maximized,
    /// apart from the drag target's `Caption`.
    pub fn hit_test(&self, screen: Point) -> HitTest {
        let Some(window) = self.window.upgrade() else {
            return HitTest::Unhandled;
        };

        if !window.is_maximized()
            && within_parent_border(screen, window.bounds(), self.thickness(), self.sides()) {
            HitTest::Transparent
        } else if self.is_drag_target() {
            HitTest::Caption
        } else {
            HitTest::Unhandled
        }
    }
}

impl fmt::Debug for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterState")
            .field("thickness", &self.thickness())
            .field("sides", &self.sides())
            .field("drag_target", &self.is_drag_target())
            .field("window_alive", &(self.window.strong_count() > 0))
            .finish()
    }
}

/// A live interception of a native handle. Dropping it releases the handle.
pub trait HandleBinding {
    fn handle(&self) -> NativeHandle;
}

/// Installs interceptions on native handles.
pub trait HandleBinder {
    /// Routes hit-test queries arriving at `handle` through `state`.
    fn bind(
        &mut self,
        handle: NativeHandle,
        state: Rc<FilterState>,
    ) -> Result<Box<dyn HandleBinding>, BindError>;
}

/// Binder with no native side. Rejects null handles.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBinder;

struct NullBinding(NativeHandle);

impl HandleBinding for NullBinding {
    fn handle(&self) -> NativeHandle {
        self.0
    }
}

impl HandleBinder for NullBinder {
    fn bind(
        &mut self,
        handle: NativeHandle,
        _state: Rc<FilterState>,
    ) -> Result<Box<dyn HandleBinding>, BindError> {
        if handle.is_null() {
            return Err(BindError::NullHandle);
        }
        Ok(Box::new(NullBinding(handle)))
    }
}

/// Filter owned by the registry for one attached control.
///
/// A filter without a binding is inert: the control behaves as if no filter
/// existed.
pub struct BorderFilter {
    state: Rc<FilterState>,
    binding: Option<Box<dyn HandleBinding>>,
}

impl BorderFilter {
    pub fn new(state: Rc<FilterState>, binding: Option<Box<dyn HandleBinding>>) -> Self {
        Self { state, binding }
    }

    pub fn inert(state: Rc<FilterState>) -> Self {
        Self::new(state, None)
    }

    pub fn is_inert(&self) -> bool {
        self.binding.is_none()
    }

    pub fn handle(&self) -> Option<NativeHandle> {
        self.binding.as_ref().map(|b| b.handle())
    }

    pub fn state(&self) -> &Rc<FilterState> {
        &self.state
    }

    pub fn thickness(&self) -> i32 {
        self.state.thickness()
    }

    pub fn set_thickness(&self, thickness: i32) {
        self.state.set_thickness(thickness);
    }

    pub fn sides(&self) -> BorderSides {
        self.state.sides()
    }

    pub fn set_sides(&self, sides: BorderSides) {
        self.state.set_sides(sides);
    }

    pub fn hit_test(&self, screen: Point) -> HitTest {
        if self.is_inert() {
            return HitTest::Unhandled;
        }
        self.state.hit_test(screen)
    }
}

impl fmt::Debug for BorderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BorderFilter")
            .field("state", &self.state)
            .field("handle", &self.handle())
            .finish()
    }
}
