//! Application state bridging Win32 handles to the frameless model.

use crate::platform::geometry::{client_bounds_on_screen, control_bounds, window_rect};
use crate::platform::subclass::SubclassBinder;
use frameless_core::{
    Control, ControlId, ControlKind, FramelessConfig, FramelessWindow, HitTest, NativeHandle,
    Point,
};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{GetClassNameW, GetParent};

pub struct App {
    hwnd: HWND,
    window: FramelessWindow<SubclassBinder>,
    min_size: (i32, i32),
}

pub fn handle_of(hwnd: HWND) -> NativeHandle {
    NativeHandle(hwnd.0 as isize)
}

fn control_kind(hwnd: HWND) -> ControlKind {
    let mut buf = [0u16; 256];
    let len = unsafe { GetClassNameW(hwnd, &mut buf) };
    let name = if len > 0 {
        String::from_utf16_lossy(&buf[..(len as usize).min(buf.len())])
    } else {
        String::new()
    };
    ControlKind::try_from(name.as_str()).unwrap_or_else(|_| {
        ControlKind::try_from("Window").expect("literal control kind is valid")
    })
}

impl App {
    pub fn new(hwnd: HWND, config: &FramelessConfig) -> Self {
        let root = Control::new(
            handle_of(hwnd),
            control_kind(hwnd),
            client_bounds_on_screen(hwnd),
        );
        let window = FramelessWindow::new(
            config,
            SubclassBinder,
            client_bounds_on_screen(hwnd),
            root,
        );
        Self {
            hwnd,
            window,
            min_size: (config.min_width, config.min_height),
        }
    }

    pub fn min_size(&self) -> (i32, i32) {
        self.min_size
    }

    /// Classifies a hit-test query arriving at the top-level window.
    ///
    /// Interior points over the drag target become `Caption` so the system
    /// moves the whole window.
    pub fn hit_test(&self, screen: Point) -> HitTest {
        match self.window.hit_test(screen) {
            HitTest::Unhandled if self.drag_target_contains(screen) => HitTest::Caption,
            other => other,
        }
    }

    fn drag_target_contains(&self, screen: Point) -> bool {
        let Some(target) = self.window.drag_target() else {
            return false;
        };
        let Some(control) = self.window.tree().get(target) else {
            return false;
        };
        window_rect(HWND(control.handle.0 as *mut _)).contains(screen)
    }

    /// Registers a newly created child window. Ignores handles that are
    /// already known or whose parent is not tracked.
    pub fn on_child_created(&mut self, child: HWND) {
        let handle = handle_of(child);
        if self.window.find_by_handle(handle).is_some() {
            return;
        }

        let parent_hwnd = unsafe { GetParent(child) }.unwrap_or(self.hwnd);
        let Some(parent) = self.window.find_by_handle(handle_of(parent_hwnd)) else {
            tracing::debug!(?child, ?parent_hwnd, "child of untracked parent ignored");
            return;
        };

        let control = Control::new(handle, control_kind(child), control_bounds(child));
        match self.window.add_control(parent, control) {
            Ok(id) => tracing::debug!(?child, ?id, "tracking child window"),
            Err(err) => tracing::warn!(?child, %err, "failed to track child window"),
        }
    }

    /// Forgets a child window that is being destroyed, with all descendants.
    pub fn on_child_destroyed(&mut self, child: HWND) {
        let Some(id) = self.window.find_by_handle(handle_of(child)) else {
            return;
        };
        if let Err(err) = self.window.destroy_control(id) {
            tracing::warn!(?child, %err, "failed to forget child window");
        }
    }

    pub fn on_bounds_changed(&mut self, maximized: Option<bool>) {
        self.window.set_bounds(client_bounds_on_screen(self.hwnd));
        if let Some(maximized) = maximized {
            self.window.set_maximized(maximized);
        }
    }

    pub fn set_drag_target(&mut self, hwnd: HWND) -> Option<ControlId> {
        let id = self.window.find_by_handle(handle_of(hwnd));
        self.window.set_drag_target(id);
        id
    }

    pub fn window(&mut self) -> &mut FramelessWindow<SubclassBinder> {
        &mut self.window
    }
}
