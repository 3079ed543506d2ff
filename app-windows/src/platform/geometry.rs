//! Conversions between Win32 rectangles and frameless geometry.

use frameless_core::{Point, Rect};
use windows::Win32::{
    Foundation::{HWND, POINT, RECT},
    Graphics::Gdi::{ClientToScreen, ScreenToClient},
    UI::WindowsAndMessaging::{GetClientRect, GetParent, GetWindowRect},
};

fn from_rect(rect: RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

/// Window rectangle in screen coordinates.
pub fn window_rect(hwnd: HWND) -> Rect {
    let mut rect = RECT::default();
    let _ = unsafe { GetWindowRect(hwnd, &mut rect) };
    from_rect(rect)
}

/// Client rectangle in screen coordinates.
pub fn client_bounds_on_screen(hwnd: HWND) -> Rect {
    let mut rect = RECT::default();
    let _ = unsafe { GetClientRect(hwnd, &mut rect) };

    let mut origin = POINT { x: 0, y: 0 };
    let _ = unsafe { ClientToScreen(hwnd, &mut origin) };

    Rect::new(
        origin.x,
        origin.y,
        origin.x + rect.right,
        origin.y + rect.bottom,
    )
}

/// Bounds of a child window relative to its parent's client area.
pub fn control_bounds(hwnd: HWND) -> Rect {
    let screen = window_rect(hwnd);
    let Ok(parent) = (unsafe { GetParent(hwnd) }) else {
        return screen;
    };

    let mut origin = POINT {
        x: screen.left,
        y: screen.top,
    };
    let _ = unsafe { ScreenToClient(parent, &mut origin) };
    let local = Point::new(origin.x, origin.y);
    Rect::from_origin_size(local, screen.size())
}
