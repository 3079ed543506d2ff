//! Window message handlers.

use crate::app::App;
use frameless_core::Point;
use windows::Win32::{
    Foundation::{HWND, LPARAM, LRESULT, WPARAM},
    UI::WindowsAndMessaging::{
        DefWindowProcW, MINMAXINFO, WM_CREATE, WM_DESTROY, WM_NCHITTEST,
    },
};

/// WM_NCCALCSIZE: Remove the non-client area so the client covers the whole
/// window.
pub fn on_nccalcsize() -> LRESULT {
    LRESULT(0)
}

/// WM_NCHITTEST: Resize borders, then the drag target, then default handling.
pub fn on_nchittest(app: &App, hwnd: HWND, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    let point = Point::from_lparam(lparam.0);
    match app.hit_test(point).code() {
        Some(code) => LRESULT(code),
        None => unsafe { DefWindowProcW(hwnd, WM_NCHITTEST, wparam, lparam) },
    }
}

/// WM_GETMINMAXINFO: Enforce minimum window size during resize.
pub fn on_getminmaxinfo(app: &App, lparam: LPARAM) -> LRESULT {
    let info = lparam.0 as *mut MINMAXINFO;
    if !info.is_null() {
        let (min_width, min_height) = app.min_size();
        unsafe {
            (*info).ptMinTrackSize.x = min_width;
            (*info).ptMinTrackSize.y = min_height;
        }
    }
    LRESULT(0)
}

/// WM_PARENTNOTIFY: Track direct children as they are created and destroyed.
pub fn on_parentnotify(app: &mut App, wparam: WPARAM, lparam: LPARAM) {
    let child = HWND(lparam.0 as *mut _);
    if child.0.is_null() {
        return;
    }
    match (wparam.0 & 0xFFFF) as u32 {
        WM_CREATE => app.on_child_created(child),
        WM_DESTROY => app.on_child_destroyed(child),
        _ => {}
    }
}

/// WM_SIZE: Refresh bounds; a maximized window loses its resize borders.
pub fn on_size(app: &mut App, wparam: WPARAM) -> LRESULT {
    // SIZE_MAXIMIZED = 2: maximized or snapped, no visible borders
    let maximized = wparam.0 as u32 == 2;
    app.on_bounds_changed(Some(maximized));
    LRESULT(0)
}

/// WM_MOVE: Refresh bounds so filters compare against the new position.
pub fn on_move(app: &mut App) -> LRESULT {
    app.on_bounds_changed(None);
    LRESULT(0)
}
