//! Window creation and message handling.

use crate::app::App;
use crate::platform::handlers::{
    on_getminmaxinfo, on_move, on_nccalcsize, on_nchittest, on_parentnotify, on_size,
};
use crate::platform::subclass::{WM_FRAMELESS_CHILD_CREATED, WM_FRAMELESS_CHILD_DESTROYED};
use frameless_core::{BorderSides, FramelessConfig};
use windows::{
    Win32::{
        Foundation::{HWND, LPARAM, LRESULT, TRUE, WPARAM},
        Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, DefWindowProcW, DispatchMessageW, GWLP_USERDATA, GetMessageW,
            GetSystemMetrics, GetWindowLongPtrW, IDC_ARROW, LoadCursorW, MSG,
            PostQuitMessage, RegisterClassW, SM_CXSCREEN, SM_CYSCREEN, SW_SHOW,
            SetWindowLongPtrW, ShowWindow, TranslateMessage, WINDOW_EX_STYLE,
            WM_DESTROY, WM_GETMINMAXINFO, WM_MOVE, WM_NCACTIVATE, WM_NCCALCSIZE, WM_NCHITTEST,
            WM_PARENTNOTIFY, WM_SIZE, WNDCLASSW, WS_CHILD, WS_CLIPCHILDREN, WS_MAXIMIZEBOX,
            WS_MINIMIZEBOX, WS_POPUP, WS_SIZEBOX, WS_SYSMENU, WS_TABSTOP, WS_VISIBLE,
        },
    },
    core::{PCWSTR, Result, w},
};

const WINDOW_WIDTH: i32 = 640;
const WINDOW_HEIGHT: i32 = 420;
const HEADER_HEIGHT: i32 = 40;

/// Runs the demo window until it is closed.
pub fn run(config: FramelessConfig) -> Result<()> {
    unsafe {
        let instance = GetModuleHandleW(None)?;
        let class_name = w!("FramelessWindowClass");

        let wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
            ..Default::default()
        };

        let atom = RegisterClassW(&wc);
        debug_assert!(atom != 0);

        // Borderless window with resize capability
        // WS_CLIPCHILDREN prevents painting over child windows
        let style =
            WS_POPUP | WS_SIZEBOX | WS_MINIMIZEBOX | WS_MAXIMIZEBOX | WS_SYSMENU | WS_CLIPCHILDREN;

        // Center window on screen
        let screen_width = GetSystemMetrics(SM_CXSCREEN);
        let screen_height = GetSystemMetrics(SM_CYSCREEN);
        let x = (screen_width - WINDOW_WIDTH) / 2;
        let y = (screen_height - WINDOW_HEIGHT) / 2;

        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("Frameless"),
            style,
            x,
            y,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            None,
            None,
            Some(instance.into()),
            None,
        )?;

        let app = Box::new(App::new(hwnd, &config));
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, Box::into_raw(app) as isize);

        // Children are tracked through WM_PARENTNOTIFY as they are created.
        // No App reference may be held across CreateWindowExW.
        let header = create_child(
            hwnd,
            w!("STATIC"),
            w!("Drag here"),
            0,
            0,
            WINDOW_WIDTH,
            HEADER_HEIGHT,
        )?;
        let body = create_child(
            hwnd,
            w!("STATIC"),
            w!(""),
            0,
            HEADER_HEIGHT,
            WINDOW_WIDTH,
            WINDOW_HEIGHT - HEADER_HEIGHT,
        )?;
        create_child(
            body,
            w!("EDIT"),
            w!("Resize from any edge"),
            0,
            0,
            WINDOW_WIDTH,
            WINDOW_HEIGHT - HEADER_HEIGHT - 40,
        )?;
        create_child(
            body,
            w!("BUTTON"),
            w!("OK"),
            WINDOW_WIDTH - 100,
            WINDOW_HEIGHT - HEADER_HEIGHT - 36,
            96,
            32,
        )?;

        if let Some(app) = get_app(hwnd)
            && let Some(id) = app.set_drag_target(header)
        {
            // The header only sits on the top border
            app.window().set_border_sides(id, BorderSides::only_top());
        }

        let _ = ShowWindow(hwnd, SW_SHOW);

        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).into() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        Ok(())
    }
}

unsafe fn create_child(
    parent: HWND,
    class: PCWSTR,
    text: PCWSTR,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> Result<HWND> {
    unsafe {
        let instance = GetModuleHandleW(None)?;
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class,
            text,
            WS_CHILD | WS_VISIBLE | WS_TABSTOP,
            x,
            y,
            width,
            height,
            Some(parent),
            None,
            Some(instance.into()),
            None,
        )
    }
}

/// Gets the App instance from the window's user data.
///
/// # Safety
///
/// Caller must ensure only one mutable reference exists at a time.
/// Calling this twice without dropping the first reference is UB.
unsafe fn get_app(hwnd: HWND) -> Option<&'static mut App> {
    unsafe {
        let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut App;
        if ptr.is_null() { None } else { Some(&mut *ptr) }
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_NCCALCSIZE => on_nccalcsize(),
            WM_NCACTIVATE => {
                // Prevent default non-client area painting (gray border)
                LRESULT(TRUE.0 as isize)
            }
            WM_NCHITTEST => match get_app(hwnd) {
                Some(app) => on_nchittest(app, hwnd, wparam, lparam),
                // During window creation, fall back to default behavior
                None => DefWindowProcW(hwnd, msg, wparam, lparam),
            },
            WM_GETMINMAXINFO => match get_app(hwnd) {
                Some(app) => on_getminmaxinfo(app, lparam),
                None => DefWindowProcW(hwnd, msg, wparam, lparam),
            },
            WM_PARENTNOTIFY => {
                if let Some(app) = get_app(hwnd) {
                    on_parentnotify(app, wparam, lparam);
                }
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }
            WM_FRAMELESS_CHILD_CREATED => {
                if let Some(app) = get_app(hwnd) {
                    app.on_child_created(HWND(lparam.0 as *mut _));
                }
                LRESULT(0)
            }
            WM_FRAMELESS_CHILD_DESTROYED => {
                if let Some(app) = get_app(hwnd) {
                    app.on_child_destroyed(HWND(lparam.0 as *mut _));
                }
                LRESULT(0)
            }
            WM_SIZE => match get_app(hwnd) {
                Some(app) => on_size(app, wparam),
                None => LRESULT(0),
            },
            WM_MOVE => match get_app(hwnd) {
                Some(app) => on_move(app),
                None => LRESULT(0),
            },
            WM_DESTROY => {
                // Dropping App releases every filter subclass while the
                // children still exist
                let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut App;
                SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
                if !ptr.is_null() {
                    drop(Box::from_raw(ptr));
                }
                PostQuitMessage(0);
                LRESULT(0)
            }
            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
