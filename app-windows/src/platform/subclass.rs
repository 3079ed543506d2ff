//! Per-control hit-test interception through window subclassing.

use frameless_core::{BindError, FilterState, HandleBinder, HandleBinding, HitTest, NativeHandle, Point};
use std::ffi::c_void;
use std::rc::Rc;
use windows::Win32::{
    Foundation::{HWND, LPARAM, LRESULT, WPARAM},
    UI::{
        Shell::{DefSubclassProc, RemoveWindowSubclass, SetWindowSubclass},
        WindowsAndMessaging::{
            GA_ROOT, GetAncestor, IsWindow, SendMessageW, WM_APP, WM_CREATE, WM_DESTROY,
            WM_NCHITTEST, WM_PARENTNOTIFY,
        },
    },
};

const FILTER_SUBCLASS_ID: usize = 0x4652_4D4C_4553_5321; // "FRMLESS!"

/// Sent to the root window when a descendant gains a child. LPARAM is the
/// new child's handle.
pub const WM_FRAMELESS_CHILD_CREATED: u32 = WM_APP + 1;

/// Sent to the root window when a descendant's child is being destroyed.
/// LPARAM is the child's handle.
pub const WM_FRAMELESS_CHILD_DESTROYED: u32 = WM_APP + 2;

/// Binds filters with `SetWindowSubclass`. The filter state pointer travels as
/// the subclass reference data.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubclassBinder;

struct SubclassBinding {
    hwnd: HWND,
    state: *const FilterState,
}

impl HandleBinding for SubclassBinding {
    fn handle(&self) -> NativeHandle {
        NativeHandle(self.hwnd.0 as isize)
    }
}

impl Drop for SubclassBinding {
    fn drop(&mut self) {
        unsafe {
            let removed =
                RemoveWindowSubclass(self.hwnd, Some(filter_subclass_proc), FILTER_SUBCLASS_ID);
            // The subclass proc may still be called for a live window that kept
            // the subclass, so its state can only be freed once it is gone.
            if removed.as_bool() || !IsWindow(Some(self.hwnd)).as_bool() {
                drop(Rc::from_raw(self.state));
            } else {
                tracing::warn!(hwnd = ?self.hwnd, "failed to remove filter subclass, leaking state");
            }
        }
    }
}

impl HandleBinder for SubclassBinder {
    fn bind(
        &mut self,
        handle: NativeHandle,
        state: Rc<FilterState>,
    ) -> Result<Box<dyn HandleBinding>, BindError> {
        if handle.is_null() {
            return Err(BindError::NullHandle);
        }
        let hwnd = HWND(handle.0 as *mut c_void);
        if !unsafe { IsWindow(Some(hwnd)) }.as_bool() {
            return Err(BindError::Native(format!("{hwnd:?} is not a window")));
        }

        let raw = Rc::into_raw(state);
        let installed = unsafe {
            SetWindowSubclass(
                hwnd,
                Some(filter_subclass_proc),
                FILTER_SUBCLASS_ID,
                raw as usize,
            )
        };
        if !installed.as_bool() {
            // SAFETY: the subclass was not installed, so `raw` was never shared.
            unsafe { drop(Rc::from_raw(raw)) };
            return Err(BindError::Native(format!(
                "SetWindowSubclass failed for {hwnd:?}"
            )));
        }

        tracing::trace!(?hwnd, "filter subclass installed");
        Ok(Box::new(SubclassBinding { hwnd, state: raw }))
    }
}

fn to_lresult(hit: HitTest) -> Option<LRESULT> {
    match hit {
        // HTCAPTION on a child would move the child inside its parent; let the
        // root window answer instead.
        HitTest::Caption => HitTest::Transparent.code().map(LRESULT),
        other => other.code().map(LRESULT),
    }
}

/// Forwards a child's creation or destruction to the root window.
fn forward_parent_notify(hwnd: HWND, wparam: WPARAM, lparam: LPARAM) {
    let message = match (wparam.0 & 0xFFFF) as u32 {
        WM_CREATE => WM_FRAMELESS_CHILD_CREATED,
        WM_DESTROY => WM_FRAMELESS_CHILD_DESTROYED,
        _ => return,
    };
    let root = unsafe { GetAncestor(hwnd, GA_ROOT) };
    if root.0.is_null() || root == hwnd {
        return;
    }
    unsafe {
        let _ = SendMessageW(root, message, Some(WPARAM(0)), Some(lparam));
    }
}

unsafe extern "system" fn filter_subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _uid_subclass: usize,
    dw_ref_data: usize,
) -> LRESULT {
    unsafe {
        match msg {
            WM_NCHITTEST => {
                let state = &*(dw_ref_data as *const FilterState);
                let hit = state.hit_test(Point::from_lparam(lparam.0));
                to_lresult(hit).unwrap_or_else(|| DefSubclassProc(hwnd, msg, wparam, lparam))
            }
            WM_PARENTNOTIFY => {
                forward_parent_notify(hwnd, wparam, lparam);
                DefSubclassProc(hwnd, msg, wparam, lparam)
            }
            _ => DefSubclassProc(hwnd, msg, wparam, lparam),
        }
    }
}
