use crate::types::Rect;
use nutype::nutype;

/// Opaque native window handle value (an `HWND` on Windows).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NativeHandle(pub isize);

impl NativeHandle {
    pub const NULL: Self = Self(0);

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Type name of a control, e.g. a window class such as `EDIT` or `BUTTON`.
///
/// Compared case-sensitively after trimming.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ControlKind(String);

/// A node of the window's containment tree.
#[derive(Clone, Debug)]
pub struct Control {
    pub handle: NativeHandle,
    pub kind: ControlKind,
    /// Bounds relative to the parent's client area.
    pub bounds: Rect,
}

impl Control {
    pub fn new(handle: NativeHandle, kind: ControlKind, bounds: Rect) -> Self {
        Self {
            handle,
            kind,
            bounds,
        }
    }
}
