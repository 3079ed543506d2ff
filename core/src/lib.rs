//! Resize-border hit testing for borderless windows.
//!
//! [`FramelessWindow`] answers the non-client hit-test query for the window
//! and, through per-control [`BorderFilter`]s, for every descendant control,
//! so the resize border stays usable even where child controls cover it.

pub mod classifier;
pub mod error;
pub mod filter;
pub mod sync;
pub mod tree;
pub mod types;
pub mod window;

pub use error::{BindError, Error, Result, TreeError};
pub use filter::{
    BorderFilter, FilterState, HandleBinder, HandleBinding, NullBinder, WindowGeometry,
};
pub use sync::FilterSync;
pub use tree::{Change, ControlId, ControlTree, HierarchyObserver, Notification, ObserverId};
pub use types::{
    BorderSides, ConfigError, Control, ControlKind, ExclusionList, FramelessConfig, HitTest,
    NativeHandle, Point, Rect, Size,
};
pub use window::FramelessWindow;
