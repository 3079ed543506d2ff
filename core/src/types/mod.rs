pub(crate) mod config;
pub use config::{
    ConfigError, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, DEFAULT_RESIZE_BORDER_THICKNESS,
    ExclusionList, FramelessConfig,
};

pub(crate) mod control;
pub use control::{Control, ControlKind, ControlKindError, NativeHandle};

pub(crate) mod geometry;
pub use geometry::{Point, Rect, Size};

pub use hit_test::HitTest;

pub(crate) mod sides;
pub use sides::BorderSides;
