//! Win32 platform layer.

pub mod geometry;
pub mod handlers;
pub mod subclass;
pub mod window;
