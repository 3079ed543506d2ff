//! Window-level hit testing for resize borders.

use crate::types::{HitTest, Point, Rect, Size};

/// Classifies a screen point against a window's client bounds.
///
/// `client_bounds` is the client rectangle in screen coordinates. The point is
/// converted to client coordinates before classification.
pub fn classify_screen(screen: Point, client_bounds: Rect, thickness: i32) -> HitTest {
    classify(client_bounds.to_local(screen), client_bounds.size(), thickness)
}

/// Determines which resize border, if any, a client-space point is over.
///
/// Corners are checked before edges: a corner pixel satisfies two edge
/// conditions and must not be reported as either edge alone. Points outside
/// every border return [`HitTest::Unhandled`]. A thickness of zero or less
/// disables all borders.
pub fn classify(client: Point, size: Size, thickness: i32) -> HitTest {
    if thickness <= 0 {
        return HitTest::Unhandled;
    }

    let on_left = client.x <= thickness;
    let on_right = client.x >= size.width.saturating_sub(thickness);
    let on_top = client.y <= thickness;
    let on_bottom = client.y >= size.height.saturating_sub(thickness);

    if on_top && on_left {
        HitTest::TopLeft
    } else if on_top && on_right {
        HitTest::TopRight
    } else if on_bottom && on_left {
        HitTest::BottomLeft
    } else if on_bottom && on_right {
        HitTest::BottomRight
    } else if on_left {
        HitTest::Left
    } else if on_top {
        HitTest::Top
    } else if on_right {
        HitTest::Right
    } else if on_bottom {
        HitTest::Bottom
    } else {
        HitTest::Unhandled
    }
}
