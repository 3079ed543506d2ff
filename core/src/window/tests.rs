use super::*;
use crate::filter::NullBinder;
use crate::types::{ControlKind, Size};

fn control(handle: isize, kind: &str) -> Control {
    Control::new(
        NativeHandle(handle),
        ControlKind::try_from(kind).unwrap(),
        Rect::new(0, 0, 100, 30),
    )
}

fn window_at(origin: Point) -> FramelessWindow<NullBinder> {
    FramelessWindow::new(
        &FramelessConfig::default(),
        NullBinder,
        Rect::from_origin_size(origin, Size::new(400, 300)),
        control(1, "Form"),
    )
}

#[test]
fn reference_points() {
    let window = window_at(Point::new(0, 0));
    assert_eq!(window.hit_test(Point::new(2, 2)), HitTest::TopLeft);
    assert_eq!(window.hit_test(Point::new(200, 2)), HitTest::Top);
    assert_eq!(window.hit_test(Point::new(399, 150)), HitTest::Right);
    assert_eq!(window.hit_test(Point::new(200, 150)), HitTest::Unhandled);
}

#[test]
fn hit_test_follows_moves() {
    let mut window = window_at(Point::new(0, 0));
    window.set_bounds(Rect::from_origin_size(Point::new(500, 500), Size::new(400, 300)));
    assert_eq!(window.hit_test(Point::new(502, 502)), HitTest::TopLeft);
    assert_eq!(window.hit_test(Point::new(2, 2)), HitTest::Unhandled);
}

#[test]
fn maximized_window_has_no_borders() {
    let mut window = window_at(Point::new(0, 0));
    let root = window.root();
    let panel = window.add_control(root, control(2, "Panel")).unwrap();

    window.set_maximized(true);
    assert_eq!(window.hit_test(Point::new(0, 0)), HitTest::Unhandled);
    assert_eq!(window.hit_test_control(panel, Point::new(0, 0)), HitTest::Unhandled);

    window.set_maximized(false);
    assert_eq!(window.hit_test_control(panel, Point::new(0, 0)), HitTest::Transparent);
}

#[test]
fn controls_get_filters_through_notifications() {
    let mut window = window_at(Point::new(0, 0));
    let root = window.root();
    let panel = window.add_control(root, control(2, "Panel")).unwrap();
    let edit = window.add_control(panel, control(3, "EDIT")).unwrap();

    assert_eq!(window.filters().len(), 2);
    assert_eq!(window.hit_test_control(edit, Point::new(200, 2)), HitTest::Transparent);
    assert_eq!(window.hit_test_control(edit, Point::new(200, 150)), HitTest::Unhandled);
    assert_eq!(window.find_by_handle(NativeHandle(3)), Some(edit));
}

#[test]
fn failed_attach_leaves_no_control() {
    let mut window = window_at(Point::new(0, 0));
    let root = window.root();
    let panel = window.add_control(root, control(2, "Panel")).unwrap();
    window.destroy_control(panel).unwrap();

    let result = window.add_control(panel, control(3, "EDIT"));
    assert_eq!(result, Err(TreeError::UnknownControl(panel)));
    assert_eq!(window.tree().len(), 1);
}

#[test]
fn thickness_change_reaches_window_and_filters() {
    let mut window = window_at(Point::new(0, 0));
    let root = window.root();
    let panel = window.add_control(root, control(2, "Panel")).unwrap();
    let point = Point::new(4, 150);
    assert_eq!(window.hit_test(point), HitTest::Left);
    assert_eq!(window.hit_test_control(panel, point), HitTest::Transparent);

    window.set_resize_border_thickness(2);

    assert_eq!(window.resize_border_thickness(), 2);
    assert_eq!(window.hit_test(point), HitTest::Unhandled);
    assert_eq!(window.hit_test_control(panel, point), HitTest::Unhandled);
}

#[test]
fn drag_target_is_cleared_on_destroy() {
    let mut window = window_at(Point::new(0, 0));
    let root = window.root();
    let title = window.add_control(root, control(2, "Panel")).unwrap();

    window.set_drag_target(Some(title));
    assert_eq!(window.hit_test_control(title, Point::new(200, 150)), HitTest::Caption);

    assert_eq!(window.destroy_control(title), Ok(1));
    assert_eq!(window.drag_target(), None);
    assert!(window.filters().is_empty());
}

#[test]
fn null_handle_control_is_inert() {
    let mut window = window_at(Point::new(0, 0));
    let root = window.root();
    let windowless = window.add_control(root, control(0, "Label")).unwrap();

    assert!(window.filters().filter(windowless).unwrap().is_inert());
    assert_eq!(window.hit_test_control(windowless, Point::new(0, 0)), HitTest::Unhandled);
}

#[test]
fn huge_thickness_does_not_panic() {
    let mut window = window_at(Point::new(100, 100));
    let root = window.root();
    let edit = window.add_control(root, control(2, "EDIT")).unwrap();

    window.set_resize_border_thickness(i32::MAX);
    assert_eq!(window.hit_test_control(edit, Point::new(300, 250)), HitTest::Transparent);
    assert_eq!(window.hit_test(Point::new(300, 250)), HitTest::TopLeft);
    assert_eq!(window.hit_test(Point::new(i32::MIN, i32::MAX)), HitTest::TopLeft);
}

#[test]
fn maximized_flag_reaches_filter_state() {
    let mut window = window_at(Point::new(0, 0));
    let root = window.root();
    let edit = window.add_control(root, control(2, "EDIT")).unwrap();
    let state = window.filters().filter(edit).unwrap().state().clone();

    window.set_maximized(true);
    assert!(window.is_maximized());
    assert_eq!(state.hit_test(Point::new(200, 2)), HitTest::Unhandled);

    window.set_maximized(false);
    assert_eq!(state.hit_test(Point::new(200, 2)), HitTest::Transparent);
}

#[test]
fn destroying_ancestor_clears_drag_target() {
    let mut window = window_at(Point::new(0, 0));
    let root = window.root();
    let panel = window.add_control(root, control(2, "Panel")).unwrap();
    let header = window.add_control(panel, control(3, "STATIC")).unwrap();
    window.set_drag_target(Some(header));

    window.destroy_control(panel).unwrap();
    assert_eq!(window.drag_target(), None);
}

#[test]
fn destroying_unrelated_control_keeps_drag_target() {
    let mut window = window_at(Point::new(0, 0));
    let root = window.root();
    let header = window.add_control(root, control(2, "STATIC")).unwrap();
    let body = window.add_control(root, control(3, "STATIC")).unwrap();
    window.set_drag_target(Some(header));

    window.destroy_control(body).unwrap();
    assert_eq!(window.drag_target(), Some(header));
}
