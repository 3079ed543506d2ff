use frameless_core::{
    BorderSides, Control, ControlKind, FramelessConfig, FramelessWindow, HitTest, NativeHandle,
    NullBinder, Point, Rect,
};

fn control(handle: isize, kind: &str) -> Control {
    Control::new(
        NativeHandle(handle),
        ControlKind::try_from(kind).unwrap(),
        Rect::new(0, 0, 400, 40),
    )
}

fn window(config: &FramelessConfig) -> FramelessWindow<NullBinder> {
    FramelessWindow::new(config, NullBinder, Rect::new(0, 0, 400, 300), control(1, "Form"))
}

#[test]
fn test_window_and_top_only_filter() {
    let mut window = window(&FramelessConfig::default());
    let root = window.root();

    assert_eq!(window.hit_test(Point::new(2, 2)), HitTest::TopLeft);
    assert_eq!(window.hit_test(Point::new(200, 2)), HitTest::Top);
    assert_eq!(window.hit_test(Point::new(399, 150)), HitTest::Right);
    assert_eq!(window.hit_test(Point::new(200, 150)), HitTest::Unhandled);

    let header = window.add_control(root, control(2, "Panel")).unwrap();
    assert!(window.set_border_sides(header, BorderSides::only_top()));

    assert_eq!(
        window.hit_test_control(header, Point::new(200, 2)),
        HitTest::Transparent
    );
    assert_eq!(
        window.hit_test_control(header, Point::new(2, 150)),
        HitTest::Unhandled
    );
}

#[test]
fn test_default_sides_come_from_config() {
    let config = FramelessConfig {
        default_sides: BorderSides::NONE,
        ..FramelessConfig::default()
    };
    let mut window = window(&config);
    let root = window.root();
    let panel = window.add_control(root, control(2, "Panel")).unwrap();

    assert_eq!(
        window.hit_test_control(panel, Point::new(0, 0)),
        HitTest::Unhandled
    );
}

#[test]
fn test_transparent_then_window_resizes() {
    // A query falling through a transparent child is re-asked of the window.
    let mut window = window(&FramelessConfig::default());
    let root = window.root();
    let panel = window.add_control(root, control(2, "Panel")).unwrap();
    let point = Point::new(398, 299);

    assert_eq!(window.hit_test_control(panel, point), HitTest::Transparent);
    assert_eq!(window.hit_test(point), HitTest::BottomRight);
}

#[test]
fn test_excluded_kind_is_inert_and_removable() {
    let config = FramelessConfig {
        excluded_kinds: vec![ControlKind::try_from("Internet Explorer_Server").unwrap()],
        ..FramelessConfig::default()
    };
    let mut window = window(&config);
    let root = window.root();
    let browser = window
        .add_control(root, control(2, "Internet Explorer_Server"))
        .unwrap();

    let filter = window.filters().filter(browser).unwrap();
    assert!(filter.is_inert());
    assert_eq!(
        window.hit_test_control(browser, Point::new(0, 0)),
        HitTest::Unhandled
    );

    window.remove_control(browser).unwrap();
    assert!(window.filters().is_empty());
}

#[test]
fn test_hit_test_codes() {
    assert_eq!(HitTest::Caption.code(), Some(2));
    assert_eq!(HitTest::TopLeft.code(), Some(13));
    assert_eq!(HitTest::BottomRight.code(), Some(17));
    assert_eq!(HitTest::Transparent.code(), Some(-1));
    assert_eq!(HitTest::Unhandled.code(), None);
    assert_eq!(HitTest::TopLeft.to_string(), "top-left");
}
