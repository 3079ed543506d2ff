use frameless_core::{
    Control, ControlKind, FramelessConfig, FramelessWindow, HitTest, NativeHandle, NullBinder,
    Point, Rect,
};
use tempfile::tempdir;

#[test]
fn test_window_built_from_saved_config() {
    let tmp = tempdir().unwrap();
    let path = FramelessConfig::path(tmp.path());
    std::fs::write(
        &path,
        "resize_border_thickness = 8\nexcluded_kinds = [\"ActiveX\"]\n",
    )
    .unwrap();

    let config = FramelessConfig::load(&path).unwrap();
    assert!(config.validate().is_empty());

    let mut window = FramelessWindow::new(
        &config,
        NullBinder,
        Rect::new(0, 0, 400, 300),
        Control::new(
            NativeHandle(1),
            ControlKind::try_from("Form").unwrap(),
            Rect::new(0, 0, 400, 300),
        ),
    );
    assert_eq!(window.resize_border_thickness(), 8);
    assert_eq!(window.hit_test(Point::new(200, 7)), HitTest::Top);

    let root = window.root();
    let activex = window
        .add_control(
            root,
            Control::new(
                NativeHandle(2),
                ControlKind::try_from("ActiveX").unwrap(),
                Rect::new(0, 0, 10, 10),
            ),
        )
        .unwrap();
    assert!(window.filters().filter(activex).unwrap().is_inert());
}

#[test]
fn test_invalid_config_is_repaired() {
    let config = FramelessConfig {
        resize_border_thickness: -4,
        min_height: -1,
        ..FramelessConfig::default()
    };
    assert_eq!(config.validate().len(), 2);
    assert!(config.with_defaults_for_invalid().validate().is_empty());
}

#[test]
fn test_repair_fits_thickness_to_small_minimum_size() {
    let config = FramelessConfig {
        resize_border_thickness: 50,
        min_width: 8,
        min_height: 8,
        ..FramelessConfig::default()
    };
    let repaired = config.with_defaults_for_invalid();
    assert!(repaired.validate().is_empty());
    assert_eq!(repaired.resize_border_thickness, 3);

    let tiny = FramelessConfig {
        min_width: 1,
        min_height: 1,
        ..FramelessConfig::default()
    };
    let repaired = tiny.with_defaults_for_invalid();
    assert!(repaired.validate().is_empty());
    assert_eq!(repaired.resize_border_thickness, 0);
}
