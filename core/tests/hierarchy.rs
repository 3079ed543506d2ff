use frameless_core::{
    Control, ControlId, ControlKind, FramelessConfig, FramelessWindow, NativeHandle, NullBinder,
    Rect,
};
use proptest::prelude::*;

fn control(handle: isize) -> Control {
    Control::new(
        NativeHandle(handle),
        ControlKind::try_from("Panel").unwrap(),
        Rect::new(0, 0, 20, 20),
    )
}

fn window() -> FramelessWindow<NullBinder> {
    FramelessWindow::new(
        &FramelessConfig::default(),
        NullBinder,
        Rect::new(0, 0, 400, 300),
        control(1),
    )
}

fn assert_registry_matches_tree(window: &FramelessWindow<NullBinder>) {
    let tree = window.tree();
    let mut expected = tree.descendants(tree.root());
    let mut actual: Vec<ControlId> = window.filters().controls().collect();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn test_removing_subtree_root_clears_every_node() {
    let mut window = window();
    let root = window.root();

    // Depth 4, 7 nodes, assembled detached and attached in one step
    let top = window.create_control(control(10));
    let mut nodes = vec![top];
    let mut parent = top;
    for handle in 11..14 {
        let child = window.create_control(control(handle));
        window.attach(parent, child).unwrap();
        nodes.push(child);
        parent = child;
    }
    for handle in 14..17 {
        let child = window.create_control(control(handle));
        window.attach(top, child).unwrap();
        nodes.push(child);
    }

    window.attach(root, top).unwrap();
    assert_eq!(window.filters().len(), nodes.len());

    window.remove_control(top).unwrap();
    for id in &nodes {
        assert!(!window.filters().contains(*id));
        assert!(window.tree().observers(*id).is_empty());
    }
    assert!(window.filters().is_empty());
}

#[test]
fn test_attaching_twice_keeps_one_subscription() {
    let mut window = window();
    let root = window.root();
    let panel = window.add_control(root, control(2)).unwrap();

    assert!(window.attach(root, panel).is_err());
    assert_eq!(window.filters().len(), 1);
    assert_eq!(window.tree().observers(panel).len(), 1);

    window.remove_control(panel).unwrap();
    assert!(window.filters().is_empty());
}

#[test]
fn test_destroyed_subtree_can_not_be_reused() {
    let mut window = window();
    let root = window.root();
    let panel = window.add_control(root, control(2)).unwrap();
    let edit = window.add_control(panel, control(3)).unwrap();

    assert_eq!(window.destroy_control(panel), Ok(2));
    assert!(window.tree().get(edit).is_none());
    assert!(window.remove_control(edit).is_err());
    assert_registry_matches_tree(&window);
}

#[derive(Clone, Debug)]
enum Op {
    Add { parent: usize },
    Remove { target: usize },
    Reattach { target: usize, parent: usize },
    Destroy { target: usize },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<usize>().prop_map(|parent| Op::Add { parent }),
        1 => any::<usize>().prop_map(|target| Op::Remove { target }),
        1 => (any::<usize>(), any::<usize>())
            .prop_map(|(target, parent)| Op::Reattach { target, parent }),
        1 => any::<usize>().prop_map(|target| Op::Destroy { target }),
    ]
}

proptest! {
    #[test]
    fn registry_tracks_tree(ops in proptest::collection::vec(arb_op(), 1..60)) {
        let mut window = window();
        let mut known: Vec<ControlId> = vec![window.root()];
        let mut next_handle = 2;

        for op in ops {
            match op {
                Op::Add { parent } => {
                    let parent = known[parent % known.len()];
                    if let Ok(id) = window.add_control(parent, control(next_handle)) {
                        known.push(id);
                    }
                    next_handle += 1;
                }
                Op::Remove { target } => {
                    let _ = window.remove_control(known[target % known.len()]);
                }
                Op::Reattach { target, parent } => {
                    let target = known[target % known.len()];
                    let parent = known[parent % known.len()];
                    let _ = window.attach(parent, target);
                }
                Op::Destroy { target } => {
                    let _ = window.destroy_control(known[target % known.len()]);
                    known.retain(|id| window.tree().contains(*id));
                }
            }
            assert_registry_matches_tree(&window);
        }
    }
}
