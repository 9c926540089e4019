//! End-to-end scenarios for the two-phase stack layout protocol.

use trellis_core::{
    HorizontalAlignment, NodeId, Proposal, Size, Translation, VerticalAlignment,
};
use trellis_render::RecordingTarget;
use trellis_view::{
    LayoutError, LayoutOptions, LayoutView, MountedTree, Stack, View, layout_tree, measure_tree,
};

fn mount(view: impl Into<View>) -> MountedTree {
    MountedTree::mount(view.into()).expect("mount succeeds")
}

#[test]
fn two_children_split_the_stack_axis_evenly() {
    let tree = mount(Stack::vertical(View::group([
        View::flexible(),
        View::flexible(),
    ])));
    let mut target = RecordingTarget::new();
    layout_tree(
        &tree,
        Size::new(100.0, 200.0),
        &mut target,
        &LayoutOptions::default(),
    )
    .unwrap();

    let children = tree.children(tree.root());
    let first = target.find(children[0]).unwrap();
    let second = target.find(children[1]).unwrap();

    // Each child was proposed (100, 100) and, being flexible, adopted it.
    assert_eq!(first.size, Size::new(100.0, 100.0));
    assert_eq!(second.size, Size::new(100.0, 100.0));

    // The running offset after the first child equals its resolved height.
    assert_eq!(first.origin, Translation::ZERO);
    assert_eq!(second.origin, Translation::new(0.0, 100.0));

    // Total consumed stack-axis extent stays within the allocation.
    assert!(second.origin.y + second.size.height <= 200.0);
    assert_eq!(target.depth(), 0);
}

#[test]
fn zero_children_is_a_no_op() {
    let tree = mount(Stack::vertical(View::group([])));
    let root = tree.root();
    let view = tree.view(root).unwrap();

    let mut target = RecordingTarget::new();
    view.layout(
        Size::new(640.0, 480.0),
        root,
        &tree,
        &mut target,
        &LayoutOptions::default(),
    )
    .unwrap();

    assert!(target.placements().is_empty());
    assert_eq!(target.depth(), 0);
}

#[test]
fn empty_containers_collapse_to_zero_size() {
    for tree in [
        mount(Stack::vertical(View::group([]))),
        mount(Stack::horizontal(View::group([]))),
    ] {
        let desired = measure_tree(
            &tree,
            Proposal::exact(Size::new(320.0, 240.0)),
            &LayoutOptions::default(),
        );
        assert_eq!(desired, Size::ZERO);
    }
}

#[test]
fn layout_visits_extracted_children_in_order_once() {
    let tree = mount(Stack::vertical(View::group([
        View::fixed(10.0, 1.0),
        View::fixed(20.0, 2.0),
        View::fixed(30.0, 3.0),
    ])));
    let mut target = RecordingTarget::new();
    layout_tree(
        &tree,
        Size::new(100.0, 100.0),
        &mut target,
        &LayoutOptions::default(),
    )
    .unwrap();

    let visited: Vec<NodeId> = target
        .placements()
        .iter()
        .skip(1) // the root placement
        .map(|p| p.node)
        .collect();
    assert_eq!(visited, tree.children(tree.root()));
}

#[test]
fn nested_stack_offsets_compose_additively() {
    let inner = Stack::horizontal(View::group([
        View::fixed(10.0, 10.0),
        View::fixed(10.0, 10.0),
    ]))
    .alignment(VerticalAlignment::Top);
    let outer = Stack::vertical(View::group([View::from(inner), View::flexible()]))
        .alignment(HorizontalAlignment::Leading);
    let tree = mount(outer);

    let mut target = RecordingTarget::new();
    layout_tree(
        &tree,
        Size::new(100.0, 200.0),
        &mut target,
        &LayoutOptions::default(),
    )
    .unwrap();

    let outer_children = tree.children(tree.root());
    let inner_id = outer_children[0];
    let inner_children = tree.children(inner_id);

    // The inner stack sits at the outer origin; its own children are
    // offset from there, not from zero.
    assert_eq!(target.find(inner_id).unwrap().origin, Translation::ZERO);
    assert_eq!(
        target.find(inner_children[0]).unwrap().origin,
        Translation::ZERO
    );
    assert_eq!(
        target.find(inner_children[1]).unwrap().origin,
        Translation::new(10.0, 0.0)
    );

    // The second outer child starts below the inner stack's height.
    assert_eq!(
        target.find(outer_children[1]).unwrap().origin,
        Translation::new(0.0, 10.0)
    );
    assert_eq!(target.depth(), 0);
}

#[test]
fn cross_axis_alignment_distributes_slack() {
    let cases = [
        (HorizontalAlignment::Leading, 0.0),
        (HorizontalAlignment::Center, 40.0),
        (HorizontalAlignment::Trailing, 80.0),
    ];
    for (alignment, expected_x) in cases {
        let tree = mount(Stack::vertical(View::fixed(20.0, 50.0)).alignment(alignment));
        let mut target = RecordingTarget::new();
        layout_tree(
            &tree,
            Size::new(100.0, 100.0),
            &mut target,
            &LayoutOptions::default(),
        )
        .unwrap();
        let child = tree.children(tree.root())[0];
        assert_eq!(
            target.find(child).unwrap().origin,
            Translation::new(expected_x, 0.0),
            "{alignment:?}"
        );
    }
}

#[test]
fn cross_axis_offset_never_goes_negative() {
    // A child wider than its container: slack clamps at zero rather than
    // shifting the child left.
    let tree = mount(Stack::vertical(View::fixed(300.0, 10.0)).alignment(HorizontalAlignment::Trailing));
    let mut target = RecordingTarget::new();
    layout_tree(
        &tree,
        Size::new(100.0, 100.0),
        &mut target,
        &LayoutOptions::default(),
    )
    .unwrap();
    let child = tree.children(tree.root())[0];
    assert_eq!(target.find(child).unwrap().origin, Translation::ZERO);
}

#[test]
fn explicit_spacing_participates_in_both_phases() {
    let stack = Stack::vertical(View::group([
        View::fixed(40.0, 20.0),
        View::fixed(40.0, 20.0),
        View::fixed(40.0, 20.0),
    ]))
    .alignment(HorizontalAlignment::Leading)
    .spacing(10.0);
    let tree = mount(stack);
    let options = LayoutOptions::default();

    // Measurement: three 20-high children plus two 10-unit gaps.
    let desired = measure_tree(&tree, Proposal::UNSPECIFIED, &options);
    assert_eq!(desired, Size::new(40.0, 80.0));

    let mut target = RecordingTarget::new();
    layout_tree(&tree, Size::new(100.0, 100.0), &mut target, &options).unwrap();
    let children = tree.children(tree.root());
    let ys: Vec<f32> = children
        .iter()
        .map(|&c| target.find(c).unwrap().origin.y)
        .collect();
    assert_eq!(ys, vec![0.0, 30.0, 60.0]);
}

#[test]
fn context_default_spacing_applies_when_descriptor_is_silent() {
    let stack = Stack::vertical(View::group([
        View::fixed(10.0, 10.0),
        View::fixed(10.0, 10.0),
    ]))
    .alignment(HorizontalAlignment::Leading);
    let tree = mount(stack);
    let options = LayoutOptions::default().default_spacing(5.0);

    let mut target = RecordingTarget::new();
    layout_tree(&tree, Size::new(50.0, 50.0), &mut target, &options).unwrap();
    let children = tree.children(tree.root());
    assert_eq!(target.find(children[1]).unwrap().origin.y, 15.0);
}

#[test]
fn running_offset_truncates_to_integral_values() {
    let tree = mount(Stack::vertical(View::group([
        View::flexible(),
        View::flexible(),
    ])));
    let mut target = RecordingTarget::new();
    layout_tree(
        &tree,
        Size::new(99.0, 99.0),
        &mut target,
        &LayoutOptions::default(),
    )
    .unwrap();

    let children = tree.children(tree.root());
    let first = target.find(children[0]).unwrap();
    let second = target.find(children[1]).unwrap();

    // The first child resolves to the fractional slice, but the running
    // offset advances by its truncation.
    assert_eq!(first.size.height, 49.5);
    assert_eq!(second.origin.y, 49.0);
}

#[test]
fn unconstrained_proposal_measures_natural_sizes() {
    let tree = mount(Stack::vertical(View::group([
        View::fixed(30.0, 15.0),
        View::fixed(60.0, 25.0),
    ])));
    let desired = measure_tree(&tree, Proposal::UNSPECIFIED, &LayoutOptions::default());
    assert_eq!(desired, Size::new(60.0, 40.0));
}

#[test]
fn horizontal_stack_advances_along_x() {
    let tree = mount(
        Stack::horizontal(View::group([
            View::fixed(25.0, 10.0),
            View::fixed(25.0, 10.0),
        ]))
        .alignment(VerticalAlignment::Top),
    );
    let mut target = RecordingTarget::new();
    layout_tree(
        &tree,
        Size::new(100.0, 50.0),
        &mut target,
        &LayoutOptions::default(),
    )
    .unwrap();
    let children = tree.children(tree.root());
    assert_eq!(
        target.find(children[1]).unwrap().origin,
        Translation::new(25.0, 0.0)
    );
}

#[test]
fn degenerate_final_size_clamps_to_zero() {
    let tree = mount(Stack::vertical(View::group([
        View::flexible(),
        View::flexible(),
    ])));
    let mut target = RecordingTarget::new();
    // Size::new clamps the degenerate components before layout sees them.
    layout_tree(
        &tree,
        Size::new(-50.0, f32::NAN),
        &mut target,
        &LayoutOptions::default(),
    )
    .unwrap();
    for placement in target.placements() {
        assert!(placement.size.width >= 0.0);
        assert!(placement.size.height >= 0.0);
        assert!(!placement.origin.x.is_nan());
        assert!(!placement.origin.y.is_nan());
    }
}

#[test]
fn structural_mismatch_is_a_reported_error() {
    // A descriptor extracting two children driven against a mount with
    // none: the hardened contract reports the violation instead of
    // silently skipping.
    let stack = Stack::vertical(View::group([View::flexible(), View::flexible()]));
    let tree = mount(View::fixed(1.0, 1.0));
    let err = stack
        .layout(
            Size::new(10.0, 10.0),
            tree.root(),
            &tree,
            &mut RecordingTarget::new(),
            &LayoutOptions::default(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        LayoutError::StructuralMismatch {
            node: tree.root(),
            expected: 2,
            actual: 0,
        }
    );
}
