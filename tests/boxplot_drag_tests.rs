use approx::assert_relative_eq;
use distsketch::boxplot::{BoxPlotConfig, BoxPlotWidget};
use distsketch::interaction::{DragState, EdgeKind};
use distsketch::render::NullRenderer;
use distsketch::WidgetError;

fn widget() -> BoxPlotWidget<NullRenderer> {
    BoxPlotWidget::new(NullRenderer::default(), BoxPlotConfig::default()).expect("widget init")
}

#[test]
fn pointer_down_on_median_grabs_median_edge() {
    let mut widget = widget();
    let median_y = widget.scale().to_pixel(0.5);

    let grabbed = widget.pointer_down(80.0, median_y).expect("pointer down");

    assert_eq!(grabbed, Some((0, EdgeKind::MedianEdge)));
    assert_eq!(
        widget.drag_state(),
        DragState::Dragging {
            entity_index: 0,
            edge: EdgeKind::MedianEdge
        }
    );
}

#[test]
fn pointer_down_outside_every_box_is_ignored() {
    let mut widget = widget();

    let grabbed = widget.pointer_down(5.0, 320.0).expect("pointer down");

    assert_eq!(grabbed, None);
    assert!(!widget.drag_state().is_dragging());
}

#[test]
fn hit_test_distinguishes_quartile_edges() {
    let widget = widget();
    let scale = widget.scale();

    assert_eq!(
        widget.hit_test(240.0, scale.to_pixel(0.4) + 2.0),
        Some((1, EdgeKind::Q1Edge))
    );
    assert_eq!(
        widget.hit_test(560.0, scale.to_pixel(0.6) - 2.0),
        Some((3, EdgeKind::Q3Edge))
    );
}

#[test]
fn median_drag_is_clamped_inside_visible_range() {
    let mut widget = widget();
    widget.drag_start(0, EdgeKind::MedianEdge).expect("drag start");
    let pointer_y = widget.scale().to_pixel(0.9);

    assert!(widget.drag_move(pointer_y).expect("drag move"));

    let entity = widget.entity(0).expect("box 0");
    assert_relative_eq!(entity.q2(), 0.831_25, epsilon = 1e-9);
    assert_relative_eq!(entity.q1(), 0.731_25, epsilon = 1e-9);
    assert_relative_eq!(entity.q3(), 0.931_25, epsilon = 1e-9);

    let guide = widget.guide_line();
    assert!(guide.visible);
    assert_relative_eq!(guide.x_start, 0.0);
    assert_relative_eq!(guide.x_end, 16.0);
    assert_relative_eq!(guide.y, pointer_y);
}

#[test]
fn drag_end_refits_axis_to_moved_box() {
    let mut widget = widget();
    widget.drag_start(0, EdgeKind::MedianEdge).expect("drag start");
    let pointer_y = widget.scale().to_pixel(0.9);
    widget.drag_move(pointer_y).expect("drag move");

    assert!(widget.drag_end().expect("drag end"));

    let (range_min, range_max) = widget.visible_range();
    assert_relative_eq!(range_max, 1.258_203_125, epsilon = 1e-9);
    assert_relative_eq!(range_min, 0.073_046_875, epsilon = 1e-9);
    assert!(!widget.guide_line().visible);
    assert_eq!(widget.drag_state(), DragState::Idle);
}

#[test]
fn q1_drag_above_q3_is_rejected() {
    let mut widget = widget();
    widget.drag_start(2, EdgeKind::Q1Edge).expect("drag start");
    let pointer_y = widget.scale().to_pixel(0.8);

    let applied = widget.drag_move(pointer_y).expect("drag move");

    assert!(!applied);
    let entity = widget.entity(2).expect("box 2");
    assert_relative_eq!(entity.q1(), 0.4);
    assert_relative_eq!(entity.q3(), 0.6);
}

#[test]
fn q3_drag_moves_only_q3() {
    let mut widget = widget();
    widget.drag_start(1, EdgeKind::Q3Edge).expect("drag start");
    let pointer_y = widget.scale().to_pixel(0.75);

    assert!(widget.drag_move(pointer_y).expect("drag move"));

    let entity = widget.entity(1).expect("box 1");
    assert_relative_eq!(entity.q1(), 0.4);
    assert_relative_eq!(entity.q3(), 0.75, epsilon = 1e-9);
}

#[test]
fn moves_while_idle_change_nothing() {
    let mut widget = widget();
    let before = widget.entity(0).expect("box 0").clone();

    assert!(!widget.drag_move(10.0).expect("idle move"));
    assert!(!widget.drag_end().expect("idle end"));
    assert_eq!(widget.entity(0), Some(&before));
}

#[test]
fn drag_start_on_missing_box_fails() {
    let mut widget = widget();

    let err = widget
        .drag_start(7, EdgeKind::Q1Edge)
        .expect_err("unknown box");

    assert!(matches!(err, WidgetError::UnknownEntity { index: 7, count: 4 }));
    assert!(!widget.drag_state().is_dragging());
}

#[test]
fn non_finite_pointer_is_rejected() {
    let mut widget = widget();
    widget.drag_start(0, EdgeKind::Q3Edge).expect("drag start");

    assert!(widget.drag_move(f64::NAN).is_err());
}

#[test]
fn rebuild_cancels_drag_in_flight() {
    let mut widget = widget();
    widget.drag_start(3, EdgeKind::MedianEdge).expect("drag start");

    widget.reset().expect("reset");

    assert_eq!(widget.drag_state(), DragState::Idle);
    assert!(!widget.drag_move(100.0).expect("move after rebuild"));
}

#[test]
fn pointer_leave_ends_drag() {
    let mut widget = widget();
    widget.drag_start(0, EdgeKind::Q1Edge).expect("drag start");

    assert!(widget.pointer_leave().expect("leave"));
    assert!(!widget.drag_state().is_dragging());
}
