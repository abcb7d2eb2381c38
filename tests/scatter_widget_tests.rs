use approx::assert_relative_eq;
use distsketch::bridge::{ScatterMessage, ScatterReply, WidgetHost};
use distsketch::interaction::InteractionMode;
use distsketch::render::NullRenderer;
use distsketch::scatter::{ScatterConfig, ScatterParams, ScatterWidget};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

fn widget() -> ScatterWidget<NullRenderer> {
    ScatterWidget::new(NullRenderer::default(), ScatterConfig::default()).expect("widget init")
}

fn spray_stroke(
    widget: &mut ScatterWidget<NullRenderer>,
    rng: &mut StdRng,
    at: (f64, f64),
    moves: usize,
) -> usize {
    widget.pointer_down();
    let mut added = 0;
    for _ in 0..moves {
        if widget
            .pointer_move_with_rng(at.0, at.1, rng)
            .expect("spray move")
        {
            added += 1;
        }
    }
    widget.pointer_up();
    added
}

#[test]
fn hover_circle_follows_pointer_without_spraying() {
    let mut widget = widget();

    let added = widget.pointer_move(100.0, 200.0).expect("move");

    assert!(!added);
    let hover = widget.hover_circle();
    assert!(hover.visible);
    assert_relative_eq!(hover.radius, 32.0);
    assert_eq!((hover.cx, hover.cy), (100.0, 200.0));
    assert_eq!(widget.point_count(), 0);
}

#[test]
fn spraying_in_the_middle_keeps_every_point() {
    let mut widget = widget();
    let mut rng = StdRng::seed_from_u64(7);

    widget.pointer_down();
    for _ in 0..50 {
        assert!(widget.pointer_move_with_rng(320.0, 320.0, &mut rng).expect("move"));
    }
    assert_eq!(widget.point_count(), 50);
    assert_eq!(widget.pending().len(), 50);
    assert!(widget.strokes().is_empty());

    widget.pointer_up();
    assert_eq!(widget.strokes().len(), 1);
    assert_eq!(widget.point_count(), 50);
    assert_eq!(widget.mode(), InteractionMode::Idle);

    let radius = widget.spray_radius_px();
    let (x_scale, y_scale) = (widget.x_scale(), widget.y_scale());
    for point in &widget.strokes()[0] {
        let dx = x_scale.to_pixel(point.x) - 320.0;
        let dy = y_scale.to_pixel(point.y) - 320.0;
        assert!((dx * dx + dy * dy).sqrt() <= radius + 1e-9);
        assert_eq!(point.group, "G1");
    }
}

#[test]
fn points_outside_the_plot_are_dropped() {
    let mut widget = widget();
    let mut rng = StdRng::seed_from_u64(11);

    let added = spray_stroke(&mut widget, &mut rng, (0.0, 0.0), 200);

    assert!(added < 200);
    assert_eq!(widget.point_count(), added);
    for point in widget.strokes().iter().flatten() {
        assert!((0.0..=1.0).contains(&point.x));
        assert!((0.0..=1.0).contains(&point.y));
    }
}

#[test]
fn empty_stroke_is_not_committed() {
    let mut widget = widget();

    widget.pointer_down();
    widget.pointer_up();

    assert!(widget.strokes().is_empty());
    assert!(!widget.undo());
}

#[test]
fn undo_and_redo_are_symmetric() {
    let mut widget = widget();
    let mut rng = StdRng::seed_from_u64(3);
    spray_stroke(&mut widget, &mut rng, (200.0, 200.0), 10);
    spray_stroke(&mut widget, &mut rng, (400.0, 400.0), 5);
    let committed = widget.strokes().to_vec();

    assert!(widget.undo());
    assert_eq!(widget.point_count(), 10);
    assert_eq!(widget.redo_depth(), 1);

    assert!(widget.redo());
    assert_eq!(widget.strokes(), committed.as_slice());
    assert!(!widget.redo());
}

#[test]
fn new_stroke_drops_redo_history() {
    let mut widget = widget();
    let mut rng = StdRng::seed_from_u64(5);
    spray_stroke(&mut widget, &mut rng, (300.0, 300.0), 4);
    widget.undo();

    widget.pointer_down();

    assert_eq!(widget.redo_depth(), 0);
    assert!(!widget.redo());
}

#[test]
fn reset_only_acts_on_committed_strokes() {
    let mut widget = widget();
    assert!(!widget.reset());

    let mut rng = StdRng::seed_from_u64(9);
    spray_stroke(&mut widget, &mut rng, (320.0, 100.0), 8);
    widget.undo();
    spray_stroke(&mut widget, &mut rng, (320.0, 500.0), 8);

    assert!(widget.reset());
    assert_eq!(widget.point_count(), 0);
    assert_eq!(widget.redo_depth(), 0);
}

#[test]
fn pointer_leave_commits_and_hides_hover() {
    let mut widget = widget();
    let mut rng = StdRng::seed_from_u64(13);
    widget.pointer_down();
    widget
        .pointer_move_with_rng(320.0, 320.0, &mut rng)
        .expect("move");

    widget.pointer_leave();

    assert_eq!(widget.strokes().len(), 1);
    assert!(!widget.hover_circle().visible);
    assert_eq!(widget.mode(), InteractionMode::Idle);
}

#[test]
fn update_params_replaces_settings_and_rescales() {
    let mut widget = widget();

    widget
        .handle_json(
            r##"{"name": "update_params", "payload": {"ng": 2, "g": "G2", "c": "#f00", "s": 0.2, "xm": 5, "ym": 2}}"##,
        )
        .expect("update params");

    let params = widget.params();
    assert_eq!(params.group, "G2");
    assert_eq!(params.group_count, 2);
    assert_relative_eq!(widget.spray_radius_px(), 64.0);
    assert_eq!(widget.x_scale().domain(), (0.0, 5.0));
    assert_eq!(widget.y_scale().domain(), (0.0, 2.0));
}

#[test]
fn invalid_params_are_rejected() {
    let mut widget = widget();

    let result = widget.set_params(ScatterParams {
        x_max: 0.0,
        ..ScatterParams::default()
    });

    assert!(result.is_err());
    assert_eq!(widget.x_scale().domain(), (0.0, 1.0));
}

#[test]
fn data_click_returns_committed_points_only() {
    let mut widget = widget();
    assert!(
        widget
            .handle_message(ScatterMessage::DataClick)
            .expect("empty pull")
            .is_none()
    );

    let mut rng = StdRng::seed_from_u64(17);
    spray_stroke(&mut widget, &mut rng, (320.0, 320.0), 6);
    widget.pointer_down();
    widget
        .pointer_move_with_rng(320.0, 320.0, &mut rng)
        .expect("pending move");

    let Some(ScatterReply::DataReturn(points)) = widget
        .handle_message(ScatterMessage::DataClick)
        .expect("data click")
    else {
        panic!("expected data reply");
    };

    assert_eq!(points.x.len(), 6);
    assert_eq!(points.y.len(), 6);
    assert_eq!(points.g, vec!["G1"; 6]);
}

#[test]
fn data_return_encodes_wire_shape() {
    let mut widget = widget();
    let mut rng = StdRng::seed_from_u64(19);
    spray_stroke(&mut widget, &mut rng, (320.0, 320.0), 3);

    let encoded = widget
        .handle_json(r#"{"name": "data_click"}"#)
        .expect("data click")
        .expect("reply");
    let reply: Value = serde_json::from_str(&encoded).expect("reply json");

    assert_eq!(reply["name"], "data_return");
    assert_eq!(reply["payload"]["x"].as_array().map(Vec::len), Some(3));
    assert_eq!(reply["payload"]["g"][0], "G1");
}

#[test]
fn undo_and_redo_messages_round_trip_strokes() {
    let mut widget = widget();
    let mut rng = StdRng::seed_from_u64(23);
    spray_stroke(&mut widget, &mut rng, (320.0, 320.0), 4);

    widget.handle_json(r#"{"name": "undo_click"}"#).expect("undo");
    assert_eq!(widget.point_count(), 0);

    widget.handle_json(r#"{"name": "redo_click"}"#).expect("redo");
    assert_eq!(widget.point_count(), 4);

    widget.handle_json(r#"{"name": "reset_click"}"#).expect("reset");
    assert_eq!(widget.point_count(), 0);
}

#[test]
fn render_draws_points_and_hover() {
    let mut widget = widget();
    let mut rng = StdRng::seed_from_u64(29);
    spray_stroke(&mut widget, &mut rng, (320.0, 320.0), 5);
    widget.pointer_move(100.0, 100.0).expect("hover");

    widget.render().expect("render");

    let frame = widget.build_render_frame();
    assert_eq!(frame.circles.len(), 6);
    assert!(frame.circles.last().is_some_and(|hover| hover.fill_color.is_none()));
    assert_eq!(widget.renderer().last_circle_count, 6);
}
