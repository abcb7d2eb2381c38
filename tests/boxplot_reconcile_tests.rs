use approx::assert_relative_eq;
use distsketch::boxplot::{
    BoxPlotConfig, BoxPlotWidget, DispersionMode, NORMAL_WHISKER_FACTOR, OTHER_WHISKER_FACTOR,
};
use distsketch::render::NullRenderer;
use distsketch::WidgetError;

fn widget() -> BoxPlotWidget<NullRenderer> {
    BoxPlotWidget::new(NullRenderer::default(), BoxPlotConfig::default()).expect("widget init")
}

#[test]
fn other_dispersion_shortens_whiskers_and_refits() {
    let mut widget = widget();

    widget
        .set_dispersion_mode(DispersionMode::Other)
        .expect("dispersion");

    assert_relative_eq!(widget.params().whisker_factor, OTHER_WHISKER_FACTOR);
    for entity in widget.boxes().iter() {
        assert_relative_eq!(entity.q1(), 0.4);
        assert_relative_eq!(entity.q3(), 0.6);
        assert_relative_eq!(entity.whisker_min(), 0.3, epsilon = 1e-12);
        assert_relative_eq!(entity.whisker_max(), 0.7, epsilon = 1e-12);
    }
    let (range_min, range_max) = widget.visible_range();
    assert_relative_eq!(range_min, 0.273_046_875, epsilon = 1e-9);
    assert_relative_eq!(range_max, 0.726_953_125, epsilon = 1e-9);
}

#[test]
fn normal_dispersion_restores_long_whiskers() {
    let mut widget = widget();
    widget
        .set_dispersion_mode(DispersionMode::Other)
        .expect("other");

    widget
        .set_dispersion_mode(DispersionMode::Normal)
        .expect("normal");

    assert_relative_eq!(widget.params().whisker_factor, NORMAL_WHISKER_FACTOR);
    let entity = widget.entity(0).expect("box 0");
    assert_relative_eq!(entity.whisker_min(), 0.1, epsilon = 1e-12);
    assert_relative_eq!(entity.whisker_max(), 0.9, epsilon = 1e-12);
}

#[test]
fn explicit_range_keeps_boxes_pixel_stable() {
    let mut widget = widget();
    let before = widget.entity(0).expect("box 0").geometry();

    widget.set_visible_range(0.0, 1.0).expect("range");

    assert_eq!(widget.visible_range(), (0.0, 1.0));
    let entity = widget.entity(0).expect("box 0");
    let after = entity.geometry();
    assert_relative_eq!(after.box_top, before.box_top, epsilon = 1e-9);
    assert_relative_eq!(after.box_bottom(), before.box_bottom(), epsilon = 1e-9);
    assert_relative_eq!(entity.q3(), 0.531_25 / 0.8625, epsilon = 1e-9);
    assert_relative_eq!(entity.q1(), 0.331_25 / 0.8625, epsilon = 1e-9);
}

#[test]
fn invalid_explicit_range_is_rejected_without_changes() {
    let mut widget = widget();
    let before = widget.visible_range();

    let err = widget.set_visible_range(1.0, 0.5).expect_err("inverted range");

    assert!(matches!(err, WidgetError::InvalidRange { .. }));
    assert_eq!(widget.visible_range(), before);
}

#[test]
fn overflowing_refit_leaves_range_and_params_in_step() {
    let mut widget = widget();
    let before = widget.visible_range();
    assert!(widget.redraw(0, -4e307, 4e307).expect("redraw"));

    let err = widget.realign().expect_err("span overflows");

    assert!(matches!(err, WidgetError::InvalidRange { .. }));
    assert_eq!(widget.visible_range(), before);
    assert_eq!(widget.params().visible_range, widget.visible_range());

    widget.redraw(0, 0.1, 0.3).expect("redraw");
    widget.realign().expect("realign");
    assert_eq!(widget.params().visible_range, widget.visible_range());
}

#[test]
fn realign_centers_every_box_on_refitted_range() {
    let mut widget = widget();
    widget.redraw(0, 0.1, 0.3).expect("redraw");

    widget.realign().expect("realign");

    let (range_min, range_max) = widget.visible_range();
    assert_relative_eq!(range_min, -0.226_953_125, epsilon = 1e-9);
    assert_relative_eq!(range_max, 0.926_953_125, epsilon = 1e-9);
    for entity in widget.boxes().iter() {
        assert_relative_eq!(entity.q1(), 0.25, epsilon = 1e-9);
        assert_relative_eq!(entity.q2(), 0.35, epsilon = 1e-9);
        assert_relative_eq!(entity.q3(), 0.45, epsilon = 1e-9);
    }
}

#[test]
fn reset_restores_default_quartiles() {
    let mut widget = widget();
    widget.redraw(0, 0.0, 0.9).expect("redraw");
    widget.redraw(3, 0.2, 0.25).expect("redraw");

    widget.reset().expect("reset");

    for entity in widget.boxes().iter() {
        assert_eq!((entity.q1(), entity.q3()), (0.4, 0.6));
    }
    let (range_min, range_max) = widget.visible_range();
    assert!(range_min < 0.1 && range_max > 0.9);
}

#[test]
fn collapsed_whiskers_with_no_padding_keep_previous_range() {
    let config = BoxPlotConfig::default()
        .with_axis_padding_px(0.0)
        .with_initial_variable_count(1)
        .with_reset_quartiles(0.5, 0.5);

    let widget = BoxPlotWidget::new(NullRenderer::default(), config).expect("widget init");

    assert_eq!(widget.visible_range(), (0.0, 1.0));
}

#[test]
fn every_box_stays_inside_axis_after_refit() {
    let mut widget = widget();
    widget.redraw(1, -3.0, 2.0).expect("redraw");
    widget.drag_start(1, distsketch::interaction::EdgeKind::Q3Edge).expect("drag");
    widget.drag_end().expect("drag end");

    let (range_min, range_max) = widget.visible_range();
    for entity in widget.boxes().iter() {
        assert!(entity.whisker_min() >= range_min);
        assert!(entity.whisker_max() <= range_max);
    }
}
