use approx::assert_relative_eq;
use distsketch::boxplot::{BoxPlotConfig, BoxPlotWidget, VariableLayout};
use distsketch::core::ValueScale;
use distsketch::render::{Color, NullRenderer};
use distsketch::{WidgetError, boxplot::BoxEntity};

fn widget() -> BoxPlotWidget<NullRenderer> {
    BoxPlotWidget::new(NullRenderer::default(), BoxPlotConfig::default()).expect("widget init")
}

#[test]
fn default_widget_builds_four_boxes_at_slot_centers() {
    let widget = widget();

    assert_eq!(widget.boxes().len(), 4);
    assert_eq!(widget.boxes().centers(), vec![80.0, 240.0, 400.0, 560.0]);
    for entity in widget.boxes().iter() {
        assert_relative_eq!(entity.width(), 128.0);
        let (q1, q2, q3) = entity.quartiles();
        assert_relative_eq!(q1, 0.4);
        assert_relative_eq!(q2, 0.5);
        assert_relative_eq!(q3, 0.6);
        assert_relative_eq!(entity.whisker_min(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(entity.whisker_max(), 0.9, epsilon = 1e-12);
    }
    assert_eq!(widget.params().category_labels, vec!["V1", "V2", "V3", "V4"]);
}

#[test]
fn default_range_is_padded_whisker_extent() {
    let widget = widget();
    let (range_min, range_max) = widget.visible_range();

    assert_relative_eq!(range_min, 0.068_75, epsilon = 1e-12);
    assert_relative_eq!(range_max, 0.931_25, epsilon = 1e-12);
}

#[test]
fn redraw_derives_median_and_whiskers() {
    let scale = ValueScale::vertical(0.0, 1.0, 640.0).expect("scale");
    let mut entity = BoxEntity::create(0, 80.0, 128.0, Color::BLACK, Color::WHITE);

    assert!(entity.redraw(0.2, 0.4, 1.5, &scale));
    assert_relative_eq!(entity.q2(), 0.3, epsilon = 1e-12);
    assert_relative_eq!(entity.whisker_min(), -0.1, epsilon = 1e-12);
    assert_relative_eq!(entity.whisker_max(), 0.7, epsilon = 1e-12);

    let geometry = entity.geometry();
    assert_relative_eq!(geometry.box_top, scale.to_pixel(0.4));
    assert_relative_eq!(geometry.box_bottom(), scale.to_pixel(0.2), epsilon = 1e-9);
    assert_relative_eq!(geometry.median_y, scale.to_pixel(0.3), epsilon = 1e-9);
}

#[test]
fn inverted_quartiles_leave_box_untouched() {
    let mut widget = widget();
    let before = widget.entity(1).expect("box 1").clone();

    let applied = widget.redraw(1, 0.7, 0.3).expect("redraw");

    assert!(!applied);
    assert_eq!(widget.entity(1), Some(&before));
}

#[test]
fn collapsed_box_is_accepted() {
    let mut widget = widget();

    assert!(widget.redraw(0, 0.5, 0.5).expect("redraw"));
    let entity = widget.entity(0).expect("box 0");
    assert_relative_eq!(entity.q2(), 0.5);
    assert_relative_eq!(entity.whisker_min(), 0.5);
    assert_relative_eq!(entity.whisker_max(), 0.5);
    assert_relative_eq!(entity.geometry().box_height, 0.0, epsilon = 1e-9);
}

#[test]
fn redraw_is_idempotent() {
    let mut widget = widget();

    widget.redraw(2, 0.3, 0.55).expect("first redraw");
    let first = widget.entity(2).expect("box 2").clone();
    widget.redraw(2, 0.3, 0.55).expect("second redraw");

    assert_eq!(widget.entity(2), Some(&first));
}

#[test]
fn redraw_of_unknown_box_is_an_error() {
    let mut widget = widget();

    let err = widget.redraw(9, 0.1, 0.2).expect_err("index out of range");
    assert!(matches!(err, WidgetError::UnknownEntity { index: 9, count: 4 }));
}

#[test]
fn layout_rebuild_pads_labels_and_resets_quartiles() {
    let mut widget = widget();
    widget.redraw(0, 0.1, 0.2).expect("redraw");

    let layout = VariableLayout {
        variable_count: 2,
        category_labels: vec!["alpha".to_owned()],
        line_colors: vec!["#ff0000".to_owned(), "not-a-color".to_owned()],
        fill_colors: Vec::new(),
    };
    widget.set_layout(&layout).expect("layout");

    assert_eq!(widget.boxes().len(), 2);
    assert_eq!(widget.boxes().centers(), vec![160.0, 480.0]);
    assert_eq!(widget.params().category_labels, vec!["alpha", "V2"]);
    assert_relative_eq!(widget.params().line_color(0).red, 1.0);
    assert_eq!(widget.params().line_color(1), distsketch::boxplot::DEFAULT_LINE_COLOR);
    for entity in widget.boxes().iter() {
        assert_eq!(entity.quartiles(), (0.4, 0.5, 0.6));
    }
}

#[test]
fn zero_variables_are_rejected_and_state_is_kept() {
    let mut widget = widget();

    let result = widget.set_layout(&VariableLayout::with_count(0));

    assert!(result.is_err());
    assert_eq!(widget.boxes().len(), 4);
}

#[test]
fn quartile_columns_are_parallel_and_ordered() {
    let mut widget = widget();
    widget.redraw(0, 0.2, 0.4).expect("redraw");

    let columns = widget.quartile_columns().expect("columns");

    assert_eq!(columns.q1.len(), 4);
    assert_eq!(columns.q2.len(), 4);
    assert_eq!(columns.q3.len(), 4);
    assert_relative_eq!(columns.q1[0], 0.2);
    assert_relative_eq!(columns.q2[0], 0.3, epsilon = 1e-12);
    assert_relative_eq!(columns.q3[0], 0.4);
    assert_relative_eq!(columns.q1[3], 0.4);
}
