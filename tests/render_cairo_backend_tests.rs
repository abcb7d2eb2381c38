#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use distsketch::WidgetError;
use distsketch::boxplot::{BoxPlotConfig, BoxPlotWidget};
use distsketch::histogram::{HistogramConfig, HistogramWidget};
use distsketch::render::CairoRenderer;
use distsketch::scatter::{ScatterConfig, ScatterWidget};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 700).expect_err("invalid width must fail");
    assert!(matches!(err, WidgetError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_box_plot() {
    let renderer = CairoRenderer::new(700, 700).expect("renderer");
    let mut widget = BoxPlotWidget::new(renderer, BoxPlotConfig::default()).expect("widget init");
    let expected = widget.build_render_frame();

    widget.render().expect("render");
    let stats = widget.into_renderer().last_stats();

    assert_eq!(stats.rects_drawn, expected.rects.len());
    assert_eq!(stats.lines_drawn, expected.lines.len());
    assert_eq!(stats.texts_drawn, expected.texts.len());
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(700, 700).expect("renderer");
    let mut widget = BoxPlotWidget::new(renderer, BoxPlotConfig::default()).expect("widget init");

    let surface = ImageSurface::create(Format::ARgb32, 700, 700).expect("surface");
    let context = Context::new(&surface).expect("context");
    widget
        .render_on_cairo_context(&context)
        .expect("render on context");

    assert!(widget.into_renderer().last_stats().lines_drawn >= 25);
}

#[test]
fn cairo_renderer_draws_histogram_and_scatter() {
    let mut histogram = HistogramWidget::new(
        CairoRenderer::new(700, 700).expect("renderer"),
        HistogramConfig::default(),
    )
    .expect("histogram init");
    histogram.render().expect("histogram render");
    assert_eq!(histogram.renderer().last_stats().circles_drawn, 1);

    let mut scatter = ScatterWidget::new(
        CairoRenderer::new(700, 700).expect("renderer"),
        ScatterConfig::default(),
    )
    .expect("scatter init");
    scatter.pointer_move(320.0, 320.0).expect("hover");
    scatter.render().expect("scatter render");
    assert_eq!(scatter.renderer().last_stats().circles_drawn, 1);
}
