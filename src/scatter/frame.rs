use crate::render::axis::{push_bottom_value_axis, push_left_value_axis};
use crate::render::{CirclePrimitive, Color, RectPrimitive, RenderFrame, Renderer};

use super::ScatterWidget;

const PLOT_BACKGROUND: Color = Color::rgba(0.0, 120.0 / 255.0, 240.0 / 255.0, 30.0 / 255.0);
const POINT_STROKE: Color = Color::rgb(0.4, 0.4, 0.4);
const POINT_OPACITY: f64 = 0.9;

pub(super) fn build_scatter_frame<R: Renderer>(widget: &ScatterWidget<R>) -> RenderFrame {
    let config = widget.config();
    let plot = config.plot;
    let (x_scale, y_scale) = (widget.x_scale(), widget.y_scale());
    let mut frame = RenderFrame::new(config.canvas);

    push_bottom_value_axis(&mut frame, plot, x_scale, config.tick_count);
    push_left_value_axis(&mut frame, plot, y_scale, config.tick_count);

    frame.rects.push(RectPrimitive::new(
        plot.left,
        plot.top,
        plot.width,
        plot.height,
        PLOT_BACKGROUND,
    ));

    let points = widget
        .strokes()
        .iter()
        .flatten()
        .chain(widget.pending().iter());
    for point in points {
        frame.circles.push(CirclePrimitive::new(
            plot.left + x_scale.to_pixel(point.x),
            plot.top + y_scale.to_pixel(point.y),
            config.point_radius_px,
            Some(point.color.with_alpha(point.color.alpha * POINT_OPACITY)),
            POINT_STROKE.with_alpha(POINT_OPACITY),
            1.0,
        ));
    }

    let hover = widget.hover_circle();
    if hover.visible && hover.radius > 0.0 {
        frame.circles.push(CirclePrimitive::new(
            plot.left + hover.cx,
            plot.top + hover.cy,
            hover.radius,
            None,
            POINT_STROKE,
            1.0,
        ));
    }

    frame
}
