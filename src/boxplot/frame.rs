use crate::render::axis::{push_bottom_band_axis, push_left_value_axis};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer};

use super::BoxPlotWidget;

const PLOT_BACKGROUND: Color = Color::rgba(0.0, 120.0 / 255.0, 240.0 / 255.0, 30.0 / 255.0);
const WHISKER_COLOR: Color = Color::rgb(0.6, 0.6, 0.6);
const WHISKER_STROKE_WIDTH: f64 = 3.0;
const EDGE_STROKE_WIDTH: f64 = 6.0;
const QUARTILE_EDGE_ALPHA: f64 = 0.9;
const GUIDE_COLOR: Color = Color::rgb(0.4, 0.4, 0.4);

pub(super) fn build_box_plot_frame<R: Renderer>(widget: &BoxPlotWidget<R>) -> RenderFrame {
    let config = widget.config();
    let plot = config.plot;
    let mut frame = RenderFrame::new(config.canvas);

    frame.rects.push(RectPrimitive::new(
        plot.left,
        plot.top,
        plot.width,
        plot.height,
        PLOT_BACKGROUND,
    ));

    for entity in widget.boxes().iter() {
        let geometry = entity.geometry();
        let left = plot.left + entity.left_x();
        let right = left + entity.width();
        let center = plot.left + entity.center_x();
        let line_color = entity.line_color();

        frame.rects.push(RectPrimitive::new(
            left,
            plot.top + geometry.box_top,
            entity.width(),
            geometry.box_height,
            entity.fill_color(),
        ));

        for (from, to) in [
            (geometry.whisker_low_y, geometry.q1_y),
            (geometry.q3_y, geometry.whisker_high_y),
        ] {
            frame.lines.push(LinePrimitive::new(
                center,
                plot.top + from,
                center,
                plot.top + to,
                WHISKER_STROKE_WIDTH,
                WHISKER_COLOR,
            ));
        }

        for (y, color) in [
            (geometry.q1_y, line_color.with_alpha(line_color.alpha * QUARTILE_EDGE_ALPHA)),
            (geometry.median_y, line_color),
            (geometry.q3_y, line_color.with_alpha(line_color.alpha * QUARTILE_EDGE_ALPHA)),
        ] {
            frame.lines.push(LinePrimitive::new(
                left,
                plot.top + y,
                right,
                plot.top + y,
                EDGE_STROKE_WIDTH,
                color,
            ));
        }
    }

    let guide = widget.guide_line();
    if guide.visible {
        frame.lines.push(LinePrimitive::new(
            plot.left + guide.x_start,
            plot.top + guide.y,
            plot.left + guide.x_end,
            plot.top + guide.y,
            1.0,
            GUIDE_COLOR,
        ));
    }

    push_left_value_axis(&mut frame, plot, widget.scale(), config.value_tick_count);
    push_bottom_band_axis(
        &mut frame,
        plot,
        &widget.boxes().centers(),
        &widget.params().category_labels,
    );

    frame
}
