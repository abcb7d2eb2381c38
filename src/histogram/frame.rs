use crate::render::axis::{push_bottom_value_axis, push_left_value_axis};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::{HistogramWidget, variable_name};

const BAR_FILL_ALPHA: f64 = 0.3;
const BAR_BORDER_WIDTH: f64 = 1.0;
const GUIDE_COLOR: Color = Color::rgb(0.4, 0.4, 0.4);
const LEGEND_DOT_RADIUS: f64 = 6.0;
const LEGEND_RIGHT_INSET_PX: f64 = 40.0;
const LEGEND_ROW_PX: f64 = 20.0;
const LEGEND_FONT_SIZE_PX: f64 = 15.0;

pub(super) fn build_histogram_frame<R: Renderer>(widget: &HistogramWidget<R>) -> RenderFrame {
    let config = widget.config();
    let plot = config.plot;
    let y_scale = widget.y_scale();
    let bins = widget.bins();
    let mut frame = RenderFrame::new(config.canvas);

    for (_, heights, color) in widget.bar_sets() {
        for (bin, height) in heights.iter().enumerate() {
            let top = y_scale.to_pixel(*height);
            frame.rects.push(
                RectPrimitive::new(
                    plot.left + bins.center(bin) - bins.step() / 2.0,
                    plot.top + top,
                    bins.step(),
                    plot.height - top,
                    color.with_alpha(BAR_FILL_ALPHA),
                )
                .with_border(BAR_BORDER_WIDTH, Color::BLACK),
            );
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

    push_left_value_axis(&mut frame, plot, y_scale, config.tick_count);
    push_bottom_value_axis(&mut frame, plot, widget.x_scale(), config.tick_count);

    let legend_x = plot.left + plot.width - LEGEND_RIGHT_INSET_PX;
    for (index, _, color) in widget.bar_sets() {
        let y = plot.top + LEGEND_ROW_PX * index as f64 + LEGEND_ROW_PX;
        frame.circles.push(CirclePrimitive::new(
            legend_x,
            y,
            LEGEND_DOT_RADIUS,
            Some(color),
            color,
            0.0,
        ));
        frame.texts.push(TextPrimitive::new(
            variable_name(index),
            legend_x + 10.0,
            y - LEGEND_FONT_SIZE_PX / 2.0,
            LEGEND_FONT_SIZE_PX,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }

    frame
}
