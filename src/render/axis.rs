use crate::core::{PlotArea, ValueScale, format_tick, tick_step};
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

pub const AXIS_COLOR: Color = Color::BLACK;
pub const AXIS_STROKE_WIDTH: f64 = 1.0;
pub const AXIS_TICK_SIZE_PX: f64 = 6.0;
pub const AXIS_LABEL_GAP_PX: f64 = 3.0;
pub const AXIS_FONT_SIZE_PX: f64 = 10.0;

/// Left-hand value axis: spine, ticks and labels for a vertical scale.
pub fn push_left_value_axis(
    frame: &mut RenderFrame,
    plot: PlotArea,
    scale: ValueScale,
    tick_count: usize,
) {
    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.bottom(),
        AXIS_STROKE_WIDTH,
        AXIS_COLOR,
    ));

    let (min, max) = scale.domain();
    let step = tick_step(min, max, tick_count);
    for value in scale.ticks(tick_count) {
        let y = plot.top + scale.to_pixel(value);
        frame.lines.push(LinePrimitive::new(
            plot.left - AXIS_TICK_SIZE_PX,
            y,
            plot.left,
            y,
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(value, step),
            plot.left - AXIS_TICK_SIZE_PX - AXIS_LABEL_GAP_PX,
            y - AXIS_FONT_SIZE_PX / 2.0,
            AXIS_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }
}

/// Bottom value axis for a horizontal scale.
pub fn push_bottom_value_axis(
    frame: &mut RenderFrame,
    plot: PlotArea,
    scale: ValueScale,
    tick_count: usize,
) {
    push_bottom_spine(frame, plot);

    let (min, max) = scale.domain();
    let step = tick_step(min, max, tick_count);
    for value in scale.ticks(tick_count) {
        push_bottom_tick(frame, plot, scale.to_pixel(value), &format_tick(value, step));
    }
}

/// Bottom category axis: one tick and label per slot center.
pub fn push_bottom_band_axis(
    frame: &mut RenderFrame,
    plot: PlotArea,
    centers: &[f64],
    labels: &[String],
) {
    push_bottom_spine(frame, plot);
    for (center, label) in centers.iter().zip(labels) {
        push_bottom_tick(frame, plot, *center, label);
    }
}

fn push_bottom_spine(frame: &mut RenderFrame, plot: PlotArea) {
    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        AXIS_STROKE_WIDTH,
        AXIS_COLOR,
    ));
}

fn push_bottom_tick(frame: &mut RenderFrame, plot: PlotArea, local_x: f64, label: &str) {
    let x = plot.left + local_x;
    frame.lines.push(LinePrimitive::new(
        x,
        plot.bottom(),
        x,
        plot.bottom() + AXIS_TICK_SIZE_PX,
        AXIS_STROKE_WIDTH,
        AXIS_COLOR,
    ));
    // Blank labels keep their tick.
    if label.is_empty() {
        return;
    }
    frame.texts.push(TextPrimitive::new(
        label,
        x,
        plot.bottom() + AXIS_TICK_SIZE_PX + AXIS_LABEL_GAP_PX,
        AXIS_FONT_SIZE_PX,
        AXIS_COLOR,
        TextHAlign::Center,
    ));
}
