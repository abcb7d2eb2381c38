//! Histogram painter.
//!
//! Users paint bar heights for the selected variable by sweeping the pointer
//! across the plot; every variable owns one count per bin.

mod frame;
mod params;

pub use params::{
    AxisLimits, DEFAULT_BAR_COLOR, HistogramLayout, HistogramParams, VariableSelection,
    variable_name,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{BandSlots, PlotArea, ValueScale, Viewport};
use crate::error::{WidgetError, WidgetResult};
use crate::interaction::{GuideLine, InteractionMode, InteractionState};
use crate::render::{Color, RenderFrame, Renderer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramConfig {
    #[serde(default = "default_canvas")]
    pub canvas: Viewport,
    #[serde(default = "default_plot")]
    pub plot: PlotArea,
    #[serde(default = "default_layout")]
    pub initial_layout: HistogramLayout,
    #[serde(default = "default_limits")]
    pub initial_limits: AxisLimits,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            canvas: default_canvas(),
            plot: default_plot(),
            initial_layout: default_layout(),
            initial_limits: default_limits(),
            tick_count: default_tick_count(),
        }
    }
}

impl HistogramConfig {
    #[must_use]
    pub fn with_initial_layout(mut self, layout: HistogramLayout) -> Self {
        self.initial_layout = layout;
        self
    }

    #[must_use]
    pub fn with_initial_limits(mut self, limits: AxisLimits) -> Self {
        self.initial_limits = limits;
        self
    }

    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            WidgetError::InvalidData(format!("failed to parse histogram config: {e}"))
        })?;
        config.validate()
    }

    pub fn validate(self) -> WidgetResult<Self> {
        self.plot.validate(self.canvas)?;
        self.initial_limits.validate()?;
        Ok(self)
    }
}

fn default_canvas() -> Viewport {
    Viewport::new(700, 700)
}

fn default_plot() -> PlotArea {
    PlotArea::new(60.0, 30.0, 610.0, 640.0)
}

fn default_layout() -> HistogramLayout {
    HistogramLayout {
        variable_count: 1,
        bin_count: 10,
        colors: vec!["#000".to_owned()],
    }
}

fn default_limits() -> AxisLimits {
    AxisLimits {
        x_min: 0.0,
        x_max: 10.0,
        y_max: 100.0,
    }
}

fn default_tick_count() -> usize {
    10
}

/// Painted counts keyed by variable name, in variable order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinCounts(pub IndexMap<String, Vec<i64>>);

pub struct HistogramWidget<R: Renderer> {
    renderer: R,
    config: HistogramConfig,
    params: HistogramParams,
    x_scale: ValueScale,
    y_scale: ValueScale,
    bins: BandSlots,
    bars: IndexMap<String, Vec<f64>>,
    interaction: InteractionState,
}

impl<R: Renderer> HistogramWidget<R> {
    pub fn new(renderer: R, config: HistogramConfig) -> WidgetResult<Self> {
        let config = config.validate()?;
        let limits = config.initial_limits;
        let mut params = HistogramParams {
            variable_count: 1,
            bin_count: 1,
            colors: Vec::new(),
            limits,
            selected_variable: variable_name(0),
        };
        params.apply_layout(&config.initial_layout)?;

        let x_scale = ValueScale::horizontal(limits.x_min, limits.x_max, config.plot.width)?;
        let y_scale = ValueScale::vertical(0.0, limits.y_max, config.plot.height)?;
        let bins = BandSlots::new(params.bin_count, config.plot.width, 1.0)?;

        let mut widget = Self {
            renderer,
            config,
            params,
            x_scale,
            y_scale,
            bins,
            bars: IndexMap::new(),
            interaction: InteractionState::default(),
        };
        widget.reset()?;
        Ok(widget)
    }

    #[must_use]
    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    #[must_use]
    pub fn params(&self) -> &HistogramParams {
        &self.params
    }

    #[must_use]
    pub fn x_scale(&self) -> ValueScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> ValueScale {
        self.y_scale
    }

    #[must_use]
    pub fn bins(&self) -> BandSlots {
        self.bins
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.config.plot
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn guide_line(&self) -> GuideLine {
        self.interaction.guide()
    }

    /// Bar heights of one variable, in value space.
    #[must_use]
    pub fn bars(&self, variable: &str) -> Option<&[f64]> {
        self.bars.get(variable).map(Vec::as_slice)
    }

    pub(crate) fn bar_sets(&self) -> impl Iterator<Item = (usize, &[f64], Color)> + '_ {
        self.bars
            .values()
            .enumerate()
            .map(|(index, heights)| (index, heights.as_slice(), self.params.color(index)))
    }

    /// Zeroes every bar of every variable and stops painting.
    pub fn reset(&mut self) -> WidgetResult<()> {
        self.bins = BandSlots::new(self.params.bin_count, self.config.plot.width, 1.0)?;
        self.bars = (0..self.params.variable_count)
            .map(|index| (variable_name(index), vec![0.0; self.params.bin_count]))
            .collect();
        self.interaction.on_pointer_leave();
        debug!(
            variable_count = self.params.variable_count,
            bin_count = self.params.bin_count,
            "rebuilt histogram bars"
        );
        Ok(())
    }

    /// Applies a new variable/bin layout; all painted bars are discarded.
    pub fn set_layout(&mut self, layout: &HistogramLayout) -> WidgetResult<()> {
        self.params.apply_layout(layout)?;
        self.reset()
    }

    /// Rescales both axes; bar counts are kept and clamped to the new y max.
    pub fn set_axis_limits(&mut self, limits: AxisLimits) -> WidgetResult<()> {
        let limits = limits.validate()?;
        self.x_scale.rescale(limits.x_min, limits.x_max)?;
        self.y_scale.rescale(0.0, limits.y_max)?;
        self.params.limits = limits;
        for heights in self.bars.values_mut() {
            for height in heights.iter_mut() {
                *height = height.clamp(0.0, limits.y_max);
            }
        }
        debug!(
            x_min = limits.x_min,
            x_max = limits.x_max,
            y_max = limits.y_max,
            "histogram axes rescaled"
        );
        Ok(())
    }

    pub fn select_variable(&mut self, variable: impl Into<String>) {
        let variable = variable.into();
        if !self.bars.contains_key(&variable) {
            warn!(variable = %variable, "selected variable has no bars yet");
        }
        self.params.selected_variable = variable;
    }

    /// Raises every bar of the selected variable to the y max.
    pub fn align_up(&mut self) -> bool {
        let y_max = self.params.limits.y_max;
        self.fill_selected(y_max)
    }

    /// Drops every bar of the selected variable to zero.
    pub fn align_down(&mut self) -> bool {
        self.fill_selected(0.0)
    }

    fn fill_selected(&mut self, value: f64) -> bool {
        let Some(heights) = self.bars.get_mut(&self.params.selected_variable) else {
            warn!(variable = %self.params.selected_variable, "align on unknown variable");
            return false;
        };
        heights.fill(value);
        true
    }

    pub fn pointer_down(&mut self) {
        self.interaction.on_press();
    }

    /// Moves the guide to plot-local `(x, y)` and paints when pressed.
    ///
    /// Returns whether a bar changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> WidgetResult<bool> {
        if !x.is_finite() || !y.is_finite() {
            return Err(WidgetError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        let value = self
            .y_scale
            .to_value(y)
            .round()
            .clamp(0.0, self.params.limits.y_max);
        self.interaction
            .on_pointer_move(0.0, self.config.plot.width, self.y_scale.to_pixel(value));

        if !self.interaction.is_painting() {
            return Ok(false);
        }
        let Some(bin) = self.bins.nearest(x) else {
            return Ok(false);
        };
        let Some(heights) = self.bars.get_mut(&self.params.selected_variable) else {
            return Ok(false);
        };
        let Some(height) = heights.get_mut(bin) else {
            return Ok(false);
        };
        *height = value;
        trace!(bin, value, variable = %self.params.selected_variable, "painted bar");
        Ok(true)
    }

    pub fn pointer_up(&mut self) {
        self.interaction.on_release();
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Rounded counts per variable for the host.
    #[must_use]
    pub fn bin_counts(&self) -> BinCounts {
        BinCounts(
            self.bars
                .iter()
                .map(|(name, heights)| {
                    let counts = heights.iter().map(|height| height.round() as i64).collect();
                    (name.clone(), counts)
                })
                .collect(),
        )
    }

    pub fn render(&mut self) -> WidgetResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        frame::build_histogram_frame(self)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
