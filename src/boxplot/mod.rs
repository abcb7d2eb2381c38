//! Interactive box-plot editor.
//!
//! One box per variable; users drag quartile edges and the widget keeps the
//! value axis fitted to every box's whiskers. The host drives the widget with
//! [`BoxPlotMessage`](crate::bridge::BoxPlotMessage)s and pulls the edited
//! quartiles back with `data_click`.

mod drag;
mod entity;
mod frame;
mod params;
mod reconcile;
mod store;

pub use entity::{BoxEntity, BoxGeometry, PLACEHOLDER_QUARTILES};
pub use params::{
    BoxPlotParams, DEFAULT_FILL_COLOR, DEFAULT_LINE_COLOR, DispersionMode, NORMAL_WHISKER_FACTOR,
    OTHER_WHISKER_FACTOR, VariableLayout,
};
pub use reconcile::ReconcileMode;
pub use store::{BoxCollection, QuartileColumns};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::scale::validate_domain;
use crate::core::{PlotArea, ValueScale, Viewport};
use crate::error::{WidgetError, WidgetResult};
use crate::interaction::{DragState, EdgeKind, GuideLine};
use crate::render::{RenderFrame, Renderer};

/// Box-plot widget bootstrap configuration.
///
/// Serializable so hosts can ship it alongside their page setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotConfig {
    #[serde(default = "default_canvas")]
    pub canvas: Viewport,
    #[serde(default = "default_plot")]
    pub plot: PlotArea,
    #[serde(default = "default_box_width_ratio")]
    pub box_width_ratio: f64,
    /// Pixel headroom added above and below the outermost whiskers.
    #[serde(default = "default_axis_padding_px")]
    pub axis_padding_px: f64,
    #[serde(default = "default_variable_count")]
    pub initial_variable_count: usize,
    /// Quartiles `(q1, q3)` every box gets on (re)build.
    #[serde(default = "default_reset_quartiles")]
    pub reset_quartiles: (f64, f64),
    #[serde(default = "default_edge_hit_tolerance_px")]
    pub edge_hit_tolerance_px: f64,
    #[serde(default = "default_value_tick_count")]
    pub value_tick_count: usize,
}

impl Default for BoxPlotConfig {
    fn default() -> Self {
        Self {
            canvas: default_canvas(),
            plot: default_plot(),
            box_width_ratio: default_box_width_ratio(),
            axis_padding_px: default_axis_padding_px(),
            initial_variable_count: default_variable_count(),
            reset_quartiles: default_reset_quartiles(),
            edge_hit_tolerance_px: default_edge_hit_tolerance_px(),
            value_tick_count: default_value_tick_count(),
        }
    }
}

impl BoxPlotConfig {
    #[must_use]
    pub fn with_initial_variable_count(mut self, count: usize) -> Self {
        self.initial_variable_count = count;
        self
    }

    #[must_use]
    pub fn with_reset_quartiles(mut self, q1: f64, q3: f64) -> Self {
        self.reset_quartiles = (q1, q3);
        self
    }

    #[must_use]
    pub fn with_axis_padding_px(mut self, padding_px: f64) -> Self {
        self.axis_padding_px = padding_px;
        self
    }

    #[must_use]
    pub fn with_plot(mut self, canvas: Viewport, plot: PlotArea) -> Self {
        self.canvas = canvas;
        self.plot = plot;
        self
    }

    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            WidgetError::InvalidData(format!("failed to parse box plot config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(self) -> WidgetResult<Self> {
        self.plot.validate(self.canvas)?;
        if !self.axis_padding_px.is_finite() || self.axis_padding_px < 0.0 {
            return Err(WidgetError::InvalidData(
                "axis padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.edge_hit_tolerance_px.is_finite() || self.edge_hit_tolerance_px < 0.0 {
            return Err(WidgetError::InvalidData(
                "edge hit tolerance must be finite and >= 0".to_owned(),
            ));
        }
        let (q1, q3) = self.reset_quartiles;
        if !q1.is_finite() || !q3.is_finite() || q1 > q3 {
            return Err(WidgetError::InvalidData(
                "reset quartiles must be finite with q1 <= q3".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_canvas() -> Viewport {
    Viewport::new(700, 700)
}

fn default_plot() -> PlotArea {
    PlotArea::new(57.0, 30.0, 640.0, 640.0)
}

fn default_box_width_ratio() -> f64 {
    0.8
}

fn default_axis_padding_px() -> f64 {
    20.0
}

fn default_variable_count() -> usize {
    4
}

fn default_reset_quartiles() -> (f64, f64) {
    (0.4, 0.6)
}

fn default_edge_hit_tolerance_px() -> f64 {
    4.0
}

fn default_value_tick_count() -> usize {
    10
}

/// Box-plot editor instance. Owns its renderer, parameters and boxes.
pub struct BoxPlotWidget<R: Renderer> {
    renderer: R,
    config: BoxPlotConfig,
    params: BoxPlotParams,
    scale: ValueScale,
    store: BoxCollection,
    drag: DragState,
    guide: GuideLine,
}

impl<R: Renderer> BoxPlotWidget<R> {
    /// Creates the widget and builds the initial boxes.
    pub fn new(renderer: R, config: BoxPlotConfig) -> WidgetResult<Self> {
        let config = config.validate()?;
        let params = BoxPlotParams::with_count(config.initial_variable_count)?;
        let (range_min, range_max) = params.visible_range;
        let scale = ValueScale::vertical(range_min, range_max, config.plot.height)?;

        let mut widget = Self {
            renderer,
            config,
            params,
            scale,
            store: BoxCollection::default(),
            drag: DragState::Idle,
            guide: GuideLine::default(),
        };
        widget.reset()?;
        Ok(widget)
    }

    #[must_use]
    pub fn config(&self) -> BoxPlotConfig {
        self.config
    }

    #[must_use]
    pub fn params(&self) -> &BoxPlotParams {
        &self.params
    }

    #[must_use]
    pub fn boxes(&self) -> &BoxCollection {
        &self.store
    }

    #[must_use]
    pub fn entity(&self, index: usize) -> Option<&BoxEntity> {
        self.store.get(index)
    }

    #[must_use]
    pub fn scale(&self) -> ValueScale {
        self.scale
    }

    #[must_use]
    pub fn visible_range(&self) -> (f64, f64) {
        self.scale.domain()
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.config.plot
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn guide_line(&self) -> GuideLine {
        self.guide
    }

    /// Rebuilds every box at the configured reset quartiles and refits the axis.
    ///
    /// Any drag in progress is dropped.
    pub fn reset(&mut self) -> WidgetResult<()> {
        self.store.rebuild(
            &self.params,
            self.config.plot.width,
            self.config.box_width_ratio,
        )?;
        self.drag = DragState::Idle;
        self.guide.visible = false;

        let (q1, q3) = self.config.reset_quartiles;
        let factor = self.params.whisker_factor;
        for index in 0..self.store.len() {
            self.store.redraw(index, q1, q3, factor, &self.scale)?;
        }
        debug!(
            variable_count = self.store.len(),
            q1, q3, "rebuilt box collection"
        );
        self.reconcile(ReconcileMode::Default)
    }

    /// Applies a new variable layout and rebuilds from scratch.
    pub fn set_layout(&mut self, layout: &VariableLayout) -> WidgetResult<()> {
        self.params.apply_layout(layout)?;
        debug!(
            variable_count = self.params.variable_count,
            labels = ?self.params.category_labels,
            "applied variable layout"
        );
        self.reset()
    }

    /// Sets an explicit value range; boxes keep their on-screen geometry.
    pub fn set_visible_range(&mut self, range_min: f64, range_max: f64) -> WidgetResult<()> {
        validate_domain(range_min, range_max)?;
        self.params.visible_range = (range_min, range_max);
        self.reconcile(ReconcileMode::Init)
    }

    /// Switches the dispersion mode and refits whiskers and axis.
    pub fn set_dispersion_mode(&mut self, mode: DispersionMode) -> WidgetResult<()> {
        self.params.set_dispersion_mode(mode);
        debug!(
            mode = mode.as_wire(),
            whisker_factor = self.params.whisker_factor,
            "dispersion mode changed"
        );
        self.reconcile(ReconcileMode::Dist)
    }

    /// Recenters every box on the middle of the refitted axis.
    pub fn realign(&mut self) -> WidgetResult<()> {
        self.reconcile(ReconcileMode::Align)
    }

    /// Moves one box to `(q1, q3)` at the current scale.
    ///
    /// `Ok(false)` when `q1 > q3`; the box then keeps its previous values.
    pub fn redraw(&mut self, index: usize, q1: f64, q3: f64) -> WidgetResult<bool> {
        self.store
            .redraw(index, q1, q3, self.params.whisker_factor, &self.scale)
    }

    /// Quartile columns for the host, `None` when no box exists.
    #[must_use]
    pub fn quartile_columns(&self) -> Option<QuartileColumns> {
        if self.store.is_empty() {
            return None;
        }
        Some(self.store.quartile_columns())
    }

    /// Box edge under a plot-local pointer position.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<(usize, EdgeKind)> {
        self.store.hit_test(x, y, self.config.edge_hit_tolerance_px)
    }

    pub fn render(&mut self) -> WidgetResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        frame::build_box_plot_frame(self)
    }

    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> WidgetResult<()>
    where
        R: crate::render::CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
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
