//! Scatter sprayer.
//!
//! Pressing and dragging on the plot sprays random points around the pointer.
//! Each press-to-release gesture forms one stroke, the unit of undo and redo.

mod frame;
mod params;

pub use params::ScatterParams;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{PlotArea, ValueScale, Viewport};
use crate::error::{WidgetError, WidgetResult};
use crate::interaction::{HoverCircle, InteractionMode, InteractionState};
use crate::render::{Color, RenderFrame, Renderer};

pub const DEFAULT_POINT_COLOR: Color = Color::BLACK;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterConfig {
    #[serde(default = "default_canvas")]
    pub canvas: Viewport,
    #[serde(default = "default_plot")]
    pub plot: PlotArea,
    #[serde(default)]
    pub initial_params: ScatterParams,
    #[serde(default = "default_point_radius_px")]
    pub point_radius_px: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            canvas: default_canvas(),
            plot: default_plot(),
            initial_params: ScatterParams::default(),
            point_radius_px: default_point_radius_px(),
            tick_count: default_tick_count(),
        }
    }
}

impl ScatterConfig {
    #[must_use]
    pub fn with_initial_params(mut self, params: ScatterParams) -> Self {
        self.initial_params = params;
        self
    }

    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            WidgetError::InvalidData(format!("failed to parse scatter config: {e}"))
        })?;
        config.validate()
    }

    pub fn validate(self) -> WidgetResult<Self> {
        self.plot.validate(self.canvas)?;
        if !self.point_radius_px.is_finite() || self.point_radius_px <= 0.0 {
            return Err(WidgetError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            initial_params: self.initial_params.validate()?,
            ..self
        })
    }
}

fn default_canvas() -> Viewport {
    Viewport::new(700, 700)
}

fn default_plot() -> PlotArea {
    PlotArea::new(30.0, 30.0, 640.0, 640.0)
}

fn default_point_radius_px() -> f64 {
    5.0
}

fn default_tick_count() -> usize {
    10
}

/// One sprayed point, in value space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub group: String,
    pub color: Color,
}

pub struct ScatterWidget<R: Renderer> {
    renderer: R,
    config: ScatterConfig,
    params: ScatterParams,
    color: Color,
    x_scale: ValueScale,
    y_scale: ValueScale,
    strokes: Vec<Vec<ScatterPoint>>,
    redo: Vec<Vec<ScatterPoint>>,
    pending: Vec<ScatterPoint>,
    interaction: InteractionState,
    hover: HoverCircle,
}

impl<R: Renderer> ScatterWidget<R> {
    pub fn new(renderer: R, config: ScatterConfig) -> WidgetResult<Self> {
        let config = config.validate()?;
        let params = config.initial_params.clone();
        let x_scale = ValueScale::horizontal(0.0, params.x_max, config.plot.width)?;
        let y_scale = ValueScale::vertical(0.0, params.y_max, config.plot.height)?;
        Ok(Self {
            renderer,
            color: resolve_color(&params.color),
            config,
            params,
            x_scale,
            y_scale,
            strokes: Vec::new(),
            redo: Vec::new(),
            pending: Vec::new(),
            interaction: InteractionState::default(),
            hover: HoverCircle::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    #[must_use]
    pub fn params(&self) -> &ScatterParams {
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
    pub fn plot_area(&self) -> PlotArea {
        self.config.plot
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn hover_circle(&self) -> HoverCircle {
        self.hover
    }

    #[must_use]
    pub fn strokes(&self) -> &[Vec<ScatterPoint>] {
        &self.strokes
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Points of the stroke currently being sprayed.
    #[must_use]
    pub fn pending(&self) -> &[ScatterPoint] {
        &self.pending
    }

    /// Committed points plus points of the stroke in progress.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Vec::len).sum::<usize>() + self.pending.len()
    }

    /// Spray radius in pixels.
    #[must_use]
    pub fn spray_radius_px(&self) -> f64 {
        self.params.spray_size * self.config.plot.width / 2.0
    }

    /// Replaces the spray settings and rescales both axes to the new maxima.
    pub fn set_params(&mut self, params: ScatterParams) -> WidgetResult<()> {
        let params = params.validate()?;
        self.x_scale.rescale(0.0, params.x_max)?;
        self.y_scale.rescale(0.0, params.y_max)?;
        self.color = resolve_color(&params.color);
        debug!(
            group = %params.group,
            spray_size = params.spray_size,
            x_max = params.x_max,
            y_max = params.y_max,
            "scatter params replaced"
        );
        self.params = params;
        Ok(())
    }

    /// Starts a new stroke; any redo history is dropped.
    pub fn pointer_down(&mut self) {
        self.redo.clear();
        self.interaction.on_press();
    }

    /// Moves the hover circle and, while spraying, drops one random point.
    ///
    /// Returns whether a point was added.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> WidgetResult<bool> {
        self.pointer_move_with_rng(x, y, &mut rand::rng())
    }

    pub fn pointer_move_with_rng<G: Rng + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        rng: &mut G,
    ) -> WidgetResult<bool> {
        if !x.is_finite() || !y.is_finite() {
            return Err(WidgetError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        let radius = self.spray_radius_px();
        self.hover = HoverCircle {
            visible: true,
            cx: x,
            cy: y,
            radius,
        };
        if !self.interaction.is_painting() {
            return Ok(false);
        }

        let r = radius * rng.random::<f64>().sqrt();
        let theta = std::f64::consts::TAU * rng.random::<f64>();
        let (px, py) = (x + r * theta.cos(), y + r * theta.sin());
        if !self.config.plot.contains_local(px, py) {
            trace!(px, py, "sprayed point fell outside the plot");
            return Ok(false);
        }

        self.pending.push(ScatterPoint {
            x: self.x_scale.to_value(px),
            y: self.y_scale.to_value(py),
            group: self.params.group.clone(),
            color: self.color,
        });
        Ok(true)
    }

    /// Ends spraying and commits the stroke if it holds any point.
    pub fn pointer_up(&mut self) {
        self.interaction.on_release();
        self.commit_pending();
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
        self.hover.visible = false;
        self.commit_pending();
    }

    fn commit_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let stroke = std::mem::take(&mut self.pending);
        debug!(points = stroke.len(), strokes = self.strokes.len() + 1, "stroke committed");
        self.strokes.push(stroke);
    }

    /// Clears every stroke and the redo history; no-op when nothing is committed.
    pub fn reset(&mut self) -> bool {
        if self.strokes.is_empty() {
            return false;
        }
        self.strokes.clear();
        self.redo.clear();
        debug!("scatter strokes cleared");
        true
    }

    pub fn undo(&mut self) -> bool {
        let Some(stroke) = self.strokes.pop() else {
            return false;
        };
        self.redo.push(stroke);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.redo.pop() else {
            return false;
        };
        self.strokes.push(stroke);
        true
    }

    /// Committed points as parallel columns, `None` when nothing is committed.
    #[must_use]
    pub fn point_columns(&self) -> Option<(Vec<f64>, Vec<f64>, Vec<String>)> {
        if self.strokes.is_empty() {
            return None;
        }
        let points = self.strokes.iter().flatten();
        let x = points.clone().map(|point| point.x).collect();
        let y = points.clone().map(|point| point.y).collect();
        let g = points.map(|point| point.group.clone()).collect();
        Some((x, y, g))
    }

    pub fn render(&mut self) -> WidgetResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        frame::build_scatter_frame(self)
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

fn resolve_color(css: &str) -> Color {
    Color::from_css(css).unwrap_or_else(|err| {
        warn!(color = %css, error = %err, "falling back to default point color");
        DEFAULT_POINT_COLOR
    })
}
