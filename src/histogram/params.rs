use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bridge::one_or_many;
use crate::error::{WidgetError, WidgetResult};
use crate::render::Color;

pub const DEFAULT_BAR_COLOR: Color = Color::BLACK;

/// Variable/bin layout pushed on `update_params`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramLayout {
    #[serde(alias = "nv")]
    pub variable_count: usize,
    #[serde(alias = "nb")]
    pub bin_count: usize,
    #[serde(alias = "col", default, deserialize_with = "one_or_many")]
    pub colors: Vec<String>,
}

/// Axis limits pushed on `update_axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    #[serde(alias = "xmn")]
    pub x_min: f64,
    #[serde(alias = "xmx")]
    pub x_max: f64,
    #[serde(alias = "ymx")]
    pub y_max: f64,
}

impl AxisLimits {
    pub fn validate(self) -> WidgetResult<Self> {
        if !self.x_min.is_finite() || !self.x_max.is_finite() || self.x_min >= self.x_max {
            return Err(WidgetError::InvalidRange {
                min: self.x_min,
                max: self.x_max,
            });
        }
        if !self.y_max.is_finite() || self.y_max <= 0.0 {
            return Err(WidgetError::InvalidRange {
                min: 0.0,
                max: self.y_max,
            });
        }
        Ok(self)
    }
}

/// Variable picked for painting on `select_var`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSelection {
    #[serde(alias = "v")]
    pub variable: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramParams {
    pub variable_count: usize,
    pub bin_count: usize,
    pub colors: Vec<Color>,
    pub limits: AxisLimits,
    pub selected_variable: String,
}

impl HistogramParams {
    pub fn apply_layout(&mut self, layout: &HistogramLayout) -> WidgetResult<()> {
        if layout.variable_count == 0 || layout.bin_count == 0 {
            return Err(WidgetError::InvalidData(
                "histogram needs at least one variable and one bin".to_owned(),
            ));
        }
        self.variable_count = layout.variable_count;
        self.bin_count = layout.bin_count;
        self.colors = (0..layout.variable_count)
            .map(|index| match layout.colors.get(index) {
                None => DEFAULT_BAR_COLOR,
                Some(css) => Color::from_css(css).unwrap_or_else(|err| {
                    warn!(index, color = %css, error = %err, "falling back to default bar color");
                    DEFAULT_BAR_COLOR
                }),
            })
            .collect();
        Ok(())
    }

    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(DEFAULT_BAR_COLOR)
    }

    /// Value width of one bin on the x axis.
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        (self.limits.x_max - self.limits.x_min) / self.bin_count as f64
    }
}

#[must_use]
pub fn variable_name(index: usize) -> String {
    format!("V{}", index + 1)
}
