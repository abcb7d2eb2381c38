use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bridge::one_or_many;
use crate::error::{WidgetError, WidgetResult};
use crate::render::Color;

pub const NORMAL_WHISKER_FACTOR: f64 = 1.5;
pub const OTHER_WHISKER_FACTOR: f64 = 0.5;
pub const DEFAULT_LINE_COLOR: Color = Color::BLACK;
pub const DEFAULT_FILL_COLOR: Color = Color::WHITE;

/// Distribution assumption driving whisker length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DispersionMode {
    /// Whiskers at 1.5 x IQR (wire value `"n"`).
    #[default]
    Normal,
    /// Tighter whiskers at 0.5 x IQR (any other wire value).
    Other,
}

impl DispersionMode {
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.trim() {
            "n" | "normal" => Self::Normal,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Normal => "n",
            Self::Other => "o",
        }
    }

    #[must_use]
    pub fn whisker_factor(self) -> f64 {
        match self {
            Self::Normal => NORMAL_WHISKER_FACTOR,
            Self::Other => OTHER_WHISKER_FACTOR,
        }
    }
}

impl From<String> for DispersionMode {
    fn from(value: String) -> Self {
        Self::from_wire(&value)
    }
}

impl From<DispersionMode> for String {
    fn from(mode: DispersionMode) -> Self {
        mode.as_wire().to_owned()
    }
}

/// Variable layout pushed by the host on `update_params`.
///
/// Field aliases accept the short names used on the dashboard wire. Single
/// strings are accepted wherever a list is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableLayout {
    #[serde(alias = "nv")]
    pub variable_count: usize,
    #[serde(alias = "cat", default, deserialize_with = "one_or_many")]
    pub category_labels: Vec<String>,
    #[serde(alias = "coll", default, deserialize_with = "one_or_many")]
    pub line_colors: Vec<String>,
    #[serde(alias = "colb", default, deserialize_with = "one_or_many")]
    pub fill_colors: Vec<String>,
}

impl VariableLayout {
    /// Layout with `V1..Vn` labels and default colors.
    #[must_use]
    pub fn with_count(variable_count: usize) -> Self {
        Self {
            variable_count,
            category_labels: default_labels(variable_count),
            line_colors: Vec::new(),
            fill_colors: Vec::new(),
        }
    }
}

/// Shared box-plot parameters, owned by one widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotParams {
    pub variable_count: usize,
    pub category_labels: Vec<String>,
    pub line_colors: Vec<Color>,
    pub fill_colors: Vec<Color>,
    pub dispersion_mode: DispersionMode,
    pub whisker_factor: f64,
    pub visible_range: (f64, f64),
}

impl BoxPlotParams {
    pub fn with_count(variable_count: usize) -> WidgetResult<Self> {
        let mut params = Self {
            variable_count: 0,
            category_labels: Vec::new(),
            line_colors: Vec::new(),
            fill_colors: Vec::new(),
            dispersion_mode: DispersionMode::Normal,
            whisker_factor: NORMAL_WHISKER_FACTOR,
            visible_range: (0.0, 1.0),
        };
        params.apply_layout(&VariableLayout::with_count(variable_count))?;
        Ok(params)
    }

    /// Replaces the variable layout; dispersion and range are kept.
    ///
    /// Labels and colors are normalized to `variable_count` entries: missing
    /// labels become `V{i}`, missing or unparseable colors fall back to the
    /// defaults.
    pub fn apply_layout(&mut self, layout: &VariableLayout) -> WidgetResult<()> {
        if layout.variable_count == 0 {
            return Err(WidgetError::InvalidData(
                "variable count must be >= 1".to_owned(),
            ));
        }

        let count = layout.variable_count;
        let mut labels = layout.category_labels.clone();
        labels.truncate(count);
        labels.extend((labels.len()..count).map(|index| format!("V{}", index + 1)));

        self.variable_count = count;
        self.category_labels = labels;
        self.line_colors = resolve_colors(&layout.line_colors, count, DEFAULT_LINE_COLOR);
        self.fill_colors = resolve_colors(&layout.fill_colors, count, DEFAULT_FILL_COLOR);
        Ok(())
    }

    pub fn set_dispersion_mode(&mut self, mode: DispersionMode) {
        self.dispersion_mode = mode;
        self.whisker_factor = mode.whisker_factor();
    }

    #[must_use]
    pub fn line_color(&self, index: usize) -> Color {
        self.line_colors
            .get(index)
            .copied()
            .unwrap_or(DEFAULT_LINE_COLOR)
    }

    #[must_use]
    pub fn fill_color(&self, index: usize) -> Color {
        self.fill_colors
            .get(index)
            .copied()
            .unwrap_or(DEFAULT_FILL_COLOR)
    }
}

fn default_labels(count: usize) -> Vec<String> {
    (1..=count).map(|index| format!("V{index}")).collect()
}

fn resolve_colors(raw: &[String], count: usize, fallback: Color) -> Vec<Color> {
    (0..count)
        .map(|index| match raw.get(index) {
            None => fallback,
            Some(css) => Color::from_css(css).unwrap_or_else(|err| {
                warn!(index, color = %css, error = %err, "falling back to default color");
                fallback
            }),
        })
        .collect()
}
