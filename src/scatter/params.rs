use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// Spray settings pushed wholesale on `update_params`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterParams {
    #[serde(alias = "ng", default = "default_group_count")]
    pub group_count: usize,
    /// Label stamped on every point sprayed from now on.
    #[serde(alias = "g", default = "default_group")]
    pub group: String,
    #[serde(alias = "c", default = "default_color")]
    pub color: String,
    /// Spray radius as a fraction of half the plot width.
    #[serde(alias = "s", default = "default_spray_size")]
    pub spray_size: f64,
    #[serde(alias = "xm", default = "default_axis_max")]
    pub x_max: f64,
    #[serde(alias = "ym", default = "default_axis_max")]
    pub y_max: f64,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            group_count: default_group_count(),
            group: default_group(),
            color: default_color(),
            spray_size: default_spray_size(),
            x_max: default_axis_max(),
            y_max: default_axis_max(),
        }
    }
}

impl ScatterParams {
    pub fn validate(self) -> WidgetResult<Self> {
        if !self.spray_size.is_finite() || self.spray_size < 0.0 {
            return Err(WidgetError::InvalidData(
                "spray size must be finite and >= 0".to_owned(),
            ));
        }
        for axis_max in [self.x_max, self.y_max] {
            if !axis_max.is_finite() || axis_max <= 0.0 {
                return Err(WidgetError::InvalidRange {
                    min: 0.0,
                    max: axis_max,
                });
            }
        }
        Ok(self)
    }
}

fn default_group_count() -> usize {
    3
}

fn default_group() -> String {
    "G1".to_owned()
}

fn default_color() -> String {
    "#000".to_owned()
}

fn default_spray_size() -> f64 {
    0.1
}

fn default_axis_max() -> f64 {
    1.0
}
