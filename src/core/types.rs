use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// Full drawing surface size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Inner plotting rectangle, offset from the viewport's top-left corner.
///
/// Pointer coordinates handed to widgets are local to this rectangle
/// (`0..width`, `0..height`); the offset is applied only when building
/// render frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn validate(self, viewport: Viewport) -> WidgetResult<Self> {
        if !viewport.is_valid() {
            return Err(WidgetError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        for (field, value) in [
            ("left", self.left),
            ("top", self.top),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(WidgetError::InvalidData(format!(
                    "plot area `{field}` must be finite"
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(WidgetError::InvalidData(
                "plot area width and height must be > 0".to_owned(),
            ));
        }
        if self.left < 0.0
            || self.top < 0.0
            || self.left + self.width > f64::from(viewport.width)
            || self.top + self.height > f64::from(viewport.height)
        {
            return Err(WidgetError::InvalidData(
                "plot area must fit inside the viewport".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Whether a plot-local point lies inside the plotting rectangle.
    #[must_use]
    pub fn contains_local(self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}
