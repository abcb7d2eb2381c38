use serde::{Deserialize, Serialize};

use crate::core::ticks::nice_ticks;
use crate::error::{WidgetError, WidgetResult};

/// Pixel axis direction a `ValueScale` maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleOrientation {
    /// Domain min sits at pixel `0` (left edge).
    Horizontal,
    /// Domain min sits at pixel `length_px` (bottom edge); the Y axis grows upwards.
    Vertical,
}

/// Linear value axis mapped to `[0, length_px]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_min: f64,
    domain_max: f64,
    length_px: f64,
    orientation: ScaleOrientation,
}

impl ValueScale {
    /// Creates an inverted (bottom-up) scale for a plot of `height_px`.
    pub fn vertical(domain_min: f64, domain_max: f64, height_px: f64) -> WidgetResult<Self> {
        Self::new(domain_min, domain_max, height_px, ScaleOrientation::Vertical)
    }

    /// Creates a left-to-right scale for a plot of `width_px`.
    pub fn horizontal(domain_min: f64, domain_max: f64, width_px: f64) -> WidgetResult<Self> {
        Self::new(domain_min, domain_max, width_px, ScaleOrientation::Horizontal)
    }

    pub fn new(
        domain_min: f64,
        domain_max: f64,
        length_px: f64,
        orientation: ScaleOrientation,
    ) -> WidgetResult<Self> {
        validate_domain(domain_min, domain_max)?;
        if !length_px.is_finite() || length_px <= 0.0 {
            return Err(WidgetError::InvalidData(
                "scale pixel length must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_min,
            domain_max,
            length_px,
            orientation,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn length_px(self) -> f64 {
        self.length_px
    }

    #[must_use]
    pub fn orientation(self) -> ScaleOrientation {
        self.orientation
    }

    /// Replaces the visible domain; every later mapping uses the new domain.
    ///
    /// On error the previous domain is kept.
    pub fn rescale(&mut self, domain_min: f64, domain_max: f64) -> WidgetResult<()> {
        validate_domain(domain_min, domain_max)?;
        self.domain_min = domain_min;
        self.domain_max = domain_max;
        Ok(())
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_min) / self.span();
        match self.orientation {
            ScaleOrientation::Horizontal => normalized * self.length_px,
            ScaleOrientation::Vertical => (1.0 - normalized) * self.length_px,
        }
    }

    #[must_use]
    pub fn to_value(self, pixel: f64) -> f64 {
        let normalized = match self.orientation {
            ScaleOrientation::Horizontal => pixel / self.length_px,
            ScaleOrientation::Vertical => 1.0 - pixel / self.length_px,
        };
        self.domain_min + normalized * self.span()
    }

    /// Value distance covered by `pixels` at the current domain.
    #[must_use]
    pub fn pixels_to_span(self, pixels: f64) -> f64 {
        self.span() * pixels / self.length_px
    }

    #[must_use]
    pub fn clamp_value(self, value: f64) -> f64 {
        value.clamp(self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.domain_min..=self.domain_max).contains(&value)
    }

    /// Round-number tick values inside the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_min, self.domain_max, count)
    }

    fn span(self) -> f64 {
        self.domain_max - self.domain_min
    }
}

pub(crate) fn validate_domain(domain_min: f64, domain_max: f64) -> WidgetResult<()> {
    if !domain_min.is_finite()
        || !domain_max.is_finite()
        || domain_min >= domain_max
        || !(domain_max - domain_min).is_finite()
    {
        return Err(WidgetError::InvalidRange {
            min: domain_min,
            max: domain_max,
        });
    }
    Ok(())
}
