use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// Evenly spaced horizontal category slots across a plot width.
///
/// Slot `i` is centered at `step / 2 + i * step` with `step = width / count`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandSlots {
    count: usize,
    width_px: f64,
    body_ratio: f64,
}

impl BandSlots {
    pub fn new(count: usize, width_px: f64, body_ratio: f64) -> WidgetResult<Self> {
        if count == 0 {
            return Err(WidgetError::InvalidData(
                "band slot count must be >= 1".to_owned(),
            ));
        }
        if !width_px.is_finite() || width_px <= 0.0 {
            return Err(WidgetError::InvalidData(
                "band width must be finite and > 0".to_owned(),
            ));
        }
        if !body_ratio.is_finite() || body_ratio <= 0.0 || body_ratio > 1.0 {
            return Err(WidgetError::InvalidData(
                "band body ratio must be finite and in (0, 1]".to_owned(),
            ));
        }

        Ok(Self {
            count,
            width_px,
            body_ratio,
        })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.width_px / self.count as f64
    }

    #[must_use]
    pub fn center(self, index: usize) -> f64 {
        let step = self.step();
        step / 2.0 + index as f64 * step
    }

    /// Width of the drawn body inside one slot.
    #[must_use]
    pub fn body_width(self) -> f64 {
        self.step() * self.body_ratio
    }

    #[must_use]
    pub fn centers(self) -> Vec<f64> {
        (0..self.count).map(|index| self.center(index)).collect()
    }

    /// Slot whose center is nearest to `x`; ties resolve to the lower index.
    #[must_use]
    pub fn nearest(self, x: f64) -> Option<usize> {
        if !x.is_finite() {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for index in 0..self.count {
            let distance = (self.center(index) - x).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index)
    }
}
