use serde::{Deserialize, Serialize};

use crate::core::ValueScale;
use crate::interaction::EdgeKind;
use crate::render::Color;

/// Quartiles every freshly created entity carries until its first redraw.
pub const PLACEHOLDER_QUARTILES: (f64, f64) = (0.3, 0.6);

/// Plot-local pixel geometry produced by the last accepted redraw.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub box_top: f64,
    pub box_height: f64,
    pub q1_y: f64,
    pub median_y: f64,
    pub q3_y: f64,
    pub whisker_low_y: f64,
    pub whisker_high_y: f64,
}

impl BoxGeometry {
    #[must_use]
    pub fn box_bottom(self) -> f64 {
        self.box_top + self.box_height
    }

    #[must_use]
    pub fn edge_y(self, edge: EdgeKind) -> f64 {
        match edge {
            EdgeKind::Q1Edge => self.q1_y,
            EdgeKind::MedianEdge => self.median_y,
            EdgeKind::Q3Edge => self.q3_y,
        }
    }
}

/// One draggable box for one variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxEntity {
    index: usize,
    center_x: f64,
    width: f64,
    line_color: Color,
    fill_color: Color,
    q1: f64,
    q2: f64,
    q3: f64,
    whisker_min: f64,
    whisker_max: f64,
    geometry: BoxGeometry,
}

impl BoxEntity {
    /// Allocates an entity at its horizontal slot with placeholder quartiles.
    #[must_use]
    pub fn create(
        index: usize,
        center_x: f64,
        width: f64,
        line_color: Color,
        fill_color: Color,
    ) -> Self {
        let (q1, q3) = PLACEHOLDER_QUARTILES;
        Self {
            index,
            center_x,
            width,
            line_color,
            fill_color,
            q1,
            q2: (q1 + q3) / 2.0,
            q3,
            whisker_min: q1,
            whisker_max: q3,
            geometry: BoxGeometry::default(),
        }
    }

    /// Applies new outer quartiles and recomputes median, whiskers and geometry.
    ///
    /// Returns `false` and keeps every stored value when `q1 > q3`, when an
    /// input is not finite, or when the derived median or whiskers overflow.
    pub fn redraw(&mut self, q1: f64, q3: f64, whisker_factor: f64, scale: &ValueScale) -> bool {
        if !q1.is_finite() || !q3.is_finite() || q1 > q3 {
            return false;
        }

        let q2 = (q1 + q3) / 2.0;
        let spread = whisker_factor * (q3 - q1);
        if !q2.is_finite() || !(q1 - spread).is_finite() || !(q3 + spread).is_finite() {
            return false;
        }
        self.q1 = q1;
        self.q2 = q2;
        self.q3 = q3;
        self.whisker_min = q1 - spread;
        self.whisker_max = q3 + spread;

        let q1_y = scale.to_pixel(q1);
        let q3_y = scale.to_pixel(q3);
        self.geometry = BoxGeometry {
            box_top: q3_y,
            box_height: q1_y - q3_y,
            q1_y,
            median_y: scale.to_pixel(q2),
            q3_y,
            whisker_low_y: scale.to_pixel(self.whisker_min),
            whisker_high_y: scale.to_pixel(self.whisker_max),
        };
        true
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn left_x(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    #[must_use]
    pub fn line_color(&self) -> Color {
        self.line_color
    }

    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    #[must_use]
    pub fn q1(&self) -> f64 {
        self.q1
    }

    #[must_use]
    pub fn q2(&self) -> f64 {
        self.q2
    }

    #[must_use]
    pub fn q3(&self) -> f64 {
        self.q3
    }

    #[must_use]
    pub fn quartiles(&self) -> (f64, f64, f64) {
        (self.q1, self.q2, self.q3)
    }

    #[must_use]
    pub fn whisker_min(&self) -> f64 {
        self.whisker_min
    }

    #[must_use]
    pub fn whisker_max(&self) -> f64 {
        self.whisker_max
    }

    #[must_use]
    pub fn half_range(&self) -> f64 {
        (self.q3 - self.q1) / 2.0
    }

    #[must_use]
    pub fn geometry(&self) -> BoxGeometry {
        self.geometry
    }

    /// Edge under a plot-local pointer position, within `tolerance_px`.
    ///
    /// The median wins when several edges are equally close.
    #[must_use]
    pub fn edge_at(&self, x: f64, y: f64, tolerance_px: f64) -> Option<EdgeKind> {
        if x < self.left_x() || x > self.left_x() + self.width {
            return None;
        }

        let mut best: Option<(EdgeKind, f64)> = None;
        for edge in [EdgeKind::MedianEdge, EdgeKind::Q1Edge, EdgeKind::Q3Edge] {
            let distance = (self.geometry.edge_y(edge) - y).abs();
            if distance > tolerance_px {
                continue;
            }
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((edge, distance)),
            }
        }
        best.map(|(edge, _)| edge)
    }
}
