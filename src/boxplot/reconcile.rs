use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::WidgetResult;
use crate::render::Renderer;

use super::BoxPlotWidget;

/// How a reconcile pass derives the new visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReconcileMode {
    /// Take the range from the parameters; boxes keep their pixel extents.
    Init,
    /// Recompute whiskers for a new factor, then refit.
    Dist,
    /// Refit, then recenter every box on the middle of the new range.
    Align,
    /// Refit to the padded union of whisker extents.
    #[default]
    Default,
}

impl<R: Renderer> BoxPlotWidget<R> {
    /// Recomputes the visible range and redraws every box at the new scale.
    pub fn reconcile(&mut self, mode: ReconcileMode) -> WidgetResult<()> {
        let factor = self.params.whisker_factor;

        if mode == ReconcileMode::Init {
            let (range_min, range_max) = self.params.visible_range;
            self.scale.rescale(range_min, range_max)?;
            // Geometry still holds the pixels computed under the previous domain.
            for entity in self.store.iter_mut() {
                let geometry = entity.geometry();
                let q3 = self.scale.to_value(geometry.box_top);
                let q1 = self.scale.to_value(geometry.box_bottom());
                entity.redraw(q1, q3, factor, &self.scale);
            }
        } else {
            if mode == ReconcileMode::Dist {
                self.store.redraw_all_in_place(factor, &self.scale);
            }

            let mut target = self.params.visible_range;
            if let Some((low, high)) = self.store.whisker_extent() {
                let padding = self.scale.pixels_to_span(self.config.axis_padding_px);
                let (range_min, range_max) = (low - padding, high + padding);
                if range_min < range_max {
                    target = (range_min, range_max);
                } else {
                    warn!(
                        range_min,
                        range_max, "collapsed whisker extent; keeping previous range"
                    );
                }
            }

            self.scale.rescale(target.0, target.1)?;
            self.params.visible_range = target;

            if mode == ReconcileMode::Align {
                let center = (target.0 + target.1) / 2.0;
                for entity in self.store.iter_mut() {
                    let half = entity.half_range();
                    entity.redraw(center - half, center + half, factor, &self.scale);
                }
            }
        }

        self.store.redraw_all_in_place(factor, &self.scale);
        debug!(
            ?mode,
            range_min = self.params.visible_range.0,
            range_max = self.params.visible_range.1,
            "reconciled value axis"
        );
        Ok(())
    }
}
