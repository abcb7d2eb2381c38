use tracing::{debug, trace};

use crate::error::{WidgetError, WidgetResult};
use crate::interaction::{DragState, EdgeKind, GuideLine};
use crate::render::Renderer;

use super::{BoxPlotWidget, ReconcileMode};

impl<R: Renderer> BoxPlotWidget<R> {
    /// Starts dragging one edge of box `entity_index`.
    pub fn drag_start(&mut self, entity_index: usize, edge: EdgeKind) -> WidgetResult<()> {
        let count = self.store.len();
        if entity_index >= count {
            return Err(WidgetError::UnknownEntity {
                index: entity_index,
                count,
            });
        }
        self.drag = DragState::Dragging { entity_index, edge };
        debug!(entity_index, ?edge, "drag started");
        Ok(())
    }

    /// Starts a drag on whatever edge lies under the plot-local pointer.
    ///
    /// Returns the grabbed target, or `None` when the pointer missed every edge.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> WidgetResult<Option<(usize, EdgeKind)>> {
        let Some((entity_index, edge)) = self.hit_test(x, y) else {
            return Ok(None);
        };
        self.drag_start(entity_index, edge)?;
        Ok(Some((entity_index, edge)))
    }

    /// Applies one pointer move at plot-local `pointer_y` to the dragged box.
    ///
    /// Returns whether the box accepted the new quartiles. Moves while idle,
    /// and moves that would put `q1` above `q3`, change nothing.
    pub fn drag_move(&mut self, pointer_y: f64) -> WidgetResult<bool> {
        let DragState::Dragging { entity_index, edge } = self.drag else {
            return Ok(false);
        };
        if !pointer_y.is_finite() {
            return Err(WidgetError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        let Some(entity) = self.store.get(entity_index) else {
            self.drag = DragState::Idle;
            return Ok(false);
        };

        let (range_min, range_max) = self.scale.domain();
        let pointer_value = self.scale.clamp_value(self.scale.to_value(pointer_y));
        let (q1, q3) = (entity.q1(), entity.q3());
        let (new_q1, new_q3) = match edge {
            EdgeKind::Q1Edge => (pointer_value, q3),
            EdgeKind::Q3Edge => (q1, pointer_value),
            EdgeKind::MedianEdge => {
                let half = entity.half_range();
                let center = clamp_center(pointer_value, half, range_min, range_max);
                (center - half, center + half)
            }
        };

        self.guide = GuideLine {
            visible: true,
            x_start: 0.0,
            x_end: entity.left_x(),
            y: pointer_y,
        };

        let applied = self.redraw(entity_index, new_q1, new_q3)?;
        trace!(entity_index, ?edge, new_q1, new_q3, applied, "drag move");
        Ok(applied)
    }

    /// Ends the current drag and refits the value axis.
    ///
    /// Returns `false` when no drag was active.
    pub fn drag_end(&mut self) -> WidgetResult<bool> {
        if !self.drag.is_dragging() {
            return Ok(false);
        }
        self.drag = DragState::Idle;
        self.guide.visible = false;
        debug!("drag ended");
        self.reconcile(ReconcileMode::Default)?;
        Ok(true)
    }

    /// Pointer left the plot surface; behaves like a release.
    pub fn pointer_leave(&mut self) -> WidgetResult<bool> {
        self.drag_end()
    }
}

/// Clamps a box center so the whole box of half-height `half` stays in range.
fn clamp_center(value: f64, half: f64, range_min: f64, range_max: f64) -> f64 {
    let low = range_min + half;
    let high = range_max - half;
    if low > high {
        return (range_min + range_max) / 2.0;
    }
    value.clamp(low, high)
}

#[cfg(test)]
mod tests {
    use super::clamp_center;

    #[test]
    fn center_is_pulled_inside_by_half_range() {
        assert!((clamp_center(0.9, 0.1, 0.0, 1.0) - 0.9).abs() <= 1e-12);
        assert!((clamp_center(0.95, 0.1, 0.0, 1.0) - 0.9).abs() <= 1e-12);
        assert!((clamp_center(0.02, 0.1, 0.0, 1.0) - 0.1).abs() <= 1e-12);
    }

    #[test]
    fn oversized_box_is_centered_on_range() {
        assert!((clamp_center(0.9, 0.8, 0.0, 1.0) - 0.5).abs() <= 1e-12);
    }
}
