use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{BandSlots, ValueScale};
use crate::error::{WidgetError, WidgetResult};
use crate::interaction::EdgeKind;

use super::entity::BoxEntity;
use super::params::BoxPlotParams;

/// Per-variable quartiles in index order, as returned to the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuartileColumns {
    pub q1: Vec<f64>,
    pub q2: Vec<f64>,
    pub q3: Vec<f64>,
}

/// Ordered box entities; entity `i` always belongs to category `i`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxCollection {
    entities: Vec<BoxEntity>,
    slots: Option<BandSlots>,
}

impl BoxCollection {
    /// Removes every entity.
    pub fn destroy_all(&mut self) {
        self.entities.clear();
        self.slots = None;
    }

    /// Destroys all entities and creates one per variable at its slot.
    pub fn rebuild(
        &mut self,
        params: &BoxPlotParams,
        plot_width: f64,
        body_ratio: f64,
    ) -> WidgetResult<()> {
        let slots = BandSlots::new(params.variable_count, plot_width, body_ratio)?;
        self.destroy_all();
        self.entities = (0..params.variable_count)
            .map(|index| {
                BoxEntity::create(
                    index,
                    slots.center(index),
                    slots.body_width(),
                    params.line_color(index),
                    params.fill_color(index),
                )
            })
            .collect();
        self.slots = Some(slots);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BoxEntity> {
        self.entities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoxEntity> {
        self.entities.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut BoxEntity> {
        self.entities.iter_mut()
    }

    #[must_use]
    pub fn slots(&self) -> Option<BandSlots> {
        self.slots
    }

    #[must_use]
    pub fn centers(&self) -> Vec<f64> {
        self.entities.iter().map(BoxEntity::center_x).collect()
    }

    /// Redraws one entity; `Ok(false)` when the ordering guard rejected it.
    pub fn redraw(
        &mut self,
        index: usize,
        q1: f64,
        q3: f64,
        whisker_factor: f64,
        scale: &ValueScale,
    ) -> WidgetResult<bool> {
        let count = self.entities.len();
        let entity = self
            .entities
            .get_mut(index)
            .ok_or(WidgetError::UnknownEntity { index, count })?;
        Ok(entity.redraw(q1, q3, whisker_factor, scale))
    }

    /// Redraws every entity at its own stored quartiles.
    pub fn redraw_all_in_place(&mut self, whisker_factor: f64, scale: &ValueScale) {
        for entity in &mut self.entities {
            let (q1, q3) = (entity.q1(), entity.q3());
            entity.redraw(q1, q3, whisker_factor, scale);
        }
    }

    /// Union of all whisker extents, `None` when the collection is empty.
    #[must_use]
    pub fn whisker_extent(&self) -> Option<(f64, f64)> {
        let low = self
            .entities
            .iter()
            .map(|entity| OrderedFloat(entity.whisker_min()))
            .min()?;
        let high = self
            .entities
            .iter()
            .map(|entity| OrderedFloat(entity.whisker_max()))
            .max()?;
        Some((low.into_inner(), high.into_inner()))
    }

    #[must_use]
    pub fn quartile_columns(&self) -> QuartileColumns {
        let mut columns = QuartileColumns::default();
        for entity in &self.entities {
            columns.q1.push(entity.q1());
            columns.q2.push(entity.q2());
            columns.q3.push(entity.q3());
        }
        columns
    }

    /// First entity with an edge under the pointer.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64, tolerance_px: f64) -> Option<(usize, EdgeKind)> {
        self.entities.iter().find_map(|entity| {
            entity
                .edge_at(x, y, tolerance_px)
                .map(|edge| (entity.index(), edge))
        })
    }
}
