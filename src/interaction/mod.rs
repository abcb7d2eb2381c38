use serde::{Deserialize, Serialize};

/// Draggable edge of a box entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// First quartile edge; moves `q1` only.
    Q1Edge,
    /// Median edge; translates the whole box keeping its interquartile range.
    MedianEdge,
    /// Third quartile edge; moves `q3` only.
    Q3Edge,
}

/// Box-plot drag gesture state.
///
/// The target is captured on pointer-down and never outlives a rebuild of
/// the box collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        entity_index: usize,
        edge: EdgeKind,
    },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn target(self) -> Option<(usize, EdgeKind)> {
        match self {
            Self::Idle => None,
            Self::Dragging { entity_index, edge } => Some((entity_index, edge)),
        }
    }
}

/// Press/release mode of the painting widgets (histogram, scatter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Painting,
}

/// Thin horizontal guide drawn at the pointer's height, in plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideLine {
    pub visible: bool,
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
}

/// Outline circle following the pointer, in plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverCircle {
    pub visible: bool,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// Pointer state shared by the painting widgets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    guide: GuideLine,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_painting(self) -> bool {
        self.mode == InteractionMode::Painting
    }

    #[must_use]
    pub fn guide(self) -> GuideLine {
        self.guide
    }

    pub fn on_press(&mut self) {
        self.mode = InteractionMode::Painting;
    }

    pub fn on_release(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    pub fn on_pointer_move(&mut self, x_start: f64, x_end: f64, y: f64) {
        self.guide = GuideLine {
            visible: true,
            x_start,
            x_end,
            y,
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.mode = InteractionMode::Idle;
        self.guide.visible = false;
    }
}
