use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{WidgetError, WidgetResult};
use crate::render::Renderer;
use crate::scatter::{ScatterParams, ScatterWidget};

use super::{HostEnvelope, HostMessage, WidgetHost, decode_payload};

/// Scatter inbound protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum ScatterMessage {
    UpdateParams(ScatterParams),
    ResetClick,
    UndoClick,
    RedoClick,
    DataClick,
}

impl HostMessage for ScatterMessage {
    fn decode(envelope: HostEnvelope) -> WidgetResult<Self> {
        let HostEnvelope { name, payload } = envelope;
        match name.as_str() {
            "update_params" => decode_payload(&name, payload).map(Self::UpdateParams),
            "reset_click" => Ok(Self::ResetClick),
            "undo_click" => Ok(Self::UndoClick),
            "redo_click" => Ok(Self::RedoClick),
            "data_click" => Ok(Self::DataClick),
            _ => Err(WidgetError::UnknownMessage(name)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::UpdateParams(_) => "update_params",
            Self::ResetClick => "reset_click",
            Self::UndoClick => "undo_click",
            Self::RedoClick => "redo_click",
            Self::DataClick => "data_click",
        }
    }
}

/// Committed points as parallel columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointReturn {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub g: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "payload")]
pub enum ScatterReply {
    #[serde(rename = "data_return")]
    DataReturn(PointReturn),
}

impl<R: Renderer> WidgetHost for ScatterWidget<R> {
    type Inbound = ScatterMessage;
    type Outbound = ScatterReply;

    fn handle_message(&mut self, message: ScatterMessage) -> WidgetResult<Option<ScatterReply>> {
        match message {
            ScatterMessage::UpdateParams(params) => self.set_params(params)?,
            ScatterMessage::ResetClick => {
                self.reset();
            }
            ScatterMessage::UndoClick => {
                self.undo();
            }
            ScatterMessage::RedoClick => {
                self.redo();
            }
            ScatterMessage::DataClick => {
                let Some((x, y, g)) = self.point_columns() else {
                    return Ok(None);
                };
                debug!(points = x.len(), "returning sprayed points to host");
                return Ok(Some(ScatterReply::DataReturn(PointReturn { x, y, g })));
            }
        }
        Ok(None)
    }
}
