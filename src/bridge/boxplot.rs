use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::boxplot::{BoxPlotWidget, DispersionMode, QuartileColumns, VariableLayout};
use crate::error::{WidgetError, WidgetResult};
use crate::render::Renderer;

use super::{HostEnvelope, HostMessage, WidgetHost, decode_payload};

/// Explicit value range pushed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    #[serde(alias = "iymn")]
    pub range_min: f64,
    #[serde(alias = "iymx")]
    pub range_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispersionChange {
    #[serde(alias = "dis")]
    pub dispersion_mode: DispersionMode,
}

/// Box-plot inbound protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxPlotMessage {
    UpdateParams(VariableLayout),
    UpdateYScale(ValueRange),
    DistClick(DispersionChange),
    RealignClick,
    RestClick,
    DataClick,
}

impl HostMessage for BoxPlotMessage {
    fn decode(envelope: HostEnvelope) -> WidgetResult<Self> {
        let HostEnvelope { name, payload } = envelope;
        match name.as_str() {
            "update_params" => decode_payload(&name, payload).map(Self::UpdateParams),
            "update_y_scale" => decode_payload(&name, payload).map(Self::UpdateYScale),
            "dist_click" => decode_payload(&name, payload).map(Self::DistClick),
            "realign_click" => Ok(Self::RealignClick),
            "rest_click" => Ok(Self::RestClick),
            "data_click" => Ok(Self::DataClick),
            _ => Err(WidgetError::UnknownMessage(name)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::UpdateParams(_) => "update_params",
            Self::UpdateYScale(_) => "update_y_scale",
            Self::DistClick(_) => "dist_click",
            Self::RealignClick => "realign_click",
            Self::RestClick => "rest_click",
            Self::DataClick => "data_click",
        }
    }
}

/// Edited quartiles plus a random tag so the host sees every pull as new input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuartileReturn {
    #[serde(rename = "rand_gen")]
    pub random_tag: f64,
    #[serde(flatten)]
    pub columns: QuartileColumns,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "payload")]
pub enum BoxPlotReply {
    #[serde(rename = "data_js")]
    DataJs(QuartileReturn),
}

impl<R: Renderer> WidgetHost for BoxPlotWidget<R> {
    type Inbound = BoxPlotMessage;
    type Outbound = BoxPlotReply;

    fn handle_message(&mut self, message: BoxPlotMessage) -> WidgetResult<Option<BoxPlotReply>> {
        match message {
            BoxPlotMessage::UpdateParams(layout) => self.set_layout(&layout)?,
            BoxPlotMessage::UpdateYScale(range) => {
                self.set_visible_range(range.range_min, range.range_max)?;
            }
            BoxPlotMessage::DistClick(change) => self.set_dispersion_mode(change.dispersion_mode)?,
            BoxPlotMessage::RealignClick => self.realign()?,
            BoxPlotMessage::RestClick => self.reset()?,
            BoxPlotMessage::DataClick => {
                let Some(columns) = self.quartile_columns() else {
                    return Ok(None);
                };
                debug!(boxes = columns.q1.len(), "returning quartiles to host");
                return Ok(Some(BoxPlotReply::DataJs(QuartileReturn {
                    random_tag: rand::random::<f64>(),
                    columns,
                })));
            }
        }
        Ok(None)
    }
}
