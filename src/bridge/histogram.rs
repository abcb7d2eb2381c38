use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};
use crate::histogram::{AxisLimits, HistogramLayout, HistogramWidget, VariableSelection};
use crate::render::Renderer;

pub use crate::histogram::BinCounts;

use super::{HostEnvelope, HostMessage, WidgetHost, decode_payload};

/// Histogram inbound protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum HistogramMessage {
    UpdateParams(HistogramLayout),
    UpdateAxis(AxisLimits),
    SelectVar(VariableSelection),
    ResetClick,
    AlignUpClick,
    AlignDownClick,
    DataClick,
}

impl HostMessage for HistogramMessage {
    fn decode(envelope: HostEnvelope) -> WidgetResult<Self> {
        let HostEnvelope { name, payload } = envelope;
        match name.as_str() {
            "update_params" => decode_payload(&name, payload).map(Self::UpdateParams),
            "update_axis" => decode_payload(&name, payload).map(Self::UpdateAxis),
            "select_var" => decode_payload(&name, payload).map(Self::SelectVar),
            "reset_click" => Ok(Self::ResetClick),
            "alg_up_click" => Ok(Self::AlignUpClick),
            "alg_dw_click" => Ok(Self::AlignDownClick),
            "data_click" => Ok(Self::DataClick),
            _ => Err(WidgetError::UnknownMessage(name)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::UpdateParams(_) => "update_params",
            Self::UpdateAxis(_) => "update_axis",
            Self::SelectVar(_) => "select_var",
            Self::ResetClick => "reset_click",
            Self::AlignUpClick => "alg_up_click",
            Self::AlignDownClick => "alg_dw_click",
            Self::DataClick => "data_click",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "payload")]
pub enum HistogramReply {
    #[serde(rename = "data_js")]
    DataJs(BinCounts),
}

impl<R: Renderer> WidgetHost for HistogramWidget<R> {
    type Inbound = HistogramMessage;
    type Outbound = HistogramReply;

    fn handle_message(
        &mut self,
        message: HistogramMessage,
    ) -> WidgetResult<Option<HistogramReply>> {
        match message {
            HistogramMessage::UpdateParams(layout) => self.set_layout(&layout)?,
            HistogramMessage::UpdateAxis(limits) => self.set_axis_limits(limits)?,
            HistogramMessage::SelectVar(selection) => self.select_variable(selection.variable),
            HistogramMessage::ResetClick => self.reset()?,
            HistogramMessage::AlignUpClick => {
                self.align_up();
            }
            HistogramMessage::AlignDownClick => {
                self.align_down();
            }
            HistogramMessage::DataClick => {
                return Ok(Some(HistogramReply::DataJs(self.bin_counts())));
            }
        }
        Ok(None)
    }
}
