//! Host message bridge.
//!
//! The host talks to every widget through named messages carrying a JSON
//! payload. Inbound envelopes are decoded into one typed enum per widget and
//! handled synchronously, in arrival order. Replies go back in the same
//! envelope shape.

mod boxplot;
mod histogram;
mod scatter;

pub use boxplot::{BoxPlotMessage, BoxPlotReply, DispersionChange, QuartileReturn, ValueRange};
pub use histogram::{BinCounts, HistogramMessage, HistogramReply};
pub use scatter::{PointReturn, ScatterMessage, ScatterReply};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{WidgetError, WidgetResult};

/// Wire envelope: `{"name": "...", "payload": {...}}`.
///
/// `payload` may be omitted for argument-less messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEnvelope {
    pub name: String,
    #[serde(default)]
    pub payload: Value,
}

impl HostEnvelope {
    #[must_use]
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        serde_json::from_str(input).map_err(|e| WidgetError::MalformedMessage {
            name: "<envelope>".to_owned(),
            reason: e.to_string(),
        })
    }
}

/// Inbound message set of one widget kind.
pub trait HostMessage: Sized {
    fn decode(envelope: HostEnvelope) -> WidgetResult<Self>;

    fn name(&self) -> &'static str;
}

/// A widget that can be driven by host messages.
pub trait WidgetHost {
    type Inbound: HostMessage;
    type Outbound: Serialize;

    /// Handles one message to completion; `Some` carries the reply to send back.
    fn handle_message(&mut self, message: Self::Inbound) -> WidgetResult<Option<Self::Outbound>>;

    fn handle_envelope(&mut self, envelope: HostEnvelope) -> WidgetResult<Option<Self::Outbound>> {
        let message = Self::Inbound::decode(envelope)?;
        debug!(message = message.name(), "handling host message");
        self.handle_message(message)
    }

    /// Decodes a JSON envelope, handles it and encodes the reply, if any.
    fn handle_json(&mut self, input: &str) -> WidgetResult<Option<String>> {
        let envelope = HostEnvelope::from_json_str(input)?;
        self.handle_envelope(envelope)?
            .map(|reply| encode_json(&reply))
            .transpose()
    }
}

pub fn encode_json<T: Serialize>(reply: &T) -> WidgetResult<String> {
    serde_json::to_string(reply)
        .map_err(|e| WidgetError::InvalidData(format!("failed to serialize host reply: {e}")))
}

pub(crate) fn decode_payload<T: DeserializeOwned>(name: &str, payload: Value) -> WidgetResult<T> {
    serde_json::from_value(payload).map_err(|e| WidgetError::MalformedMessage {
        name: name.to_owned(),
        reason: e.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
    Nothing(()),
}

/// Accepts a scalar, a list, or `null` where a list is expected.
///
/// Dashboard hosts serialize length-one vectors as bare scalars.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
        OneOrMany::Nothing(()) => Vec::new(),
    })
}
