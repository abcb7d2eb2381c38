//! distsketch: interactive distribution sketching widgets.
//!
//! Users draw statistical summaries by hand (box plots, histograms and
//! scatter clouds) and hand the resulting numbers back to a host
//! application over a small named-message protocol. Widgets are headless
//! state machines; drawing goes through the [`render::Renderer`] seam.

pub mod boxplot;
pub mod bridge;
pub mod core;
pub mod error;
pub mod histogram;
pub mod interaction;
pub mod render;
pub mod scatter;
pub mod telemetry;

pub use boxplot::{BoxPlotConfig, BoxPlotWidget};
pub use bridge::{HostEnvelope, WidgetHost};
pub use error::{WidgetError, WidgetResult};
pub use histogram::{HistogramConfig, HistogramWidget};
pub use scatter::{ScatterConfig, ScatterWidget};
