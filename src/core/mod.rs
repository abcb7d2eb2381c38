pub mod band;
pub mod scale;
pub mod ticks;
pub mod types;

pub use band::BandSlots;
pub use scale::{ScaleOrientation, ValueScale};
pub use ticks::{format_tick, nice_ticks, tick_step};
pub use types::{PlotArea, Viewport};
