use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid value range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown entity index {index} (collection holds {count})")]
    UnknownEntity { index: usize, count: usize },

    #[error("unknown host message `{0}`")]
    UnknownMessage(String),

    #[error("malformed `{name}` message: {reason}")]
    MalformedMessage { name: String, reason: String },
}
