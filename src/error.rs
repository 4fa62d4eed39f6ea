use thiserror::Error;

pub type LazyResult<T> = Result<T, LazyError>;

#[derive(Debug, Error)]
pub enum LazyError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
