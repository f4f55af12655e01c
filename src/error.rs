use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series {index} has {len} point(s); at least 2 are required for layout")]
    InsufficientPoints { index: usize, len: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
