use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("tick generation collapsed to {count} ticks for mantissa diff {diff}")]
    InvalidTickCount { diff: u64, count: usize },
}
