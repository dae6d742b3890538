use thiserror::Error;

use crate::Strategy;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RmqError {
    #[error("cannot build a range minimum structure over an empty array")]
    EmptyInput,
    #[error("invalid query range [{l}, {r}] for an array of length {len}")]
    InvalidRange { l: usize, r: usize, len: usize },
    #[error("position {pos} is out of bounds for an array of length {len}")]
    PositionOutOfBounds { pos: usize, len: usize },
    #[error("strategy `{strategy}` does not support point updates")]
    Unsupported { strategy: Strategy },
    #[error("unknown strategy `{0}`")]
    UnknownStrategy(String),
    #[error("block size must be positive")]
    InvalidBlockSize,
}
