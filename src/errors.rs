use thiserror::Error;

use crate::graphs::edge::MAX_LENGTH;

/// Error returned when an [`Edge`](crate::graphs::edge::Edge) cannot be constructed.
#[derive(Debug, Clone, Copy, Error, Eq, PartialEq)]
pub enum EdgeError {
    /// Both endpoints are the same vertex.
    #[error("the same vertex cannot be at both ends of an edge")]
    SelfLoop,

    /// The requested length is below zero.
    #[error("edge length cannot be negative, got {0}")]
    NegativeLength(i64),

    /// The requested length is above [`MAX_LENGTH`].
    #[error("edge length cannot exceed {max}, got {0}", max = MAX_LENGTH)]
    LengthTooLarge(i64),
}
