//! Rejected calls.
//!
//! Only precondition violations are errors. Degenerate fits (zero radius spawns,
//! coincident points) and empty inputs produce ordinary results.

use crate::quantizer::MAX_CIRCLES;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
  #[error("{count} circles exceed the membership key capacity of {max}")]
  TooManyCircles { count: usize, max: usize },

  #[error("output scale must be finite and positive, got {0}")]
  InvalidScale(f64),

  #[error("row stride {stride} is shorter than a packed row of {min} bytes")]
  InvalidStride { stride: usize, min: usize },

  #[error("pixel data too short: expected at least {expected} bytes, got {actual}")]
  SizeMismatch { expected: usize, actual: usize },

  #[error("raster dimensions must be non-zero")]
  InvalidDimensions,
}

impl Error {
  pub(crate) fn too_many_circles(count: usize) -> Self {
    Error::TooManyCircles { count, max: MAX_CIRCLES }
  }
}

pub type Result<T> = std::result::Result<T, Error>;
