//! Robust penalties.
#![allow(non_snake_case)]

use num_traits::Float;

/// Huber loss: `0.5 e²` for `|e| ≤ δ`, `δ (|e| - 0.5 δ)` beyond.
/// Continuous with a continuous first derivative at `|e| = δ`.
#[inline]
pub fn huber<P: Float>(e: P, δ: P) -> P {
  let half = P::from(0.5).unwrap();
  let a = e.abs();
  if a <= δ {
    half * e * e
  } else {
    δ * (a - half * δ)
  }
}

/// Derivative of [`huber`] with respect to `e`: the residual, clamped to `[-δ, δ]`.
#[inline]
pub fn huber_derivative<P: Float>(e: P, δ: P) -> P {
  e.max(-δ).min(δ)
}
