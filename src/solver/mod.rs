//! Generic gradient-based minimization.
//!
//! A [`Minimizer`] takes an [`Objective`] and a starting vector, and returns its best effort at a
//! minimum, together with the iteration count and whether its own convergence test passed.
//! Callers are expected to use the result either way.
#![allow(non_snake_case)]

use num_traits::Float;

pub mod line_search;
pub use line_search::LineSearch;

pub mod gradient_descent;
pub use gradient_descent::GradientDescent;

pub mod loss;
pub use loss::{huber, huber_derivative};

#[cfg(test)] mod tests;

/// Scalar function of `N` parameters.
pub trait Objective<P: Float, const N: usize> {
  fn value(&self, x: &[P; N]) -> P;

  /// Forward difference, unless the objective knows better.
  fn gradient(&self, x: &[P; N]) -> [P; N] {
    let Δ = P::from(1e-7).unwrap();
    let fx = self.value(x);
    let mut grad = [P::zero(); N];
    for (i, g) in grad.iter_mut().enumerate() {
      let mut xi = *x;
      xi[i] = xi[i] + Δ;
      *g = (self.value(&xi) - fx) / Δ;
    }
    grad
  }

  fn value_and_gradient(&self, x: &[P; N]) -> (P, [P; N]) {
    (self.value(x), self.gradient(x))
  }
}

impl<P: Float, const N: usize, F> Objective<P, N> for F
  where F: Fn(&[P; N]) -> P {
  fn value(&self, x: &[P; N]) -> P {
    self(x)
  }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Minimum<P, const N: usize> {
  pub x: [P; N],
  pub value: P,
  pub iterations: u64,
  pub converged: bool,
}

pub trait Minimizer<P: Float, const N: usize> {
  fn minimize(&self, objective: &impl Objective<P, N>, x0: [P; N]) -> Minimum<P, N>;
}

fn dot<P: Float, const N: usize>(a: &[P; N], b: &[P; N]) -> P {
  a.iter().zip(b).fold(P::zero(), |acc, (&a, &b)| acc + a * b)
}

fn norm<P: Float, const N: usize>(a: &[P; N]) -> P {
  dot(a, a).sqrt()
}

/// `x - step * direction`
fn step_along<P: Float, const N: usize>(x: &[P; N], direction: &[P; N], step: P) -> [P; N] {
  let mut out = *x;
  out.iter_mut().zip(direction).for_each(|(o, &d)| *o = *o - step * d);
  out
}
