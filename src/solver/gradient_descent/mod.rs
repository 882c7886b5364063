#![allow(non_snake_case)]
use {
  super::{Minimizer, Minimum, Objective, norm, step_along},
  num_traits::Float,
};


/// Gradient descent on a geometrically decaying step schedule.
///
/// No line search: the step is `grad * step_size`, and `step_size` shrinks by `decay_factor`
/// each iteration, so the walk always settles. Returns the best point visited.
#[derive(Copy, Clone, Debug)]
pub struct GradientDescent<P> {
  pub Δ: P,
  pub initial_step_size: P,
  pub decay_factor: P,
  pub step_limit: Option<u64>,
  pub control_factor: P,
}

impl <P: Float> Default for GradientDescent<P> {
  fn default() -> Self {
    Self {
      Δ: P::from(1e-9).unwrap(),
      initial_step_size: P::one(),
      decay_factor: P::from(0.95).unwrap(),
      step_limit: Some(400),
      control_factor: P::one(),
    }}}

impl<P: Float, const N: usize> Minimizer<P, N> for GradientDescent<P> {
  fn minimize(&self, objective: &impl Objective<P, N>, mut x: [P; N]) -> Minimum<P, N> {
    let mut step_size = self.initial_step_size;
    let mut best = (x, P::infinity());
    // decay -> limit:
    // fast: 0.5 -> 20
    // slow: 0.85 -> 40
    // veryslow: 0.95 -> 128
    for iteration in 0..self.step_limit.unwrap_or(u64::MAX) {
      let (fx, grad) = objective.value_and_gradient(&x);
      if fx < best.1 { best = (x, fx); }

      let step = norm(&grad) * step_size * self.control_factor;
      if !step.is_finite() {
        return Minimum { x: best.0, value: best.1, iterations: iteration, converged: false };
      }
      if step < self.Δ {
        return Minimum { x: best.0, value: best.1, iterations: iteration, converged: true };
      }
      x = step_along(&x, &grad, step_size * self.control_factor);
      step_size = step_size * self.decay_factor;
    }

    let fx = objective.value(&x);
    if fx < best.1 { best = (x, fx); }
    Minimum {
      x: best.0,
      value: best.1,
      iterations: self.step_limit.unwrap_or(u64::MAX),
      converged: false
    }
  }
}
