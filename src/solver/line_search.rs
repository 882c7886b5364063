#![allow(non_snake_case)]

use {
  super::{Minimizer, Minimum, Objective, dot, norm, step_along},
  num_traits::Float,
};

/// Steepest descent with a backtracking (Armijo) step-size rule.
///
/// Each iteration starts from the previous accepted step grown by `growth_factor`, and shrinks it
/// by `decay_factor` until the sufficient decrease condition holds. The run stops when the gradient
/// norm drops below `Δ`, when an accepted step improves the value by less than `value_tolerance`,
/// or after `step_limit` iterations.
#[derive(Copy, Clone, Debug)]
pub struct LineSearch<P> {
  pub Δ: P,
  pub value_tolerance: P,
  pub initial_step_size: P,
  pub decay_factor: P,
  pub growth_factor: P,
  pub sufficient_decrease: P,
  pub step_limit: Option<u64>,
  pub max_backtracks: u64,
}

impl <P: Float> Default for LineSearch<P> {
  fn default() -> Self {
    Self {
      Δ: P::from(1e-9).unwrap(),
      value_tolerance: P::from(1e-12).unwrap(),
      initial_step_size: P::one(),
      decay_factor: P::from(0.5).unwrap(),
      growth_factor: P::from(2.0).unwrap(),
      sufficient_decrease: P::from(1e-4).unwrap(),
      step_limit: Some(500),
      max_backtracks: 50,
    }}}

impl<P: Float, const N: usize> Minimizer<P, N> for LineSearch<P> {
  fn minimize(&self, objective: &impl Objective<P, N>, x0: [P; N]) -> Minimum<P, N> {
    let mut x = x0;
    let (mut fx, mut grad) = objective.value_and_gradient(&x);
    let mut step_size = self.initial_step_size;

    for iteration in 0..self.step_limit.unwrap_or(u64::MAX) {
      let grad_sq = dot(&grad, &grad);
      if !grad_sq.is_finite() {
        return Minimum { x, value: fx, iterations: iteration, converged: false };
      }
      if grad_sq.sqrt() < self.Δ {
        return Minimum { x, value: fx, iterations: iteration, converged: true };
      }

      let accepted = (0..self.max_backtracks).find_map(|_| {
        let candidate = step_along(&x, &grad, step_size);
        let f_candidate = objective.value(&candidate);
        if f_candidate <= fx - self.sufficient_decrease * step_size * grad_sq {
          Some((candidate, f_candidate))
        } else {
          step_size = step_size * self.decay_factor;
          None
        }
      });

      let (candidate, f_candidate) = match accepted {
        Some(found) => found,
        // no descent left along the gradient at machine precision
        None => return Minimum { x, value: fx, iterations: iteration, converged: false }
      };
      let improvement = fx - f_candidate;
      x = candidate;
      let (f_next, grad_next) = objective.value_and_gradient(&x);
      fx = f_next;
      grad = grad_next;
      step_size = step_size * self.growth_factor;

      if improvement < self.value_tolerance {
        return Minimum { x, value: fx, iterations: iteration + 1, converged: true };
      }
    }

    Minimum {
      x,
      value: fx,
      iterations: self.step_limit.unwrap_or(u64::MAX),
      converged: norm(&grad) < self.Δ
    }
  }
}
