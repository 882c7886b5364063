#![allow(non_snake_case)]
use {
  super::*,
  approx::assert_relative_eq,
};

fn rosenbrock(x: &[f64; 2]) -> f64 {
  (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
}

struct Quadratic;

impl Objective<f64, 3> for Quadratic {
  fn value(&self, x: &[f64; 3]) -> f64 {
    (x[0] - 1.0).powi(2) + 2.0 * (x[1] - 2.0).powi(2) + 3.0 * (x[2] + 1.0).powi(2)
  }
  fn gradient(&self, x: &[f64; 3]) -> [f64; 3] {
    [2.0 * (x[0] - 1.0), 4.0 * (x[1] - 2.0), 6.0 * (x[2] + 1.0)]
  }
}

#[test] fn huber_is_quadratic_then_linear() {
  let δ = 0.5;
  assert_relative_eq!(huber(δ / 2.0, δ), 0.5 * (δ / 2.0) * (δ / 2.0));
  // both branches agree on the threshold
  assert_relative_eq!(huber(δ, δ), 0.5 * δ * δ);
  assert_relative_eq!(huber(δ, δ), δ * (δ - 0.5 * δ));
  // beyond it, growth is linear with slope δ
  assert_relative_eq!(huber(2.0 * δ, δ), δ * (2.0 * δ - 0.5 * δ));
  assert!(huber(2.0 * δ, δ) < 0.5 * (2.0 * δ) * (2.0 * δ));
  assert_relative_eq!(huber(3.0 * δ, δ) - huber(2.0 * δ, δ), δ * δ);
  assert_relative_eq!(huber(-2.0 * δ, δ), huber(2.0 * δ, δ));
}

#[test] fn huber_derivative_is_clamped_residual() {
  assert_relative_eq!(huber_derivative(0.1, 0.5), 0.1);
  assert_relative_eq!(huber_derivative(3.0, 0.5), 0.5);
  assert_relative_eq!(huber_derivative(-3.0, 0.5), -0.5);
}

#[test] fn finite_difference_gradient() {
  let f = |x: &[f64; 2]| x[0] * x[0] + 3.0 * x[1];
  let g = f.gradient(&[2.0, -1.0]);
  assert_relative_eq!(g[0], 4.0, epsilon = 1e-4);
  assert_relative_eq!(g[1], 3.0, epsilon = 1e-4);
}

#[test] fn line_search_quadratic() {
  let min = LineSearch::default().minimize(&Quadratic, [10.0, -10.0, 10.0]);
  assert!(min.converged);
  assert!(min.iterations < 500);
  assert_relative_eq!(min.x[0], 1.0, epsilon = 1e-4);
  assert_relative_eq!(min.x[1], 2.0, epsilon = 1e-4);
  assert_relative_eq!(min.x[2], -1.0, epsilon = 1e-4);
  assert_relative_eq!(min.value, 0.0, epsilon = 1e-8);
}

#[test] fn line_search_respects_step_limit() {
  let ls = LineSearch { step_limit: Some(5), ..Default::default() };
  let x0 = [-1.2, 1.0];
  let min = ls.minimize(&rosenbrock, x0);
  assert!(!min.converged);
  assert_eq!(min.iterations, 5);
  assert!(min.value < rosenbrock(&x0));
}

#[test] fn line_search_starts_at_minimum() {
  let min = LineSearch::default().minimize(&Quadratic, [1.0, 2.0, -1.0]);
  assert!(min.converged);
  assert_eq!(min.iterations, 0);
  assert_eq!(min.x, [1.0, 2.0, -1.0]);
}

#[test] fn minimizers_are_interchangeable() {
  fn run(m: &impl Minimizer<f64, 3>) -> [f64; 3] {
    m.minimize(&Quadratic, [0.0, 0.0, 0.0]).x
  }
  let a = run(&LineSearch::default());
  let b = run(&GradientDescent { initial_step_size: 0.1, decay_factor: 0.99, ..Default::default() });
  for (a, b) in a.iter().zip(b.iter()) {
    assert_relative_eq!(*a, *b, epsilon = 1e-3);
  }
}
