use {
  crate::solver::{Objective, huber, huber_derivative},
  euclid::Point2D,
};

/// Mean Huber penalty of the radial residuals `|p - c| - r` of a point set,
/// as a function of `[cx, cy, r]`.
///
/// Points far from the candidate circle contribute a bounded gradient, so a circle can be fitted
/// against a set still containing points of circles not found yet.
#[derive(Debug, Clone, Copy)]
pub struct RadialFit<'a, U> {
  points: &'a [Point2D<f64, U>],
  delta: f64,
}

impl<'a, U> RadialFit<'a, U> {
  pub fn new(points: &'a [Point2D<f64, U>], delta: f64) -> Self {
    Self { points, delta }
  }
}

impl<U> Objective<f64, 3> for RadialFit<'_, U> {
  fn value(&self, x: &[f64; 3]) -> f64 {
    if self.points.is_empty() {
      return 0.0;
    }
    let c = Point2D::new(x[0], x[1]);
    self.points.iter()
      .map(|&p| huber((p - c).length() - x[2], self.delta))
      .sum::<f64>() / self.points.len() as f64
  }

  fn gradient(&self, x: &[f64; 3]) -> [f64; 3] {
    self.value_and_gradient(x).1
  }

  fn value_and_gradient(&self, x: &[f64; 3]) -> (f64, [f64; 3]) {
    if self.points.is_empty() {
      return (0.0, [0.0; 3]);
    }
    let c = Point2D::new(x[0], x[1]);
    let (loss, grad) = self.points.iter()
      .fold((0.0, [0.0; 3]), |(loss, mut grad), &p| {
        let offset = c - p;
        let dist = offset.length();
        let e = dist - x[2];
        let w = huber_derivative(e, self.delta);
        // the center gradient is undefined on the point itself
        if dist > f64::EPSILON {
          grad[0] += w * offset.x / dist;
          grad[1] += w * offset.y / dist;
        }
        grad[2] -= w;
        (loss + huber(e, self.delta), grad)
      });
    let n = self.points.len() as f64;
    (loss / n, grad.map(|g| g / n))
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::geometry::WorldSpace,
    approx::assert_relative_eq,
  };

  fn ring(n: usize, r: f64) -> Vec<Point2D<f64, WorldSpace>> {
    (0..n).map(|i| {
      let a = i as f64 / n as f64 * std::f64::consts::TAU;
      Point2D::new(r * a.cos(), r * a.sin())
    }).collect()
  }

  #[test] fn exact_circle_has_zero_loss() {
    let points = ring(12, 2.0);
    let fit = RadialFit::new(&points, 0.1);
    let (loss, grad) = fit.value_and_gradient(&[0.0, 0.0, 2.0]);
    assert_relative_eq!(loss, 0.0, epsilon = 1e-12);
    grad.iter().for_each(|&g| assert_relative_eq!(g, 0.0, epsilon = 1e-12));
  }

  #[test] fn analytic_gradient_matches_finite_difference() {
    let points = ring(12, 2.0);
    let fit = RadialFit::new(&points, 0.3);
    let x = [0.2, -0.1, 1.7];
    let analytic = fit.gradient(&x);
    let h = 1e-6;
    for i in 0..3 {
      let (mut lo, mut hi) = (x, x);
      lo[i] -= h;
      hi[i] += h;
      let numeric = (fit.value(&hi) - fit.value(&lo)) / (2.0 * h);
      assert_relative_eq!(analytic[i], numeric, epsilon = 1e-5);
    }
  }

  #[test] fn outliers_have_bounded_pull() {
    let mut points = ring(12, 1.0);
    points.push(Point2D::new(1000.0, 0.0));
    let fit = RadialFit::new(&points, 0.1);
    let grad = fit.gradient(&[0.0, 0.0, 1.0]);
    // a single far point moves the gradient by at most δ / n per component
    grad.iter().for_each(|&g| assert!(g.abs() <= 0.1 / 13.0 + 1e-12));
  }

  #[test] fn empty_set_is_flat() {
    let fit = RadialFit::<WorldSpace>::new(&[], 0.1);
    assert_eq!(fit.value_and_gradient(&[1.0, 2.0, 3.0]), (0.0, [0.0; 3]));
  }

  #[test] fn coincident_center_is_finite() {
    let points = vec![Point2D::<f64, WorldSpace>::new(1.0, 1.0)];
    let fit = RadialFit::new(&points, 0.1);
    let (loss, grad) = fit.value_and_gradient(&[1.0, 1.0, 0.0]);
    assert_eq!(loss, 0.0);
    assert!(grad.iter().all(|g| g.is_finite()));
  }
}
