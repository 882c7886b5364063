use {
  euclid::Point2D,
  crate::geometry::WorldSpace,
};

/// Signed distance function: negative inside, zero on the boundary.
pub trait SDF<T, S = WorldSpace> {
  fn sdf(&self, pixel: Point2D<T, S>) -> T;
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::geometry::{Circle, BoundingBox},
    approx::assert_relative_eq,
  };

  #[test] fn circle_sdf() {
    let c = Circle::<f64, WorldSpace>::new(Point2D::new(1.0, 1.0), 2.0);
    assert_relative_eq!(c.sdf(Point2D::new(1.0, 1.0)), -2.0);
    assert_relative_eq!(c.sdf(Point2D::new(4.0, 1.0)), 1.0);
    assert_relative_eq!(c.boundary_distance(Point2D::new(1.0, 2.5)), 0.5);
    assert!(c.contains(Point2D::new(2.0, 2.0)));
    assert!(!c.contains(Point2D::new(3.0, 1.0)));

    let bb = c.bounding_box();
    assert_eq!(bb.min, Point2D::new(-1.0, -1.0));
    assert_eq!(bb.max, Point2D::new(3.0, 3.0));
  }
}
