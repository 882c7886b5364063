use {
  super::{BoundingBox, PixelSpace},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Vector2D as V2},
  num_traits::Float,
};

/// Circle with center `xy` and radius `r`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<T, U> {
  pub xy: Point2D<T, U>,
  pub r: T,
}

impl<T: Float, U> Circle<T, U> {
  pub fn new(xy: Point2D<T, U>, r: T) -> Self {
    Self { xy, r }
  }

  /// Distance from `point` to the circle's boundary, regardless of side.
  pub fn boundary_distance(&self, point: Point2D<T, U>) -> T {
    self.sdf(point).abs()
  }

  /// Strict containment: points on the boundary are outside.
  pub fn contains(&self, point: Point2D<T, U>) -> bool {
    (point - self.xy).length() < self.r
  }

  pub fn cast_unit<V>(self) -> Circle<T, V> {
    Circle { xy: self.xy.cast_unit(), r: self.r }
  }

  /// Moves a circle emitted by the packer with `output_scale = scale` into pixel space.
  /// The radius has already been scaled at emission, so only the center moves.
  pub fn to_pixel_space(self, scale: T) -> Circle<T, PixelSpace> {
    Circle { xy: self.xy * scale, r: self.r }.cast_unit()
  }
}

impl<T: Float, U> SDF<T, U> for Circle<T, U> {
  fn sdf(&self, pixel: Point2D<T, U>) -> T {
    (pixel - self.xy).length() - self.r
  }
}

impl<T: Float, U> BoundingBox<T, U> for Circle<T, U> {
  fn bounding_box(&self) -> Box2D<T, U> {
    Box2D::new(
      self.xy - V2::splat(self.r),
      self.xy + V2::splat(self.r)
    )}}
