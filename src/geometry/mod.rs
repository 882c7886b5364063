//! Coordinate spaces and shapes.
//!
//! The origin of coordinate system is in top-left corner. Points handed to the packer live either
//! in [`PixelSpace`], or in [`WorldSpace`] normalized by [`scale_factor`].

use {
  euclid::{Point2D, Box2D, Size2D},
  num_traits::Float,
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSpace;
/// Normalized coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldSpace;

pub type P2<T, S = WorldSpace> = Point2D<T, S>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Mean of the raster sides. Maps normalized coordinates onto pixels and back.
pub fn scale_factor(resolution: Size2D<u32, PixelSpace>) -> f64 {
  (resolution.width as f64 + resolution.height as f64) / 2.0
}

pub fn to_world_space<T: Float>(point: P2<T, PixelSpace>, scale: T) -> P2<T, WorldSpace> {
  (point / scale).cast_unit()
}

pub fn to_pixel_space<T: Float>(point: P2<T, WorldSpace>, scale: T) -> P2<T, PixelSpace> {
  (point * scale).cast_unit()
}
