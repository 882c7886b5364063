//! Partitionable point storage.
//!
//! Points before `active_start` have been explained by a fitted circle and are never visited
//! again; points after it are still available for fitting. Order inside the active partition is
//! insignificant, which makes removal a single swap with the cursor.

use {
  crate::{
    geometry::{Circle, WorldSpace},
    sdf::SDF,
  },
  euclid::Point2D,
  rand::Rng,
};

#[derive(Debug, Clone)]
pub struct PointCloud<U = WorldSpace> {
  points: Vec<Point2D<f64, U>>,
  active_start: usize,
}

impl<U> PointCloud<U> {
  pub fn new(points: Vec<Point2D<f64, U>>) -> Self {
    Self { points, active_start: 0 }
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn active_start(&self) -> usize {
    self.active_start
  }

  pub fn active(&self) -> &[Point2D<f64, U>] {
    &self.points[self.active_start..]
  }

  pub fn explained(&self) -> &[Point2D<f64, U>] {
    &self.points[..self.active_start]
  }

  /// No active points left.
  pub fn is_exhausted(&self) -> bool {
    self.active_start >= self.points.len()
  }

  /// Moves the point at `index` into the explained partition.
  pub fn explain(&mut self, index: usize) {
    debug_assert!(index >= self.active_start && index < self.points.len());
    self.points.swap(index, self.active_start);
    self.active_start += 1;
  }

  /// Draws two active points, independently. Both draws may land on the same point.
  /// Returns `None` once the cloud is exhausted.
  pub fn sample_pair(&self, rng: &mut impl Rng) -> Option<(Point2D<f64, U>, Point2D<f64, U>)> {
    if self.is_exhausted() {
      return None;
    }
    let range = self.active_start..self.points.len();
    let a = rng.gen_range(range.clone());
    let b = rng.gen_range(range);
    Some((self.points[a], self.points[b]))
  }

  /// Explains every active point lying within `tolerance` of the circle's boundary.
  /// Returns the number of points removed.
  pub fn trim(&mut self, circle: &Circle<f64, U>, tolerance: f64) -> usize {
    let before = self.active_start;
    let mut i = self.active_start;
    while i < self.points.len() {
      if circle.sdf(self.points[i]).abs() < tolerance {
        // the swapped-in point was already checked, or is `i` itself
        self.explain(i);
      }
      i += 1;
    }
    self.active_start - before
  }

  /// Consumes the cloud, returning the points nothing explained.
  pub fn into_remaining(mut self) -> Vec<Point2D<f64, U>> {
    self.points.split_off(self.active_start)
  }
}

impl<U> From<Vec<Point2D<f64, U>>> for PointCloud<U> {
  fn from(points: Vec<Point2D<f64, U>>) -> Self {
    Self::new(points)
  }
}
