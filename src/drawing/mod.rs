//! Interop with [`image`] buffers, and a debug overlay for sampled points.

use {
  crate::{
    geometry::{BoundingBox, Circle, PixelSpace},
    quantizer::{PixelLayout, RasterBuffer},
    sdf::SDF,
  },
  anyhow::Result,
  euclid::{Box2D, Point2D},
  image::{Rgb, RgbImage, Rgba, RgbaImage},
};

#[cfg(test)] mod tests;

impl RasterBuffer {
  pub fn from_rgba_image(image: &RgbaImage) -> Result<Self> {
    let (w, h) = image.dimensions();
    Ok(Self::from_raw(w, h, w as usize * 4, PixelLayout::Rgba, image.as_raw().clone())?)
  }

  pub fn from_rgb_image(image: &RgbImage) -> Result<Self> {
    let (w, h) = image.dimensions();
    Ok(Self::from_raw(w, h, w as usize * 3, PixelLayout::Rgb, image.as_raw().clone())?)
  }

  pub fn to_rgba_image(&self) -> RgbaImage {
    RgbaImage::from_fn(self.width(), self.height(), |x, y| {
      let [r, g, b] = self.pixel(x, y);
      Rgba([r, g, b, self.alpha(x, y)])
    })
  }

  /// Drops alpha.
  pub fn to_rgb_image(&self) -> RgbImage {
    RgbImage::from_fn(self.width(), self.height(), |x, y| Rgb(self.pixel(x, y)))
  }
}

/// Paints each point as an opaque red disc of `radius` pixels.
pub fn draw_points(image: &mut RgbaImage, points: &[Point2D<f64, PixelSpace>], radius: f64) {
  let screen = Box2D::from_size(euclid::Size2D::from(image.dimensions()).to_f64());
  points.iter()
    .map(|&xy| Circle::new(xy, radius))
    .for_each(|dot| {
      let bounding_box = dot.bounding_box()
        .inflate(1.0, 1.0)
        .round_out()
        .intersection(&screen);
      let bounding_box = match bounding_box {
        Some(x) => x.to_u32(),
        None => return
      };
      itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
        .filter(|&(y, x)| dot.sdf(Point2D::new(x as f64, y as f64)) <= 0.0)
        .for_each(|(y, x)| image.put_pixel(x, y, Rgba([255, 0, 0, 255])));
    });
}
