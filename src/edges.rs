//! Edge points from a raster.
//!
//! [`jittered_resample`] dithers the image, [`sobel`] turns it into an edge magnitude map and
//! [`sample_points`] picks the bright pixels of that map as a point cloud for the packer.
//! Alpha is expected to be resolved beforehand, see [`RasterBuffer::resolve_alpha`].

use {
  crate::{
    error::{Error, Result},
    geometry::PixelSpace,
    quantizer::{PixelLayout, RasterBuffer},
  },
  euclid::Point2D,
  rand::{Rng, seq::SliceRandom},
  rayon::prelude::*,
};

#[derive(Debug, Copy, Clone)]
pub struct EdgeSampler {
  /// Width to resample to before filtering, `None` keeps the source width.
  pub resample_width: Option<u32>,
  /// Sampling offset range in source pixels; 0 disables dithering.
  pub jitter: f64,
  pub max_points: usize,
  /// Darkness factor below which a filtered pixel becomes a point.
  pub threshold: f64,
}

impl Default for EdgeSampler {
  fn default() -> Self {
    Self {
      resample_width: None,
      jitter: 0.75,
      max_points: 300,
      threshold: 0.75,
    }}}

impl EdgeSampler {
  /// Resample, filter and sample `raster`. Points are in the pixel space of the resampled raster,
  /// which is the source's own when `resample_width` is `None`.
  pub fn sample(
    &self,
    raster: &RasterBuffer,
    rng: &mut impl Rng
  ) -> Result<Vec<Point2D<f64, PixelSpace>>> {
    let width = self.resample_width.unwrap_or_else(|| raster.width());
    let dithered = jittered_resample(raster, width, self.jitter, &mut *rng)?;
    let edges = sobel(&dithered);
    let points = sample_points(&edges, self.max_points, self.threshold, &mut *rng);
    tracing::debug!(
      width = dithered.width(), height = dithered.height(),
      points = points.len(),
      "sampled edge points"
    );
    Ok(points)
  }
}

/// Bilinear resample to `new_width`, keeping the aspect ratio. Every target pixel reads the source
/// at its scaled position offset by a uniform draw from `[-jitter, jitter]` on each axis.
pub fn jittered_resample(
  raster: &RasterBuffer,
  new_width: u32,
  jitter: f64,
  rng: &mut impl Rng
) -> Result<RasterBuffer> {
  if new_width == 0 || raster.pixel_count() == 0 {
    return Err(Error::InvalidDimensions);
  }
  let factor = new_width as f64 / raster.width() as f64;
  let new_height = (raster.height() as f64 * factor) as u32;
  if new_height == 0 {
    return Err(Error::InvalidDimensions);
  }
  let (max_x, max_y) = (raster.width() - 1, raster.height() - 1);

  let mut out = RasterBuffer::new(new_width, new_height, PixelLayout::Rgb);
  itertools::iproduct!(0..new_height, 0..new_width)
    .for_each(|(y, x)| {
      let (mut sx, mut sy) = (x as f64 / factor, y as f64 / factor);
      if jitter > 0.0 {
        sx += rng.gen_range(-jitter..=jitter);
        sy += rng.gen_range(-jitter..=jitter);
      }
      let sx = sx.clamp(0.0, max_x as f64);
      let sy = sy.clamp(0.0, max_y as f64);

      let (x0, y0) = (sx as u32, sy as u32);
      let (x1, y1) = ((x0 + 1).min(max_x), (y0 + 1).min(max_y));
      let (wx, wy) = (sx - x0 as f64, sy - y0 as f64);
      let (p00, p10) = (raster.pixel(x0, y0), raster.pixel(x1, y0));
      let (p01, p11) = (raster.pixel(x0, y1), raster.pixel(x1, y1));

      let rgb = [0, 1, 2].map(|c| (
        (1.0 - wx) * (1.0 - wy) * p00[c] as f64 +
        wx * (1.0 - wy) * p10[c] as f64 +
        (1.0 - wx) * wy * p01[c] as f64 +
        wx * wy * p11[c] as f64
      ) as u8);
      out.set_pixel(x, y, rgb);
    });
  Ok(out)
}

const GX: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const GY: [[i32; 3]; 3] = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Sobel gradient magnitude of the red channel, saturated at 255, as a grey RGB raster.
/// The outermost pixel ring has no full neighbourhood and stays black.
pub fn sobel(raster: &RasterBuffer) -> RasterBuffer {
  let (w, h) = (raster.width(), raster.height());
  let mut out = RasterBuffer::new(w, h, PixelLayout::Rgb);
  if w < 3 || h < 3 {
    return out;
  }

  let magnitudes: Vec<(u32, u32, u8)> = (1..h - 1).into_par_iter()
    .flat_map_iter(|y| (1..w - 1).map(move |x| (x, y)))
    .map(|(x, y)| {
      let (gx, gy) = itertools::iproduct!(0..3usize, 0..3usize)
        .fold((0, 0), |(gx, gy), (ky, kx)| {
          let v = raster.pixel(x + kx as u32 - 1, y + ky as u32 - 1)[0] as i32;
          (gx + v * GX[ky][kx], gy + v * GY[ky][kx])
        });
      let magnitude = ((gx * gx + gy * gy) as f64).sqrt() as i32;
      (x, y, magnitude.min(255) as u8)
    })
    .collect();

  magnitudes.into_iter().for_each(|(x, y, m)| out.set_pixel(x, y, [m; 3]));
  out
}

/// `(255 - |rgb|) / 255`: 1 for black, 0 at full single-channel intensity, negative beyond.
pub fn darkness(rgb: [u8; 3]) -> f64 {
  let [r, g, b] = rgb.map(|c| c as f64);
  (255.0 - (r * r + g * g + b * b).sqrt()) / 255.0
}

/// Pixel centers whose [`darkness`] is below `threshold`, shuffled, at most `max_points` of them.
pub fn sample_points(
  raster: &RasterBuffer,
  max_points: usize,
  threshold: f64,
  rng: &mut impl Rng
) -> Vec<Point2D<f64, PixelSpace>> {
  let mut points: Vec<_> = raster.pixels()
    .filter(|&(_, _, rgb)| darkness(rgb) < threshold)
    .map(|(x, y, _)| Point2D::new(x as f64, y as f64))
    .collect();
  points.shuffle(rng);
  points.truncate(max_points);
  points
}
