//! Overlap-region color quantization.
//!
//! Every pixel gets a [`MembershipKey`]: bit `i` is set when the pixel lies strictly inside
//! circle `i`. Pixels sharing a key form an [`OverlapGroup`], and each group is flattened to the
//! median color along its widest channel. Outlines, when requested, are drawn on top afterwards.

use {
  crate::{
    error::{Error, Result},
    geometry::{BoundingBox, Circle, PixelSpace},
  },
  euclid::{Box2D, Point2D, Vector2D as V2},
  rayon::prelude::*,
  std::collections::HashMap,
};

pub mod raster;
pub use raster::{PixelLayout, RasterBuffer};


/// Capacity of a [`MembershipKey`].
pub const MAX_CIRCLES: usize = 31;

/// Set of circles containing a pixel, one bit per circle index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct MembershipKey(pub u32);

impl MembershipKey {
  pub fn of(pixel: Point2D<f64, PixelSpace>, circles: &[Circle<f64, PixelSpace>]) -> Self {
    Self(circles.iter()
      .enumerate()
      .filter(|(_, circle)| circle.contains(pixel))
      .fold(0, |key, (i, _)| key | (1 << i)))
  }

  pub fn contains(self, circle: usize) -> bool {
    (self.0 >> circle) & 1 == 1
  }
}

/// Pixels sharing one key, as row-major linear indices in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapGroup {
  pub key: MembershipKey,
  pub pixels: Vec<usize>,
}

#[derive(Debug, Copy, Clone)]
pub struct QuantizerConfig {
  /// Pixels within this distance of a circle boundary are darkened.
  pub outline_width: f64,
  /// Distance from the boundary over which an outline stays fully black.
  pub outline_feather: f64,
}

impl Default for QuantizerConfig {
  fn default() -> Self {
    Self {
      outline_width: 1.5,
      outline_feather: 0.5,
    }}}

#[derive(Debug, Copy, Clone, Default)]
pub struct RegionQuantizer {
  pub config: QuantizerConfig,
}

impl RegionQuantizer {
  pub fn new(config: QuantizerConfig) -> Self {
    Self { config }
  }

  /// Recolors `raster` by overlap region into a new buffer of the same shape.
  /// Circles must be in the pixel space of `raster`.
  pub fn quantize(
    &self,
    raster: &RasterBuffer,
    circles: &[Circle<f64, PixelSpace>],
    draw_outlines: bool
  ) -> Result<RasterBuffer> {
    let groups = overlap_groups(raster, circles)?;
    let colors: Vec<[u8; 3]> = groups.par_iter()
      .map(|group| median_color(raster, &group.pixels))
      .collect();
    tracing::debug!(groups = groups.len(), circles = circles.len(), "overlap groups");

    let mut out = raster.clone();
    groups.iter().zip(colors).for_each(|(group, rgb)| {
      group.pixels.iter().for_each(|&i| {
        let (x, y) = out.coords(i);
        out.set_pixel(x, y, rgb);
        out.set_alpha(x, y, 255);
      });
    });

    if draw_outlines {
      circles.iter().for_each(|circle| self.outline(&mut out, circle));
    }
    Ok(out)
  }

  /// Darkens pixels near the boundary of `circle`, fully black within `outline_feather`,
  /// fading linearly to untouched at `outline_width`.
  fn outline(&self, raster: &mut RasterBuffer, circle: &Circle<f64, PixelSpace>) {
    let QuantizerConfig { outline_width, outline_feather } = self.config;
    let margin = V2::splat(outline_width + 0.5);
    let bounding_box = circle.bounding_box();
    let bounding_box = Box2D::new(bounding_box.min - margin, bounding_box.max + margin)
      .round_out()
      .intersection(&Box2D::from_size(raster.size().to_f64()));
    let bounding_box = match bounding_box {
      Some(x) => x.to_u32(),
      None => return // entirely off-image
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        let edge = circle.boundary_distance(Point2D::new(x as f64, y as f64));
        if edge > outline_width {
          return;
        }
        let alpha = (1.0 - (edge - outline_feather).max(0.0)).clamp(0.0, 1.0);
        let rgb = raster.pixel(x, y).map(|c| (c as f64 * (1.0 - alpha)) as u8);
        raster.set_pixel(x, y, rgb);
      });
  }
}

/// [`RegionQuantizer::quantize`] with the default configuration.
pub fn quantize(
  raster: &RasterBuffer,
  circles: &[Circle<f64, PixelSpace>],
  draw_outlines: bool
) -> Result<RasterBuffer> {
  RegionQuantizer::default().quantize(raster, circles, draw_outlines)
}

/// Partitions the pixels of `raster` by membership key.
/// Groups are ordered by the first pixel, in row-major order, carrying their key.
pub fn overlap_groups(
  raster: &RasterBuffer,
  circles: &[Circle<f64, PixelSpace>]
) -> Result<Vec<OverlapGroup>> {
  if circles.len() > MAX_CIRCLES {
    return Err(Error::too_many_circles(circles.len()));
  }
  let keys: Vec<MembershipKey> = (0..raster.pixel_count())
    .into_par_iter()
    .map(|i| {
      let (x, y) = raster.coords(i);
      MembershipKey::of(Point2D::new(x as f64, y as f64), circles)
    })
    .collect();

  let mut slots = HashMap::new();
  let mut groups: Vec<OverlapGroup> = vec![];
  keys.into_iter().enumerate().for_each(|(i, key)| {
    let slot = *slots.entry(key).or_insert_with(|| {
      groups.push(OverlapGroup { key, pixels: vec![] });
      groups.len() - 1
    });
    groups[slot].pixels.push(i);
  });
  Ok(groups)
}

/// Channel with the widest value range. Ties go to the lower channel index.
pub fn dominant_channel(colors: &[[u8; 3]]) -> usize {
  let range = |c: usize| {
    let (lo, hi) = colors.iter()
      .fold((u8::MAX, u8::MIN), |(lo, hi), rgb| (lo.min(rgb[c]), hi.max(rgb[c])));
    hi.saturating_sub(lo)
  };
  let (r, g, b) = (range(0), range(1), range(2));
  let mut dominant = 0;
  if g > r { dominant = 1; }
  if b > r && b > g { dominant = 2; }
  dominant
}

/// Element `len / 2` of the group sorted (stably) along its dominant channel.
fn median_color(raster: &RasterBuffer, pixels: &[usize]) -> [u8; 3] {
  let mut colors: Vec<[u8; 3]> = pixels.iter()
    .map(|&i| {
      let (x, y) = raster.coords(i);
      raster.pixel(x, y)
    })
    .collect();
  let channel = dominant_channel(&colors);
  colors.sort_by_key(|rgb| rgb[channel]);
  colors[colors.len() / 2]
}
