//! `cargo run --release --example edge_circles --features drawing -- <image> [circles]`
//!
//! Writes `out.png` (quantized regions with outlines) and `out_points.png` (sampled edge points).

use {
  circle_regions::{
    drawing::draw_points,
    edges::EdgeSampler,
    geometry::{scale_factor, to_world_space},
    packer::{CirclePacker, PackerConfig},
    quantizer::{RasterBuffer, RegionQuantizer},
  },
  anyhow::{Context, Result},
  rand::SeedableRng,
  std::time::Instant,
};

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .init();

  let mut args = std::env::args().skip(1);
  let path = args.next().context("usage: edge_circles <image> [circles]")?;
  let target_count = match args.next() {
    Some(x) => x.parse().context("circle count must be a non-negative integer")?,
    None => 6
  };

  let image = image::open(&path)
    .with_context(|| format!("cannot open {}", path))?
    .to_rgba8();
  let mut raster = RasterBuffer::from_rgba_image(&image)?;
  raster.resolve_alpha(128, [255, 255, 255]);
  tracing::info!(?raster, "loaded {}", path);

  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let t0 = Instant::now();

  let points = EdgeSampler::default().sample(&raster, &mut rng)?;
  let mut overlay = raster.to_rgba_image();
  draw_points(&mut overlay, &points, 2.0);
  overlay.save("out_points.png")?;

  let scale = scale_factor(raster.size());
  let points: Vec<_> = points.into_iter().map(|p| to_world_space(p, scale)).collect();
  let packing = CirclePacker::new(PackerConfig { spawn_attempts: 4, verbosity: 1, ..Default::default() })
    .pack(points, target_count, scale, &mut rng)?;

  let circles: Vec<_> = packing.circles.iter()
    .map(|c| c.to_pixel_space(scale))
    .collect();
  let quantized = RegionQuantizer::default().quantize(&raster, &circles, true)?;
  tracing::info!(
    circles = circles.len(),
    unexplained = packing.remaining.len(),
    elapsed = ?t0.elapsed(),
    "done"
  );

  quantized.to_rgba_image().save("out.png")?;
  Ok(())
}
