//! Circle packing of edge point clouds, and color quantization by circle overlap.
//!
//! The crate is split into two main modules: [`packer`] fits a small set of circles to a 2D point
//! cloud, one circle at a time, and [`quantizer`] partitions a raster into the regions carved out
//! by those circles and flattens every region to a single color.
//! [`edges`] turns a raster into a point cloud, and [`drawing`] converts to and from
//! [`image`](https://docs.rs/image) buffers (requires `drawing` feature).
//!
//! # Basic usage
//! ```
//! # use {
//! #   circle_regions::{
//! #     edges::EdgeSampler,
//! #     geometry::{scale_factor, to_world_space},
//! #     packer::{CirclePacker, PackerConfig},
//! #     quantizer::{self, PixelLayout, RasterBuffer},
//! #   },
//! #   rand::SeedableRng,
//! # };
//! # fn main() -> anyhow::Result<()> {
//! // A white disc on black.
//! let mut raster = RasterBuffer::new(64, 48, PixelLayout::Rgb);
//! itertools::iproduct!(0..48u32, 0..64u32)
//!   .filter(|&(y, x)| (x as f64 - 32.0).hypot(y as f64 - 24.0) < 15.0)
//!   .for_each(|(y, x)| raster.set_pixel(x, y, [255, 255, 255]));
//!
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let points = EdgeSampler::default().sample(&raster, &mut rng)?;
//!
//! // fit in normalized space, emit radii in pixels
//! let scale = scale_factor(raster.size());
//! let points: Vec<_> = points.into_iter().map(|p| to_world_space(p, scale)).collect();
//! let packing = CirclePacker::new(PackerConfig::default())
//!   .pack(points, 6, scale, &mut rng)?;
//!
//! let circles: Vec<_> = packing.circles.iter()
//!   .map(|c| c.to_pixel_space(scale))
//!   .collect();
//! let quantized = quantizer::quantize(&raster, &circles, true)?;
//! assert_eq!(quantized.size(), raster.size());
//! # Ok(())
//! # }
//! ```
//!
//! Everything is deterministic for a given RNG seed. Diagnostics are emitted as
//! [`tracing`](https://docs.rs/tracing) events; no subscriber is installed by the library.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod point_cloud;
pub mod solver;
pub mod packer;
pub mod quantizer;
pub mod edges;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
