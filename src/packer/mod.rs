//! Greedy circle packing.
//!
//! Circles are fitted one at a time against the points no previous circle explains:
//! ```text
//! Spawning -> Fitting -> Trimming -> Spawning ... -> Done
//! ```
//! - *Spawning* draws two active points; the first is the center, the distance to the second is
//!   the radius. Both draws may pick the same point, which gives a zero radius guess.
//! - *Fitting* hands the guess and a [`RadialFit`] over the active points to the minimizer.
//! - *Trimming* explains every active point close to the fitted circle's boundary.
//!
//! The loop ends after `target_count` circles, or earlier once every point is explained.
//!
//! ```
//! # use {
//! #   circle_regions::{packer::{CirclePacker, PackerConfig}, geometry::WorldSpace},
//! #   euclid::Point2D,
//! #   rand::SeedableRng,
//! # };
//! let points: Vec<Point2D<f64, WorldSpace>> = (0..32)
//!   .map(|i| {
//!     let a = i as f64 / 32.0 * std::f64::consts::TAU;
//!     Point2D::new(0.5 + 0.25 * a.cos(), 0.5 + 0.25 * a.sin())
//!   })
//!   .collect();
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let packing = CirclePacker::new(PackerConfig::default())
//!   .pack(points, 4, 1.0, &mut rng)
//!   .unwrap();
//! assert!(packing.circles.len() <= 4);
//! ```

use {
  crate::{
    error::{Error, Result},
    geometry::Circle,
    point_cloud::PointCloud,
    solver::{LineSearch, Minimizer, Minimum},
  },
  euclid::Point2D,
  rand::Rng,
  rayon::prelude::*,
};

pub mod objective;
pub use objective::RadialFit;


#[derive(Copy, Clone, Debug)]
pub struct PackerConfig {
  /// Huber threshold δ, in point units.
  pub huber_delta: f64,
  /// Points closer than this to a fitted boundary are explained by it, in point units.
  pub trim_tolerance: f64,
  /// Spawns refined per circle; the lowest loss wins.
  pub spawn_attempts: u32,
  /// 0: silent, 1: one event per circle, 2: one event per refined spawn.
  pub verbosity: u8,
}

impl Default for PackerConfig {
  /// Tuned for points normalized into the unit square.
  fn default() -> Self {
    Self {
      huber_delta: 0.05,
      trim_tolerance: 0.01,
      spawn_attempts: 1,
      verbosity: 0,
    }}}

impl PackerConfig {
  /// Same tolerances for points living in a space `k` times larger, e.g. pixel space.
  pub fn scaled(self, k: f64) -> Self {
    Self {
      huber_delta: self.huber_delta * k,
      trim_tolerance: self.trim_tolerance * k,
      ..self
    }
  }
}

/// Diagnostics of one fitted circle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitReport {
  pub iterations: u64,
  pub converged: bool,
  pub loss: f64,
  pub trimmed: usize,
}

#[derive(Debug, Clone)]
pub struct Packing<U> {
  /// In output space: radii multiplied by `output_scale`.
  pub circles: Vec<Circle<f64, U>>,
  /// Points left unexplained when the loop stopped.
  pub remaining: Vec<Point2D<f64, U>>,
  /// One per circle, same order.
  pub fits: Vec<FitReport>,
}

impl<U> Packing<U> {
  fn empty() -> Self {
    Self { circles: vec![], remaining: vec![], fits: vec![] }
  }
}

enum Stage<U> {
  Spawning,
  Fitting(Vec<Circle<f64, U>>),
  Trimming(Circle<f64, U>, Minimum<f64, 3>),
  Done,
}

pub struct CirclePacker<M = LineSearch<f64>> {
  pub config: PackerConfig,
  pub minimizer: M,
}

impl CirclePacker {
  pub fn new(config: PackerConfig) -> Self {
    Self { config, minimizer: LineSearch::default() }
  }
}

impl<M> CirclePacker<M>
  where M: Minimizer<f64, 3> + Sync {
  pub fn with_minimizer(config: PackerConfig, minimizer: M) -> Self {
    Self { config, minimizer }
  }

  /// Fits up to `target_count` circles. Fewer circles come back when the points run out first.
  pub fn pack<U: Send + Sync>(
    &self,
    points: impl Into<PointCloud<U>>,
    target_count: usize,
    output_scale: f64,
    rng: &mut impl Rng
  ) -> Result<Packing<U>> {
    if !output_scale.is_finite() || output_scale <= 0.0 {
      return Err(Error::InvalidScale(output_scale));
    }
    let mut cloud: PointCloud<U> = points.into();
    if cloud.is_empty() {
      return Ok(Packing::empty());
    }

    let mut packing = Packing::empty();
    let mut stage = Stage::Spawning;
    loop {
      stage = match stage {
        Stage::Spawning => {
          if cloud.is_exhausted() || packing.circles.len() >= target_count {
            Stage::Done
          } else {
            Stage::Fitting(self.spawn(&cloud, &mut *rng))
          }
        }
        Stage::Fitting(guesses) => match self.refine_best(cloud.active(), guesses) {
          Some((circle, minimum)) => Stage::Trimming(circle, minimum),
          None => Stage::Done,
        },
        Stage::Trimming(circle, minimum) => {
          let trimmed = cloud.trim(&circle, self.config.trim_tolerance);
          if self.config.verbosity >= 1 {
            tracing::info!(
              index = packing.circles.len(),
              cx = circle.xy.x, cy = circle.xy.y, r = circle.r,
              loss = minimum.value,
              iterations = minimum.iterations,
              converged = minimum.converged,
              trimmed,
              active = cloud.active().len(),
              "fitted circle"
            );
          }
          packing.fits.push(FitReport {
            iterations: minimum.iterations,
            converged: minimum.converged,
            loss: minimum.value,
            trimmed,
          });
          packing.circles.push(Circle::new(circle.xy, circle.r * output_scale));
          Stage::Spawning
        }
        Stage::Done => break,
      }
    }

    if self.config.verbosity >= 1 {
      tracing::info!(
        circles = packing.circles.len(),
        target_count,
        remaining = cloud.active().len(),
        "packing finished"
      );
    }
    packing.remaining = cloud.into_remaining();
    Ok(packing)
  }

  fn spawn<U>(&self, cloud: &PointCloud<U>, rng: &mut impl Rng) -> Vec<Circle<f64, U>> {
    (0..self.config.spawn_attempts.max(1))
      .filter_map(|_| cloud.sample_pair(&mut *rng))
      .map(|(center, rim)| Circle::new(center, (rim - center).length()))
      .collect()
  }

  /// Refines every guess against `active`, keeping the lowest loss. Earlier guesses win ties.
  fn refine_best<U: Send + Sync>(
    &self,
    active: &[Point2D<f64, U>],
    guesses: Vec<Circle<f64, U>>
  ) -> Option<(Circle<f64, U>, Minimum<f64, 3>)> {
    let refined: Vec<_> = guesses.into_par_iter()
      .map(|guess| self.refine(active, guess))
      .collect();
    refined.into_iter()
      .enumerate()
      .inspect(|(attempt, (circle, minimum))| if self.config.verbosity >= 2 {
        tracing::debug!(
          attempt,
          cx = circle.xy.x, cy = circle.xy.y, r = circle.r,
          loss = minimum.value,
          iterations = minimum.iterations,
          converged = minimum.converged,
          "refined spawn"
        );
      })
      .map(|(_, fit)| fit)
      .min_by(|(_, a), (_, b)| a.value.total_cmp(&b.value))
  }

  /// Runs the minimizer from `guess`. The result is used whether or not it converged.
  pub fn refine<U>(
    &self,
    active: &[Point2D<f64, U>],
    guess: Circle<f64, U>
  ) -> (Circle<f64, U>, Minimum<f64, 3>) {
    let objective = RadialFit::new(active, self.config.huber_delta);
    let minimum = self.minimizer.minimize(&objective, [guess.xy.x, guess.xy.y, guess.r]);
    let circle = if minimum.x.iter().all(|v| v.is_finite()) {
      Circle::new(Point2D::new(minimum.x[0], minimum.x[1]), minimum.x[2].max(0.0))
    } else {
      guess
    };
    (circle, minimum)
  }
}
