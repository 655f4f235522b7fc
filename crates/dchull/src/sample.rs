//! Reproducible random point clouds.
//!
//! Purpose
//! - Provide the seeded point source consumed by the timing harness, the
//!   benches, and the CLI. The hull core never generates points itself; it
//!   only sees the finished `Vec<Point>`.
//!
//! Model
//! - Draws are uniform over a configurable region. Determinism uses a replay
//!   token `(seed, index)` mixed into a single RNG, so any cloud in a stream
//!   can be regenerated without replaying the stream.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::hull::Point;

/// Sampling region for a point cloud.
#[derive(Clone, Copy, Debug)]
pub enum Region {
    /// Axis-aligned unit square [0, 1) × [0, 1).
    UnitSquare,
    /// Axis-aligned square [0, side) × [0, side).
    Square { side: f64 },
    /// Disk of the given radius centered at the origin.
    Disk { radius: f64 },
}

impl Region {
    fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        match *self {
            Region::UnitSquare => Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()),
            Region::Square { side } => {
                Vector2::new(rng.gen::<f64>() * side, rng.gen::<f64>() * side)
            }
            Region::Disk { radius } => {
                // Square-root radius keeps the density uniform over the area.
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                let r = rng.gen::<f64>().sqrt() * radius;
                Vector2::new(th.cos() * r, th.sin() * r)
            }
        }
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        let ok = match *self {
            Region::UnitSquare => true,
            Region::Square { side } => side.is_finite() && side > 0.0,
            Region::Disk { radius } => radius.is_finite() && radius > 0.0,
        };
        if ok {
            Ok(())
        } else {
            Err(GeneratorError::invalid(
                "region dimensions must be finite and positive",
            ))
        }
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub region: Region,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            region: Region::UnitSquare,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Error type shared by the point generators.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Draw one point cloud for a config and replay token.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count).map(|_| cfg.region.sample(&mut rng)).collect()
}

/// A single cloud plus replay metadata.
#[derive(Clone, Debug)]
pub struct PointSample<P, R> {
    pub points: Vec<Point>,
    pub params: P,
    pub replay: R,
}

/// Common trait for reproducible point sources.
pub trait PointGenerator {
    type Params: Clone;
    type Replay: Clone;

    fn params(&self) -> &Self::Params;

    /// Draw the next cloud in the stream.
    fn generate_next(
        &mut self,
    ) -> Result<PointSample<Self::Params, Self::Replay>, GeneratorError>;

    /// Re-draw a previously returned cloud from its replay token.
    fn regenerate(&self, replay: &Self::Replay) -> Result<Vec<Point>, GeneratorError>;
}

/// Uniform sampler over a fixed region.
#[derive(Clone, Debug)]
pub struct UniformPoints {
    cfg: CloudCfg,
    seed: u64,
    next_index: u64,
}

impl UniformPoints {
    pub fn new(cfg: CloudCfg, seed: u64) -> Result<Self, GeneratorError> {
        if cfg.count == 0 {
            return Err(GeneratorError::invalid("count must be at least 1"));
        }
        cfg.region.validate()?;
        Ok(Self {
            cfg,
            seed,
            next_index: 0,
        })
    }
}

impl PointGenerator for UniformPoints {
    type Params = CloudCfg;
    type Replay = ReplayToken;

    fn params(&self) -> &CloudCfg {
        &self.cfg
    }

    fn generate_next(&mut self) -> Result<PointSample<CloudCfg, ReplayToken>, GeneratorError> {
        let replay = ReplayToken {
            seed: self.seed,
            index: self.next_index,
        };
        self.next_index += 1;
        Ok(PointSample {
            points: draw_points(self.cfg, replay),
            params: self.cfg,
            replay,
        })
    }

    fn regenerate(&self, replay: &ReplayToken) -> Result<Vec<Point>, GeneratorError> {
        Ok(draw_points(self.cfg, *replay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg {
            count: 64,
            region: Region::UnitSquare,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_points(cfg, tok);
        let b = draw_points(cfg, tok);
        assert_eq!(a.len(), 64);
        assert_eq!(a, b);
        // Neighboring indices must not collide.
        let c = draw_points(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }

    #[test]
    fn stream_and_regenerate_agree() {
        let cfg = CloudCfg {
            count: 16,
            region: Region::Square { side: 3.0 },
        };
        let mut gen = UniformPoints::new(cfg, 9).unwrap();
        let first = gen.generate_next().unwrap();
        let second = gen.generate_next().unwrap();
        assert_ne!(first.replay, second.replay);
        assert_eq!(gen.regenerate(&first.replay).unwrap(), first.points);
        assert_eq!(gen.regenerate(&second.replay).unwrap(), second.points);
    }

    #[test]
    fn samples_stay_inside_their_region() {
        let square = draw_points(
            CloudCfg {
                count: 200,
                region: Region::Square { side: 2.5 },
            },
            ReplayToken { seed: 1, index: 0 },
        );
        assert!(square
            .iter()
            .all(|p| p.x >= 0.0 && p.x < 2.5 && p.y >= 0.0 && p.y < 2.5));

        let disk = draw_points(
            CloudCfg {
                count: 200,
                region: Region::Disk { radius: 1.5 },
            },
            ReplayToken { seed: 2, index: 0 },
        );
        assert!(disk.iter().all(|p| p.norm() <= 1.5 + 1e-12));
    }

    #[test]
    fn rejects_invalid_params() {
        let bad_count = UniformPoints::new(
            CloudCfg {
                count: 0,
                region: Region::UnitSquare,
            },
            0,
        );
        assert!(bad_count.is_err());

        let bad_region = UniformPoints::new(
            CloudCfg {
                count: 10,
                region: Region::Disk { radius: -1.0 },
            },
            0,
        );
        assert!(matches!(
            bad_region,
            Err(GeneratorError::InvalidParams { .. })
        ));
    }
}
