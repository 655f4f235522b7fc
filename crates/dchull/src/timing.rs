//! Wall-clock scaling harness for the hull driver.
//!
//! Purpose
//! - Measure `compute_hull` on seeded clouds of increasing size and report
//!   the median elapsed time next to the theoretical n·log2(n) column, so a
//!   reporting sink can judge the scaling behavior.
//!
//! Notes
//! - Point generation is never timed; each trial draws its cloud first and
//!   only the hull call sits between the `Instant` reads.
//! - The harness is pluggable on the source side: `scaling_table_with`
//!   accepts any sampler closure, and `scaling_table` wires in the uniform
//!   sampler from `sample`.

use std::time::Instant;

use crate::hull::{compute_hull, Point};
use crate::sample::{draw_points, CloudCfg, Region, ReplayToken};

/// The comparison bound n·log2(n); zero for n <= 1.
#[inline]
pub fn nlog2n(n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        (n as f64) * (n as f64).log2()
    }
}

/// Time one hull build; returns elapsed milliseconds and the hull size.
pub fn time_once_ms(points: &[Point]) -> (f64, usize) {
    let t0 = Instant::now();
    let hull = compute_hull(points);
    (t0.elapsed().as_secs_f64() * 1e3, hull.len())
}

/// Median of the samples; mean of the middle two for even counts.
pub fn median_ms(samples: &mut [f64]) -> f64 {
    debug_assert!(!samples.is_empty());
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let m = samples.len() / 2;
    if samples.len() % 2 == 1 {
        samples[m]
    } else {
        0.5 * (samples[m - 1] + samples[m])
    }
}

/// One measured row of the scaling table.
#[derive(Clone, Copy, Debug)]
pub struct ScalingRow {
    pub n: usize,
    pub median_ms: f64,
    pub theory: f64,
}

/// Scaling experiment configuration.
///
/// The default reproduces the standard experiment: the size ladder
/// 200..20000, three trials per size, uniform unit-square clouds.
#[derive(Clone, Debug)]
pub struct ScalingCfg {
    pub sizes: Vec<usize>,
    pub trials: usize,
    pub seed: u64,
    pub region: Region,
}

impl Default for ScalingCfg {
    fn default() -> Self {
        Self {
            sizes: vec![200, 500, 1000, 2000, 5000, 10_000, 20_000],
            trials: 3,
            seed: 1000,
            region: Region::UnitSquare,
        }
    }
}

/// Median hull time over `trials` fresh replay indexes at size `n`.
pub fn time_median_ms(n: usize, trials: usize, seed: u64, region: Region) -> f64 {
    let cfg = CloudCfg { count: n, region };
    let mut samples: Vec<f64> = (0..trials.max(1) as u64)
        .map(|index| time_once_ms(&draw_points(cfg, ReplayToken { seed, index })).0)
        .collect();
    median_ms(&mut samples)
}

/// Run the scaling experiment with the uniform point source.
pub fn scaling_table(cfg: &ScalingCfg) -> Vec<ScalingRow> {
    scaling_table_with(cfg, |n, tok| {
        draw_points(
            CloudCfg {
                count: n,
                region: cfg.region,
            },
            tok,
        )
    })
}

/// Run the scaling experiment against an arbitrary point source.
///
/// `sample` receives the size and a replay token `(cfg.seed, trial index)`
/// and must return the cloud to be hulled; generation stays outside the
/// timed section.
pub fn scaling_table_with<F>(cfg: &ScalingCfg, mut sample: F) -> Vec<ScalingRow>
where
    F: FnMut(usize, ReplayToken) -> Vec<Point>,
{
    let trials = cfg.trials.max(1);
    cfg.sizes
        .iter()
        .map(|&n| {
            let mut samples: Vec<f64> = (0..trials as u64)
                .map(|index| {
                    let cloud = sample(
                        n,
                        ReplayToken {
                            seed: cfg.seed,
                            index,
                        },
                    );
                    time_once_ms(&cloud).0
                })
                .collect();
            ScalingRow {
                n,
                median_ms: median_ms(&mut samples),
                theory: nlog2n(n),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theory_bound_values() {
        assert_eq!(nlog2n(0), 0.0);
        assert_eq!(nlog2n(1), 0.0);
        assert!((nlog2n(2) - 2.0).abs() < 1e-12);
        assert!((nlog2n(1024) - 1024.0 * 10.0).abs() < 1e-9);
    }

    #[test]
    fn median_of_odd_and_even_counts() {
        let mut odd = [3.0, 1.0, 2.0];
        assert!((median_ms(&mut odd) - 2.0).abs() < 1e-12);
        let mut even = [4.0, 1.0, 3.0, 2.0];
        assert!((median_ms(&mut even) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn scaling_rows_match_requested_sizes() {
        let cfg = ScalingCfg {
            sizes: vec![8, 32],
            trials: 2,
            seed: 5,
            region: Region::UnitSquare,
        };
        let rows = scaling_table(&cfg);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].n, 8);
        assert_eq!(rows[1].n, 32);
        assert!(rows.iter().all(|r| r.median_ms >= 0.0));
        assert!(rows[0].theory < rows[1].theory);
    }

    #[test]
    fn custom_sampler_is_used_verbatim() {
        let cfg = ScalingCfg {
            sizes: vec![4],
            trials: 1,
            seed: 0,
            region: Region::UnitSquare,
        };
        let rows = scaling_table_with(&cfg, |n, _tok| {
            (0..n).map(|k| nalgebra::Vector2::new(k as f64, 0.0)).collect()
        });
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].n, 4);
    }
}
