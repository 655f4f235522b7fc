//! Curated internal API (UNSTABLE).
//!
//! Convenience surface for project-internal binaries and experiments; prefer
//! these re-exports for consistency across callers. Not a stable public API;
//! breaking changes are expected.

// Hull core
pub use crate::hull::{compute_hull, lex_cmp, merge_hulls, orient, Hull, Point};
// Seeded point clouds
pub use crate::sample::{
    draw_points, CloudCfg, GeneratorError, PointGenerator, PointSample, Region, ReplayToken,
    UniformPoints,
};
// Scaling harness
pub use crate::timing::{
    median_ms, nlog2n, scaling_table, scaling_table_with, time_median_ms, time_once_ms, ScalingCfg,
    ScalingRow,
};
