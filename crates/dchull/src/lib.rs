//! Planar convex hulls by divide and conquer, with a seeded point source and
//! a wall-clock scaling harness.
//!
//! Layout
//! - `hull`: orientation predicate, trivial base case, tangent merge, and the
//!   recursive driver (the core).
//! - `sample`: reproducible uniform point clouds (replay tokens).
//! - `timing`: medians of wall-clock runs against the n·log2(n) bound.
//!
//! The core is single-threaded and allocation-light; collaborators (point
//! source, timing, reporting) plug in around `hull::compute_hull` and never
//! reach into the recursion.

pub mod api;
pub mod hull;
pub mod sample;
pub mod timing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports for callers that want the short names.
pub use hull::{compute_hull, Hull, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{compute_hull, lex_cmp, merge_hulls, orient, Hull, Point};
    pub use crate::sample::{
        draw_points, CloudCfg, GeneratorError, PointGenerator, PointSample, Region, ReplayToken,
        UniformPoints,
    };
    pub use crate::timing::{
        median_ms, nlog2n, scaling_table, scaling_table_with, time_median_ms, time_once_ms,
        ScalingCfg, ScalingRow,
    };
    pub use nalgebra::Vector2 as Vec2;
}
