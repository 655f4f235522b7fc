//! Planar convex hulls by divide and conquer.
//!
//! Purpose
//! - Compute the counter-clockwise convex hull of a finite point set in
//!   O(n log n): sort once, bisect the sorted sequence, bottom out in a
//!   trivial 0–3-point builder, and combine sibling hulls with a tangent
//!   merge driven entirely by the orientation predicate.
//!
//! Layout
//! - `types.rs`: `Point`, lexicographic order, `orient`, the `Hull` value.
//! - `tangent.rs`: upper/lower tangent walks, splice, collinear reduction.
//! - `driver.rs`: trivial base case and the recursive entry point.

mod driver;
mod tangent;
mod types;

pub use driver::compute_hull;
pub use tangent::merge_hulls;
pub use types::{lex_cmp, orient, Hull, Point};
