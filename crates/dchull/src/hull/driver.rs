//! Divide-and-conquer driver: dedup, sort, bisect, merge.

use super::tangent::merge_hulls;
use super::types::{lex_cmp, orient, Hull, Point};

/// Exact hull for at most three distinct, lexicographically sorted points.
///
/// Zero to two points are their own hull; a sorted triple is oriented CCW,
/// or collapsed to its endpoints when collinear.
fn trivial_hull(pts: &[Point]) -> Hull {
    debug_assert!(pts.len() <= 3);
    if pts.len() < 3 {
        return Hull::from_vertices(pts.to_vec());
    }
    let (a, b, c) = (pts[0], pts[1], pts[2]);
    let t = orient(a, b, c);
    let v = if t > 0.0 {
        vec![a, b, c]
    } else if t < 0.0 {
        vec![a, c, b]
    } else {
        vec![a, c]
    };
    Hull::from_vertices(v)
}

/// Recursive bisection over a sorted, deduplicated slice.
///
/// Each call owns nothing but its sub-slice; sibling calls share no state,
/// and every merge consumes exactly the two sibling results.
fn hull_sorted(pts: &[Point]) -> Hull {
    if pts.len() <= 3 {
        return trivial_hull(pts);
    }
    let mid = pts.len() / 2;
    merge_hulls(&hull_sorted(&pts[..mid]), &hull_sorted(&pts[mid..]))
}

/// Convex hull of an arbitrary finite point sequence.
///
/// Duplicates are collapsed by exact coordinate equality and the survivors
/// sorted lexicographically by (x, y); that order is the single source of
/// truth for the left/right split. Returns the counter-clockwise hull.
/// Deterministic for a given input multiset; O(n log n).
pub fn compute_hull(points: &[Point]) -> Hull {
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    hull_sorted(&pts)
}
