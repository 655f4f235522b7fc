//! Core planar types: points, the orientation predicate, and hull values.
//!
//! - `Point`: plain `nalgebra` 2D vector; equality is exact on both coordinates.
//! - `lex_cmp`: the lexicographic (x, then y) order used for sorting,
//!   deduplication, and the rightmost/leftmost anchors of the tangent merge.
//! - `orient`: the signed-area predicate all turn decisions reduce to.
//! - `Hull`: owned counter-clockwise vertex cycle with membership queries.

use nalgebra::Vector2;
use std::cmp::Ordering;

/// Planar point with `f64` coordinates.
pub type Point = Vector2<f64>;

/// Lexicographic order on (x, then y).
///
/// Non-finite coordinates are out of scope; `partial_cmp` falls back to
/// `Equal` rather than panicking, matching how the sort is used.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Twice the signed area of triangle (a, b, c).
///
/// Positive when `c` lies strictly left of the directed line a→b
/// (counter-clockwise turn), negative when strictly right, zero when
/// collinear. Computed as
/// `(b.x−a.x)(c.y−a.y) − (b.y−a.y)(c.x−a.x)`; the tangent walks and the
/// reduction pass depend on this exact sign convention.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Convex polygon boundary as an owned counter-clockwise vertex cycle.
///
/// Invariants:
/// - Vertices are distinct and listed in CCW order; no three consecutive
///   vertices are collinear, except for the degenerate one- and two-vertex
///   hulls.
/// - Every point the hull was built from lies inside or on the boundary.
/// - Hulls are produced bottom-up during divide-and-conquer and are never
///   mutated in place; a merge always allocates a fresh cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    pub v: Vec<Point>,
}

impl Hull {
    #[inline]
    pub fn from_vertices(v: Vec<Point>) -> Self {
        Self { v }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    /// Exact inside-or-on-boundary test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.contains_eps(p, 0.0)
    }

    /// Inside-or-on-boundary test with slack `eps`.
    ///
    /// `eps` is compared against raw orientation values (and distances for the
    /// degenerate hulls), so it is scale-dependent; callers should avoid
    /// extreme coordinate scalings.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        match self.v.len() {
            0 => false,
            1 => (p - self.v[0]).norm() <= eps,
            2 => on_segment_eps(self.v[0], self.v[1], p, eps),
            m => (0..m).all(|k| orient(self.v[k], self.v[(k + 1) % m], p) >= -eps),
        }
    }
}

fn on_segment_eps(a: Point, b: Point, p: Point, eps: f64) -> bool {
    if orient(a, b, p).abs() > eps {
        return false;
    }
    p.x >= a.x.min(b.x) - eps
        && p.x <= a.x.max(b.x) + eps
        && p.y >= a.y.min(b.y) - eps
        && p.y <= a.y.max(b.y) + eps
}
