//! Tangent merge: combine two sorted-separated convex hulls into one.
//!
//! Purpose
//! - Given the hulls of the two recursion halves, locate the upper and lower
//!   common tangents with local orientation tests and modular index walks,
//!   then splice the two outer arcs into the hull of the union. No candidate
//!   tangent pairs are materialized; each walk only ever compares a vertex
//!   with one neighbor.
//!
//! Conventions
//! - Both inputs are counter-clockwise vertex cycles, and every vertex of the
//!   left hull sorts lexicographically before every vertex of the right hull.
//! - Vertex cycles are plain `Vec`s indexed with explicit modulo arithmetic;
//!   size-1 and size-2 hulls degenerate gracefully (a walk over a single
//!   vertex never moves).

use std::cmp::Ordering;

use super::types::{lex_cmp, orient, Hull, Point};

/// Index of the lexicographically largest vertex.
fn rightmost(v: &[Point]) -> usize {
    let mut best = 0;
    for k in 1..v.len() {
        if lex_cmp(&v[k], &v[best]) == Ordering::Greater {
            best = k;
        }
    }
    best
}

/// Index of the lexicographically smallest vertex.
fn leftmost(v: &[Point]) -> usize {
    let mut best = 0;
    for k in 1..v.len() {
        if lex_cmp(&v[k], &v[best]) == Ordering::Less {
            best = k;
        }
    }
    best
}

/// Upper tangent indices `(iu, ju)` from the anchor pair.
///
/// `j` retreats clockwise (up the right hull's left chain) while its
/// predecessor still lies strictly above the candidate segment; `i` advances
/// counter-clockwise (up the left hull's right chain) while its successor
/// does. The alternation stops at the fixed point where the segment
/// HL[i]–HR[j] supports both hulls from above.
fn upper_tangent(hl: &[Point], hr: &[Point], mut i: usize, mut j: usize) -> (usize, usize) {
    let (nl, nr) = (hl.len(), hr.len());
    let mut changed = true;
    while changed {
        changed = false;
        while orient(hl[i], hr[j], hr[(j + nr - 1) % nr]) > 0.0 {
            j = (j + nr - 1) % nr;
            changed = true;
        }
        while orient(hr[j], hl[i], hl[(i + 1) % nl]) < 0.0 {
            i = (i + 1) % nl;
            changed = true;
        }
    }
    (i, j)
}

/// Lower tangent indices `(il, jl)`; mirror image of [`upper_tangent`].
fn lower_tangent(hl: &[Point], hr: &[Point], mut i: usize, mut j: usize) -> (usize, usize) {
    let (nl, nr) = (hl.len(), hr.len());
    let mut changed = true;
    while changed {
        changed = false;
        while orient(hl[i], hr[j], hr[(j + 1) % nr]) < 0.0 {
            j = (j + 1) % nr;
            changed = true;
        }
        while orient(hr[j], hl[i], hl[(i + nl - 1) % nl]) > 0.0 {
            i = (i + nl - 1) % nl;
            changed = true;
        }
    }
    (i, j)
}

/// Convex hull of the union of two non-empty CCW hulls, where `hl` lies
/// entirely sorted-before `hr`.
///
/// Separability is a caller contract inherited from the divide step, not a
/// runtime-checked invariant; violating it yields an incorrect cycle rather
/// than a panic.
pub fn merge_hulls(hl: &Hull, hr: &Hull) -> Hull {
    let (l, r) = (hl.v.as_slice(), hr.v.as_slice());
    debug_assert!(!l.is_empty() && !r.is_empty());
    let (nl, nr) = (l.len(), r.len());
    let (i0, j0) = (rightmost(l), leftmost(r));
    let (iu, ju) = upper_tangent(l, r, i0, j0);
    let (il, jl) = lower_tangent(l, r, i0, j0);

    // CCW boundary of the union: left arc iu..=il, then right arc jl..=ju.
    let mut spliced = Vec::with_capacity(nl + nr);
    let mut k = iu;
    spliced.push(l[k]);
    while k != il {
        k = (k + 1) % nl;
        spliced.push(l[k]);
    }
    let mut k = jl;
    spliced.push(r[k]);
    while k != ju {
        k = (k + 1) % nr;
        spliced.push(r[k]);
    }

    if spliced.len() <= 2 {
        // One vertex from each arc: both hulls lie on a single line. The
        // tangent walks never move over collinear chains, so the spliced
        // pair need not span the union; take the extremes of all vertices.
        return Hull::from_vertices(extremes(l, r));
    }
    Hull::from_vertices(reduce(spliced))
}

/// Drop vertices whose cyclic neighbor turn went collinear after splicing.
fn reduce(spliced: Vec<Point>) -> Vec<Point> {
    let m = spliced.len();
    let mut kept = Vec::with_capacity(m);
    for t in 0..m {
        let prev = spliced[(t + m - 1) % m];
        let next = spliced[(t + 1) % m];
        if orient(prev, spliced[t], next) != 0.0 {
            kept.push(spliced[t]);
        }
    }
    if kept.is_empty() {
        // Fully collinear splice: keep the lexicographic extremes.
        return extremes(&spliced, &[]);
    }
    kept
}

/// Lexicographic `[min, max]` over both slices; a single vertex when they
/// coincide. `a` must be non-empty.
fn extremes(a: &[Point], b: &[Point]) -> Vec<Point> {
    debug_assert!(!a.is_empty());
    let mut lo = a[0];
    let mut hi = a[0];
    for p in a.iter().chain(b) {
        if lex_cmp(p, &lo) == Ordering::Less {
            lo = *p;
        }
        if lex_cmp(p, &hi) == Ordering::Greater {
            hi = *p;
        }
    }
    if lo == hi {
        vec![lo]
    } else {
        vec![lo, hi]
    }
}
