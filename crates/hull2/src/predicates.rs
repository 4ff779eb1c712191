//! Orientation predicate and point ordering.
//!
//! Purpose
//! - One left-turn test (`is_left_of`) that both solvers use to decide whether
//!   a candidate beats the current best next vertex. Any drift between the two
//!   solvers' notion of "left" shows up as disagreeing hulls.
//! - One total order on points (`cmp_xy`) for sorting.
//!
//! Tolerance
//! - `EPS` is absolute: it bounds the cross product and the squared-distance
//!   comparison. Inputs with coordinates of order 1..1e4 keep rounding well
//!   below it; much larger scales should pass a scaled `HullCfg::eps`.

use std::cmp::Ordering;

use crate::types::Point2;

/// Default predicate tolerance.
pub const EPS: f64 = 1e-8;

/// Classification of three points `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

/// z-component of `(b - a) × (c - a)`; positive when `c` is left of `a → b`.
///
/// The product is evaluated on the triple in `cmp_xy` order and re-signed by
/// the parity of that permutation, so every ordering of the same three points
/// rounds to the same magnitude. Without this, `cross(a, b, c)` and
/// `-cross(b, a, c)` can land on opposite sides of a tolerance band.
#[inline]
pub fn cross(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let mut t = [a, b, c];
    let mut sign = 1.0;
    for (i, j) in [(0, 1), (1, 2), (0, 1)] {
        if cmp_xy(t[j], t[i]) == Ordering::Less {
            t.swap(i, j);
            sign = -sign;
        }
    }
    sign * raw_cross(t[0], t[1], t[2])
}

#[inline]
fn raw_cross(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
}

/// Turn classification with `|cross| <= eps` treated as collinear.
#[inline]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2, eps: f64) -> Turn {
    let z = cross(a, b, c);
    if z > eps {
        Turn::Left
    } else if z < -eps {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// `c` is strictly left of `a → b`, or on that line and farther from `a` than `b`.
#[inline]
pub fn is_left_of(a: &Point2, b: &Point2, c: &Point2) -> bool {
    is_left_of_eps(a, b, c, EPS)
}

/// [`is_left_of`] with an explicit tolerance.
#[inline]
pub fn is_left_of_eps(a: &Point2, b: &Point2, c: &Point2, eps: f64) -> bool {
    let z = cross(a, b, c);
    if z > eps {
        return true;
    }
    z >= -eps && a.dist2(c) > a.dist2(b) + eps
}

/// `q` lies on the closed segment `a`–`b`: within `eps` of its line, and its
/// projection onto `a → b` within `eps` of the endpoints (both in cross-product
/// units, i.e. scaled by `|ab|`).
#[inline]
pub fn on_segment(a: &Point2, b: &Point2, q: &Point2, eps: f64) -> bool {
    if cross(a, b, q).abs() > eps {
        return false;
    }
    let ab = b.pos() - a.pos();
    let t = ab.dot(&(q.pos() - a.pos()));
    t >= -eps && t <= ab.norm_squared() + eps
}

/// Lexicographic order: by `x`, then by `y`.
///
/// NaN coordinates compare as equal (out of contract).
#[inline]
pub fn cmp_xy(a: &Point2, b: &Point2) -> Ordering {
    a.x()
        .partial_cmp(&b.x())
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y().partial_cmp(&b.y()).unwrap_or(Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn strict_left_and_right() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        assert!(is_left_of(&a, &b, &p(0.5, 1.0)));
        assert!(!is_left_of(&a, &b, &p(0.5, -1.0)));
        assert_eq!(orientation(&a, &b, &p(0.5, 1.0), EPS), Turn::Left);
        assert_eq!(orientation(&a, &b, &p(0.5, -1.0), EPS), Turn::Right);
    }

    #[test]
    fn collinear_tie_break_prefers_farther() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 2.0);
        assert!(is_left_of(&a, &b, &p(3.0, 3.0)));
        assert!(!is_left_of(&a, &b, &p(1.0, 1.0)));
        // Same distance: not a strict improvement.
        assert!(!is_left_of(&a, &b, &p(2.0, 2.0)));
        assert_eq!(orientation(&a, &b, &p(1.0, 1.0), EPS), Turn::Collinear);
    }

    #[test]
    fn near_collinear_within_eps_uses_distance() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        // cross = 1e-10, inside the tolerance band.
        let c = p(2.0, 1e-10);
        assert!(is_left_of(&a, &b, &c));
        assert!(!is_left_of(&a, &c, &b));
    }

    #[test]
    fn predicate_is_antisymmetric_off_the_line() {
        let a = p(1.0, 2.0);
        let b = p(4.0, -1.0);
        let c = p(3.0, 5.0);
        assert!(is_left_of(&a, &b, &c));
        assert!(!is_left_of(&a, &c, &b));
    }

    #[test]
    fn cross_is_exactly_antisymmetric_under_permutation() {
        let a = p(37.123456789, 18.5617283955);
        let b = p(0.3, 0.150000001);
        let c = p(99.99, 49.995000000999);
        let z = cross(&a, &b, &c);
        assert_eq!(cross(&b, &c, &a), z);
        assert_eq!(cross(&c, &a, &b), z);
        assert_eq!(cross(&b, &a, &c), -z);
        assert_eq!(cross(&a, &c, &b), -z);
        assert_eq!(cross(&c, &b, &a), -z);
    }

    #[test]
    fn on_segment_checks_line_and_extent() {
        let a = p(0.0, 0.0);
        let b = p(4.0, 2.0);
        assert!(on_segment(&a, &b, &p(2.0, 1.0), EPS));
        assert!(on_segment(&a, &b, &b, EPS));
        assert!(!on_segment(&a, &b, &p(6.0, 3.0), EPS));
        assert!(!on_segment(&a, &b, &p(-2.0, -1.0), EPS));
        assert!(!on_segment(&a, &b, &p(2.0, 1.5), EPS));
    }

    #[test]
    fn total_order_x_then_y() {
        assert_eq!(cmp_xy(&p(0.0, 5.0), &p(1.0, 0.0)), Ordering::Less);
        assert_eq!(cmp_xy(&p(1.0, 0.0), &p(1.0, 2.0)), Ordering::Less);
        assert_eq!(cmp_xy(&p(1.0, 2.0), &p(1.0, 2.0)), Ordering::Equal);
        assert_eq!(cmp_xy(&p(2.0, -9.0), &p(1.0, 9.0)), Ordering::Greater);
    }

    #[test]
    fn pixel_projection_truncates() {
        let q = p(12.9, -3.7);
        assert_eq!(q.pixel(), (12, -3));
        assert_eq!(q.x(), 12.9);
    }
}
