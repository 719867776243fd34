//! Helpers for CCW convex polygons as returned by `hull::convex_hull`.
//!
//! - `signed_area`: shoelace formula, positive for CCW order.
//! - `centroid`: area centroid, `None` when the area vanishes.
//! - `is_convex_ccw`: every cyclic triple turns strictly left.
//! - `contains`: closed containment with slack `eps`.

use nalgebra::Vector2;

use crate::cfg::AREA_EPS;
use crate::hull::turn::cross;

/// Signed area (shoelace). Positive for CCW, negative for CW, 0 for < 3 vertices.
pub fn signed_area(poly: &[Vector2<f64>]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let n = poly.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let p = poly[i];
            let q = poly[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    0.5 * twice
}

/// Area centroid of a simple polygon.
pub fn centroid(poly: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if poly.len() < 3 {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..poly.len() {
        let p = poly[i];
        let q = poly[(i + 1) % poly.len()];
        let c = p.x * q.y - q.x * p.y;
        a += c;
        cx += (p.x + q.x) * c;
        cy += (p.y + q.y) * c;
    }
    a *= 0.5;
    if a.abs() < AREA_EPS {
        return None;
    }
    Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}

/// True iff `poly` has at least 3 vertices and turns strictly left at each one.
pub fn is_convex_ccw(poly: &[Vector2<f64>]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| cross(poly[i], poly[(i + 1) % n], poly[(i + 2) % n]) > 0.0)
}

/// Closed containment test for a CCW convex polygon.
///
/// `p` is inside when it lies left of (or within `eps` of) every edge line.
/// `eps` is an absolute distance. Always false for fewer than 3 vertices.
pub fn contains(poly: &[Vector2<f64>], p: Vector2<f64>, eps: f64) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        let edge = b - a;
        let len = edge.norm();
        if len == 0.0 {
            return true;
        }
        // signed distance of p to the edge line, positive on the left
        let d = (edge.x * (p.y - a.y) - edge.y * (p.x - a.x)) / len;
        d >= -eps
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
        ]
    }

    #[test]
    fn area_sign_follows_orientation() {
        let sq = square();
        assert!((signed_area(&sq) - 16.0).abs() < 1e-12);
        let rev: Vec<_> = sq.iter().rev().copied().collect();
        assert!((signed_area(&rev) + 16.0).abs() < 1e-12);
        assert_eq!(signed_area(&sq[..2]), 0.0);
    }

    #[test]
    fn centroid_of_square_and_degenerate() {
        let c = centroid(&square()).unwrap();
        assert!((c - vector![2.0, 2.0]).norm() < 1e-12);
        let flat = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert!(centroid(&flat).is_none());
    }

    #[test]
    fn convexity_rejects_reflex_and_collinear() {
        assert!(is_convex_ccw(&square()));
        let arrow = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 1.0],
            vector![4.0, 4.0],
        ];
        assert!(!is_convex_ccw(&arrow));
        let with_mid = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
        ];
        assert!(!is_convex_ccw(&with_mid));
        let cw: Vec<_> = square().into_iter().rev().collect();
        assert!(!is_convex_ccw(&cw));
    }

    #[test]
    fn containment_is_closed() {
        let sq = square();
        assert!(contains(&sq, vector![2.0, 2.0], 0.0));
        assert!(contains(&sq, vector![4.0, 2.0], 0.0));
        assert!(contains(&sq, vector![0.0, 0.0], 0.0));
        assert!(!contains(&sq, vector![4.1, 2.0], 0.0));
        assert!(contains(&sq, vector![4.0 + 1e-10, 2.0], 1e-9));
        assert!(!contains(&sq[..2], vector![1.0, 0.0], 1.0));
    }
}
