//! Turn predicates for the Graham scan.
//!
//! All functions take indices into the caller's point slice:
//! `h` is the pivot (stack bottom), `p1`/`p2` the two topmost stack entries,
//! `p3` the candidate. `true` means `p2` is not a left turn and must be popped.

use nalgebra::Vector2;

use super::types::TurnRule;

/// Dispatch on `rule`.
#[inline]
pub fn is_non_left_turn(
    rule: TurnRule,
    h: usize,
    p1: usize,
    p2: usize,
    p3: usize,
    points: &[Vector2<f64>],
) -> bool {
    match rule {
        TurnRule::Orientation => is_non_left_orientation(p1, p2, p3, points),
        TurnRule::LawOfCosines => is_non_left_law_of_cosines(h, p1, p2, p3, points),
    }
}

/// Cross-product test: `(p2 - p1) × (p3 - p2) <= 0`.
///
/// Collinear triples count as non-left, so the scan drops middle points on
/// straight hull edges. The pivot does not take part.
#[inline]
pub fn is_non_left_orientation(p1: usize, p2: usize, p3: usize, points: &[Vector2<f64>]) -> bool {
    cross(points[p1], points[p2], points[p3]) <= 0.0
}

/// Interior-angle test from squared edge lengths.
///
/// With `l1=|p1p2|²`, `l2=|p2p3|²`, `l4=|h p3|²`, `l5=|h p1|²`, `l6=|h p2|²`:
/// - `a1 = ∠(h, p2, p3) = acos((l2 + l6 - l4) / (2 √(l2 l6)))`
/// - `a2 = ∠(p1, p2, h) = acos((l6 + l1 - l5) / (2 √(l6 l1)))`
///
/// `p2` is reflex (non-left) iff `a1 + a2 > π`. No clamping is applied, so a
/// NaN angle compares false and keeps `p2`.
pub fn is_non_left_law_of_cosines(
    h: usize,
    p1: usize,
    p2: usize,
    p3: usize,
    points: &[Vector2<f64>],
) -> bool {
    let l1 = (points[p2] - points[p1]).norm_squared();
    let l2 = (points[p3] - points[p2]).norm_squared();
    let l4 = (points[p3] - points[h]).norm_squared();
    let l5 = (points[p1] - points[h]).norm_squared();
    let l6 = (points[p2] - points[h]).norm_squared();
    let a1 = ((l2 + l6 - l4) / (2.0 * (l2 * l6).sqrt())).acos();
    let a2 = ((l6 + l1 - l5) / (2.0 * (l6 * l1).sqrt())).acos();
    (std::f64::consts::PI - a1 - a2) < 0.0
}

/// Twice the signed area of the triangle (a, b, c); positive for a CCW turn at b.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let bc = c - b;
    ab.x * bc.y - ab.y * bc.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn pts() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0], // 0: pivot
            vector![4.0, 0.0], // 1
            vector![4.0, 4.0], // 2
            vector![0.0, 4.0], // 3
            vector![2.0, 2.0], // 4: interior
            vector![6.0, 0.0], // 5: collinear with 0,1
        ]
    }

    #[test]
    fn convex_corner_is_left_for_both_rules() {
        let p = pts();
        for rule in [TurnRule::Orientation, TurnRule::LawOfCosines] {
            assert!(!is_non_left_turn(rule, 0, 1, 2, 3, &p), "{rule}");
        }
    }

    #[test]
    fn reflex_corner_is_non_left_for_both_rules() {
        // 0 -> 1 -> 4 -> 2 bends clockwise at 4.
        let p = pts();
        for rule in [TurnRule::Orientation, TurnRule::LawOfCosines] {
            assert!(is_non_left_turn(rule, 0, 1, 4, 2, &p), "{rule}");
        }
    }

    #[test]
    fn collinear_middle_is_evicted_by_orientation() {
        let p = pts();
        assert!(is_non_left_orientation(0, 1, 5, &p));
    }

    #[test]
    fn law_of_cosines_keeps_point_on_nan() {
        // p2 coincides with p3: l2 = 0 -> 0/0 -> NaN -> not evicted.
        let mut p = pts();
        p.push(vector![4.0, 4.0]);
        assert!(!is_non_left_law_of_cosines(0, 1, 2, 6, &p));
    }

    #[test]
    fn cross_sign_matches_orientation() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert!(cross(a, b, vector![1.0, 1.0]) > 0.0);
        assert!(cross(a, b, vector![1.0, -1.0]) < 0.0);
        assert_eq!(cross(a, b, vector![2.0, 0.0]), 0.0);
    }
}
