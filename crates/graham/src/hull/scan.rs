//! Graham scan over polar angles from the lowest-then-leftmost point.
//!
//! Steps
//! - Pivot: minimum y, ties broken by minimum x (first occurrence wins).
//! - Sort the remaining points by `atan2(dy, dx)` from the pivot (stable).
//! - Collapse exactly equal angles to the point farthest from the pivot.
//! - Seed the stack with the pivot and the first two survivors, then scan,
//!   popping while the top of the stack is not a left turn.
//!
//! Angles from the pivot lie in [0, π), so the sorted order is already a CCW
//! sweep and no wraparound handling is needed.

use nalgebra::Vector2;

use super::turn::is_non_left_turn;
use super::types::{AngleRecord, HullCfg, HullError};

/// Convex hull vertices in CCW order, starting at the lowest-then-leftmost point.
///
/// Returns an empty vector for fewer than 3 points, and for inputs whose points
/// all lie on one ray from the pivot (collinear or coincident; no area).
/// Non-finite coordinates never panic but give unspecified output; use
/// [`try_convex_hull`] to reject them.
///
/// Angles are compared exactly, so with non-integer coordinates a point that is
/// collinear with the pivot and a hull vertex up to rounding (for example
/// `[-5.55e-17, 0.7]`, `[0.2, 0.9]`, `[0.9, 1.6]`) can keep its own angle and
/// the result may not be strictly convex.
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    convex_hull_with(points, HullCfg::default())
}

/// [`convex_hull`] with an explicit configuration.
pub fn convex_hull_with(points: &[Vector2<f64>], cfg: HullCfg) -> Vec<Vector2<f64>> {
    convex_hull_indices_with(points, cfg)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Indices into `points` of the hull vertices, in the same order as [`convex_hull`].
pub fn convex_hull_indices(points: &[Vector2<f64>]) -> Vec<usize> {
    convex_hull_indices_with(points, HullCfg::default())
}

/// Validating entry point: rejects NaN/±∞ coordinates before scanning.
pub fn try_convex_hull(
    points: &[Vector2<f64>],
    cfg: HullCfg,
) -> Result<Vec<Vector2<f64>>, HullError> {
    check_finite(points)?;
    Ok(convex_hull_with(points, cfg))
}

/// Index variant of [`try_convex_hull`].
pub fn try_convex_hull_indices(
    points: &[Vector2<f64>],
    cfg: HullCfg,
) -> Result<Vec<usize>, HullError> {
    check_finite(points)?;
    Ok(convex_hull_indices_with(points, cfg))
}

/// [`convex_hull_indices`] with an explicit configuration.
pub fn convex_hull_indices_with(points: &[Vector2<f64>], cfg: HullCfg) -> Vec<usize> {
    if points.len() < 3 {
        return Vec::new();
    }
    let h = pivot_index(points);
    let mut records = angle_records(points, h);
    collapse_equal_angles(&mut records, points, h);
    let survivors: Vec<usize> = records.iter().filter_map(|r| r.index).collect();
    if survivors.len() < 2 {
        // Every point sits on a single ray from the pivot.
        return Vec::new();
    }

    let mut stack: Vec<usize> = Vec::with_capacity(survivors.len() + 1);
    stack.push(h);
    stack.extend_from_slice(&survivors[..2]);
    for &p in &survivors[2..] {
        // The first survivor is extreme in angle and distance, so the stack never
        // shrinks below [pivot, first survivor].
        while stack.len() > 2 {
            let top = stack.len();
            if !is_non_left_turn(cfg.turn_rule, h, stack[top - 2], stack[top - 1], p, points) {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

fn check_finite(points: &[Vector2<f64>]) -> Result<(), HullError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(HullError::InvalidCoordinate { index }),
        None => Ok(()),
    }
}

/// Lowest point, leftmost among the lowest. Requires a non-empty slice.
pub(crate) fn pivot_index(points: &[Vector2<f64>]) -> usize {
    let mut h = 0usize;
    for (i, p) in points.iter().enumerate().skip(1) {
        let q = points[h];
        if p.y < q.y || (p.y == q.y && p.x < q.x) {
            h = i;
        }
    }
    h
}

/// One record per non-pivot point, stably sorted by polar angle around `points[h]`.
///
/// Copies of the pivot itself get no record: they have no direction and would
/// otherwise reappear as a second hull vertex at the pivot.
pub(crate) fn angle_records(points: &[Vector2<f64>], h: usize) -> Vec<AngleRecord> {
    let origin = points[h];
    let mut records: Vec<AngleRecord> = points
        .iter()
        .enumerate()
        .filter(|&(i, p)| i != h && *p != origin)
        .map(|(i, p)| {
            let d = p - origin;
            AngleRecord {
                angle: d.y.atan2(d.x),
                index: Some(i),
            }
        })
        .collect();
    // total_cmp: NaN angles from non-finite input must not break the sort.
    records.sort_by(|a, b| a.angle.total_cmp(&b.angle));
    records
}

/// Tombstone all but the farthest point of each run of exactly equal angles.
///
/// Distance ties keep the earlier record, so coincident duplicates appear once.
pub(crate) fn collapse_equal_angles(
    records: &mut [AngleRecord],
    points: &[Vector2<f64>],
    h: usize,
) {
    let Some(first) = records.first() else {
        return;
    };
    let origin = points[h];
    let dist2 = |i: usize| (points[i] - origin).norm_squared();

    let mut angle = first.angle;
    // (position in `records`, point index) of the current run's keeper
    let mut keep = match first.index {
        Some(i) => (0usize, i),
        None => return,
    };
    for k in 1..records.len() {
        let Some(j) = records[k].index else {
            continue;
        };
        if records[k].angle == angle {
            if dist2(keep.1) >= dist2(j) {
                records[k].index = None;
            } else {
                records[keep.0].index = None;
                keep = (k, j);
            }
        } else {
            angle = records[k].angle;
            keep = (k, j);
        }
    }
}
