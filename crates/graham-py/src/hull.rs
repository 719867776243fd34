//! Hull bindings (kept separate so `lib.rs` stays tiny).

use graham::hull::{try_convex_hull_indices, HullCfg, TurnRule};
use graham::polygon::signed_area;
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_points(points: Vec<(f64, f64)>) -> Vec<Vector2<f64>> {
    points.into_iter().map(|(x, y)| Vector2::new(x, y)).collect()
}

fn parse_rule(rule: Option<&str>) -> PyResult<HullCfg> {
    let rule = match rule {
        Some(name) => name.parse::<TurnRule>().map_err(PyValueError::new_err)?,
        None => TurnRule::default(),
    };
    Ok(HullCfg::with_rule(rule))
}

fn hull_indices(pts: &[Vector2<f64>], rule: Option<&str>) -> PyResult<Vec<usize>> {
    let cfg = parse_rule(rule)?;
    try_convex_hull_indices(pts, cfg).map_err(|err| PyValueError::new_err(err.to_string()))
}

/// Convex hull vertices in CCW order, starting at the lowest-then-leftmost point.
#[pyfunction]
#[pyo3(signature = (points, rule=None))]
pub fn convex_hull(points: Vec<(f64, f64)>, rule: Option<&str>) -> PyResult<Vec<(f64, f64)>> {
    let pts = to_points(points);
    let idx = hull_indices(&pts, rule)?;
    Ok(idx.into_iter().map(|i| (pts[i].x, pts[i].y)).collect())
}

/// Indices of the hull vertices into `points`.
#[pyfunction]
#[pyo3(signature = (points, rule=None))]
pub fn convex_hull_indices(points: Vec<(f64, f64)>, rule: Option<&str>) -> PyResult<Vec<usize>> {
    let pts = to_points(points);
    hull_indices(&pts, rule)
}

/// Signed (shoelace) area of a polygon; positive for CCW order.
#[pyfunction]
pub fn polygon_area(poly: Vec<(f64, f64)>) -> f64 {
    signed_area(&to_points(poly))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hull_indices, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_area, m)?)?;
    Ok(())
}
