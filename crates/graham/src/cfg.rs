//! Tolerance defaults for polygon helpers (internal).
//!
//! Policy
//! - The hull scan itself is tolerance-free. These constants only guard the
//!   downstream polygon helpers against division by a vanishing area.

/// Below this absolute signed area a polygon has no usable centroid.
pub(crate) const AREA_EPS: f64 = 1e-18;
