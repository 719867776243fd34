//! 2D convex hull by Graham scan.
//!
//! Purpose
//! - Return the extremal boundary of a point cloud as the subset of input
//!   points on the hull, in CCW order starting at the lowest-then-leftmost point.
//! - Stay a pure function: no shared state, O(n) transient memory, O(n log n) time.
//!
//! Degenerate inputs
//! - Fewer than 3 points, or all points on one ray from the pivot (collinear or
//!   coincident), give an empty hull. This is defined behavior, not an error.
//! - Non-finite coordinates are rejected by `try_convex_hull`; the infallible
//!   entry points stay total but their output is unspecified for such input.
//!
//! Code cross-refs: `scan::convex_hull`, `turn::is_non_left_turn`, `types::{HullCfg, TurnRule}`
//!
//! # Example
//!
//! ```
//! use graham::hull::convex_hull;
//! use graham::Vec2;
//!
//! let points = vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(4.0, 0.0),
//!     Vec2::new(4.0, 4.0),
//!     Vec2::new(0.0, 4.0),
//!     Vec2::new(2.0, 2.0), // interior
//! ];
//! let hull = convex_hull(&points);
//! assert_eq!(hull, points[..4].to_vec());
//! ```

mod scan;
pub mod turn;
mod types;

pub use scan::{
    convex_hull, convex_hull_indices, convex_hull_indices_with, convex_hull_with,
    try_convex_hull, try_convex_hull_indices,
};
pub use turn::is_non_left_turn;
pub use types::{HullCfg, HullError, TurnRule};
