//! Convex hulls of planar point sets.
//!
//! - `hull`: Graham scan (`convex_hull` and friends) and its turn predicates.
//! - `polygon`: area, centroid, convexity and containment for the hull output.
//! - `cloud`: seeded point clouds for tests, benches and the CLI.
//!
//! Points are `nalgebra::Vector2<f64>`, re-exported as `Vec2`.

mod cfg;
pub mod hull;
pub mod polygon;
pub mod cloud;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{convex_hull, convex_hull_indices, try_convex_hull, HullCfg, HullError, TurnRule};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{
        convex_hull, convex_hull_indices, convex_hull_indices_with, convex_hull_with,
        try_convex_hull, try_convex_hull_indices, HullCfg, HullError, TurnRule,
    };
    pub use crate::polygon::{centroid, contains, is_convex_ccw, signed_area};
    pub use crate::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
