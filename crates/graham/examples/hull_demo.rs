//! Print the hull of a few seeded clouds with area and vertex counts.
//!
//! Usage:
//!   cargo run -p graham --example hull_demo -- disk
//!   cargo run -p graham --example hull_demo -- circle

use graham::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use graham::hull::{convex_hull_with, HullCfg, TurnRule};
use graham::polygon::{centroid, signed_area};
use graham::Vec2;

fn main() {
    let shape = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "disk".to_string());
    let shape: CloudShape = match shape.parse() {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("usage: hull_demo [disk|box|circle] ({msg})");
            return;
        }
    };
    let cfg = CloudCfg {
        count: 64,
        shape,
        radius: 1.0,
    };
    for i in 0..5 {
        let pts = draw_cloud(cfg, ReplayToken { seed: 2025, index: i });
        for rule in [TurnRule::Orientation, TurnRule::LawOfCosines] {
            let hull = convex_hull_with(&pts, HullCfg::with_rule(rule));
            let c = centroid(&hull).unwrap_or_else(Vec2::zeros);
            println!(
                "sample {i} [{rule}]: n={}, hull={}, area={:.6}, centroid=({:.4}, {:.4})",
                pts.len(),
                hull.len(),
                signed_area(&hull),
                c.x,
                c.y
            );
        }
    }
}
