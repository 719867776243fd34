//! Seeded random point clouds for property tests, benches and the CLI.
//!
//! Model
//! - `CloudShape::Disk`: uniform in the disk of radius `radius` (sqrt radial law).
//! - `CloudShape::Box`: uniform in the square `[-radius, radius]²`.
//! - `CloudShape::Circle`: on the circle of radius `radius`, so every point is
//!   a hull vertex (worst case for the scan's output size).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point-cloud distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CloudShape {
    #[default]
    Disk,
    Box,
    Circle,
}

impl CloudShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudShape::Disk => "disk",
            CloudShape::Box => "box",
            CloudShape::Circle => "circle",
        }
    }
}

impl std::str::FromStr for CloudShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disk" => Ok(CloudShape::Disk),
            "box" => Ok(CloudShape::Box),
            "circle" => Ok(CloudShape::Circle),
            other => Err(format!(
                "unknown cloud shape `{other}` (expected disk, box or circle)"
            )),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Disk/circle radius or box half-width. Non-positive values fall back to 1.
    pub radius: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: CloudShape::Disk,
            radius: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points. The same `(cfg, tok)` always yields the same cloud.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let r = if cfg.radius.is_finite() && cfg.radius > 0.0 {
        cfg.radius
    } else {
        1.0
    };
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Disk => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                let rho = r * rng.gen::<f64>().sqrt();
                Vector2::new(rho * th.cos(), rho * th.sin())
            }
            CloudShape::Box => Vector2::new(rng.gen_range(-r..r), rng.gen_range(-r..r)),
            CloudShape::Circle => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Vector2::new(r * th.cos(), r * th.sin())
            }
        })
        .collect()
}
