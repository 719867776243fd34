//! Configuration, error and transient record types for the hull scan.
//!
//! - `HullCfg`: selects the turn rule used by the scan.
//! - `HullError`: the only failure `try_convex_hull` reports.
//! - `AngleRecord`: one polar-angle entry per non-pivot point, with a tombstone.
//!
//! Code cross-refs: `scan::{convex_hull_with, try_convex_hull}`, `turn::is_non_left_turn`

use std::fmt;

/// Predicate used to decide whether the scan evicts the top of the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnRule {
    /// Sign of the 2D cross product `(p2 - p1) × (p3 - p2)`.
    #[default]
    Orientation,
    /// Legacy interior-angle test built from squared edge lengths and `acos`.
    ///
    /// Kept for bit-compatible output with older hull tables. Fragile near
    /// coincident or collinear points: a NaN from a zero length or from an
    /// `acos` argument outside [-1, 1] reads as a left turn.
    LawOfCosines,
}

impl TurnRule {
    /// Short, stable name (used by the CLI and bindings).
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRule::Orientation => "orientation",
            TurnRule::LawOfCosines => "law-of-cosines",
        }
    }
}

impl std::str::FromStr for TurnRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orientation" => Ok(TurnRule::Orientation),
            "law-of-cosines" => Ok(TurnRule::LawOfCosines),
            other => Err(format!(
                "unknown turn rule `{other}` (expected `orientation` or `law-of-cosines`)"
            )),
        }
    }
}

impl fmt::Display for TurnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hull configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullCfg {
    pub turn_rule: TurnRule,
}

impl HullCfg {
    #[inline]
    pub fn with_rule(turn_rule: TurnRule) -> Self {
        Self { turn_rule }
    }
}

/// Errors surfaced by the validating entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// A coordinate is NaN or infinite. `index` is the first offending point.
    InvalidCoordinate { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InvalidCoordinate { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Polar angle of a point seen from the pivot. `index == None` marks a discarded point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AngleRecord {
    pub angle: f64,
    pub index: Option<usize>,
}
