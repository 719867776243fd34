use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graham::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use graham::hull::{try_convex_hull_indices, HullCfg, TurnRule};
use graham::polygon::signed_area;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod sidecar;

use sidecar::{write_sidecar, RunInfo, RunSummary};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a point file (.csv, .parquet or .json)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Turn predicate: `orientation` or `law-of-cosines`
        #[arg(long, default_value = "orientation")]
        rule: TurnRule,
    },
    /// Write a seeded random point cloud as JSON pairs
    Sample {
        #[arg(long, default_value = "disk")]
        shape: CloudShape,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Hull file layout.
#[derive(Debug, Serialize)]
struct HullOutput {
    rule: String,
    input_count: usize,
    hull: Vec<[f64; 2]>,
    indices: Vec<usize>,
    area: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out, rule } => hull(&input, &out, rule, cmd.tag),
        Action::Sample {
            shape,
            count,
            radius,
            seed,
            index,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                shape,
                radius,
            };
            sample(cfg, ReplayToken { seed, index }, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn hull(input: &Path, out: &Path, rule: TurnRule, tag: Option<String>) -> Result<()> {
    let pts = points::read_points(input)?;
    tracing::info!(input = %input.display(), count = pts.len(), %rule, tag = ?tag, "hull");
    let indices = try_convex_hull_indices(&pts, HullCfg::with_rule(rule))
        .with_context(|| format!("computing hull of {}", input.display()))?;
    let vertices: Vec<_> = indices.iter().map(|&i| pts[i]).collect();
    let area = signed_area(&vertices);
    if vertices.is_empty() && pts.len() >= 3 {
        tracing::warn!(count = pts.len(), "all points collinear or coincident; hull is empty");
    }
    tracing::info!(vertices = vertices.len(), area, out = %out.display(), "hull_done");

    let output = HullOutput {
        rule: rule.to_string(),
        input_count: pts.len(),
        hull: points::to_pairs(&vertices),
        indices,
        area,
    };
    points::write_json(out, &output)?;
    let summary = RunSummary::Hull {
        input: input.display().to_string(),
        rule: rule.as_str(),
        input_count: output.input_count,
        vertex_count: output.indices.len(),
        area,
    };
    write_sidecar(out, &RunInfo::collect(tag), &summary)?;
    Ok(())
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(
        shape = cfg.shape.as_str(),
        count = cfg.count,
        radius = cfg.radius,
        seed = tok.seed,
        index = tok.index,
        tag = ?tag,
        "sample"
    );
    let pts = draw_cloud(cfg, tok);
    points::write_json(out, &points::to_pairs(&pts))?;
    let summary = RunSummary::Sample {
        shape: cfg.shape.as_str(),
        count: cfg.count,
        radius: cfg.radius,
        seed: tok.seed,
        index: tok.index,
    };
    write_sidecar(out, &RunInfo::collect(tag), &summary)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_json(tag))?);
    Ok(())
}

fn report_json(tag: Option<String>) -> serde_json::Value {
    serde_json::json!({
        "run": RunInfo::collect(tag),
        "default_rule": TurnRule::default().as_str(),
        "rules": [TurnRule::Orientation.as_str(), TurnRule::LawOfCosines.as_str()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn cli_parses_hull_command() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "--tag",
            "t1",
            "hull",
            "--input",
            "a.csv",
            "--out",
            "b.json",
            "--rule",
            "law-of-cosines",
        ])
        .unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("t1"));
        match cmd.action {
            Action::Hull { rule, .. } => assert_eq!(rule, TurnRule::LawOfCosines),
            _ => panic!("expected hull"),
        }
        let bad = Cmd::try_parse_from([
            "cli", "hull", "--input", "a", "--out", "b", "--rule", "cross",
        ]);
        assert!(bad.is_err());
    }

    #[test]
    fn hull_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.json");
        fs::write(&input, "[[0,0],[4,0],[4,4],[0,4],[2,2]]").unwrap();
        let out = dir.path().join("out/hull.json");
        hull(&input, &out, TurnRule::Orientation, Some("sq".into())).unwrap();

        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["indices"], serde_json::json!([0, 1, 2, 3]));
        assert_eq!(parsed["hull"][2], serde_json::json!([4.0, 4.0]));
        assert_eq!(parsed["area"], 16.0);
        assert_eq!(parsed["input_count"], 5);
        let side: Value = serde_json::from_slice(
            &fs::read(dir.path().join("out/hull.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(side["tag"], "sq");
        assert_eq!(side["summary"]["cmd"], "hull");
        assert_eq!(side["summary"]["input_count"], 5);
        assert_eq!(side["summary"]["vertex_count"], 4);
    }

    #[test]
    fn report_carries_run_info() {
        assert!(report(Some("t".into())).is_ok());
        let obj = report_json(Some("t".into()));
        assert_eq!(obj["run"]["tag"], "t");
        assert_eq!(obj["run"]["lib_version"], graham::VERSION);
        assert_eq!(obj["default_rule"], "orientation");
    }

    #[test]
    fn hull_rejects_unknown_input_format() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.txt");
        fs::write(&input, "0 0\n1 0\n0 1\n").unwrap();
        let out = dir.path().join("hull.json");
        let err = hull(&input, &out, TurnRule::Orientation, None).unwrap_err();
        assert!(err.to_string().contains("unsupported input"), "{err:#}");
        assert!(!out.exists());
    }

    #[test]
    fn sample_is_reproducible() {
        let dir = tempdir().unwrap();
        let cfg = CloudCfg {
            count: 25,
            shape: CloudShape::Box,
            radius: 2.0,
        };
        let tok = ReplayToken { seed: 9, index: 1 };
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        sample(cfg, tok, &a, None).unwrap();
        sample(cfg, tok, &b, None).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
        assert_eq!(points::read_points(&a).unwrap().len(), 25);
    }
}
