//! Run sidecars: `<stem>.provenance.json` next to every artifact the runner writes.
//!
//! A sidecar is a typed record: who ran (`RunInfo`), what ran (`RunSummary`),
//! and which file it describes. `report` prints the same `RunInfo` block.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Build and invocation metadata shared by sidecars and `report`.
#[derive(Debug, Clone, Serialize)]
pub struct RunInfo {
    pub code_rev: String,
    pub lib_version: &'static str,
    pub tag: Option<String>,
}

impl RunInfo {
    pub fn collect(tag: Option<String>) -> Self {
        Self {
            code_rev: code_rev(),
            lib_version: graham::VERSION,
            tag,
        }
    }
}

/// What a command produced, with the numbers a reader checks first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum RunSummary {
    Hull {
        input: String,
        rule: &'static str,
        input_count: usize,
        vertex_count: usize,
        area: f64,
    },
    Sample {
        shape: &'static str,
        count: usize,
        radius: f64,
        seed: u64,
        index: u64,
    },
}

#[derive(Serialize)]
struct Sidecar<'a> {
    #[serde(flatten)]
    run: &'a RunInfo,
    summary: &'a RunSummary,
    output: String,
}

/// `out/hull.json` -> `out/hull.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Write the sidecar for `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, run: &RunInfo, summary: &RunSummary) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = Sidecar {
        run,
        summary,
        output: artifact.display().to_string(),
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else `unknown`.
fn code_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_owned),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|r| !r.is_empty())
}
