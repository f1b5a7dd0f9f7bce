//! Provenance sidecar written next to each results file.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Input files a results file was computed from.
#[derive(Debug, Serialize)]
pub struct Inputs {
    pub points: String,
    pub polygons: String,
}

impl Inputs {
    pub fn new(points: &Path, polygons: &Path) -> Self {
        Self {
            points: points.to_string_lossy().into_owned(),
            polygons: polygons.to_string_lossy().into_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Debug, Serialize)]
struct Record<'a, S: Serialize> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    inputs: &'a Inputs,
    summary: &'a S,
    outputs: [String; 1],
}

/// Write `<results-stem>.provenance.json` recording the code revision, the
/// callsite, the inputs, the run summary and the results path.
#[track_caller]
pub fn write_sidecar<S: Serialize>(
    results: &Path,
    inputs: &Inputs,
    summary: &S,
) -> Result<PathBuf> {
    let caller = Location::caller();
    let record = Record {
        code_rev: current_git_rev(),
        version: winding::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        inputs,
        summary,
        outputs: [results.to_string_lossy().into_owned()],
    };
    let path = sidecar_path(results);
    // Parent directory exists: the results file was written first.
    fs::write(&path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `Output-File/Results.txt` → `Output-File/Results.provenance.json`.
fn sidecar_path(results: &Path) -> PathBuf {
    results.with_extension("provenance.json")
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
