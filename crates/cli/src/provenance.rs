//! Run metadata stored beside each `find` output, so a records file can be
//! traced back to its input, threshold and build.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Debug, Serialize)]
struct Sidecar<'a, P: Serialize> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    params: &'a P,
    outputs: Vec<String>,
}

/// Write the sidecar for `records`; returns its path (see `sidecar_path`).
#[track_caller]
pub fn write_sidecar<P: Serialize>(records: &Path, params: &P) -> Result<PathBuf> {
    let caller = Location::caller();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        version: collinear::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params,
        outputs: vec![records.to_string_lossy().into_owned()],
    };
    let path = sidecar_path(records);
    let body = serde_json::to_vec_pretty(&sidecar)?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/groups.csv` → `out/groups.provenance.json`.
fn sidecar_path(records: &Path) -> PathBuf {
    let stem = records
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "groups".to_string());
    records.with_file_name(format!("{stem}.provenance.json"))
}

/// Build commit: `GIT_COMMIT` at compile time, then at runtime, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .filter(|s| !s.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
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
