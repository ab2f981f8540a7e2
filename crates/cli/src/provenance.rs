use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub vk: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, vk: None }
    }

    pub fn with_vk(mut self, vk: Option<String>) -> Self {
        self.vk = vk;
        self
    }
}

/// Write `<artifact>.provenance.json` containing the git commit, library
/// version, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    crate::squares_io::ensure_parent(&provenance_path)?;

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "lib_version": squaresplit::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "vk": payload.vk,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `out/result.json` -> `out/result.provenance.json`; extensionless paths gain
/// the suffix.
fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit the binary describes: `GIT_COMMIT` baked in at build time, then the
/// runtime `GIT_COMMIT`, then `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .chain(std::iter::once_with(rev_parse_head).flatten())
        .find(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}

fn rev_parse_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_the_last_extension() {
        assert_eq!(
            provenance_path(Path::new("/tmp/output/squares.csv")),
            Path::new("/tmp/output/squares.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("runs/split")),
            Path::new("runs/split.provenance.json")
        );
    }

    #[test]
    fn git_rev_is_never_empty() {
        assert!(!current_git_rev().is_empty());
    }

    #[test]
    fn write_sidecar_records_params_and_vk() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("split.json");
        fs::write(&artifact, "{}").unwrap();
        let payload =
            Payload::new(json!({"cmd": "split", "eps_area": 0.0})).with_vk(Some("t-1".into()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["cmd"], "split");
        assert_eq!(parsed["vk"], "t-1");
        assert_eq!(parsed["lib_version"], squaresplit::VERSION);
    }
}
