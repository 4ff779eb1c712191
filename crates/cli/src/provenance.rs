//! Provenance sidecars: `<artifact>.provenance.json` next to every file the CLI
//! writes, and the same block (without outputs) for `cli report`.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run parameters and tag recorded in a sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, tag: None }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

fn document(tag: Option<&str>, params: &Value, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "hull2_version": hull2::VERSION,
        "eps": hull2::EPS,
        "tag": tag,
        "params": params,
        "outputs": outputs,
    })
}

/// Provenance block without outputs, as printed by `cli report`.
pub fn describe(tag: Option<&str>) -> Value {
    document(tag, &json!({}), &[])
}

/// Write the sidecar for `artifact` and return its path.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    let doc = document(
        payload.tag.as_deref(),
        &payload.params,
        &[artifact.to_string_lossy().into_owned()],
    );
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/trials.csv` → `out/trials.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .unwrap_or(OsStr::new("artifact"))
        .to_os_string();
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` from the environment, else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
