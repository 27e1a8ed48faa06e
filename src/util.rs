use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};

pub fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

pub fn default_report_stem(ts: DateTime<Local>) -> String {
    format!("informe_5109_{}", ts.format("%Y%m%d"))
}

static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("file-name regex is valid"));

/// Keeps `[A-Za-z0-9._-]`, collapsing everything else to `_`, and drops a trailing extension
/// the user may have typed.
pub fn sanitize_file_stem(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let without_ext = trimmed
        .strip_suffix(".pdf")
        .or_else(|| trimmed.strip_suffix(".json"))
        .unwrap_or(trimmed);
    let cleaned = UNSAFE_FILE_CHARS.replace_all(without_ext, "_");
    let cleaned = cleaned.trim_matches(|c: char| c == '_' || c == '.');

    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn sha256_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_vec_pretty(value)
        .with_context(|| format!("failed to serialize json: {}", path.display()))?;
    write_file(path, &data)
}

pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let mut file =
        File::create(path).with_context(|| format!("failed to create file: {}", path.display()))?;
    file.write_all(data)
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    if !data.ends_with(b"\n") {
        file.write_all(b"\n")
            .with_context(|| format!("failed to finalize file: {}", path.display()))?;
    }

    Ok(())
}
