use crate::error::{Result, SurveyError};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Serialize)]
pub struct ChartManifest {
    pub version: String,
    pub generated_at: String,
    pub charts: Vec<ChartEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartEntry {
    pub category: String,
    pub file: String,
    pub mime: String,
    pub bytes: usize,
    pub sha256: String,
}

impl ChartManifest {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            charts: Vec::new(),
        }
    }

    pub fn record(&mut self, category: &str, file: &str, mime: &str, data: &[u8]) {
        self.charts.push(ChartEntry {
            category: category.to_string(),
            file: file.to_string(),
            mime: mime.to_string(),
            bytes: data.len(),
            sha256: sha256_hex(data),
        });
    }
}

impl Default for ChartManifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes chart bytes under `dir`, creating it when needed.
pub fn write_chart(dir: &Path, file: &str, data: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(SurveyError::Io)?;
    let out_path = dir.join(file);
    fs::write(&out_path, data).map_err(SurveyError::Io)?;
    Ok(out_path)
}

pub fn write_manifest(dir: &Path, manifest: &ChartManifest) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(SurveyError::Io)?;
    let out_path = dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&out_path, json).map_err(SurveyError::Io)?;
    Ok(out_path)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
