use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::composer::{Composition, SynthBackend};
use crate::types::MusicalParameters;

const METADATA_FILE: &str = "metadata.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub input_text: String,
    pub prompt: String,
    pub parameters: MusicalParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<SynthBackend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LocalArtifact {
    pub directory: PathBuf,
    pub audio_path: Option<PathBuf>,
    pub metadata_path: PathBuf,
}

/// Write a composition under its own directory: raw little-endian f32 PCM
/// (when audio was rendered) plus a metadata descriptor. Container encoding
/// is a downstream concern.
pub fn persist_composition(
    artifact_dir: &Path,
    input_text: &str,
    composition: &Composition,
) -> Result<LocalArtifact> {
    let created_at = Utc::now();
    let render_name = format!(
        "{}_{}",
        composition.parameters.mood.name(),
        created_at.format("%Y%m%d%H%M%S")
    );
    let directory = artifact_dir.join(&render_name);
    fs::create_dir_all(&directory)
        .with_context(|| format!("failed to create artifact dir {}", directory.display()))?;

    let audio_path = match &composition.audio {
        Some(rendered) => {
            let path = directory.join(format!("{render_name}.pcm"));
            let mut bytes = Vec::with_capacity(rendered.clip.samples.len() * 4);
            for sample in &rendered.clip.samples {
                bytes.extend_from_slice(&sample.to_le_bytes());
            }
            fs::write(&path, bytes)
                .with_context(|| format!("failed to write audio at {}", path.display()))?;
            Some(path)
        }
        None => None,
    };

    let metadata = ArtifactMetadata {
        input_text: input_text.to_string(),
        prompt: composition.prompt.clone(),
        parameters: composition.parameters.clone(),
        backend: composition.audio.as_ref().map(|rendered| rendered.backend),
        sample_rate: composition.audio.as_ref().map(|rendered| rendered.clip.sample_rate),
        duration_seconds: composition.audio.as_ref().map(|rendered| rendered.clip.duration_seconds()),
        created_at,
    };
    let metadata_path = directory.join(METADATA_FILE);
    let metadata_json =
        serde_json::to_vec_pretty(&metadata).context("failed to encode artifact metadata")?;
    fs::write(&metadata_path, metadata_json)
        .with_context(|| format!("failed to write metadata at {}", metadata_path.display()))?;

    Ok(LocalArtifact { directory, audio_path, metadata_path })
}
