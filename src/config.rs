use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_CONFIG_PATH: &str = "ATTUNE_CONFIG_PATH";
const ENV_WORKER_URL: &str = "ATTUNE_WORKER_URL";
const ENV_ARTIFACT_DIR: &str = "ATTUNE_ARTIFACT_DIR";
const ENV_AUDIO_DURATION: &str = "ATTUNE_AUDIO_DURATION";
const ENV_LEXICON_PATH: &str = "ATTUNE_LEXICON_PATH";

const DEFAULT_SAMPLE_RATE: u32 = 32_000;
const DEFAULT_DURATION_SECONDS: u32 = 30;
const DEFAULT_VOLUME_FACTOR: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct AppConfig {
    worker_url: Option<String>,
    artifact_dir: PathBuf,
    sample_rate: u32,
    audio_duration_seconds: u32,
    volume_factor: f32,
    normalize_audio: bool,
    offline_fallback: bool,
    lexicon_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = config_file_override()? {
            if path.exists() {
                config.apply_partial(read_partial(&path)?);
            }
        } else {
            let path = Self::default_config_path()?;
            if path.exists() {
                config.apply_partial(read_partial(&path)?);
            }
        }

        config.apply_env()?;
        Ok(config)
    }

    pub fn worker_url(&self) -> Option<&str> {
        self.worker_url.as_deref()
    }

    pub fn artifact_dir(&self) -> &PathBuf {
        &self.artifact_dir
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn audio_duration_seconds(&self) -> u32 {
        self.audio_duration_seconds
    }

    pub fn volume_factor(&self) -> f32 {
        self.volume_factor
    }

    pub fn normalize_audio(&self) -> bool {
        self.normalize_audio
    }

    pub fn offline_fallback(&self) -> bool {
        self.offline_fallback
    }

    pub fn lexicon_path(&self) -> Option<&Path> {
        self.lexicon_path.as_deref()
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "Attune", "Attune")
            .ok_or_else(|| anyhow!("unable to determine config directory"))?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    fn apply_partial(&mut self, partial: PartialConfig) {
        if let Some(url) = partial.worker_url {
            self.worker_url = Some(url);
        }
        if let Some(dir) = partial.artifact_dir {
            self.artifact_dir = dir;
        }
        if let Some(rate) = partial.sample_rate {
            self.sample_rate = rate;
        }
        if let Some(duration) = partial.audio_duration_seconds {
            self.audio_duration_seconds = duration;
        }
        if let Some(factor) = partial.volume_factor {
            self.volume_factor = factor;
        }
        if let Some(normalize) = partial.normalize_audio {
            self.normalize_audio = normalize;
        }
        if let Some(fallback) = partial.offline_fallback {
            self.offline_fallback = fallback;
        }
        if let Some(path) = partial.lexicon_path {
            self.lexicon_path = Some(path);
        }
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(value) = env::var(ENV_WORKER_URL) {
            if value.trim().is_empty() {
                self.worker_url = None;
            } else {
                self.worker_url = Some(value);
            }
        }
        if let Ok(value) = env::var(ENV_ARTIFACT_DIR) {
            if !value.trim().is_empty() {
                self.artifact_dir = PathBuf::from(value);
            }
        }
        if let Ok(value) = env::var(ENV_AUDIO_DURATION) {
            if !value.trim().is_empty() {
                let parsed = value
                    .parse::<u32>()
                    .context("ATTUNE_AUDIO_DURATION must be an integer number of seconds")?;
                self.audio_duration_seconds = parsed;
            }
        }
        if let Ok(value) = env::var(ENV_LEXICON_PATH) {
            if !value.trim().is_empty() {
                self.lexicon_path = Some(PathBuf::from(value));
            }
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            worker_url: None,
            artifact_dir: default_artifact_dir(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            audio_duration_seconds: DEFAULT_DURATION_SECONDS,
            volume_factor: DEFAULT_VOLUME_FACTOR,
            normalize_audio: true,
            offline_fallback: true,
            lexicon_path: None,
        }
    }
}

fn config_file_override() -> Result<Option<PathBuf>> {
    if let Some(value) = env::var_os(ENV_CONFIG_PATH) {
        if value.is_empty() {
            return Ok(None);
        }
        let path = PathBuf::from(value);
        if path.is_dir() {
            return Ok(Some(path.join(CONFIG_FILE_NAME)));
        }
        return Ok(Some(path));
    }
    Ok(None)
}

fn read_partial(path: &Path) -> Result<PartialConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let partial: PartialConfig =
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(partial)
}

fn default_artifact_dir() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join("Music").join("Attune"))
        .unwrap_or_else(|| PathBuf::from("./artifacts"))
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PartialConfig {
    worker_url: Option<String>,
    artifact_dir: Option<PathBuf>,
    sample_rate: Option<u32>,
    audio_duration_seconds: Option<u32>,
    volume_factor: Option<f32>,
    normalize_audio: Option<bool>,
    offline_fallback: Option<bool>,
    lexicon_path: Option<PathBuf>,
}
