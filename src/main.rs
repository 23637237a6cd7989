use anyhow::{anyhow, bail, Context, Result};
use std::{env, fs, sync::Arc};
use tracing::{info, warn};

use attune::artifact::persist_composition;
use attune::config::AppConfig;
use attune::synth::{ChordSynthesizer, PostProcessor};
use attune::worker::WorkerClient;
use attune::{Composer, EnergyEstimator, EnergyLexicon, MoodAnalysisPipeline};

fn main() -> Result<()> {
    setup_tracing()?;

    let text = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        bail!("usage: attune <description of how you feel>");
    }

    let config = AppConfig::load()?;
    let client = Arc::new(WorkerClient::new(config.worker_url())?);
    report_worker_health(&client);

    let lexicon = match config.lexicon_path() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read lexicon at {}", path.display()))?;
            EnergyLexicon::from_toml(&contents)?
        }
        None => EnergyLexicon::default(),
    };

    let pipeline =
        MoodAnalysisPipeline::bootstrap(client.clone(), client.clone(), EnergyEstimator::new(lexicon))
            .context("failed to precompute mood reference embeddings")?;
    info!(dimension = pipeline.references().dimension(), "mood references ready");

    let fallback = config
        .offline_fallback()
        .then(|| ChordSynthesizer::new(config.sample_rate(), config.audio_duration_seconds()));
    let post = PostProcessor::new(config.volume_factor(), config.normalize_audio());
    let composer = Composer::new(pipeline, Some(client), fallback, post);

    let composition = composer.compose(&text);
    info!(
        mood = composition.parameters.mood.name(),
        energy = composition.parameters.energy.get(),
        tempo = composition.parameters.tempo_bpm,
        "analysis complete"
    );

    let artifact = persist_composition(config.artifact_dir(), &text, &composition)
        .context("failed to persist composition")?;

    println!("{}", serde_json::to_string_pretty(&composition.parameters)?);
    println!("prompt: {}", composition.prompt);
    match (&composition.audio, &artifact.audio_path) {
        (Some(rendered), Some(path)) => {
            println!(
                "audio: {} ({} Hz, {:.1}s, {} backend)",
                path.display(),
                rendered.clip.sample_rate,
                rendered.clip.duration_seconds(),
                rendered.backend.label()
            );
        }
        _ => println!("audio: unavailable (parameters saved to {})", artifact.metadata_path.display()),
    }

    Ok(())
}

fn report_worker_health(client: &WorkerClient) {
    match client.health() {
        Ok(body) => {
            let status = body.get("status").and_then(|v| v.as_str()).unwrap_or("unknown");
            let backends = body
                .get("available_backends")
                .and_then(|v| v.as_array())
                .map(|items| items.iter().filter_map(|v| v.as_str()).collect::<Vec<_>>().join(", "))
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "unknown".to_string());
            info!("worker health: {status} (backends: {backends}) @ {}", client.base_url());
        }
        Err(err) => {
            warn!("worker health check failed, degraded analysis likely: {err}");
        }
    }
}

fn setup_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err: Box<dyn std::error::Error + Send + Sync>| {
            anyhow!("failed to initialise tracing: {err}")
        })?;
    Ok(())
}
