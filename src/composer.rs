use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::AudioSynthesizer;
use crate::pipeline::MoodAnalysisPipeline;
use crate::prompt::generation_prompt;
use crate::synth::{ChordSynthesizer, PostProcessor};
use crate::types::{AudioClip, MusicalParameters};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SynthBackend {
    Worker,
    Chord,
}

impl SynthBackend {
    pub fn label(self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Chord => "chord",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedAudio {
    pub clip: AudioClip,
    pub backend: SynthBackend,
}

/// Outcome of a full compose run. Parameters and prompt are always present;
/// audio is a separate stage and its absence is an outcome, not an error.
#[derive(Debug, Clone)]
pub struct Composition {
    pub parameters: MusicalParameters,
    pub prompt: String,
    pub audio: Option<RenderedAudio>,
}

/// Two-stage orchestrator: analysis first, synthesis second. A synthesis
/// failure never discards the computed parameters.
pub struct Composer {
    pipeline: MoodAnalysisPipeline,
    worker: Option<Arc<dyn AudioSynthesizer>>,
    fallback: Option<ChordSynthesizer>,
    post: PostProcessor,
}

impl Composer {
    pub fn new(
        pipeline: MoodAnalysisPipeline,
        worker: Option<Arc<dyn AudioSynthesizer>>,
        fallback: Option<ChordSynthesizer>,
        post: PostProcessor,
    ) -> Self {
        Self { pipeline, worker, fallback, post }
    }

    pub fn pipeline(&self) -> &MoodAnalysisPipeline {
        &self.pipeline
    }

    pub fn compose(&self, text: &str) -> Composition {
        let parameters = self.pipeline.analyze(text);
        let prompt = generation_prompt(&parameters);
        let audio = self.render(&parameters);
        Composition { parameters, prompt, audio }
    }

    fn render(&self, parameters: &MusicalParameters) -> Option<RenderedAudio> {
        if let Some(worker) = &self.worker {
            match worker.synthesize(parameters) {
                Ok(clip) => {
                    let clip = self.post.process(clip, parameters.energy);
                    return Some(RenderedAudio { clip, backend: SynthBackend::Worker });
                }
                Err(err) => {
                    warn!("synthesis worker failed, trying offline renderer: {err}");
                }
            }
        }
        match &self.fallback {
            Some(synth) => match synth.synthesize(parameters) {
                Ok(clip) => {
                    let clip = self.post.process(clip, parameters.energy);
                    Some(RenderedAudio { clip, backend: SynthBackend::Chord })
                }
                Err(err) => {
                    warn!("offline renderer failed: {err}");
                    None
                }
            },
            None => {
                warn!("no synthesizer available, returning parameters without audio");
                None
            }
        }
    }
}
