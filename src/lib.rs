//! Attune maps free-text emotional descriptions to musical parameters and
//! rendered audio: sentiment and embedding models classify the mood, a
//! deterministic engine derives tempo, key, instrumentation and dynamics,
//! and a synthesis stage renders the result.

pub mod artifact;
pub mod classifier;
pub mod composer;
pub mod config;
pub mod energy;
pub mod error;
pub mod lexicon;
pub mod mapper;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod synth;
pub mod theory;
pub mod types;
pub mod worker;

pub use classifier::MoodReferences;
pub use composer::{Composer, Composition, RenderedAudio, SynthBackend};
pub use energy::EnergyEstimator;
pub use error::Error;
pub use lexicon::EnergyLexicon;
pub use mapper::ParameterMapper;
pub use models::{AudioSynthesizer, SentimentModel, TextEmbedder};
pub use pipeline::{MoodAnalysisPipeline, DEFAULT_MOOD};
pub use types::{
    AudioClip, Dynamics, EnergyLevel, KeyQuality, MoodCategory, MusicalParameters, Sentiment,
    SentimentResult, Texture,
};
