use std::sync::Arc;

use tracing::warn;

use crate::classifier::{self, MoodReferences};
use crate::energy::EnergyEstimator;
use crate::error::Error;
use crate::mapper::ParameterMapper;
use crate::models::{SentimentModel, TextEmbedder};
use crate::types::{MoodCategory, MusicalParameters, SentimentResult};

/// Mood substituted when the embedding collaborator is unavailable.
pub const DEFAULT_MOOD: MoodCategory = MoodCategory::Calm;

/// Orchestrates sentiment, embedding, classification, energy estimation and
/// parameter mapping into one `analyze` call. Collaborator failures degrade
/// to documented defaults instead of surfacing; `analyze` always returns a
/// complete record.
pub struct MoodAnalysisPipeline {
    sentiment: Arc<dyn SentimentModel>,
    embedder: Arc<dyn TextEmbedder>,
    references: MoodReferences,
    estimator: EnergyEstimator,
    mapper: ParameterMapper,
}

impl MoodAnalysisPipeline {
    pub fn new(
        sentiment: Arc<dyn SentimentModel>,
        embedder: Arc<dyn TextEmbedder>,
        references: MoodReferences,
        estimator: EnergyEstimator,
    ) -> Self {
        Self { sentiment, embedder, references, estimator, mapper: ParameterMapper::new() }
    }

    /// Build the pipeline by precomputing mood references through the
    /// embedder. Embedder failure here is startup-fatal.
    pub fn bootstrap(
        sentiment: Arc<dyn SentimentModel>,
        embedder: Arc<dyn TextEmbedder>,
        estimator: EnergyEstimator,
    ) -> Result<Self, Error> {
        let references = MoodReferences::precompute(embedder.as_ref())?;
        Ok(Self::new(sentiment, embedder, references, estimator))
    }

    pub fn references(&self) -> &MoodReferences {
        &self.references
    }

    pub fn analyze(&self, text: &str) -> MusicalParameters {
        let sentiment = match self.sentiment.sentiment(text) {
            Ok(result) => result,
            Err(err) => {
                warn!("sentiment model unavailable, assuming neutral: {err}");
                SentimentResult::neutral()
            }
        };

        let (mood, similarity) = match self.embedder.embed(text) {
            Ok(embedding) => classifier::classify(&embedding, &self.references),
            Err(err) => {
                warn!("embedding model unavailable, defaulting to {}: {err}", DEFAULT_MOOD.name());
                (DEFAULT_MOOD, 0.0)
            }
        };
        tracing::debug!(
            mood = mood.name(),
            similarity,
            sentiment = sentiment.label.label(),
            "mood classified"
        );

        let energy = self.estimator.estimate(text, &sentiment);
        self.mapper.map(mood, energy, &sentiment)
    }
}
