use crate::error::Error;
use crate::types::{AudioClip, MusicalParameters, SentimentResult};

/// Polarity classifier collaborator. Implementations are treated as pure
/// functions of their input text.
pub trait SentimentModel: Send + Sync {
    fn sentiment(&self, text: &str) -> Result<SentimentResult, Error>;
}

/// Text-to-vector collaborator producing fixed-dimension embeddings.
pub trait TextEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, Error>;
}

/// Parameters-to-audio collaborator. May be unavailable; callers decide
/// whether to fall back or surface a no-audio outcome.
pub trait AudioSynthesizer: Send + Sync {
    fn synthesize(&self, parameters: &MusicalParameters) -> Result<AudioClip, Error>;
}
