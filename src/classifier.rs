use std::collections::BTreeMap;

use crate::error::Error;
use crate::models::TextEmbedder;
use crate::theory::reference_description;
use crate::types::MoodCategory;

/// Two candidates within this distance of the best similarity are treated as
/// tied and resolved by mood name order.
const TIE_EPSILON: f32 = 1e-6;

/// Validated set of reference embeddings, one per mood category. Built once
/// at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct MoodReferences {
    vectors: BTreeMap<MoodCategory, Vec<f32>>,
}

impl MoodReferences {
    pub fn new(vectors: BTreeMap<MoodCategory, Vec<f32>>) -> Result<Self, Error> {
        if vectors.is_empty() {
            return Err(Error::Configuration("mood reference set is empty".to_string()));
        }
        for mood in MoodCategory::ALL {
            let Some(vector) = vectors.get(&mood) else {
                return Err(Error::Configuration(format!(
                    "missing reference embedding for mood '{}'",
                    mood.name()
                )));
            };
            if vector.is_empty() {
                return Err(Error::Configuration(format!(
                    "reference embedding for mood '{}' is empty",
                    mood.name()
                )));
            }
        }
        let dimension = vectors.values().next().map(Vec::len).unwrap_or(0);
        if vectors.values().any(|vector| vector.len() != dimension) {
            return Err(Error::Configuration(
                "mood reference embeddings have inconsistent dimensions".to_string(),
            ));
        }
        Ok(Self { vectors })
    }

    /// Embed the six fixed mood descriptions through the collaborator. Any
    /// embedder failure here is startup-fatal for the caller.
    pub fn precompute(embedder: &dyn TextEmbedder) -> Result<Self, Error> {
        let mut vectors = BTreeMap::new();
        for mood in MoodCategory::ALL {
            let vector = embedder.embed(reference_description(mood))?;
            vectors.insert(mood, vector);
        }
        Self::new(vectors)
    }

    pub fn dimension(&self) -> usize {
        self.vectors.values().next().map(Vec::len).unwrap_or(0)
    }

    fn iter(&self) -> impl Iterator<Item = (MoodCategory, &[f32])> {
        self.vectors.iter().map(|(mood, vector)| (*mood, vector.as_slice()))
    }
}

/// Pick the mood whose reference embedding is most similar to the input.
/// Candidates within `TIE_EPSILON` of the maximum resolve to the
/// lexicographically-first mood name, so repeated calls are reproducible.
pub fn classify(embedding: &[f32], references: &MoodReferences) -> (MoodCategory, f32) {
    let scores: Vec<(MoodCategory, f32)> = references
        .iter()
        .map(|(mood, reference)| (mood, cosine_similarity(embedding, reference)))
        .collect();
    let maximum =
        scores.iter().map(|(_, similarity)| *similarity).fold(f32::NEG_INFINITY, f32::max);
    scores
        .into_iter()
        .find(|(_, similarity)| maximum - *similarity <= TIE_EPSILON)
        .unwrap_or((MoodCategory::Calm, 0.0))
}

/// Cosine similarity in [-1, 1]. Degenerate inputs (mismatched dimensions or
/// zero norm) score 0.0 rather than erroring.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn references_from(pairs: &[(MoodCategory, Vec<f32>)]) -> MoodReferences {
        let mut map = BTreeMap::new();
        for (mood, vector) in pairs {
            map.insert(*mood, vector.clone());
        }
        for mood in MoodCategory::ALL {
            map.entry(mood).or_insert_with(|| vec![0.0, 0.0, 1.0]);
        }
        MoodReferences::new(map).unwrap()
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let similarity = cosine_similarity(&[0.5, 0.5, 0.1], &[0.5, 0.5, 0.1]);
        assert!((similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn cosine_handles_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn picks_the_most_similar_mood() {
        let references = references_from(&[
            (MoodCategory::Happy, vec![1.0, 0.0, 0.0]),
            (MoodCategory::Sad, vec![0.0, 1.0, 0.0]),
        ]);
        let (mood, similarity) = classify(&[0.9, 0.1, 0.0], &references);
        assert_eq!(mood, MoodCategory::Happy);
        assert!(similarity > 0.9);
    }

    #[test]
    fn tie_breaks_to_lexicographically_first_mood() {
        // Energetic and sad share one reference vector; energetic sorts first.
        let shared = vec![1.0, 0.0, 0.0];
        let references = references_from(&[
            (MoodCategory::Energetic, shared.clone()),
            (MoodCategory::Sad, shared),
        ]);
        for _ in 0..10 {
            let (mood, _) = classify(&[1.0, 0.0, 0.0], &references);
            assert_eq!(mood, MoodCategory::Energetic);
        }
    }

    #[test]
    fn zero_embedding_resolves_to_first_mood_name() {
        let references = references_from(&[]);
        let (mood, similarity) = classify(&[0.0, 0.0, 0.0], &references);
        assert_eq!(mood, MoodCategory::Calm);
        assert_eq!(similarity, 0.0);
    }

    #[test]
    fn rejects_incomplete_reference_sets() {
        let mut map = BTreeMap::new();
        map.insert(MoodCategory::Happy, vec![1.0, 0.0]);
        assert!(MoodReferences::new(map).is_err());
        assert!(MoodReferences::new(BTreeMap::new()).is_err());
    }

    #[test]
    fn rejects_inconsistent_dimensions() {
        let mut map = BTreeMap::new();
        for mood in MoodCategory::ALL {
            map.insert(mood, vec![1.0, 0.0]);
        }
        map.insert(MoodCategory::Sad, vec![1.0, 0.0, 0.0]);
        assert!(MoodReferences::new(map).is_err());
    }
}
