use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Closed set of mood categories. Declaration order is lexicographic by name
/// so the derived `Ord` matches the classifier's tie-break order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Calm,
    Energetic,
    Happy,
    Mysterious,
    Romantic,
    Sad,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 6] = [
        MoodCategory::Calm,
        MoodCategory::Energetic,
        MoodCategory::Happy,
        MoodCategory::Mysterious,
        MoodCategory::Romantic,
        MoodCategory::Sad,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Happy => "happy",
            Self::Mysterious => "mysterious",
            Self::Romantic => "romantic",
            Self::Sad => "sad",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SentimentResult {
    pub label: Sentiment,
    pub confidence: f32,
}

impl SentimentResult {
    pub fn new(label: Sentiment, confidence: f32) -> Self {
        Self { label, confidence: confidence.clamp(0.0, 1.0) }
    }

    /// Neutral zero-confidence result substituted when the sentiment
    /// collaborator is unavailable.
    pub fn neutral() -> Self {
        Self { label: Sentiment::Neutral, confidence: 0.0 }
    }
}

/// Perceived intensity on a 1-10 scale. Values outside the range are
/// unrepresentable once constructed.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct EnergyLevel(u8);

impl EnergyLevel {
    pub const MIN: EnergyLevel = EnergyLevel(1);
    pub const MAX: EnergyLevel = EnergyLevel(10);

    pub fn new(value: u8) -> Result<Self, Error> {
        if (1..=10).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::Validation(format!("energy level {value} outside 1-10")))
        }
    }

    /// Saturating constructor used by the estimator after keyword arithmetic.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(1, 10) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeyQuality {
    Major,
    Minor,
}

impl KeyQuality {
    pub fn name(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Dynamics {
    Piano,
    Mezzo,
    Forte,
}

impl Dynamics {
    pub fn label(self) -> &'static str {
        match self {
            Self::Piano => "piano",
            Self::Mezzo => "mezzo",
            Self::Forte => "forte",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    Monophonic,
    Homophonic,
    Polyphonic,
}

impl Texture {
    pub fn label(self) -> &'static str {
        match self {
            Self::Monophonic => "monophonic",
            Self::Homophonic => "homophonic",
            Self::Polyphonic => "polyphonic",
        }
    }
}

/// Complete structured output of the analysis pipeline. Every field is
/// populated; no partial records exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MusicalParameters {
    pub mood: MoodCategory,
    pub tempo_bpm: u16,
    pub key_quality: KeyQuality,
    pub instruments: Vec<String>,
    pub chord_progression: Vec<String>,
    pub energy: EnergyLevel,
    pub dynamics: Dynamics,
    pub texture: Texture,
    pub genre_hint: String,
    pub time_signature: String,
}

/// Raw rendered audio as produced by a synthesizer, before any container
/// encoding. Mono samples in [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioClip {
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_level_rejects_out_of_range() {
        assert!(EnergyLevel::new(0).is_err());
        assert!(EnergyLevel::new(11).is_err());
        assert_eq!(EnergyLevel::new(1).unwrap(), EnergyLevel::MIN);
        assert_eq!(EnergyLevel::new(10).unwrap(), EnergyLevel::MAX);
    }

    #[test]
    fn energy_level_clamps_arithmetic_overflow() {
        assert_eq!(EnergyLevel::clamped(-3).get(), 1);
        assert_eq!(EnergyLevel::clamped(0).get(), 1);
        assert_eq!(EnergyLevel::clamped(5).get(), 5);
        assert_eq!(EnergyLevel::clamped(14).get(), 10);
    }

    #[test]
    fn mood_order_is_lexicographic() {
        let mut sorted = MoodCategory::ALL;
        sorted.sort();
        let names: Vec<&str> = sorted.iter().map(|mood| mood.name()).collect();
        let mut expected = names.clone();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn sentiment_result_clamps_confidence() {
        assert_eq!(SentimentResult::new(Sentiment::Positive, 1.7).confidence, 1.0);
        assert_eq!(SentimentResult::new(Sentiment::Negative, -0.2).confidence, 0.0);
    }
}
