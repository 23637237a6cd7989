use crate::theory::{self, TIME_SIGNATURE};
use crate::types::{
    Dynamics, EnergyLevel, KeyQuality, MoodCategory, MusicalParameters, Sentiment,
    SentimentResult,
};

/// Deterministic mood/energy/sentiment to parameter mapping. Total function:
/// the closed mood set and the `EnergyLevel` invariant leave no failure path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterMapper;

impl ParameterMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map(
        &self,
        mood: MoodCategory,
        energy: EnergyLevel,
        sentiment: &SentimentResult,
    ) -> MusicalParameters {
        let profile = theory::profile(mood);
        let tempo_bpm =
            (i32::from(profile.base_tempo) + i32::from(tempo_adjustment(energy))) as u16;
        MusicalParameters {
            mood,
            tempo_bpm,
            key_quality: resolve_key(mood, sentiment.label),
            instruments: profile.instruments.iter().map(|name| (*name).to_string()).collect(),
            chord_progression: profile
                .chord_progression
                .iter()
                .map(|symbol| (*symbol).to_string())
                .collect(),
            energy,
            dynamics: dynamics_for(energy),
            texture: profile.texture,
            genre_hint: profile.genre_hint.to_string(),
            time_signature: TIME_SIGNATURE.to_string(),
        }
    }
}

/// Discrete tempo feel bands rather than a continuous formula.
pub fn tempo_adjustment(energy: EnergyLevel) -> i16 {
    match energy.get() {
        1..=3 => -15,
        4..=6 => 0,
        7..=8 => 10,
        _ => 20,
    }
}

pub fn dynamics_for(energy: EnergyLevel) -> Dynamics {
    match energy.get() {
        1..=3 => Dynamics::Piano,
        4..=6 => Dynamics::Mezzo,
        _ => Dynamics::Forte,
    }
}

// Sentiment picks the key, except for moods that imply one strongly enough
// to override it.
fn resolve_key(mood: MoodCategory, sentiment: Sentiment) -> KeyQuality {
    let profile = theory::profile(mood);
    if profile.key_fixed {
        return profile.key_quality;
    }
    match sentiment {
        Sentiment::Negative => KeyQuality::Minor,
        Sentiment::Positive | Sentiment::Neutral => KeyQuality::Major,
    }
}
