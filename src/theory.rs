use crate::types::{Dynamics, KeyQuality, MoodCategory, Texture};

pub const TIME_SIGNATURE: &str = "4/4";

/// Static theory profile for one mood. `key_fixed` marks moods that imply a
/// key quality strongly enough to override sentiment.
pub struct MoodProfile {
    pub base_tempo: u16,
    pub key_quality: KeyQuality,
    pub key_fixed: bool,
    pub instruments: &'static [&'static str],
    pub chord_progression: &'static [&'static str],
    pub dynamics_range: (Dynamics, Dynamics),
    pub texture: Texture,
    pub genre_hint: &'static str,
}

const HAPPY: MoodProfile = MoodProfile {
    base_tempo: 120,
    key_quality: KeyQuality::Major,
    key_fixed: true,
    instruments: &["piano", "guitar", "drums"],
    chord_progression: &["I", "IV", "V", "I"],
    dynamics_range: (Dynamics::Mezzo, Dynamics::Forte),
    texture: Texture::Homophonic,
    genre_hint: "acoustic pop",
};

const SAD: MoodProfile = MoodProfile {
    base_tempo: 70,
    key_quality: KeyQuality::Minor,
    key_fixed: true,
    instruments: &["piano", "strings", "cello"],
    chord_progression: &["i", "iv", "v", "i"],
    dynamics_range: (Dynamics::Piano, Dynamics::Mezzo),
    texture: Texture::Homophonic,
    genre_hint: "blues",
};

const CALM: MoodProfile = MoodProfile {
    base_tempo: 80,
    key_quality: KeyQuality::Major,
    key_fixed: false,
    instruments: &["piano", "flute", "soft strings"],
    chord_progression: &["I", "vi", "IV", "V"],
    dynamics_range: (Dynamics::Piano, Dynamics::Mezzo),
    texture: Texture::Monophonic,
    genre_hint: "classical",
};

const ENERGETIC: MoodProfile = MoodProfile {
    base_tempo: 140,
    key_quality: KeyQuality::Major,
    key_fixed: true,
    instruments: &["electric guitar", "drums", "bass"],
    chord_progression: &["I", "V", "vi", "IV"],
    dynamics_range: (Dynamics::Mezzo, Dynamics::Forte),
    texture: Texture::Polyphonic,
    genre_hint: "rock",
};

const MYSTERIOUS: MoodProfile = MoodProfile {
    base_tempo: 90,
    key_quality: KeyQuality::Minor,
    key_fixed: true,
    instruments: &["synth", "dark strings", "ambient"],
    chord_progression: &["i", "VI", "III", "VII"],
    dynamics_range: (Dynamics::Piano, Dynamics::Forte),
    texture: Texture::Homophonic,
    genre_hint: "cinematic",
};

const ROMANTIC: MoodProfile = MoodProfile {
    base_tempo: 85,
    key_quality: KeyQuality::Major,
    key_fixed: false,
    instruments: &["piano", "violin", "soft guitar"],
    chord_progression: &["I", "vi", "ii", "V"],
    dynamics_range: (Dynamics::Piano, Dynamics::Mezzo),
    texture: Texture::Homophonic,
    genre_hint: "ballad",
};

pub fn profile(mood: MoodCategory) -> &'static MoodProfile {
    match mood {
        MoodCategory::Happy => &HAPPY,
        MoodCategory::Sad => &SAD,
        MoodCategory::Calm => &CALM,
        MoodCategory::Energetic => &ENERGETIC,
        MoodCategory::Mysterious => &MYSTERIOUS,
        MoodCategory::Romantic => &ROMANTIC,
    }
}

/// Fixed description strings embedded once at startup to build the mood
/// reference vectors.
pub fn reference_description(mood: MoodCategory) -> &'static str {
    match mood {
        MoodCategory::Happy => "joyful cheerful upbeat positive energetic bright excited elated",
        MoodCategory::Sad => "melancholy sorrowful depressed gloomy downcast dejected mournful",
        MoodCategory::Calm => "peaceful tranquil serene relaxed meditative quiet soothing restful",
        MoodCategory::Energetic => {
            "dynamic powerful intense vigorous exciting vibrant lively spirited"
        }
        MoodCategory::Mysterious => {
            "enigmatic dark atmospheric suspenseful eerie cryptic shadowy unknown"
        }
        MoodCategory::Romantic => {
            "loving tender passionate intimate gentle warm affectionate devoted"
        }
    }
}
