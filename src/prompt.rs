use crate::types::{MoodCategory, MusicalParameters};

const MAX_PROMPT_INSTRUMENTS: usize = 3;

fn energy_descriptor(level: u8) -> &'static str {
    match level {
        1 => "very slow",
        2 => "slow",
        3 => "gentle",
        4 => "relaxed",
        5 => "moderate",
        6 => "upbeat",
        7 => "energetic",
        8 => "lively",
        9 => "dynamic",
        _ => "intense",
    }
}

fn mood_descriptor(mood: MoodCategory) -> &'static str {
    match mood {
        MoodCategory::Happy => "joyful and bright",
        MoodCategory::Sad => "melancholic and emotional",
        MoodCategory::Calm => "peaceful and serene",
        MoodCategory::Energetic => "dynamic and powerful",
        MoodCategory::Mysterious => "dark and atmospheric",
        MoodCategory::Romantic => "tender and loving",
    }
}

/// Render parameters into a synthesis text prompt, e.g.
/// "upbeat joyful and bright acoustic pop music with piano and guitar and
/// drums in major key at 120 BPM".
pub fn generation_prompt(parameters: &MusicalParameters) -> String {
    let instruments = parameters
        .instruments
        .iter()
        .take(MAX_PROMPT_INSTRUMENTS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" and ");
    format!(
        "{} {} {} music with {} in {} key at {} BPM",
        energy_descriptor(parameters.energy.get()),
        mood_descriptor(parameters.mood),
        parameters.genre_hint,
        instruments,
        parameters.key_quality.name(),
        parameters.tempo_bpm
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::ParameterMapper;
    use crate::types::{EnergyLevel, SentimentResult};

    #[test]
    fn renders_all_parameter_facets() {
        let parameters = ParameterMapper::new().map(
            MoodCategory::Happy,
            EnergyLevel::new(6).unwrap(),
            &SentimentResult::neutral(),
        );
        let prompt = generation_prompt(&parameters);
        assert_eq!(
            prompt,
            "upbeat joyful and bright acoustic pop music with piano and guitar and drums \
             in major key at 120 BPM"
        );
    }

    #[test]
    fn limits_prompt_to_three_instruments() {
        let mut parameters = ParameterMapper::new().map(
            MoodCategory::Calm,
            EnergyLevel::new(5).unwrap(),
            &SentimentResult::neutral(),
        );
        parameters.instruments.push("tambourine".to_string());
        let prompt = generation_prompt(&parameters);
        assert!(!prompt.contains("tambourine"));
    }
}
