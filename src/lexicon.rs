use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const LEXICON_VERSION: &str = "v1";

const HIGH_ENERGY_WORDS: &[&str] = &[
    "energetic",
    "excited",
    "pump",
    "workout",
    "dance",
    "party",
    "fast",
    "intense",
    "powerful",
    "dynamic",
    "vigorous",
    "lively",
    "explosive",
    "thrilling",
    "exhilarating",
    "pumped",
    "hyped",
    "electric",
    "wild",
];

const LOW_ENERGY_WORDS: &[&str] = &[
    "calm",
    "peaceful",
    "sleep",
    "meditate",
    "quiet",
    "soft",
    "slow",
    "relaxed",
    "tranquil",
    "serene",
    "gentle",
    "mellow",
    "subdued",
    "drowsy",
    "tired",
    "lazy",
    "lethargic",
    "restful",
    "soothing",
];

/// Versioned keyword table driving the energy heuristic. Loadable from TOML
/// so the estimation policy can change without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyLexicon {
    pub version: String,
    pub high_energy: Vec<String>,
    pub low_energy: Vec<String>,
}

impl EnergyLexicon {
    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        let lexicon: EnergyLexicon = toml::from_str(contents)
            .map_err(|err| Error::Configuration(format!("malformed energy lexicon: {err}")))?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.high_energy.is_empty() || self.low_energy.is_empty() {
            return Err(Error::Configuration(
                "energy lexicon must list both high and low energy words".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EnergyLexicon {
    fn default() -> Self {
        Self {
            version: LEXICON_VERSION.to_string(),
            high_energy: HIGH_ENERGY_WORDS.iter().map(|word| (*word).to_string()).collect(),
            low_energy: LOW_ENERGY_WORDS.iter().map(|word| (*word).to_string()).collect(),
        }
    }
}
