use std::collections::HashSet;

use crate::lexicon::EnergyLexicon;
use crate::types::{EnergyLevel, Sentiment, SentimentResult};

const POSITIVE_BASE: i32 = 6;
const NEUTRAL_BASE: i32 = 5;
const NEGATIVE_BASE: i32 = 4;

/// Keyword-and-sentiment energy heuristic. Total function: every input maps
/// to a level in 1..=10.
#[derive(Debug, Clone)]
pub struct EnergyEstimator {
    lexicon: EnergyLexicon,
}

impl EnergyEstimator {
    pub fn new(lexicon: EnergyLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &EnergyLexicon {
        &self.lexicon
    }

    /// Sentiment sets the base (positive 6, neutral 5, negative 4); each
    /// matched lexicon word shifts it by exactly one; the result clamps to
    /// 1..=10.
    pub fn estimate(&self, text: &str, sentiment: &SentimentResult) -> EnergyLevel {
        let words = tokenize(text);
        let high = count_matches(&words, &self.lexicon.high_energy);
        let low = count_matches(&words, &self.lexicon.low_energy);
        let base = match sentiment.label {
            Sentiment::Positive => POSITIVE_BASE,
            Sentiment::Neutral => NEUTRAL_BASE,
            Sentiment::Negative => NEGATIVE_BASE,
        };
        EnergyLevel::clamped(base + high - low)
    }
}

impl Default for EnergyEstimator {
    fn default() -> Self {
        Self::new(EnergyLexicon::default())
    }
}

// Word-boundary tokenization: runs of alphanumeric characters, lowercased,
// so "dance!" matches "dance" but "abundance" does not.
fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}

fn count_matches(words: &HashSet<String>, lexicon_side: &[String]) -> i32 {
    lexicon_side.iter().filter(|word| words.contains(word.to_lowercase().as_str())).count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment(label: Sentiment) -> SentimentResult {
        SentimentResult::new(label, 0.9)
    }

    #[test]
    fn empty_text_returns_sentiment_base() {
        let estimator = EnergyEstimator::default();
        assert_eq!(estimator.estimate("", &sentiment(Sentiment::Neutral)).get(), 5);
        assert_eq!(estimator.estimate("", &sentiment(Sentiment::Positive)).get(), 6);
        assert_eq!(estimator.estimate("", &sentiment(Sentiment::Negative)).get(), 4);
    }

    #[test]
    fn high_energy_keywords_raise_the_level() {
        let estimator = EnergyEstimator::default();
        let level = estimator.estimate(
            "ready for an intense workout, time to dance",
            &sentiment(Sentiment::Positive),
        );
        // base 6 + workout + intense + dance
        assert_eq!(level.get(), 9);
    }

    #[test]
    fn low_energy_keywords_lower_the_level() {
        let estimator = EnergyEstimator::default();
        let level =
            estimator.estimate("quiet, gentle and soothing please", &sentiment(Sentiment::Negative));
        // base 4 - quiet - gentle - soothing
        assert_eq!(level.get(), 1);
    }

    #[test]
    fn matching_respects_word_boundaries() {
        let estimator = EnergyEstimator::default();
        // "abundance" contains "dance" but is not the word "dance".
        let level = estimator.estimate("an abundance of feelings", &sentiment(Sentiment::Neutral));
        assert_eq!(level.get(), 5);
        let level = estimator.estimate("Dance, DANCE!", &sentiment(Sentiment::Neutral));
        assert_eq!(level.get(), 6);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let estimator = EnergyEstimator::default();
        let once = estimator.estimate("party", &sentiment(Sentiment::Neutral));
        let thrice = estimator.estimate("party party party", &sentiment(Sentiment::Neutral));
        assert_eq!(once, thrice);
    }

    #[test]
    fn result_clamps_to_upper_bound() {
        let estimator = EnergyEstimator::default();
        let level = estimator.estimate(
            "excited pumped hyped wild explosive thrilling intense powerful dance party",
            &sentiment(Sentiment::Positive),
        );
        assert_eq!(level, EnergyLevel::MAX);
    }
}
