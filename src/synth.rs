use crate::error::Error;
use crate::models::AudioSynthesizer;
use crate::types::{AudioClip, EnergyLevel, KeyQuality, MusicalParameters};

// C4-rooted triads used by the offline renderer.
const MAJOR_TRIAD_HZ: [f32; 3] = [261.63, 329.63, 392.00];
const MINOR_TRIAD_HZ: [f32; 3] = [261.63, 311.13, 392.00];

const PARTIAL_GAIN: f32 = 0.2;
const ENVELOPE_DECAY: f32 = 2.0;

/// Offline triad-pulse renderer used when no synthesis worker is reachable.
/// Pulses a major or minor triad at eighth-note duration for the requested
/// tempo, with an exponential decay envelope per pulse.
#[derive(Debug, Clone)]
pub struct ChordSynthesizer {
    sample_rate: u32,
    duration_seconds: u32,
}

impl ChordSynthesizer {
    pub fn new(sample_rate: u32, duration_seconds: u32) -> Self {
        Self { sample_rate, duration_seconds }
    }
}

impl AudioSynthesizer for ChordSynthesizer {
    fn synthesize(&self, parameters: &MusicalParameters) -> Result<AudioClip, Error> {
        let triad = match parameters.key_quality {
            KeyQuality::Major => MAJOR_TRIAD_HZ,
            KeyQuality::Minor => MINOR_TRIAD_HZ,
        };
        let beat_seconds = 60.0 / f32::from(parameters.tempo_bpm.max(1));
        let note_seconds = beat_seconds / 2.0;
        let note_samples = ((self.sample_rate as f32 * note_seconds) as usize).max(1);
        let total_samples = (self.sample_rate as u64 * u64::from(self.duration_seconds)) as usize;

        let mut samples = vec![0.0f32; total_samples];
        let mut offset = 0;
        while offset < total_samples {
            let chunk = note_samples.min(total_samples - offset);
            for index in 0..chunk {
                let t = index as f32 / self.sample_rate as f32;
                let envelope = (-t * ENVELOPE_DECAY).exp();
                let mut value = 0.0f32;
                for frequency in triad {
                    value += (2.0 * std::f32::consts::PI * frequency * t).sin() * PARTIAL_GAIN;
                }
                samples[offset + index] = value * envelope;
            }
            offset += chunk;
        }

        Ok(AudioClip { samples, sample_rate: self.sample_rate })
    }
}

/// Post-processing applied to every rendered clip: peak normalization with a
/// zero guard, a fixed volume factor, an energy-scaled gain and a final
/// clamp to [-1, 1].
#[derive(Debug, Clone)]
pub struct PostProcessor {
    volume_factor: f32,
    normalize: bool,
}

impl PostProcessor {
    pub fn new(volume_factor: f32, normalize: bool) -> Self {
        Self { volume_factor, normalize }
    }

    pub fn process(&self, mut clip: AudioClip, energy: EnergyLevel) -> AudioClip {
        if self.normalize {
            let peak = clip.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
            if peak > 0.0 {
                for sample in &mut clip.samples {
                    *sample = *sample / peak * self.volume_factor;
                }
            }
        }
        // Energy 1-10 maps to gain 0.37-1.0.
        let energy_gain = 0.3 + f32::from(energy.get()) / 10.0 * 0.7;
        for sample in &mut clip.samples {
            *sample = (*sample * energy_gain).clamp(-1.0, 1.0);
        }
        clip
    }
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self { volume_factor: 0.7, normalize: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::ParameterMapper;
    use crate::types::{MoodCategory, SentimentResult};

    fn parameters(mood: MoodCategory, energy: u8) -> MusicalParameters {
        ParameterMapper::new().map(
            mood,
            EnergyLevel::new(energy).unwrap(),
            &SentimentResult::neutral(),
        )
    }

    #[test]
    fn renders_exact_duration_at_sample_rate() {
        let synth = ChordSynthesizer::new(8_000, 2);
        let clip = synth.synthesize(&parameters(MoodCategory::Happy, 5)).unwrap();
        assert_eq!(clip.samples.len(), 16_000);
        assert_eq!(clip.sample_rate, 8_000);
        assert!((clip.duration_seconds() - 2.0).abs() < 1e-3);
    }

    #[test]
    fn rendered_audio_is_not_silent() {
        let synth = ChordSynthesizer::new(8_000, 1);
        let clip = synth.synthesize(&parameters(MoodCategory::Sad, 5)).unwrap();
        assert!(clip.samples.iter().any(|sample| sample.abs() > 0.01));
    }

    #[test]
    fn major_and_minor_render_differently() {
        let synth = ChordSynthesizer::new(8_000, 1);
        let major = synth.synthesize(&parameters(MoodCategory::Happy, 5)).unwrap();
        let minor = synth.synthesize(&parameters(MoodCategory::Sad, 5)).unwrap();
        assert_ne!(major.samples, minor.samples);
    }

    #[test]
    fn post_processing_keeps_samples_in_range() {
        let processor = PostProcessor::default();
        let clip = AudioClip { samples: vec![3.0, -2.5, 0.4, 0.0], sample_rate: 8_000 };
        let processed = processor.process(clip, EnergyLevel::MAX);
        assert!(processed.samples.iter().all(|sample| (-1.0..=1.0).contains(sample)));
    }

    #[test]
    fn higher_energy_renders_louder() {
        let processor = PostProcessor::new(1.0, false);
        let clip = AudioClip { samples: vec![0.5; 8], sample_rate: 8_000 };
        let quiet = processor.process(clip.clone(), EnergyLevel::MIN);
        let loud = processor.process(clip, EnergyLevel::MAX);
        assert!(loud.samples[0] > quiet.samples[0]);
    }

    #[test]
    fn silence_survives_normalization() {
        let processor = PostProcessor::default();
        let clip = AudioClip { samples: vec![0.0; 16], sample_rate: 8_000 };
        let processed = processor.process(clip, EnergyLevel::new(5).unwrap());
        assert!(processed.samples.iter().all(|sample| *sample == 0.0));
    }
}
