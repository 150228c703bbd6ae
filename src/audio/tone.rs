//! Tone synthesis for chimes.

use std::f32::consts::TAU;
use std::time::Duration;

use rodio::Source;

/// Output sample rate for synthesized chimes.
pub const SAMPLE_RATE: u32 = 44_100;

/// Oscillator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

impl Waveform {
    /// Amplitude in -1.0..=1.0 at `phase` (fraction of a cycle, 0.0..1.0).
    #[must_use]
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Self::Sine => (TAU * phase).sin(),
            Self::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
        }
    }
}

/// A single chime: an oscillator shaped by an attack/decay envelope.
///
/// Gain rises linearly from silence to `peak` over `attack`, then falls
/// exponentially to `floor` at `length`, where the tone stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chime {
    pub waveform: Waveform,
    pub frequency_hz: f32,
    pub peak: f32,
    pub attack: Duration,
    pub floor: f32,
    pub length: Duration,
}

impl Chime {
    /// Triangle wave at 440 Hz, slow swell, four seconds long.
    #[must_use]
    pub const fn alert() -> Self {
        Self {
            waveform: Waveform::Triangle,
            frequency_hz: 440.0,
            peak: 0.3,
            attack: Duration::from_millis(500),
            floor: 0.001,
            length: Duration::from_secs(4),
        }
    }

    /// Sine wave at 528 Hz, bell-like attack, three seconds long.
    #[must_use]
    pub const fn zen() -> Self {
        Self {
            waveform: Waveform::Sine,
            frequency_hz: 528.0,
            peak: 0.5,
            attack: Duration::from_millis(100),
            floor: 0.01,
            length: Duration::from_secs(3),
        }
    }

    /// Envelope gain `t` seconds into the chime.
    #[must_use]
    pub fn gain_at(&self, t: f32) -> f32 {
        let attack = self.attack.as_secs_f32();
        let length = self.length.as_secs_f32();

        if !(0.0..length).contains(&t) {
            return 0.0;
        }
        if t < attack {
            return self.peak * t / attack;
        }

        let progress = (t - attack) / (length - attack).max(f32::EPSILON);
        self.peak * (self.floor / self.peak).powf(progress)
    }

    /// A playable source for this chime.
    #[must_use]
    pub fn tone(&self) -> Tone {
        Tone::new(*self, SAMPLE_RATE)
    }
}

/// Mono sample stream for one chime.
#[derive(Debug, Clone)]
pub struct Tone {
    chime: Chime,
    sample_rate: u32,
    index: u64,
    total: u64,
}

impl Tone {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(chime: Chime, sample_rate: u32) -> Self {
        let total = (chime.length.as_secs_f64() * f64::from(sample_rate)) as u64;
        Self {
            chime,
            sample_rate,
            index: 0,
            total,
        }
    }

    /// Total number of samples in the tone.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Iterator for Tone {
    type Item = f32;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<f32> {
        if self.index >= self.total {
            return None;
        }

        let t = self.index as f32 / self.sample_rate as f32;
        let phase = (t * self.chime.frequency_hz).fract();
        self.index += 1;

        Some(self.chime.waveform.sample(phase) * self.chime.gain_at(t))
    }
}

impl Source for Tone {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.chime.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_waveform_sine() {
        assert!(close(Waveform::Sine.sample(0.0), 0.0));
        assert!(close(Waveform::Sine.sample(0.25), 1.0));
        assert!(close(Waveform::Sine.sample(0.75), -1.0));
    }

    #[test]
    fn test_waveform_triangle() {
        assert!(close(Waveform::Triangle.sample(0.0), -1.0));
        assert!(close(Waveform::Triangle.sample(0.25), 0.0));
        assert!(close(Waveform::Triangle.sample(0.5), 1.0));
    }

    #[test]
    fn test_envelope_attack() {
        let chime = Chime::alert();
        assert!(close(chime.gain_at(0.0), 0.0));
        assert!(close(chime.gain_at(0.25), 0.15));
        assert!(close(chime.gain_at(0.5), 0.3));
    }

    #[test]
    fn test_envelope_decay() {
        let chime = Chime::zen();
        let mid = chime.gain_at(1.5);
        assert!(mid < 0.5 && mid > 0.01);
        assert!(chime.gain_at(2.999) < 0.011);
        assert!(close(chime.gain_at(3.0), 0.0));
        assert!(close(chime.gain_at(-1.0), 0.0));
    }

    #[test]
    fn test_tone_length() {
        let tone = Chime::zen().tone();
        assert_eq!(tone.len(), 3 * u64::from(SAMPLE_RATE));
        assert_eq!(tone.total_duration(), Some(Duration::from_secs(3)));
        assert_eq!(tone.channels(), 1);
    }

    #[test]
    fn test_tone_samples_within_peak() {
        let chime = Chime::alert();
        let tone = Tone::new(chime, 8_000);
        let mut count = 0;
        for sample in tone {
            assert!(sample.abs() <= chime.peak + 1e-6);
            count += 1;
        }
        assert_eq!(count, 32_000);
    }
}
