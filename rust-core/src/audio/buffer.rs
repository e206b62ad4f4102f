//! Mono sample buffer with format metadata
//!
//! Amplitudes are normalized floating-point values, expected in [-1.0, 1.0]
//! when handed over by the WAV reader

use crate::error::{DspError, Result};

/// Default bit depth reported for buffers created from raw samples
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// Owned buffer of normalized mono samples
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Normalized amplitudes
    samples: Vec<f64>,

    /// Sample rate in Hz (always positive)
    sample_rate: u32,

    /// Channel count of the source material (the core only sees one)
    channel_count: u16,

    /// PCM bit depth of the source, informational only
    bits_per_sample: u16,
}

impl SampleBuffer {
    /// Create a mono 16-bit buffer
    ///
    /// # Arguments
    /// * `samples` - Normalized amplitudes
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Result<Self> {
        Self::with_format(samples, sample_rate, 1, DEFAULT_BITS_PER_SAMPLE)
    }

    /// Create a buffer carrying explicit format metadata
    pub fn with_format(
        samples: Vec<f64>,
        sample_rate: u32,
        channel_count: u16,
        bits_per_sample: u16,
    ) -> Result<Self> {
        if sample_rate == 0 {
            return Err(DspError::InvalidSampleRate(sample_rate));
        }
        if channel_count == 0 {
            return Err(DspError::InvalidChannelCount(channel_count));
        }

        Ok(Self {
            samples,
            sample_rate,
            channel_count,
            bits_per_sample,
        })
    }

    /// Create a buffer of `len` zero samples
    pub fn silence(len: usize, sample_rate: u32) -> Result<Self> {
        Self::new(vec![0.0; len], sample_rate)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// Consume the buffer, returning the amplitudes
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute amplitude (0.0 for an empty buffer)
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |peak, &s| peak.max(s.abs()))
    }

    /// Copy of the format metadata with new samples
    pub(crate) fn with_samples(&self, samples: Vec<f64>) -> Self {
        Self {
            samples,
            sample_rate: self.sample_rate,
            channel_count: self.channel_count,
            bits_per_sample: self.bits_per_sample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let buffer = SampleBuffer::new(vec![0.1, -0.2, 0.3], 44100).unwrap();

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.sample_rate(), 44100);
        assert_eq!(buffer.channel_count(), 1);
        assert_eq!(buffer.bits_per_sample(), 16);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        let err = SampleBuffer::new(vec![0.0; 4], 0).unwrap_err();
        assert!(matches!(err, DspError::InvalidSampleRate(0)));
    }

    #[test]
    fn test_rejects_zero_channels() {
        let err = SampleBuffer::with_format(vec![0.0; 4], 8000, 0, 16).unwrap_err();
        assert!(matches!(err, DspError::InvalidChannelCount(0)));
    }

    #[test]
    fn test_peak_and_duration() {
        let buffer = SampleBuffer::new(vec![0.25, -0.75, 0.5, 0.0], 4).unwrap();

        assert_eq!(buffer.peak(), 0.75);
        assert!((buffer.duration_seconds() - 1.0).abs() < 1e-12);

        let empty = SampleBuffer::silence(0, 8000).unwrap();
        assert_eq!(empty.peak(), 0.0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_with_samples_keeps_format() {
        let buffer = SampleBuffer::with_format(vec![0.0; 2], 22050, 2, 24).unwrap();
        let replaced = buffer.with_samples(vec![0.5; 5]);

        assert_eq!(replaced.len(), 5);
        assert_eq!(replaced.sample_rate(), 22050);
        assert_eq!(replaced.channel_count(), 2);
        assert_eq!(replaced.bits_per_sample(), 24);
        assert_eq!(replaced.into_samples(), vec![0.5; 5]);
    }
}
