//! Brick-wall low-pass / high-pass filtering in the frequency domain
//!
//! The whole buffer is transformed at once: zero-pad to a power of two,
//! zero the excluded bins (and their conjugate mirrors), inverse transform,
//! then truncate back to the original length.

use crate::audio::SampleBuffer;
use crate::error::{DspError, Result};
use crate::spectrum::analysis::forward_padded;
use crate::spectrum::fft::{ifft, ComplexValue};
use std::fmt;
use std::str::FromStr;

/// Which side of the cutoff is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep bins at or below the cutoff
    LowPass,

    /// Keep bins at or above the cutoff
    HighPass,
}

impl FilterMode {
    /// Whether a bin at `freq_hz` is removed for the given cutoff
    pub fn excludes(self, freq_hz: f64, cutoff_hz: f64) -> bool {
        match self {
            FilterMode::LowPass => freq_hz > cutoff_hz,
            FilterMode::HighPass => freq_hz < cutoff_hz,
        }
    }
}

impl FromStr for FilterMode {
    type Err = DspError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" | "lowpass" | "low-pass" => Ok(FilterMode::LowPass),
            "high" | "highpass" | "high-pass" => Ok(FilterMode::HighPass),
            _ => Err(DspError::UnknownFilterMode(s.to_string())),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::LowPass => write!(f, "low-pass"),
            FilterMode::HighPass => write!(f, "high-pass"),
        }
    }
}

/// Cutoff and mode for a spectral filter pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandFilterSpec {
    /// Cutoff frequency in Hz
    pub cutoff_hz: f64,

    /// Filter mode
    pub mode: FilterMode,
}

impl BandFilterSpec {
    pub fn low_pass(cutoff_hz: f64) -> Self {
        Self {
            cutoff_hz,
            mode: FilterMode::LowPass,
        }
    }

    pub fn high_pass(cutoff_hz: f64) -> Self {
        Self {
            cutoff_hz,
            mode: FilterMode::HighPass,
        }
    }

    /// Check that the cutoff is finite
    ///
    /// Negative cutoffs are accepted: high-pass then keeps every bin and
    /// low-pass removes every bin.
    pub fn validate(&self) -> Result<()> {
        if !self.cutoff_hz.is_finite() {
            return Err(DspError::InvalidCutoff(self.cutoff_hz));
        }
        Ok(())
    }

    /// Filter `buffer` in place
    pub fn apply(&self, buffer: &mut SampleBuffer) -> Result<()> {
        apply_band_filter(buffer, self.cutoff_hz, self.mode)
    }
}

/// Filter a sample buffer in place
///
/// # Arguments
/// * `buffer` - Samples to filter; length is unchanged
/// * `cutoff_hz` - Cutoff frequency in Hz
/// * `mode` - Keep the band below (`LowPass`) or above (`HighPass`) the cutoff
///
/// # Errors
/// `DspError::EmptyBuffer` for an empty buffer, `DspError::InvalidCutoff` for
/// a NaN or infinite cutoff. The buffer is not modified on error.
pub fn apply_band_filter(buffer: &mut SampleBuffer, cutoff_hz: f64, mode: FilterMode) -> Result<()> {
    if buffer.is_empty() {
        return Err(DspError::EmptyBuffer);
    }
    BandFilterSpec { cutoff_hz, mode }.validate()?;

    let mut spectrum = forward_padded(buffer.samples())?;
    let fft_size = spectrum.len();
    let half = fft_size / 2;
    let sample_rate = buffer.sample_rate() as f64;
    let zero = ComplexValue::new(0.0, 0.0);

    let mut zeroed = 0usize;
    for k in 0..=half {
        let freq = k as f64 * sample_rate / fft_size as f64;
        if !mode.excludes(freq, cutoff_hz) {
            continue;
        }

        spectrum[k] = zero;
        // Mirror bin keeps the spectrum conjugate-symmetric so the result stays real
        if k > 0 && k < half {
            spectrum[fft_size - k] = zero;
        }
        zeroed += 1;
    }

    log::debug!(
        "Applying {} filter at {:.2} Hz: {} samples, fft size {}, {} of {} bins zeroed",
        mode,
        cutoff_hz,
        buffer.len(),
        fft_size,
        zeroed,
        half + 1
    );

    ifft(&mut spectrum)?;

    for (sample, bin) in buffer.samples_mut().iter_mut().zip(spectrum.iter()) {
        *sample = bin.re;
    }

    Ok(())
}
