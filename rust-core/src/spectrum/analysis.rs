//! Spectrum extraction for visualization
//!
//! Zero-pads a sample buffer to the next power of two and forward-transforms
//! it, handing the full complex spectrum back to the caller

use super::fft::{fft, next_power_of_two, ComplexValue};
use crate::audio::SampleBuffer;
use crate::error::{DspError, Result};

/// Complex spectrum of a real-valued sample buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// All `fft_size` bins, including the mirrored upper half
    bins: Vec<ComplexValue>,

    /// Sample rate of the originating buffer in Hz
    sample_rate: u32,
}

impl Spectrum {
    /// FFT size (power of two)
    pub fn fft_size(&self) -> usize {
        self.bins.len()
    }

    pub fn bins(&self) -> &[ComplexValue] {
        &self.bins
    }

    pub fn into_bins(self) -> Vec<ComplexValue> {
        self.bins
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of bins in the non-redundant half (fft_size/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.fft_size() / 2 + 1
    }

    /// Frequency of bin `k` in Hz
    pub fn bin_frequency(&self, k: usize) -> f64 {
        k as f64 * self.sample_rate as f64 / self.fft_size() as f64
    }

    /// |X[k]| for k = 0..=fft_size/2
    pub fn magnitudes(&self) -> Vec<f64> {
        self.visible_bins().iter().map(|c| c.norm()).collect()
    }

    /// arg X[k] in radians for k = 0..=fft_size/2
    pub fn phases(&self) -> Vec<f64> {
        self.visible_bins().iter().map(|c| c.arg()).collect()
    }

    /// (frequency Hz, magnitude) pairs for k = 0..=fft_size/2
    pub fn magnitude_series(&self) -> Vec<(f64, f64)> {
        self.visible_bins()
            .iter()
            .enumerate()
            .map(|(k, c)| (self.bin_frequency(k), c.norm()))
            .collect()
    }

    /// Bin with the largest magnitude in the non-redundant half
    ///
    /// Ties resolve to the lowest bin.
    pub fn peak_bin(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (k, c) in self.visible_bins().iter().enumerate() {
            let mag = c.norm();
            match best {
                Some((_, best_mag)) if mag <= best_mag => {}
                _ => best = Some((k, mag)),
            }
        }
        best.map(|(k, _)| k)
    }

    fn visible_bins(&self) -> &[ComplexValue] {
        let end = self.num_bins().min(self.bins.len());
        &self.bins[..end]
    }
}

/// Compute the spectrum of a sample buffer
///
/// The buffer is zero-padded to `next_power_of_two(len)` and forward
/// transformed without windowing.
///
/// # Errors
/// `DspError::EmptyBuffer` if the buffer holds no samples.
pub fn compute_spectrum(buffer: &SampleBuffer) -> Result<Spectrum> {
    if buffer.is_empty() {
        return Err(DspError::EmptyBuffer);
    }

    let bins = forward_padded(buffer.samples())?;
    log::debug!(
        "Computed spectrum: {} samples padded to {} bins at {} Hz",
        buffer.len(),
        bins.len(),
        buffer.sample_rate()
    );

    Ok(Spectrum {
        bins,
        sample_rate: buffer.sample_rate(),
    })
}

/// Copy real samples into a zero-padded complex buffer and forward transform it
pub(crate) fn forward_padded(samples: &[f64]) -> Result<Vec<ComplexValue>> {
    let fft_size = next_power_of_two(samples.len())?;

    let mut spectrum = vec![ComplexValue::new(0.0, 0.0); fft_size];
    for (bin, &sample) in spectrum.iter_mut().zip(samples.iter()) {
        bin.re = sample;
    }

    fft(&mut spectrum)?;
    Ok(spectrum)
}
