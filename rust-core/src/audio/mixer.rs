//! Two-buffer mixer with peak normalization

use super::buffer::SampleBuffer;
use crate::error::{DspError, Result};

/// Mix two buffers into a new one
///
/// The shorter input is zero-extended to the longer one's length. If the sum
/// peaks above 1.0 the whole mix is scaled down by `1/peak`; quieter mixes
/// are left as they are. Format metadata is taken from `a`.
///
/// # Errors
/// `DspError::SampleRateMismatch` if the inputs were sampled at different rates.
pub fn mix(a: &SampleBuffer, b: &SampleBuffer) -> Result<SampleBuffer> {
    if a.sample_rate() != b.sample_rate() {
        return Err(DspError::SampleRateMismatch {
            left: a.sample_rate(),
            right: b.sample_rate(),
        });
    }
    if a.channel_count() != b.channel_count() || a.bits_per_sample() != b.bits_per_sample() {
        log::warn!(
            "Mixing buffers with different formats ({} ch/{} bit vs {} ch/{} bit), keeping the first",
            a.channel_count(),
            a.bits_per_sample(),
            b.channel_count(),
            b.bits_per_sample()
        );
    }

    let left = a.samples();
    let right = b.samples();
    let output_len = left.len().max(right.len());

    let mut mixed: Vec<f64> = (0..output_len)
        .map(|i| {
            let s1 = left.get(i).copied().unwrap_or(0.0);
            let s2 = right.get(i).copied().unwrap_or(0.0);
            s1 + s2
        })
        .collect();

    let peak = mixed.iter().fold(0.0_f64, |peak, &s| peak.max(s.abs()));

    if peak > 1.0 {
        let norm_factor = 1.0 / peak;
        for sample in mixed.iter_mut() {
            *sample *= norm_factor;
        }
        log::debug!("Mixed {} samples, peak {:.4} normalized by {:.4}", output_len, peak, norm_factor);
    } else {
        log::debug!("Mixed {} samples, peak {:.4} within range", output_len, peak);
    }

    Ok(a.with_samples(mixed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn buffer(samples: &[f64]) -> SampleBuffer {
        SampleBuffer::new(samples.to_vec(), 8000).unwrap()
    }

    #[test]
    fn test_mix_normalizes_clipping_sum() {
        let a = buffer(&[0.5, 0.5, 0.5]);
        let b = buffer(&[0.6, 0.6, 0.6]);

        let mixed = mix(&a, &b).unwrap();

        assert_eq!(mixed.len(), 3);
        for &s in mixed.samples() {
            assert_abs_diff_eq!(s, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_quiet_mix_not_amplified() {
        let a = buffer(&[0.1, -0.2]);
        let b = buffer(&[0.2, 0.1]);

        let mixed = mix(&a, &b).unwrap();

        assert_abs_diff_eq!(mixed.samples()[0], 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(mixed.samples()[1], -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_extends_shorter_input() {
        let a = buffer(&[0.25]);
        let b = buffer(&[0.25, 0.5, -0.5]);

        let mixed = mix(&a, &b).unwrap();

        assert_eq!(mixed.samples(), &[0.5, 0.5, -0.5]);
        // Inputs untouched
        assert_eq!(a.samples(), &[0.25]);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_negative_peak_normalization() {
        let a = buffer(&[-0.9, 0.2]);
        let b = buffer(&[-0.9, 0.2]);

        let mixed = mix(&a, &b).unwrap();

        assert_abs_diff_eq!(mixed.samples()[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mixed.samples()[1], 0.4 / 1.8, epsilon = 1e-12);
    }

    #[test]
    fn test_metadata_from_first_input() {
        let a = SampleBuffer::with_format(vec![0.1; 2], 8000, 1, 16).unwrap();
        let b = SampleBuffer::with_format(vec![0.1; 4], 8000, 2, 24).unwrap();

        let mixed = mix(&a, &b).unwrap();

        assert_eq!(mixed.len(), 4);
        assert_eq!(mixed.channel_count(), 1);
        assert_eq!(mixed.bits_per_sample(), 16);
    }

    #[test]
    fn test_rejects_sample_rate_mismatch() {
        let a = SampleBuffer::new(vec![0.1], 44100).unwrap();
        let b = SampleBuffer::new(vec![0.1], 48000).unwrap();

        let err = mix(&a, &b).unwrap_err();
        assert!(matches!(err, DspError::SampleRateMismatch { left: 44100, right: 48000 }));
    }

    #[test]
    fn test_mix_empty_buffers() {
        let mixed = mix(&buffer(&[]), &buffer(&[])).unwrap();
        assert!(mixed.is_empty());
    }
}
