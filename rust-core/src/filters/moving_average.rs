//! Causal simple moving average (SMA)
//!
//! Running-sum implementation, O(n) regardless of window size.

use crate::audio::SampleBuffer;

/// Smooth `buffer` in place with a moving average of `window_size` samples
///
/// `window_size <= 1` leaves the buffer untouched.
///
/// Outputs for `i < window_size` all use the sum of the first window,
/// `buffer[0..window_size)`, divided by the full window size. From
/// `i = window_size` onwards the sum slides one sample at a time, so
/// `output[i]` averages `buffer[i - window_size + 1..=i]`.
pub fn apply_moving_average(buffer: &mut SampleBuffer, window_size: usize) {
    if window_size <= 1 {
        return;
    }

    let smoothed = moving_average(buffer.samples(), window_size);
    buffer.samples_mut().copy_from_slice(&smoothed);

    log::debug!(
        "Applied moving average: window {} over {} samples",
        window_size,
        buffer.len()
    );
}

/// Compute the smoothed signal into a new vector (input is read-only)
fn moving_average(input: &[f64], window_size: usize) -> Vec<f64> {
    let window = window_size as f64;
    let mut sum: f64 = input.iter().take(window_size).sum();
    let mut output = Vec::with_capacity(input.len());

    for i in 0..input.len() {
        if i >= window_size {
            sum += input[i] - input[i - window_size];
        }
        output.push(sum / window);
    }

    output
}
