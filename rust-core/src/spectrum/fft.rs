//! Radix-2 FFT engine for complete in-memory buffers
//!
//! Iterative Cooley-Tukey: bit-reversal reorder followed by butterfly stages,
//! operating in place on a power-of-two buffer

use crate::error::{DspError, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Complex value the transform engine operates on
pub type ComplexValue = Complex64;

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time domain to frequency domain (unscaled)
    Forward,

    /// Frequency domain to time domain (scaled by 1/N)
    Inverse,
}

impl Direction {
    /// Sign of the twiddle exponent
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// Smallest power of two that is >= `n`
///
/// `n = 0` yields 1, the same as `n = 1`.
///
/// # Errors
/// `DspError::InvalidLength` if that power of two does not fit in `usize`.
pub fn next_power_of_two(n: usize) -> Result<usize> {
    n.checked_next_power_of_two().ok_or(DspError::InvalidLength {
        len: n,
        reason: "no power of two at or above this length fits in usize",
    })
}

/// Transform `data` in place
///
/// # Arguments
/// * `data` - Buffer whose length is zero or a power of two
/// * `direction` - Forward or inverse transform
///
/// # Errors
/// `DspError::InvalidLength` if the length is not a power of two. The buffer
/// is left untouched in that case.
pub fn transform(data: &mut [ComplexValue], direction: Direction) -> Result<()> {
    let n = data.len();
    if n == 0 {
        return Ok(());
    }
    if !n.is_power_of_two() {
        return Err(DspError::InvalidLength {
            len: n,
            reason: "transform length must be a power of two",
        });
    }

    bit_reverse_permute(data);

    let mut len = 2;
    while len <= n {
        let angle = direction.sign() * 2.0 * PI / len as f64;
        let wlen = ComplexValue::new(angle.cos(), angle.sin());
        let half = len / 2;

        for block in data.chunks_exact_mut(len) {
            let (lower, upper) = block.split_at_mut(half);
            let mut w = ComplexValue::new(1.0, 0.0);

            for (a, b) in lower.iter_mut().zip(upper.iter_mut()) {
                let u = *a;
                let v = *b * w;
                *a = u + v;
                *b = u - v;
                w *= wlen;
            }
        }

        len <<= 1;
    }

    if direction == Direction::Inverse {
        let scale = n as f64;
        for value in data.iter_mut() {
            *value /= scale;
        }
    }

    Ok(())
}

/// Forward FFT in place
pub fn fft(data: &mut [ComplexValue]) -> Result<()> {
    transform(data, Direction::Forward)
}

/// Inverse FFT in place, including the 1/N scaling
pub fn ifft(data: &mut [ComplexValue]) -> Result<()> {
    transform(data, Direction::Inverse)
}

/// Reorder elements by the bit-reversal of their index
///
/// Incremental walk: `j` tracks the reversed counterpart of `i`. Swapping
/// only when `i < j` visits every pair exactly once.
fn bit_reverse_permute(data: &mut [ComplexValue]) {
    let n = data.len();
    let mut j = 0usize;

    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;

        if i < j {
            data.swap(i, j);
        }
    }
}
