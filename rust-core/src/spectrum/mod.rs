//! FFT engine and spectrum extraction

pub mod fft;
pub mod analysis;

pub use fft::{fft, ifft, next_power_of_two, transform, ComplexValue, Direction};
pub use analysis::{compute_spectrum, Spectrum};
