//! Whole-buffer filters: FFT band filter and moving average

pub mod spectral;
pub mod moving_average;

pub use spectral::{apply_band_filter, BandFilterSpec, FilterMode};
pub use moving_average::apply_moving_average;
