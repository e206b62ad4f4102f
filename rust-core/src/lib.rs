//! Spectral DSP - Offline Audio DSP Core
//!
//! Whole-buffer processing of normalized mono audio: radix-2 FFT, brick-wall
//! spectral filtering, moving-average smoothing, peak-normalized mixing and
//! spectrum extraction for plotting.

pub mod audio;
pub mod error;
pub mod filters;
pub mod plot;
pub mod spectrum;

pub use audio::{mix, SampleBuffer};
pub use error::{DspError, Result};
pub use filters::{apply_band_filter, apply_moving_average, BandFilterSpec, FilterMode};
pub use plot::{PlotOptions, Plotter};
pub use spectrum::{compute_spectrum, fft, ifft, next_power_of_two, transform, ComplexValue, Direction, Spectrum};
