//! Error types for the DSP core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DspError {
    #[error("Invalid buffer length {len}: {reason}")]
    InvalidLength { len: usize, reason: &'static str },

    #[error("Invalid sample rate: {0} Hz (must be positive)")]
    InvalidSampleRate(u32),

    #[error("Invalid channel count: {0}")]
    InvalidChannelCount(u16),

    #[error("Sample buffer is empty")]
    EmptyBuffer,

    #[error("Invalid cutoff frequency: {0} Hz (must be finite)")]
    InvalidCutoff(f64),

    #[error("Unknown filter mode '{0}' (expected 'low' or 'high')")]
    UnknownFilterMode(String),

    #[error("Cannot mix buffers with different sample rates ({left} Hz vs {right} Hz)")]
    SampleRateMismatch { left: u32, right: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DspError>;
