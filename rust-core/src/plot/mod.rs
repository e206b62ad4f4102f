//! Plotting capability for visualizing signals and spectra
//!
//! The DSP operations never call into this module. A front end produces the
//! point series here and hands them to whatever `Plotter` it drives
//! (e.g. a graphing tool fed through a whitespace-delimited data file).

use crate::audio::SampleBuffer;
use crate::error::Result;
use std::io::Write;

/// Zoom window used for time-domain plots by default (milliseconds)
pub const DEFAULT_SIGNAL_ZOOM_MS: f64 = 20.0;

/// Presentation options for a single plot
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Plot title
    pub title: String,

    /// X-axis label
    pub x_label: String,

    /// Y-axis label
    pub y_label: String,

    /// Use a logarithmic y-axis
    pub log_scale_y: bool,

    /// Only show the first N milliseconds of the x-axis
    pub zoom_window_ms: Option<f64>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            log_scale_y: false,
            zoom_window_ms: None,
        }
    }
}

impl PlotOptions {
    /// Time-domain plot: amplitude over seconds, zoomed to the first 20 ms
    pub fn signal(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: "Time (s)".to_string(),
            y_label: "Amplitude".to_string(),
            log_scale_y: false,
            zoom_window_ms: Some(DEFAULT_SIGNAL_ZOOM_MS),
        }
    }

    /// Frequency-domain plot: magnitude over Hz on a log scale, no zoom
    pub fn spectrum(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: "Frequency (Hz)".to_string(),
            y_label: "Magnitude".to_string(),
            log_scale_y: true,
            zoom_window_ms: None,
        }
    }

    /// X-axis range in seconds implied by the zoom window
    ///
    /// `None` when no zoom is set or the window is not positive.
    pub fn zoom_range_seconds(&self) -> Option<(f64, f64)> {
        match self.zoom_window_ms {
            Some(ms) if ms > 0.0 => Some((0.0, ms / 1000.0)),
            _ => None,
        }
    }
}

/// Renders point series
pub trait Plotter {
    /// Render (time s, amplitude) pairs
    fn render_time_series(&mut self, points: &[(f64, f64)], options: &PlotOptions) -> Result<()>;

    /// Render (frequency Hz, magnitude) pairs
    fn render_spectrum(&mut self, points: &[(f64, f64)], options: &PlotOptions) -> Result<()>;
}

/// (time s, amplitude) pairs for every sample
pub fn time_series(buffer: &SampleBuffer) -> Vec<(f64, f64)> {
    let sample_rate = buffer.sample_rate() as f64;
    buffer
        .samples()
        .iter()
        .enumerate()
        .map(|(i, &s)| (i as f64 / sample_rate, s))
        .collect()
}

/// Write points as whitespace-delimited data, one `x y` pair per line
pub fn write_series<W: Write>(writer: &mut W, points: &[(f64, f64)]) -> Result<()> {
    for &(x, y) in points {
        writeln!(writer, "{:.6} {:.6}", x, y)?;
    }
    writer.flush()?;
    Ok(())
}
